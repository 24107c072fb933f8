//! UI module for the Schedulify GUI
//!
//! # Panel Structure
//! - `landing` - Start screen with the "Create Schedule" entry point
//! - `company_panel` - Company name and date fields
//! - `buses_panel` - Dynamic bus row editor (add/remove/edit rows)
//! - `preview_panel` - Live poster preview and the export buttons
//! - `status_bar` - Bottom status messages and the row count

pub mod buses_panel;
pub mod company_panel;
pub mod landing;
pub mod preview_panel;
pub mod status_bar;
