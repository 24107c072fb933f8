//! # schedule_core - Bus Schedule Poster Engine
//!
//! `schedule_core` is the engine behind Schedulify: it models an editable
//! bus schedule and renders it to a styled poster image. The same pure
//! render feeds the GUI's live preview and the exported file, so what you
//! see is exactly what you download.
//!
//! ## Design Philosophy
//!
//! - **Stateless rendering**: `render(model)` is a pure function; the
//!   preview and the export can never disagree
//! - **JSON-First**: the model implements Serialize/Deserialize
//! - **Defensive display**: malformed input degrades to placeholder text,
//!   never to an error
//! - **Rich Errors**: structured error types at the export boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use schedule_core::schedule::{BusField, Schedule};
//!
//! let mut schedule = Schedule::new();
//! schedule.set_company_name("Royal Travels");
//!
//! let id = schedule.buses[0].id;
//! schedule.set_field(&id, BusField::Time, "09:00");
//!
//! let json = serde_json::to_string_pretty(&schedule).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`schedule`] - The editable schedule model and its mutation contract
//! - [`format`] - Time/date display formatting with placeholder fallbacks
//! - [`poster`] - Pure model-to-document render and rasterization
//! - [`export`] - PNG/JPEG encoding and filename derivation
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic JSON and image file writes

pub mod errors;
pub mod export;
pub mod file_io;
pub mod format;
pub mod poster;
pub mod schedule;

// Re-export commonly used types at crate root for convenience
pub use errors::{ScheduleError, ScheduleResult};
pub use export::{export_filename, render_image, ImageFormat};
pub use schedule::{BusField, BusRow, Schedule};
