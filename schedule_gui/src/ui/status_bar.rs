//! Status Bar (Bottom)
//!
//! Displays the live row count and the outcome of the last preview or
//! export operation.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(status: &str, bus_count: usize) -> Element<'_, Message> {
    row![
        text(format!("Total Buses: {}", bus_count)).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
