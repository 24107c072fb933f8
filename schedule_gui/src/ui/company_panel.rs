//! Input view for Company Details
//!
//! Displays fields for the company name and the service date.

use iced::widget::{column, row, text, text_input, Column};
use iced::{Alignment, Element, Length};

use schedule_core::schedule::Schedule;

use crate::Message;

/// Render the company details editor
pub fn view(schedule: &Schedule) -> Column<'_, Message> {
    column![
        text("Company Details").size(14),
        labeled_input(
            "Company:",
            "e.g. Royal Travels",
            &schedule.company_name,
            Message::CompanyNameChanged,
        ),
        labeled_input("Date:", "YYYY-MM-DD", &schedule.date, Message::DateChanged),
        text("The poster updates as you type.")
            .size(10)
            .color([0.5, 0.5, 0.5]),
    ]
    .spacing(6)
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(70.0)),
        text_input(placeholder, value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
