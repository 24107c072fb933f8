//! Bus row editor
//!
//! Displays one card per bus row, each bound to the model through the
//! row's stable id. Rows can be added and removed freely; removing the
//! last row is allowed and the poster falls back to its placeholder.

use iced::widget::{button, column, container, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use schedule_core::schedule::{BusField, BusRow, Schedule};

use crate::Message;

/// Render the bus list editor
pub fn view(schedule: &Schedule) -> Element<'_, Message> {
    let header = row![
        text(format!("Buses ({})", schedule.bus_count())).size(14),
        Space::new().width(Length::Fill),
        button(text("+ Add Bus").size(11))
            .on_press(Message::AddBus)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .align_y(Alignment::Center);

    let mut cards: Column<'_, Message> = column![].spacing(8);
    for bus in &schedule.buses {
        cards = cards.push(view_bus_card(bus));
    }
    if schedule.buses.is_empty() {
        cards = cards.push(
            text("(no buses - the poster shows a placeholder)")
                .size(10)
                .color([0.5, 0.5, 0.5]),
        );
    }

    column![header, cards].spacing(8).into()
}

fn view_bus_card(bus: &BusRow) -> Element<'_, Message> {
    let row_id = bus.id;

    let top = row![
        field_input("Bus No.", &bus.bus_number, move |s| {
            Message::BusFieldChanged(row_id, BusField::BusNumber, s)
        }),
        field_input("Time (HH:MM)", &bus.time, move |s| {
            Message::BusFieldChanged(row_id, BusField::Time, s)
        }),
    ]
    .spacing(6);

    let middle = field_input("Route (From - To)", &bus.route, move |s| {
        Message::BusFieldChanged(row_id, BusField::Route, s)
    });

    let bottom = row![
        field_input("Price (Optional)", &bus.price, move |s| {
            Message::BusFieldChanged(row_id, BusField::Price, s)
        }),
        field_input("Contact (Optional)", &bus.contact, move |s| {
            Message::BusFieldChanged(row_id, BusField::Contact, s)
        }),
    ]
    .spacing(6);

    let remove = row![
        Space::new().width(Length::Fill),
        button(text("X").size(10))
            .on_press(Message::RemoveBus(row_id))
            .padding(Padding::from([2, 6]))
            .style(button::secondary),
    ];

    container(column![top, middle, bottom, remove].spacing(6))
        .style(container::bordered_box)
        .padding(8)
        .width(Length::Fill)
        .into()
}

fn field_input<'a>(
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(on_change)
        .width(Length::Fill)
        .padding(4)
        .size(11)
        .into()
}
