//! Landing screen
//!
//! Minimal start page; the only action is entering the editor.

use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the landing screen
pub fn view() -> Element<'static, Message> {
    let content = column![
        text("Schedulify").size(46),
        text("Styled bus schedule posters, exported in seconds.")
            .size(14)
            .color([0.55, 0.6, 0.7]),
        Space::new().height(24),
        button(text("Create Schedule").size(14))
            .on_press(Message::StartEditing)
            .padding(Padding::from([10, 24]))
            .style(button::primary),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    container(content).center(Length::Fill).into()
}
