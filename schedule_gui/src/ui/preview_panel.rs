//! Preview panel
//!
//! Shows the rendered poster and the export buttons. While an export is
//! in flight both buttons are disabled and display a busy label; the
//! in-flight flag lives on the `App` and is cleared by the completion
//! message, success or failure.

use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Padding};

use schedule_core::export::ImageFormat;

use crate::Message;

/// Render the preview column with the export bar on top
pub fn view(preview: Option<&Handle>, exporting: bool) -> Element<'_, Message> {
    let export_bar = row![
        Space::new().width(Length::Fill),
        export_button("JPG", ImageFormat::Jpeg, exporting, button::secondary),
        export_button("Download HD PNG", ImageFormat::Png, exporting, button::primary),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let preview_content: Element<'_, Message> = match preview {
        Some(handle) => scrollable(image(handle.clone()).width(Length::Fill)).into(),
        None => container(
            text("Preview unavailable")
                .size(12)
                .color([0.5, 0.5, 0.5]),
        )
        .center(Length::Fill)
        .into(),
    };

    column![
        export_bar,
        container(preview_content)
            .style(container::bordered_box)
            .padding(8)
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .spacing(8)
    .width(Length::Fill)
    .into()
}

fn export_button(
    label: &'static str,
    format: ImageFormat,
    exporting: bool,
    style: impl Fn(&iced::Theme, button::Status) -> button::Style + 'static,
) -> Element<'static, Message> {
    let label = if exporting { "Exporting..." } else { label };
    button(text(label).size(11))
        .on_press_maybe((!exporting).then_some(Message::ExportImage(format)))
        .padding(Padding::from([6, 12]))
        .style(style)
        .into()
}
