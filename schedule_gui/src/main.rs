//! # Schedulify GUI Application
//!
//! Desktop editor for bus schedule posters, built with Iced. Two screens:
//! a landing page and the editor. The editor binds a form to the
//! `Schedule` model and re-renders the poster preview explicitly after
//! every mutation, so the preview always reflects the current model. The
//! export buttons run the same render at 2x through an async task gated
//! by a single in-flight flag.

use std::path::PathBuf;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Padding, Size, Task};
use uuid::Uuid;

use schedule_core::export::{self, ImageFormat};
use schedule_core::schedule::{BusField, Schedule};
use schedule_core::{file_io, poster};

mod ui;

/// Preview raster density: one pixel per layout unit
const PREVIEW_PIXELS_PER_PT: f32 = 1.0;

/// The two top-level views. Entering the editor creates a fresh model;
/// leaving it discards the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Landing,
    Editor,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    StartEditing,
    BackToLanding,

    // Schedule mutations
    CompanyNameChanged(String),
    DateChanged(String),
    AddBus,
    RemoveBus(Uuid),
    BusFieldChanged(Uuid, BusField, String),

    // Export pipeline
    ExportImage(ImageFormat),
    ExportFinished(Result<Option<PathBuf>, String>),
}

pub struct App {
    screen: Screen,
    schedule: Schedule,
    /// Last successfully rendered preview
    preview: Option<Handle>,
    status: String,
    /// In-flight export flag; gates both export buttons
    exporting: bool,
}

impl Default for App {
    fn default() -> Self {
        App {
            screen: Screen::Landing,
            schedule: Schedule::new(),
            preview: None,
            status: String::new(),
            exporting: false,
        }
    }
}

impl App {
    fn new() -> (Self, Task<Message>) {
        (App::default(), Task::none())
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Landing => "Schedulify".to_string(),
            Screen::Editor => {
                if self.schedule.company_name.is_empty() {
                    "Schedulify - Untitled Schedule".to_string()
                } else {
                    format!("Schedulify - {}", self.schedule.company_name)
                }
            }
        }
    }

    fn theme(&self) -> iced::Theme {
        iced::Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StartEditing => {
                self.schedule = Schedule::new();
                self.status = String::new();
                self.screen = Screen::Editor;
                self.refresh_preview();
                Task::none()
            }
            Message::BackToLanding => {
                // The session model is discarded, not saved
                self.screen = Screen::Landing;
                self.preview = None;
                Task::none()
            }
            Message::CompanyNameChanged(value) => {
                self.schedule.set_company_name(value);
                self.refresh_preview();
                Task::none()
            }
            Message::DateChanged(value) => {
                self.schedule.set_date(value);
                self.refresh_preview();
                Task::none()
            }
            Message::AddBus => {
                self.schedule.add_bus();
                self.refresh_preview();
                Task::none()
            }
            Message::RemoveBus(id) => {
                // Stale ids from rapid-fire clicks are no-ops
                self.schedule.remove_bus(&id);
                self.refresh_preview();
                Task::none()
            }
            Message::BusFieldChanged(id, field, value) => {
                self.schedule.set_field(&id, field, value);
                self.refresh_preview();
                Task::none()
            }
            Message::ExportImage(format) => {
                if self.exporting {
                    // One export at a time; repeat triggers are dropped
                    return Task::none();
                }
                self.exporting = true;
                self.status = format!("Exporting {}...", format);
                let schedule = self.schedule.clone();
                Task::perform(export_poster(schedule, format), Message::ExportFinished)
            }
            Message::ExportFinished(result) => {
                self.exporting = false;
                match result {
                    Ok(Some(path)) => {
                        self.status = format!("Saved {}", path.display());
                    }
                    Ok(None) => {
                        self.status = "Export cancelled".to_string();
                    }
                    Err(reason) => {
                        tracing::error!(%reason, "poster export failed");
                        self.status = format!("Export failed: {}", reason);
                    }
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Landing => ui::landing::view(),
            Screen::Editor => self.view_editor(),
        }
    }

    fn view_editor(&self) -> Element<'_, Message> {
        let header = row![
            button(text("< Back").size(11))
                .on_press(Message::BackToLanding)
                .padding(Padding::from([4, 8]))
                .style(button::text),
            Space::new().width(8),
            text("Edit Schedule").size(20),
        ]
        .align_y(Alignment::Center);

        let form = scrollable(
            column![
                ui::company_panel::view(&self.schedule),
                Space::new().height(12),
                ui::buses_panel::view(&self.schedule),
            ]
            .spacing(6)
            .padding(Padding::from([0, 8])),
        )
        .height(Length::Fill);

        let form_panel = container(form)
            .width(Length::Fixed(380.0))
            .height(Length::Fill)
            .style(container::bordered_box)
            .padding(8);

        column![
            header,
            Space::new().height(8),
            row![
                form_panel,
                ui::preview_panel::view(self.preview.as_ref(), self.exporting),
            ]
            .spacing(12)
            .height(Length::Fill),
            ui::status_bar::view_status_bar(&self.status, self.schedule.bus_count()),
        ]
        .padding(12)
        .into()
    }

    /// Explicit re-render after every mutation: the preview is a pure
    /// projection of the model. On failure the last good preview is kept
    /// and the status bar reports the reason.
    fn refresh_preview(&mut self) {
        match poster::render_rgba(&self.schedule, PREVIEW_PIXELS_PER_PT) {
            Ok(image) => {
                self.preview = Some(Handle::from_rgba(image.width, image.height, image.pixels));
            }
            Err(e) => {
                tracing::warn!(error = %e, "preview render failed");
                self.status = format!("Preview failed: {}", e);
            }
        }
    }
}

/// The export task: render at 2x from a snapshot of the model taken at
/// trigger time, ask where to save, write atomically. Cancelling the
/// dialog resolves to `Ok(None)`.
async fn export_poster(
    schedule: Schedule,
    format: ImageFormat,
) -> Result<Option<PathBuf>, String> {
    let bytes = export::render_image(&schedule, format).map_err(|e| e.to_string())?;
    let file_name = export::export_filename(&schedule.company_name, &schedule.date, format);

    let Some(target) = rfd::AsyncFileDialog::new()
        .set_title("Save schedule image")
        .set_file_name(file_name)
        .add_filter(format.label(), &[format.extension()])
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let path = target.path().to_path_buf();
    file_io::write_bytes(&path, &bytes).map_err(|e| e.to_string())?;
    Ok(Some(path))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(Size::new(1280.0, 860.0))
        .run()
}
