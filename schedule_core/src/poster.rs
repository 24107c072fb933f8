//! # Poster Rendering Module
//!
//! Turns a [`Schedule`] into the poster document using Typst.
//!
//! ## Architecture
//!
//! - `poster_source` is the pure render: model in, Typst markup out.
//!   Identical models produce byte-identical source, so the preview and
//!   the export can never disagree about what the poster looks like.
//! - Compilation happens in-process against a minimal [`World`] with
//!   detached source and the bundled fonts; fonts and the standard
//!   library are loaded once and cached.
//! - The canvas is 800 pt wide with a 1120 pt minimum height that grows
//!   with the row count. The minimum is enforced exactly: compile once at
//!   natural height, and if the page comes up short, recompile with a
//!   spacer above the footer sized to the difference.
//!
//! ## Example
//!
//! ```rust,no_run
//! use schedule_core::poster::render_rgba;
//! use schedule_core::schedule::Schedule;
//!
//! let schedule = Schedule::new();
//! let image = render_rgba(&schedule, 1.0).unwrap();
//! assert_eq!(image.width, 800);
//! ```

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::layout::PagedDocument;
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};

use crate::errors::{ScheduleError, ScheduleResult};
use crate::format::{display_company, format_long_date, format_time_12h};
use crate::schedule::{BusRow, Schedule};

/// Poster canvas width in layout units (points)
pub const PAGE_WIDTH_PT: f64 = 800.0;

/// Minimum poster canvas height; the page grows past this with many rows
pub const MIN_PAGE_HEIGHT_PT: f64 = 1120.0;

// Column fractions are part of the visual contract: the route zone
// narrows when the details zone is present.
const BASE_COLUMNS: &str = "(2fr, 7fr, 3fr)";
const DETAIL_COLUMNS: &str = "(2fr, 4fr, 3fr, 3fr)";

// ============================================================================
// Typst World Implementation
// ============================================================================

static FONTS: Lazy<Vec<Font>> = Lazy::new(|| {
    let mut fonts = Vec::new();
    for font_bytes in typst_assets::fonts() {
        let buffer = Bytes::new(font_bytes.to_vec());
        for font in Font::iter(buffer) {
            fonts.push(font);
        }
    }
    fonts
});

static BOOK: Lazy<LazyHash<FontBook>> =
    Lazy::new(|| LazyHash::new(FontBook::from_fonts(FONTS.iter())));

static LIBRARY: Lazy<LazyHash<Library>> = Lazy::new(|| LazyHash::new(Library::default()));

/// A minimal Typst world for compiling a single detached document.
struct PosterWorld {
    main: Source,
}

impl PosterWorld {
    fn new(source: String) -> Self {
        PosterWorld {
            main: Source::detached(source),
        }
    }
}

impl World for PosterWorld {
    fn library(&self) -> &LazyHash<Library> {
        &LIBRARY
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &BOOK
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        FONTS.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(now.year(), now.month() as u8, now.day() as u8)
    }
}

// ============================================================================
// Source Generation (the pure render)
// ============================================================================

/// Render the schedule to Typst markup.
///
/// Pure and deterministic: no internal state, no side effects, identical
/// models yield identical source.
pub fn poster_source(schedule: &Schedule) -> String {
    build_source(schedule, 0.0)
}

fn build_source(schedule: &Schedule, footer_filler_pt: f64) -> String {
    let show_details = schedule.has_extra_details();
    let columns = if show_details {
        DETAIL_COLUMNS
    } else {
        BASE_COLUMNS
    };

    format!(
        r##"
#set page(width: {page_width}pt, height: auto, margin: 0pt, fill: rgb("#020617"))
#set text(fill: rgb("#f8fafc"), size: 16pt)
#set block(spacing: 0pt)
#set par(spacing: 0pt)

#rect(width: 100%, height: 4pt, fill: gradient.linear(rgb("#22d3ee"), rgb("#8b5cf6"), rgb("#e879f9")))

#block(width: 100%, inset: (x: 32pt, top: 44pt, bottom: 24pt))[
  #align(center)[
    #text(size: 42pt, weight: "bold", tracking: 5pt)[{company}]
    #v(20pt)
    #text(size: 16pt, fill: rgb("#7dd3fc"), tracking: 3pt)[{date_line}]
  ]

  #v(40pt)

  #block(width: 100%, inset: (x: 16pt))[
    #block(width: 100%, radius: 14pt, clip: true, stroke: 0.5pt + rgb("#334155"), fill: rgb("#0b1220"))[
      #block(width: 100%, inset: (x: 32pt, y: 18pt), fill: rgb("#16213a"))[
        #grid(columns: {columns}, column-gutter: 16pt, align: center, {header_cells})
      ]
{body}
    ]
  ]

  #v({footer_gap}pt)

  #grid(
    columns: (1fr, 1fr),
    align(left + bottom)[
      #text(size: 9pt, fill: rgb("#64748b"), tracking: 2pt)[GENERATED BY]
      #linebreak()
      #text(size: 12pt, weight: "bold")[Bus Schedule PRO]
    ],
    align(right + bottom)[
      #text(size: 9pt, fill: rgb("#64748b"), tracking: 1pt)[Total Buses: {bus_count}]
    ],
  )
]
"##,
        page_width = PAGE_WIDTH_PT,
        company = escape_typst(&display_company(&schedule.company_name)),
        date_line = escape_typst(&format_long_date(&schedule.date)),
        columns = columns,
        header_cells = header_cells(show_details),
        body = table_body(schedule, show_details),
        footer_gap = format!("{:.1}", 40.0 + footer_filler_pt),
        bus_count = schedule.bus_count(),
    )
}

fn header_cells(show_details: bool) -> String {
    let mut labels = vec!["BUS NO", "ROUTE", "TIMING"];
    if show_details {
        labels.push("DETAILS");
    }
    labels
        .iter()
        .map(|label| {
            format!(
                r##"[#text(size: 13pt, weight: "bold", fill: rgb("#67e8f9"), tracking: 1.5pt)[{label}]]"##
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn table_body(schedule: &Schedule, show_details: bool) -> String {
    if schedule.buses.is_empty() {
        return concat!(
            r##"      #block(width: 100%, inset: (x: 32pt, y: 96pt))["##,
            r##"#align(center)[#text(size: 20pt, style: "italic", fill: rgb("#64748b"))[No buses scheduled yet...]]]"##,
        )
        .to_string();
    }

    let columns = if show_details {
        DETAIL_COLUMNS
    } else {
        BASE_COLUMNS
    };

    schedule
        .buses
        .iter()
        .map(|bus| {
            let mut cells = vec![
                format!(
                    r##"[#text(size: 20pt, weight: "bold")[{}]]"##,
                    escape_typst(&bus.bus_number)
                ),
                format!(
                    r##"[#text(size: 17pt, fill: rgb("#cbd5e1"))[{}]]"##,
                    escape_typst(&bus.route)
                ),
                format!(
                    r##"[#box(fill: rgb("#083344"), stroke: 0.5pt + rgb("#155e75"), radius: 8pt, inset: (x: 12pt, y: 8pt))[#text(size: 13pt, weight: "bold", fill: rgb("#67e8f9"))[{}]]]"##,
                    escape_typst(&format_time_12h(&bus.time))
                ),
            ];
            if show_details {
                cells.push(details_cell(bus));
            }
            format!(
                r##"      #block(width: 100%, inset: (x: 32pt, y: 22pt))[#grid(columns: {columns}, column-gutter: 16pt, align: center + horizon, {cells})]"##,
                columns = columns,
                cells = cells.join(", "),
            )
        })
        .collect::<Vec<_>>()
        .join("\n      #block(width: 100%, height: 0.5pt, fill: rgb(\"#16213a\"))\n")
}

fn details_cell(bus: &BusRow) -> String {
    let mut parts = Vec::new();
    if !bus.price.is_empty() {
        parts.push(format!(
            r##"text(size: 19pt, weight: "bold", fill: rgb("#34d399"))[{}]"##,
            escape_typst(&bus.price)
        ));
    }
    if !bus.contact.is_empty() {
        parts.push(format!(
            r##"text(size: 12pt, fill: rgb("#94a3b8"))[{}]"##,
            escape_typst(&bus.contact)
        ));
    }
    if parts.is_empty() {
        "[]".to_string()
    } else {
        format!(
            "[#grid(columns: 1, row-gutter: 6pt, align: center, {})]",
            parts.join(", ")
        )
    }
}

/// Escape special Typst characters in user-provided text.
///
/// Hyphens are escaped too, so `--` sequences (the `--:--` time sentinel,
/// double-dash route names) stay literal instead of becoming en dashes.
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '[' => "\\[".to_string(),
            ']' => "\\]".to_string(),
            '-' => "\\-".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

// ============================================================================
// Compilation and Rasterization
// ============================================================================

fn compile_source(source: String) -> ScheduleResult<PagedDocument> {
    let world = PosterWorld::new(source);
    let warned = typst::compile::<PagedDocument>(&world);
    warned.output.map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        ScheduleError::compile(messages.join("; "))
    })
}

/// Compile the poster, enforcing the minimum canvas height.
pub fn compile_poster(schedule: &Schedule) -> ScheduleResult<PagedDocument> {
    let document = compile_source(build_source(schedule, 0.0))?;
    let natural_pt = document
        .pages
        .first()
        .map(|page| page.frame.height().to_pt())
        .unwrap_or(0.0);

    // Short content gets an exact spacer above the footer; tall content
    // keeps its natural height.
    if natural_pt + 0.5 < MIN_PAGE_HEIGHT_PT {
        return compile_source(build_source(schedule, MIN_PAGE_HEIGHT_PT - natural_pt));
    }
    Ok(document)
}

/// An un-premultiplied RGBA raster of the poster.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, 4 bytes per pixel
    pub pixels: Vec<u8>,
}

/// Rasterize the poster at the given oversampling factor.
///
/// `pixels_per_pt` of 1.0 maps one layout unit to one pixel (the preview);
/// exports use a higher factor for a display-independent raster.
pub fn render_rgba(schedule: &Schedule, pixels_per_pt: f32) -> ScheduleResult<RasterImage> {
    let document = compile_poster(schedule)?;
    let page = document
        .pages
        .first()
        .ok_or_else(|| ScheduleError::compile("document produced no pages"))?;

    let pixmap = typst_render::render(page, pixels_per_pt);

    let mut pixels = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        pixels.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    Ok(RasterImage {
        width: pixmap.width(),
        height: pixmap.height(),
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::BusField;

    fn royal_travels() -> Schedule {
        let mut schedule = Schedule::new();
        schedule.set_company_name("Royal Travels");
        schedule.set_date("2024-01-01");
        let id = schedule.buses[0].id;
        schedule.set_field(&id, BusField::BusNumber, "12");
        schedule.set_field(&id, BusField::Route, "A-B");
        schedule.set_field(&id, BusField::Time, "09:00");
        schedule
    }

    #[test]
    fn test_source_contains_header_row_and_footer() {
        let source = poster_source(&royal_travels());
        assert!(source.contains("ROYAL TRAVELS"));
        assert!(source.contains("Monday, January 1, 2024"));
        assert!(source.contains("[12]"));
        assert!(source.contains(r"A\-B"));
        assert!(source.contains("9:00 AM"));
        assert!(source.contains("Total Buses: 1"));
    }

    #[test]
    fn test_source_placeholders_for_empty_fields() {
        let mut schedule = Schedule::new();
        schedule.set_date("");
        let source = poster_source(&schedule);
        assert!(source.contains("COMPANY NAME"));
        assert!(source.contains("Select Date"));
        assert!(source.contains(r"\-\-:\-\-"));
    }

    #[test]
    fn test_details_column_follows_derived_flag() {
        let mut schedule = royal_travels();
        let source = poster_source(&schedule);
        assert!(source.contains(BASE_COLUMNS));
        assert!(!source.contains("DETAILS"));

        let id = schedule.buses[0].id;
        schedule.set_field(&id, BusField::Contact, "01700-000000");
        let source = poster_source(&schedule);
        assert!(source.contains(DETAIL_COLUMNS));
        assert!(!source.contains(BASE_COLUMNS));
        assert!(source.contains("DETAILS"));
        assert!(source.contains(r"01700\-000000"));

        // Clearing the field restores the base layout on the next render
        schedule.set_field(&id, BusField::Contact, "");
        assert!(poster_source(&schedule).contains(BASE_COLUMNS));
    }

    #[test]
    fn test_empty_table_renders_placeholder_with_zero_count() {
        let mut schedule = Schedule::new();
        let id = schedule.buses[0].id;
        schedule.remove_bus(&id);

        let source = poster_source(&schedule);
        assert!(source.contains("No buses scheduled yet..."));
        assert!(source.contains("Total Buses: 0"));
        // Column labels are still shown above the placeholder
        assert!(source.contains("BUS NO"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let schedule = royal_travels();
        assert_eq!(poster_source(&schedule), poster_source(&schedule));
    }

    #[test]
    fn test_unparseable_date_renders_raw_string() {
        let mut schedule = Schedule::new();
        schedule.set_date("sometime soon");
        let source = poster_source(&schedule);
        assert!(source.contains("sometime soon"));
    }

    #[test]
    fn test_compile_enforces_minimum_height() {
        let document = compile_poster(&royal_travels()).unwrap();
        let page = document.pages.first().unwrap();
        assert!((page.frame.width().to_pt() - PAGE_WIDTH_PT).abs() < 0.5);
        assert!(page.frame.height().to_pt() >= MIN_PAGE_HEIGHT_PT - 0.5);
        assert!(page.frame.height().to_pt() <= MIN_PAGE_HEIGHT_PT + 0.5);
    }

    #[test]
    fn test_compile_survives_markup_significant_input() {
        let mut schedule = royal_travels();
        schedule.set_company_name("R*#[a]_$`\\ Travels");
        let id = schedule.buses[0].id;
        schedule.set_field(&id, BusField::Route, "#A <-> [B]");
        assert!(compile_poster(&schedule).is_ok());
    }

    #[test]
    fn test_rasterization_scales_with_oversampling() {
        let schedule = royal_travels();
        let preview = render_rgba(&schedule, 1.0).unwrap();
        assert_eq!(preview.width, 800);
        assert_eq!(preview.height, 1120);
        assert_eq!(
            preview.pixels.len(),
            (preview.width * preview.height * 4) as usize
        );

        let export = render_rgba(&schedule, 2.0).unwrap();
        assert_eq!(export.width, 1600);
        assert_eq!(export.height, 2240);
    }
}
