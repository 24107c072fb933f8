//! # Schedulify CLI Application
//!
//! Headless poster renderer: loads a schedule from a JSON file and writes
//! the poster image, using the same pipeline as the GUI export buttons.
//!
//! ```text
//! schedule_cli schedule.json --format jpeg --scale 2 -o poster.jpeg
//! ```

use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use schedule_core::errors::ScheduleResult;
use schedule_core::export::{self, ImageFormat, EXPORT_PIXELS_PER_PT};
use schedule_core::file_io;

#[derive(Parser)]
#[command(
    name = "schedule_cli",
    about = "Render a bus schedule poster from a JSON file",
    version
)]
struct Args {
    /// Path to the schedule JSON file
    input: PathBuf,

    /// Output path (defaults to the derived schedule-<company>-<date>.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Png)]
    format: FormatArg,

    /// Oversampling factor in pixels per layout unit
    #[arg(long, default_value_t = EXPORT_PIXELS_PER_PT)]
    scale: f32,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Png,
    Jpeg,
}

impl From<FormatArg> for ImageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => ImageFormat::Png,
            FormatArg::Jpeg => ImageFormat::Jpeg,
        }
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Png => write!(f, "png"),
            FormatArg::Jpeg => write!(f, "jpeg"),
        }
    }
}

fn run(args: &Args) -> ScheduleResult<PathBuf> {
    let schedule = file_io::load_schedule(&args.input)?;
    let format: ImageFormat = args.format.into();

    tracing::info!(
        buses = schedule.bus_count(),
        %format,
        scale = args.scale,
        "rendering poster"
    );
    let bytes = export::render_image_scaled(&schedule, format, args.scale)?;

    let path = args.output.clone().unwrap_or_else(|| {
        PathBuf::from(export::export_filename(
            &schedule.company_name,
            &schedule.date,
            format,
        ))
    });
    file_io::write_bytes(&path, &bytes)?;

    println!(
        "Rendered {} bus(es) for '{}' -> {} ({} bytes)",
        schedule.bus_count(),
        if schedule.company_name.is_empty() {
            "(unnamed)"
        } else {
            &schedule.company_name
        },
        path.display(),
        bytes.len()
    );
    Ok(path)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
