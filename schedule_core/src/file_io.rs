//! # File I/O Module
//!
//! Schedule files are plain JSON; exported images are opaque bytes. Both
//! are written atomically (write to `.tmp`, fsync, rename) so an
//! interrupted process never leaves a torn file behind.
//!
//! The GUI editor deliberately does not persist its model; schedules are
//! session documents. This module serves the CLI input format and tests.
//!
//! ## Example
//!
//! ```rust,no_run
//! use schedule_core::file_io::{load_schedule, save_schedule};
//! use schedule_core::schedule::Schedule;
//! use std::path::Path;
//!
//! let schedule = Schedule::new();
//! save_schedule(&schedule, Path::new("schedule.json")).unwrap();
//! let loaded = load_schedule(Path::new("schedule.json")).unwrap();
//! assert_eq!(loaded.bus_count(), 1);
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::errors::{ScheduleError, ScheduleResult};
use crate::schedule::Schedule;

/// Load a schedule from a JSON file.
///
/// Missing optional fields (including row ids) are filled with defaults,
/// so hand-written input files stay terse.
pub fn load_schedule(path: &Path) -> ScheduleResult<Schedule> {
    let mut file = File::open(path)
        .map_err(|e| ScheduleError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| ScheduleError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| ScheduleError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Save a schedule as pretty-printed JSON with atomic write semantics.
pub fn save_schedule(schedule: &Schedule, path: &Path) -> ScheduleResult<()> {
    let json =
        serde_json::to_string_pretty(schedule).map_err(|e| ScheduleError::SerializationError {
            reason: e.to_string(),
        })?;
    write_bytes(path, json.as_bytes())
}

/// Write bytes to a file atomically: temp file, fsync, rename.
///
/// Used for schedule JSON and for exported poster images.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> ScheduleResult<()> {
    let tmp_path = path.with_extension("tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        ScheduleError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        ScheduleError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.sync_all().map_err(|e| {
        ScheduleError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up the temp file if the rename fails
        let _ = fs::remove_file(&tmp_path);
        ScheduleError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}
