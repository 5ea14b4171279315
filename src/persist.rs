//! Load/save boundary between the in-memory store and the data file.
//!
//! The on-disk format is a single top-level JSON array; each element is an
//! object with exactly two fields, `Description` (string) and `Completed`
//! (boolean). Array order is contract-significant, whitespace is not.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::TaskResult;
use crate::types::Task;

/// Default data file, used when neither config nor CLI override it.
pub const DEFAULT_DATA_FILE: &str = "tasks.json";

/// Read the full task sequence from `path`.
///
/// Errors are returned, not handled here: the caller treats a missing or
/// unopenable file as "no existing tasks" and a decode failure as
/// "discard and start empty". The file handle is dropped at function end
/// on every path.
pub fn load(path: &Path) -> TaskResult<Vec<Task>> {
    let file = File::open(path)?;
    let tasks: Vec<Task> = serde_json::from_reader(BufReader::new(file))?;
    debug!(count = tasks.len(), path = %path.display(), "loaded tasks");
    Ok(tasks)
}

/// Write the full task sequence to `path`, creating or truncating it.
pub fn save(path: &Path, tasks: &[Task]) -> TaskResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, tasks)?;
    writer.flush()?;
    debug!(count = tasks.len(), path = %path.display(), "saved tasks");
    Ok(())
}
