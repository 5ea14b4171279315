//! The interactive menu loop.
//!
//! Reads menu choices line by line, dispatches to the store, and saves on
//! exit. Generic over `BufRead`/`Write` so tests can drive a full session
//! with in-memory buffers instead of a terminal, and so option 6 can end
//! the loop with a plain return instead of exiting the process.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::TaskError;
use crate::format;
use crate::persist;
use crate::store::TaskStore;

/// Result of one line read from the session input.
enum LineRead {
    /// A line, already trimmed.
    Line(String),
    /// End of input; the session should wind down.
    Eof,
    /// The read failed; the error was already reported to the output.
    Failed,
}

/// Read one trimmed line. Read failures are reported to `output` here so
/// every prompt site handles them the same way.
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<LineRead> {
    let mut buf = String::new();
    match input.read_line(&mut buf) {
        Ok(0) => Ok(LineRead::Eof),
        Ok(_) => Ok(LineRead::Line(buf.trim().to_string())),
        Err(e) => {
            let e = TaskError::InputRead(e);
            writeln!(output, "Error reading input: {e}")?;
            Ok(LineRead::Failed)
        }
    }
}

fn prompt<W: Write>(output: &mut W, text: &str) -> io::Result<()> {
    write!(output, "{text}")?;
    output.flush()
}

/// Run the menu loop until the user picks option 6 or the input ends.
///
/// Option 6 saves the store to `data_path` and returns; a save failure is
/// reported but still exits. All other failures are reported and the loop
/// continues. Returned errors are write failures on `output` only.
pub fn run<R: BufRead, W: Write>(
    store: &mut TaskStore,
    data_path: &Path,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    info!("entering menu loop");
    loop {
        write!(output, "{}", format::MENU)?;
        prompt(output, format::CHOOSE_PROMPT)?;

        let choice = match read_line(input, output)? {
            LineRead::Line(line) => line,
            LineRead::Eof => {
                debug!("input closed, leaving menu loop");
                return Ok(());
            }
            LineRead::Failed => continue,
        };

        match choice.as_str() {
            "1" => add(store, input, output)?,
            "2" => list(store, output)?,
            "3" => complete(store, input, output)?,
            "4" => delete(store, input, output)?,
            "5" => edit(store, input, output)?,
            "6" => {
                if let Err(e) = persist::save(data_path, store.tasks()) {
                    warn!("save failed: {e}");
                    writeln!(output, "Error saving tasks: {e}")?;
                }
                writeln!(output, "Tasks saved. Exiting...")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid input")?,
        }
    }
}

fn add<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    prompt(output, "Enter the task description: ")?;
    let LineRead::Line(description) = read_line(input, output)? else {
        return Ok(());
    };
    store.add(&description);
    debug!(count = store.len(), "task added");
    writeln!(output, "Task added")
}

fn list<W: Write>(store: &TaskStore, output: &mut W) -> io::Result<()> {
    if store.is_empty() {
        return writeln!(output, "No tasks");
    }
    writeln!(output, "Tasks:")?;
    for (index, task) in store.entries() {
        writeln!(output, "{}", format::format_entry(index, task))?;
    }
    Ok(())
}

fn complete<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    if store.is_empty() {
        return writeln!(output, "No tasks to complete");
    }
    prompt(output, "Enter the task number to complete: ")?;
    let LineRead::Line(raw) = read_line(input, output)? else {
        return Ok(());
    };
    match store.complete(&raw) {
        Ok(()) => writeln!(output, "Task marked as complete"),
        Err(e) => writeln!(output, "Invalid task number: {e}"),
    }
}

fn delete<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    if store.is_empty() {
        return writeln!(output, "No tasks to delete");
    }
    prompt(output, "Enter the task number to delete: ")?;
    let LineRead::Line(raw) = read_line(input, output)? else {
        return Ok(());
    };
    match store.delete(&raw) {
        Ok(_) => writeln!(output, "Task deleted"),
        Err(e) => writeln!(output, "Invalid task number: {e}"),
    }
}

fn edit<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    if store.is_empty() {
        return writeln!(output, "No tasks to edit");
    }
    prompt(output, "Enter the task number to edit: ")?;
    let LineRead::Line(raw) = read_line(input, output)? else {
        return Ok(());
    };
    prompt(output, "Enter the new task description: ")?;
    let LineRead::Line(description) = read_line(input, output)? else {
        return Ok(());
    };
    match store.edit(&raw, &description) {
        Ok(()) => writeln!(output, "Task description updated"),
        Err(e) => writeln!(output, "Invalid task number: {e}"),
    }
}
