//! In-memory task store and index resolution.
//!
//! `TaskStore` owns the ordered task sequence for the process lifetime.
//! Display numbering is always `position + 1`; there are no stable task
//! ids, so deleting an entry renumbers everything after it.

use crate::error::{TaskError, TaskResult};
use crate::types::Task;

/// Resolve raw user text into a 0-based position.
///
/// Trims surrounding whitespace, parses base-10, and accepts exactly the
/// integers in `1..=len`. Everything else (non-numeric, zero, negative,
/// out of range, empty) is an `InvalidIndex`. Shared by every
/// index-taking operation so their validation semantics are identical.
pub fn resolve_index(raw: &str, len: usize) -> TaskResult<usize> {
    let trimmed = raw.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Ok(n - 1),
        _ => Err(TaskError::invalid_index(trimmed, len)),
    }
}

/// Owner of the ordered in-memory task sequence.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with previously loaded tasks, preserving
    /// their order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The full sequence, in display order. Used by the persistence
    /// adapter when saving.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a new incomplete task with the trimmed description.
    /// Empty descriptions are allowed. Always succeeds.
    pub fn add(&mut self, description: &str) {
        self.tasks.push(Task::new(description.trim()));
    }

    /// Numbered (1-based) view of the list for display. Restartable and
    /// non-mutating; the caller decides how to render an empty store.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks.iter().enumerate().map(|(i, task)| (i + 1, task))
    }

    /// Mark the task at the given 1-based position as complete.
    pub fn complete(&mut self, raw_index: &str) -> TaskResult<()> {
        let idx = resolve_index(raw_index, self.tasks.len())?;
        self.tasks[idx].completed = true;
        Ok(())
    }

    /// Remove the task at the given 1-based position, shifting all later
    /// tasks one position earlier. Returns the removed task.
    pub fn delete(&mut self, raw_index: &str) -> TaskResult<Task> {
        let idx = resolve_index(raw_index, self.tasks.len())?;
        Ok(self.tasks.remove(idx))
    }

    /// Replace the description of the task at the given 1-based position
    /// with the trimmed new text. The completion flag is untouched.
    pub fn edit(&mut self, raw_index: &str, new_description: &str) -> TaskResult<()> {
        let idx = resolve_index(raw_index, self.tasks.len())?;
        self.tasks[idx].description = new_description.trim().to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_index_accepts_full_valid_range() {
        for n in 1..=5 {
            assert_eq!(resolve_index(&n.to_string(), 5).unwrap(), n - 1);
        }
    }

    #[test]
    fn resolve_index_trims_whitespace() {
        assert_eq!(resolve_index("  2  ", 3).unwrap(), 1);
        assert_eq!(resolve_index("\t3\n", 3).unwrap(), 2);
    }

    #[test]
    fn resolve_index_rejects_zero_and_out_of_range() {
        assert!(resolve_index("0", 3).is_err());
        assert!(resolve_index("4", 3).is_err());
        assert!(resolve_index("1", 0).is_err());
    }

    #[test]
    fn resolve_index_rejects_non_numeric() {
        for input in ["", "   ", "abc", "-1", "1.5", "2x"] {
            assert!(resolve_index(input, 3).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn add_trims_and_allows_empty() {
        let mut store = TaskStore::new();
        store.add("  buy milk  ");
        store.add("   ");
        assert_eq!(store.tasks()[0].description, "buy milk");
        assert_eq!(store.tasks()[1].description, "");
    }

    #[test]
    fn entries_are_one_based_and_restartable() {
        let mut store = TaskStore::new();
        store.add("a");
        store.add("b");

        let first: Vec<usize> = store.entries().map(|(i, _)| i).collect();
        let second: Vec<usize> = store.entries().map(|(i, _)| i).collect();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(first, second);
    }
}
