//! Console output formatting for the menu and task listings.

use crate::types::Task;

/// The fixed six-option menu, printed before every prompt.
pub const MENU: &str = "\nTask Manager
1. Add task
2. List tasks
3. Complete task
4. Delete task
5. Edit task
6. Save and Exit
";

/// Prompt printed after the menu, without a trailing newline.
pub const CHOOSE_PROMPT: &str = "Choose an option: ";

/// Format one list entry as `N. description [Complete|Incomplete]`.
pub fn format_entry(index: usize, task: &Task) -> String {
    format!("{}. {} [{}]", index, task.description, task.status_label())
}
