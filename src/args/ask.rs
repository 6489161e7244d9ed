//! `--ask`: route one question through the assistant without the TUI.

use crate::assistant;

/// What: Format the assistant's answer for terminal output.
///
/// Output:
/// - `"[<Category>]\n<response>\n"`
#[must_use]
pub fn format_answer(question: &str) -> String {
    let (category, text) = assistant::reply(question);
    format!("[{category}]\n{text}\n")
}
