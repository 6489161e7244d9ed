//! `--contacts`: print the emergency directory.

use crate::contacts::contacts;

/// Directory as aligned plain-text rows.
#[must_use]
pub fn format_directory() -> String {
    let width = contacts()
        .iter()
        .map(|c| c.service.chars().count())
        .max()
        .unwrap_or(0);
    contacts()
        .iter()
        .map(|c| format!("{:>6}  {:width$}  {}\n", c.number, c.service, c.description))
        .collect()
}
