//! Small rendering helpers shared by the page renderers.

use ratatui::{prelude::Rect, style::Color};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::assistant::IntentCategory;
use crate::contacts::Severity;
use crate::theme::Theme;

/// What: Compute a rectangle centered inside `area`.
///
/// Inputs:
/// - `area`: Enclosing rectangle
/// - `max_w`, `max_h`: Preferred size, clamped to `area` minus a margin
#[must_use]
pub fn centered_rect(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(4).min(max_w);
    let h = area.height.saturating_sub(2).min(max_h);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// What: Truncate `s` so its display width fits `max_width` columns.
///
/// Details:
/// - Wide characters (emoji, CJK) count as two columns; an ellipsis marks the cut
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let cw = ch.width().unwrap_or(0);
        if used + cw + 1 > max_width {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    out
}

/// Headline color by urgency.
#[must_use]
pub const fn severity_color(th: &Theme, severity: Severity) -> Color {
    match severity {
        Severity::High => th.danger,
        Severity::Medium => th.warning,
        Severity::Low => th.info,
    }
}

/// Badge color for an assistant reply's category.
#[must_use]
pub const fn category_color(th: &Theme, category: IntentCategory) -> Color {
    match category {
        IntentCategory::Medical | IntentCategory::EmergencyResponse => th.danger,
        IntentCategory::Legal => th.accent,
        IntentCategory::EmergencyContacts => th.warning,
        IntentCategory::FactCheck => th.info,
        IntentCategory::General => th.success,
    }
}
