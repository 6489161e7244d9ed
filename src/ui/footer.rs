use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n;
use crate::state::{AppState, Route};
use crate::theme::{KeyChord, theme};

/// What: Collect `(key label, action label)` hints for the current page.
///
/// Details:
/// - Only the first chord of each binding is shown
/// - Page-specific hints come first, global ones after
fn hints(app: &AppState) -> Vec<(String, String)> {
    let km = &app.settings.keymap;
    let first = |chords: &[KeyChord]| chords.first().map(KeyChord::label);
    let mut out: Vec<(String, String)> = Vec::new();
    let mut push = |key: Option<String>, label_key: &str| {
        if let Some(k) = key {
            out.push((k, i18n::t(app, label_key)));
        }
    };
    match app.route {
        Route::Dashboard | Route::Landing => {
            push(Some("Enter".to_string()), "footer.select");
            push(first(&km.toggle_headlines), "footer.headlines");
        }
        Route::Emergency => {
            push(Some("Enter".to_string()), "footer.dial");
            push(Some("C".to_string()), "contacts.call_now");
        }
        Route::Assistant => {
            push(Some("Enter".to_string()), "footer.send");
            push(first(&km.voice_input), "footer.voice_input");
        }
        Route::NotFound(_) => {}
    }
    push(first(&km.next_page), "footer.pages");
    push(first(&km.cycle_language), "footer.language");
    push(first(&km.toggle_voice_output), "footer.voice_output");
    push(first(&km.use_location), "footer.location");
    push(first(&km.next_place), "footer.next_place");
    push(first(&km.help), "footer.help");
    push(first(&km.exit), "footer.quit");
    out
}

/// Render the one-line keybinding footer.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (key, label) in hints(app) {
        spans.push(Span::styled(
            format!("[{key}]"),
            Style::default().fg(th.interactive).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {label}  "), Style::default().fg(th.subtext)));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.mantle)),
        area,
    );
}
