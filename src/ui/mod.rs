//! Rendering of the whole screen: navbar, the active page, footer and overlays.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Route};
use crate::theme::theme;

mod assistant;
mod contacts;
mod dashboard;
mod footer;
pub mod helpers;
mod modals;
mod navbar;
mod not_found;

/// What: Render one frame.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state (mutable for the contacts list selection)
///
/// Details:
/// - Navbar on top, footer at the bottom, page body in between
/// - Modals and the toast are drawn last so they cover the page
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    navbar::render_navbar(f, app, chunks[0]);
    match app.route.clone() {
        Route::Landing | Route::Dashboard => dashboard::render_dashboard(f, app, chunks[1]),
        Route::Emergency => contacts::render_contacts(f, app, chunks[1]),
        Route::Assistant => assistant::render_assistant(f, app, chunks[1]),
        Route::NotFound(path) => not_found::render_not_found(f, app, chunks[1], &path),
    }
    footer::render_footer(f, app, chunks[2]);

    modals::render_modals(f, app, area);
    render_toast(f, app, area);
}

/// What: Draw the transient toast in the bottom-right corner, above the footer.
fn render_toast(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(msg) = app.toast_message.as_deref() else {
        return;
    };
    let th = theme();
    let max_w = area.width.saturating_sub(4);
    let w = u16::try_from(msg.width())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(max_w);
    let h: u16 = 3;
    if w < 5 || area.height < h + 2 {
        return;
    }
    let rect = Rect {
        x: area.x + area.width.saturating_sub(w + 1),
        y: area.y + area.height.saturating_sub(h + 1),
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);
    let toast = Paragraph::new(Line::from(Span::styled(
        helpers::truncate_to_width(msg, usize::from(w.saturating_sub(2))),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true })
    .style(Style::default().bg(th.mantle))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.accent)),
    );
    f.render_widget(toast, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Modal;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &mut AppState, w: u16, h: u16) -> String {
        let backend = TestBackend::new(w, h);
        let mut term = Terminal::new(backend).expect("terminal");
        term.draw(|f| ui(f, app)).expect("draw");
        let buf = term.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn dashboard_shows_status_and_quick_actions() {
        let mut app = AppState::default();
        let screen = render(&mut app, 120, 36);
        assert!(screen.contains("CIVI-SHIELD"));
        assert!(screen.contains("Online"));
        assert!(screen.contains("Fire Emergency"));
        assert!(screen.contains("Select your city"));
    }

    #[test]
    fn dashboard_reports_offline_mode() {
        let mut app = AppState::default();
        app.online = false;
        let screen = render(&mut app, 120, 36);
        assert!(screen.contains("Offline Mode"));
    }

    #[test]
    fn contacts_page_lists_directory() {
        let mut app = AppState::default();
        app.route = Route::Emergency;
        let screen = render(&mut app, 100, 30);
        assert!(screen.contains("Ambulance / Medical"));
        assert!(screen.contains("1930"));
        assert!(screen.contains("[C] Call 112 Now"));
    }

    #[test]
    fn assistant_page_shows_placeholder_in_native_language() {
        let mut app = AppState::default();
        app.route = Route::Assistant;
        app.session.ensure_welcome();
        let screen = render(&mut app, 120, 30);
        assert!(screen.contains("Type your message in English"));
        assert!(screen.contains("Namaste"));
    }

    #[test]
    fn not_found_page_names_the_path() {
        let mut app = AppState::default();
        app.route = Route::NotFound("/nowhere".to_string());
        let screen = render(&mut app, 80, 20);
        assert!(screen.contains("/nowhere"));
    }

    #[test]
    fn alert_and_toast_render_over_page() {
        let mut app = AppState::default();
        app.modal = Modal::Alert {
            message: "Speech unsupported".to_string(),
        };
        app.show_toast("Language: English");
        let screen = render(&mut app, 100, 30);
        assert!(screen.contains("Speech unsupported"));
        assert!(screen.contains("Language: English"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = AppState::default();
        app.modal = Modal::Help;
        let _ = render(&mut app, 10, 4);
    }
}
