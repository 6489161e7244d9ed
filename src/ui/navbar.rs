use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::i18n;
use crate::state::{AppState, Route};
use crate::theme::theme;

/// What: Render the top navigation bar.
///
/// Details:
/// - Brand on the left, then one tab per navbar page with the active one highlighted
/// - Native name of the active language and the emergency shortcut on the right
pub fn render_navbar(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut spans: Vec<Span<'static>> = vec![
        Span::styled(
            format!("🛡 {} ", i18n::t(app, "app.brand")),
            Style::default().fg(th.danger).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];
    for route in Route::NAV {
        let active = app.route == route;
        let style = if active {
            Style::default()
                .fg(th.crust)
                .bg(th.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext)
        };
        spans.push(Span::styled(format!(" {} ", i18n::t(app, route.nav_key())), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!("  🌐 {}", app.language.native_name()),
        Style::default().fg(th.interactive),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        i18n::t(app, "nav.emergency_button"),
        Style::default().fg(th.danger).add_modifier(Modifier::BOLD),
    ));

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(th.text).bg(th.mantle))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(th.surface)),
        );
    f.render_widget(bar, area);
}
