use ratatui::{
    Frame,
    layout::Alignment,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::i18n;
use crate::state::AppState;
use crate::theme::theme;

use super::helpers::centered_rect;

/// Render the page shown for an unknown path.
pub fn render_not_found(f: &mut Frame, app: &AppState, area: Rect, path: &str) {
    let th = theme();
    let lines = vec![
        Line::from(Span::styled(
            i18n::t(app, "not_found.title"),
            Style::default().fg(th.danger).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            i18n::t_fmt1(app, "not_found.message", path),
            Style::default().fg(th.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            i18n::t(app, "not_found.back"),
            Style::default().fg(th.interactive),
        )),
    ];
    let rect = centered_rect(area, 60, 7);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(th.base)),
        rect,
    );
}
