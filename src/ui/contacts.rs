use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::contacts::{TIP_KEYS, contacts};
use crate::i18n;
use crate::state::AppState;
use crate::theme::theme;

/// What: Render the emergency contacts page.
///
/// Details:
/// - A banner for the national number, the directory list (stateful selection),
///   and the safety tips
pub fn render_contacts(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(u16::try_from(TIP_KEYS.len()).unwrap_or(5) + 2),
        ])
        .split(area);

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            i18n::t(app, "contacts.life_threatening"),
            Style::default().fg(th.danger).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                i18n::t(app, "contacts.national_number"),
                Style::default().fg(th.text),
            ),
            Span::raw("   "),
            Span::styled(
                format!(" 📞 [C] {} ", i18n::t(app, "contacts.call_now")),
                Style::default()
                    .fg(th.crust)
                    .bg(th.danger)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ])
    .style(Style::default().bg(th.base))
    .block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", i18n::t(app, "contacts.title")),
                Style::default().fg(th.danger).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(th.danger)),
    );
    f.render_widget(banner, rows[0]);

    let items: Vec<ListItem> = contacts()
        .iter()
        .map(|c| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>6}  ", c.number),
                    Style::default().fg(th.danger).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    c.service.to_string(),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", c.description), Style::default().fg(th.subtext)),
            ]))
        })
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", i18n::t(app, "contacts.subtitle")),
                    Style::default().fg(th.overlay),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface)),
        )
        .highlight_style(Style::default().fg(th.crust).bg(th.interactive))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, rows[1], &mut app.contacts_state);

    let tips: Vec<Line> = TIP_KEYS
        .iter()
        .map(|k| {
            Line::from(Span::styled(
                format!("• {}", i18n::t(app, k)),
                Style::default().fg(th.subtext),
            ))
        })
        .collect();
    let tips = Paragraph::new(tips)
        .style(Style::default().bg(th.base))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", i18n::t(app, "contacts.important")),
                    Style::default().fg(th.warning).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface)),
        );
    f.render_widget(tips, rows[2]);
}
