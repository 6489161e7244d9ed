use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::contacts::{headlines, visible_headlines};
use crate::i18n;
use crate::state::{AppState, DashboardItem};
use crate::theme::{Theme, theme};

use super::helpers::{severity_color, truncate_to_width};

/// Translated label of a dashboard entry, with its icon.
fn item_label(app: &AppState, item: DashboardItem) -> String {
    match item {
        DashboardItem::Quick(action) => {
            format!("{} {}", action.icon(), i18n::t(app, &action.title_key()))
        }
        DashboardItem::VoiceAssistant => format!("🎤 {}", i18n::t(app, "dashboard.voice_assistant")),
        DashboardItem::StartChat => format!("💬 {}", i18n::t(app, "dashboard.start_chat")),
        DashboardItem::EmergencyContacts => {
            format!("📞 {}", i18n::t(app, "dashboard.emergency_contacts"))
        }
    }
}

fn panel<'a>(th: &Theme, title: String) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface))
}

/// Status and location lines under the title.
fn header_lines(app: &AppState, th: &Theme) -> Vec<Line<'static>> {
    let (status, detail, color) = if app.online {
        (
            i18n::t(app, "dashboard.online"),
            i18n::t(app, "dashboard.all_features"),
            th.success,
        )
    } else {
        (
            i18n::t(app, "dashboard.offline_mode"),
            i18n::t(app, "dashboard.basic_features"),
            th.warning,
        )
    };
    vec![
        Line::from(Span::styled(
            i18n::t(app, "app.title"),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            i18n::t(app, "app.subtitle"),
            Style::default().fg(th.subtext),
        )),
        Line::from(vec![
            Span::styled(
                format!("{}: ", i18n::t(app, "dashboard.status")),
                Style::default().fg(th.overlay),
            ),
            Span::styled(format!("● {status}"), Style::default().fg(color)),
            Span::styled(format!("  {detail}"), Style::default().fg(th.subtext)),
        ]),
        Line::from(vec![
            Span::styled(
                format!("📍 {}: ", i18n::t(app, "location.label")),
                Style::default().fg(th.overlay),
            ),
            Span::styled(app.location_label(), Style::default().fg(th.info)),
        ]),
    ]
}

/// Selectable actions: the quick emergency prompts and the shortcuts.
fn actions_lines(app: &AppState, th: &Theme) -> Vec<Line<'static>> {
    let selected = app.dashboard_item();
    let mut lines = Vec::with_capacity(DashboardItem::ALL.len() + 1);
    for (i, item) in DashboardItem::ALL.iter().enumerate() {
        if i == 4 {
            lines.push(Line::from(""));
        }
        let label = item_label(app, *item);
        let line = if *item == selected {
            Line::from(Span::styled(
                format!("> {label}"),
                Style::default()
                    .fg(th.crust)
                    .bg(th.interactive)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                format!("  {label}"),
                Style::default().fg(th.text),
            ))
        };
        lines.push(line);
    }
    lines
}

fn features_lines(app: &AppState, th: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (icon, key) in [("🤖", "assistant"), ("📍", "location"), ("📶", "offline")] {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{icon} {}", i18n::t(app, &format!("dashboard.features.{key}.title"))),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", i18n::t(app, &format!("dashboard.features.{key}.description"))),
                Style::default().fg(th.subtext),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        i18n::t(app, "dashboard.emergency_case"),
        Style::default().fg(th.danger).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        i18n::t(app, "dashboard.emergency_description"),
        Style::default().fg(th.subtext),
    )));
    lines
}

/// Headlines, collapsed to the first few unless expanded.
fn headline_lines(app: &AppState, th: &Theme, width: u16) -> Vec<Line<'static>> {
    let max = usize::from(width.saturating_sub(4));
    let mut lines: Vec<Line<'static>> = visible_headlines(app.headlines_expanded)
        .iter()
        .map(|h| {
            Line::from(Span::styled(
                truncate_to_width(&format!("• {}", h.text), max),
                Style::default().fg(severity_color(th, h.severity)),
            ))
        })
        .collect();
    if headlines().len() > visible_headlines(false).len() {
        let key = app
            .settings
            .keymap
            .toggle_headlines
            .first()
            .map(crate::theme::KeyChord::label)
            .unwrap_or_default();
        let toggle = if app.headlines_expanded {
            i18n::t(app, "headlines.show_less")
        } else {
            i18n::t(app, "headlines.show_more")
        };
        lines.push(Line::from(Span::styled(
            format!("[{key}] {toggle}"),
            Style::default().fg(th.overlay),
        )));
    }
    lines
}

/// What: Render the dashboard page.
///
/// Details:
/// - Header (title, connectivity, location), then actions on the left and
///   features plus headlines on the right
pub fn render_dashboard(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(area);
    f.render_widget(
        Paragraph::new(header_lines(app, &th)).style(Style::default().bg(th.base)),
        rows[0],
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);
    let actions = Paragraph::new(actions_lines(app, &th))
        .style(Style::default().bg(th.base))
        .block(panel(&th, i18n::t(app, "dashboard.quick_actions")));
    f.render_widget(actions, cols[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(4)])
        .split(cols[1]);
    let features = Paragraph::new(features_lines(app, &th))
        .style(Style::default().bg(th.base))
        .wrap(Wrap { trim: true })
        .block(panel(&th, i18n::t(app, "dashboard.key_features")));
    f.render_widget(features, right[0]);
    let news = Paragraph::new(headline_lines(app, &th, right[1].width))
        .style(Style::default().bg(th.base))
        .block(panel(&th, i18n::t(app, "headlines.title")));
    f.render_widget(news, right[1]);
}
