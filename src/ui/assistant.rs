use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::assistant::QUICK_RESPONSES;
use crate::i18n;
use crate::session::{ChatMessage, Role};
use crate::state::AppState;
use crate::theme::{Theme, theme};

use super::helpers::{category_color, truncate_to_width};

/// Lines for one chat message: a header with author and time, then the body.
fn message_lines(app: &AppState, th: &Theme, msg: &ChatMessage) -> Vec<Line<'static>> {
    let mut header = match msg.role {
        Role::User => vec![Span::styled(
            i18n::t(app, "assistant.you"),
            Style::default().fg(th.interactive).add_modifier(Modifier::BOLD),
        )],
        Role::Assistant => vec![Span::styled(
            format!("🤖 {}", i18n::t(app, "assistant.title")),
            Style::default().fg(th.success).add_modifier(Modifier::BOLD),
        )],
    };
    header.push(Span::styled(
        format!("  {}", msg.time_label()),
        Style::default().fg(th.overlay),
    ));
    if let Some(category) = msg.category {
        header.push(Span::raw("  "));
        header.push(Span::styled(
            format!("[{}]", i18n::t_fmt1(app, "assistant.agent_badge", category.label())),
            Style::default().fg(category_color(th, category)),
        ));
    }
    let body_style = match msg.role {
        Role::User => Style::default().fg(th.text),
        Role::Assistant => Style::default().fg(th.subtext),
    };
    let mut lines = vec![Line::from(header)];
    lines.extend(
        msg.body
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), body_style))),
    );
    lines.push(Line::from(""));
    lines
}

/// What: Estimate how many rows `lines` occupy when wrapped at `width`.
///
/// Details:
/// - Word wrapping can only add rows, so the result may undercount slightly
///   for long words; the log still scrolls to show the newest message
fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|l| {
            let w: usize = l.spans.iter().map(|s| s.content.width()).sum();
            w.div_ceil(width).max(1)
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn chips_line(app: &AppState, th: &Theme, width: u16) -> Line<'static> {
    let max = usize::from(width.saturating_sub(4)) / QUICK_RESPONSES.len();
    let mut spans = Vec::with_capacity(QUICK_RESPONSES.len() * 2);
    for (i, chip) in QUICK_RESPONSES.iter().enumerate() {
        let style = if app.quick_response_selected == Some(i) {
            Style::default()
                .fg(th.crust)
                .bg(th.interactive)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext).bg(th.mantle)
        };
        spans.push(Span::styled(
            format!(" {} ", truncate_to_width(chip, max.saturating_sub(3))),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// What: Render the assistant chat page.
///
/// Details:
/// - Message log scrolled to the newest entry, a thinking/listening indicator,
///   the quick response chips and the input box with a localized placeholder
pub fn render_assistant(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let mut lines: Vec<Line<'static>> = Vec::new();
    for msg in app.session.messages() {
        lines.extend(message_lines(app, &th, msg));
    }
    let inner_w = rows[0].width.saturating_sub(2);
    let inner_h = rows[0].height.saturating_sub(2);
    let scroll = wrapped_height(&lines, inner_w).saturating_sub(inner_h);
    let voice = if app.session.voice.enabled {
        i18n::t(app, "assistant.voice_on")
    } else {
        i18n::t(app, "assistant.voice_off")
    };
    let log = Paragraph::new(lines)
        .style(Style::default().bg(th.base))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(Line::from(vec![
                    Span::styled(
                        format!(" 🤖 {} ", i18n::t(app, "assistant.title")),
                        Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" 🔊 {voice} "), Style::default().fg(th.overlay)),
                ]))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface)),
        );
    f.render_widget(log, rows[0]);

    let indicator = if app.session.is_listening() {
        Span::styled(
            format!(" 🎤 {}", i18n::t(app, "assistant.listening")),
            Style::default().fg(th.danger).add_modifier(Modifier::BOLD),
        )
    } else if app.session.is_loading() {
        Span::styled(
            format!(" … {}", i18n::t(app, "assistant.thinking")),
            Style::default().fg(th.overlay).add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::raw("")
    };
    f.render_widget(
        Paragraph::new(Line::from(indicator)).style(Style::default().bg(th.base)),
        rows[1],
    );

    let chips = Paragraph::new(chips_line(app, &th, rows[2].width))
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", i18n::t(app, "assistant.quick_responses")),
                    Style::default().fg(th.overlay),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface)),
        );
    f.render_widget(chips, rows[2]);

    let input = &app.session.input;
    let content = if input.is_empty() {
        Span::styled(
            i18n::t_fmt1(app, "assistant.placeholder", app.language.native_name()),
            Style::default().fg(th.overlay),
        )
    } else {
        Span::styled(input.clone(), Style::default().fg(th.text))
    };
    let input_box = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(th.interactive)),
        content,
    ]))
    .style(Style::default().bg(th.base))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.interactive)),
    );
    f.render_widget(input_box, rows[3]);

    if !app.modal.is_open() {
        let right = rows[3].x + rows[3].width.saturating_sub(2);
        let typed = u16::try_from(input.width()).unwrap_or(u16::MAX);
        let x = (rows[3].x + 3).saturating_add(typed).min(right);
        f.set_cursor_position(Position::new(x, rows[3].y + 1));
    }
}
