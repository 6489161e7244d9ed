use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::i18n;
use crate::state::{AppState, Modal};
use crate::theme::{KeyChord, theme};

use super::helpers::centered_rect;

/// What: Render a centered modal box with a title and prepared lines.
///
/// Details:
/// - Double border on the mantle background; the area behind is cleared first
fn render_box(f: &mut Frame, rect: Rect, title: &str, lines: Vec<Line<'static>>) {
    let th = theme();
    f.render_widget(Clear, rect);
    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.accent))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(boxw, rect);
}

fn render_alert(f: &mut Frame, app: &AppState, area: Rect, message: &str) {
    let th = theme();
    let mut lines: Vec<Line<'static>> = message
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.text))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        i18n::t(app, "modals.alert.dismiss"),
        Style::default().fg(th.overlay),
    )));
    render_box(
        f,
        centered_rect(area, 70, 9),
        &i18n::t(app, "modals.alert.title"),
        lines,
    );
}

fn render_help(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let km = &app.settings.keymap;
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            i18n::t(app, "modals.help.heading"),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    let rows: [(&str, &[KeyChord]); 10] = [
        ("footer.help", &km.help),
        ("footer.quit", &km.exit),
        ("footer.pages", &km.next_page),
        ("footer.pages", &km.prev_page),
        ("footer.language", &km.cycle_language),
        ("footer.voice_output", &km.toggle_voice_output),
        ("footer.voice_input", &km.voice_input),
        ("footer.location", &km.use_location),
        ("footer.next_place", &km.next_place),
        ("footer.headlines", &km.toggle_headlines),
    ];
    for (label_key, chords) in rows {
        if chords.is_empty() {
            continue;
        }
        let keys: Vec<String> = chords.iter().map(|c| format!("[{}]", c.label())).collect();
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:18}", i18n::t(app, label_key)),
                Style::default().fg(th.overlay).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                keys.join(" "),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        i18n::t(app, "modals.alert.dismiss"),
        Style::default().fg(th.overlay),
    )));
    render_box(
        f,
        centered_rect(area, 60, 18),
        &i18n::t(app, "modals.help.title"),
        lines,
    );
}

/// Render the active modal, if any, over the page.
pub fn render_modals(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => render_alert(f, app, area, message),
        Modal::Help => render_help(f, app, area),
    }
}
