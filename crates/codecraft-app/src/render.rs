//! Drawing the two-panel view.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{Activity, App, Focus};
use crate::display;

pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.size());

    draw_title(f, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    draw_guidance(f, columns[0], app);
    draw_editor(f, columns[1], app);
    draw_status(f, rows[2], app);
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "🐍 CodeCraft Interactive Tutor",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "Follow the AI's guidance. Ask questions below the chat.",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

/// Left panel: the latest exchange plus the chat input box.
fn draw_guidance(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let shown = display::latest_exchange(app.session.turns());
    let mut lines: Vec<Line> = Vec::new();
    if let Some(turn) = shown.assistant {
        push_turn_lines(&mut lines, "🤖 Tutor", Color::Cyan, &turn.content);
    }
    if let Some(turn) = shown.user {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        push_turn_lines(&mut lines, "🧑 You", Color::Green, &turn.content);
    }

    let messages = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("💬 Tutor Guidance"),
        );
    f.render_widget(messages, rows[0]);

    let focused = app.focus == Focus::Chat;
    let input_line = if app.chat_input.is_empty() {
        Line::from(Span::styled(
            "Ask a question or type 'next'...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.chat_input.as_str())
    };
    let input = Paragraph::new(input_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(focused))
            .title("Your message"),
    );
    f.render_widget(input, rows[1]);

    if focused {
        let col = app.chat_input.chars().count() as u16;
        let x = (rows[1].x + 1 + col).min(rows[1].right().saturating_sub(2));
        f.set_cursor(x, rows[1].y + 1);
    }
}

/// Right panel: the code editor and, when present, the transient result.
fn draw_editor(f: &mut Frame, area: Rect, app: &App) {
    let readout_height = app
        .result_readout
        .as_deref()
        .map(|text| (text.lines().count() as u16).clamp(1, 6) + 2);

    let rows = match readout_height {
        Some(height) => Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(height)])
            .split(area)
            .to_vec(),
        None => vec![area],
    };

    let focused = app.focus == Focus::Editor;
    let (cursor_row, cursor_col) = app.editor.cursor();
    let inner_height = rows[0].height.saturating_sub(2) as usize;
    let scroll = cursor_row.saturating_sub(inner_height.saturating_sub(1)) as u16;

    let text: Vec<Line> = app
        .editor
        .lines()
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();
    let editor = Paragraph::new(text).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(focused))
            .title("📝 Code Editor"),
    );
    f.render_widget(editor, rows[0]);

    if focused {
        let x = (rows[0].x + 1 + cursor_col as u16).min(rows[0].right().saturating_sub(2));
        let y = rows[0].y + 1 + (cursor_row as u16).saturating_sub(scroll);
        f.set_cursor(x, y.min(rows[0].bottom().saturating_sub(2)));
    }

    if let Some(readout) = app.result_readout.as_deref() {
        let style = if readout.starts_with("💥") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        let result = Paragraph::new(readout)
            .style(style)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Result:"));
        f.render_widget(result, rows[1]);
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(notice) = app.notice.as_deref() {
        Line::from(Span::styled(notice, Style::default().fg(Color::Red)))
    } else {
        match app.activity {
            Activity::RunningCode => Line::from("Running code..."),
            Activity::AwaitingTutor => Line::from("🤖 Waiting for the tutor..."),
            Activity::Idle => Line::from(Span::styled(
                "Tab: switch panel | Enter: send / newline | Ctrl+R: run code | Esc: quit",
                Style::default().fg(Color::DarkGray),
            )),
        }
    };
    f.render_widget(Paragraph::new(line), area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn push_turn_lines(lines: &mut Vec<Line>, who: &str, color: Color, content: &str) {
    lines.push(Line::from(Span::styled(
        format!("{who}:"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    for line in content.lines() {
        lines.push(Line::from(line.to_string()));
    }
}
