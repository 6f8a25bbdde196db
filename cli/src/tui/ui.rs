use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};
use todolist_core::notify::NoticeKind;
use todolist_core::TaskStore;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode, Modal};

pub fn draw<S: TaskStore>(f: &mut Frame, app: &mut App<S>) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // New task input
            Constraint::Length(1), // Filter bar
            Constraint::Min(1),    // Rows
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("TODOLIST")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_input(f, app, main_chunks[1]);
    draw_filter_bar(f, app, main_chunks[2]);
    draw_task_list(f, app, main_chunks[3]);

    let help = match app.input_mode {
        InputMode::Normal => "a: Add | Space: Toggle | d: Remove | 1/2/3 f: Filter | j/k: Navigate | q: Quit",
        InputMode::Adding => "Enter: Add task | Esc: Cancel",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[4]);

    if let Some(modal) = &app.modal {
        draw_modal(f, modal, size);
    }
}

fn draw_input<S: TaskStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (style, title) = match app.input_mode {
        InputMode::Normal => (Style::default().fg(Color::DarkGray), " New task (a) "),
        InputMode::Adding => (Style::default().fg(Color::Yellow), " New task "),
    };
    let input = Paragraph::new(app.input.as_str())
        .style(style)
        .block(Block::default().title(title).borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(input, area);

    if let InputMode::Adding = app.input_mode {
        let before: String = app.input.chars().take(app.cursor_position).collect();
        let x = area.x + 1 + before.width() as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_filter_bar<S: TaskStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = vec![Span::raw(" Show: ")];
    for control in app.controller.filter_bar() {
        let style = if control.active {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", control.filter), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_task_list<S: TaskStore>(f: &mut Frame, app: &mut App<S>, area: Rect) {
    let rows: Vec<Row> = app.controller.rows().iter().map(|row| {
        let (check, text_style) = if row.completed {
            ("[x]", Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT))
        } else {
            ("[ ]", Style::default().add_modifier(Modifier::BOLD))
        };

        Row::new(vec![
            Span::raw(check),
            Span::styled(row.text.clone(), text_style),
            Span::styled("Remove", Style::default().fg(Color::Red)),
        ])
    }).collect();

    let title = format!(" Tasks ({}) ", app.controller.filter());
    let table = Table::new(
        rows,
        [
            Constraint::Length(3), // Checkbox
            Constraint::Min(10),   // Text
            Constraint::Length(6), // Remove
        ]
    )
    .block(Block::default().title(title).borders(Borders::ALL).border_type(BorderType::Rounded))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_modal(f: &mut Frame, modal: &Modal, area: Rect) {
    let (title, message, hint, color) = match modal {
        Modal::ConfirmDelete(pending) => (
            pending.title(),
            format!("{}\n\n\"{}\"", pending.message(), pending.text()),
            "y: Yes, delete it! | n: Cancel",
            Color::Yellow,
        ),
        Modal::Notice(notice) => (
            notice.title.as_str(),
            notice.message.clone(),
            "Press any key",
            match notice.kind {
                NoticeKind::Success => Color::Green,
                _ => Color::Cyan,
            },
        ),
    };

    let mut lines: Vec<Line> = message.lines().map(|l| Line::from(l.to_string())).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));

    let popup_area = centered_rect(60, 40, area);
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(Clear, popup_area);
    f.render_widget(popup, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};
    use todolist_core::{MemoryTaskStore, Task};

    fn screen(app: &mut App<MemoryTaskStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn sample_app() -> App<MemoryTaskStore> {
        let mut b = Task::new("Walk dog");
        b.completed = true;
        App::new(MemoryTaskStore::with_tasks(&[Task::new("Buy milk"), b]).unwrap())
    }

    #[test]
    fn test_draws_rows_and_filters() {
        let mut app = sample_app();
        let out = screen(&mut app);
        assert!(out.contains("Buy milk"));
        assert!(out.contains("Walk dog"));
        assert!(out.contains("[x]"));
        assert!(out.contains(" all "));
        assert!(out.contains(" completed "));
    }

    #[test]
    fn test_filtered_rows_are_redrawn() {
        let mut app = sample_app();
        app.on_key(KeyCode::Char('2'));
        let out = screen(&mut app);
        assert!(out.contains("Buy milk"));
        assert!(!out.contains("Walk dog"));
        assert!(out.contains("Tasks (active)"));
    }

    #[test]
    fn test_draws_confirmation_popup() {
        let mut app = sample_app();
        app.on_key(KeyCode::Char('d'));
        let out = screen(&mut app);
        assert!(out.contains("Are you sure?"));
        assert!(out.contains("y: Yes, delete it!"));
    }
}
