use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode, PageMode};
use crate::ellipsis::{TailEllipsis, ELLIPSIS};

/// Renders the user interface widgets.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title_text = match app.page_mode {
        PageMode::Single => "tailtrim: single widget",
        PageMode::Table => "tailtrim: table",
    };
    let title_para = Paragraph::new(title_text)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title_para, chunks[0]);

    if app.input_mode == InputMode::Help {
        render_help_menu(frame, chunks[1]);
    } else {
        match app.page_mode {
            PageMode::Single => render_single(app, frame, chunks[1]),
            PageMode::Table => render_table(app, frame, chunks[1]),
        }
    }

    render_command_bar(app, frame, chunks[2]);
}

/// The single-widget story: one sample inside a container whose width the
/// user adjusts, with the tooltip bar and the computed segments below it.
fn render_single(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // container
            Constraint::Length(1), // tooltip bar
            Constraint::Min(0),    // status
        ])
        .split(area);

    // Center the container horizontally at its requested width.
    let container_width = app.container_width.min(rows[0].width);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(container_width),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    let container = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} cols", app.container_width));
    let inner = container.inner(columns[1]);
    frame.render_widget(container, columns[1]);

    // The container shows the debounced truncation state owned by the app.
    let truncation = &app.truncation;
    let mut spans = Vec::with_capacity(3);
    if !truncation.prefix.is_empty() {
        spans.push(Span::raw(truncation.prefix.as_str()));
    }
    if truncation.is_truncated() {
        spans.push(Span::styled(
            ELLIPSIS,
            Style::default().fg(Color::DarkGray),
        ));
    }
    if !truncation.tail.is_empty() {
        spans.push(Span::raw(truncation.tail.as_str()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    // Tooltip appears only while the text overflows the container.
    if let Some(title) = app.tooltip() {
        let tooltip = Paragraph::new(Line::from(vec![
            Span::styled("tooltip: ", Style::default().fg(Color::DarkGray)),
            Span::styled(title, Style::default().fg(Color::Yellow)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(tooltip, rows[1]);
    }

    let status_lines = vec![
        Line::from(format!(
            "sample {}/{}: {}",
            app.sample_index + 1,
            app.samples.len(),
            app.current_text()
        )),
        Line::from(format!(
            "tail length: {}   measured: {} cols   available: {} cols",
            app.tail_len,
            app.measured_width()
                .map_or_else(|| "?".to_string(), |w| w.to_string()),
            app.available_width()
        )),
        Line::from(format!(
            "overflow: {}   visible: {:?}   hidden: {} chars",
            truncation.overflow,
            truncation.display(),
            truncation.hidden.chars().count()
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[←/→] resize container  [+/-] tail length  [n/p] sample",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let status = Paragraph::new(status_lines)
        .block(Block::default().title("State").borders(Borders::ALL))
        .style(Style::default().fg(Color::White));
    frame.render_widget(status, rows[2]);
}

/// The table story: many generated rows in two fixed columns, each cell
/// truncated by the widget against its own cell width.
fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let total = app.table_rows.len();
    let start = app.scroll as usize;
    let end = (start + app.rows_per_page()).min(total);

    let block = Block::default()
        .title(format!(
            "Rows {}-{}/{} (tail {})",
            if total == 0 { 0 } else { start + 1 },
            end,
            total,
            app.tail_len
        ))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (line, row) in app.table_rows[start..end].iter().enumerate() {
        let y = inner.y + line as u16;
        if y >= inner.y + inner.height {
            break;
        }
        for column in columns.iter() {
            let cell = Rect::new(column.x, y, column.width.saturating_sub(1), 1);
            frame.render_widget(TailEllipsis::new(row, app.tail_len), cell);
        }
    }
}

/// Renders the help menu with all available commands.
fn render_help_menu(frame: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled(
            "Demo Commands",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )]),
        Line::from(""),
        Line::from("←/h, →/l       - Shrink/grow the demo container"),
        Line::from("+/=, -         - Increase/decrease tail length"),
        Line::from("n, p           - Next/previous sample text"),
        Line::from("t/Tab          - Toggle single/table story"),
        Line::from("↑/k, ↓/j       - Scroll the table"),
        Line::from("?              - Toggle this help menu"),
        Line::from("q/Esc          - Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Overflowing text keeps its last N characters visible; the",
            Style::default().fg(Color::Gray),
        )]),
        Line::from(vec![Span::styled(
            "elided middle is never drawn but still reconstructs exactly.",
            Style::default().fg(Color::Gray),
        )]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title("Help - Available Commands")
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::White));
    frame.render_widget(help_paragraph, area);
}

fn render_command_bar(app: &App, frame: &mut Frame, area: Rect) {
    let commands = if app.input_mode == InputMode::Help {
        "[q/Esc/?] Exit Help"
    } else {
        match app.page_mode {
            PageMode::Single => {
                "[←→] Width  [+/-] Tail  [n/p] Sample  [t] Table  [?] Help  [q] Quit"
            }
            PageMode::Table => {
                "[↑↓] Scroll  [+/-] Tail  [t] Single  [?] Help  [q] Quit"
            }
        }
    };

    let command_bar = Paragraph::new(commands)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
    frame.render_widget(command_bar, area);
}
