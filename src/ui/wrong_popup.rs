use crate::models::QuizSession;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
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
        .split(popup_layout[1])[1]
}

pub fn draw_wrong_popup(f: &mut Frame, session: &mut QuizSession) {
    let area = centered_rect(70, 70, f.area());

    f.render_widget(Clear, area);

    let title = format!(" Missed Words ({}) ", session.wrong.len());

    // Split popup into the word list and a help line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for question in &session.wrong {
        lines.push(Line::from(vec![
            Span::styled(
                question.speak_text.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(format!(": {}", question.meaning_text())),
        ]));
    }

    // Keep the scroll offset inside the list bounds
    let visible_height = chunks[0].height.saturating_sub(2);
    let max_scroll = (lines.len() as u16).saturating_sub(visible_height);
    session.wrong_scroll = session.wrong_scroll.min(max_scroll);

    let list = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((session.wrong_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(list, chunks[0]);

    let help_spans = vec![
        Span::styled(
            "w",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from("/"),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Close  "),
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Scroll"),
    ];

    let help = Paragraph::new(Line::from(help_spans))
        .alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
