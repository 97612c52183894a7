use crate::models::QuizSession;
use crate::ui::layout::calculate_quiz_chunks;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, session: &mut QuizSession) {
    let layout = calculate_quiz_chunks(f.area());

    let Some(current) = &session.current else {
        return;
    };

    let header_text = format!(
        "{} - {} - {}",
        session.progress_text(),
        session.score_text(),
        session.deck_name
    );
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let prompt = Paragraph::new(current.prompt.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(current.direction.label()),
        );
    f.render_widget(prompt, layout.prompt_area);

    let option_lines: Vec<Line> = current
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = match session.feedback {
                Some(_) if i == current.correct_index => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Some(feedback) if i == feedback.chosen => {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                }
                Some(_) => Style::default().fg(Color::DarkGray),
                None => Style::default(),
            };
            Line::from(Span::styled(format!("{}. {}", i + 1, option), style))
        })
        .collect();

    let options = Paragraph::new(option_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    let feedback_content = match session.feedback {
        Some(feedback) => {
            let mut text = Text::default();
            if feedback.correct {
                text.push_line(Line::from(Span::styled(
                    "Correct!",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                text.push_line(Line::from(vec![
                    Span::styled(
                        "Wrong. ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Span::from(format!("Answer: {}", current.correct_text)),
                ]));
            }
            text.push_line(Line::from(format!(
                "{}: {}",
                current.speak_text,
                current.meaning_text()
            )));
            text
        }
        None => Text::from(Span::styled(
            "Pick an option with 1-4.",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let feedback = Paragraph::new(feedback_content)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Feedback"));
    f.render_widget(feedback, layout.feedback_area);

    let mut help_text = Vec::new();

    let mut basic_spans = vec![
        Span::styled(
            "1-4",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Answer  "),
    ];
    if !session.wrong.is_empty() {
        basic_spans.extend([
            Span::styled(
                "w",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Missed Words  "),
        ]);
    }
    basic_spans.extend([
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit to Menu"),
    ]);
    help_text.push(Line::from(basic_spans));

    help_text.push(Line::from(vec![
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit App"),
    ]));

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);

    // Render the missed words popup on top if open
    if session.show_wrong_list {
        super::wrong_popup::draw_wrong_popup(f, session);
    }
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit to Menu")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Return to main menu? Your score will be discarded.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Return to Menu)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
