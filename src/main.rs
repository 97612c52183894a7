use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use vocab_quiz::models::{AppState, BankEvent, DirectionMode, QuizSession};
use vocab_quiz::session::handle_quiz_input;
use vocab_quiz::{bank, cli, loader, logger, ui};

/// Poll timeout for the event loop; also the resolution of the delayed
/// advance between questions.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    logger::init();

    let args = cli::parse_cli();
    let direction_mode = DirectionMode::from(args.direction);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::Menu;
    let bank_files = bank::get_bank_files();
    let mut selected_index: usize = 0;
    let mut quiz_session: Option<QuizSession> = None;
    let mut status_message: Option<String> = None;
    let mut bank_rx: Option<Receiver<BankEvent>> = None;
    let mut loading_deck = String::new();

    // An explicit --input skips the menu and loads that bank directly.
    if let Some(path) = &args.bank_path {
        let path = PathBuf::from(path);
        loading_deck = deck_name_of(&path);
        bank_rx = Some(loader::spawn_bank_loader(loading_deck.clone(), path));
        app_state = AppState::Loading;
    }

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => ui::draw_menu(
                f,
                &bank_files,
                selected_index,
                direction_mode,
                status_message.as_deref(),
            ),
            AppState::Loading => ui::draw_loading(f, &loading_deck),
            AppState::Quiz => {
                if let Some(session) = &mut quiz_session {
                    ui::draw_quiz(f, session);
                }
            }
            AppState::QuizQuitConfirm => ui::draw_quit_confirmation(f),
            AppState::Summary => {
                if let Some(session) = &quiz_session {
                    ui::draw_summary(f, session);
                }
            }
        })?;

        // Take any loader event first so the channel can be dropped before
        // state moves on.
        let mut pending: Option<BankEvent> = None;
        if let Some(rx) = &bank_rx {
            match rx.try_recv() {
                Ok(bank_event) => pending = Some(bank_event),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    pending = Some(BankEvent::Failed {
                        deck_name: loading_deck.clone(),
                        error: "loader thread exited".to_string(),
                    });
                }
            }
        }
        if let Some(bank_event) = pending {
            bank_rx = None;
            match bank_event {
                BankEvent::Loaded { deck_name, entries } => {
                    match QuizSession::new(
                        deck_name,
                        entries,
                        direction_mode,
                        &mut rand::thread_rng(),
                    ) {
                        Ok(session) => {
                            quiz_session = Some(session);
                            status_message = None;
                            app_state = AppState::Quiz;
                        }
                        Err(e) => {
                            logger::log(&format!("Could not start session: {}", e));
                            status_message = Some(e.to_string());
                            app_state = AppState::Menu;
                        }
                    }
                }
                BankEvent::Failed { deck_name, error } => {
                    logger::log(&format!("Could not load {}: {}", deck_name, error));
                    status_message = Some(format!("Could not load {}: {}", deck_name, error));
                    app_state = AppState::Menu;
                }
            }
        }

        // Drive the delayed advance between questions.
        if app_state == AppState::Quiz
            && let Some(session) = &mut quiz_session
        {
            session.tick(Instant::now(), &mut rand::thread_rng());
            if session.is_complete() {
                app_state = AppState::Summary;
            }
        }

        if event::poll(TICK_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            match app_state {
                AppState::Menu => match key.code {
                    KeyCode::Up => {
                        if selected_index > 0 {
                            selected_index -= 1;
                        }
                    }
                    KeyCode::Down => {
                        if selected_index < bank_files.len().saturating_sub(1) {
                            selected_index += 1;
                        }
                    }
                    KeyCode::Enter => {
                        if !bank_files.is_empty() {
                            let path = bank_files[selected_index].clone();
                            loading_deck = deck_name_of(&path);
                            status_message = None;
                            bank_rx = Some(loader::spawn_bank_loader(loading_deck.clone(), path));
                            app_state = AppState::Loading;
                        }
                    }
                    KeyCode::Char('q') => break,
                    _ => {}
                },
                AppState::Loading => {}
                AppState::Quiz => {
                    if let Some(session) = &mut quiz_session {
                        handle_quiz_input(session, key, &mut app_state);
                    }
                }
                AppState::QuizQuitConfirm => match key.code {
                    KeyCode::Char('y') => {
                        app_state = AppState::Menu;
                        quiz_session = None;
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        app_state = AppState::Quiz;
                    }
                    _ => {}
                },
                AppState::Summary => match key.code {
                    KeyCode::Char('r') => {
                        if let Some(session) = &mut quiz_session {
                            session.restart(&mut rand::thread_rng());
                            app_state = AppState::Quiz;
                        }
                    }
                    KeyCode::Char('m') => {
                        app_state = AppState::Menu;
                        quiz_session = None;
                    }
                    KeyCode::Char('q') => break,
                    _ => {}
                },
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn deck_name_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_name_strips_directory_and_extension() {
        assert_eq!(deck_name_of(Path::new("vocab/animals.csv")), "animals");
        assert_eq!(deck_name_of(Path::new("words.csv")), "words");
        assert_eq!(deck_name_of(Path::new("words")), "words");
    }
}
