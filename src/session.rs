use crate::logger;
use crate::models::{
    AnswerFeedback, AppState, BankEntry, DirectionMode, QuizError, QuizSession, MIN_BANK_SIZE,
};
use crate::question;
use crossterm::event::{KeyCode, KeyEvent};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::{Duration, Instant};

/// How long answer feedback stays on screen before the next question.
pub const NEXT_DELAY: Duration = Duration::from_millis(2000);

pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    if session.show_wrong_list {
        match key.code {
            KeyCode::Esc | KeyCode::Char('w') => {
                session.show_wrong_list = false;
                session.wrong_scroll = 0;
            }
            KeyCode::Up => {
                session.wrong_scroll = session.wrong_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                session.wrong_scroll = session.wrong_scroll.saturating_add(1);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuizQuitConfirm;
        }
        KeyCode::Char('w') => {
            if !session.wrong.is_empty() {
                session.show_wrong_list = true;
            }
        }
        KeyCode::Char(c @ '1'..='4') => {
            let option = c as usize - '1' as usize;
            session.choose(option, Instant::now());
        }
        _ => {}
    }
}

impl QuizSession {
    pub fn new(
        deck_name: String,
        bank: Vec<BankEntry>,
        direction_mode: DirectionMode,
        rng: &mut impl Rng,
    ) -> Result<Self, QuizError> {
        if bank.len() < MIN_BANK_SIZE {
            return Err(QuizError::BankTooSmall { found: bank.len() });
        }

        let mut order: Vec<usize> = (0..bank.len()).collect();
        order.shuffle(rng);

        let current = question::generate(&bank, order[0], direction_mode, rng)?;

        Ok(QuizSession {
            bank,
            deck_name,
            order,
            pos: 0,
            answered: 0,
            correct: 0,
            current: Some(current),
            feedback: None,
            advance_at: None,
            wrong: Vec::new(),
            show_wrong_list: false,
            wrong_scroll: 0,
            direction_mode,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.current.is_none()
    }

    /// Score an answer. Ignored while feedback is already showing and after
    /// the session has completed.
    pub fn choose(&mut self, option: usize, now: Instant) {
        if self.feedback.is_some() || option >= 4 {
            return;
        }
        let Some(current) = &self.current else {
            return;
        };

        self.answered += 1;
        let correct = option == current.correct_index;
        if correct {
            self.correct += 1;
        } else if !self.wrong.iter().any(|q| q.prompt == current.prompt) {
            self.wrong.push(current.clone());
        }

        self.feedback = Some(AnswerFeedback {
            chosen: option,
            correct,
        });
        self.advance_at = Some(now + NEXT_DELAY);
    }

    /// Advance past the feedback once its deadline has passed. Called from
    /// the main loop on every poll timeout.
    pub fn tick(&mut self, now: Instant, rng: &mut impl Rng) {
        if let Some(deadline) = self.advance_at
            && now >= deadline
        {
            self.advance_at = None;
            self.feedback = None;
            self.next_question(rng);
        }
    }

    fn next_question(&mut self, rng: &mut impl Rng) {
        self.pos += 1;
        if self.pos >= self.order.len() {
            self.current = None;
            logger::log(&format!(
                "Session complete for {}: {} correct out of {}",
                self.deck_name, self.correct, self.answered
            ));
            return;
        }

        match question::generate(&self.bank, self.order[self.pos], self.direction_mode, rng) {
            Ok(q) => self.current = Some(q),
            Err(e) => {
                logger::log(&format!("Question generation failed: {}", e));
                self.current = None;
            }
        }
    }

    /// Fresh run over the same bank: new order, counts and missed list reset.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.order.shuffle(rng);
        self.pos = 0;
        self.answered = 0;
        self.correct = 0;
        self.feedback = None;
        self.advance_at = None;
        self.wrong.clear();
        self.show_wrong_list = false;
        self.wrong_scroll = 0;

        match question::generate(&self.bank, self.order[0], self.direction_mode, rng) {
            Ok(q) => self.current = Some(q),
            Err(e) => {
                logger::log(&format!("Question generation failed: {}", e));
                self.current = None;
            }
        }
    }

    pub fn progress_text(&self) -> String {
        let total = self.order.len();
        let shown = (self.pos + 1).min(total);
        format!("Question {} / {} (answered: {})", shown, total, self.answered)
    }

    pub fn score_text(&self) -> String {
        format!("Correct: {} / {}", self.correct, self.answered)
    }
}
