use rand::Rng;
use std::time::Instant;
use thiserror::Error;

/// Smallest bank that can supply one correct answer and three distractors.
pub const MIN_BANK_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankEntry {
    pub word: String,
    pub meaning: String,
}

/// Which side of an entry is shown as the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    WordToMeaning,
    MeaningToWord,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::WordToMeaning => "word → meaning",
            Direction::MeaningToWord => "meaning → word",
        }
    }
}

/// Prompt direction policy for a whole session. `Mixed` flips a coin per
/// question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionMode {
    WordToMeaning,
    MeaningToWord,
    Mixed,
}

impl DirectionMode {
    pub fn pick(&self, rng: &mut impl Rng) -> Direction {
        match self {
            DirectionMode::WordToMeaning => Direction::WordToMeaning,
            DirectionMode::MeaningToWord => Direction::MeaningToWord,
            DirectionMode::Mixed => {
                if rng.gen_bool(0.5) {
                    Direction::WordToMeaning
                } else {
                    Direction::MeaningToWord
                }
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DirectionMode::WordToMeaning => "word → meaning",
            DirectionMode::MeaningToWord => "meaning → word",
            DirectionMode::Mixed => "mixed",
        }
    }
}

/// One multiple-choice question, built fresh for each draw.
#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: String,
    pub options: [String; 4],
    pub correct_index: usize,
    pub correct_text: String,
    /// Pronunciation text, always the source-language word.
    pub speak_text: String,
    pub direction: Direction,
}

impl Question {
    /// The meaning side of the underlying entry, whichever way the question
    /// was asked.
    pub fn meaning_text(&self) -> &str {
        match self.direction {
            Direction::WordToMeaning => &self.correct_text,
            Direction::MeaningToWord => &self.prompt,
        }
    }
}

/// What the user picked and whether it was right, kept on screen until the
/// delayed advance fires.
#[derive(Debug, Clone, Copy)]
pub struct AnswerFeedback {
    pub chosen: usize,
    pub correct: bool,
}

#[derive(Debug)]
pub struct QuizSession {
    pub bank: Vec<BankEntry>,
    pub deck_name: String,
    /// Shuffled permutation of bank indices; the question order for this run.
    pub order: Vec<usize>,
    pub pos: usize,
    pub answered: usize,
    pub correct: usize,
    pub current: Option<Question>,
    pub feedback: Option<AnswerFeedback>,
    pub advance_at: Option<Instant>,
    /// Missed questions, deduplicated by prompt text.
    pub wrong: Vec<Question>,
    pub show_wrong_list: bool,
    pub wrong_scroll: u16,
    pub direction_mode: DirectionMode,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Loading,
    Quiz,
    QuizQuitConfirm,
    Summary,
}

/// Outcome of an asynchronous bank load, sent once by the loader thread.
#[derive(Debug)]
pub enum BankEvent {
    Loaded {
        deck_name: String,
        entries: Vec<BankEntry>,
    },
    Failed {
        deck_name: String,
        error: String,
    },
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to read word bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("word bank has {found} usable entries, need at least {}", MIN_BANK_SIZE)]
    BankTooSmall { found: usize },
    #[error("entry index {index} out of range for bank of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
