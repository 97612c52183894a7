pub mod bank;
pub mod cli;
pub mod loader;
pub mod logger;
pub mod models;
pub mod question;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use bank::{get_bank_files, load_bank};
pub use cli::{parse_cli, Cli};
pub use loader::spawn_bank_loader;
pub use models::{
    AppState, BankEntry, BankEvent, Direction, DirectionMode, Question, QuizError, QuizSession,
    MIN_BANK_SIZE,
};
pub use session::{handle_quiz_input, NEXT_DELAY};
pub use ui::{draw_loading, draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};
pub use utils::truncate_string;
