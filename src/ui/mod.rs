pub mod layout;
mod loading;
mod menu;
mod quiz;
mod summary;
mod wrong_popup;

pub use layout::{calculate_quiz_chunks, calculate_summary_chunks};
pub use loading::draw_loading;
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;
