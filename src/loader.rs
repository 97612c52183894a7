use crate::bank::load_bank;
use crate::logger;
use crate::models::BankEvent;
use crossbeam_channel::{bounded, Receiver};
use std::path::PathBuf;
use std::thread;

/// Load a word bank off the UI thread. Exactly one event is sent back; the
/// thread exits after sending.
pub fn spawn_bank_loader(deck_name: String, path: PathBuf) -> Receiver<BankEvent> {
    let (tx, rx) = bounded(1);

    thread::Builder::new()
        .name("vocab-quiz::bank_loader".to_string())
        .spawn(move || {
            logger::log(&format!("Loading word bank from {}", path.display()));
            match load_bank(&path) {
                Ok(entries) => {
                    logger::log(&format!(
                        "Loaded {} entries for deck {}",
                        entries.len(),
                        deck_name
                    ));
                    let _ = tx.send(BankEvent::Loaded { deck_name, entries });
                }
                Err(e) => {
                    logger::log(&format!("Load failed for deck {}: {}", deck_name, e));
                    let _ = tx.send(BankEvent::Failed {
                        deck_name,
                        error: e.to_string(),
                    });
                }
            }
        })
        .expect("Failed to spawn bank loader thread");

    rx
}
