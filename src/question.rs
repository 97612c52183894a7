use crate::models::{BankEntry, Direction, DirectionMode, Question, QuizError, MIN_BANK_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Banks up to this size use plain rejection sampling for distractors; above
/// it the draw cost is kept bounded with partial index sampling.
const REJECTION_SAMPLING_MAX: usize = 64;

/// Build a four-option question for `bank[index]`: the correct text plus
/// three distinct distractors from the rest of the bank, shuffled so the
/// correct slot is uniform. `correct_index` points at the first option equal
/// to the correct text, so duplicate bank entries can move it onto a twin.
pub fn generate(
    bank: &[BankEntry],
    index: usize,
    mode: DirectionMode,
    rng: &mut impl Rng,
) -> Result<Question, QuizError> {
    if bank.len() < MIN_BANK_SIZE {
        return Err(QuizError::BankTooSmall { found: bank.len() });
    }
    if index >= bank.len() {
        return Err(QuizError::IndexOutOfRange {
            index,
            len: bank.len(),
        });
    }

    let direction = mode.pick(rng);
    let entry = &bank[index];

    let option_text = |i: usize| -> String {
        match direction {
            Direction::WordToMeaning => bank[i].meaning.clone(),
            Direction::MeaningToWord => bank[i].word.clone(),
        }
    };

    let prompt = match direction {
        Direction::WordToMeaning => entry.word.clone(),
        Direction::MeaningToWord => entry.meaning.clone(),
    };
    let correct_text = option_text(index);

    let distractors = pick_distractor_indices(bank.len(), index, rng);
    let mut options = [
        correct_text.clone(),
        option_text(distractors[0]),
        option_text(distractors[1]),
        option_text(distractors[2]),
    ];
    options.shuffle(rng);

    let correct_index = options
        .iter()
        .position(|o| *o == correct_text)
        .expect("correct text is among the options");

    Ok(Question {
        prompt,
        options,
        correct_index,
        correct_text,
        speak_text: entry.word.clone(),
        direction,
    })
}

/// Three distinct indices in `0..len`, none equal to `exclude`, uniformly
/// distributed. Callers guarantee `len >= 4` and `exclude < len`.
pub fn pick_distractor_indices(len: usize, exclude: usize, rng: &mut impl Rng) -> [usize; 3] {
    if len <= REJECTION_SAMPLING_MAX {
        let mut picked = [usize::MAX; 3];
        let mut count = 0;
        while count < 3 {
            let r = rng.gen_range(0..len);
            if r != exclude && !picked[..count].contains(&r) {
                picked[count] = r;
                count += 1;
            }
        }
        picked
    } else {
        // Sample from the bank with `exclude` removed, then shift the upper
        // half back onto real indices.
        let sampled = rand::seq::index::sample(rng, len - 1, 3);
        let mut picked = [0usize; 3];
        for (slot, i) in picked.iter_mut().zip(sampled.iter()) {
            *slot = if i >= exclude { i + 1 } else { i };
        }
        picked
    }
}
