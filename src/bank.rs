use crate::models::{BankEntry, QuizError, MIN_BANK_SIZE};
use std::fs;
use std::path::PathBuf;

pub fn get_bank_files() -> Vec<PathBuf> {
    let vocab_dir = PathBuf::from("vocab");
    let mut files = Vec::new();

    if vocab_dir.exists()
        && vocab_dir.is_dir()
        && let Ok(entries) = fs::read_dir(&vocab_dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && ext == "csv"
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

pub fn load_bank(path: &PathBuf) -> Result<Vec<BankEntry>, QuizError> {
    let content = fs::read_to_string(path)?;
    let entries = parse_bank(&content);

    if entries.len() < MIN_BANK_SIZE {
        return Err(QuizError::BankTooSmall {
            found: entries.len(),
        });
    }

    Ok(entries)
}

/// Blank lines are dropped first; the first remaining line is the header row
/// and is never treated as an entry.
pub fn parse_bank(content: &str) -> Vec<BankEntry> {
    let mut entries = Vec::new();

    for line in content
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .skip(1)
    {
        if let Some(entry) = parse_bank_row(line) {
            entries.push(entry);
        }
    }

    entries
}

/// Split on commas; everything after the first comma is the meaning, rejoined
/// as-is. Rows with fewer than two columns or an empty side are skipped.
pub fn parse_bank_row(line: &str) -> Option<BankEntry> {
    let cols: Vec<&str> = line.split(',').collect();
    if cols.len() < 2 {
        return None;
    }

    let word = cols[0].strip_prefix('\u{feff}').unwrap_or(cols[0]).trim();
    let meaning = cols[1..].join(",");
    let meaning = meaning.trim();

    if word.is_empty() || meaning.is_empty() {
        return None;
    }

    Some(BankEntry {
        word: word.to_string(),
        meaning: meaning.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_row_simple() {
        let row = parse_bank_row("hello,你好");
        assert_eq!(
            row,
            Some(BankEntry {
                word: "hello".to_string(),
                meaning: "你好".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_row_single_column_skipped() {
        assert_eq!(parse_bank_row("cat"), None);
    }

    #[test]
    fn test_parse_row_extra_columns_rejoined() {
        let row = parse_bank_row("a,b,c");
        assert_eq!(
            row,
            Some(BankEntry {
                word: "a".to_string(),
                meaning: "b,c".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_row_strips_bom() {
        let row = parse_bank_row("\u{feff}hello,你好");
        assert_eq!(row.unwrap().word, "hello");
    }

    #[test]
    fn test_parse_row_trims_fields() {
        let row = parse_bank_row("  hello ,  你好  ").unwrap();
        assert_eq!(row.word, "hello");
        assert_eq!(row.meaning, "你好");
    }

    #[test]
    fn test_parse_row_empty_word_skipped() {
        assert_eq!(parse_bank_row(" ,你好"), None);
    }

    #[test]
    fn test_parse_row_empty_meaning_skipped() {
        assert_eq!(parse_bank_row("hello,  "), None);
    }

    #[test]
    fn test_parse_bank_skips_header() {
        let entries = parse_bank("word,meaning\nhello,你好\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "hello");
        assert_eq!(entries[0].meaning, "你好");
    }

    #[test]
    fn test_parse_bank_crlf_line_endings() {
        let entries = parse_bank("word,meaning\r\nhello,你好\r\nbye,再見\r\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].word, "bye");
        assert_eq!(entries[1].meaning, "再見");
    }

    #[test]
    fn test_parse_bank_blank_lines_dropped_before_header_skip() {
        // The header is the first non-blank line, not literally line one.
        let entries = parse_bank("\n\nword,meaning\nhello,你好\n\nbye,再見\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "hello");
    }

    #[test]
    fn test_parse_bank_skips_malformed_rows() {
        let entries = parse_bank("word,meaning\ncat\nhello,你好\n,orphan\nempty,\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "hello");
    }

    #[test]
    fn test_parse_bank_empty_input() {
        assert!(parse_bank("").is_empty());
    }

    #[test]
    fn test_parse_bank_header_only() {
        assert!(parse_bank("word,meaning\n").is_empty());
    }

    #[test]
    fn test_load_bank_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");
        match load_bank(&path) {
            Err(QuizError::Io(_)) => {}
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_bank_too_small() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.csv");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "word,meaning").unwrap();
        writeln!(file, "a,一").unwrap();
        writeln!(file, "b,二").unwrap();
        writeln!(file, "c,三").unwrap();

        match load_bank(&path) {
            Err(QuizError::BankTooSmall { found }) => assert_eq!(found, 3),
            other => panic!("expected BankTooSmall, got {:?}", other),
        }
    }

    #[test]
    fn test_load_bank_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.csv");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "word,meaning").unwrap();
        writeln!(file, "cat,貓").unwrap();
        writeln!(file, "dog,狗").unwrap();
        writeln!(file, "bird,鳥").unwrap();
        writeln!(file, "fish,魚").unwrap();

        let entries = load_bank(&path).unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].word, "cat");
        assert_eq!(entries[3].meaning, "魚");
    }
}
