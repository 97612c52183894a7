use crate::models::DirectionMode;
use clap::{Parser, ValueEnum};

/// Vocabulary quiz CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a word bank CSV; loads it directly, skipping the deck menu
    #[arg(short = 'i', long = "input")]
    pub bank_path: Option<String>,

    /// Which side of an entry becomes the prompt
    #[arg(long = "direction", value_enum, default_value_t = DirectionArg::Mixed)]
    pub direction: DirectionArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionArg {
    /// Prompt with the word, answer among meanings
    Word,
    /// Prompt with the meaning, answer among words
    Meaning,
    /// Random direction per question
    Mixed,
}

impl From<DirectionArg> for DirectionMode {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Word => DirectionMode::WordToMeaning,
            DirectionArg::Meaning => DirectionMode::MeaningToWord,
            DirectionArg::Mixed => DirectionMode::Mixed,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["vocab-quiz"]).unwrap();
        assert_eq!(cli.bank_path, None);
        assert_eq!(cli.direction, DirectionArg::Mixed);
    }

    #[test]
    fn test_cli_with_input_path() {
        let cli = Cli::try_parse_from(["vocab-quiz", "-i", "vocab/words.csv"]).unwrap();
        assert_eq!(cli.bank_path, Some("vocab/words.csv".to_string()));
    }

    #[test]
    fn test_cli_direction_values() {
        let cli = Cli::try_parse_from(["vocab-quiz", "--direction", "word"]).unwrap();
        assert_eq!(cli.direction, DirectionArg::Word);

        let cli = Cli::try_parse_from(["vocab-quiz", "--direction", "meaning"]).unwrap();
        assert_eq!(cli.direction, DirectionArg::Meaning);

        assert!(Cli::try_parse_from(["vocab-quiz", "--direction", "upside-down"]).is_err());
    }

    #[test]
    fn test_direction_arg_maps_to_mode() {
        assert_eq!(
            DirectionMode::from(DirectionArg::Word),
            DirectionMode::WordToMeaning
        );
        assert_eq!(
            DirectionMode::from(DirectionArg::Meaning),
            DirectionMode::MeaningToWord
        );
        assert_eq!(DirectionMode::from(DirectionArg::Mixed), DirectionMode::Mixed);
    }
}
