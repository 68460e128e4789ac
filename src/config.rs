//! Command-line configuration.

use clap::{Parser, ValueEnum};

use crate::baselines::{StdSorter, StdUnstableSorter};
use crate::bubble::{BubbleSorter, EarlyExitBubbleSorter};
use crate::Sorter;

/// Sequence the playground sorts when none is given.
pub const DEFAULT_SEQUENCE: [i32; 9] = [3, 1, 4, 1, 5, 9, 2, 6, 5];

/// Exit status for values that are not 32-bit integers (EX_DATAERR).
/// Kept apart from clap's usage-error status 2.
pub const EXIT_BAD_INPUT: u8 = 65;

const AFTER_HELP: &str = "\
A comma-joined group that starts with a minus sign must follow `--`:
  sort-playground -- -5,3 1

Exit status: 0 on success, 2 on usage errors, 65 when a value is not a
32-bit integer, 1 on any other failure.";

/// Sort a sequence of integers in place and print the result
#[derive(Debug, Parser)]
#[command(name = "sort-playground", version, about, after_help = AFTER_HELP)]
pub struct Config {
    /// Sorting implementation to run
    #[arg(long, value_enum, default_value_t = SorterKind::Bubble)]
    pub sorter: SorterKind,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log filter (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Also print sum, count, average, min/max and the derived lists
    #[arg(long)]
    pub summary: bool,

    /// Integers to sort, separated by spaces or commas (use `--` before a
    /// group like `-5,3`)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SorterKind {
    Bubble,
    BubbleEarlyExit,
    Std,
    StdUnstable,
}

impl SorterKind {
    pub fn sorter(self) -> Box<dyn Sorter> {
        match self {
            SorterKind::Bubble => Box::new(BubbleSorter),
            SorterKind::BubbleEarlyExit => Box::new(EarlyExitBubbleSorter),
            SorterKind::Std => Box::new(StdSorter),
            SorterKind::StdUnstable => Box::new(StdUnstableSorter),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["sort-playground"]).unwrap();
        assert_eq!(config.sorter, SorterKind::Bubble);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, "warn");
        assert!(!config.summary);
        assert!(config.values.is_empty());
    }

    #[test]
    fn test_flags_and_negative_values() {
        let config = Config::try_parse_from([
            "sort-playground",
            "--sorter",
            "bubble-early-exit",
            "--format",
            "json",
            "--summary",
            "0",
            "-5",
            "3",
            "-1",
        ])
        .unwrap();
        assert_eq!(config.sorter, SorterKind::BubbleEarlyExit);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.summary);
        assert_eq!(config.values, vec!["0", "-5", "3", "-1"]);
    }

    #[test]
    fn test_comma_group_with_leading_minus_after_escape() {
        let config = Config::try_parse_from(["sort-playground", "--", "-5,3", "1"]).unwrap();
        assert_eq!(config.values, vec!["-5,3", "1"]);

        let config = Config::try_parse_from(["sort-playground", "3,-5"]).unwrap();
        assert_eq!(config.values, vec!["3,-5"]);
    }

    #[test]
    fn test_bad_input_status_differs_from_usage_status() {
        let err = Config::try_parse_from(["sort-playground", "--bogus"]).unwrap_err();
        assert_ne!(err.exit_code(), i32::from(EXIT_BAD_INPUT));

        let help = Config::command().render_long_help().to_string();
        assert!(help.contains("65"));
        assert!(help.contains("-- -5,3"));
    }

    #[test]
    fn test_unknown_sorter_rejected() {
        assert!(Config::try_parse_from(["sort-playground", "--sorter", "quick"]).is_err());
    }

    #[test]
    fn test_sorter_names() {
        assert_eq!(SorterKind::Bubble.sorter().name(), "bubble");
        assert_eq!(SorterKind::BubbleEarlyExit.sorter().name(), "bubble_early_exit");
        assert_eq!(SorterKind::Std.sorter().name(), "std");
        assert_eq!(SorterKind::StdUnstable.sorter().name(), "std_unstable");
    }
}
