use crate::core::LedgerConfig;
use crate::io::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Replay ledger operations from a CSV file
#[derive(Parser, Debug)]
#[command(name = "bank-ledger-engine")]
#[command(about = "Replay load/authorize/balance/verify operations against an in-memory ledger", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation rows (op,account,amount)
    #[arg(value_name = "INPUT", help = "Path to the input operations CSV file")]
    pub input_file: PathBuf,

    /// Bounded wait for per-account balance locks
    #[arg(
        long = "lock-wait-ms",
        value_name = "MILLIS",
        help = "Bounded wait for acquiring an account's balance lock (default: 100)"
    )]
    pub lock_wait_ms: Option<u64>,

    /// Output format for operation results
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "text",
        help = "Output format: 'text' for status lines or 'json' for one object per line"
    )]
    pub format: OutputFormat,
}

impl CliArgs {
    /// Create a LedgerConfig from CLI arguments
    ///
    /// Uses the provided lock wait if any, falling back to the default
    /// bound otherwise.
    pub fn to_ledger_config(&self) -> LedgerConfig {
        match self.lock_wait_ms {
            Some(ms) => LedgerConfig::new(ms),
            None => LedgerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;

    #[rstest]
    #[case::default_bound(&["program", "ops.csv"], 100)]
    #[case::custom_bound(&["program", "--lock-wait-ms", "250", "ops.csv"], 250)]
    #[case::zero_falls_back(&["program", "--lock-wait-ms", "0", "ops.csv"], 100)]
    fn test_to_ledger_config(#[case] args: &[&str], #[case] expected_ms: u64) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_ledger_config();
        assert_eq!(config.lock_wait, Duration::from_millis(expected_ms));
    }

    #[test]
    fn test_input_file_is_parsed() {
        let parsed = CliArgs::try_parse_from(["program", "ops.csv"]).unwrap();
        assert_eq!(parsed.input_file, PathBuf::from("ops.csv"));
    }

    #[rstest]
    #[case::default_format(&["program", "ops.csv"], OutputFormat::Text)]
    #[case::explicit_text(&["program", "--format", "text", "ops.csv"], OutputFormat::Text)]
    #[case::json(&["program", "--format", "json", "ops.csv"], OutputFormat::Json)]
    fn test_format_parsing(#[case] args: &[&str], #[case] expected: OutputFormat) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.format, expected);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::non_numeric_wait(&["program", "--lock-wait-ms", "fast", "ops.csv"])]
    #[case::invalid_format(&["program", "--format", "xml", "ops.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
