//! Command-line options for the report.

use std::path::PathBuf;

use clap::Parser;

/// Verifies the fast evaluator against the quadratic one, then evaluates one
/// full-size sequence and reports result, timings and working memory.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about)]
pub struct Config {
    /// Length of the generated sequence.
    #[arg(long, default_value = "400000", env = "POSDIFF_LEN")]
    pub len: usize,

    /// Generated values are uniform in `0..=max_value`.
    #[arg(
        long,
        default_value = "100000000",
        value_parser = clap::value_parser!(i64).range(0..),
        env = "POSDIFF_MAX_VALUE"
    )]
    pub max_value: i64,

    /// Seed for every generated sequence.
    #[arg(long, default_value = "2024", env = "POSDIFF_SEED")]
    pub seed: u64,

    /// Sequence lengths cross-checked against the quadratic evaluator.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [1000, 5000, 10000],
        env = "POSDIFF_VERIFY_SIZES"
    )]
    pub verify_sizes: Vec<usize>,

    /// Read whitespace-separated integers from this file instead of
    /// generating the main sequence.
    #[arg(long, env = "POSDIFF_INPUT")]
    pub input: Option<PathBuf>,

    /// Skip the verification phase.
    #[arg(long = "no-verify", action = clap::ArgAction::SetFalse)]
    pub verify: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn defaults() {
        Config::command().debug_assert();

        let config = Config::try_parse_from(["posdiff-report"]).unwrap();
        assert_eq!(config.len, 400_000);
        assert_eq!(config.max_value, 100_000_000);
        assert_eq!(config.verify_sizes, [1000, 5000, 10000]);
        assert!(config.input.is_none());
        assert!(config.verify);
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "posdiff-report",
            "--len",
            "10",
            "--verify-sizes",
            "0,1,2",
            "--input",
            "seq.txt",
            "--no-verify",
        ])
        .unwrap();
        assert_eq!(config.len, 10);
        assert_eq!(config.verify_sizes, [0, 1, 2]);
        assert_eq!(config.input, Some(PathBuf::from("seq.txt")));
        assert!(!config.verify);
    }

    #[test]
    fn max_value_range() {
        let parse = |v: &str| {
            Config::try_parse_from(["posdiff-report", "--max-value", v])
        };
        assert_eq!(parse("0").unwrap().max_value, 0);
        assert_eq!(parse("5").unwrap().max_value, 5);
        assert!(parse("-1").is_err());
        assert!(Config::try_parse_from(["posdiff-report", "--max-value=-1"])
            .is_err());
    }
}
