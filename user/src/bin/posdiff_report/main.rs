//! Report for the positive pairwise difference sum.
//!
//! Cross-checks the $O(n \log n)$ evaluator against the quadratic one on
//! fixed and random sequences, then evaluates one full-size sequence.

mod config;

use std::{
    fs,
    path::Path,
    time::{Duration, Instant},
};

use anyhow::{bail, Context, Result};
use ascii_table::{Align, AsciiTable};
use clap::Parser;
use config::Config;
use env_logger::Env;
use log::{debug, error, info};
use num_format::{Locale, ToFormattedString};
use pairwise_diff::positive_difference_sum as naive;
use positive_difference_sum::PositiveDifferenceSum;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use randgen::{Gen, Seq};
use size_of::HumanBytes;

const SAMPLES: [(&[i64], i128); 7] = [
    (&[1, 3, 2, 4], 9),
    (&[5, 1, 3, 2], 3),
    (&[1, 2, 3, 4, 5], 20),
    (&[10, 5, 8, 3, 7], 9),
    (&[1], 0),
    (&[5, 4, 3, 2, 1], 0),
    (&[], 0),
];

fn en<T: ToFormattedString>(x: &T) -> String {
    x.to_formatted_string(&Locale::en)
}

struct Verification {
    name: String,
    len: usize,
    fast: i128,
    naive: i128,
    expected: Option<i128>,
    fast_elapsed: Duration,
    naive_elapsed: Duration,
}

impl Verification {
    fn run(name: String, a: &[i64], expected: Option<i128>) -> Self {
        let start = Instant::now();
        let fast = a.positive_difference_sum();
        let fast_elapsed = start.elapsed();

        let start = Instant::now();
        let slow = naive(a);
        let naive_elapsed = start.elapsed();

        debug!(
            "{name}: fast {fast} in {fast_elapsed:?}, \
             naive {slow} in {naive_elapsed:?}"
        );
        Self {
            name,
            len: a.len(),
            fast,
            naive: slow,
            expected,
            fast_elapsed,
            naive_elapsed,
        }
    }

    fn passed(&self) -> bool {
        self.fast == self.naive
            && self.expected.map_or(true, |e| e == self.fast)
    }
}

fn verify(config: &Config) -> Result<()> {
    info!(
        "verifying against the quadratic evaluator ({} fixed, {} random)",
        SAMPLES.len(),
        config.verify_sizes.len()
    );

    let mut results: Vec<_> = SAMPLES
        .iter()
        .map(|&(a, expected)| {
            Verification::run(format!("{a:?}"), a, Some(expected))
        })
        .collect();

    let mut rng = ChaCha20Rng::seed_from_u64(config.seed);
    for &len in &config.verify_sizes {
        let a = Seq { bound: 0..=config.max_value, len }.generate(&mut rng);
        results.push(Verification::run(format!("random #{len}"), &a, None));
    }

    let mut table = AsciiTable::default();
    table.set_max_width(160);
    for (i, (header, align)) in [
        ("Case", Align::Left),
        ("Length", Align::Right),
        ("Fast", Align::Right),
        ("Naive", Align::Right),
        ("Fast Elapsed", Align::Right),
        ("Naive Elapsed", Align::Right),
        ("Speedup", Align::Right),
        ("Agree", Align::Center),
    ]
    .into_iter()
    .enumerate()
    {
        table.column(i).set_header(header).set_align(align);
    }
    table.print(results.iter().map(|v| {
        let speedup = v.naive_elapsed.as_secs_f64()
            / v.fast_elapsed.as_secs_f64().max(f64::MIN_POSITIVE);
        vec![
            v.name.clone(),
            en(&v.len),
            en(&v.fast),
            en(&v.naive),
            format!("{:#.3?}", v.fast_elapsed),
            format!("{:#.3?}", v.naive_elapsed),
            format!("{speedup:.2}x"),
            if v.passed() { "yes" } else { "NO" }.to_owned(),
        ]
    }));

    let failed: Vec<_> = results.iter().filter(|v| !v.passed()).collect();
    if !failed.is_empty() {
        for v in &failed {
            error!(
                "{}: fast {} naive {} expected {:?}",
                v.name, v.fast, v.naive, v.expected
            );
        }
        bail!(
            "{} of {} verification cases disagree",
            failed.len(),
            results.len()
        );
    }
    info!("all {} verification cases agree", results.len());
    Ok(())
}

fn read_sequence(path: &Path) -> Result<Vec<i64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    text.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().with_context(|| {
                format!(
                    "token #{i} `{token}` in {} is not an integer",
                    path.display()
                )
            })
        })
        .collect()
}

/// Expected result for `len` values drawn uniformly from `0..=max_value`.
/// `None` when the expectation is zero.
fn uniform_estimate(len: usize, max_value: i64) -> Option<f64> {
    if len < 2 || max_value <= 0 {
        return None;
    }
    // E[max(0, y - x)] = m / 6 for x, y uniform on [0, m]
    let n = len as f64;
    Some(n * (n - 1.0) / 2.0 * max_value as f64 / 6.0)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();
    let config = Config::parse();

    if config.verify {
        verify(&config)?;
    }

    let start = Instant::now();
    let (a, generated) = match &config.input {
        Some(path) => {
            info!("reading sequence from {}", path.display());
            (read_sequence(path)?, false)
        }
        None => {
            info!(
                "generating {} values in 0..={}",
                en(&config.len),
                en(&config.max_value),
            );
            let mut rng = ChaCha20Rng::seed_from_u64(config.seed);
            let bound = 0..=config.max_value;
            (Seq { bound, len: config.len }.generate(&mut rng), true)
        }
    };
    let load_elapsed = start.elapsed();

    info!("evaluating the whole sequence");
    let start = Instant::now();
    let summary = a.positive_difference_summary();
    let elapsed = start.elapsed();

    let max = a.iter().max().map_or("-".to_owned(), en);
    let mut rows = vec![
        vec!["Length".to_owned(), en(&a.len())],
        vec!["Max Value".to_owned(), max],
        vec!["Distinct".to_owned(), en(&summary.distinct)],
        vec!["Positive Pairs".to_owned(), en(&summary.pairs)],
        vec!["Result".to_owned(), en(&summary.total)],
        vec![
            if generated { "Generated In" } else { "Read In" }.to_owned(),
            format!("{load_elapsed:#.3?}"),
        ],
        vec!["Elapsed".to_owned(), format!("{elapsed:#.3?}")],
        vec![
            "Working Memory".to_owned(),
            format!("{}", HumanBytes::new(summary.heap_bytes as u64)),
        ],
    ];

    if let Some(estimate) =
        uniform_estimate(a.len(), config.max_value).filter(|_| generated)
    {
        rows.push(vec![
            "Uniform Estimate".to_owned(),
            en(&(estimate as i128)),
        ]);
        rows.push(vec![
            "Result / Estimate".to_owned(),
            format!("{:.4}", summary.total as f64 / estimate),
        ]);
    }

    let mut table = AsciiTable::default();
    table.column(0).set_header("Metric").set_align(Align::Left);
    table.column(1).set_header("Value").set_align(Align::Right);
    table.print(rows);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn samples() {
        for (a, expected) in SAMPLES {
            let v = Verification::run(format!("{a:?}"), a, Some(expected));
            assert!(v.passed(), "{}", v.name);
        }
    }

    #[test]
    fn mismatch_detected() {
        let v = Verification::run("bad".to_owned(), &[1, 2], Some(0));
        assert!(!v.passed());
    }

    #[test]
    fn estimate() {
        assert_eq!(uniform_estimate(0, 6), None);
        assert_eq!(uniform_estimate(1, 6), None);
        assert_eq!(uniform_estimate(4, 0), None);
        assert_eq!(uniform_estimate(4, -1), None);
        assert_eq!(uniform_estimate(4, 6), Some(6.0));
        assert_eq!(uniform_estimate(2, 12), Some(2.0));
    }

    #[test]
    fn read() {
        let path = std::env::temp_dir()
            .join(format!("posdiff-report-{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "1 3\n2\t4").unwrap();
        drop(file);
        assert_eq!(read_sequence(&path).unwrap(), [1, 3, 2, 4]);

        fs::write(&path, "1 x 3").unwrap();
        let err = read_sequence(&path).unwrap_err();
        assert!(format!("{err:#}").contains("token #1 `x`"));

        fs::remove_file(&path).unwrap();
        assert!(read_sequence(&path).is_err());
    }
}
