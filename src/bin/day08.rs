use std::fs;
use std::io;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

use clap::Parser;
use sevenseg::render::render_comparison;
use sevenseg::{
    count_unique_length_outputs, output_values, parse_entries, solve, Entry, Strategy,
};
use tracing::{event, Level};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Unscramble the seven-segment displays of Advent of Code 2021, day 8.
#[derive(Parser, Debug)]
#[command(name = "day08")]
struct Options {
    /// Try every wiring instead of deducing it
    #[arg(long)]
    exhaustive: bool,

    /// Draw each entry's 8 before and after unscrambling
    #[arg(long)]
    show: bool,

    /// Puzzle input (standard input if absent or "-")
    file: Option<PathBuf>,
}

impl Options {
    fn strategy(&self) -> Strategy {
        if self.exhaustive {
            Strategy::Exhaustive
        } else {
            Strategy::Deduction
        }
    }
}

#[test]
fn test_parse_args() {
    let options = Options::try_parse_from(["day08"]).unwrap();
    assert_eq!(options.strategy(), Strategy::Deduction);
    assert!(!options.show);
    assert_eq!(options.file, None);

    let options = Options::try_parse_from(["day08", "--show", "input.txt", "--exhaustive"]).unwrap();
    assert_eq!(options.strategy(), Strategy::Exhaustive);
    assert!(options.show);
    assert_eq!(options.file, Some(PathBuf::from("input.txt")));

    assert!(Options::try_parse_from(["day08", "--verbose"]).is_err());
    assert!(Options::try_parse_from(["day08", "a.txt", "b.txt"]).is_err());
    assert_eq!(
        Options::try_parse_from(["day08", "-"]).unwrap().file,
        Some(PathBuf::from("-"))
    );
}

/// The log filter comes from `RUST_LOG`, falling back to `default`.
fn filter_layer(default: &str) -> Result<EnvFilter, String> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .map_err(|e| format!("bad log filter: {}", e))
}

#[test]
fn test_filter_layer() {
    // Building a filter compiles its directives; this fails (or panics)
    // if the regex features it relies on are missing.
    assert!(EnvFilter::try_new("info").is_ok());
    assert!(EnvFilter::try_new("sevenseg::deduce=trace,warn").is_ok());
    assert!(filter_layer("info").is_ok());
}

fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).map_err(|e| format!("failed to read {}: {}", p.display(), e))
        }
        _ => {
            let mut input = String::new();
            match io::stdin().read_to_string(&mut input) {
                Ok(_) => Ok(input),
                Err(e) => Err(format!("failed to read input: {}", e)),
            }
        }
    }
}

#[test]
fn test_read_missing_file() {
    let e = read_input(Some(Path::new("/nonexistent/day08.txt"))).unwrap_err();
    assert!(e.starts_with("failed to read /nonexistent/day08.txt"));
}

fn show(entries: &[Entry], strategy: Strategy) {
    for entry in entries {
        match solve(entry, strategy) {
            Ok(mapping) => {
                if let Some(eight) = entry.patterns().iter().find(|p| p.len() == 7) {
                    println!("{}\n{}\n", entry.raw(), render_comparison(eight, &mapping));
                }
            }
            Err(e) => {
                event!(Level::ERROR, "{}", e);
            }
        }
    }
}

fn part1(entries: &[Entry]) {
    println!("Day 8 part 1: {}", count_unique_length_outputs(entries));
}

/// Returns the number of entries that could not be decoded.
fn part2(entries: &[Entry], strategy: Strategy) -> usize {
    let mut total: u64 = 0;
    let mut failures: usize = 0;
    for result in output_values(entries, strategy) {
        match result {
            Ok(n) => {
                total += n;
            }
            Err(e) => {
                event!(Level::ERROR, "{}", e);
                failures += 1;
            }
        }
    }
    println!("Day 8 part 2: {}", total);
    failures
}

fn failure_summary(failures: usize) -> Option<String> {
    match failures {
        0 => None,
        1 => Some("1 line failed".to_string()),
        n => Some(format!("{} lines failed", n)),
    }
}

#[test]
fn test_failure_summary() {
    assert_eq!(failure_summary(0), None);
    assert_eq!(failure_summary(1), Some("1 line failed".to_string()));
    assert_eq!(failure_summary(3), Some("3 lines failed".to_string()));
}

fn run() -> Result<(), String> {
    let options = Options::parse();

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    tracing_subscriber::registry()
        .with(filter_layer("info")?)
        .with(fmt_layer)
        .init();

    let strategy = options.strategy();
    let input = read_input(options.file.as_deref())?;

    // Lines that fail to parse and entries that fail to decode.
    let mut failures: usize = 0;
    let mut entries: Vec<Entry> = Vec::new();
    for parsed in parse_entries(&input) {
        match parsed {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                event!(Level::ERROR, "{}", e);
                failures += 1;
            }
        }
    }
    event!(
        Level::INFO,
        "There are {} entries in the input, using {:?}.",
        entries.len(),
        strategy,
    );
    if options.show {
        show(&entries, strategy);
    }
    part1(&entries);
    failures += part2(&entries, strategy);
    match failure_summary(failures) {
        Some(summary) => Err(summary),
        None => Ok(()),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
