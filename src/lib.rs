//! Unscrambling seven-segment displays.
//!
//! Each line of input describes one display whose wires have been
//! connected to the wrong segments: the ten different digits it can
//! show, as sets of lit wires, then the four digits of its output
//! value.  Working out which wire drives which segment lets us read
//! the output.

pub mod decode;
pub mod deduce;
pub mod digit;
pub mod entry;
pub mod error;
pub mod mapping;
pub mod pattern;
pub mod possibility;
pub mod render;
pub mod search;
pub mod segment;

pub use decode::{count_unique_length_outputs, decode, output_value, output_values};
pub use entry::{parse_entries, Entry};
pub use error::SolveError;
pub use mapping::Mapping;
pub use pattern::Pattern;
pub use segment::{Segment, SegmentSet};

/// How to work out an entry's wiring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Narrow down the candidates for each wire by reasoning about
    /// segment counts.
    #[default]
    Deduction,
    /// Try all 5040 wirings.
    Exhaustive,
}

pub fn solve(entry: &Entry, strategy: Strategy) -> Result<Mapping, SolveError> {
    match strategy {
        Strategy::Deduction => deduce::deduce(entry),
        Strategy::Exhaustive => search::search(entry),
    }
}

#[cfg(test)]
pub(crate) const EXAMPLE_ENTRY: &str =
    "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf";

#[cfg(test)]
pub(crate) const SAMPLE_INPUT: &str = "\
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
";

/// The entry produced by wiring scrambled letter `l` to segment
/// `wiring(l)`, with its output showing 4071.
#[cfg(test)]
pub(crate) fn scrambled_entry(wiring: &Mapping) -> Entry {
    let show = |digit: u8| -> String {
        let lit = digit::segments_of(digit).unwrap();
        Segment::ALL
            .into_iter()
            .filter(|letter| wiring.unscramble(*letter).map_or(false, |seg| lit.contains(seg)))
            .map(Segment::to_char)
            .collect()
    };
    let patterns: Vec<String> = [3, 8, 1, 0, 6, 2, 9, 4, 5, 7].into_iter().map(show).collect();
    let outputs: Vec<String> = [4, 0, 7, 1].into_iter().map(show).collect();
    format!("{} | {}", patterns.join(" "), outputs.join(" "))
        .parse()
        .unwrap()
}

#[test]
fn test_solve_strategies_agree() {
    let entry: Entry = EXAMPLE_ENTRY.parse().unwrap();
    assert_eq!(
        solve(&entry, Strategy::Deduction),
        solve(&entry, Strategy::Exhaustive)
    );
    assert_eq!(Strategy::default(), Strategy::Deduction);
}

#[test]
fn test_scrambled_entry_output() {
    for wiring in search::wirings().step_by(251) {
        let entry = scrambled_entry(&wiring);
        assert_eq!(output_value(&entry, Strategy::Deduction), Ok(4071));
    }
}
