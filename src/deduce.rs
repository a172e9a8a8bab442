//! Unscrambling by deduction.
//!
//! # Identifying the digits 1, 4, 7 and 8
//!
//! These are the only digits with 2, 4, 3 and 7 lit segments
//! respectively, so a pattern of one of those lengths is known at
//! once.  Every letter in such a pattern must drive one of the
//! digit's segments, and every letter outside it must not.
//!
//! | Segment count | Digit | Segments  |
//! | ------------- | ----- | --------- |
//! | 2             | 1     | `  c  f ` |
//! | 4             | 4     | ` bcd f ` |
//! | 3             | 7     | `a c  f ` |
//! | 7             | 8     | `abcdefg` |
//!
//! This pins down `a`, and leaves the pairs `cf`, `bd` and `eg`.
//!
//! # Frequencies within a length group
//!
//! The other six digits come in two groups that share a length:
//! 2, 3 and 5 light 5 segments; 0, 6 and 9 light 6.  Within a group,
//! count how many of the digits light each segment:
//!
//! | Segment | in {2, 3, 5} | in {0, 6, 9} |
//! | ------- | ------------ | ------------ |
//! | a       | 3            | 3            |
//! | b       | 1            | 3            |
//! | c       | 2            | 2            |
//! | d       | 3            | 2            |
//! | e       | 1            | 2            |
//! | f       | 2            | 3            |
//! | g       | 3            | 3            |
//!
//! A scrambled letter appears in exactly as many of the group's
//! patterns as its true segment does in the group's digits, so it can
//! only drive a segment with the same count.  The 5-group splits `bd`
//! and `eg`; the 6-group splits `cf`.
//!
//! # Propagation
//!
//! Once a letter is known, no other letter may drive its segment; a
//! segment only one letter can still drive belongs to that letter;
//! and a pattern whose letters are all known can be labelled with its
//! digit, which constrains its letters just as the first step did.
//! The passes repeat until nothing changes.

use ndarray::{Array2, Axis};
use tracing::{event, span, Level};

use crate::decode::label_patterns;
use crate::digit::{self, digit_for_segments, digits_by_length, segments_of, unique_length_digits};
use crate::entry::Entry;
use crate::error::SolveError;
use crate::mapping::Mapping;
use crate::possibility::PossibilityTable;
use crate::segment::{Segment, SegmentSet};

struct Deducer<'a> {
    entry: &'a Entry,
    table: PossibilityTable,
    /// The digit each of the entry's patterns is known to show.
    labels: [Option<u8>; 10],
    /// Row `i` says which letters pattern `i` lights.
    incidence: Array2<u8>,
}

impl<'a> Deducer<'a> {
    fn new(entry: &'a Entry) -> Deducer<'a> {
        let patterns = entry.patterns();
        let incidence = Array2::from_shape_fn((patterns.len(), Segment::ALL.len()), |(row, col)| {
            match Segment::from_index(col) {
                Some(letter) if patterns[row].contains(letter) => 1,
                _ => 0,
            }
        });
        Deducer {
            entry,
            table: PossibilityTable::new(),
            labels: [None; 10],
            incidence,
        }
    }

    fn contradiction(&self, reason: String) -> SolveError {
        SolveError::Contradiction {
            entry: self.entry.raw().to_string(),
            reason,
        }
    }

    fn rows_with_length(&self, length: usize) -> Vec<usize> {
        self.entry
            .patterns()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.len() == length)
            .map(|(i, _)| i)
            .collect()
    }

    /// There must be as many patterns of each length as there are
    /// digits of that length.
    fn check_shape(&self) -> Result<(), SolveError> {
        for (length, digits) in digits_by_length() {
            let seen = self.rows_with_length(length).len();
            if seen != digits.len() {
                return Err(self.contradiction(format!(
                    "found {} patterns with {} segments, expected {}",
                    seen,
                    length,
                    digits.len()
                )));
            }
        }
        Ok(())
    }

    fn narrow(&mut self, letter: Segment, allowed: SegmentSet) -> Result<bool, SolveError> {
        let changed = self
            .table
            .narrow(letter, allowed)
            .map_err(|reason| self.contradiction(reason))?;
        if changed {
            event!(
                Level::DEBUG,
                "{} is now one of {}",
                letter,
                self.table.candidates(letter)
            );
        }
        Ok(changed)
    }

    fn exclude(&mut self, letter: Segment, disallowed: SegmentSet) -> Result<bool, SolveError> {
        let changed = self
            .table
            .exclude(letter, disallowed)
            .map_err(|reason| self.contradiction(reason))?;
        if changed {
            event!(
                Level::DEBUG,
                "{} is now one of {}",
                letter,
                self.table.candidates(letter)
            );
        }
        Ok(changed)
    }

    /// Record that pattern `index` shows `digit`, and constrain its
    /// letters accordingly.
    fn label(&mut self, index: usize, digit: u8) -> Result<bool, SolveError> {
        let pattern = self.entry.patterns()[index];
        match self.labels[index] {
            Some(existing) if existing == digit => return Ok(false),
            Some(existing) => {
                return Err(self.contradiction(format!(
                    "pattern {} cannot be both {} and {}",
                    pattern, existing, digit
                )));
            }
            None => (),
        }
        if let Some(other) = self.labels.iter().position(|l| *l == Some(digit)) {
            return Err(self.contradiction(format!(
                "patterns {} and {} both look like {}",
                self.entry.patterns()[other],
                pattern,
                digit
            )));
        }
        let lit = match segments_of(digit) {
            Some(lit) => lit,
            None => {
                return Err(self.contradiction(format!("{} is not a digit", digit)));
            }
        };
        event!(Level::DEBUG, "pattern {} shows {}", pattern, digit);
        self.labels[index] = Some(digit);
        for letter in Segment::ALL {
            if pattern.contains(letter) {
                self.narrow(letter, lit)?;
            } else {
                self.exclude(letter, lit)?;
            }
        }
        Ok(true)
    }

    fn seed(&mut self) -> Result<(), SolveError> {
        for digit in unique_length_digits() {
            let length = segments_of(digit).map_or(0, |lit| lit.len());
            for index in self.rows_with_length(length) {
                self.label(index, digit)?;
            }
        }
        Ok(())
    }

    /// Narrow every letter by comparing how often it occurs within each
    /// group of same-length patterns against how often each segment
    /// occurs within the matching group of digits.
    fn frequency_pass(&mut self) -> Result<bool, SolveError> {
        let mut changed = false;
        for (length, digits) in digits_by_length() {
            if digits.len() < 2 {
                continue;
            }
            let rows = self.rows_with_length(length);
            let letter_counts = self.incidence.select(Axis(0), &rows).sum_axis(Axis(0));
            let segment_counts = digit::incidence(&digits).sum_axis(Axis(0));
            event!(
                Level::TRACE,
                "length {}: letter counts {:?}, segment counts {:?}",
                length,
                letter_counts.to_vec(),
                segment_counts.to_vec(),
            );
            for letter in Segment::ALL {
                let count = letter_counts[letter.index()];
                let allowed: SegmentSet = Segment::ALL
                    .into_iter()
                    .filter(|seg| segment_counts[seg.index()] == count)
                    .collect();
                changed |= self.narrow(letter, allowed)?;
            }
        }
        Ok(changed)
    }

    fn propagate(&mut self) -> Result<bool, SolveError> {
        let mut changed = false;

        for letter in Segment::ALL {
            if let Some(seg) = self.table.resolved(letter) {
                for other in Segment::ALL.into_iter().filter(|other| *other != letter) {
                    changed |= self.exclude(other, SegmentSet::single(seg))?;
                }
            }
        }

        for seg in Segment::ALL {
            let letters = self.table.letters_for(seg);
            if letters.is_empty() {
                return Err(self.contradiction(format!("no letter can drive segment {}", seg)));
            }
            if let Some(letter) = letters.only() {
                changed |= self.narrow(letter, SegmentSet::single(seg))?;
            }
        }

        let mapping = self
            .table
            .resolved_mapping()
            .map_err(|reason| self.contradiction(reason))?;
        for index in 0..self.labels.len() {
            if self.labels[index].is_some() {
                continue;
            }
            let pattern = self.entry.patterns()[index];
            if let Some(segments) = mapping.unscramble_all(pattern.letters()) {
                match digit_for_segments(segments) {
                    Some(digit) => {
                        changed |= self.label(index, digit)?;
                    }
                    None => {
                        return Err(self.contradiction(format!(
                            "pattern {} unscrambles to {}, which is not a digit",
                            pattern, segments
                        )));
                    }
                }
            }
        }
        Ok(changed)
    }

    fn finish(self) -> Result<Mapping, SolveError> {
        let mapping = self
            .table
            .resolved_mapping()
            .map_err(|reason| self.contradiction(reason))?;
        if !mapping.complete() {
            return Err(SolveError::UnresolvedMapping {
                entry: self.entry.raw().to_string(),
                unresolved: mapping.unidentified(),
            });
        }
        if !mapping.is_bijection() || label_patterns(self.entry.patterns(), &mapping).is_none() {
            return Err(self.contradiction(format!(
                "wiring {} does not turn the patterns into ten different digits",
                mapping
            )));
        }
        Ok(mapping)
    }
}

/// Work out the wiring of `entry` without trial and error.
pub fn deduce(entry: &Entry) -> Result<Mapping, SolveError> {
    let span = span!(Level::ERROR, "deduce", entry = %entry.raw());
    let _enter = span.enter();

    let mut deducer = Deducer::new(entry);
    deducer.check_shape()?;
    deducer.seed()?;
    deducer.propagate()?;
    for pass in 1.. {
        let narrowed = deducer.frequency_pass()?;
        let propagated = deducer.propagate()?;
        event!(
            Level::TRACE,
            "pass {}: narrowed={}, propagated={}",
            pass,
            narrowed,
            propagated
        );
        if !(narrowed || propagated) {
            break;
        }
    }
    let mapping = deducer.finish()?;
    event!(Level::DEBUG, "solved: {}", mapping);
    Ok(mapping)
}

#[cfg(test)]
use crate::{scrambled_entry, EXAMPLE_ENTRY};

#[test]
fn test_deduce_example() {
    let entry: Entry = EXAMPLE_ENTRY.parse().unwrap();
    let mapping = deduce(&entry).unwrap();
    // The scrambled letters drawn at their true positions:
    //  dddd
    // e    a
    // e    a
    //  ffff
    // g    b
    // g    b
    //  cccc
    let expected = [
        (Segment::D, Segment::A),
        (Segment::E, Segment::B),
        (Segment::A, Segment::C),
        (Segment::F, Segment::D),
        (Segment::G, Segment::E),
        (Segment::B, Segment::F),
        (Segment::C, Segment::G),
    ];
    for (scrambled, correct) in expected {
        assert_eq!(mapping.unscramble(scrambled), Some(correct));
    }
    assert!(mapping.is_bijection());
}

#[test]
fn test_deduce_is_repeatable() {
    let entry: Entry = EXAMPLE_ENTRY.parse().unwrap();
    assert_eq!(deduce(&entry), deduce(&entry));
}

#[test]
fn test_deduce_every_wiring() {
    for wiring in crate::search::wirings() {
        let entry = scrambled_entry(&wiring);
        assert_eq!(deduce(&entry), Ok(wiring), "entry {}", entry.raw());
    }
}

#[test]
fn test_deduce_round_trip() {
    let entry: Entry = EXAMPLE_ENTRY.parse().unwrap();
    let mapping = deduce(&entry).unwrap();
    let mut labels = label_patterns(entry.patterns(), &mapping).unwrap();
    labels.sort_unstable();
    assert_eq!(labels, (0..10).collect::<Vec<u8>>());
}

#[test]
fn test_deduce_wrong_shape() {
    let entry: Entry = "a b c d e f g ab ac ad | ab ac ad ae".parse().unwrap();
    match deduce(&entry) {
        Err(SolveError::Contradiction { reason, .. }) => {
            assert_eq!(reason, "found 3 patterns with 2 segments, expected 1");
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_deduce_inconsistent() {
    // Right lengths, but not a scrambling of the ten digits.
    let entry: Entry = "abcdefg ab abc abcd abcde abcdf abcdg abcdef abcdeg abcdfg | ab abc abcd abcdefg"
        .parse()
        .unwrap();
    assert!(matches!(
        deduce(&entry),
        Err(SolveError::Contradiction { .. }) | Err(SolveError::UnresolvedMapping { .. })
    ));
}

#[test]
fn test_deduce_duplicate_pattern() {
    let entry: Entry = EXAMPLE_ENTRY
        .replacen("cdfbe", "gcdfa", 1)
        .parse()
        .unwrap();
    assert!(matches!(
        deduce(&entry),
        Err(SolveError::Contradiction { .. }) | Err(SolveError::UnresolvedMapping { .. })
    ));
}

#[test]
fn test_unfinished_deduction() {
    let entry: Entry = EXAMPLE_ENTRY.parse().unwrap();
    let deducer = Deducer::new(&entry);
    assert_eq!(
        deducer.finish(),
        Err(SolveError::UnresolvedMapping {
            entry: EXAMPLE_ENTRY.to_string(),
            unresolved: SegmentSet::FULL,
        })
    );
}

#[test]
fn test_seed_only() {
    let entry: Entry = EXAMPLE_ENTRY.parse().unwrap();
    let mut deducer = Deducer::new(&entry);
    deducer.seed().unwrap();
    // 1 is "ab", 7 is "dab": d must be segment a.
    assert_eq!(deducer.table.resolved(Segment::D), Some(Segment::A));
    assert_eq!(
        deducer.table.candidates(Segment::A),
        SegmentSet::from_literal("cf")
    );
    // 4 is "eafb": e and f are b or d.
    assert_eq!(
        deducer.table.candidates(Segment::E),
        SegmentSet::from_literal("bd")
    );
    assert_eq!(
        deducer.table.candidates(Segment::G),
        SegmentSet::from_literal("eg")
    );
}
