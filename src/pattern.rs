use std::fmt::{self, Display, Formatter};

use crate::segment::{Segment, SegmentSet};

/// The set of scrambled wires lit for one digit.  Which real segment
/// each wire drives is not known until the entry has been solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    letters: SegmentSet,
}

impl Pattern {
    pub fn new(letters: SegmentSet) -> Pattern {
        Pattern { letters }
    }

    pub fn letters(&self) -> SegmentSet {
        self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, letter: Segment) -> bool {
        self.letters.contains(letter)
    }

    pub fn contains_all(&self, letters: SegmentSet) -> bool {
        letters.is_subset(&self.letters)
    }

    pub fn is_identical_to(&self, other: &Pattern) -> bool {
        self.letters == other.letters
    }

    /// Letters present in exactly one of the two patterns.
    pub fn difference(&self, other: &Pattern) -> SegmentSet {
        self.letters.symmetric_difference(&other.letters)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = String;
    fn try_from(s: &str) -> Result<Pattern, String> {
        let mut letters = SegmentSet::EMPTY;
        for ch in s.chars() {
            match Segment::from_char(ch) {
                Some(letter) => letters.insert(letter),
                None => {
                    return Err(format!("'{}' is not a segment letter in {}", ch, s));
                }
            }
        }
        Ok(Pattern { letters })
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters)
    }
}

#[cfg(test)]
fn pat(s: &str) -> Pattern {
    Pattern::try_from(s).unwrap()
}

#[test]
fn test_pattern_dedup() {
    let p = pat("gbbag");
    assert_eq!(p.len(), 3);
    assert_eq!(p.to_string(), "abg");
    assert!(Pattern::try_from("abz").is_err());
    assert!(pat("").is_empty());
}

#[test]
fn test_pattern_queries() {
    let p = pat("cdfbe");
    assert!(p.contains(Segment::D));
    assert!(!p.contains(Segment::A));
    assert!(p.contains_all(SegmentSet::from_literal("bc")));
    assert!(!p.contains_all(SegmentSet::from_literal("ab")));
    assert!(p.contains_all(SegmentSet::EMPTY));
}

#[test]
fn test_pattern_identity() {
    assert!(pat("cdfbe").is_identical_to(&pat("ebfdc")));
    assert!(!pat("cdfbe").is_identical_to(&pat("cdfb")));
    assert!(!pat("cdfbe").is_identical_to(&pat("cdfba")));
}

#[test]
fn test_pattern_difference() {
    assert_eq!(
        pat("abd").difference(&pat("abcf")),
        SegmentSet::from_literal("cdf")
    );
    assert!(pat("abd").difference(&pat("dba")).is_empty());
}
