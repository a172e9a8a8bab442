use crate::mapping::Mapping;
use crate::segment::{Segment, SegmentSet};

/// For each scrambled letter, the true segments it might still drive.
/// Sets only ever shrink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PossibilityTable {
    candidates: [SegmentSet; 7],
}

impl Default for PossibilityTable {
    fn default() -> PossibilityTable {
        PossibilityTable::new()
    }
}

impl PossibilityTable {
    pub fn new() -> PossibilityTable {
        PossibilityTable {
            candidates: [SegmentSet::FULL; 7],
        }
    }

    pub fn candidates(&self, letter: Segment) -> SegmentSet {
        self.candidates[letter.index()]
    }

    fn update(&mut self, letter: Segment, updated: SegmentSet) -> Result<bool, String> {
        let current = self.candidates[letter.index()];
        if updated.is_empty() {
            return Err(format!(
                "no segment left for {} (was one of {})",
                letter, current
            ));
        }
        self.candidates[letter.index()] = updated;
        Ok(updated != current)
    }

    /// Restrict `letter` to `allowed`.  Returns whether anything
    /// changed.
    pub fn narrow(&mut self, letter: Segment, allowed: SegmentSet) -> Result<bool, String> {
        let updated = self.candidates(letter) & allowed;
        self.update(letter, updated)
    }

    /// Rule out `disallowed` for `letter`.  Returns whether anything
    /// changed.
    pub fn exclude(&mut self, letter: Segment, disallowed: SegmentSet) -> Result<bool, String> {
        let updated = self.candidates(letter) - disallowed;
        self.update(letter, updated)
    }

    pub fn is_resolved(&self, letter: Segment) -> bool {
        self.candidates(letter).len() == 1
    }

    pub fn resolved(&self, letter: Segment) -> Option<Segment> {
        self.candidates(letter).only()
    }

    /// Letters that may still drive `seg`.
    pub fn letters_for(&self, seg: Segment) -> SegmentSet {
        Segment::ALL
            .into_iter()
            .filter(|letter| self.candidates(*letter).contains(seg))
            .collect()
    }

    /// The part of the wiring that is already pinned down.
    pub fn resolved_mapping(&self) -> Result<Mapping, String> {
        let mut mapping = Mapping::new();
        for letter in Segment::ALL {
            if let Some(seg) = self.resolved(letter) {
                mapping.identify(letter, seg)?;
            }
        }
        Ok(mapping)
    }
}

#[test]
fn test_new_table_is_open() {
    let table = PossibilityTable::new();
    for letter in Segment::ALL {
        assert_eq!(table.candidates(letter), SegmentSet::FULL);
        assert!(!table.is_resolved(letter));
    }
    assert_eq!(table.resolved_mapping(), Ok(Mapping::new()));
}

#[test]
fn test_narrow_and_exclude() {
    let mut table = PossibilityTable::new();
    let cf = SegmentSet::from_literal("cf");
    assert_eq!(table.narrow(Segment::A, cf), Ok(true));
    assert_eq!(table.narrow(Segment::A, cf), Ok(false));
    assert_eq!(table.exclude(Segment::A, SegmentSet::from_literal("f")), Ok(true));
    assert!(table.is_resolved(Segment::A));
    assert_eq!(table.resolved(Segment::A), Some(Segment::C));
    assert_eq!(table.exclude(Segment::B, cf), Ok(true));
    assert_eq!(table.candidates(Segment::B), SegmentSet::from_literal("abdeg"));
    assert_eq!(table.letters_for(Segment::C), SegmentSet::from_literal("acdefg"));
}

#[test]
fn test_contradiction() {
    let mut table = PossibilityTable::new();
    table.narrow(Segment::A, SegmentSet::from_literal("cf")).unwrap();
    assert!(table.narrow(Segment::A, SegmentSet::from_literal("ab")).is_err());
    assert!(table.exclude(Segment::A, SegmentSet::from_literal("cf")).is_err());
    // A failed update leaves the table as it was.
    assert_eq!(table.candidates(Segment::A), SegmentSet::from_literal("cf"));
}

#[test]
fn test_resolved_mapping_conflict() {
    let mut table = PossibilityTable::new();
    table.narrow(Segment::A, SegmentSet::from_literal("c")).unwrap();
    table.narrow(Segment::B, SegmentSet::from_literal("c")).unwrap();
    assert!(table.resolved_mapping().is_err());
}
