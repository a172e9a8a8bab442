use std::fmt::{self, Display, Formatter};

use crate::segment::{Segment, SegmentSet};

/// Mapping from scrambled letter to true segment.  Letters not yet
/// identified map to `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mapping {
    forward: [Option<Segment>; 7],
}

impl Mapping {
    pub fn new() -> Mapping {
        Mapping::default()
    }

    /// Record that `scrambled` drives `correct`.  Either side already
    /// being taken by something else is an error.
    pub fn identify(&mut self, scrambled: Segment, correct: Segment) -> Result<(), String> {
        match self.forward[scrambled.index()] {
            Some(existing) if existing == correct => return Ok(()),
            Some(existing) => {
                return Err(format!(
                    "{} has been mapped to more than one unscrambled segment ({} and {})",
                    scrambled, existing, correct,
                ));
            }
            None => (),
        }
        if let Some(existing) = self.scramble(correct) {
            return Err(format!(
                "more than one scrambled segment ({} and {}) maps to {}",
                scrambled, existing, correct,
            ));
        }
        self.forward[scrambled.index()] = Some(correct);
        Ok(())
    }

    pub fn unscramble(&self, scrambled: Segment) -> Option<Segment> {
        self.forward[scrambled.index()]
    }

    pub fn scramble(&self, correct: Segment) -> Option<Segment> {
        Segment::ALL
            .into_iter()
            .find(|letter| self.forward[letter.index()] == Some(correct))
    }

    /// Letters with no known segment.
    pub fn unidentified(&self) -> SegmentSet {
        Segment::ALL
            .into_iter()
            .filter(|letter| self.forward[letter.index()].is_none())
            .collect()
    }

    pub fn image(&self) -> SegmentSet {
        self.forward.iter().flatten().copied().collect()
    }

    pub fn complete(&self) -> bool {
        self.forward.iter().all(Option::is_some)
    }

    pub fn is_bijection(&self) -> bool {
        self.complete() && self.image() == SegmentSet::FULL
    }

    /// Unscramble a whole set of letters, or `None` if any of them is
    /// still unknown.
    pub fn unscramble_all(&self, letters: SegmentSet) -> Option<SegmentSet> {
        letters.iter().map(|letter| self.unscramble(letter)).collect()
    }
}

impl Display for Mapping {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for letter in Segment::ALL {
            match self.unscramble(letter) {
                Some(seg) => write!(f, "{}{}->{}", sep, letter, seg)?,
                None => write!(f, "{}{}->?", sep, letter)?,
            }
            sep = " ";
        }
        Ok(())
    }
}

#[test]
fn test_identify() {
    let mut m = Mapping::new();
    assert!(m.identify(Segment::D, Segment::A).is_ok());
    assert!(m.identify(Segment::D, Segment::A).is_ok());
    assert!(m.identify(Segment::D, Segment::B).is_err());
    assert!(m.identify(Segment::E, Segment::A).is_err());
    assert_eq!(m.unscramble(Segment::D), Some(Segment::A));
    assert_eq!(m.scramble(Segment::A), Some(Segment::D));
    assert_eq!(m.scramble(Segment::B), None);
    assert_eq!(m.unidentified(), SegmentSet::from_literal("abcefg"));
    assert!(!m.complete());
    assert_eq!(m.to_string(), "a->? b->? c->? d->a e->? f->? g->?");
}

#[test]
fn test_unscramble_all() {
    let mut m = Mapping::new();
    m.identify(Segment::A, Segment::C).unwrap();
    m.identify(Segment::B, Segment::F).unwrap();
    assert_eq!(
        m.unscramble_all(SegmentSet::from_literal("ab")),
        Some(SegmentSet::from_literal("cf"))
    );
    assert_eq!(m.unscramble_all(SegmentSet::from_literal("abd")), None);
}

#[test]
fn test_bijection() {
    let mut m = Mapping::new();
    for (letter, seg) in Segment::ALL.into_iter().zip(Segment::ALL.into_iter().rev()) {
        m.identify(letter, seg).unwrap();
    }
    assert!(m.complete());
    assert!(m.is_bijection());
}
