use std::fmt::{self, Display, Formatter};

use crate::segment::SegmentSet;

/// Why a line of puzzle input could not be turned into an answer.
/// Each variant carries the offending line so that the caller can
/// report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The line is not ten patterns, a `|`, and four patterns.
    MalformedEntry { line: String, reason: String },
    /// The patterns cannot all be digits under any single wiring.
    Contradiction { entry: String, reason: String },
    /// Deduction stopped with some letters still ambiguous.
    UnresolvedMapping { entry: String, unresolved: SegmentSet },
    /// An output pattern does not unscramble to any digit.
    UndecodableOutput { entry: String, pattern: String },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::MalformedEntry { line, reason } => {
                write!(f, "malformed entry '{}': {}", line, reason)
            }
            SolveError::Contradiction { entry, reason } => {
                write!(f, "contradiction in '{}': {}", entry, reason)
            }
            SolveError::UnresolvedMapping { entry, unresolved } => {
                write!(
                    f,
                    "could not identify segments {} in '{}'",
                    unresolved, entry
                )
            }
            SolveError::UndecodableOutput { entry, pattern } => {
                write!(f, "output {} of '{}' is not a digit", pattern, entry)
            }
        }
    }
}

impl std::error::Error for SolveError {}

#[test]
fn test_display() {
    let e = SolveError::UnresolvedMapping {
        entry: "ab | ab".to_string(),
        unresolved: SegmentSet::from_literal("eg"),
    };
    assert_eq!(e.to_string(), "could not identify segments eg in 'ab | ab'");
    let e = SolveError::MalformedEntry {
        line: "xyz".to_string(),
        reason: "expected 10 patterns, got 1".to_string(),
    };
    assert_eq!(
        e.to_string(),
        "malformed entry 'xyz': expected 10 patterns, got 1"
    );
}
