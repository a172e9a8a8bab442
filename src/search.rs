use pathfinding::prelude::bfs_reach;
use tracing::{event, span, Level};

use crate::decode::label_patterns;
use crate::entry::Entry;
use crate::error::SolveError;
use crate::mapping::Mapping;
use crate::segment::Segment;

/// Extend a partial wiring by identifying its first unknown letter with
/// each segment nobody drives yet.
fn extend(partial: &Mapping) -> Vec<Mapping> {
    let letter = match partial.unidentified().iter().next() {
        Some(letter) => letter,
        None => return Vec::new(),
    };
    (!partial.image())
        .iter()
        .filter_map(|seg| {
            let mut next = *partial;
            next.identify(letter, seg).ok().map(|()| next)
        })
        .collect()
}

/// Every one of the 7! complete wirings.
pub fn wirings() -> impl Iterator<Item = Mapping> {
    bfs_reach(Mapping::new(), extend).filter(Mapping::complete)
}

/// Work out the wiring of `entry` by trying every possibility.  Slower
/// than deduction, but it makes no assumptions about how the puzzle
/// can be reasoned about.
pub fn search(entry: &Entry) -> Result<Mapping, SolveError> {
    let span = span!(Level::ERROR, "search", entry = %entry.raw());
    let _enter = span.enter();

    let mut found = wirings().filter(|m| label_patterns(entry.patterns(), m).is_some());
    match (found.next(), found.next()) {
        (Some(mapping), None) => {
            event!(Level::DEBUG, "solved: {}", mapping);
            Ok(mapping)
        }
        (None, _) => Err(SolveError::Contradiction {
            entry: entry.raw().to_string(),
            reason: "no wiring turns the patterns into ten different digits".to_string(),
        }),
        (Some(first), Some(second)) => {
            event!(Level::DEBUG, "both {} and {} fit", first, second);
            Err(SolveError::UnresolvedMapping {
                entry: entry.raw().to_string(),
                unresolved: Segment::ALL
                    .into_iter()
                    .filter(|letter| first.unscramble(*letter) != second.unscramble(*letter))
                    .collect(),
            })
        }
    }
}

#[cfg(test)]
use crate::{scrambled_entry, EXAMPLE_ENTRY};

#[test]
fn test_wiring_count() {
    let all: Vec<Mapping> = wirings().collect();
    assert_eq!(all.len(), 5040);
    assert!(all.iter().all(Mapping::is_bijection));
}

#[test]
fn test_search_example() {
    let entry: Entry = EXAMPLE_ENTRY.parse().unwrap();
    let mapping = search(&entry).unwrap();
    assert_eq!(Ok(mapping), crate::deduce::deduce(&entry));
}

#[test]
fn test_search_agrees_with_deduction() {
    for wiring in wirings().step_by(97) {
        let entry = scrambled_entry(&wiring);
        assert_eq!(search(&entry), Ok(wiring));
    }
}

#[test]
fn test_search_inconsistent() {
    let entry: Entry = "abcdefg ab abc abcd abcde abcdf abcdg abcdef abcdeg abcdfg | ab abc abcd abcdefg"
        .parse()
        .unwrap();
    assert!(matches!(
        search(&entry),
        Err(SolveError::Contradiction { .. })
    ));
}
