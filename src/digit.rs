use std::collections::BTreeMap;

use ndarray::Array2;

use crate::segment::{Segment, SegmentSet};

/// | digit | segments  | segment count |
/// | ----- | --------- | ------------- |
/// | 0     | `abc efg` | 6             |
/// | 1     | `  c  f ` | 2             |
/// | 2     | `a cde g` | 5             |
/// | 3     | `a cd fg` | 5             |
/// | 4     | ` bcd f ` | 4             |
/// | 5     | `ab d fg` | 5             |
/// | 6     | `ab defg` | 6             |
/// | 7     | `a c  f ` | 3             |
/// | 8     | `abcdefg` | 7             |
/// | 9     | `abcd fg` | 6             |
pub const DIGITS: [SegmentSet; 10] = [
    SegmentSet::from_literal("abcefg"),
    SegmentSet::from_literal("cf"),
    SegmentSet::from_literal("acdeg"),
    SegmentSet::from_literal("acdfg"),
    SegmentSet::from_literal("bcdf"),
    SegmentSet::from_literal("abdfg"),
    SegmentSet::from_literal("abdefg"),
    SegmentSet::from_literal("acf"),
    SegmentSet::from_literal("abcdefg"),
    SegmentSet::from_literal("abcdfg"),
];

pub fn segments_of(digit: u8) -> Option<SegmentSet> {
    DIGITS.get(digit as usize).copied()
}

pub fn digit_for_segments(segments: SegmentSet) -> Option<u8> {
    DIGITS
        .iter()
        .position(|lit| *lit == segments)
        .map(|pos| pos as u8)
}

/// Digits grouped by how many segments they light.
pub fn digits_by_length() -> BTreeMap<usize, Vec<u8>> {
    let mut result: BTreeMap<usize, Vec<u8>> = BTreeMap::new();
    for (digit, lit) in (0u8..).zip(DIGITS.iter()) {
        result.entry(lit.len()).or_insert_with(Vec::new).push(digit);
    }
    result
}

pub fn digits_with_length(n: usize) -> Vec<u8> {
    digits_by_length().remove(&n).unwrap_or_default()
}

/// The digits that can be recognised by their segment count alone.
pub fn unique_length_digits() -> Vec<u8> {
    let mut result: Vec<u8> = digits_by_length()
        .into_values()
        .filter(|digits| digits.len() == 1)
        .flatten()
        .collect();
    result.sort_unstable();
    result
}

/// Row `i` says which segments digit `digits[i]` lights.
pub fn incidence(digits: &[u8]) -> Array2<u8> {
    Array2::from_shape_fn((digits.len(), Segment::ALL.len()), |(row, col)| {
        match (segments_of(digits[row]), Segment::from_index(col)) {
            (Some(lit), Some(seg)) if lit.contains(seg) => 1,
            _ => 0,
        }
    })
}

#[test]
fn test_digit_sizes() {
    let sizes: Vec<usize> = DIGITS.iter().map(|lit| lit.len()).collect();
    assert_eq!(sizes, vec![6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
}

#[test]
fn test_digits_distinct() {
    for (i, a) in DIGITS.iter().enumerate() {
        for b in DIGITS.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_inverse_lookup() {
    for digit in 0..10 {
        let lit = segments_of(digit).unwrap();
        assert_eq!(digit_for_segments(lit), Some(digit));
    }
    assert_eq!(segments_of(10), None);
    assert_eq!(digit_for_segments(SegmentSet::from_literal("ab")), None);
    assert_eq!(digit_for_segments(SegmentSet::from_literal("fc")), Some(1));
}

#[test]
fn test_unique_length_digits() {
    assert_eq!(unique_length_digits(), vec![1, 4, 7, 8]);
    assert_eq!(digits_with_length(5), vec![2, 3, 5]);
    assert_eq!(digits_with_length(6), vec![0, 6, 9]);
    assert!(digits_with_length(1).is_empty());
}

#[test]
fn test_incidence_column_sums() {
    use ndarray::Axis;
    // How often each segment is lit across 2, 3 and 5.
    let counts = incidence(&[2, 3, 5]).sum_axis(Axis(0));
    assert_eq!(counts.to_vec(), vec![3, 1, 2, 3, 1, 2, 3]);
    let counts = incidence(&[0, 6, 9]).sum_axis(Axis(0));
    assert_eq!(counts.to_vec(), vec![3, 3, 2, 2, 2, 3, 3]);
}
