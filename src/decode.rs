use crate::digit::digit_for_segments;
use crate::entry::Entry;
use crate::error::SolveError;
use crate::mapping::Mapping;
use crate::pattern::Pattern;
use crate::{solve, Strategy};

pub fn decode_pattern(pattern: &Pattern, mapping: &Mapping) -> Option<u8> {
    mapping
        .unscramble_all(pattern.letters())
        .and_then(digit_for_segments)
}

/// The digit shown by each pattern, provided that `mapping` turns
/// every pattern into a digit and no two into the same one.
pub fn label_patterns(patterns: &[Pattern], mapping: &Mapping) -> Option<Vec<u8>> {
    let mut seen = [false; 10];
    let mut labels = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let digit = decode_pattern(pattern, mapping)?;
        if seen[digit as usize] {
            return None;
        }
        seen[digit as usize] = true;
        labels.push(digit);
    }
    Some(labels)
}

pub fn decode(entry: &Entry, mapping: &Mapping) -> Result<[u8; 4], SolveError> {
    let mut digits = [0u8; 4];
    for (slot, output) in digits.iter_mut().zip(entry.outputs().iter()) {
        *slot = decode_pattern(output, mapping).ok_or_else(|| SolveError::UndecodableOutput {
            entry: entry.raw().to_string(),
            pattern: output.to_string(),
        })?;
    }
    Ok(digits)
}

/// Most significant digit first.
pub fn assemble(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0, |number, digit| number * 10 + u64::from(*digit))
}

pub fn output_value(entry: &Entry, strategy: Strategy) -> Result<u64, SolveError> {
    let mapping = solve(entry, strategy)?;
    decode(entry, &mapping).map(|digits| assemble(&digits))
}

/// One result per entry; a failure in one entry does not affect the
/// others.
pub fn output_values(entries: &[Entry], strategy: Strategy) -> Vec<Result<u64, SolveError>> {
    entries
        .iter()
        .map(|entry| output_value(entry, strategy))
        .collect()
}

/// Count the outputs showing 1, 4, 7 or 8, which are recognisable by
/// length alone.
pub fn count_unique_length_outputs(entries: &[Entry]) -> usize {
    entries
        .iter()
        .flat_map(|entry| entry.outputs().iter())
        .filter(|output| {
            matches!(
                output.len(),
                2 |   // it's a 1.
                4 |   // it's a 4.
                3 |   // it's a 7.
                7 // it's an 8.
            )
        })
        .count()
}

#[cfg(test)]
use crate::{entry::parse_entries, SAMPLE_INPUT, EXAMPLE_ENTRY};

#[cfg(test)]
fn sample_entries() -> Vec<Entry> {
    parse_entries(SAMPLE_INPUT)
        .into_iter()
        .collect::<Result<Vec<Entry>, SolveError>>()
        .unwrap()
}

#[test]
fn test_assemble() {
    assert_eq!(assemble(&[5, 3, 5, 3]), 5353);
    assert_eq!(assemble(&[0, 0, 7, 0]), 70);
    assert_eq!(assemble(&[]), 0);
}

#[test]
fn test_decode_example() {
    let entry: Entry = EXAMPLE_ENTRY.parse().unwrap();
    let mapping = solve(&entry, Strategy::Deduction).unwrap();
    assert_eq!(decode(&entry, &mapping), Ok([5, 3, 5, 3]));
    assert_eq!(output_value(&entry, Strategy::Deduction), Ok(5353));
}

#[test]
fn test_decode_incomplete_mapping() {
    let entry: Entry = EXAMPLE_ENTRY.parse().unwrap();
    assert_eq!(
        decode(&entry, &Mapping::new()),
        Err(SolveError::UndecodableOutput {
            entry: EXAMPLE_ENTRY.to_string(),
            pattern: "bcdef".to_string(),
        })
    );
}

#[test]
fn test_label_patterns_rejects_repeats() {
    let entry: Entry = EXAMPLE_ENTRY.parse().unwrap();
    let mapping = solve(&entry, Strategy::Deduction).unwrap();
    let repeated = [entry.patterns()[0], entry.patterns()[0]];
    assert_eq!(label_patterns(&repeated, &mapping), None);
    assert_eq!(label_patterns(&entry.patterns()[..1], &mapping), Some(vec![8]));
}

#[test]
fn test_sample_part1() {
    assert_eq!(count_unique_length_outputs(&sample_entries()), 26);
}

#[test]
fn test_sample_part2() {
    let entries = sample_entries();
    for strategy in [Strategy::Deduction, Strategy::Exhaustive] {
        let values: Vec<u64> = output_values(&entries, strategy)
            .into_iter()
            .collect::<Result<Vec<u64>, SolveError>>()
            .unwrap();
        assert_eq!(
            values,
            vec![8394, 9781, 1197, 9361, 4873, 8418, 4548, 1625, 8717, 4315]
        );
        assert_eq!(values.iter().sum::<u64>(), 61229);
    }
}

#[test]
fn test_failures_stay_local() {
    let mut entries = sample_entries();
    entries.insert(
        1,
        "abcdefg ab abc abcd abcde abcdf abcdg abcdef abcdeg abcdfg | ab abc abcd abcdefg"
            .parse()
            .unwrap(),
    );
    let values = output_values(&entries, Strategy::Deduction);
    assert!(values[1].is_err());
    let total: u64 = values.iter().filter_map(|v| v.as_ref().ok()).sum();
    assert_eq!(total, 61229);
}
