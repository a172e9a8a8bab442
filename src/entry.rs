use std::str::FromStr;

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0, space1},
    combinator::{all_consuming, map_res},
    multi::separated_list1,
    sequence::{delimited, separated_pair},
    IResult,
};

use crate::error::SolveError;
use crate::pattern::Pattern;

/// One line of puzzle input: the ten unique patterns seen on a
/// display, followed by the four patterns showing its output value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    raw: String,
    patterns: [Pattern; 10],
    outputs: [Pattern; 4],
}

impl Entry {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn patterns(&self) -> &[Pattern; 10] {
        &self.patterns
    }

    pub fn outputs(&self) -> &[Pattern; 4] {
        &self.outputs
    }
}

fn is_letter(ch: char) -> bool {
    ('a'..='z').contains(&ch)
}

fn pattern_parser(input: &str) -> IResult<&str, Pattern> {
    map_res(take_while1(is_letter), |s: &str| Pattern::try_from(s))(input)
}

fn patterns_parser(input: &str) -> IResult<&str, Vec<Pattern>> {
    separated_list1(space1, pattern_parser)(input)
}

fn entry_parser(input: &str) -> IResult<&str, (Vec<Pattern>, Vec<Pattern>)> {
    all_consuming(separated_pair(
        patterns_parser,
        delimited(space0, char('|'), space0),
        patterns_parser,
    ))(input)
}

/// Say what is wrong with a line the parser rejected, in terms of the
/// line rather than the parser.
fn explain_parse_failure(line: &str, e: nom::Err<nom::error::Error<&str>>) -> String {
    let bad_pattern = line
        .split(|ch: char| ch == '|' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
        .find_map(|token| Pattern::try_from(token).err());
    if let Some(reason) = bad_pattern {
        return reason;
    }
    match line.matches('|').count() {
        0 => "expected two fields separated by '|'".to_string(),
        1 => match e {
            nom::Err::Error(inner) | nom::Err::Failure(inner) if !inner.input.is_empty() => {
                format!("unexpected text at '{}'", inner.input)
            }
            _ => "unexpected end of line".to_string(),
        },
        _ => "too many '|' in input line".to_string(),
    }
}

impl FromStr for Entry {
    type Err = SolveError;
    fn from_str(s: &str) -> Result<Entry, SolveError> {
        let line = s.trim();
        let malformed = |reason: String| SolveError::MalformedEntry {
            line: line.to_string(),
            reason,
        };
        let (patterns, outputs) = match entry_parser(line) {
            Ok((_, parsed)) => parsed,
            Err(e) => {
                return Err(malformed(explain_parse_failure(line, e)));
            }
        };
        let (npatterns, noutputs) = (patterns.len(), outputs.len());
        let patterns: [Pattern; 10] = patterns
            .try_into()
            .map_err(|_| malformed(format!("expected 10 patterns, got {}", npatterns)))?;
        let outputs: [Pattern; 4] = outputs
            .try_into()
            .map_err(|_| malformed(format!("expected 4 outputs, got {}", noutputs)))?;
        Ok(Entry {
            raw: line.to_string(),
            patterns,
            outputs,
        })
    }
}

/// Parse every non-blank line.  A bad line does not stop the others
/// from being parsed.
pub fn parse_entries(input: &str) -> Vec<Result<Entry, SolveError>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Entry::from_str)
        .collect()
}

#[test]
fn test_parse_entry() {
    let entry: Entry = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf"
        .parse()
        .unwrap();
    assert_eq!(entry.patterns()[0].len(), 7);
    assert_eq!(entry.patterns()[9].to_string(), "ab");
    assert_eq!(entry.outputs()[1].to_string(), "abcdf");
    assert!(entry.outputs()[0].is_identical_to(&entry.outputs()[2]));
    assert!(entry.raw().starts_with("acedgfb"));
}

#[test]
fn test_parse_tolerates_spacing() {
    assert!("  ab abc abcd abcde abcdef abcdefg bc bcd bcde bcdef|ab cd ef g  "
        .parse::<Entry>()
        .is_ok());
}

#[test]
fn test_parse_wrong_counts() {
    match "ab cd | ab cd ef gf".parse::<Entry>() {
        Err(SolveError::MalformedEntry { reason, .. }) => {
            assert_eq!(reason, "expected 10 patterns, got 2");
        }
        other => panic!("unexpected result {:?}", other),
    }
    match "a b c d e f g ab ac ad | ab ac ad".parse::<Entry>() {
        Err(SolveError::MalformedEntry { reason, .. }) => {
            assert_eq!(reason, "expected 4 outputs, got 3");
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_parse_rejects_junk() {
    assert!(matches!(
        "a b c d e f g ab ac ad ab ac ad ae".parse::<Entry>(),
        Err(SolveError::MalformedEntry { .. })
    ));
    assert!(matches!(
        "a b c d e f g ab ac ad | ab ac ad ae | ab".parse::<Entry>(),
        Err(SolveError::MalformedEntry { .. })
    ));
    // 'z' is a letter but not a segment.
    assert!(matches!(
        "a b c d e f g ab ac az | ab ac ad ae".parse::<Entry>(),
        Err(SolveError::MalformedEntry { .. })
    ));
}

#[cfg(test)]
fn malformed_reason(line: &str) -> String {
    match line.parse::<Entry>() {
        Err(SolveError::MalformedEntry { reason, .. }) => reason,
        other => panic!("expected a malformed entry, got {:?}", other),
    }
}

#[test]
fn test_malformed_reasons() {
    assert_eq!(
        malformed_reason("a b c d e f g ab ac az | ab ac ad ae"),
        "'z' is not a segment letter in az"
    );
    assert_eq!(
        malformed_reason("a b c d e f g ab ac ad | ab ac ad A"),
        "'A' is not a segment letter in A"
    );
    assert_eq!(
        malformed_reason("a b c d e f g ab ac ad ab ac ad ae"),
        "expected two fields separated by '|'"
    );
    assert_eq!(
        malformed_reason("a b c d e f g ab ac ad | ab ac ad ae | ab"),
        "too many '|' in input line"
    );
    assert_eq!(
        malformed_reason("a b c d e f g ab ac ad | "),
        "unexpected end of line"
    );
    assert_eq!(
        malformed_reason("a b c d e f g ab ac ad | ab ,ac"),
        "',' is not a segment letter in ,ac"
    );
    assert_eq!(
        malformed_reason("| ab ac ad ae"),
        "unexpected text at '| ab ac ad ae'"
    );
}

#[test]
fn test_parse_entries_keeps_going() {
    let parsed = parse_entries("junk\n\nab | cd\n");
    assert_eq!(parsed.len(), 2);
    assert!(parsed.iter().all(Result::is_err));
}
