//! Drawing patterns as a seven-segment display.

use ndarray::Array2;

use crate::mapping::Mapping;
use crate::pattern::Pattern;
use crate::segment::Segment;

const ROWS: usize = 7;
const COLS: usize = 6;

/// The canvas cells occupied by each segment.
fn cells(seg: Segment) -> Vec<(usize, usize)> {
    match seg {
        Segment::A => (1..5).map(|col| (0, col)).collect(),
        Segment::B => vec![(1, 0), (2, 0)],
        Segment::C => vec![(1, 5), (2, 5)],
        Segment::D => (1..5).map(|col| (3, col)).collect(),
        Segment::E => vec![(4, 0), (5, 0)],
        Segment::F => vec![(4, 5), (5, 5)],
        Segment::G => (1..5).map(|col| (6, col)).collect(),
    }
}

fn draw<F>(glyph: F) -> String
where
    F: Fn(Segment) -> char,
{
    let mut canvas: Array2<char> = Array2::from_elem((ROWS, COLS), ' ');
    for seg in Segment::ALL {
        let ch = glyph(seg);
        for (row, col) in cells(seg) {
            canvas[[row, col]] = ch;
        }
    }
    canvas
        .rows()
        .into_iter()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}

/// Each lit letter drawn at the position of the segment with the same
/// name.
pub fn render(pattern: &Pattern) -> String {
    draw(|seg| {
        if pattern.contains(seg) {
            seg.to_char()
        } else {
            ' '
        }
    })
}

/// Each segment shows the scrambled letter wired to it: the letter
/// itself if it is lit, `.` if it is not, and `?` if the wiring of
/// that segment is not known.
pub fn render_corrected(pattern: &Pattern, mapping: &Mapping) -> String {
    draw(|seg| match mapping.scramble(seg) {
        Some(letter) if pattern.contains(letter) => letter.to_char(),
        Some(_) => '.',
        None => '?',
    })
}

/// The raw and corrected drawings side by side.
pub fn render_comparison(pattern: &Pattern, mapping: &Mapping) -> String {
    let raw = render(pattern);
    let corrected = render_corrected(pattern, mapping);
    raw.lines()
        .zip(corrected.lines())
        .map(|(left, right)| format!("{}    {}", left, right))
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
use crate::{deduce::deduce, entry::Entry, EXAMPLE_ENTRY};

#[test]
fn test_render() {
    let one = Pattern::try_from("cf").unwrap();
    assert_eq!(
        render(&one),
        ["      ", "     c", "     c", "      ", "     f", "     f", "      "].join("\n")
    );
    let eight = Pattern::try_from("abcdefg").unwrap();
    assert_eq!(
        render(&eight),
        [" aaaa ", "b    c", "b    c", " dddd ", "e    f", "e    f", " gggg "].join("\n")
    );
}

#[test]
fn test_render_corrected() {
    let entry: Entry = EXAMPLE_ENTRY.parse().unwrap();
    let mapping = deduce(&entry).unwrap();
    let eight = entry.patterns()[0];
    assert_eq!(
        render_corrected(&eight, &mapping),
        " dddd \ne    a\ne    a\n ffff \ng    b\ng    b\n cccc "
    );
    // "ab" is 1: only c and f are lit.
    let one = entry.patterns()[9];
    assert_eq!(
        render_corrected(&one, &mapping),
        [" .... ", ".    a", ".    a", " .... ", ".    b", ".    b", " .... "].join("\n")
    );
}

#[test]
fn test_render_partial_mapping() {
    let mut mapping = Mapping::new();
    mapping.identify(Segment::D, Segment::A).unwrap();
    let seven = Pattern::try_from("dab").unwrap();
    assert_eq!(
        render_corrected(&seven, &mapping),
        [" dddd ", "?    ?", "?    ?", " ???? ", "?    ?", "?    ?", " ???? "].join("\n")
    );
}

#[test]
fn test_render_comparison() {
    let entry: Entry = EXAMPLE_ENTRY.parse().unwrap();
    let mapping = deduce(&entry).unwrap();
    let comparison = render_comparison(&entry.patterns()[0], &mapping);
    let first: Vec<&str> = comparison.lines().take(2).collect();
    assert_eq!(first, vec![" aaaa      dddd ", "b    c    e    a"]);
}
