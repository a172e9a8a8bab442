use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr, Not, Sub};

/// One of the seven positions on a display.
///
/// ```text
///  aaaa
/// b    c
/// b    c
///  dddd
/// e    f
/// e    f
///  gggg
/// ```
///
/// Scrambled wire letters use the same seven names, so a `Segment`
/// also serves as the letter of a scrambled pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Segment> {
        Segment::ALL.get(i).copied()
    }

    pub fn from_char(ch: char) -> Option<Segment> {
        match ch {
            'a'..='g' => Segment::from_index(ch as usize - 'a' as usize),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[test]
fn test_segment_chars() {
    for seg in Segment::ALL {
        assert_eq!(Segment::from_char(seg.to_char()), Some(seg));
    }
    assert_eq!(Segment::from_char('d'), Some(Segment::D));
    assert_eq!(Segment::from_char('h'), None);
    assert_eq!(Segment::from_char('A'), None);
}

const ALL_BITS: u8 = 0b111_1111;

/// A set of segments, held as a bit per segment.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SegmentSet(u8);

impl SegmentSet {
    pub const EMPTY: SegmentSet = SegmentSet(0);
    pub const FULL: SegmentSet = SegmentSet(ALL_BITS);

    /// Builds a set from a literal such as `"acf"`.  Bytes outside
    /// `a..=g` are ignored; this is only meant for constant tables.
    pub const fn from_literal(s: &str) -> SegmentSet {
        let bytes = s.as_bytes();
        let mut bits: u8 = 0;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] >= b'a' && bytes[i] <= b'g' {
                bits |= 1 << (bytes[i] - b'a');
            }
            i += 1;
        }
        SegmentSet(bits)
    }

    pub fn single(seg: Segment) -> SegmentSet {
        SegmentSet(seg.bit())
    }

    pub fn contains(&self, seg: Segment) -> bool {
        self.0 & seg.bit() != 0
    }

    pub fn insert(&mut self, seg: Segment) {
        self.0 |= seg.bit();
    }

    pub fn remove(&mut self, seg: Segment) {
        self.0 &= !seg.bit();
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_subset(&self, other: &SegmentSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn symmetric_difference(&self, other: &SegmentSet) -> SegmentSet {
        SegmentSet(self.0 ^ other.0)
    }

    /// The only member, if there is exactly one.
    pub fn only(&self) -> Option<Segment> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Segment> + '_ {
        Segment::ALL.into_iter().filter(move |seg| self.contains(*seg))
    }
}

impl FromIterator<Segment> for SegmentSet {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> SegmentSet {
        let mut result = SegmentSet::EMPTY;
        for seg in iter {
            result.insert(seg);
        }
        result
    }
}

impl BitAnd for SegmentSet {
    type Output = SegmentSet;
    fn bitand(self, rhs: SegmentSet) -> SegmentSet {
        SegmentSet(self.0 & rhs.0)
    }
}

impl BitOr for SegmentSet {
    type Output = SegmentSet;
    fn bitor(self, rhs: SegmentSet) -> SegmentSet {
        SegmentSet(self.0 | rhs.0)
    }
}

impl Sub for SegmentSet {
    type Output = SegmentSet;
    fn sub(self, rhs: SegmentSet) -> SegmentSet {
        SegmentSet(self.0 & !rhs.0)
    }
}

impl Not for SegmentSet {
    type Output = SegmentSet;
    fn not(self) -> SegmentSet {
        SegmentSet(!self.0 & ALL_BITS)
    }
}

impl Display for SegmentSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for seg in self.iter() {
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

impl Debug for SegmentSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self)
    }
}

#[test]
fn test_segment_set_ops() {
    let cf = SegmentSet::from_literal("cf");
    let acf = SegmentSet::from_literal("fca");
    assert_eq!(cf.len(), 2);
    assert!(cf.is_subset(&acf));
    assert!(!acf.is_subset(&cf));
    assert_eq!(acf - cf, SegmentSet::single(Segment::A));
    assert_eq!((acf - cf).only(), Some(Segment::A));
    assert_eq!(cf.only(), None);
    assert_eq!(acf & cf, cf);
    assert_eq!(!acf, SegmentSet::from_literal("bdeg"));
    assert_eq!(
        cf.symmetric_difference(&SegmentSet::from_literal("fg")),
        SegmentSet::from_literal("cg")
    );
    assert_eq!(acf.to_string(), "acf");
    assert_eq!(format!("{:?}", SegmentSet::EMPTY), "{}");
}

#[test]
fn test_segment_set_from_iter() {
    let s: SegmentSet = [Segment::G, Segment::A, Segment::G].into_iter().collect();
    assert_eq!(s, SegmentSet::from_literal("ag"));
    assert_eq!(s.iter().collect::<Vec<_>>(), vec![Segment::A, Segment::G]);
    assert_eq!(SegmentSet::FULL.len(), 7);
}
