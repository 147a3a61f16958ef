use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

use num_traits::{PrimInt, Unsigned};

use crate::error::SweepError;

/// Coordinates are always 64-bit signed inside the sweeps.
pub type Position = i64;

pub trait GroupType: PrimInt + Unsigned + Hash + Debug + radsort::Key + Send + Sync {}
impl<T> GroupType for T where T: PrimInt + Unsigned + Hash + Debug + radsort::Key + Send + Sync {}

/// One row of a batch after padding. `idx` is the row's position in the
/// caller's arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval<C: GroupType> {
    pub group: C,
    pub start: Position,
    pub end: Position,
    pub idx: u32,
}

impl<C: GroupType> Interval<C> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Half-open overlap test.
    #[inline]
    pub fn overlaps(&self, other: &Interval<C>) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    /// True when `self` lies entirely within `other`.
    #[inline]
    pub fn contained_in(&self, other: &Interval<C>) -> bool {
        other.start <= self.start && self.end <= other.end
    }
}

/// An overlapping pair as positions inside one group's row slices.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct RowPair {
    pub row: u32,
    pub row2: u32,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct OverlapPair {
    pub idx: u32,
    pub idx2: u32,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Nearest {
    pub distance: Position,
    pub idx: u32,
    pub idx2: u32,
}

/// Which of the overlapping B rows to report per A row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OverlapType {
    First,
    Last,
    #[default]
    All,
    Contained,
}

impl FromStr for OverlapType {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(OverlapType::All),
            "first" => Ok(OverlapType::First),
            "last" => Ok(OverlapType::Last),
            "contained" => Ok(OverlapType::Contained),
            _ => Err(SweepError::InvalidOverlapType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn iv(start: Position, end: Position) -> Interval<u32> {
        Interval { group: 0, start, end, idx: 0 }
    }

    #[rstest]
    #[case(iv(1, 5), iv(3, 6), true)]
    #[case(iv(1, 5), iv(5, 6), false)]
    #[case(iv(5, 5), iv(3, 6), false)]
    #[case(iv(3, 6), iv(4, 4), false)]
    #[case(iv(0, 10), iv(2, 3), true)]
    fn half_open_overlap(#[case] a: Interval<u32>, #[case] b: Interval<u32>, #[case] expected: bool) {
        assert_eq!(a.overlaps(&b), expected);
        assert_eq!(b.overlaps(&a), expected);
    }

    #[rstest]
    #[case("all", OverlapType::All)]
    #[case("First", OverlapType::First)]
    #[case("LAST", OverlapType::Last)]
    #[case("contained", OverlapType::Contained)]
    fn parses_overlap_type(#[case] s: &str, #[case] expected: OverlapType) {
        assert_eq!(s.parse::<OverlapType>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_overlap_type() {
        assert!(matches!(
            "most".parse::<OverlapType>(),
            Err(SweepError::InvalidOverlapType(s)) if s == "most"
        ));
    }
}
