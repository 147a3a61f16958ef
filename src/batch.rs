use crate::error::SweepError;
use crate::ruranges_structs::{GroupType, Position};

/// Read-only view over one side of a query: parallel `groups`, `starts`
/// and `ends` arrays. Row `i` has original index `i`.
#[derive(Debug, Clone, Copy)]
pub struct IntervalBatch<'a, C: GroupType> {
    groups: &'a [C],
    starts: &'a [Position],
    ends: &'a [Position],
}

impl<'a, C: GroupType> IntervalBatch<'a, C> {
    pub fn new(
        groups: &'a [C],
        starts: &'a [Position],
        ends: &'a [Position],
    ) -> Result<Self, SweepError> {
        let n = starts.len();
        if ends.len() != n {
            return Err(SweepError::LengthMismatch {
                name: "ends",
                expected: n,
                found: ends.len(),
            });
        }
        if groups.len() != n {
            return Err(SweepError::LengthMismatch {
                name: "groups",
                expected: n,
                found: groups.len(),
            });
        }
        if u32::try_from(n).is_err() {
            return Err(SweepError::TooManyIntervals(n));
        }
        if let Some(idx) = (0..n).find(|&i| starts[i] > ends[i]) {
            return Err(SweepError::InvalidInterval {
                idx,
                start: starts[idx],
                end: ends[idx],
            });
        }

        Ok(IntervalBatch { groups, starts, ends })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    pub fn groups(&self) -> &'a [C] {
        self.groups
    }

    pub fn starts(&self) -> &'a [Position] {
        self.starts
    }

    pub fn ends(&self) -> &'a [Position] {
        self.ends
    }
}

/// Group ids for a batch that was supplied without any: every row is in
/// group 0.
pub fn ungrouped<C: GroupType>(len: usize) -> Vec<C> {
    vec![C::zero(); len]
}
