use radsort::sort_by_key;
use rustc_hash::FxHashSet;

use crate::ruranges_structs::{GroupType, Interval, RowPair};

/// Orders pairs by A row, then by the B interval's `(start, idx)`.
pub fn sort_by_row_then_start<C: GroupType>(pairs: &mut [RowPair], rows2: &[Interval<C>]) {
    sort_by_key(pairs, |p| rows2[p.row2 as usize].idx);
    sort_by_key(pairs, |p| rows2[p.row2 as usize].start);
    sort_by_key(pairs, |p| p.row);
}

/// Keeps, per A row, the B interval with the smallest `(start, idx)`.
pub fn keep_first_by_row<C: GroupType>(pairs: &mut Vec<RowPair>, rows2: &[Interval<C>]) {
    sort_by_row_then_start(pairs, rows2);
    let mut seen_row = FxHashSet::default();
    pairs.retain(|pair| seen_row.insert(pair.row));
}

/// Keeps, per A row, the B interval with the largest `(start, idx)`.
pub fn keep_last_by_row<C: GroupType>(pairs: &mut Vec<RowPair>, rows2: &[Interval<C>]) {
    sort_by_row_then_start(pairs, rows2);
    let mut seen_row = FxHashSet::default();
    pairs.reverse();
    pairs.retain(|pair| seen_row.insert(pair.row));
    pairs.reverse();
}
