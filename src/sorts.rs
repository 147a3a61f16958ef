use radsort::sort_by_key;

use crate::batch::IntervalBatch;
use crate::error::SweepError;
use crate::ruranges_structs::{GroupType, Interval, Position};

/// Turns a batch into rows, widening every interval by `slack` on both
/// sides. Fails instead of wrapping when the padded bounds leave the
/// `i64` range.
pub fn build_intervals<C: GroupType>(
    batch: &IntervalBatch<C>,
    slack: Position,
) -> Result<Vec<Interval<C>>, SweepError> {
    let groups = batch.groups();
    let starts = batch.starts();
    let ends = batch.ends();

    let mut intervals = Vec::with_capacity(batch.len());
    for i in 0..batch.len() {
        let idx = i as u32;
        let overflow = || SweepError::RangeOverflow {
            idx,
            start: starts[i],
            end: ends[i],
            slack,
        };
        intervals.push(Interval {
            group: groups[i],
            start: starts[i].checked_sub(slack).ok_or_else(overflow)?,
            end: ends[i].checked_add(slack).ok_or_else(overflow)?,
            idx,
        });
    }

    Ok(intervals)
}

/// Rows sorted by `(group, start[, end], idx)`. The radix sorts are stable
/// and the rows start out in index order, so ties keep the lower index
/// first.
pub fn build_sorted_intervals<C: GroupType>(
    batch: &IntervalBatch<C>,
    slack: Position,
    sort_on_ends_too: bool,
) -> Result<Vec<Interval<C>>, SweepError> {
    let mut intervals = build_intervals(batch, slack)?;

    if sort_on_ends_too {
        sort_by_key(&mut intervals, |i| i.end);
    };
    sort_by_key(&mut intervals, |i| i.start);
    sort_by_key(&mut intervals, |i| i.group);

    Ok(intervals)
}

/// Local row numbers of `rows` ordered so that walking the result from
/// the back yields `end` descending, then `start` ascending, then `idx`
/// ascending.
pub fn build_end_order<C: GroupType>(rows: &[Interval<C>]) -> Vec<u32> {
    let mut order: Vec<u32> = (0..rows.len() as u32).collect();
    order.sort_unstable_by(|&a, &b| {
        let (a, b) = (&rows[a as usize], &rows[b as usize]);
        a.end
            .cmp(&b.end)
            .then_with(|| b.start.cmp(&a.start))
            .then_with(|| b.idx.cmp(&a.idx))
    });
    order
}
