use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use log::debug;

use crate::assemble::{assemble_counts, assemble_overlaps};
use crate::batch::IntervalBatch;
use crate::error::SweepError;
use crate::helpers::{keep_first_by_row, keep_last_by_row};
use crate::multiprocessing::{partition_two_arrays, run_groups, GroupRun};
use crate::options::{check_slack, Execution, OverlapOptions};
use crate::ruranges_structs::{GroupType, Interval, OverlapPair, OverlapType, Position, RowPair};
use crate::sorts::build_sorted_intervals;

/// Intervals whose start has been passed, keyed by end so the ones that
/// closed can be popped from the top.
type ActiveSet = BinaryHeap<Reverse<(Position, u32)>>;

/// Drops every active interval ending at or before `pos`. Afterwards all
/// remaining entries contain `pos`.
#[inline]
fn drain_ended(active: &mut ActiveSet, pos: Position) {
    while let Some(&Reverse((end, _))) = active.peek() {
        if end > pos {
            break;
        }
        active.pop();
    }
}

/// Returns all overlapping pairs between two start-sorted row lists of
/// one group, as local row positions.
///
/// Starts of both lists are merged in ascending order. Each side keeps an
/// active set; when an interval starts, the opposite active set is
/// drained of intervals that ended at or before that start and every
/// interval left in it overlaps the new one. Each pair is found exactly
/// once: by whichever of the two starts later. Empty intervals never
/// become active and so overlap nothing.
pub fn sweep_line_overlaps<C: GroupType>(rows: &[Interval<C>], rows2: &[Interval<C>]) -> Vec<RowPair> {
    let mut overlaps = Vec::new();

    if rows.is_empty() || rows2.is_empty() {
        return overlaps;
    }

    let mut active1 = ActiveSet::new();
    let mut active2 = ActiveSet::new();
    let (mut i, mut j) = (0usize, 0usize);

    loop {
        let first_set = match (rows.get(i), rows2.get(j)) {
            (Some(iv), Some(iv2)) => iv.start <= iv2.start,
            (Some(_), None) if active2.is_empty() => break,
            (Some(_), None) => true,
            (None, Some(_)) if active1.is_empty() => break,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        if first_set {
            let iv = &rows[i];
            let row = i as u32;
            i += 1;
            if iv.is_empty() {
                continue;
            }
            drain_ended(&mut active2, iv.start);
            for &Reverse((_, row2)) in active2.iter() {
                overlaps.push(RowPair { row, row2 });
            }
            active1.push(Reverse((iv.end, row)));
        } else {
            let iv2 = &rows2[j];
            let row2 = j as u32;
            j += 1;
            if iv2.is_empty() {
                continue;
            }
            drain_ended(&mut active1, iv2.start);
            for &Reverse((_, row)) in active1.iter() {
                overlaps.push(RowPair { row, row2 });
            }
            active2.push(Reverse((iv2.end, row2)));
        }
    }

    overlaps
}

/// Overlaps of one group with the containment filter and multiplicity
/// policy applied, mapped back to original indices.
pub fn overlaps_in_group<C: GroupType>(run: &GroupRun<'_, C>, options: &OverlapOptions) -> Vec<OverlapPair> {
    let GroupRun { rows, rows2, .. } = *run;
    let mut pairs = sweep_line_overlaps(rows, rows2);

    if options.requires_containment() {
        pairs.retain(|p| rows[p.row as usize].contained_in(&rows2[p.row2 as usize]));
    }

    match options.multiple {
        OverlapType::All | OverlapType::Contained => {}
        OverlapType::First => keep_first_by_row(&mut pairs, rows2),
        OverlapType::Last => keep_last_by_row(&mut pairs, rows2),
    }

    pairs
        .into_iter()
        .map(|p| OverlapPair {
            idx: rows[p.row as usize].idx,
            idx2: rows2[p.row2 as usize].idx,
        })
        .collect()
}

/// Finds the pairs `(idx1, idx2)` of rows in `batch` and `batch2` that
/// share a group and overlap once the `batch` intervals are widened by
/// `options.slack` on both sides. Output is ordered by `idx1`, then
/// `idx2`.
pub fn overlaps<C: GroupType>(
    batch: &IntervalBatch<C>,
    batch2: &IntervalBatch<C>,
    options: &OverlapOptions,
) -> Result<(Vec<u32>, Vec<u32>), SweepError> {
    check_slack(options.slack)?;
    let start = Instant::now();

    let sorted = build_sorted_intervals(batch, options.slack, true)?;
    let sorted2 = build_sorted_intervals(batch2, 0, true)?;
    let runs = partition_two_arrays(&sorted, &sorted2);
    debug!(
        "overlaps: {} x {} intervals in {} shared groups ({:?})",
        batch.len(),
        batch2.len(),
        runs.len(),
        options
    );

    let per_group = run_groups(&runs, options.execution, |run| {
        Ok(overlaps_in_group(run, options))
    })?;
    let (idx1, idx2) = assemble_overlaps(per_group);

    debug!("overlaps: {} pairs in {:?}", idx1.len(), start.elapsed());
    Ok((idx1, idx2))
}

/// Number of `batch2` intervals each `batch` interval overlaps, indexed by
/// original `batch` row.
pub fn count_overlaps<C: GroupType>(
    batch: &IntervalBatch<C>,
    batch2: &IntervalBatch<C>,
    slack: Position,
    execution: Execution,
) -> Result<Vec<u32>, SweepError> {
    check_slack(slack)?;
    let start = Instant::now();

    let sorted = build_sorted_intervals(batch, slack, false)?;
    let sorted2 = build_sorted_intervals(batch2, 0, false)?;
    let runs = partition_two_arrays(&sorted, &sorted2);

    let per_group = run_groups(&runs, execution, |run| {
        let mut counts = vec![0u32; run.rows.len()];
        for p in sweep_line_overlaps(run.rows, run.rows2) {
            counts[p.row as usize] += 1;
        }
        Ok(run
            .rows
            .iter()
            .zip(counts)
            .filter(|&(_, count)| count > 0)
            .map(|(iv, count)| (iv.idx, count))
            .collect::<Vec<_>>())
    })?;
    let counts = assemble_counts(batch.len(), per_group);

    debug!(
        "count_overlaps: {} x {} intervals in {:?}",
        batch.len(),
        batch2.len(),
        start.elapsed()
    );
    Ok(counts)
}
