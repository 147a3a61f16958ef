use std::fmt;

use log::trace;
use rayon::prelude::*;

use crate::error::SweepError;
use crate::options::Execution;
use crate::ruranges_structs::{GroupType, Interval};

/// Returns boundary indices [0, ..., data.len()] whenever `group` changes.
/// E.g. if `data` has group=1 for indices [0..2), group=2 for [2..5),
/// you get [0, 2, 5]. Empty input gives no boundaries.
pub fn find_group_boundaries<C: GroupType>(data: &[Interval<C>]) -> Vec<usize> {
    let mut boundaries = Vec::new();
    if data.is_empty() {
        return boundaries;
    }

    boundaries.push(0);
    for i in 1..data.len() {
        if data[i].group != data[i - 1].group {
            boundaries.push(i);
        }
    }
    boundaries.push(data.len());

    boundaries
}

/// Converts boundary indices into (group, start_index, end_index) blocks.
fn build_group_blocks<C: GroupType>(
    data: &[Interval<C>],
    boundaries: &[usize],
) -> Vec<(C, usize, usize)> {
    boundaries
        .windows(2)
        .filter(|w| w[0] < w[1])
        .map(|w| (data[w[0]].group, w[0], w[1]))
        .collect()
}

/// The rows of one group on both sides of a query.
#[derive(Debug, Clone, Copy)]
pub struct GroupRun<'a, C: GroupType> {
    pub group: C,
    pub rows: &'a [Interval<C>],
    pub rows2: &'a [Interval<C>],
}

impl<C: GroupType> fmt::Display for GroupRun<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GroupRun {{ group: {:?}, len1: {}, len2: {} }}",
            self.group,
            self.rows.len(),
            self.rows2.len()
        )
    }
}

/// Pairs up the groups of two group-sorted row lists. Groups missing from
/// either side are dropped; the rest come out in ascending group order.
pub fn partition_two_arrays<'a, C: GroupType>(
    sorted: &'a [Interval<C>],
    sorted2: &'a [Interval<C>],
) -> Vec<GroupRun<'a, C>> {
    let blocks = build_group_blocks(sorted, &find_group_boundaries(sorted));
    let blocks2 = build_group_blocks(sorted2, &find_group_boundaries(sorted2));

    let mut runs = Vec::with_capacity(blocks.len().min(blocks2.len()));
    let (mut i, mut j) = (0usize, 0usize);
    while i < blocks.len() && j < blocks2.len() {
        let (group, start1, end1) = blocks[i];
        let (group2, start2, end2) = blocks2[j];
        if group < group2 {
            i += 1;
        } else if group2 < group {
            j += 1;
        } else {
            runs.push(GroupRun {
                group,
                rows: &sorted[start1..end1],
                rows2: &sorted2[start2..end2],
            });
            i += 1;
            j += 1;
        }
    }

    runs
}

/// Applies `f` to every group, in parallel or not, and returns the
/// per-group results in the order of `runs`.
pub fn run_groups<C, R, F>(
    runs: &[GroupRun<'_, C>],
    execution: Execution,
    f: F,
) -> Result<Vec<R>, SweepError>
where
    C: GroupType,
    R: Send,
    F: Fn(&GroupRun<'_, C>) -> Result<R, SweepError> + Sync + Send,
{
    let traced = |run: &GroupRun<'_, C>| {
        trace!("sweeping {}", run);
        f(run)
    };

    match execution {
        Execution::Sequential => runs.iter().map(traced).collect(),
        Execution::Parallel { threads: None } => runs.par_iter().map(traced).collect(),
        Execution::Parallel {
            threads: Some(threads),
        } => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| runs.par_iter().map(traced).collect())
        }
    }
}
