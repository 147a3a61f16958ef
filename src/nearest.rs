use std::{str::FromStr, time::Instant};

use log::debug;

use crate::{
    assemble::assemble_nearest,
    batch::IntervalBatch,
    error::SweepError,
    helpers::sort_by_row_then_start,
    multiprocessing::{partition_two_arrays, run_groups, GroupRun},
    options::{check_slack, NearestOptions},
    overlaps::sweep_line_overlaps,
    ruranges_structs::{GroupType, Interval, Nearest, Position},
    sorts::{build_end_order, build_sorted_intervals},
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    #[default]
    Any,
}

impl Direction {
    #[inline]
    fn looks_forward(self) -> bool {
        matches!(self, Direction::Forward | Direction::Any)
    }

    #[inline]
    fn looks_backward(self) -> bool {
        matches!(self, Direction::Backward | Direction::Any)
    }
}

impl FromStr for Direction {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "backward" => Ok(Direction::Backward),
            "any" => Ok(Direction::Any),
            _ => Err(SweepError::InvalidDirection(s.to_string())),
        }
    }
}

/// A B interval being considered for one query interval.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: Position,
    start: Position,
    idx: u32,
}

impl Candidate {
    #[inline]
    fn rank(&self) -> (Position, Position, u32) {
        (self.distance, self.start, self.idx)
    }
}

#[derive(Debug, Clone, Copy)]
enum Source {
    Overlap,
    Right,
    Left,
}

fn overflow<C: GroupType>(iv: &Interval<C>, slack: Position) -> SweepError {
    SweepError::RangeOverflow {
        idx: iv.idx,
        start: iv.start + slack,
        end: iv.end - slack,
        slack,
    }
}

/// Up to `k` nearest `rows2` intervals for every interval in `rows`.
///
/// `rows` and `rows2` are sorted by start. Three streams feed each query,
/// each already ordered by `(distance, start, idx)`:
///   - overlapping intervals (distance 0), from the overlap sweep,
///   - intervals to the right, walking `rows2` up from the first start
///     at or after the query end,
///   - intervals to the left, walking the by-end order down from the
///     last end at or before the query start.
///
/// Distance grows monotonically along each walk, so merging the stream
/// heads and stopping after `k` rows gives the exact k nearest.
pub fn nearest_in_group<C: GroupType>(
    run: &GroupRun<'_, C>,
    options: &NearestOptions,
) -> Result<Vec<Nearest>, SweepError> {
    let GroupRun { rows, rows2, .. } = *run;
    let k = options.k;
    let mut output = Vec::new();
    if k == 0 {
        return Ok(output);
    }

    let forward = options.direction.looks_forward();
    let backward = options.direction.looks_backward();

    let overlaps = if options.include_overlaps {
        let mut pairs = sweep_line_overlaps(rows, rows2);
        sort_by_row_then_start(&mut pairs, rows2);
        pairs
    } else {
        Vec::new()
    };
    let by_end = if backward {
        build_end_order(rows2)
    } else {
        Vec::new()
    };

    let mut o = 0usize;
    for (row, iv) in rows.iter().enumerate() {
        let o_start = o;
        while o < overlaps.len() && overlaps[o].row as usize == row {
            o += 1;
        }
        let mut over = overlaps[o_start..o].iter().map(|p| &rows2[p.row2 as usize]).peekable();

        let mut right = if forward {
            rows2.partition_point(|b| b.start < iv.end)
        } else {
            rows2.len()
        };
        let mut left = if backward {
            by_end.partition_point(|&r| rows2[r as usize].end <= iv.start)
        } else {
            0
        };

        let mut taken = 0;
        while taken < k {
            // an empty B sitting exactly on an empty query is on both
            // sides; it is counted once, on the right
            if forward {
                while left > 0 && rows2[by_end[left - 1] as usize].start >= iv.end {
                    left -= 1;
                }
            }

            let mut best: Option<(Source, Candidate)> = None;
            let mut consider = |source: Source, candidate: Candidate| {
                if best.map_or(true, |(_, b)| candidate.rank() < b.rank()) {
                    best = Some((source, candidate));
                }
            };

            if let Some(b) = over.peek() {
                consider(
                    Source::Overlap,
                    Candidate { distance: 0, start: b.start, idx: b.idx },
                );
            }
            if let Some(b) = rows2.get(right) {
                let distance = b.start.checked_sub(iv.end).ok_or_else(|| overflow(iv, options.slack))?;
                consider(Source::Right, Candidate { distance, start: b.start, idx: b.idx });
            }
            if left > 0 {
                let b = &rows2[by_end[left - 1] as usize];
                let distance = iv.start.checked_sub(b.end).ok_or_else(|| overflow(iv, options.slack))?;
                consider(Source::Left, Candidate { distance, start: b.start, idx: b.idx });
            }

            let Some((source, candidate)) = best else {
                break;
            };
            match source {
                Source::Overlap => {
                    over.next();
                }
                Source::Right => right += 1,
                Source::Left => left -= 1,
            }
            output.push(Nearest {
                distance: candidate.distance,
                idx: iv.idx,
                idx2: candidate.idx,
            });
            taken += 1;
        }
    }

    Ok(output)
}

/// For every interval in `batch`, the up to `k` nearest intervals of the
/// same group in `batch2`, as `(idx1, idx2, distance)`. Rows are ordered
/// by `idx1`, and per `idx1` by distance, then start, then `idx2`.
pub fn nearest<C: GroupType>(
    batch: &IntervalBatch<C>,
    batch2: &IntervalBatch<C>,
    options: &NearestOptions,
) -> Result<(Vec<u32>, Vec<u32>, Vec<Position>), SweepError> {
    check_slack(options.slack)?;
    let start = Instant::now();

    let sorted = build_sorted_intervals(batch, options.slack, true)?;
    let sorted2 = build_sorted_intervals(batch2, 0, false)?;
    let runs = partition_two_arrays(&sorted, &sorted2);
    debug!(
        "nearest: {} x {} intervals in {} shared groups ({:?})",
        batch.len(),
        batch2.len(),
        runs.len(),
        options
    );

    let per_group = run_groups(&runs, options.execution, |run| nearest_in_group(run, options))?;
    let merged = assemble_nearest(per_group);

    debug!("nearest: {} rows in {:?}", merged.0.len(), start.elapsed());
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Execution;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    type Rows = (Vec<u32>, Vec<u32>, Vec<i64>);

    fn run(a: &[(i64, i64)], b: &[(i64, i64)], options: NearestOptions) -> Rows {
        let g = vec![0u32; a.len()];
        let g2 = vec![0u32; b.len()];
        let (s, e): (Vec<i64>, Vec<i64>) = a.iter().copied().unzip();
        let (s2, e2): (Vec<i64>, Vec<i64>) = b.iter().copied().unzip();
        let batch = IntervalBatch::new(&g, &s, &e).unwrap();
        let batch2 = IntervalBatch::new(&g2, &s2, &e2).unwrap();
        nearest(&batch, &batch2, &options).unwrap()
    }

    #[test]
    fn equal_distances_prefer_smaller_start() {
        let res = run(&[(10, 20)], &[(0, 5), (25, 30)], NearestOptions::default().with_k(2));
        assert_eq!(res, (vec![0, 0], vec![0, 1], vec![5, 5]));
    }

    #[test]
    fn forward_ignores_intervals_behind() {
        let res = run(
            &[(10, 20)],
            &[(0, 5)],
            NearestOptions::default().with_direction(Direction::Forward),
        );
        assert_eq!(res, (vec![], vec![], vec![]));
    }

    #[rstest]
    #[case(Direction::Forward, (vec![0, 0], vec![2, 3], vec![2, 10]))]
    #[case(Direction::Backward, (vec![0, 0], vec![1, 0], vec![1, 8]))]
    #[case(Direction::Any, (vec![0, 0], vec![1, 2], vec![1, 2]))]
    fn direction_policy(#[case] direction: Direction, #[case] expected: Rows) {
        let b = [(0, 2), (5, 9), (22, 23), (30, 31)];
        let res = run(
            &[(10, 20)],
            &b,
            NearestOptions::default().with_k(2).with_direction(direction),
        );
        assert_eq!(res, expected);
    }

    #[test]
    fn overlaps_come_first_at_distance_zero() {
        let b = [(12, 14), (18, 40), (21, 22), (0, 9)];
        let res = run(&[(10, 20)], &b, NearestOptions::default().with_k(3));
        assert_eq!(res, (vec![0, 0, 0], vec![0, 1, 3], vec![0, 0, 1]));
    }

    #[test]
    fn excluded_overlaps_are_skipped_entirely() {
        let b = [(12, 14), (18, 40), (21, 22), (0, 9)];
        let res = run(
            &[(10, 20)],
            &b,
            NearestOptions::default().with_k(3).with_include_overlaps(false),
        );
        assert_eq!(res, (vec![0, 0], vec![3, 2], vec![1, 1]));
    }

    #[test]
    fn overlaps_ignore_direction() {
        let b = [(12, 14), (0, 9)];
        let res = run(
            &[(10, 20)],
            &b,
            NearestOptions::default().with_k(2).with_direction(Direction::Forward),
        );
        assert_eq!(res, (vec![0], vec![0], vec![0]));
    }

    #[test]
    fn touching_is_distance_zero_but_not_an_overlap() {
        let b = [(20, 25), (3, 10)];
        let res = run(
            &[(10, 20)],
            &b,
            NearestOptions::default().with_k(2).with_include_overlaps(false),
        );
        assert_eq!(res, (vec![0, 0], vec![1, 0], vec![0, 0]));
    }

    #[test]
    fn slack_shrinks_distances() {
        let b = [(25, 30)];
        let res = run(&[(10, 20)], &b, NearestOptions::default().with_slack(2));
        assert_eq!(res, (vec![0], vec![0], vec![3]));

        let res = run(&[(10, 20)], &b, NearestOptions::default().with_slack(6));
        assert_eq!(res, (vec![0], vec![0], vec![0]));
    }

    #[test]
    fn k_zero_and_fewer_candidates_than_k() {
        let b = [(30, 40)];
        let res = run(&[(10, 20)], &b, NearestOptions::default().with_k(0));
        assert_eq!(res, (vec![], vec![], vec![]));

        let res = run(&[(10, 20)], &b, NearestOptions::default().with_k(5));
        assert_eq!(res, (vec![0], vec![0], vec![10]));
    }

    #[test]
    fn empty_query_on_empty_candidate_is_reported_once() {
        let res = run(&[(5, 5)], &[(5, 5)], NearestOptions::default().with_k(3));
        assert_eq!(res, (vec![0], vec![0], vec![0]));

        let res = run(
            &[(5, 5)],
            &[(5, 5)],
            NearestOptions::default().with_direction(Direction::Backward),
        );
        assert_eq!(res, (vec![0], vec![0], vec![0]));
    }

    #[test]
    fn distance_overflow_is_an_error() {
        let g = [0u32];
        let batch = IntervalBatch::new(&g, &[i64::MIN], &[i64::MIN + 1]).unwrap();
        let batch2 = IntervalBatch::new(&g, &[i64::MAX - 1], &[i64::MAX]).unwrap();
        let res = nearest(&batch, &batch2, &NearestOptions::default());
        assert!(matches!(res, Err(SweepError::RangeOverflow { idx: 0, .. })));
    }

    #[test]
    fn results_are_ordered_by_query_index() {
        let g = [1u32, 0, 1];
        let batch = IntervalBatch::new(&g, &[100, 0, 0], &[110, 10, 10]).unwrap();
        let g2 = [0u32, 1, 1];
        let batch2 = IntervalBatch::new(&g2, &[12, 0, 120], &[13, 5, 125]).unwrap();
        let options = NearestOptions::default().with_execution(Execution::Sequential);
        let res = nearest(&batch, &batch2, &options).unwrap();
        assert_eq!(res, (vec![0, 1, 2], vec![2, 0, 1], vec![10, 2, 0]));
    }

    #[rstest]
    #[case("forward", Direction::Forward)]
    #[case("Backward", Direction::Backward)]
    #[case("ANY", Direction::Any)]
    fn parses_direction(#[case] s: &str, #[case] expected: Direction) {
        assert_eq!(s.parse::<Direction>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_direction() {
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(SweepError::InvalidDirection(_))
        ));
    }
}
