use radsort::sort_by_key;

use crate::ruranges_structs::{Nearest, OverlapPair, Position};

/// Flattens per-group pairs and orders them by `(idx1, idx2)`.
pub fn assemble_overlaps(per_group: Vec<Vec<OverlapPair>>) -> (Vec<u32>, Vec<u32>) {
    let mut pairs: Vec<OverlapPair> = per_group.into_iter().flatten().collect();

    sort_by_key(&mut pairs, |p| p.idx2);
    sort_by_key(&mut pairs, |p| p.idx);

    pairs.into_iter().map(|pair| (pair.idx, pair.idx2)).unzip()
}

/// Flattens per-group neighbours and orders them by `idx1`. The sort is
/// stable, so the rows of one query interval keep the order the sweep
/// found them in.
pub fn assemble_nearest(per_group: Vec<Vec<Nearest>>) -> (Vec<u32>, Vec<u32>, Vec<Position>) {
    let mut results: Vec<Nearest> = per_group.into_iter().flatten().collect();

    sort_by_key(&mut results, |n| n.idx);

    let mut out_idxs = Vec::with_capacity(results.len());
    let mut out_idxs2 = Vec::with_capacity(results.len());
    let mut out_distances = Vec::with_capacity(results.len());

    for rec in results {
        out_idxs.push(rec.idx);
        out_idxs2.push(rec.idx2);
        out_distances.push(rec.distance);
    }

    (out_idxs, out_idxs2, out_distances)
}

/// Scatters per-group `(idx, count)` entries into a dense vector of
/// length `len`. Rows without an entry count zero.
pub fn assemble_counts(len: usize, per_group: Vec<Vec<(u32, u32)>>) -> Vec<u32> {
    let mut counts = vec![0; len];
    for (idx, count) in per_group.into_iter().flatten() {
        counts[idx as usize] = count;
    }
    counts
}
