#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owned parallel arrays for one side of a query.
#[derive(Debug, Clone, Default)]
pub struct Ranges {
    pub groups: Vec<u32>,
    pub starts: Vec<i64>,
    pub ends: Vec<i64>,
}

impl Ranges {
    pub fn from_rows(rows: &[(u32, i64, i64)]) -> Self {
        let mut out = Ranges::default();
        for &(g, s, e) in rows {
            out.groups.push(g);
            out.starts.push(s);
            out.ends.push(e);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn batch(&self) -> ruranges_sweep::IntervalBatch<'_, u32> {
        ruranges_sweep::IntervalBatch::new(&self.groups, &self.starts, &self.ends).unwrap()
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Random intervals over a few groups, including zero-length ones and
/// many shared coordinates so that ties get exercised.
pub fn random_ranges(rng: &mut StdRng, n: usize, groups: u32, span: i64) -> Ranges {
    let mut out = Ranges::default();
    for _ in 0..n {
        let start = rng.random_range(0..span);
        let len = if rng.random_bool(0.1) { 0 } else { rng.random_range(1..=span / 5 + 1) };
        out.groups.push(rng.random_range(0..groups));
        out.starts.push(start);
        out.ends.push(start + len);
    }
    out
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn brute_overlaps(a: &Ranges, b: &Ranges, slack: i64, contained: bool) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for i in 0..a.len() {
        let (ps, pe) = (a.starts[i] - slack, a.ends[i] + slack);
        for j in 0..b.len() {
            if a.groups[i] != b.groups[j] {
                continue;
            }
            let (s2, e2) = (b.starts[j], b.ends[j]);
            let hit = ps.max(s2) < pe.min(e2);
            if hit && (!contained || (s2 <= ps && pe <= e2)) {
                out.push((i as u32, j as u32));
            }
        }
    }
    out
}

pub fn zip2(res: (Vec<u32>, Vec<u32>)) -> Vec<(u32, u32)> {
    res.0.into_iter().zip(res.1).collect()
}

pub fn zip3(res: (Vec<u32>, Vec<u32>, Vec<i64>)) -> Vec<(u32, u32, i64)> {
    res.0.into_iter().zip(res.1).zip(res.2).map(|((a, b), c)| (a, b, c)).collect()
}
