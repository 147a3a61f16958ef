//! Overlap and nearest-neighbour joins between two batches of half-open
//! integer intervals, partitioned by group id (e.g. chromosome).
//!
//! Intervals are only ever compared within one group. Each group is
//! sorted and swept on its own, so groups run in parallel on the rayon
//! pool unless [`Execution::Sequential`] is requested; both give the same
//! output.
//!
//! ```rust
//! use ruranges_sweep::{nearest, overlaps, IntervalBatch, NearestOptions, OverlapOptions};
//!
//! let groups = [0u32];
//! let a = IntervalBatch::new(&groups, &[1], &[5]).unwrap();
//! let groups2 = [0u32, 0];
//! let b = IntervalBatch::new(&groups2, &[3, 20], &[6, 25]).unwrap();
//!
//! let (idx1, idx2) = overlaps(&a, &b, &OverlapOptions::default()).unwrap();
//! assert_eq!((idx1, idx2), (vec![0], vec![0]));
//!
//! let (idx1, idx2, distance) = nearest(&a, &b, &NearestOptions::default().with_k(2)).unwrap();
//! assert_eq!((idx1, idx2, distance), (vec![0, 0], vec![0, 1], vec![0, 15]));
//! ```

pub mod assemble;
pub mod batch;
pub mod error;
pub mod helpers;
pub mod multiprocessing;
pub mod nearest;
pub mod options;
pub mod overlaps;
pub mod ruranges_structs;
pub mod sorts;

#[cfg(feature = "python")]
pub mod bindings;

pub use batch::{ungrouped, IntervalBatch};
pub use error::SweepError;
pub use nearest::{nearest, Direction};
pub use options::{Execution, NearestOptions, OverlapOptions};
pub use overlaps::{count_overlaps, overlaps};
pub use ruranges_structs::{GroupType, OverlapType, Position};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn ruranges_sweep(m: &Bound<'_, PyModule>) -> PyResult<()> {
    bindings::numpy_bindings::register(m)
}
