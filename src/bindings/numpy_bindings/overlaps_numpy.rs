use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::{pyfunction, Py, PyResult, Python};

use crate::batch::IntervalBatch;
use crate::options::{Execution, OverlapOptions};
use crate::overlaps::{count_overlaps, overlaps};

macro_rules! define_chromsweep_numpy {
    ($fname:ident, $chr_ty:ty) => {
        #[pyfunction]
        #[pyo3(signature = (chrs, starts, ends, chrs2, starts2, ends2, slack=0, overlap_type="all", contained=false))]
        #[allow(clippy::too_many_arguments)]
        pub fn $fname(
            py: Python<'_>,
            chrs: PyReadonlyArray1<$chr_ty>,
            starts: PyReadonlyArray1<i64>,
            ends: PyReadonlyArray1<i64>,
            chrs2: PyReadonlyArray1<$chr_ty>,
            starts2: PyReadonlyArray1<i64>,
            ends2: PyReadonlyArray1<i64>,
            slack: i64,
            overlap_type: &str,
            contained: bool,
        ) -> PyResult<(Py<PyArray1<u32>>, Py<PyArray1<u32>>)> {
            let batch = IntervalBatch::new(chrs.as_slice()?, starts.as_slice()?, ends.as_slice()?)?;
            let batch2 = IntervalBatch::new(chrs2.as_slice()?, starts2.as_slice()?, ends2.as_slice()?)?;
            let options = OverlapOptions::default()
                .with_slack(slack)
                .with_multiple(overlap_type.parse()?)
                .with_contained(contained);

            let (idx1, idx2) = py.allow_threads(|| overlaps(&batch, &batch2, &options))?;
            Ok((
                idx1.into_pyarray(py).to_owned().into(),
                idx2.into_pyarray(py).to_owned().into(),
            ))
        }
    };
}

macro_rules! define_count_overlaps_numpy {
    ($fname:ident, $chr_ty:ty) => {
        #[pyfunction]
        #[pyo3(signature = (chrs, starts, ends, chrs2, starts2, ends2, slack=0))]
        pub fn $fname(
            py: Python<'_>,
            chrs: PyReadonlyArray1<$chr_ty>,
            starts: PyReadonlyArray1<i64>,
            ends: PyReadonlyArray1<i64>,
            chrs2: PyReadonlyArray1<$chr_ty>,
            starts2: PyReadonlyArray1<i64>,
            ends2: PyReadonlyArray1<i64>,
            slack: i64,
        ) -> PyResult<Py<PyArray1<u32>>> {
            let batch = IntervalBatch::new(chrs.as_slice()?, starts.as_slice()?, ends.as_slice()?)?;
            let batch2 = IntervalBatch::new(chrs2.as_slice()?, starts2.as_slice()?, ends2.as_slice()?)?;

            let counts = py.allow_threads(|| {
                count_overlaps(&batch, &batch2, slack, Execution::default())
            })?;
            Ok(counts.into_pyarray(py).to_owned().into())
        }
    };
}

// ── concrete instantiations ────────────────────────────────────────────
define_chromsweep_numpy!(chromsweep_numpy_u64, u64);
define_chromsweep_numpy!(chromsweep_numpy_u32, u32);
define_chromsweep_numpy!(chromsweep_numpy_u16, u16);
define_chromsweep_numpy!(chromsweep_numpy_u8, u8);

define_count_overlaps_numpy!(count_overlaps_numpy_u64, u64);
define_count_overlaps_numpy!(count_overlaps_numpy_u32, u32);
define_count_overlaps_numpy!(count_overlaps_numpy_u16, u16);
define_count_overlaps_numpy!(count_overlaps_numpy_u8, u8);
