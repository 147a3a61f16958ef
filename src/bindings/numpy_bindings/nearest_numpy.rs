use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::{pyfunction, Py, PyResult, Python};

use crate::batch::IntervalBatch;
use crate::nearest::nearest;
use crate::options::NearestOptions;

macro_rules! define_nearest_numpy {
    ($fname:ident, $chr_ty:ty) => {
        #[pyfunction]
        #[pyo3(signature = (*, chrs, starts, ends, chrs2, starts2, ends2, slack=0, k=1, include_overlaps=true, direction="any"))]
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
            k: usize,
            include_overlaps: bool,
            direction: &str,
        ) -> PyResult<(Py<PyArray1<u32>>, Py<PyArray1<u32>>, Py<PyArray1<i64>>)> {
            let batch = IntervalBatch::new(chrs.as_slice()?, starts.as_slice()?, ends.as_slice()?)?;
            let batch2 = IntervalBatch::new(chrs2.as_slice()?, starts2.as_slice()?, ends2.as_slice()?)?;
            let options = NearestOptions::default()
                .with_slack(slack)
                .with_k(k)
                .with_include_overlaps(include_overlaps)
                .with_direction(direction.parse()?);

            let (idx1, idx2, distances) = py.allow_threads(|| nearest(&batch, &batch2, &options))?;
            Ok((
                idx1.into_pyarray(py).to_owned().into(),
                idx2.into_pyarray(py).to_owned().into(),
                distances.into_pyarray(py).to_owned().into(),
            ))
        }
    };
}

define_nearest_numpy!(nearest_numpy_u64, u64);
define_nearest_numpy!(nearest_numpy_u32, u32);
define_nearest_numpy!(nearest_numpy_u16, u16);
define_nearest_numpy!(nearest_numpy_u8, u8);
