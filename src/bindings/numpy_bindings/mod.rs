use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

pub mod nearest_numpy;
pub mod overlaps_numpy;

use nearest_numpy::*;
use overlaps_numpy::*;

/// Adds one function per group id width to the module.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(chromsweep_numpy_u64, m)?)?;
    m.add_function(wrap_pyfunction!(chromsweep_numpy_u32, m)?)?;
    m.add_function(wrap_pyfunction!(chromsweep_numpy_u16, m)?)?;
    m.add_function(wrap_pyfunction!(chromsweep_numpy_u8, m)?)?;

    m.add_function(wrap_pyfunction!(count_overlaps_numpy_u64, m)?)?;
    m.add_function(wrap_pyfunction!(count_overlaps_numpy_u32, m)?)?;
    m.add_function(wrap_pyfunction!(count_overlaps_numpy_u16, m)?)?;
    m.add_function(wrap_pyfunction!(count_overlaps_numpy_u8, m)?)?;

    m.add_function(wrap_pyfunction!(nearest_numpy_u64, m)?)?;
    m.add_function(wrap_pyfunction!(nearest_numpy_u32, m)?)?;
    m.add_function(wrap_pyfunction!(nearest_numpy_u16, m)?)?;
    m.add_function(wrap_pyfunction!(nearest_numpy_u8, m)?)?;
    Ok(())
}
