use thiserror::Error;

use crate::ruranges_structs::Position;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("`{name}` has length {found}, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Interval {idx} has start {start} after end {end}")]
    InvalidInterval {
        idx: usize,
        start: Position,
        end: Position,
    },

    #[error("Batch of {0} intervals exceeds the u32 index range")]
    TooManyIntervals(usize),

    #[error("Slack must be non-negative, got {0}")]
    NegativeSlack(Position),

    #[error("Interval {idx} ({start}, {end}) with slack {slack} overflows the 64-bit coordinate range")]
    RangeOverflow {
        idx: u32,
        start: Position,
        end: Position,
        slack: Position,
    },

    #[error("Invalid overlap type: {0} (expected first, all, last or contained)")]
    InvalidOverlapType(String),

    #[error("Invalid direction: {0} (expected forward, backward or any)")]
    InvalidDirection(String),

    #[error("Could not build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[cfg(feature = "python")]
impl From<SweepError> for pyo3::PyErr {
    fn from(err: SweepError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
