use crate::error::SweepError;
use crate::nearest::Direction;
use crate::ruranges_structs::{OverlapType, Position};

/// How the per-group work is scheduled. Output does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Sequential,
    /// `threads: None` uses the global rayon pool.
    Parallel { threads: Option<usize> },
}

impl Default for Execution {
    fn default() -> Self {
        Execution::Parallel { threads: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapOptions {
    pub slack: Position,
    pub multiple: OverlapType,
    pub contained: bool,
    pub execution: Execution,
}

impl Default for OverlapOptions {
    fn default() -> Self {
        OverlapOptions {
            slack: 0,
            multiple: OverlapType::All,
            contained: false,
            execution: Execution::default(),
        }
    }
}

impl OverlapOptions {
    pub fn with_slack(mut self, slack: Position) -> Self {
        self.slack = slack;
        self
    }

    pub fn with_multiple(mut self, multiple: OverlapType) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_contained(mut self, contained: bool) -> Self {
        self.contained = contained;
        self
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// `multiple = contained` implies the containment filter.
    pub fn requires_containment(&self) -> bool {
        self.contained || self.multiple == OverlapType::Contained
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestOptions {
    pub slack: Position,
    pub k: usize,
    pub include_overlaps: bool,
    pub direction: Direction,
    pub execution: Execution,
}

impl Default for NearestOptions {
    fn default() -> Self {
        NearestOptions {
            slack: 0,
            k: 1,
            include_overlaps: true,
            direction: Direction::Any,
            execution: Execution::default(),
        }
    }
}

impl NearestOptions {
    pub fn with_slack(mut self, slack: Position) -> Self {
        self.slack = slack;
        self
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_include_overlaps(mut self, include_overlaps: bool) -> Self {
        self.include_overlaps = include_overlaps;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }
}

pub(crate) fn check_slack(slack: Position) -> Result<(), SweepError> {
    if slack < 0 {
        return Err(SweepError::NegativeSlack(slack));
    }
    Ok(())
}
