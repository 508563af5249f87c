//! Two-way equal-sum partitioning driven by the reachability table

use crate::algorithm::bitmatrix::BitMatrix;
use crate::algorithm::reachability::{
    NoopObserver, TableObserver, build_table, is_reachable, reconstruct,
};
use crate::io::error::{PartitionError, Result, allocation_failure};
use num_traits::{PrimInt, Unsigned};
use std::fmt;

pub use crate::algorithm::reachability::Side;

/// Outcome of a partition attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartitionStatus {
    /// Both halves sum to exactly half the total
    Feasible,
    /// Total is even but no selection reaches half of it
    InfeasibleEven,
    /// Total is odd, decided without building a table
    InfeasibleOdd,
}

impl PartitionStatus {
    /// Whether a valid split exists
    pub const fn is_feasible(self) -> bool {
        matches!(self, Self::Feasible)
    }
}

impl fmt::Display for PartitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feasible => write!(f, "feasible"),
            Self::InfeasibleEven => write!(f, "infeasible (no subset reaches half)"),
            Self::InfeasibleOdd => write!(f, "infeasible (sum is odd)"),
        }
    }
}

/// Result of [`PartitionEngine::partition`]
///
/// When `status` is [`PartitionStatus::Feasible`] the two sets hold every
/// input value exactly once and sum to the same total. Otherwise both sets
/// and the assignment are empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition<T> {
    /// Feasibility of the input
    pub status: PartitionStatus,
    /// Values summing to half the total, in input order
    pub set1: Vec<T>,
    /// Remaining values, in input order
    pub set2: Vec<T>,
    /// Side chosen for each input index
    pub assignment: Vec<Side>,
}

impl<T> Partition<T> {
    const fn infeasible(status: PartitionStatus) -> Self {
        Self {
            status,
            set1: Vec::new(),
            set2: Vec::new(),
            assignment: Vec::new(),
        }
    }

    /// Whether a valid split was produced
    pub const fn is_feasible(&self) -> bool {
        self.status.is_feasible()
    }
}

impl<T: Copy> Partition<T> {
    fn from_assignment(values: &[T], assignment: Vec<Side>) -> Self {
        let (set1, set2): (Vec<(T, Side)>, Vec<(T, Side)>) = values
            .iter()
            .copied()
            .zip(assignment.iter().copied())
            .partition(|&(_, side)| side == Side::First);

        Self {
            status: PartitionStatus::Feasible,
            set1: set1.into_iter().map(|(value, _)| value).collect(),
            set2: set2.into_iter().map(|(value, _)| value).collect(),
            assignment,
        }
    }
}

// Half-sum and per-element weights, ready for table construction
struct Prepared {
    target: usize,
    weights: Vec<usize>,
}

/// Decides equal-sum splits with a bit-packed dynamic-programming table
///
/// The engine holds only configuration. Each call allocates its own table
/// and releases it before returning, so one engine can serve any number of
/// independent calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartitionEngine {
    max_table_bytes: Option<usize>,
}

impl PartitionEngine {
    /// Create an engine with no table size limit
    pub const fn new() -> Self {
        Self {
            max_table_bytes: None,
        }
    }

    /// Refuse tables larger than `bytes` before allocating them
    #[must_use]
    pub const fn with_table_limit(mut self, bytes: usize) -> Self {
        self.max_table_bytes = Some(bytes);
        self
    }

    /// Configured table size limit, if any
    pub const fn table_limit(&self) -> Option<usize> {
        self.max_table_bytes
    }

    /// Split `values` into two sets of equal sum
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::SumOverflow`] if the total does not fit in
    /// `T`, and an allocation error if the table is too large
    pub fn partition<T>(&self, values: &[T]) -> Result<Partition<T>>
    where
        T: PrimInt + Unsigned,
    {
        self.partition_observed(values, &mut NoopObserver)
    }

    /// Split `values`, reporting table construction to `observer`
    ///
    /// # Errors
    ///
    /// Same conditions as [`PartitionEngine::partition`]
    pub fn partition_observed<T, O>(&self, values: &[T], observer: &mut O) -> Result<Partition<T>>
    where
        T: PrimInt + Unsigned,
        O: TableObserver + ?Sized,
    {
        let Some(prepared) = self.prepare(values)? else {
            return Ok(Partition::infeasible(PartitionStatus::InfeasibleOdd));
        };

        let table = build_table(&prepared.weights, prepared.target, observer)?;

        match reconstruct(&table, &prepared.weights, prepared.target) {
            Some(assignment) => Ok(Partition::from_assignment(values, assignment)),
            None => Ok(Partition::infeasible(PartitionStatus::InfeasibleEven)),
        }
    }

    /// Decide feasibility without reconstructing a split
    ///
    /// # Errors
    ///
    /// Same conditions as [`PartitionEngine::partition`]
    pub fn feasibility<T>(&self, values: &[T]) -> Result<PartitionStatus>
    where
        T: PrimInt + Unsigned,
    {
        let Some(prepared) = self.prepare(values)? else {
            return Ok(PartitionStatus::InfeasibleOdd);
        };

        let table = build_table(&prepared.weights, prepared.target, &mut NoopObserver)?;

        if is_reachable(&table, prepared.target) {
            Ok(PartitionStatus::Feasible)
        } else {
            Ok(PartitionStatus::InfeasibleEven)
        }
    }

    // Returns None for an odd total; otherwise validates the table shape
    fn prepare<T>(&self, values: &[T]) -> Result<Option<Prepared>>
    where
        T: PrimInt + Unsigned,
    {
        let total = values
            .iter()
            .try_fold(T::zero(), |acc, &value| acc.checked_add(&value))
            .ok_or(PartitionError::SumOverflow { len: values.len() })?;

        if total & T::one() == T::one() {
            return Ok(None);
        }

        let columns = values.len() + 1;
        let half = total >> 1;
        let target = half
            .to_usize()
            .filter(|&target| target < usize::MAX)
            .ok_or_else(|| allocation_failure(usize::MAX, columns, "target sum exceeds usize"))?;
        let rows = target + 1;

        let required_bytes = BitMatrix::required_bytes(rows, columns)
            .ok_or_else(|| allocation_failure(rows, columns, "byte count overflows usize"))?;
        if let Some(limit) = self.max_table_bytes
            && required_bytes > limit
        {
            return Err(PartitionError::TableLimitExceeded {
                required_bytes,
                limit,
            });
        }

        // Anything wider than usize can never fit under the target
        let weights = values
            .iter()
            .map(|value| value.to_usize().unwrap_or(usize::MAX))
            .collect();

        Ok(Some(Prepared { target, weights }))
    }
}

/// Split `values` with a default engine
///
/// # Errors
///
/// Same conditions as [`PartitionEngine::partition`]
pub fn partition<T>(values: &[T]) -> Result<Partition<T>>
where
    T: PrimInt + Unsigned,
{
    PartitionEngine::new().partition(values)
}
