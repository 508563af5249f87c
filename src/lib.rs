//! Equal-sum two-way partitioning of unsigned integers
//!
//! Builds a bit-packed subset-sum reachability table over the input and, when
//! half of the total is reachable, walks the table back to recover one split.
//! Time and memory both grow as O(n·S) for n elements summing to S.

#![forbid(unsafe_code)]

/// Bit matrix, reachability table and partition engine
pub mod algorithm;
/// Command-line surface, diagnostics and error handling
pub mod io;

pub use algorithm::bitmatrix::BitMatrix;
pub use algorithm::partition::{Partition, PartitionEngine, PartitionStatus, Side, partition};
pub use io::error::{PartitionError, Result};
