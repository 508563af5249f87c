//! Human-readable rendering of partition outcomes

use crate::algorithm::partition::{Partition, PartitionStatus};
use std::fmt::Display;

/// Render a set as `{a, b, c}`
pub fn format_set<T: Display>(values: &[T]) -> String {
    let items = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{items}}}")
}

/// Describe a partition outcome, one statement per line
pub fn format_outcome<T: Display>(partition: &Partition<T>) -> String {
    match partition.status {
        PartitionStatus::Feasible => format!(
            "The set can be partitioned\nSet 1: {}\nSet 2: {}",
            format_set(&partition.set1),
            format_set(&partition.set2)
        ),
        PartitionStatus::InfeasibleEven => "The set cannot be partitioned".to_string(),
        PartitionStatus::InfeasibleOdd => {
            "The set cannot be partitioned (sum is odd)".to_string()
        }
    }
}
