/// Bit-packed boolean grid backing the reachability table
pub mod bitmatrix;
/// Partition engine, result and status types
pub mod partition;
/// Reachability table construction and split reconstruction
pub mod reachability;
