/// Benchmark mode over generated sequences
pub mod benchmark;
/// Command-line parsing and orchestration
pub mod cli;
/// Constants, defaults and exit codes
pub mod configuration;
/// Textual dump of the reachability table
pub mod dump;
/// Error types and context helpers
pub mod error;
/// Progress display for table construction
pub mod progress;
/// Human-readable partition reports
pub mod report;
