//! Runtime configuration defaults and process exit codes

// Safety limit to prevent runaway table allocation from a single command
/// Default ceiling on the packed reachability table, in bytes (1 GiB)
pub const DEFAULT_MAX_TABLE_BYTES: usize = 1 << 30;

/// Tables with fewer rows than this finish too quickly to warrant a progress bar
pub const PROGRESS_MIN_ROWS: usize = 4096;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Sum of 0..n is n(n-1)/2, which is even only when n % 4 is 0 or 1
/// Benchmark sequence lengths must be a multiple of this
pub const BENCHMARK_MULTIPLE: usize = 4;

/// Exit code for missing or malformed command-line usage
pub const USAGE_EXIT_CODE: u8 = 1;
/// Exit code when a positional argument is not an integer (EINVAL)
pub const PARSE_ERROR_EXIT_CODE: u8 = 22;
/// Exit code when a positional argument overflows the integer type (ERANGE)
pub const RANGE_ERROR_EXIT_CODE: u8 = 34;
/// Exit code for failures after arguments were accepted
pub const RUNTIME_ERROR_EXIT_CODE: u8 = 1;
