//! Command-line interface for partitioning integers given as arguments

use crate::algorithm::partition::PartitionEngine;
use crate::io::benchmark::run_benchmark;
use crate::io::configuration::{
    DEFAULT_MAX_TABLE_BYTES, PARSE_ERROR_EXIT_CODE, RANGE_ERROR_EXIT_CODE, USAGE_EXIT_CODE,
};
use crate::io::dump::{OUTPUT_LABEL, TableDump};
use crate::io::error::{Result, WithPath};
use crate::io::progress::TableProgress;
use crate::io::report::format_outcome;
use clap::Parser;
use clap::error::ErrorKind;
use std::error::Error as _;
use std::io::Write;
use std::num::{IntErrorKind, ParseIntError};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "bitpartition")]
#[command(
    author,
    version,
    about = "Split a list of integers into two sets of equal sum",
    arg_required_else_help = true
)]
/// Command-line arguments for the partitioning tool
pub struct Cli {
    /// Non-negative integers to partition
    #[arg(
        value_name = "N",
        required_unless_present = "benchmark",
        conflicts_with = "benchmark",
        allow_negative_numbers = true
    )]
    pub values: Vec<u64>,

    /// Save the reachability table to FILENAME
    #[arg(short, long, value_name = "FILENAME")]
    pub save: Option<PathBuf>,

    /// Print the reachability table before the result
    #[arg(short = 't', long)]
    pub print_table: bool,

    /// Suppress progress and status messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Refuse reachability tables larger than this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_TABLE_BYTES)]
    pub max_table_bytes: usize,

    /// Time partitioning of 0..N instead of reading values (N must be a multiple of 4)
    #[arg(short, long, value_name = "N")]
    pub benchmark: Option<usize>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Map a clap parse failure to the process exit code
///
/// Integers too large for their argument exit with [`RANGE_ERROR_EXIT_CODE`],
/// any other malformed value with [`PARSE_ERROR_EXIT_CODE`]. Help and version
/// requests succeed; every other usage problem exits with [`USAGE_EXIT_CODE`].
pub fn exit_code_for(error: &clap::Error) -> u8 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        ErrorKind::InvalidValue | ErrorKind::ValueValidation if is_out_of_range(error) => {
            RANGE_ERROR_EXIT_CODE
        }
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => PARSE_ERROR_EXIT_CODE,
        _ => USAGE_EXIT_CODE,
    }
}

fn is_out_of_range(error: &clap::Error) -> bool {
    error
        .source()
        .and_then(|source| source.downcast_ref::<ParseIntError>())
        .is_some_and(|parse_error| {
            matches!(
                parse_error.kind(),
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
            )
        })
}

/// Runs one partition (or benchmark) according to CLI arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Engine configured from the CLI arguments
    pub const fn engine(&self) -> PartitionEngine {
        PartitionEngine::new().with_table_limit(self.cli.max_table_bytes)
    }

    /// Run and write results to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be built or output cannot be written
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.run_with(&mut lock)
    }

    /// Run and write results to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be built, saved, or written
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(elements) = self.cli.benchmark {
            return self.benchmark(elements, out);
        }

        let engine = self.engine();
        let print = self.cli.print_table.then_some(&mut *out);
        let mut observer = (
            TableProgress::new(self.cli.should_show_progress()),
            TableDump::new(print, self.cli.save.as_deref()),
        );
        let partition = engine.partition_observed(&self.cli.values, &mut observer)?;
        let dumped = observer.1.finish()?;

        // Odd sums never build a table, so there may be nothing saved
        if dumped
            && !self.cli.quiet
            && let Some(path) = &self.cli.save
        {
            emit(out, &format!("Saved table to {}", path.display()))?;
        }

        emit(out, &format_outcome(&partition))
    }

    fn benchmark<W: Write>(&self, elements: usize, out: &mut W) -> Result<()> {
        let run = run_benchmark(&self.engine(), elements)?;
        emit(out, &format!("{:.6}", run.micros()))
    }
}

fn emit<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{line}").with_path(Path::new(OUTPUT_LABEL), "write")
}
