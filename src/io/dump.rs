//! Plain-text dump of a reachability table for inspection
//!
//! One line per row, cells written as space-separated `0`/`1`. Rows are
//! streamed straight from the packed table, so a dump never holds more than
//! one line of text at a time.

use crate::algorithm::bitmatrix::BitMatrix;
use crate::algorithm::reachability::TableObserver;
use crate::io::error::{PartitionError, Result, WithPath};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Label used in errors for writes to the caller's output stream
pub const OUTPUT_LABEL: &str = "<stdout>";

/// Writes the finished table to an output stream and/or a file
///
/// The dump happens inside [`TableObserver::table_completed`] while the table
/// is still borrowed. Any I/O failure is kept until [`TableDump::finish`].
#[derive(Debug)]
pub struct TableDump<'a, W: Write> {
    print: Option<&'a mut W>,
    save: Option<&'a Path>,
    written: bool,
    error: Option<PartitionError>,
}

impl<'a, W: Write> TableDump<'a, W> {
    /// Dump to `print` (followed by a blank line) and to the file at `save`
    pub const fn new(print: Option<&'a mut W>, save: Option<&'a Path>) -> Self {
        Self {
            print,
            save,
            written: false,
            error: None,
        }
    }

    /// Whether a table has been dumped
    ///
    /// # Errors
    ///
    /// Returns the first failure hit while writing the table
    pub fn finish(self) -> Result<bool> {
        self.error.map_or(Ok(self.written), Err)
    }

    fn dump(&mut self, table: &BitMatrix) -> Result<()> {
        if let Some(out) = self.print.as_deref_mut() {
            let label = Path::new(OUTPUT_LABEL);
            write_table(table, out).with_path(label, "write")?;
            writeln!(out).with_path(label, "write")?;
        }
        if let Some(path) = self.save {
            save_table(table, path)?;
        }
        Ok(())
    }
}

impl<W: Write> TableObserver for TableDump<'_, W> {
    fn table_completed(&mut self, table: &BitMatrix) {
        if self.print.is_none() && self.save.is_none() {
            return;
        }
        match self.dump(table) {
            Ok(()) => self.written = true,
            Err(error) => self.error = Some(error),
        }
    }
}

/// Write `table` as text to any writer
///
/// # Errors
///
/// Propagates write failures from `writer`
pub fn write_table<W: Write + ?Sized>(table: &BitMatrix, writer: &mut W) -> std::io::Result<()> {
    let mut line = String::with_capacity(table.columns().saturating_mul(2));
    for y in 0..table.rows() {
        line.clear();
        for x in 0..table.columns() {
            if x > 0 {
                line.push(' ');
            }
            line.push(if table.get(y, x) { '1' } else { '0' });
        }
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Save `table` to `path`, replacing any existing file
///
/// # Errors
///
/// Returns a file system error if the file cannot be created or written
pub fn save_table(table: &BitMatrix, path: &Path) -> Result<()> {
    let file = File::create(path).with_path(path, "create")?;
    let mut writer = BufWriter::new(file);
    write_table(table, &mut writer).with_path(path, "write")?;
    writer.flush().with_path(path, "flush")
}
