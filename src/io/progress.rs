//! Row-level progress display while a reachability table is filled

use crate::algorithm::bitmatrix::BitMatrix;
use crate::algorithm::reachability::TableObserver;
use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_MIN_ROWS};
use indicatif::{ProgressBar, ProgressStyle};

/// Drives an `indicatif` bar from table construction events
///
/// The bar stays hidden when disabled or when the table is too small for
/// progress to be worth drawing.
pub struct TableProgress {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl TableProgress {
    /// Create a progress display, drawing nothing unless `enabled`
    pub const fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Whether a bar is currently being drawn
    pub const fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    fn style() -> ProgressStyle {
        let template = format!(
            "Building table [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows"
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }

    fn start(&mut self, rows: usize) {
        if self.enabled && rows >= PROGRESS_MIN_ROWS {
            let bar = ProgressBar::new(rows as u64);
            bar.set_style(Self::style());
            self.bar = Some(bar);
        }
    }
}

impl TableObserver for TableProgress {
    fn row_completed(&mut self, row: usize, rows: usize) {
        if row == 0 {
            self.start(rows);
        }
        if let Some(ref bar) = self.bar {
            bar.set_position(row as u64 + 1);
        }
    }

    fn table_completed(&mut self, _table: &BitMatrix) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
