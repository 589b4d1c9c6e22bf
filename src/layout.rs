//! Column-count discovery and row-major grid construction
//!
//! Finding the column count happens in two steps. The estimate fits rows
//! one at a time against a shrinking bound, restarting from the first label
//! whenever a row overflows. The finalize step then checks the estimate
//! against per-column maximum widths, which a row-by-row fit cannot see, and
//! drops columns until the whole grid fits.

use crate::error::LayoutError;
use crate::types::{Label, LabelSet};

/// Result of fitting one row starting at a given label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowFit {
    /// Labels placed in the row, at least one unless no labels remain
    pub count: usize,
    /// The row stopped because the next label would pass the terminal edge
    pub overflowed: bool,
}

/// Fit as many labels from `start` as the bound and terminal width allow.
///
/// A label fits when the running sum of `width + margin` including it is at
/// most `terminal_width`. The first label of a row is always placed, even
/// when it alone is too wide.
pub(crate) fn fit_row(
    widths: &[usize],
    start: usize,
    bound: usize,
    terminal_width: usize,
    margin: usize,
) -> RowFit {
    let mut running: usize = 0;
    let mut count = 0;

    for &width in widths.iter().skip(start) {
        if count == bound {
            break;
        }
        let next = running.saturating_add(width).saturating_add(margin);
        if next > terminal_width && count > 0 {
            return RowFit {
                count,
                overflowed: true,
            };
        }
        running = next;
        count += 1;
    }

    RowFit {
        count,
        overflowed: false,
    }
}

/// Estimate the column count by fitting rows against a shrinking bound
pub(crate) fn estimate_column_count(
    widths: &[usize],
    terminal_width: usize,
    margin: usize,
) -> usize {
    if widths.is_empty() {
        return 0;
    }

    let mut bound = terminal_width.min(widths.len()).max(1);
    'pass: loop {
        let mut start = 0;
        while start < widths.len() {
            let fit = fit_row(widths, start, bound, terminal_width, margin);
            if fit.overflowed && fit.count < bound {
                tracing::trace!(
                    row_start = start,
                    from = bound,
                    to = fit.count,
                    "column bound shrunk"
                );
                bound = fit.count;
                continue 'pass;
            }
            start += fit.count;
        }
        return bound;
    }
}

/// Drop columns until the per-column maxima fit in the terminal
pub(crate) fn finalize_column_count(
    widths: &[usize],
    estimate: usize,
    terminal_width: usize,
    margin: usize,
) -> usize {
    let mut column_count = estimate;
    while column_count > 1 {
        let total = ColumnWidths::measure(widths, column_count, margin).total();
        if total <= terminal_width {
            break;
        }
        tracing::trace!(
            column_count,
            total,
            terminal_width,
            "grid too wide, dropping a column"
        );
        column_count -= 1;
    }
    column_count
}

/// Cumulative column start offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWidths {
    max_widths: Vec<usize>,
    /// `column_count + 1` entries; the last is the full row extent
    offsets: Vec<usize>,
}

impl ColumnWidths {
    pub(crate) fn measure(widths: &[usize], column_count: usize, margin: usize) -> Self {
        let mut max_widths = vec![0; column_count];
        if column_count > 0 {
            for (i, &width) in widths.iter().enumerate() {
                let col = i % column_count;
                max_widths[col] = max_widths[col].max(width);
            }
        }

        let mut offsets = Vec::with_capacity(column_count + 1);
        offsets.push(0);
        for &max in &max_widths {
            let last: usize = offsets.last().copied().unwrap_or(0);
            offsets.push(last.saturating_add(max).saturating_add(margin));
        }

        Self {
            max_widths,
            offsets,
        }
    }

    /// Start offset of every column followed by the total row extent
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Cursor column at which each column starts
    pub fn starts(&self) -> &[usize] {
        &self.offsets[..self.max_widths.len()]
    }

    /// Widest label in each column
    pub fn max_widths(&self) -> &[usize] {
        &self.max_widths
    }

    /// Cells spanned by a full row, trailing margin included
    pub fn total(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }
}

/// Row-major grid of label references
///
/// Cells past the end of the list in the last row are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<'a> {
    rows: Vec<Vec<Option<&'a Label>>>,
    column_count: usize,
}

impl<'a> Grid<'a> {
    fn build(labels: &'a LabelSet, column_count: usize) -> Self {
        if column_count == 0 {
            return Self {
                rows: Vec::new(),
                column_count,
            };
        }

        let row_count = labels.len().div_ceil(column_count);
        let rows = (0..row_count)
            .map(|r| {
                (0..column_count)
                    .map(|c| labels.get(r * column_count + c))
                    .collect()
            })
            .collect();

        Self { rows, column_count }
    }

    pub fn rows(&self) -> &[Vec<Option<&'a Label>>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Label at (row, col), `None` for empty or out-of-range cells
    pub fn cell(&self, row: usize, col: usize) -> Option<&'a Label> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Occupied cells in reading order
    pub fn labels(&self) -> impl Iterator<Item = &'a Label> + '_ {
        self.rows.iter().flatten().filter_map(|cell| *cell)
    }
}

/// A finished layout: the grid and where each column starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLayout<'a> {
    grid: Grid<'a>,
    columns: ColumnWidths,
    terminal_width: usize,
    margin: usize,
}

impl<'a> ListLayout<'a> {
    pub fn grid(&self) -> &Grid<'a> {
        &self.grid
    }

    pub fn columns(&self) -> &ColumnWidths {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }

    pub fn terminal_width(&self) -> usize {
        self.terminal_width
    }

    pub fn margin(&self) -> usize {
        self.margin
    }

    /// Labels too wide to fit on a line even by themselves
    pub fn oversized_labels(&self) -> Vec<&'a Label> {
        self.grid
            .labels()
            .filter(|label| label.width().saturating_add(self.margin) > self.terminal_width)
            .collect()
    }
}

/// Compute the column layout for `labels` on a terminal `terminal_width` cells wide
pub fn compute_layout(
    labels: &LabelSet,
    terminal_width: usize,
    margin: usize,
) -> Result<ListLayout<'_>, LayoutError> {
    if terminal_width == 0 {
        return Err(LayoutError::InvalidTerminalWidth(terminal_width));
    }

    let widths = labels.widths();
    let estimate = estimate_column_count(&widths, terminal_width, margin);
    let column_count = finalize_column_count(&widths, estimate, terminal_width, margin);
    tracing::debug!(
        labels = labels.len(),
        terminal_width,
        margin,
        estimate,
        column_count,
        "column layout computed"
    );

    let grid = Grid::build(labels, column_count);
    let columns = ColumnWidths::measure(&widths, column_count, margin);

    Ok(ListLayout {
        grid,
        columns,
        terminal_width,
        margin,
    })
}
