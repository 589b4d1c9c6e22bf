//! Text display width utilities for fullwidth-aware column sizing

use crate::width::{char_width, WidthTable};

/// Return the display width of a string, counting fullwidth characters as two cells.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Return the display width of a string under the given width table.
pub fn display_width_with(s: &str, table: WidthTable) -> usize {
    s.chars().map(|c| table.char_width(c)).sum()
}
