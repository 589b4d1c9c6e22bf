use std::fmt;

use crate::error::LayoutError;
use crate::text::display_width_with;
use crate::width::WidthTable;

/// Spacing inserted after each column
pub const DEFAULT_MARGIN: usize = 2;

/// Width used when no override, `COLUMNS`, or attached terminal is available
pub const FALLBACK_TERMINAL_WIDTH: usize = 80;

/// A single display label with its measured width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
    width: usize,
}

impl Label {
    /// Create a label, measuring it with the given width table
    pub fn new(text: impl Into<String>, table: WidthTable) -> Self {
        let text = text.into();
        let width = display_width_with(&text, table);
        Self { text, width }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display width in terminal cells
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Ordered labels in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<Label>,
}

impl LabelSet {
    /// Measure every item with the given width table
    pub fn new<I, S>(items: I, table: WidthTable) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: items.into_iter().map(|s| Label::new(s, table)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Label> {
        self.labels.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.labels.iter()
    }

    /// Display widths in label order
    pub fn widths(&self) -> Vec<usize> {
        self.labels.iter().map(Label::width).collect()
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

/// Options for laying out a label list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Terminal width in cells; detected when `None`
    pub terminal_width: Option<usize>,
    /// Cells of spacing after each column
    pub margin: usize,
    /// Width table used to measure labels
    pub width_table: WidthTable,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            terminal_width: None,
            margin: DEFAULT_MARGIN,
            width_table: WidthTable::default(),
        }
    }
}

impl ListOptions {
    /// Snapshot the terminal width for one layout call.
    ///
    /// An explicit override wins, then `COLUMNS`, then the attached
    /// terminal's size, then [`FALLBACK_TERMINAL_WIDTH`].
    pub fn resolve_terminal_width(&self) -> Result<usize, LayoutError> {
        match self.terminal_width {
            Some(0) => Err(LayoutError::InvalidTerminalWidth(0)),
            Some(width) => Ok(width),
            None => Ok(detect_terminal_width()),
        }
    }
}

fn detect_terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
        .or_else(|| {
            crossterm::terminal::size()
                .ok()
                .map(|(w, _h)| usize::from(w))
                .filter(|w| *w > 0)
        })
        .unwrap_or(FALLBACK_TERMINAL_WIDTH)
}

/// Rendered list plus any layout warnings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderResult {
    pub output: String,
    pub warnings: Vec<String>,
}

impl fmt::Display for RenderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_measures_on_creation() {
        let label = Label::new("日本ｊａ", WidthTable::Japanese);
        assert_eq!(label.text(), "日本ｊａ");
        assert_eq!(label.width(), 8);
    }

    #[test]
    fn test_label_set_keeps_order() {
        let set = LabelSet::new(["b", "あ", ""], WidthTable::Japanese);
        assert_eq!(set.len(), 3);
        let texts: Vec<&str> = set.iter().map(Label::text).collect();
        assert_eq!(texts, vec!["b", "あ", ""]);
        assert_eq!(set.widths(), vec![1, 2, 0]);
    }

    #[test]
    fn test_default_options() {
        let opts = ListOptions::default();
        assert_eq!(opts.margin, 2);
        assert_eq!(opts.terminal_width, None);
        assert_eq!(opts.width_table, WidthTable::Japanese);
    }

    #[test]
    fn test_explicit_width_wins() {
        let opts = ListOptions {
            terminal_width: Some(33),
            ..Default::default()
        };
        assert_eq!(opts.resolve_terminal_width(), Ok(33));
    }

    #[test]
    fn test_zero_width_rejected() {
        let opts = ListOptions {
            terminal_width: Some(0),
            ..Default::default()
        };
        assert_eq!(
            opts.resolve_terminal_width(),
            Err(LayoutError::InvalidTerminalWidth(0))
        );
    }

    #[test]
    fn test_detected_width_is_positive() {
        let width = ListOptions::default().resolve_terminal_width().unwrap();
        assert!(width > 0);
    }
}
