//! colgrid - ls-style column listing for terminals with fullwidth character support
//!
//! Labels are packed into as many columns as fit the terminal width. Widths
//! are measured in terminal cells, so kana, kanji and fullwidth Latin
//! letters count as two cells and the columns still line up.
//!
//! # Render to a string
//! ```
//! use colgrid::{render_list, ListOptions};
//!
//! let options = ListOptions {
//!     terminal_width: Some(20),
//!     ..Default::default()
//! };
//! let result = render_list(&["あ", "b", "cc", "ＡＢ"], options).unwrap();
//! assert_eq!(result.output, "あ  b  cc  ＡＢ\n");
//! ```
//!
//! # Inspect the layout
//! ```
//! use colgrid::{layout_labels, LabelSet, ListOptions, WidthTable};
//!
//! let labels = LabelSet::new(["ab", "cd", "ef"], WidthTable::Japanese);
//! let options = ListOptions {
//!     terminal_width: Some(5),
//!     ..Default::default()
//! };
//! let layout = layout_labels(&labels, &options).unwrap();
//! assert_eq!(layout.column_count(), 1);
//! assert_eq!(layout.grid().row_count(), 3);
//! ```
//!
//! # Parse a text list
//! ```
//! use colgrid::{render_list_from_text, ListOptions};
//!
//! let input = "%% files\nメモ.txt\n\"spaced name\"\nsrc";
//! let options = ListOptions {
//!     terminal_width: Some(80),
//!     ..Default::default()
//! };
//! let result = render_list_from_text(input, options).unwrap();
//! println!("{}", result);
//! ```
//!
//! # Write to a terminal
//! ```no_run
//! use colgrid::{print_list, ListOptions};
//!
//! // Width comes from COLUMNS or the attached terminal
//! let warnings = print_list(&["一", "二", "三"], &ListOptions::default()).unwrap();
//! for warning in warnings {
//!     eprintln!("{}", warning);
//! }
//! ```

mod error;
mod layout;
mod parser;
mod renderer;
mod text;
mod types;
mod width;

use std::io::{self, IsTerminal, Write};

pub use error::{LayoutError, WriteError};
pub use layout::{compute_layout, ColumnWidths, Grid, ListLayout};
pub use parser::parse_labels;
pub use renderer::ansi::TerminalWriter;
pub use renderer::backend::CursorWriter;
pub use renderer::render_layout;
pub use renderer::screen::Screen;
pub use text::{display_width, display_width_with};
pub use types::{
    Label, LabelSet, ListOptions, RenderResult, DEFAULT_MARGIN, FALLBACK_TERMINAL_WIDTH,
};
pub use width::{
    char_width, is_fullwidth, is_fullwidth_digit, is_fullwidth_katakana,
    is_fullwidth_lower_latin, is_fullwidth_upper_latin, is_hiragana, is_kanji, WidthTable,
};

use renderer::collect_warnings;

/// Lay out measured labels, resolving the terminal width once from `options`
pub fn layout_labels<'a>(
    labels: &'a LabelSet,
    options: &ListOptions,
) -> Result<ListLayout<'a>, LayoutError> {
    let terminal_width = options.resolve_terminal_width()?;
    tracing::debug!(terminal_width, "terminal width resolved");
    compute_layout(labels, terminal_width, options.margin)
}

/// Render labels as a column listing
///
/// # Arguments
/// * `labels` - Labels in display order
/// * `options` - Terminal width, margin and width table
///
/// # Returns
/// * `Ok(RenderResult)` - One newline-terminated line per row, plus warnings
///   for labels wider than the terminal
/// * `Err(LayoutError)` - Invalid terminal width
pub fn render_list<S: AsRef<str>>(
    labels: &[S],
    options: ListOptions,
) -> Result<RenderResult, LayoutError> {
    let set = LabelSet::new(labels.iter().map(|s| s.as_ref()), options.width_table);
    let layout = layout_labels(&set, &options)?;

    let mut screen = Screen::new(options.width_table);
    match render_layout(&layout, &mut screen) {
        Ok(()) => {}
        Err(never) => match never {},
    }

    let mut warnings = Vec::new();
    collect_warnings(&layout, &mut warnings);
    Ok(RenderResult {
        output: screen.to_string(),
        warnings,
    })
}

/// Parse a text label list and render it as a column listing
///
/// # Arguments
/// * `input` - One label per line; see [`parse_labels`]
/// * `options` - Terminal width, margin and width table
///
/// # Returns
/// * `Ok(RenderResult)` - Rendered listing plus warnings
/// * `Err(LayoutError)` - Parse error or invalid terminal width
pub fn render_list_from_text(
    input: &str,
    options: ListOptions,
) -> Result<RenderResult, LayoutError> {
    let labels = parse_labels(input)?;
    render_list(&labels, options)
}

/// Write labels through any cursor writer, returning layout warnings
pub fn write_list<S, W>(
    labels: &[S],
    options: &ListOptions,
    out: &mut W,
) -> Result<Vec<String>, WriteError<W::Error>>
where
    S: AsRef<str>,
    W: CursorWriter,
{
    let set = LabelSet::new(labels.iter().map(|s| s.as_ref()), options.width_table);
    let layout = layout_labels(&set, options)?;
    render_layout(&layout, out).map_err(WriteError::Output)?;

    let mut warnings = Vec::new();
    collect_warnings(&layout, &mut warnings);
    Ok(warnings)
}

/// Write labels to stdout, returning layout warnings
///
/// Cursor-movement escapes are only used when stdout is a terminal. When it
/// is redirected to a pipe or file, rows are padded with spaces instead.
pub fn print_list<S: AsRef<str>>(
    labels: &[S],
    options: &ListOptions,
) -> Result<Vec<String>, WriteError<io::Error>> {
    let stdout = io::stdout();
    let cursor_moves = stdout.is_terminal();
    stream_list(labels, options, stdout.lock(), cursor_moves)
}

fn stream_list<S, W>(
    labels: &[S],
    options: &ListOptions,
    mut out: W,
    cursor_moves: bool,
) -> Result<Vec<String>, WriteError<io::Error>>
where
    S: AsRef<str>,
    W: Write,
{
    if cursor_moves {
        let mut writer = TerminalWriter::new(out);
        let warnings = write_list(labels, options, &mut writer)?;
        writer.flush().map_err(WriteError::Output)?;
        return Ok(warnings);
    }

    let result = render_list(labels, options.clone())?;
    out.write_all(result.output.as_bytes()).map_err(WriteError::Output)?;
    out.flush().map_err(WriteError::Output)?;
    Ok(result.warnings)
}
