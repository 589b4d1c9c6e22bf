//! Label list parser
//!
//! One label per line. Surrounding whitespace is trimmed, blank lines and
//! `%%` comment lines are skipped. A line starting with `"` is a quoted
//! label, which keeps inner whitespace and understands `\"` and `\\`.

use winnow::ascii::space0;
use winnow::combinator::{alt, delimited, preceded, repeat, terminated};
use winnow::token::{any, none_of};
use winnow::ModalResult;
use winnow::Parser;

use crate::error::LayoutError;

/// Content of a single line (after trimming)
#[derive(Debug, PartialEq, Eq)]
enum ListLine {
    Label(String),
    Skip,
}

// ===== Winnow parsers =====

/// Parse a quoted label: "..." with backslash escapes
fn w_quoted(input: &mut &str) -> ModalResult<String> {
    delimited(
        '"',
        repeat(0.., alt((preceded('\\', any), none_of(['"', '\\'])))),
        '"',
    )
    .parse_next(input)
}

/// Parse a quoted label followed only by whitespace
fn w_quoted_line(input: &mut &str) -> ModalResult<String> {
    terminated(w_quoted, space0).parse_next(input)
}

// ===== Line classification =====

fn classify_line(line: &str, line_num: usize) -> Result<ListLine, LayoutError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with("%%") {
        return Ok(ListLine::Skip);
    }
    if !trimmed.starts_with('"') {
        return Ok(ListLine::Label(trimmed.to_string()));
    }

    let mut input = trimmed;
    match w_quoted_line(&mut input) {
        Ok(label) if input.is_empty() => Ok(ListLine::Label(label)),
        Ok(_) => Err(LayoutError::ParseError {
            line: line_num,
            message: format!("Unexpected text after quoted label: '{}'", input),
            suggestion: Some("Put each label on its own line".to_string()),
        }),
        Err(_) => Err(LayoutError::ParseError {
            line: line_num,
            message: "Unterminated quoted label".to_string(),
            suggestion: Some(
                "Close the label with '\"' or escape inner quotes as \\\"".to_string(),
            ),
        }),
    }
}

// ===== Main parse function =====

/// Parse a text label list into labels in display order
pub fn parse_labels(input: &str) -> Result<Vec<String>, LayoutError> {
    let mut labels = Vec::new();
    for (i, line) in input.lines().enumerate() {
        if let ListLine::Label(label) = classify_line(line, i + 1)? {
            labels.push(label);
        }
    }
    Ok(labels)
}
