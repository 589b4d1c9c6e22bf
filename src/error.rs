use std::fmt;

/// Errors that can occur while laying out or parsing a label list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Terminal width must be at least one cell
    InvalidTerminalWidth(usize),
    /// Parse error at specific line of a text label list
    ParseError {
        line: usize,
        message: String,
        suggestion: Option<String>,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidTerminalWidth(width) => {
                write!(f, "Invalid terminal width: {} (must be at least 1)", width)
            }
            LayoutError::ParseError {
                line,
                message,
                suggestion,
            } => {
                write!(f, "Line {}: {}", line, message)?;
                if let Some(sug) = suggestion {
                    write!(f, " (Suggestion: {})", sug)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Errors from writing a list through an output writer
///
/// Writer failures are carried as-is; there is no fallback target to retry on.
#[derive(Debug)]
pub enum WriteError<E> {
    /// The list could not be laid out
    Layout(LayoutError),
    /// The output writer failed
    Output(E),
}

impl<E> From<LayoutError> for WriteError<E> {
    fn from(err: LayoutError) -> Self {
        WriteError::Layout(err)
    }
}

impl<E: fmt::Display> fmt::Display for WriteError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::Layout(err) => write!(f, "{}", err),
            WriteError::Output(err) => write!(f, "Output error: {}", err),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for WriteError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Layout(err) => Some(err),
            WriteError::Output(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_error_with_suggestion() {
        let err = LayoutError::ParseError {
            line: 3,
            message: "Unterminated quoted label".to_string(),
            suggestion: Some("Close the label with '\"'".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Line 3: Unterminated quoted label (Suggestion: Close the label with '\"')"
        );
    }

    #[test]
    fn test_display_invalid_width() {
        let err = LayoutError::InvalidTerminalWidth(0);
        assert!(err.to_string().contains("terminal width: 0"));
    }

    #[test]
    fn test_write_error_source() {
        use std::error::Error;
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: WriteError<std::io::Error> = WriteError::Output(io);
        assert!(err.to_string().starts_with("Output error"));
        assert!(err.source().is_some());
    }
}
