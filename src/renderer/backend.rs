//! Output writer trait for abstracting cursor-positioned text output

/// Trait for output targets that can place text at a column on the current line
pub trait CursorWriter {
    /// Error raised by the underlying output
    type Error;

    /// Move the cursor to an absolute column on the current line
    fn move_to_column(&mut self, column: usize) -> Result<(), Self::Error>;

    /// Write text at the cursor, advancing it; never starts a new line
    fn write_text(&mut self, text: &str) -> Result<(), Self::Error>;

    /// End the current line and return the cursor to column 0
    fn write_newline(&mut self) -> Result<(), Self::Error>;
}
