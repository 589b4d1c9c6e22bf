//! Cursor writer for real terminals
//!
//! Column moves and text are queued as crossterm commands on any
//! `io::Write`, so the output can go to stdout or be captured in a buffer.

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::style::Print;
use crossterm::QueueableCommand;

use crate::renderer::backend::CursorWriter;

/// Writes labels to a terminal stream using cursor movement
pub struct TerminalWriter<W: Write> {
    out: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Flush queued commands to the underlying stream
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CursorWriter for TerminalWriter<W> {
    type Error = io::Error;

    fn move_to_column(&mut self, column: usize) -> io::Result<()> {
        // Terminal columns are u16; anything wider is off-screen anyway
        let column = u16::try_from(column).unwrap_or(u16::MAX);
        self.out.queue(MoveToColumn(column))?;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn write_newline(&mut self) -> io::Result<()> {
        self.out.queue(Print('\n'))?;
        Ok(())
    }
}
