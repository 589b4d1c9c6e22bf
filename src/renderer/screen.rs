use std::convert::Infallible;
use std::fmt;

use crate::renderer::backend::CursorWriter;
use crate::width::WidthTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScreenCell {
    Blank,
    Glyph(char),
    /// Right half of a fullwidth glyph
    WideTail,
}

/// In-memory terminal buffer for rendering
///
/// Fullwidth characters take two cells, so text written at a column lines up
/// the same way it would on a real terminal.
#[derive(Debug, Clone)]
pub struct Screen {
    lines: Vec<Vec<ScreenCell>>,
    cursor: usize,
    width_table: WidthTable,
}

impl Screen {
    /// Create an empty screen measuring characters with `width_table`
    pub fn new(width_table: WidthTable) -> Self {
        Self {
            lines: vec![Vec::new()],
            cursor: 0,
            width_table,
        }
    }

    /// Current cursor column
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Rendered lines with trailing blanks trimmed, including an unfinished last line
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.lines.iter().map(|l| render_line(l)).collect();
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    fn put(&mut self, c: char) {
        let width = self.width_table.char_width(c);
        let start = self.cursor;
        let line = self.current_line();
        if line.len() < start + width {
            line.resize(start + width, ScreenCell::Blank);
        }

        for pos in start..start + width {
            clear_cell(line, pos);
        }
        line[start] = ScreenCell::Glyph(c);
        if width == 2 {
            line[start + 1] = ScreenCell::WideTail;
        }
        self.cursor = start + width;
    }

    fn current_line(&mut self) -> &mut Vec<ScreenCell> {
        if self.lines.is_empty() {
            self.lines.push(Vec::new());
        }
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(WidthTable::default())
    }
}

/// Blank a cell, also blanking the other half of any wide glyph it belonged to
fn clear_cell(line: &mut [ScreenCell], pos: usize) {
    match line[pos] {
        ScreenCell::WideTail if pos > 0 => line[pos - 1] = ScreenCell::Blank,
        ScreenCell::Glyph(_) if line.get(pos + 1) == Some(&ScreenCell::WideTail) => {
            line[pos + 1] = ScreenCell::Blank
        }
        _ => {}
    }
    line[pos] = ScreenCell::Blank;
}

fn render_line(cells: &[ScreenCell]) -> String {
    let line: String = cells
        .iter()
        .filter_map(|cell| match cell {
            ScreenCell::Blank => Some(' '),
            ScreenCell::Glyph(c) => Some(*c),
            ScreenCell::WideTail => None,
        })
        .collect();
    line.trim_end().to_string()
}

impl CursorWriter for Screen {
    type Error = Infallible;

    fn move_to_column(&mut self, column: usize) -> Result<(), Self::Error> {
        self.cursor = column;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        for c in text.chars() {
            self.put(c);
        }
        Ok(())
    }

    fn write_newline(&mut self) -> Result<(), Self::Error> {
        self.lines.push(Vec::new());
        self.cursor = 0;
        Ok(())
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (current, finished) = match self.lines.split_last() {
            Some(split) => split,
            None => return Ok(()),
        };
        for line in finished {
            writeln!(f, "{}", render_line(line))?;
        }
        let tail = render_line(current);
        if !tail.is_empty() {
            write!(f, "{}", tail)?;
        }
        Ok(())
    }
}
