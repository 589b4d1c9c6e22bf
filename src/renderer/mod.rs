//! Renderer module for writing a column layout to an output

pub mod ansi;
pub mod backend;
pub mod screen;

use crate::layout::ListLayout;

use backend::CursorWriter;

/// Write a layout row by row, left to right.
///
/// Each label is placed with an absolute column move followed by its text.
/// Empty cells in the last row produce no output at all.
pub fn render_layout<W: CursorWriter>(
    layout: &ListLayout<'_>,
    out: &mut W,
) -> Result<(), W::Error> {
    let starts = layout.columns().starts();
    for row in layout.grid().rows() {
        for (col, cell) in row.iter().enumerate() {
            if let Some(label) = cell {
                out.move_to_column(starts[col])?;
                out.write_text(label.text())?;
            }
        }
        out.write_newline()?;
    }
    Ok(())
}

/// Describe labels that are too wide for the terminal
pub fn collect_warnings(layout: &ListLayout<'_>, warnings: &mut Vec<String>) {
    for label in layout.oversized_labels() {
        tracing::warn!(
            label = label.text(),
            width = label.width(),
            terminal_width = layout.terminal_width(),
            "label wider than terminal"
        );
        warnings.push(format!(
            "Label '{}' is {} cells wide and overflows the {}-cell terminal",
            label.text(),
            label.width(),
            layout.terminal_width()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::types::LabelSet;
    use crate::width::WidthTable;

    #[derive(Debug, PartialEq, Eq)]
    enum Op {
        Move(usize),
        Text(String),
        Newline,
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl CursorWriter for Recorder {
        type Error = ();

        fn move_to_column(&mut self, column: usize) -> Result<(), ()> {
            self.ops.push(Op::Move(column));
            Ok(())
        }

        fn write_text(&mut self, text: &str) -> Result<(), ()> {
            self.ops.push(Op::Text(text.to_string()));
            Ok(())
        }

        fn write_newline(&mut self) -> Result<(), ()> {
            self.ops.push(Op::Newline);
            Ok(())
        }
    }

    fn record(items: &[&str], width: usize, margin: usize) -> Vec<Op> {
        let set = LabelSet::new(items.iter().copied(), WidthTable::Japanese);
        let layout = compute_layout(&set, width, margin).unwrap();
        let mut recorder = Recorder::default();
        render_layout(&layout, &mut recorder).unwrap();
        recorder.ops
    }

    #[test]
    fn test_render_single_row() {
        let ops = record(&["あ", "b", "cc", "ＡＢ"], 20, 2);
        assert_eq!(
            ops,
            vec![
                Op::Move(0),
                Op::Text("あ".to_string()),
                Op::Move(4),
                Op::Text("b".to_string()),
                Op::Move(7),
                Op::Text("cc".to_string()),
                Op::Move(11),
                Op::Text("ＡＢ".to_string()),
                Op::Newline,
            ]
        );
    }

    #[test]
    fn test_render_skips_empty_cells() {
        // Two columns, second row has one label
        let ops = record(&["aa", "bb", "cc"], 8, 2);
        assert_eq!(
            ops,
            vec![
                Op::Move(0),
                Op::Text("aa".to_string()),
                Op::Move(4),
                Op::Text("bb".to_string()),
                Op::Newline,
                Op::Move(0),
                Op::Text("cc".to_string()),
                Op::Newline,
            ]
        );
    }

    #[test]
    fn test_render_empty_list_writes_nothing() {
        assert!(record(&[], 80, 2).is_empty());
    }

    struct Failing {
        calls: usize,
    }

    impl CursorWriter for Failing {
        type Error = &'static str;

        fn move_to_column(&mut self, _column: usize) -> Result<(), Self::Error> {
            self.calls += 1;
            Ok(())
        }

        fn write_text(&mut self, _text: &str) -> Result<(), Self::Error> {
            self.calls += 1;
            Err("stream closed")
        }

        fn write_newline(&mut self) -> Result<(), Self::Error> {
            self.calls += 1;
            Ok(())
        }
    }

    #[test]
    fn test_render_stops_on_writer_error() {
        let set = LabelSet::new(["a", "b"], WidthTable::Japanese);
        let layout = compute_layout(&set, 80, 2).unwrap();
        let mut out = Failing { calls: 0 };
        assert_eq!(render_layout(&layout, &mut out), Err("stream closed"));
        assert_eq!(out.calls, 2);
    }

    #[test]
    fn test_warnings_for_oversized_labels() {
        let set = LabelSet::new(["ok", "とても長いラベル"], WidthTable::Japanese);
        let layout = compute_layout(&set, 10, 2).unwrap();
        let mut warnings = Vec::new();
        collect_warnings(&layout, &mut warnings);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("とても長いラベル"));
        assert!(warnings[0].contains("16 cells"));
    }
}
