//! Grid rendering
//!
//! Layout, top to bottom: junction line, header line, junction line, one
//! line per row, junction line. Every cell gets one space of padding on each
//! side. Field names are centered; cell values are right-aligned.

use crate::format::format_rows;
use crate::width::{column_widths, display_width};
use rowtext_domain::{RenderOptions, Table, WidthMode};
use tracing::debug;

/// Line separator used between every line of the grid
pub const LINE_SEPARATOR: char = '\n';

/// Renders a table as a bordered text grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridRenderer {
    options: RenderOptions,
}

impl GridRenderer {
    /// Create a renderer with the given options
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Options this renderer draws with
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the whole table
    ///
    /// Pure and total: the same table always yields the same text, and no
    /// well-formed table fails to render.
    pub fn render(&self, table: &Table) -> String {
        let headers: Vec<&str> = table.fields().collect();
        let rows = format_rows(table);
        let widths = column_widths(&headers, &rows, self.options.width_mode);
        debug!(columns = widths.len(), rows = rows.len(), ?widths, "computed column widths");

        let separator = self.junction_line(&widths);
        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(separator.clone());
        lines.push(self.content_line(&headers, &widths, Align::Center));
        lines.push(separator.clone());
        for row in &rows {
            lines.push(self.content_line(row, &widths, Align::Right));
        }
        lines.push(separator);

        let mut grid = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                grid.push(LINE_SEPARATOR);
            }
            grid.push_str(line);
        }
        grid
    }

    /// `+----+------+` style line for the given column widths
    pub fn junction_line(&self, widths: &[usize]) -> String {
        let glyphs = &self.options.glyphs;
        let mut line = String::new();
        line.push(glyphs.junction);
        for &width in widths {
            line.extend(std::iter::repeat(glyphs.horizontal).take(width + 2));
            line.push(glyphs.junction);
        }
        line
    }

    fn content_line<C: AsRef<str>>(&self, cells: &[C], widths: &[usize], align: Align) -> String {
        let vertical = self.options.glyphs.vertical;
        let mut line = String::new();
        line.push(vertical);
        for (cell, &width) in cells.iter().zip(widths) {
            line.push(' ');
            align.pad_into(&mut line, cell.as_ref(), width, self.options.width_mode);
            line.push(' ');
            line.push(vertical);
        }
        line
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Center,
    Right,
}

impl Align {
    fn pad_into(self, line: &mut String, text: &str, width: usize, mode: WidthMode) {
        let slack = width.saturating_sub(display_width(text, mode));
        let left = match self {
            Self::Right => slack,
            // Odd slack: the extra space goes left only when the width is odd
            Self::Center => slack / 2 + (slack & width & 1),
        };

        push_spaces(line, left);
        line.push_str(text);
        push_spaces(line, slack - left);
    }
}

fn push_spaces(line: &mut String, count: usize) {
    line.extend(std::iter::repeat(' ').take(count));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowtext_domain::{RenderGlyphs, Value};

    fn table(fields: &[&str], rows: Vec<Vec<Value>>) -> Table {
        let mut table = Table::new(fields.iter().copied()).unwrap();
        table.extend(rows).unwrap();
        table
    }

    #[test]
    fn test_junction_line() {
        let renderer = GridRenderer::default();
        assert_eq!(renderer.junction_line(&[2, 12]), "+----+--------------+");
        assert_eq!(renderer.junction_line(&[]), "+");
    }

    #[test]
    fn test_header_centering() {
        let mut line = String::new();
        Align::Center.pad_into(&mut line, "ab", 5, WidthMode::Graphemes);
        assert_eq!(line, "  ab ");

        line.clear();
        Align::Center.pad_into(&mut line, "abc", 6, WidthMode::Graphemes);
        assert_eq!(line, " abc  ");
    }

    #[test]
    fn test_empty_table() {
        let rendered = GridRenderer::default().render(&table(&["id", "name"], vec![]));
        assert_eq!(
            rendered,
            "+----+------+\n| id | name |\n+----+------+\n+----+------+"
        );
    }

    #[test]
    fn test_no_fields() {
        let rendered = GridRenderer::default().render(&table(&[], vec![vec![]]));
        assert_eq!(rendered, "+\n|\n+\n|\n+");
    }

    #[test]
    fn test_custom_glyphs() {
        let options = RenderOptions::with_glyphs(RenderGlyphs::new('=', '!', '#'));
        let rendered =
            GridRenderer::new(options).render(&table(&["n"], vec![vec![Value::from(7)]]));
        assert_eq!(rendered, "#===#\n! n !\n#===#\n! 7 !\n#===#");
    }

    #[test]
    fn test_odd_slack_header_leans_left_in_odd_columns() {
        let rendered =
            GridRenderer::default().render(&table(&["ab"], vec![vec![Value::from(12345)]]));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "|   ab  |");
        assert_eq!(lines[3], "| 12345 |");
    }

    #[test]
    fn test_wide_characters_in_grapheme_mode() {
        let rows = vec![vec![Value::from("日本")], vec![Value::from("abc")]];
        let rendered = GridRenderer::default().render(&table(&["x"], rows));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "+-----+");
        assert_eq!(lines[3], "|  日本 |");
        assert_eq!(lines[4], "| abc |");
    }

    #[test]
    fn test_line_break_in_cell_stays_on_one_line() {
        let rendered =
            GridRenderer::default().render(&table(&["x"], vec![vec![Value::from("a\nb")]]));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "|  x   |");
        assert_eq!(lines[3], r"| a\nb |");
    }

    #[test]
    fn test_wide_characters_in_columns_mode() {
        let rows = vec![vec![Value::from("日本")], vec![Value::from("abc")]];
        let options = RenderOptions::default().width_mode(WidthMode::Columns);
        let rendered = GridRenderer::new(options).render(&table(&["x"], rows));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[3], "| 日本 |");
        assert_eq!(lines[4], "|  abc |");
    }
}
