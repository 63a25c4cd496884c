//! Column-width calculation

use rowtext_domain::WidthMode;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string under the given mode
///
/// # Example
/// ```
/// # use rowtext_domain::WidthMode;
/// # use rowtext_export::width::display_width;
/// assert_eq!(display_width("álvaro", WidthMode::Graphemes), 6);
/// assert_eq!(display_width("a\u{301}lvaro", WidthMode::Graphemes), 6);
/// assert_eq!(display_width("日本", WidthMode::Columns), 4);
/// ```
pub fn display_width(text: &str, mode: WidthMode) -> usize {
    match mode {
        WidthMode::Graphemes => text.graphemes(true).count(),
        WidthMode::Columns => text.width(),
    }
}

/// Width of every column: the widest of its header and its cells
///
/// With no rows the field names alone decide.
pub fn column_widths<H, C>(headers: &[H], rows: &[Vec<C>], mode: WidthMode) -> Vec<usize>
where
    H: AsRef<str>,
    C: AsRef<str>,
{
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|header| display_width(header.as_ref(), mode))
        .collect();

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell.as_ref(), mode));
        }
    }

    widths
}
