//! Line and column lookup for byte offsets.

use kq_ir::Span;

/// Compute the 1-based `(line, column)` of a byte offset.
///
/// Columns count characters, not bytes. Offsets past the end of `source`
/// are clamped to the end.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let before = floor_char_boundary(source, offset);
    let prefix = &source[..before];

    let line = prefix.bytes().filter(|b| *b == b'\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
    let col = prefix[line_start..].chars().count() + 1;

    (
        u32::try_from(line).unwrap_or(u32::MAX),
        u32::try_from(col).unwrap_or(u32::MAX),
    )
}

/// The full text of the line containing `span.start`, without its newline.
pub fn line_text(source: &str, span: Span) -> &str {
    let offset = floor_char_boundary(source, (span.start as usize).min(source.len()));
    let start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let end = source[offset..]
        .find('\n')
        .map_or(source.len(), |i| offset + i);
    source[start..end].trim_end_matches('\r')
}

fn floor_char_boundary(source: &str, mut offset: usize) -> usize {
    while offset > 0 && !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line() {
        assert_eq!(offset_to_line_col("let x = 1", 4), (1, 5));
        assert_eq!(offset_to_line_col("", 0), (1, 1));
    }

    #[test]
    fn later_lines() {
        let source = "let a = 1\nshow a\nshow b";
        assert_eq!(offset_to_line_col(source, 10), (2, 1));
        assert_eq!(offset_to_line_col(source, 22), (3, 6));
    }

    #[test]
    fn clamps_past_end() {
        assert_eq!(offset_to_line_col("ab", 99), (1, 3));
    }

    #[test]
    fn columns_count_chars() {
        // "é" is two bytes
        assert_eq!(offset_to_line_col("é x", 3), (1, 3));
    }

    #[test]
    fn line_text_extracts_containing_line() {
        let source = "let a = 1\nshow b\n";
        assert_eq!(line_text(source, Span::new(15, 16)), "show b");
        assert_eq!(line_text(source, Span::new(0, 3)), "let a = 1");
    }
}
