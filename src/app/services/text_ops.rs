/// Count the visual column reached after the first `end` characters of a line
///
/// Tabs advance to the next multiple of `tab_size`; every other character
/// occupies one column. `end` past the line length stops at the line end.
pub fn count_column(line: &str, end: usize, tab_size: usize) -> usize {
    let mut column = 0;
    for ch in line.chars().take(end) {
        if ch == '\t' && tab_size > 0 {
            column += tab_size - column % tab_size;
        } else {
            column += 1;
        }
    }
    column
}

/// Number of leading space/tab characters in a line
pub fn leading_whitespace_len(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

/// Visual width of a line's leading indentation
pub fn line_indentation(line: &str, tab_size: usize) -> usize {
    count_column(line, leading_whitespace_len(line), tab_size)
}

/// Convert a character column to a byte offset within the line
///
/// Columns past the end clamp to the line length.
pub fn char_to_byte(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

/// Number of characters in a line
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Spaces needed to move from `column` to the next tab stop
pub fn soft_tab_width(column: usize, tab_size: usize) -> usize {
    if tab_size == 0 {
        return 0;
    }
    tab_size - column % tab_size
}
