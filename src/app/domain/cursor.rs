use std::cmp::Ordering;

/// A caret location. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl PartialOrd for CursorPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CursorPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.column.cmp(&other.column))
    }
}

/// One selection range. `anchor == head` is a bare caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub anchor: CursorPosition,
    pub head: CursorPosition,
}

impl Selection {
    pub fn caret(pos: CursorPosition) -> Self {
        Self { anchor: pos, head: pos }
    }

    pub fn new(anchor: CursorPosition, head: CursorPosition) -> Self {
        Self { anchor, head }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    pub fn from(&self) -> CursorPosition {
        self.anchor.min(self.head)
    }

    pub fn to(&self) -> CursorPosition {
        self.anchor.max(self.head)
    }
}

/// Leading indentation of a single line, in visual columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineIndentState {
    pub indented_columns: usize,
}
