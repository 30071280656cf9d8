use std::collections::BTreeSet;

use super::command::EditorCommand;
use super::cursor::{CursorPosition, LineIndentState, Selection};
use super::editor_config::EditorOptions;
use crate::app::services::indent_keys::{EditorSurface, LanguageMode};
use crate::app::services::text_ops::{
    char_len, char_to_byte, count_column, leading_whitespace_len, line_indentation,
    soft_tab_width,
};

/// In-memory multi-caret text buffer that executes [`EditorCommand`]s.
///
/// Lines are stored without their terminating `\n`. There is always at least
/// one line and at least one selection.
#[derive(Debug, Clone)]
pub struct TextDocument {
    lines: Vec<String>,
    selections: Vec<Selection>,
    mode: LanguageMode,
    options: EditorOptions,
}

impl TextDocument {
    pub fn new(text: &str, mode: LanguageMode) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            selections: vec![Selection::caret(CursorPosition::default())],
            mode,
            options: EditorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EditorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, n: usize) -> Option<&str> {
        self.lines.get(n).map(String::as_str)
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: EditorOptions) {
        self.options = options;
    }

    pub fn set_mode(&mut self, mode: LanguageMode) {
        self.mode = mode;
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Anchor of every selection, in document order
    pub fn carets(&self) -> Vec<CursorPosition> {
        self.selections.iter().map(|sel| sel.anchor).collect()
    }

    /// Replace all selections. Positions outside the text are clamped.
    pub fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = selections
            .into_iter()
            .map(|sel| Selection::new(self.clamp(sel.anchor), self.clamp(sel.head)))
            .collect();
        if self.selections.is_empty() {
            self.selections.push(Selection::caret(CursorPosition::default()));
        }
        self.normalize_selections();
    }

    pub fn set_cursor(&mut self, pos: CursorPosition) {
        self.set_selections(vec![Selection::caret(pos)]);
    }

    pub fn add_cursor(&mut self, pos: CursorPosition) {
        let pos = self.clamp(pos);
        self.selections.push(Selection::caret(pos));
        self.normalize_selections();
    }

    /// Execute a command. Returns false for [`EditorCommand::PassThrough`],
    /// which leaves the document untouched.
    pub fn apply(&mut self, command: EditorCommand) -> bool {
        match command {
            EditorCommand::PassThrough => return false,
            EditorCommand::InsertTab => self.replace_each(|_, sel| Some((sel.from(), sel.to(), "\t".to_string()))),
            EditorCommand::InsertSoftTab => self.replace_each(|doc, sel| {
                let from = sel.from();
                let column = count_column(&doc.lines[from.line], from.column, doc.options.tab_size);
                let width = soft_tab_width(column, doc.options.tab_size);
                Some((from, sel.to(), " ".repeat(width)))
            }),
            EditorCommand::IndentMore => self.indent_selected_lines(true),
            EditorCommand::IndentLess => self.indent_selected_lines(false),
            EditorCommand::DeleteCharBefore => self.replace_each(|doc, sel| {
                if !sel.is_empty() {
                    return Some((sel.from(), sel.to(), String::new()));
                }
                let head = sel.head;
                let before = if head.column > 0 {
                    CursorPosition::new(head.line, head.column - 1)
                } else if head.line > 0 {
                    CursorPosition::new(head.line - 1, char_len(&doc.lines[head.line - 1]))
                } else {
                    return None;
                };
                Some((before, head, String::new()))
            }),
        }
        tracing::debug!(command = command.name(), selections = self.selections.len(), "applied command");
        true
    }

    fn clamp(&self, pos: CursorPosition) -> CursorPosition {
        let line = pos.line.min(self.lines.len() - 1);
        let column = pos.column.min(char_len(&self.lines[line]));
        CursorPosition::new(line, column)
    }

    fn normalize_selections(&mut self) {
        self.selections.sort_by_key(|sel| (sel.from(), sel.to()));
        self.selections.dedup();
    }

    /// Run a range replacement per selection, last selection first, so that
    /// pending selections never see shifted coordinates.
    fn replace_each<F>(&mut self, mut edit: F)
    where
        F: FnMut(&Self, &Selection) -> Option<(CursorPosition, CursorPosition, String)>,
    {
        self.normalize_selections();
        for i in (0..self.selections.len()).rev() {
            let sel = self.selections[i];
            let Some((from, to, text)) = edit(self, &sel) else {
                continue;
            };
            let end = self.replace_range(from, to, &text);
            for (j, other) in self.selections.iter_mut().enumerate() {
                if j == i {
                    *other = Selection::caret(end);
                } else {
                    other.anchor = map_position(other.anchor, from, to, end);
                    other.head = map_position(other.head, from, to, end);
                }
            }
        }
        self.normalize_selections();
    }

    /// Replace `[from, to)` with single-line `text`; returns the end of the
    /// inserted text.
    fn replace_range(&mut self, from: CursorPosition, to: CursorPosition, text: &str) -> CursorPosition {
        debug_assert!(!text.contains('\n'));
        let head = &self.lines[from.line];
        let tail = &self.lines[to.line];

        let mut joined = String::with_capacity(head.len() + text.len() + tail.len());
        joined.push_str(&head[..char_to_byte(head, from.column)]);
        joined.push_str(text);
        joined.push_str(&tail[char_to_byte(tail, to.column)..]);

        self.lines.splice(from.line..=to.line, std::iter::once(joined));
        CursorPosition::new(from.line, from.column + char_len(text))
    }

    fn indent_selected_lines(&mut self, more: bool) {
        let mut touched = BTreeSet::new();
        for sel in &self.selections {
            let (from, to) = (sel.from(), sel.to());
            // a selection ending at column 0 does not claim that line
            let last = if !sel.is_empty() && to.column == 0 && to.line > from.line {
                to.line - 1
            } else {
                to.line
            };
            touched.extend(from.line..=last);
        }

        for line in touched {
            self.reindent_line(line, more);
        }
        self.normalize_selections();
    }

    fn reindent_line(&mut self, n: usize, more: bool) {
        let text = &self.lines[n];
        let old_len = leading_whitespace_len(text);
        let current = count_column(text, old_len, self.options.tab_size);
        let target = if more {
            current + self.options.indent_unit
        } else {
            current.saturating_sub(self.options.indent_unit)
        };

        let indent = self.options.indent_string(target);
        // leading whitespace is ASCII, so char and byte offsets agree
        if text[..old_len] == indent {
            return;
        }
        let new_len = indent.len();
        self.lines[n] = format!("{}{}", indent, &text[old_len..]);

        for sel in &mut self.selections {
            let is_caret = sel.is_empty();
            for pos in [&mut sel.anchor, &mut sel.head] {
                if pos.line != n {
                    continue;
                }
                if pos.column >= old_len {
                    pos.column = pos.column - old_len + new_len;
                } else if is_caret {
                    pos.column = new_len;
                } else {
                    pos.column = pos.column.min(new_len);
                }
            }
        }
    }
}

fn map_position(
    pos: CursorPosition,
    from: CursorPosition,
    to: CursorPosition,
    end: CursorPosition,
) -> CursorPosition {
    if pos < from {
        pos
    } else if pos <= to {
        end
    } else if pos.line == to.line {
        CursorPosition::new(end.line, end.column + pos.column - to.column)
    } else {
        CursorPosition::new(pos.line - (to.line - from.line), pos.column)
    }
}

impl EditorSurface for TextDocument {
    fn has_selection(&self) -> bool {
        self.selections.iter().any(|sel| !sel.is_empty())
    }

    fn carets(&self) -> Vec<CursorPosition> {
        TextDocument::carets(self)
    }

    /// Plain text carries no indentation state.
    fn line_indentation(&self, line: usize) -> Option<LineIndentState> {
        if self.mode == LanguageMode::Plain {
            return None;
        }
        self.lines.get(line).map(|text| LineIndentState {
            indented_columns: line_indentation(text, self.options.tab_size),
        })
    }

    fn mode(&self) -> LanguageMode {
        self.mode
    }
}
