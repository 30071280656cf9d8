//! Tab, Shift-Tab and Backspace policy.
//!
//! The handler only decides; executing the returned [`EditorCommand`] is up
//! to the editing surface (see [`crate::app::domain::document::TextDocument`]).

use crate::app::domain::command::{EditorCommand, EditorKey};
use crate::app::domain::cursor::{CursorPosition, LineIndentState};
use crate::app::domain::editor_config::EditorOptions;

/// Whether the surface runs a language mode or plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageMode {
    Plain,
    #[default]
    Structured,
}

/// Read-only view of an editing surface, as consulted per keystroke.
pub trait EditorSurface {
    /// True when at least one selection range is non-empty
    fn has_selection(&self) -> bool;

    /// Anchor of every active selection
    fn carets(&self) -> Vec<CursorPosition>;

    /// Indentation of `line`, or None when the surface cannot tell.
    fn line_indentation(&self, line: usize) -> Option<LineIndentState>;

    fn mode(&self) -> LanguageMode;
}

/// Plain value implementation of [`EditorSurface`] for hosts that track
/// editor state themselves.
#[derive(Debug, Clone, Default)]
pub struct SurfaceSnapshot {
    pub has_selection: bool,
    pub carets: Vec<CursorPosition>,
    /// Indentation per line, indexed by line number
    pub line_indents: Vec<usize>,
    pub mode: LanguageMode,
}

impl EditorSurface for SurfaceSnapshot {
    fn has_selection(&self) -> bool {
        self.has_selection
    }

    fn carets(&self) -> Vec<CursorPosition> {
        self.carets.clone()
    }

    fn line_indentation(&self, line: usize) -> Option<LineIndentState> {
        self.line_indents
            .get(line)
            .map(|&indented_columns| LineIndentState { indented_columns })
    }

    fn mode(&self) -> LanguageMode {
        self.mode
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IndentKeyHandler {
    options: EditorOptions,
}

impl IndentKeyHandler {
    pub fn new(options: EditorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: EditorOptions) {
        self.options = options;
    }

    pub fn handle(&self, key: EditorKey, surface: &impl EditorSurface) -> EditorCommand {
        match key {
            EditorKey::Tab => self.on_tab(surface),
            EditorKey::ShiftTab => EditorCommand::IndentLess,
            EditorKey::Backspace => self.on_backspace(surface),
        }
    }

    fn on_tab(&self, surface: &impl EditorSurface) -> EditorCommand {
        if self.options.indent_with_tabs {
            return EditorCommand::PassThrough;
        }

        match surface.mode() {
            LanguageMode::Plain => EditorCommand::InsertTab,
            LanguageMode::Structured if surface.has_selection() => EditorCommand::IndentMore,
            LanguageMode::Structured => EditorCommand::InsertSoftTab,
        }
    }

    fn on_backspace(&self, surface: &impl EditorSurface) -> EditorCommand {
        if surface.has_selection() {
            return EditorCommand::DeleteCharBefore;
        }

        // One misaligned caret sends every caret down the delete path.
        let carets = surface.carets();
        let all_aligned = !carets.is_empty()
            && carets
                .iter()
                .all(|caret| self.caret_on_indent_stop(*caret, surface));

        if all_aligned {
            EditorCommand::IndentLess
        } else {
            EditorCommand::DeleteCharBefore
        }
    }

    fn caret_on_indent_stop(&self, caret: CursorPosition, surface: &impl EditorSurface) -> bool {
        let Some(indent) = surface.line_indentation(caret.line) else {
            return false;
        };
        let Some(offset) = caret.column.checked_rem(self.options.indent_unit) else {
            return false;
        };

        indent.indented_columns != 0 && caret.column <= indent.indented_columns && offset == 0
    }
}
