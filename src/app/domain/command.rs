use std::fmt;
use std::str::FromStr;

use crate::app::infrastructure::error::AppError;

/// Editing commands the indentation key handlers can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    /// Leave the keystroke to the surface's default behavior
    PassThrough,
    InsertTab,
    InsertSoftTab,
    IndentMore,
    IndentLess,
    DeleteCharBefore,
}

impl EditorCommand {
    /// Name of the equivalent built-in command on the editing surface
    pub fn name(&self) -> &'static str {
        match self {
            Self::PassThrough => "pass",
            Self::InsertTab => "insertTab",
            Self::InsertSoftTab => "insertSoftTab",
            Self::IndentMore => "indentMore",
            Self::IndentLess => "indentLess",
            Self::DeleteCharBefore => "delCharBefore",
        }
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, Self::PassThrough)
    }
}

/// Keys with custom indentation handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorKey {
    Tab,
    ShiftTab,
    Backspace,
}

impl EditorKey {
    pub fn key_name(&self) -> &'static str {
        match self {
            Self::Tab => "Tab",
            Self::ShiftTab => "Shift-Tab",
            Self::Backspace => "Backspace",
        }
    }

    pub fn all() -> &'static [EditorKey] {
        &[Self::Tab, Self::ShiftTab, Self::Backspace]
    }
}

impl FromStr for EditorKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tab" => Ok(Self::Tab),
            "Shift-Tab" => Ok(Self::ShiftTab),
            "Backspace" => Ok(Self::Backspace),
            other => Err(AppError::UnknownKey(other.to_string())),
        }
    }
}

impl fmt::Display for EditorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_name())
    }
}
