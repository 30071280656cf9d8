//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Raw user editor preferences and their enums
//! - The resolved editor configuration
//! - Cursors, selections and the editing commands
//! - The in-memory text document

pub mod command;
pub mod cursor;
pub mod document;
pub mod editor_config;
pub mod settings;

pub use command::{EditorCommand, EditorKey};
pub use cursor::{CursorPosition, LineIndentState, Selection};
pub use document::TextDocument;
pub use editor_config::{EditorOptions, ResolvedEditorConfig};
pub use settings::{AutoCompleteType, EditorTheme, FontSizeKey, TabMode, UserEditorPreferences};
