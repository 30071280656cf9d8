//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (preferences, resolved config, cursors, document)
//! - `controllers/` - Orchestration (key map, editor session)
//! - `services/` - Business operations (settings resolution, indent key policy, text ops)
//! - `infrastructure/` - External integrations (settings store, logging, error)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::keymap::KeyMap;
pub use controllers::session::EditorSession;
pub use domain::{
    AutoCompleteType, CursorPosition, EditorCommand, EditorKey, EditorOptions, EditorTheme,
    FontSizeKey, LineIndentState, ResolvedEditorConfig, Selection, TabMode, TextDocument,
    UserEditorPreferences,
};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::store::SettingsStore;
pub use services::indent_keys::{EditorSurface, IndentKeyHandler, LanguageMode, SurfaceSnapshot};
pub use services::settings_resolver::{SettingsResolver, resolve};
