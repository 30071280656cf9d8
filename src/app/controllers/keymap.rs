use std::collections::HashMap;

use crate::app::domain::command::{EditorCommand, EditorKey};
use crate::app::domain::editor_config::EditorOptions;
use crate::app::services::indent_keys::{EditorSurface, IndentKeyHandler};

/// Key name → indentation handler table, as registered with the surface.
#[derive(Debug, Clone)]
pub struct KeyMap {
    handler: IndentKeyHandler,
    bindings: HashMap<String, EditorKey>,
}

impl KeyMap {
    /// Bind `Tab`, `Shift-Tab` and `Backspace` to the indentation handler.
    pub fn new(options: EditorOptions) -> Self {
        let bindings = EditorKey::all()
            .iter()
            .map(|key| (key.key_name().to_string(), *key))
            .collect();

        Self {
            handler: IndentKeyHandler::new(options),
            bindings,
        }
    }

    pub fn handler(&self) -> &IndentKeyHandler {
        &self.handler
    }

    pub fn set_options(&mut self, options: EditorOptions) {
        self.handler.set_options(options);
    }

    /// Decide the command for a key name. None means the key is not ours.
    pub fn dispatch(&self, key_name: &str, surface: &impl EditorSurface) -> Option<EditorCommand> {
        let key = self.bindings.get(key_name)?;
        Some(self.handler.handle(*key, surface))
    }

    pub fn is_bound(&self, key_name: &str) -> bool {
        self.bindings.contains_key(key_name)
    }

    pub fn unbind(&mut self, key_name: &str) -> Option<EditorKey> {
        self.bindings.remove(key_name)
    }

    /// Bound key names, sorted
    pub fn key_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}
