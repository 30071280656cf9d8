use serde::Serialize;

use super::settings::AutoCompleteType;

/// Indentation options handed to the editing surface.
///
/// Serializes with the field names the surface's configuration API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    pub tab_size: usize,
    pub indent_with_tabs: bool,
    pub indent_unit: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            indent_with_tabs: false,
            indent_unit: 4,
        }
    }
}

impl EditorOptions {
    /// Build the whitespace for `columns` columns of indentation.
    pub fn indent_string(&self, columns: usize) -> String {
        if self.indent_with_tabs && self.tab_size > 0 {
            let mut indent = "\t".repeat(columns / self.tab_size);
            indent.push_str(&" ".repeat(columns % self.tab_size));
            indent
        } else {
            " ".repeat(columns)
        }
    }
}

/// Editor presentation derived from the user's preferences.
///
/// A snapshot: a preference change produces a new value instead of
/// mutating this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEditorConfig {
    pub theme_id: String,
    pub font_size_token: String,
    pub auto_complete: AutoCompleteType,
    pub options: EditorOptions,
}

impl ResolvedEditorConfig {
    pub fn tab_size(&self) -> usize {
        self.options.tab_size
    }

    pub fn indent_with_tabs(&self) -> bool {
        self.options.indent_with_tabs
    }

    pub fn indent_unit(&self) -> usize {
        self.options.indent_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = EditorOptions::default();
        assert_eq!(options.tab_size, 4);
        assert_eq!(options.indent_unit, 4);
        assert!(!options.indent_with_tabs);
    }

    #[test]
    fn test_indent_string_spaces() {
        let options = EditorOptions::default();
        assert_eq!(options.indent_string(0), "");
        assert_eq!(options.indent_string(6), "      ");
    }

    #[test]
    fn test_indent_string_tabs() {
        let options = EditorOptions {
            tab_size: 4,
            indent_with_tabs: true,
            indent_unit: 4,
        };
        assert_eq!(options.indent_string(8), "\t\t");
        assert_eq!(options.indent_string(6), "\t  ");
    }

    #[test]
    fn test_options_serialize_with_surface_names() {
        let json = serde_json::to_string(&EditorOptions::default()).unwrap();
        assert_eq!(json, r#"{"tabSize":4,"indentWithTabs":false,"indentUnit":4}"#);
    }
}
