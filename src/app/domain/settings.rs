use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::Result;

/// Store keys the editor watches. Any other computed setting is ignored.
pub const THEME_KEY: &str = "theme";
pub const FONT_SIZE_KEY: &str = "editor_font_size";
pub const AUTO_COMPLETE_KEY: &str = "auto_complete";
pub const TAB_KEY: &str = "tab";

pub const WATCHED_KEYS: [&str; 4] = [THEME_KEY, FONT_SIZE_KEY, AUTO_COMPLETE_KEY, TAB_KEY];

/// Code editor themes a user theme can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EditorTheme {
    #[default]
    Default,
    Monokai,
    MaterialPalenight,
    Dracula,
}

impl EditorTheme {
    /// Pick the code editor theme for an application theme name.
    pub fn for_user_theme(user_theme: &str) -> Self {
        match user_theme {
            "dark" => Self::Monokai,
            "night" => Self::MaterialPalenight,
            "lush" => Self::Dracula,
            _ => Self::Default,
        }
    }

    /// Get the theme identifier understood by the editing surface
    pub fn theme_key(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Monokai => "monokai",
            Self::MaterialPalenight => "material-palenight",
            Self::Dracula => "dracula",
        }
    }
}

/// Editor font sizes, ordered smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSizeKey {
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSizeKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "xsmall" => Some(Self::XSmall),
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    /// CSS variable holding the text size for this key
    pub fn css_token(&self) -> &'static str {
        match self {
            Self::XSmall => "var(--xxsmall-text-size)",
            Self::Small => "var(--xsmall-text-size)",
            Self::Medium => "var(--small-text-size)",
            Self::Large => "var(--text-size)",
        }
    }

    pub fn all() -> &'static [FontSizeKey] {
        &[Self::XSmall, Self::Small, Self::Medium, Self::Large]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AutoCompleteType {
    None,
    Schema,
    #[default]
    All,
}

impl AutoCompleteType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "schema" => Some(Self::Schema),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// How the Tab key indents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabMode {
    Tab,
    TabSpace2,
    #[default]
    TabSpace4,
}

impl TabMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "tab" => Some(Self::Tab),
            "tab space 2" => Some(Self::TabSpace2),
            "tab space 4" => Some(Self::TabSpace4),
            _ => None,
        }
    }

    pub fn setting_value(&self) -> &'static str {
        match self {
            Self::Tab => "tab",
            Self::TabSpace2 => "tab space 2",
            Self::TabSpace4 => "tab space 4",
        }
    }
}

/// Raw editor preferences as they come out of the user settings store.
///
/// Every field is kept as the stored string so that values written by newer
/// clients, or garbage, survive a load/save cycle. Interpretation happens in
/// the settings resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct UserEditorPreferences {
    #[serde(default)]
    pub theme: String,

    #[serde(default, rename = "editor_font_size", skip_serializing_if = "Option::is_none")]
    pub font_size_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_complete: Option<String>,

    #[serde(default, rename = "tab", skip_serializing_if = "Option::is_none")]
    pub tab_mode: Option<String>,
}

impl UserEditorPreferences {
    /// Pick the watched keys out of a computed settings map.
    pub fn from_computed_settings(settings: &HashMap<String, String>) -> Self {
        Self {
            theme: settings.get(THEME_KEY).cloned().unwrap_or_default(),
            font_size_key: settings.get(FONT_SIZE_KEY).cloned(),
            auto_complete: settings.get(AUTO_COMPLETE_KEY).cloned(),
            tab_mode: settings.get(TAB_KEY).cloned(),
        }
    }

    /// Load preferences from the default location, or fall back to defaults.
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match Self::load_from(&config_path) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "using default editor preferences");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save preferences to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("notebook-editor");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;

    #[test]
    fn test_default_preferences() {
        let prefs = UserEditorPreferences::default();
        assert_eq!(prefs.theme, "");
        assert!(prefs.font_size_key.is_none());
        assert!(prefs.auto_complete.is_none());
        assert!(prefs.tab_mode.is_none());
    }

    #[test]
    fn test_theme_lookup() {
        assert_eq!(EditorTheme::for_user_theme("dark"), EditorTheme::Monokai);
        assert_eq!(EditorTheme::for_user_theme("night"), EditorTheme::MaterialPalenight);
        assert_eq!(EditorTheme::for_user_theme("lush"), EditorTheme::Dracula);
        assert_eq!(EditorTheme::for_user_theme("light"), EditorTheme::Default);
        assert_eq!(EditorTheme::for_user_theme(""), EditorTheme::Default);
        assert_eq!(EditorTheme::Dracula.theme_key(), "dracula");
    }

    #[test]
    fn test_font_size_tokens_are_distinct_and_ordered() {
        let tokens: Vec<_> = FontSizeKey::all().iter().map(|k| k.css_token()).collect();
        assert_eq!(
            tokens,
            vec![
                "var(--xxsmall-text-size)",
                "var(--xsmall-text-size)",
                "var(--small-text-size)",
                "var(--text-size)",
            ]
        );
        assert!(FontSizeKey::XSmall < FontSizeKey::Large);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!(FontSizeKey::parse("large"), Some(FontSizeKey::Large));
        assert_eq!(FontSizeKey::parse("huge"), None);
        assert_eq!(AutoCompleteType::parse("schema"), Some(AutoCompleteType::Schema));
        assert_eq!(AutoCompleteType::parse("ALL"), None);
        assert_eq!(TabMode::parse("tab space 2"), Some(TabMode::TabSpace2));
        assert_eq!(TabMode::parse("tab space 8"), None);
        assert_eq!(TabMode::TabSpace4.setting_value(), "tab space 4");
    }

    #[test]
    fn test_from_computed_settings() {
        let mut settings = HashMap::new();
        settings.insert("theme".to_string(), "dark".to_string());
        settings.insert("tab".to_string(), "tab".to_string());
        settings.insert("unrelated".to_string(), "value".to_string());

        let prefs = UserEditorPreferences::from_computed_settings(&settings);
        assert_eq!(prefs.theme, "dark");
        assert_eq!(prefs.tab_mode.as_deref(), Some("tab"));
        assert!(prefs.font_size_key.is_none());
        assert!(prefs.auto_complete.is_none());
    }

    #[test]
    fn test_serialization_uses_store_keys() {
        let prefs = UserEditorPreferences {
            theme: "night".to_string(),
            font_size_key: Some("small".to_string()),
            auto_complete: Some("none".to_string()),
            tab_mode: Some("tab space 2".to_string()),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("\"editor_font_size\":\"small\""));
        assert!(json.contains("\"tab\":\"tab space 2\""));
        assert!(json.contains("\"auto_complete\":\"none\""));
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"tab": "tab"}"#;
        let prefs: UserEditorPreferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.tab_mode.as_deref(), Some("tab"));
        assert_eq!(prefs.theme, "");
        assert!(prefs.font_size_key.is_none());
    }

    #[test]
    fn test_unknown_values_survive_round_trip() {
        let json = r#"{"theme": "solar", "editor_font_size": "gigantic"}"#;
        let prefs: UserEditorPreferences = serde_json::from_str(json).unwrap();
        let back: UserEditorPreferences =
            serde_json::from_str(&serde_json::to_string(&prefs).unwrap()).unwrap();
        assert_eq!(back.font_size_key.as_deref(), Some("gigantic"));
        assert_eq!(back, prefs);
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let prefs = UserEditorPreferences {
            theme: "lush".to_string(),
            tab_mode: Some("tab space 2".to_string()),
            ..Default::default()
        };

        prefs.save_to(&path).unwrap();
        let loaded = UserEditorPreferences::load_from(&path).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = UserEditorPreferences::load_from(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_load_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ broken").unwrap();
        let err = UserEditorPreferences::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_config_path_location() {
        let path = UserEditorPreferences::get_config_path();
        assert!(path.ends_with("notebook-editor/settings.json"));
    }
}
