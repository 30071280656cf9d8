//! Preference resolution: raw user settings to editor presentation.

use crate::app::domain::editor_config::{EditorOptions, ResolvedEditorConfig};
use crate::app::domain::settings::{
    AutoCompleteType, EditorTheme, FontSizeKey, TabMode, UserEditorPreferences,
};

/// Resolve raw preferences into an editor configuration.
///
/// Total: unknown or missing values fall back to the defaults
/// (medium font, `all` autocomplete, four space indentation).
pub fn resolve(prefs: &UserEditorPreferences) -> ResolvedEditorConfig {
    let theme = EditorTheme::for_user_theme(&prefs.theme);

    let font_size = prefs
        .font_size_key
        .as_deref()
        .and_then(FontSizeKey::parse)
        .unwrap_or(FontSizeKey::Medium);

    let auto_complete = prefs
        .auto_complete
        .as_deref()
        .and_then(AutoCompleteType::parse)
        .unwrap_or_default();

    let tab_mode = prefs.tab_mode.as_deref().and_then(TabMode::parse);
    let indent_with_tabs = tab_mode == Some(TabMode::Tab);
    let tab_size = if !indent_with_tabs && tab_mode == Some(TabMode::TabSpace2) {
        2
    } else {
        4
    };

    ResolvedEditorConfig {
        theme_id: theme.theme_key().to_string(),
        font_size_token: font_size.css_token().to_string(),
        auto_complete,
        options: EditorOptions {
            tab_size,
            indent_with_tabs,
            indent_unit: tab_size,
        },
    }
}

/// Memoizing front for [`resolve`].
///
/// Keeps the last preferences it saw together with their resolution and only
/// recomputes when a watched field differs.
#[derive(Debug, Default)]
pub struct SettingsResolver {
    cached: Option<(UserEditorPreferences, ResolvedEditorConfig)>,
}

impl SettingsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, prefs: &UserEditorPreferences) -> &ResolvedEditorConfig {
        let stale = self.cached.as_ref().is_none_or(|(seen, _)| seen != prefs);

        if stale {
            self.cached = None;
        } else {
            tracing::trace!("editor config cache hit");
        }

        let (_, config) = self.cached.get_or_insert_with(|| {
            let config = resolve(prefs);
            tracing::debug!(
                theme = %config.theme_id,
                font_size = %config.font_size_token,
                tab_size = config.options.tab_size,
                indent_with_tabs = config.options.indent_with_tabs,
                "resolved editor config"
            );
            (prefs.clone(), config)
        });
        config
    }

    /// Last resolved config, if any
    pub fn current(&self) -> Option<&ResolvedEditorConfig> {
        self.cached.as_ref().map(|(_, config)| config)
    }
}
