use std::path::PathBuf;
use std::process::ExitCode;

use notebook_editor::app::infrastructure::logging;
use notebook_editor::app::{UserEditorPreferences, resolve};

/// Print the editor config resolved from a preferences file.
///
/// Usage: `notebook-editor [SETTINGS_JSON]`. Without an argument the
/// preferences are read from the default config location.
fn main() -> ExitCode {
    logging::init();

    let prefs = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match UserEditorPreferences::load_from(&path) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to load preferences");
                return ExitCode::FAILURE;
            }
        },
        None => UserEditorPreferences::load(),
    };

    let config = resolve(&prefs);
    match serde_json::to_string_pretty(&config) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to encode config");
            ExitCode::FAILURE
        }
    }
}
