use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::keymap::KeyMap;
use crate::app::domain::command::{EditorCommand, EditorKey};
use crate::app::domain::document::TextDocument;
use crate::app::domain::editor_config::ResolvedEditorConfig;
use crate::app::domain::settings::UserEditorPreferences;
use crate::app::infrastructure::store::SettingsStore;
use crate::app::services::settings_resolver::SettingsResolver;

/// One editor instance: resolved preferences, key handling and the text.
#[derive(Debug)]
pub struct EditorSession {
    resolver: SettingsResolver,
    config: ResolvedEditorConfig,
    keymap: KeyMap,
    document: TextDocument,
    /// Preferences that arrived while the session was borrowed
    pending: Rc<RefCell<Option<UserEditorPreferences>>>,
}

impl EditorSession {
    pub fn new(prefs: &UserEditorPreferences, document: TextDocument) -> Self {
        let mut resolver = SettingsResolver::new();
        let config = resolver.resolve(prefs).clone();
        let keymap = KeyMap::new(config.options);
        let document = document.with_options(config.options);

        Self {
            resolver,
            config,
            keymap,
            document,
            pending: Rc::default(),
        }
    }

    /// Create a session fed by `store`, refreshed on every relevant change.
    ///
    /// The store only holds a weak reference: once the returned handle is
    /// dropped the session is freed and its subscription is pruned on the
    /// next notification. A change that arrives while the session is
    /// borrowed is kept and applied before the next key is handled.
    pub fn attach(store: &mut SettingsStore, document: TextDocument) -> Rc<RefCell<Self>> {
        let session = Rc::new(RefCell::new(Self::new(&store.editor_preferences(), document)));
        let pending = Rc::clone(&session.borrow().pending);

        let observer: Weak<RefCell<Self>> = Rc::downgrade(&session);
        store.subscribe_while(move |prefs| {
            let Some(session) = observer.upgrade() else {
                return false;
            };
            match session.try_borrow_mut() {
                Ok(mut session) => {
                    session.update_preferences(prefs);
                }
                Err(_) => {
                    tracing::debug!("editor session busy, deferring preference change");
                    *pending.borrow_mut() = Some(prefs.clone());
                }
            }
            true
        });

        session
    }

    pub fn config(&self) -> &ResolvedEditorConfig {
        &self.config
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn document(&self) -> &TextDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut TextDocument {
        &mut self.document
    }

    /// Re-resolve preferences. Returns true if the config changed.
    pub fn update_preferences(&mut self, prefs: &UserEditorPreferences) -> bool {
        let config = self.resolver.resolve(prefs);
        if *config == self.config {
            return false;
        }

        self.config = config.clone();
        self.keymap.set_options(self.config.options);
        self.document.set_options(self.config.options);
        tracing::info!(
            theme = %self.config.theme_id,
            tab_size = self.config.options.tab_size,
            indent_with_tabs = self.config.options.indent_with_tabs,
            "editor config updated"
        );
        true
    }

    /// Decide and run the command for `key`.
    ///
    /// [`EditorCommand::PassThrough`] is returned untouched so the host can
    /// fall back to its own handling.
    pub fn handle_key(&mut self, key: EditorKey) -> EditorCommand {
        self.apply_pending();
        let command = self.keymap.handler().handle(key, &self.document);
        self.run(key.key_name(), command)
    }

    /// Like [`Self::handle_key`], keyed by name. None for unbound keys.
    pub fn handle_key_name(&mut self, key_name: &str) -> Option<EditorCommand> {
        self.apply_pending();
        let command = self.keymap.dispatch(key_name, &self.document)?;
        Some(self.run(key_name, command))
    }

    /// Apply preferences deferred by the store subscription, if any.
    pub fn apply_pending(&mut self) -> bool {
        let deferred = self.pending.borrow_mut().take();
        match deferred {
            Some(prefs) => self.update_preferences(&prefs),
            None => false,
        }
    }

    fn run(&mut self, key_name: &str, command: EditorCommand) -> EditorCommand {
        tracing::debug!(key = key_name, command = command.name(), "key handled");
        self.document.apply(command);
        command
    }
}
