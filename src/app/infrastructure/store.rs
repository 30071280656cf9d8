use std::collections::HashMap;
use std::fmt;

use crate::app::domain::settings::{UserEditorPreferences, WATCHED_KEYS};

/// Returned by [`SettingsStore::subscribe`]; pass to
/// [`SettingsStore::unsubscribe`] to stop notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Returns false once the subscriber has nothing left to update.
type Subscriber = Box<dyn FnMut(&UserEditorPreferences) -> bool>;

/// Process-wide computed user settings.
///
/// Subscribers get a fresh [`UserEditorPreferences`] whenever one of the
/// editor's watched keys changes value; writes to other keys are silent.
#[derive(Default)]
pub struct SettingsStore {
    computed: HashMap<String, String>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("computed", &self.computed)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(computed: HashMap<String, String>) -> Self {
        Self {
            computed,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.computed.get(key).map(String::as_str)
    }

    pub fn editor_preferences(&self) -> UserEditorPreferences {
        UserEditorPreferences::from_computed_settings(&self.computed)
    }

    pub fn subscribe(
        &mut self,
        mut subscriber: impl FnMut(&UserEditorPreferences) + 'static,
    ) -> SubscriptionId {
        self.subscribe_while(move |prefs| {
            subscriber(prefs);
            true
        })
    }

    /// Subscribe until the callback returns false; it is dropped right after.
    pub fn subscribe_while(
        &mut self,
        subscriber: impl FnMut(&UserEditorPreferences) -> bool + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Store a value. Returns true if it differs from the previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        let value = value.into();
        if self.computed.get(&key) == Some(&value) {
            return false;
        }

        let watched = WATCHED_KEYS.contains(&key.as_str());
        tracing::debug!(key = %key, value = %value, "setting changed");
        self.computed.insert(key, value);
        if watched {
            self.notify();
        }
        true
    }

    /// Drop a value so the editor falls back to its default.
    pub fn remove(&mut self, key: &str) -> bool {
        if self.computed.remove(key).is_none() {
            return false;
        }
        if WATCHED_KEYS.contains(&key) {
            self.notify();
        }
        true
    }

    fn notify(&mut self) {
        let prefs = self.editor_preferences();
        self.subscribers.retain_mut(|(_, subscriber)| subscriber(&prefs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_store() -> (SettingsStore, Rc<RefCell<Vec<UserEditorPreferences>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = SettingsStore::new();
        let sink = Rc::clone(&seen);
        store.subscribe(move |prefs| sink.borrow_mut().push(prefs.clone()));
        (store, seen)
    }

    #[test]
    fn test_watched_key_notifies() {
        let (mut store, seen) = recording_store();
        assert!(store.set("tab", "tab space 2"));
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].tab_mode.as_deref(), Some("tab space 2"));
        assert_eq!(store.get("tab"), Some("tab space 2"));
    }

    #[test]
    fn test_unchanged_value_is_silent() {
        let (mut store, seen) = recording_store();
        store.set("theme", "dark");
        assert!(!store.set("theme", "dark"));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_unwatched_key_is_silent() {
        let (mut store, seen) = recording_store();
        assert!(store.set("notification_preference", "email"));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_remove_notifies_with_default() {
        let (mut store, seen) = recording_store();
        store.set("editor_font_size", "large");
        assert!(store.remove("editor_font_size"));
        assert!(!store.remove("editor_font_size"));
        assert_eq!(seen.borrow().len(), 2);
        assert!(seen.borrow()[1].font_size_key.is_none());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let seen = Rc::new(RefCell::new(0));
        let mut store = SettingsStore::new();
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.set("theme", "dark");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set("theme", "night");
        assert_eq!(*seen.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_finished_subscriber_is_pruned() {
        let mut store = SettingsStore::new();
        let mut remaining = 2;
        store.subscribe_while(move |_| {
            remaining -= 1;
            remaining > 0
        });

        store.set("tab", "tab");
        assert_eq!(store.subscriber_count(), 1);
        store.set("tab", "tab space 2");
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_with_settings() {
        let mut computed = HashMap::new();
        computed.insert("auto_complete".to_string(), "none".to_string());
        let store = SettingsStore::with_settings(computed);
        assert_eq!(store.editor_preferences().auto_complete.as_deref(), Some("none"));
        assert!(format!("{:?}", store).contains("subscribers: 0"));
    }
}
