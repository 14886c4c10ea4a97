//! Local draft persistence for an in-progress article.
//!
//! The editor host keeps exactly one draft slot in a key-value store
//! ([`DraftStore`]); a browser backs it with local storage, tests with a
//! map. Drafts carry their save timestamp and are lazily discarded on load
//! once older than [`MAX_DRAFT_AGE_DAYS`]. Parse failures are treated as
//! "no draft" -- the slot self-clears and nothing is surfaced.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Fixed storage key for the single draft slot.
pub const DRAFT_STORAGE_KEY: &str = "article_draft";

/// Drafts older than this are discarded on load.
pub const MAX_DRAFT_AGE_DAYS: i64 = 7;

/// Host timer period for periodic autosave.
pub const AUTOSAVE_INTERVAL_SECS: u64 = 30;

/// Minimal key-value persistence the host must provide.
pub trait DraftStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// The editable fields of an in-progress article submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DraftContent {
    /// True when every field is blank -- such drafts are never persisted.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self.content.trim().is_empty()
            && self.image_url.trim().is_empty()
            && self.tags.is_empty()
    }
}

/// Serialized form: the content plus its save timestamp.
#[derive(Debug, Serialize, Deserialize)]
struct StoredDraft {
    #[serde(flatten)]
    content: DraftContent,
    saved_at: Timestamp,
}

/// Save/load/clear operations over the single draft slot.
#[derive(Debug)]
pub struct DraftManager<S: DraftStore> {
    store: S,
}

impl<S: DraftStore> DraftManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist the draft with the current timestamp, overwriting any prior
    /// draft. A draft with all fields empty is a no-op.
    pub fn save(&mut self, content: &DraftContent) {
        if content.is_empty() {
            return;
        }
        let stored = StoredDraft {
            content: content.clone(),
            saved_at: Utc::now(),
        };
        if let Ok(json) = serde_json::to_string(&stored) {
            self.store.set(DRAFT_STORAGE_KEY, json);
        }
    }

    /// Return the stored draft, or `None` when the slot is empty, the
    /// payload does not parse, or the draft is older than
    /// [`MAX_DRAFT_AGE_DAYS`]. Stale and corrupt payloads clear the slot.
    pub fn load(&mut self) -> Option<DraftContent> {
        let raw = self.store.get(DRAFT_STORAGE_KEY)?;

        let stored: StoredDraft = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(_) => {
                self.clear();
                return None;
            }
        };

        if Utc::now() - stored.saved_at > Duration::days(MAX_DRAFT_AGE_DAYS) {
            self.clear();
            return None;
        }

        Some(stored.content)
    }

    /// Remove the draft slot.
    pub fn clear(&mut self) {
        self.store.remove(DRAFT_STORAGE_KEY);
    }
}

/// A draft can be submitted once title and content are both non-blank.
pub fn is_ready_to_publish(content: &DraftContent) -> bool {
    !content.title.trim().is_empty() && !content.content.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl DraftStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
        fn set(&mut self, key: &str, value: String) {
            self.0.insert(key.to_string(), value);
        }
        fn remove(&mut self, key: &str) {
            self.0.remove(key);
        }
    }

    fn draft(title: &str, content: &str) -> DraftContent {
        DraftContent {
            title: title.to_string(),
            content: content.to_string(),
            ..DraftContent::default()
        }
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let mut mgr = DraftManager::new(MemoryStore::default());
        let d = DraftContent {
            title: "Trip notes".into(),
            content: "# Day one".into(),
            image_url: "/photo.jpg".into(),
            tags: vec!["travel".into()],
        };
        mgr.save(&d);

        assert_eq!(mgr.load(), Some(d));
    }

    #[test]
    fn test_all_empty_draft_is_not_persisted() {
        let mut mgr = DraftManager::new(MemoryStore::default());
        mgr.save(&DraftContent::default());

        assert_eq!(mgr.load(), None);
    }

    #[test]
    fn test_later_save_overwrites() {
        let mut mgr = DraftManager::new(MemoryStore::default());
        mgr.save(&draft("first", "a"));
        mgr.save(&draft("second", "b"));

        assert_eq!(mgr.load().unwrap().title, "second");
    }

    #[test]
    fn test_stale_draft_discarded_and_slot_cleared() {
        let mut store = MemoryStore::default();
        let stored = StoredDraft {
            content: draft("old", "body"),
            saved_at: Utc::now() - Duration::days(8),
        };
        store.set(DRAFT_STORAGE_KEY, serde_json::to_string(&stored).unwrap());
        let mut mgr = DraftManager::new(store);

        assert_eq!(mgr.load(), None);
        // The slot must have been cleared, not just skipped.
        assert!(mgr.store.get(DRAFT_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_draft_within_max_age_survives() {
        let mut store = MemoryStore::default();
        let stored = StoredDraft {
            content: draft("recent", "body"),
            saved_at: Utc::now() - Duration::days(6),
        };
        store.set(DRAFT_STORAGE_KEY, serde_json::to_string(&stored).unwrap());
        let mut mgr = DraftManager::new(store);

        assert_eq!(mgr.load().unwrap().title, "recent");
    }

    #[test]
    fn test_corrupt_payload_clears_silently() {
        let mut store = MemoryStore::default();
        store.set(DRAFT_STORAGE_KEY, "{not json".into());
        let mut mgr = DraftManager::new(store);

        assert_eq!(mgr.load(), None);
        assert!(mgr.store.get(DRAFT_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_clear_removes_slot() {
        let mut mgr = DraftManager::new(MemoryStore::default());
        mgr.save(&draft("t", "c"));
        mgr.clear();

        assert_eq!(mgr.load(), None);
    }

    #[test]
    fn test_ready_to_publish_requires_title_and_content() {
        assert!(is_ready_to_publish(&draft("t", "c")));
        assert!(!is_ready_to_publish(&draft("  ", "c")));
        assert!(!is_ready_to_publish(&draft("t", "")));
        assert!(!is_ready_to_publish(&DraftContent::default()));
    }
}
