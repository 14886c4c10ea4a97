//! Read-count gating for the article view.
//!
//! The increment call fires once both conditions hold: the reader has
//! scrolled within [`SCROLL_END_THRESHOLD_PX`] of the content end, and
//! [`READ_DWELL_SECS`] have elapsed since render. Either trigger may
//! complete first; the gate fires exactly once per [`ReadGate`]. A
//! per-session marker set ([`SessionMarkers`]) suppresses repeat increments
//! for the same article within a browser session.
//!
//! This is client-side convenience only -- the server endpoint performs no
//! deduplication, and the counter is an approximate popularity signal.

use std::collections::HashSet;

use crate::types::DbId;

/// Distance from content end (px) at which the reader counts as "at the end".
pub const SCROLL_END_THRESHOLD_PX: f64 = 100.0;

/// Dwell time after render before the time condition is met.
pub const READ_DWELL_SECS: u64 = 60;

/// True when the viewport bottom is within the threshold of the content end.
pub fn is_scrolled_to_end(scroll_top: f64, viewport_height: f64, content_height: f64) -> bool {
    scroll_top + viewport_height >= content_height - SCROLL_END_THRESHOLD_PX
}

/// One-shot dual-condition gate for a single article view.
#[derive(Debug, Default)]
pub struct ReadGate {
    scrolled_to_end: bool,
    dwell_elapsed: bool,
    fired: bool,
}

impl ReadGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the scroll condition. Returns `true` iff this call completes
    /// the gate (both conditions now hold and it has not fired before).
    pub fn note_scrolled_to_end(&mut self) -> bool {
        self.scrolled_to_end = true;
        self.try_fire()
    }

    /// Record the dwell condition. Returns `true` iff this call completes
    /// the gate.
    pub fn note_dwell_elapsed(&mut self) -> bool {
        self.dwell_elapsed = true;
        self.try_fire()
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    fn try_fire(&mut self) -> bool {
        if self.fired || !self.scrolled_to_end || !self.dwell_elapsed {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Per-browser-session "already counted" markers, keyed by article id.
#[derive(Debug, Default)]
pub struct SessionMarkers {
    seen: HashSet<String>,
}

impl SessionMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage key used for the session marker of an article.
    pub fn marker_key(article_id: DbId) -> String {
        format!("read_{article_id}")
    }

    pub fn is_marked(&self, article_id: DbId) -> bool {
        self.seen.contains(&Self::marker_key(article_id))
    }

    /// Mark the article as counted. Returns `false` if it was already marked.
    pub fn mark(&mut self, article_id: DbId) -> bool {
        self.seen.insert(Self::marker_key(article_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_condition_does_not_fire() {
        let mut gate = ReadGate::new();
        assert!(!gate.note_scrolled_to_end());
        assert!(!gate.has_fired());

        let mut gate = ReadGate::new();
        assert!(!gate.note_dwell_elapsed());
        assert!(!gate.has_fired());
    }

    #[test]
    fn test_fires_once_when_both_conditions_met() {
        let mut gate = ReadGate::new();
        assert!(!gate.note_dwell_elapsed());
        assert!(gate.note_scrolled_to_end());
        assert!(gate.has_fired());

        // Repeat triggers never fire again.
        assert!(!gate.note_scrolled_to_end());
        assert!(!gate.note_dwell_elapsed());
    }

    #[test]
    fn test_order_of_triggers_is_irrelevant() {
        let mut gate = ReadGate::new();
        assert!(!gate.note_scrolled_to_end());
        assert!(gate.note_dwell_elapsed());
    }

    #[test]
    fn test_scroll_end_threshold() {
        // 100px from the end counts as read.
        assert!(is_scrolled_to_end(1900.0, 800.0, 2800.0));
        // Further away does not.
        assert!(!is_scrolled_to_end(1000.0, 800.0, 2800.0));
    }

    #[test]
    fn test_session_marker_suppresses_repeat() {
        let mut markers = SessionMarkers::new();
        assert!(!markers.is_marked(7));
        assert!(markers.mark(7));
        assert!(markers.is_marked(7));
        assert!(!markers.mark(7));
        // Other articles are unaffected.
        assert!(!markers.is_marked(8));
    }
}
