#![forbid(unsafe_code)]

//! Load state of every sprite sheet the gallery references.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// Image path → load state. Each path is requested once.
#[derive(Debug, Default, Clone)]
pub struct ImageCache {
    entries: HashMap<String, LoadState>,
}

impl ImageCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `path`. Returns `true` when the host must begin loading
    /// it, `false` when it is already tracked.
    pub fn request(&mut self, path: &str) -> bool {
        if self.entries.contains_key(path) {
            return false;
        }
        self.entries.insert(path.to_owned(), LoadState::Loading);
        true
    }

    /// Record a finished load. Unknown paths are tracked as ready too.
    pub fn mark_ready(&mut self, path: &str) {
        self.entries.insert(path.to_owned(), LoadState::Ready);
    }

    /// Record a failed load. A later success still wins.
    pub fn mark_failed(&mut self, path: &str) {
        let state = self
            .entries
            .entry(path.to_owned())
            .or_insert(LoadState::Failed);
        if *state == LoadState::Loading {
            *state = LoadState::Failed;
        }
    }

    #[must_use]
    pub fn state(&self, path: &str) -> Option<LoadState> {
        self.entries.get(path).copied()
    }

    #[must_use]
    pub fn is_ready(&self, path: &str) -> bool {
        self.state(path) == Some(LoadState::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_once() {
        let mut cache = ImageCache::new();
        assert!(cache.request("a.jpg"));
        assert!(!cache.request("a.jpg"));
        assert_eq!(cache.state("a.jpg"), Some(LoadState::Loading));
    }

    #[test]
    fn ready_after_load() {
        let mut cache = ImageCache::new();
        cache.request("a.jpg");
        assert!(!cache.is_ready("a.jpg"));
        cache.mark_ready("a.jpg");
        assert!(cache.is_ready("a.jpg"));
    }

    #[test]
    fn failure_does_not_override_ready() {
        let mut cache = ImageCache::new();
        cache.request("a.jpg");
        cache.mark_ready("a.jpg");
        cache.mark_failed("a.jpg");
        assert!(cache.is_ready("a.jpg"));

        cache.request("b.jpg");
        cache.mark_failed("b.jpg");
        assert_eq!(cache.state("b.jpg"), Some(LoadState::Failed));
        assert!(!cache.request("b.jpg"));
    }
}
