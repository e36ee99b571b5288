//! Session-scoped consent cache.

use dashmap::DashSet;

/// Origins the user has explicitly approved for outbound fetches
/// during the current session.
///
/// The cache is created at session start, grows monotonically, and is
/// discarded with the session. Entries are never removed while the
/// session runs and nothing is persisted. Inserts are idempotent, so
/// concurrent checks racing to record the same origin are safe
/// without extra locking.
#[derive(Debug, Default)]
pub struct ConsentCache {
    origins: DashSet<String>,
}

impl ConsentCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record approval for `origin`. Returns `false` if the origin
    /// was already present.
    pub fn insert(&self, origin: &str) -> bool {
        self.origins.insert(origin.to_string())
    }

    /// Whether `origin` has been approved this session.
    pub fn contains(&self, origin: &str) -> bool {
        self.origins.contains(origin)
    }

    /// Number of approved origins.
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    /// Whether no origin has been approved yet.
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let cache = ConsentCache::new();
        assert!(cache.is_empty());
        assert!(!cache.contains("https://example.com"));
    }

    #[test]
    fn insert_is_idempotent() {
        let cache = ConsentCache::new();
        assert!(cache.insert("https://example.com"));
        assert!(!cache.insert("https://example.com"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn membership_is_monotonic() {
        let cache = ConsentCache::new();
        cache.insert("https://a.example");
        cache.insert("https://b.example");
        assert!(cache.contains("https://a.example"));
        assert!(cache.contains("https://b.example"));
        assert_eq!(cache.len(), 2);
    }
}
