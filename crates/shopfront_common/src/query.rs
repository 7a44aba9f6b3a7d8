use std::collections::HashMap;

use crate::shop::ShopInfo;

/// The three states a remote lookup presents to the UI.
///
/// There is deliberately no richer error payload: every failure renders the
/// same way, and callers that care about the cause log it before settling
/// the lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryState<T> {
    /// No result yet: the request has not been issued, or is in flight.
    Loading,
    /// The request failed.
    Error,
    /// The request completed and delivered a payload.
    Ready(T),
}

impl<T> QueryState<T> {
    /// Returns true while no result has arrived.
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    /// Returns true if the lookup failed.
    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Error)
    }

    /// Returns true once a payload is available.
    pub fn is_ready(&self) -> bool {
        matches!(self, QueryState::Ready(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Token-keyed cache for the shop-name lookup.
///
/// One slot per access token. [`ShopNameCache::begin`] claims the fetch for
/// a token the first time it is seen; resolutions overwrite that token's
/// slot, so whichever resolution lands last wins for its own key and can
/// never clobber another token's slot. Slots are never evicted: a token's
/// result, success or failure, is reused for as long as the session keeps
/// presenting that token. A new token starts a fresh slot.
pub struct ShopNameCache {
    entries: HashMap<String, QueryState<ShopInfo>>,
}

impl ShopNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the fetch for `token`.
    ///
    /// Returns true exactly once per token; callers issue the request only
    /// when it does. Repeat calls for a claimed, resolved, or failed token
    /// return false, which is what makes the lookup single-flight and
    /// keeps failures from being retried under the same token.
    pub fn begin(&mut self, token: &str) -> bool {
        if self.entries.contains_key(token) {
            return false;
        }
        self.entries.insert(token.to_owned(), QueryState::Loading);
        true
    }

    /// Records a successful lookup for `token`.
    pub fn succeed(&mut self, token: &str, info: ShopInfo) {
        self.entries.insert(token.to_owned(), QueryState::Ready(info));
    }

    /// Records a failed lookup for `token`.
    pub fn fail(&mut self, token: &str) {
        self.entries.insert(token.to_owned(), QueryState::Error);
    }

    /// The state to present for a session holding `token`.
    ///
    /// No token maps straight to the error arm: without a credential the
    /// request is never issued and the UI falls back immediately. A token
    /// without a resolved slot reads as loading, whether or not the fetch
    /// has been claimed yet.
    pub fn state(&self, token: Option<&str>) -> QueryState<ShopInfo> {
        let Some(token) = token else {
            return QueryState::Error;
        };
        self.entries
            .get(token)
            .cloned()
            .unwrap_or(QueryState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ShopInfo {
        ShopInfo {
            company_name: Some(name.to_owned()),
        }
    }

    #[test]
    fn test_begin_claims_each_token_once() {
        let mut cache = ShopNameCache::new();

        assert!(cache.begin("t1"));
        // Same token again: already claimed
        assert!(!cache.begin("t1"));
        // Different token: fresh claim
        assert!(cache.begin("t2"));
    }

    #[test]
    fn test_resolved_token_is_not_refetched() {
        let mut cache = ShopNameCache::new();

        assert!(cache.begin("t1"));
        cache.succeed("t1", named("Acme"));
        assert!(!cache.begin("t1"));

        assert!(cache.begin("t2"));
        cache.fail("t2");
        // Failures are cached the same way successes are
        assert!(!cache.begin("t2"));
    }

    #[test]
    fn test_state_tracks_the_lifecycle() {
        let mut cache = ShopNameCache::new();

        assert!(cache.state(Some("t1")).is_loading());
        cache.begin("t1");
        assert!(cache.state(Some("t1")).is_loading());

        cache.succeed("t1", named("Acme"));
        assert_eq!(cache.state(Some("t1")), QueryState::Ready(named("Acme")));

        cache.fail("t1");
        assert!(cache.state(Some("t1")).is_error());
    }

    #[test]
    fn test_missing_token_reads_as_error() {
        let cache = ShopNameCache::new();
        assert!(cache.state(None).is_error());
    }

    #[test]
    fn test_late_resolution_stays_in_its_own_slot() {
        let mut cache = ShopNameCache::new();

        // The session rotates tokens while the first request is in flight.
        cache.begin("old");
        cache.begin("new");
        cache.succeed("new", named("Fresh Co"));

        // The old request resolves afterwards; the new slot is untouched.
        cache.succeed("old", named("Stale Co"));
        assert_eq!(cache.state(Some("new")), QueryState::Ready(named("Fresh Co")));
        assert_eq!(cache.state(Some("old")), QueryState::Ready(named("Stale Co")));
    }
}
