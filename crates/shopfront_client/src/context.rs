use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use shopfront_common::{QueryState, Session, ShopInfo, ShopNameCache};

use crate::api::ShopApi;

/// Where the browser lands after a completed sign-out.
pub const SITE_ROOT: &str = "/";

/// Context providing access to the storefront state.
///
/// This context is provided by `StorefrontProvider` and consumed by hooks
/// like `use_menu` and `use_brand_text`. It owns the shop-name cache and
/// the seams to the host application: the session signal coming in, the
/// sign-out callback going out.
#[derive(Clone)]
pub struct StorefrontContext {
    /// Current session snapshot maintained by the host's authentication layer
    pub session: Signal<Option<Session>>,
    /// Token-keyed state of the shop-name lookup
    shop_names: RwSignal<ShopNameCache>,
    /// Client for the shop backend; `None` when configuration failed
    api: Option<ShopApi>,
    /// Function handing the post-logout redirect target to the host
    sign_out: Arc<dyn Fn(&str) + Send + Sync>,
}

impl StorefrontContext {
    /// Create a new StorefrontContext.
    ///
    /// This is typically called by `StorefrontProvider`, not by user code.
    pub fn new(
        session: Signal<Option<Session>>,
        api: Option<ShopApi>,
        sign_out: Arc<dyn Fn(&str) + Send + Sync>,
    ) -> Self {
        Self {
            session,
            shop_names: RwSignal::new(ShopNameCache::new()),
            api,
            sign_out,
        }
    }

    /// The lookup state for the current session's token.
    ///
    /// Reactive: reads both the session and the cache, so callers inside
    /// `Signal::derive` re-run when either changes.
    pub fn shop_name_state(&self) -> QueryState<ShopInfo> {
        let session = self.session.get();
        let token = session.as_ref().and_then(|s| s.access_token());
        self.shop_names.with(|cache| cache.state(token))
    }

    /// Drives the shop-name lookup for the current token.
    ///
    /// Safe to call on every session change: without a token nothing
    /// happens, and a token whose slot is already claimed or settled is
    /// left alone. Reads are untracked; the provider's effect decides when
    /// to re-run this.
    pub fn ensure_shop_name(&self) {
        let token = self
            .session
            .get_untracked()
            .as_ref()
            .and_then(|s| s.access_token().map(str::to_owned));
        let Some(token) = token else {
            // Signed out (or no credential): the state maps to the
            // fallback without any request
            return;
        };

        let claimed = self
            .shop_names
            .try_update(|cache| cache.begin(&token))
            .unwrap_or(false);
        if !claimed {
            return;
        }

        let Some(api) = self.api.clone() else {
            #[cfg(target_arch = "wasm32")]
            leptos::logging::error!(
                "[StorefrontProvider] shop API not configured; brand falls back"
            );
            self.shop_names.try_update(|cache| cache.fail(&token));
            return;
        };

        let shop_names = self.shop_names;
        spawn_local(async move {
            match api.fetch_my_shop(&token).await {
                Ok(info) => {
                    #[cfg(target_arch = "wasm32")]
                    leptos::logging::log!(
                        "[StorefrontProvider] shop lookup resolved: {:?}",
                        info.display_name()
                    );
                    shop_names.try_update(|cache| cache.succeed(&token, info));
                }
                Err(_e) => {
                    #[cfg(target_arch = "wasm32")]
                    leptos::logging::warn!("[StorefrontProvider] shop lookup failed: {}", _e);
                    shop_names.try_update(|cache| cache.fail(&token));
                }
            }
        });
    }

    /// Hands control to the host's sign-out flow.
    ///
    /// Fire-and-forget: the host performs the actual sign-out and redirect
    /// to the site root; nothing here changes until it swaps the session.
    pub fn sign_out(&self) {
        (self.sign_out)(SITE_ROOT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use shopfront_common::Role;

    fn noop_sign_out() -> Arc<dyn Fn(&str) + Send + Sync> {
        Arc::new(|_| {})
    }

    #[test]
    fn test_sign_out_delegates_once_with_the_site_root() {
        let calls = Arc::new(Mutex::new(Vec::<String>::new()));
        let recorded = calls.clone();

        let ctx = StorefrontContext::new(
            RwSignal::new(None::<Session>).into(),
            None,
            Arc::new(move |target: &str| recorded.lock().unwrap().push(target.to_owned())),
        );
        ctx.sign_out();

        assert_eq!(calls.lock().unwrap().as_slice(), &[SITE_ROOT.to_owned()]);
    }

    #[test]
    fn test_no_token_never_claims_a_lookup() {
        let roleless = Session {
            role: Some("employee".into()),
            access_token: None,
        };
        let ctx = StorefrontContext::new(
            RwSignal::new(Some(roleless)).into(),
            None,
            noop_sign_out(),
        );
        ctx.ensure_shop_name();

        // Cache untouched: no slot was claimed for a missing credential
        assert_eq!(ctx.shop_names.get_untracked(), ShopNameCache::new());
    }

    #[test]
    fn test_unconfigured_api_settles_the_slot_as_failed() {
        let session = Session::signed_in(Role::Employee, "tok");
        let ctx = StorefrontContext::new(
            RwSignal::new(Some(session)).into(),
            None,
            noop_sign_out(),
        );
        ctx.ensure_shop_name();

        let state = ctx.shop_names.get_untracked().state(Some("tok"));
        assert!(state.is_error());
    }
}
