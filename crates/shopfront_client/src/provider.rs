use std::sync::Arc;

use leptos::prelude::*;

use shopfront_common::Session;

use crate::api::ShopApi;
use crate::config::ApiConfig;
use crate::context::StorefrontContext;

/// Provider component that sets up the storefront context.
///
/// This component should wrap your application or the part of your
/// application that renders navigation. It validates the API configuration,
/// provides [`StorefrontContext`] to its children, and drives the shop-name
/// lookup whenever the session changes.
///
/// An unusable `api_url` does not block rendering: the lookup settles as
/// failed and the brand falls back.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use leptos::prelude::*;
/// use shopfront_client::{ShopNavbar, StorefrontProvider};
/// use shopfront_common::Session;
///
/// #[component]
/// pub fn App() -> impl IntoView {
///     let session = RwSignal::new(None::<Session>);
///
///     view! {
///         <StorefrontProvider
///             api_url="http://localhost:4000".to_string()
///             session=session
///             on_sign_out=Arc::new(|target: &str| {
///                 // hand off to the auth layer, then redirect to `target`
///             })
///         >
///             <ShopNavbar/>
///         </StorefrontProvider>
///     }
/// }
/// ```
#[component]
pub fn StorefrontProvider(
    /// Base URL of the shop backend API
    api_url: String,
    /// Session snapshot maintained by the host's authentication layer
    #[prop(into)]
    session: Signal<Option<Session>>,
    /// Called on sign-out with the post-logout redirect target
    on_sign_out: Arc<dyn Fn(&str) + Send + Sync>,
    /// Child components
    children: Children,
) -> impl IntoView {
    let api = match ApiConfig::new(&api_url).and_then(ShopApi::new) {
        Ok(api) => Some(api),
        Err(_e) => {
            #[cfg(target_arch = "wasm32")]
            leptos::logging::error!("[StorefrontProvider] unusable API base URL: {}", _e);
            None
        }
    };

    let ctx = StorefrontContext::new(session, api, on_sign_out);

    // Provide context to children early so hooks can use it
    provide_context(ctx.clone());

    // Drive the lookup; tracking the session re-runs this when the token
    // rotates, and the cache keeps repeat runs from refetching
    Effect::new(move || {
        let _ = ctx.session.get();
        ctx.ensure_shop_name();
    });

    // Render children
    children()
}
