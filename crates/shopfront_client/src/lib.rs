//! # Shopfront Client
//!
//! Reactive storefront navigation for Leptos applications.
//!
//! This library derives what the navigation should show from the session
//! supplied by the host's authentication layer, fetches and caches the
//! shop's display name keyed by the session's access token, and hands
//! sign-out back to the host with the right redirect target.
//!
//! ## Features
//!
//! - **Session-Derived Menus**: cart and account dropdown visibility come
//!   from the session's role, never from view code
//! - **Keyed Shop Lookup**: one request per access token, cached for the
//!   lifetime of the page; token rotation refetches, stale responses stay
//!   in their own slot
//! - **Never Blocks the Page**: configuration or request failures settle
//!   the brand to a fallback instead of surfacing errors
//! - **Injected Seams**: the session comes in as a signal, sign-out goes
//!   out as a callback; nothing here owns authentication
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use leptos::prelude::*;
//! use shopfront_client::{ShopNavbar, StorefrontProvider};
//! use shopfront_common::Session;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let session = RwSignal::new(None::<Session>);
//!
//!     view! {
//!         <StorefrontProvider
//!             api_url="http://localhost:4000".to_string()
//!             session=session
//!             on_sign_out=Arc::new(|target: &str| {
//!                 // hand off to the auth layer; it redirects to `target`
//!             })
//!         >
//!             <ShopNavbar/>
//!         </StorefrontProvider>
//!     }
//! }
//! ```

// Module declarations
mod api;
mod components;
mod config;
mod context;
mod error;
mod hooks;
mod provider;

// Re-exports
pub use api::ShopApi;
pub use components::ShopNavbar;
pub use config::{API_URL_ENV, ApiConfig};
pub use context::{SITE_ROOT, StorefrontContext};
pub use error::ShopApiError;
pub use hooks::{
    use_brand_text, use_menu, use_session, use_shop_name, use_sign_out, use_storefront,
};
pub use provider::StorefrontProvider;

// Re-export the domain types hooks hand out, so applications rarely need a
// direct shopfront_common dependency
pub use shopfront_common::{
    BRAND_FALLBACK, BRAND_LOADING, MenuAction, MenuDescriptor, NavLink, PRIMARY_LINKS, QueryState,
    Role, Session, ShopInfo, UserMenuItem, UserMenuVariant,
};
