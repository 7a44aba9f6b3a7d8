use leptos::prelude::*;

use shopfront_common::{MenuDescriptor, QueryState, Session, ShopInfo};

use crate::context::StorefrontContext;

/// Hook to access the storefront context directly.
///
/// Most components want one of the narrower hooks below; this one is the
/// escape hatch for code that needs several pieces at once.
///
/// # Panics
///
/// Panics if called outside of a `StorefrontProvider` context.
pub fn use_storefront() -> StorefrontContext {
    expect_context::<StorefrontContext>()
}

/// Hook to read the current session snapshot.
///
/// # Panics
///
/// Panics if called outside of a `StorefrontProvider` context.
pub fn use_session() -> Signal<Option<Session>> {
    use_storefront().session
}

/// Hook deriving what the navigation should expose for the current session.
///
/// The descriptor re-derives whenever the session changes; role checks
/// never need to appear in view code.
///
/// # Panics
///
/// Panics if called outside of a `StorefrontProvider` context.
///
/// # Example
///
/// ```rust,ignore
/// use leptos::prelude::*;
/// use shopfront_client::use_menu;
///
/// #[component]
/// fn CartButton() -> impl IntoView {
///     let menu = use_menu();
///
///     view! {
///         <Show when=move || menu.get().show_cart>
///             <button aria-label="Shopping Cart">"Cart"</button>
///         </Show>
///     }
/// }
/// ```
pub fn use_menu() -> Signal<MenuDescriptor> {
    let ctx = use_storefront();
    Signal::derive(move || MenuDescriptor::from_session(ctx.session.get().as_ref()))
}

/// Hook to watch the shop-name lookup for the current session.
///
/// The state is `Loading` until the request settles, `Error` on failure or
/// when nobody is signed in, and `Ready` with the payload otherwise. The
/// lookup itself is driven by the provider; watching it here issues no
/// requests.
///
/// # Panics
///
/// Panics if called outside of a `StorefrontProvider` context.
pub fn use_shop_name() -> Signal<QueryState<ShopInfo>> {
    let ctx = use_storefront();
    Signal::derive(move || ctx.shop_name_state())
}

/// Hook producing the brand text the navbar shows.
///
/// This is the display mapping of [`use_shop_name`]: the loading
/// placeholder, the company name, or the generic fallback.
///
/// # Panics
///
/// Panics if called outside of a `StorefrontProvider` context.
pub fn use_brand_text() -> Signal<String> {
    let state = use_shop_name();
    Signal::derive(move || state.get().brand_text().to_owned())
}

/// Hook returning a sign-out trigger.
///
/// Calling the returned function hands the post-logout redirect target to
/// the host's authentication layer exactly once per call.
///
/// # Panics
///
/// Panics if called outside of a `StorefrontProvider` context.
///
/// # Example
///
/// ```rust,ignore
/// use leptos::prelude::*;
/// use shopfront_client::use_sign_out;
///
/// #[component]
/// fn LogOutButton() -> impl IntoView {
///     let sign_out = use_sign_out();
///
///     view! {
///         <button on:click=move |_| sign_out()>"Log out"</button>
///     }
/// }
/// ```
pub fn use_sign_out() -> impl Fn() + Clone {
    let ctx = use_storefront();
    move || ctx.sign_out()
}
