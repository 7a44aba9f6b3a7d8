//! Ready-to-use components for storefront navigation.
//!
//! This module provides high-level components that wrap the hooks in
//! `hooks.rs` into complete UI elements.

use leptos::prelude::*;

use shopfront_common::{MenuAction, PRIMARY_LINKS, UserMenuVariant};

use crate::hooks::{use_brand_text, use_menu, use_sign_out};

/// A complete storefront navigation bar.
///
/// Wraps the navigation hooks into one element: the brand block (loading
/// placeholder, company name, or fallback), the public shop links, the
/// employee cart button, and the role-appropriate account dropdown. A
/// mobile drawer repeats the brand and links behind a toggle button.
///
/// Must be rendered inside a `StorefrontProvider`.
///
/// # Example
///
/// ```rust,ignore
/// use leptos::prelude::*;
/// use shopfront_client::{ShopNavbar, StorefrontProvider};
///
/// view! {
///     <StorefrontProvider api_url=api_url session=session on_sign_out=on_sign_out>
///         <ShopNavbar/>
///         <main>/* page content */</main>
///     </StorefrontProvider>
/// }
/// ```
#[component]
pub fn ShopNavbar() -> impl IntoView {
    let menu = use_menu();
    let brand = use_brand_text();

    let mobile_open = RwSignal::new(false);

    view! {
        <nav class="navbar">
            <div class="navbar-left">
                <button
                    class="btn btn-ghost navbar-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || mobile_open.get().to_string()
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    "\u{2630}"
                </button>
                <a href="/" class="navbar-brand">{brand}</a>
            </div>

            <div class="navbar-center">
                <div class="navbar-links">
                    {PRIMARY_LINKS
                        .iter()
                        .map(|link| view! {
                            <a href=link.href class="nav-link">{link.label}</a>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="navbar-right">
                <Show when=move || menu.get().show_cart>
                    <button class="btn btn-ghost cart-button" aria-label="Shopping Cart">
                        "Cart"
                        <span class="cart-badge">"0"</span>
                    </button>
                </Show>
                {move || menu.get().user_menu.map(|variant| view! { <UserMenu variant=variant/> })}
            </div>

            <Show when=move || mobile_open.get()>
                <div class="navbar-drawer">
                    <a href="/" class="navbar-brand">{brand}</a>
                    {PRIMARY_LINKS
                        .iter()
                        .map(|link| view! {
                            <a href=link.href class="nav-link">{link.label}</a>
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

/// Account dropdown for the signed-in user.
///
/// The entries come from [`UserMenuVariant::items`]; the sign-out entry
/// hands off through `use_sign_out`.
#[component]
fn UserMenu(
    /// Which item set to render
    variant: UserMenuVariant,
) -> impl IntoView {
    let sign_out = use_sign_out();
    let open = RwSignal::new(false);

    view! {
        <div class="user-menu">
            <button
                class="btn btn-ghost avatar-button"
                aria-label="User menu"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="avatar">"U"</span>
            </button>
            <Show when=move || open.get()>
                <ul class="dropdown">
                    {variant
                        .items()
                        .iter()
                        .map(|item| match item.action {
                            MenuAction::Navigate(href) => view! {
                                <li>
                                    <a href=href class="dropdown-item">{item.label}</a>
                                </li>
                            }
                            .into_any(),
                            MenuAction::SignOut => {
                                let sign_out = sign_out.clone();
                                view! {
                                    <li>
                                        <button
                                            class="dropdown-item"
                                            on:click=move |_| sign_out()
                                        >
                                            {item.label}
                                        </button>
                                    </li>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
