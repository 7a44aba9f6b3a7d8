use std::sync::Arc;

use leptos::prelude::*;

use shopfront_client::{ShopNavbar, StorefrontProvider};
use shopfront_common::{Role, Session};

/// Backend the demo points at; run the shop API locally on this port.
const API_URL: &str = "http://localhost:4000";

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let session = RwSignal::new(None::<Session>);

    // The navbar hands the redirect target back; a real host would run its
    // auth layer's sign-out and then navigate there
    let on_sign_out: Arc<dyn Fn(&str) + Send + Sync> = Arc::new(move |target: &str| {
        log::info!("sign-out requested, redirect target: {target}");
        session.set(None);
    });

    let sign_in_employee =
        move |_| session.set(Some(Session::signed_in(Role::Employee, "employee-token")));
    let sign_in_admin =
        move |_| session.set(Some(Session::signed_in(Role::CompanyAdmin, "admin-token")));
    let sign_in_unknown = move |_| {
        session.set(Some(Session {
            role: Some("auditor".into()),
            access_token: Some("auditor-token".into()),
        }))
    };
    let clear_session = move |_| session.set(None);

    let current_role = move || match session.get() {
        Some(s) => s.role.unwrap_or_else(|| "(no role)".to_string()),
        None => "signed out".to_string(),
    };

    view! {
        <div class="app-container">
            <h1>"Shopfront Navigation Demo"</h1>
            <p class="subtitle">{format!("Backend: {API_URL}")}</p>

            <div class="session-panel">
                <span class="status-label">"Session:"</span>
                <span class="status-value">{current_role}</span>
                <button on:click=sign_in_employee>"Sign in as employee"</button>
                <button on:click=sign_in_admin>"Sign in as admin"</button>
                <button on:click=sign_in_unknown>"Sign in with unknown role"</button>
                <button on:click=clear_session>"Clear session"</button>
            </div>

            <StorefrontProvider
                api_url=API_URL.to_string()
                session=session
                on_sign_out=on_sign_out
            >
                <ShopNavbar/>
            </StorefrontProvider>
        </div>
    }
}
