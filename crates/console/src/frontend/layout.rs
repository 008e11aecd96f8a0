//! Layout shells: the authenticated console chrome and the auth screens.

use leptos::*;
use leptos_router::*;

use crmpro_session::roles;

use crate::frontend::app::SessionSignal;

/// Chrome around every authenticated page. Visitors without a session are
/// sent to the login screen; a logout mid-visit trips the same guard.
#[component]
pub fn MainLayout() -> impl IntoView {
    let session = expect_context::<SessionSignal>();

    view! {
        <Show
            when=move || session.with(|s| s.is_authenticated())
            fallback=|| view! { <Redirect path="/login"/> }
        >
            <Shell/>
        </Show>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();

    let is_admin = move || session.with(|s| s.has_role(roles::ADMIN));
    let tenant = move || session.with(|s| s.tenant_name());
    let user = move || session.with(|s| s.user_name());

    let logout = move |_| {
        session.update(|s| s.clear());
        navigate("/login", Default::default());
    };

    view! {
        <div class="shell">
            <nav class="sidenav">
                <div class="sidenav-title">"CRM Pro"</div>
                <A href="/dashboard">"Dashboard"</A>
                <A href="/customers">"Customers"</A>
                <Show when=is_admin>
                    <A href="/billing">"Billing"</A>
                </Show>
            </nav>
            <div class="content">
                <header class="toolbar">
                    <span class="tenant">{tenant}</span>
                    <div class="user-menu">
                        <span class="user">{user}</span>
                        <button class="link" on:click=logout>"Logout"</button>
                    </div>
                </header>
                <main>
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}

/// Centered card wrapper for the login and registration screens.
#[component]
pub fn AuthLayout() -> impl IntoView {
    view! {
        <div class="auth-shell">
            <div class="auth-card">
                <Outlet/>
            </div>
        </div>
    }
}
