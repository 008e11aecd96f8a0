//! Login page.

use leptos::*;
use leptos_router::{A, use_navigate};

use crmpro_client::{AuthClient, LoginRequest, api_base};

use crate::form::LoginForm;
use crate::frontend::app::SessionSignal;
use crate::frontend::toast::use_toasts;

/// On success the returned token is stored and the user lands on the
/// dashboard. A token the console cannot decode is discarded instead of
/// stored; the navigation still fires, and the dashboard guard bounces
/// straight back here.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let form = create_rw_signal(LoginForm::default());
    let busy = create_rw_signal(false);

    let submit = move || {
        if busy.get_untracked() || !form.with_untracked(|f| f.is_valid()) {
            return;
        }

        busy.set(true);
        let navigate = navigate.clone();
        let credentials = form.get_untracked();
        spawn_local(async move {
            let auth = AuthClient::new(api_base());
            let request = LoginRequest {
                username: credentials.username.trim().to_string(),
                password: credentials.password,
            };
            match auth.login(&request).await {
                Ok(response) => {
                    session.update(|s| {
                        if let Err(err) = s.set_token(&response.token) {
                            tracing::warn!(%err, "login returned an unusable token");
                        }
                    });
                    navigate("/dashboard", Default::default());
                }
                Err(err) => {
                    tracing::warn!(%err, "login failed");
                    toasts.error("Login failed: Invalid credentials");
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=move |ev| {
            ev.prevent_default();
            submit();
        }>
            <h1>"Login to CRM"</h1>
            <label class="field">
                "Username"
                <input
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
            </label>
            <label class="field">
                "Password"
                <input
                    type="password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
            </label>
            <button
                type="submit"
                class="primary"
                disabled=move || busy.get() || form.with(|f| !f.is_valid())
            >
                {move || if busy.get() { "Logging in..." } else { "Login" }}
            </button>
            <p class="auth-switch">
                "Don't have an account? " <A href="/register">"Register"</A>
            </p>
        </form>
    }
}
