//! Tenant registration page.

use leptos::*;
use leptos_router::{A, use_navigate};

use crmpro_client::{AuthClient, RegisterRequest, api_base};

use crate::form::RegisterForm;
use crate::frontend::toast::use_toasts;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();

    let form = create_rw_signal(RegisterForm::default());
    let busy = create_rw_signal(false);

    let submit = move || {
        if busy.get_untracked() || !form.with_untracked(|f| f.is_valid()) {
            return;
        }

        busy.set(true);
        let navigate = navigate.clone();
        let draft = form.get_untracked();
        spawn_local(async move {
            let auth = AuthClient::new(api_base());
            let request = RegisterRequest {
                tenant_name: draft.tenant_name.trim().to_string(),
                username: draft.username.trim().to_string(),
                password: draft.password,
            };
            match auth.register(&request).await {
                Ok(()) => {
                    toasts.success("Registration successful! Please login.");
                    navigate("/login", Default::default());
                }
                Err(err) => {
                    tracing::warn!(%err, "registration failed");
                    toasts.error("Registration failed.");
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
            <h1>"Register Tenant"</h1>
            <label class="field">
                "Tenant Name"
                <input
                    prop:value=move || form.with(|f| f.tenant_name.clone())
                    on:input=move |ev| form.update(|f| f.tenant_name = event_target_value(&ev))
                />
            </label>
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
                {move || if busy.get() { "Registering..." } else { "Register" }}
            </button>
            <p class="auth-switch">
                "Already have an account? " <A href="/login">"Login"</A>
            </p>
        </form>
    }
}
