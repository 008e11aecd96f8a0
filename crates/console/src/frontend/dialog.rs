//! Modal create/edit dialog for customers.

use leptos::*;

use crmpro_core::Customer;

use crate::form::CustomerForm;

/// What the dialog is editing.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogState {
    /// The record being edited; `None` means the dialog creates a new one.
    pub base: Option<Customer>,
    pub form: CustomerForm,
}

impl DialogState {
    pub fn create() -> Self {
        Self {
            base: None,
            form: CustomerForm::default(),
        }
    }

    pub fn edit(customer: Customer) -> Self {
        Self {
            form: CustomerForm::from_customer(&customer),
            base: Some(customer),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.base.is_some() {
            "Edit Customer"
        } else {
            "Add Customer"
        }
    }
}

/// The dialog renders whenever `state` holds a draft. Save stays disabled
/// until the draft validates; Cancel discards the draft untouched.
#[component]
pub fn CustomerDialog(
    state: RwSignal<Option<DialogState>>,
    saving: RwSignal<bool>,
    #[prop(into)] on_save: Callback<DialogState>,
) -> impl IntoView {
    let invalid = move || state.with(|s| s.as_ref().is_none_or(|d| !d.form.is_valid()));

    view! {
        <Show when=move || state.with(|s| s.is_some())>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h2>{move || state.with(|s| s.as_ref().map(|d| d.title()).unwrap_or_default())}</h2>

                    <label class="field">
                        "Name"
                        <input
                            prop:value=move || {
                                state.with(|s| s.as_ref().map(|d| d.form.name.clone()).unwrap_or_default())
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| {
                                    if let Some(dialog) = s {
                                        dialog.form.name = value;
                                    }
                                });
                            }
                        />
                    </label>
                    {move || {
                        state
                            .with(|s| s.as_ref().and_then(|d| d.form.name_error()))
                            .map(|message| view! { <p class="field-error">{message}</p> })
                    }}

                    <label class="field">
                        "Email"
                        <input
                            prop:value=move || {
                                state.with(|s| s.as_ref().map(|d| d.form.email.clone()).unwrap_or_default())
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| {
                                    if let Some(dialog) = s {
                                        dialog.form.email = value;
                                    }
                                });
                            }
                        />
                    </label>
                    {move || {
                        state
                            .with(|s| s.as_ref().and_then(|d| d.form.email_error()))
                            .map(|message| view! { <p class="field-error">{message}</p> })
                    }}

                    <label class="field">
                        "Phone"
                        <input
                            prop:value=move || {
                                state.with(|s| s.as_ref().map(|d| d.form.phone.clone()).unwrap_or_default())
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| {
                                    if let Some(dialog) = s {
                                        dialog.form.phone = value;
                                    }
                                });
                            }
                        />
                    </label>

                    <div class="dialog-actions">
                        <button on:click=move |_| state.set(None)>"Cancel"</button>
                        <button
                            class="primary"
                            disabled=move || saving.get() || invalid()
                            on:click=move |_| {
                                if let Some(dialog) = state.get_untracked() {
                                    on_save.call(dialog);
                                }
                            }
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
