//! Customers page.
//!
//! Fetches the whole collection once, then filters, sorts, and paginates
//! client-side. Create and edit go through the modal dialog; delete asks
//! for confirmation first. Every mutation refetches the list.

use leptos::*;

use crmpro_client::{CustomersClient, api_base};
use crmpro_core::Customer;

use crate::frontend::app::SessionSignal;
use crate::frontend::dialog::{CustomerDialog, DialogState};
use crate::frontend::toast::use_toasts;
use crate::table::{CustomerColumn, PAGE_SIZE_OPTIONS, SortDirection, TableState};

fn client(session: SessionSignal) -> CustomersClient {
    match session.with_untracked(|s| s.token()) {
        Some(token) => CustomersClient::with_token(api_base(), token),
        None => CustomersClient::new(api_base()),
    }
}

#[component]
pub fn CustomersPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let toasts = use_toasts();

    let table = create_rw_signal(TableState::<Customer>::new());
    let dialog = create_rw_signal(None::<DialogState>);
    let saving = create_rw_signal(false);

    let load = move || {
        let customers = client(session);
        spawn_local(async move {
            match customers.list().await {
                Ok(rows) => table.update(|t| t.set_rows(rows)),
                Err(err) => {
                    tracing::error!(%err, "failed to load customers");
                    toasts.error("Error loading customers");
                }
            }
        });
    };
    load();

    let on_save = move |dialog_state: DialogState| {
        let base = dialog_state.base.clone().unwrap_or_default();
        let merged = match dialog_state.form.apply_to(&base) {
            Ok(customer) => customer,
            Err(err) => {
                toasts.error(err.to_string());
                return;
            }
        };

        let customers = client(session);
        saving.set(true);
        spawn_local(async move {
            let outcome = match merged.id {
                Some(id) => customers
                    .update(id, &merged)
                    .await
                    .map(|_| "Customer updated successfully"),
                None => customers
                    .create(&merged)
                    .await
                    .map(|_| "Customer created successfully"),
            };
            match outcome {
                Ok(message) => {
                    toasts.success(message);
                    dialog.set(None);
                    load();
                }
                Err(err) => {
                    tracing::error!(%err, "failed to save customer");
                    toasts.error("Error saving customer");
                }
            }
            saving.set(false);
        });
    };

    let on_delete = move |customer: Customer| {
        let Some(id) = customer.id else { return };

        let message = format!("Are you sure you want to delete {}?", customer.name);
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message(&message).unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let customers = client(session);
        spawn_local(async move {
            match customers.delete(id).await {
                Ok(()) => {
                    toasts.success("Customer deleted");
                    load();
                }
                Err(err) => {
                    tracing::error!(%err, "failed to delete customer");
                    toasts.error("Error deleting customer");
                }
            }
        });
    };

    let marker = move |column: CustomerColumn| {
        table.with(|t| match t.sort() {
            Some(sort) if sort.column == column => match sort.direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            },
            _ => "",
        })
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Customers"</h1>
                <button class="primary" on:click=move |_| dialog.set(Some(DialogState::create()))>
                    "Add Customer"
                </button>
            </div>

            <input
                class="filter"
                placeholder="Filter"
                on:input=move |ev| {
                    let needle = event_target_value(&ev);
                    table.update(|t| t.set_filter(&needle));
                }
            />

            <table class="data-table">
                <thead>
                    <tr>
                        <th on:click=move |_| table.update(|t| t.toggle_sort(CustomerColumn::Name))>
                            "Name" {move || marker(CustomerColumn::Name)}
                        </th>
                        <th on:click=move |_| table.update(|t| t.toggle_sort(CustomerColumn::Email))>
                            "Email" {move || marker(CustomerColumn::Email)}
                        </th>
                        <th on:click=move |_| table.update(|t| t.toggle_sort(CustomerColumn::Status))>
                            "Status" {move || marker(CustomerColumn::Status)}
                        </th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = table.with(|t| t.page());
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="4" class="no-data">"No data matching the filter"</td>
                                </tr>
                            }
                            .into_view()
                        } else {
                            rows.into_iter()
                                .map(|customer| {
                                    let edit = customer.clone();
                                    let remove = customer.clone();
                                    view! {
                                        <tr>
                                            <td>{customer.name.clone()}</td>
                                            <td>{customer.email.clone()}</td>
                                            <td>
                                                <span class=format!("chip chip-{}", customer.status_indicator())>
                                                    {customer.display_status().to_string()}
                                                </span>
                                            </td>
                                            <td class="actions">
                                                <button on:click=move |_| {
                                                    dialog.set(Some(DialogState::edit(edit.clone())))
                                                }>
                                                    "Edit"
                                                </button>
                                                <button class="danger" on:click=move |_| on_delete(remove.clone())>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }
                    }}
                </tbody>
            </table>

            <div class="paginator">
                <label>
                    "Items per page:"
                    <select on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            table.update(|t| t.set_page_size(size));
                        }
                    }>
                        {PAGE_SIZE_OPTIONS
                            .iter()
                            .map(|&size| {
                                view! {
                                    <option
                                        value=size.to_string()
                                        selected=move || table.with(|t| t.page_size() == size)
                                    >
                                        {size.to_string()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <span class="range">{move || table.with(|t| t.range_label())}</span>
                <button
                    disabled=move || table.with(|t| !t.has_prev_page())
                    on:click=move |_| table.update(|t| t.prev_page())
                >
                    "‹"
                </button>
                <button
                    disabled=move || table.with(|t| !t.has_next_page())
                    on:click=move |_| table.update(|t| t.next_page())
                >
                    "›"
                </button>
            </div>

            <CustomerDialog state=dialog saving=saving on_save=on_save/>
        </div>
    }
}
