//! Billing page: read-only invoice list.

use leptos::*;

use crmpro_client::{BillingClient, api_base};

use crate::fmt;
use crate::frontend::app::SessionSignal;

#[component]
pub fn BillingPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();

    let invoices = create_resource(
        || (),
        move |_| async move {
            let billing = match session.with_untracked(|s| s.token()) {
                Some(token) => BillingClient::with_token(api_base(), token),
                None => BillingClient::new(api_base()),
            };
            billing.list().await.map_err(|err| {
                tracing::error!(%err, "failed to load invoices");
                err.to_string()
            })
        },
    );

    view! {
        <div class="page">
            <h1>"Billing"</h1>
            {move || {
                invoices.get().map(|result| match result {
                    Ok(invoices) => view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Invoice #"</th>
                                    <th>"Amount Due"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {invoices
                                    .iter()
                                    .map(|invoice| {
                                        let row_class = if invoice.is_unpaid() { "unpaid-row" } else { "" };
                                        view! {
                                            <tr class=row_class>
                                                <td>{invoice.invoice_number.clone()}</td>
                                                <td>{fmt::usd(invoice.amount_due)}</td>
                                                <td>
                                                    <span class=format!("chip chip-{}", invoice.status.indicator())>
                                                        {invoice.status.to_string()}
                                                    </span>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view(),
                    Err(_) => view! { <p class="error">"Error loading invoices"</p> }.into_view(),
                })
            }}
        </div>
    }
}
