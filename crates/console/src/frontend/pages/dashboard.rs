//! Dashboard landing page.

use leptos::*;

/// Static KPI cards. The numbers are placeholders until the reporting
/// endpoints exist.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Dashboard"</h1>
            <div class="kpi-grid">
                <div class="kpi-card">
                    <div class="kpi-value">"1,234"</div>
                    <div class="kpi-label">"Total Users"</div>
                </div>
                <div class="kpi-card">
                    <div class="kpi-value">"$50,000"</div>
                    <div class="kpi-label">"Total Revenue"</div>
                </div>
                <div class="kpi-card">
                    <div class="kpi-value">"99.9%"</div>
                    <div class="kpi-label">"System Status"</div>
                </div>
            </div>
        </div>
    }
}
