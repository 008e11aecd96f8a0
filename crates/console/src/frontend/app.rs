//! Application root: session context and routing.

use leptos::*;
use leptos_router::*;

use crmpro_session::{BrowserStore, Session};

use crate::frontend::layout::{AuthLayout, MainLayout};
use crate::frontend::pages::{BillingPage, CustomersPage, DashboardPage, LoginPage, RegisterPage};
use crate::frontend::toast::ToastProvider;

/// Reactive handle to the one session every view reads.
pub type SessionSignal = RwSignal<Session<BrowserStore>>;

/// Main application component.
///
/// The session is restored from browser storage once at startup and shared
/// through context. Anything not matching a known route lands on the
/// dashboard; the authenticated layout then bounces visitors without a
/// session to the login screen.
#[component]
pub fn App() -> impl IntoView {
    let session: SessionSignal = create_rw_signal(Session::load(BrowserStore::new()));
    provide_context(session);

    view! {
        <Router>
            <ToastProvider>
                <Routes>
                    <Route path="/" view=MainLayout>
                        <Route path="dashboard" view=DashboardPage/>
                        <Route path="customers" view=CustomersPage/>
                        <Route path="billing" view=BillingPage/>
                        <Route path="" view=ToDashboard/>
                    </Route>
                    <Route path="/" view=AuthLayout>
                        <Route path="login" view=LoginPage/>
                        <Route path="register" view=RegisterPage/>
                    </Route>
                    <Route path="/*any" view=ToDashboard/>
                </Routes>
            </ToastProvider>
        </Router>
    }
}

#[component]
fn ToDashboard() -> impl IntoView {
    view! { <Redirect path="/dashboard"/> }
}
