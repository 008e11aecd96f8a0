//! Routed pages.

pub mod billing;
pub mod customers;
pub mod dashboard;
pub mod login;
pub mod register;

pub use billing::BillingPage;
pub use customers::CustomersPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use register::RegisterPage;
