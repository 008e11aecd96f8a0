//! Form drafts behind the dialogs and auth screens.
//!
//! A draft holds exactly the fields its form edits. Validation feeds two
//! places in the view: inline error text under a field, and the disabled
//! state of the submit button.

use crmpro_core::{Customer, DomainResult, validate};

/// Draft behind the customer create/edit dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl CustomerForm {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
        }
    }

    /// Inline error for the name field.
    pub fn name_error(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("Name is required")
        } else {
            None
        }
    }

    /// Inline error for the email field.
    pub fn email_error(&self) -> Option<&'static str> {
        let email = self.email.trim();
        if email.is_empty() {
            Some("Email is required")
        } else if !email.contains('@') {
            Some("Please enter a valid email")
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.name_error().is_none() && self.email_error().is_none()
    }

    /// Validate the draft and merge it into `base`. The id and the fields
    /// the dialog does not edit survive unchanged.
    pub fn apply_to(&self, base: &Customer) -> DomainResult<Customer> {
        let name = validate::required("name", &self.name)?;
        let email = validate::email("email", &self.email)?;
        let phone = self.phone.trim();

        Ok(Customer {
            name,
            email,
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            ..base.clone()
        })
    }
}

/// Draft behind the login form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn is_valid(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

/// Draft behind the tenant registration form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub tenant_name: String,
    pub username: String,
    pub password: String,
}

impl RegisterForm {
    pub fn is_valid(&self) -> bool {
        !self.tenant_name.trim().is_empty()
            && !self.username.trim().is_empty()
            && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crmpro_core::CustomerId;

    use super::*;

    fn saved_customer() -> Customer {
        Customer {
            id: Some(CustomerId::new(7)),
            name: "Acme Corp".to_string(),
            email: "ops@acme.example".to_string(),
            phone: Some("555-0100".to_string()),
            city: Some("Lisbon".to_string()),
            assigned_to_user_id: None,
            status: Some("Active".to_string()),
        }
    }

    #[test]
    fn blank_draft_reports_both_required_fields() {
        let form = CustomerForm::default();
        assert_eq!(form.name_error(), Some("Name is required"));
        assert_eq!(form.email_error(), Some("Email is required"));
        assert!(!form.is_valid());
    }

    #[test]
    fn email_without_an_at_sign_is_rejected() {
        let form = CustomerForm {
            name: "Acme".to_string(),
            email: "acme.example".to_string(),
            phone: String::new(),
        };
        assert_eq!(form.email_error(), Some("Please enter a valid email"));
        assert!(!form.is_valid());
    }

    #[test]
    fn apply_to_preserves_untouched_fields() {
        let base = saved_customer();
        let form = CustomerForm {
            name: "  Acme Holdings  ".to_string(),
            email: " billing@acme.example ".to_string(),
            phone: String::new(),
        };

        let merged = form.apply_to(&base).unwrap();
        assert_eq!(merged.id, Some(CustomerId::new(7)));
        assert_eq!(merged.name, "Acme Holdings");
        assert_eq!(merged.email, "billing@acme.example");
        assert_eq!(merged.phone, None);
        assert_eq!(merged.city.as_deref(), Some("Lisbon"));
        assert_eq!(merged.status.as_deref(), Some("Active"));
    }

    #[test]
    fn apply_to_rejects_an_invalid_draft() {
        let form = CustomerForm {
            name: "   ".to_string(),
            email: "ops@acme.example".to_string(),
            phone: String::new(),
        };
        assert!(form.apply_to(&Customer::default()).is_err());
    }

    #[test]
    fn from_customer_round_trips_the_edited_fields() {
        let base = saved_customer();
        let form = CustomerForm::from_customer(&base);
        assert!(form.is_valid());

        let merged = form.apply_to(&base).unwrap();
        assert_eq!(merged, base);
    }

    #[test]
    fn login_form_requires_both_fields() {
        let mut form = LoginForm::default();
        assert!(!form.is_valid());

        form.username = "alice".to_string();
        assert!(!form.is_valid());

        form.password = "s3cret".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn register_form_requires_all_three_fields() {
        let form = RegisterForm {
            tenant_name: "Acme".to_string(),
            username: "alice".to_string(),
            password: String::new(),
        };
        assert!(!form.is_valid());

        let form = RegisterForm {
            password: "s3cret".to_string(),
            ..form
        };
        assert!(form.is_valid());
    }
}
