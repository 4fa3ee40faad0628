//! Demo Authentication
//!
//! Sign-in checks the entered email and password against the demo
//! credential list from the app configuration. A successful sign-in yields
//! a `Session` that the UI keeps for the rest of the page session.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

pub const INVALID_CREDENTIALS: &str =
    "Invalid email or password. Please check your credentials and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Manager,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Manager => "Manager",
            Role::User => "User",
        }
    }

    /// Create, edit and delete invoices, receipts and templates
    pub fn can_manage_records(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl Session {
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

/// Match `email`/`password` against `credentials`; `now_millis` seeds the token
pub fn authenticate(
    credentials: &[Credential],
    email: &str,
    password: &str,
    now_millis: i64,
) -> DomainResult<Session> {
    let email = email.trim();
    let credential = credentials
        .iter()
        .find(|c| c.email == email && c.password == password)
        .ok_or_else(|| DomainError::InvalidInput(INVALID_CREDENTIALS.to_string()))?;

    log::info!("signed in as {} ({})", credential.email, credential.role.as_str());
    Ok(Session {
        email: credential.email.clone(),
        role: credential.role,
        token: format!("mock-jwt-token-{}", now_millis),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Vec<Credential> {
        vec![
            Credential { email: "admin@blanqcrm.com".into(), password: "admin123".into(), role: Role::Admin },
            Credential { email: "user@blanqcrm.com".into(), password: "user123".into(), role: Role::User },
        ]
    }

    #[test]
    fn test_valid_login_issues_mock_token() {
        let session = authenticate(&credentials(), "user@blanqcrm.com", "user123", 1_725_000_000_000).unwrap();
        assert_eq!(session.role, Role::User);
        assert_eq!(session.token, "mock-jwt-token-1725000000000");
        assert_eq!(session.display_name(), "user");
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let err = authenticate(&credentials(), "admin@blanqcrm.com", "user123", 0).unwrap_err();
        assert_eq!(err, DomainError::InvalidInput(INVALID_CREDENTIALS.to_string()));
    }

    #[test]
    fn test_only_admin_manages_records() {
        assert!(Role::Admin.can_manage_records());
        assert!(!Role::Manager.can_manage_records());
        assert!(!Role::User.can_manage_records());
    }
}
