//! Application Context
//!
//! Shared state provided via Leptos Context API.

use blanq_core::auth::{authenticate, Role, Session};
use blanq_core::domain::DomainResult;
use blanq_core::AppConfig;
use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in session, `None` until login - read
    pub session: ReadSignal<Option<Session>>,
    /// Signed-in session - write
    set_session: WriteSignal<Option<Session>>,
    /// Bundled configuration
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(
        session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>),
        config: AppConfig,
    ) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
            config: StoredValue::new(config),
        }
    }

    /// Read a value out of the configuration
    pub fn with_config<R>(&self, f: impl FnOnce(&AppConfig) -> R) -> R {
        self.config.with_value(f)
    }

    /// Check credentials and start a session
    pub fn sign_in(&self, email: &str, password: &str) -> DomainResult<Session> {
        let now = chrono::Utc::now().timestamp_millis();
        let session = self.config.with_value(|c| authenticate(&c.auth.credentials, email, password, now))?;
        self.set_session.set(Some(session.clone()));
        Ok(session)
    }

    pub fn sign_out(&self) {
        if let Some(session) = self.session.get_untracked() {
            log::info!("signed out {}", session.email);
        }
        self.set_session.set(None);
    }

    /// Role of the current user; the dashboard opens as admin before login
    pub fn role(&self) -> Role {
        self.session.get().map(|s| s.role).unwrap_or_default()
    }

    /// Whether the user may create, edit and delete finance and template records
    pub fn can_manage(&self) -> bool {
        self.role().can_manage_records()
    }
}
