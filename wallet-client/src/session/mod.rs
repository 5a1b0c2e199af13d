//! # Session State
//!
//! Authentication state read by the gateway on every call.
//!
//! The gateway never reaches for a global: it is handed an
//! `Arc<dyn SessionProvider>` and an `Arc<dyn AuthPrompt>` at construction.
//! [`SessionStore`] and [`AuthModal`] are the in-process implementations the
//! application wires in; tests substitute their own.

mod prompt;

pub use prompt::{AuthMode, AuthModal, AuthPrompt};

use parking_lot::RwLock;
use shared::UserInfo;

/// Credentials of the signed-in user.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Bearer token sent as `Authorization: Bearer <jwt>`.
    pub jwt: String,
    pub user: Option<UserInfo>,
}

impl AuthSession {
    pub fn new(jwt: impl Into<String>) -> Self {
        Self {
            jwt: jwt.into(),
            user: None,
        }
    }

    pub fn with_user(mut self, user: UserInfo) -> Self {
        self.user = Some(user);
        self
    }
}

// Tokens must never reach the logs.
impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("jwt", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// Source of the current authentication state.
pub trait SessionProvider: Send + Sync {
    /// Current session, `None` when signed out.
    fn auth(&self) -> Option<AuthSession>;

    /// Replace the current session; `None` signs out.
    fn set_auth(&self, auth: Option<AuthSession>);
}

/// In-memory session holder shared by every screen of the running process.
#[derive(Debug, Default)]
pub struct SessionStore {
    auth: RwLock<Option<AuthSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(session: AuthSession) -> Self {
        Self {
            auth: RwLock::new(Some(session)),
        }
    }

    pub fn sign_in(&self, session: AuthSession) {
        tracing::info!(has_user = session.user.is_some(), "Session established");
        *self.auth.write() = Some(session);
    }

    pub fn sign_out(&self) {
        if self.auth.write().take().is_some() {
            tracing::info!("Session cleared");
        }
    }

    pub fn token(&self) -> Option<String> {
        self.auth.read().as_ref().map(|a| a.jwt.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth.read().is_some()
    }
}

impl SessionProvider for SessionStore {
    fn auth(&self) -> Option<AuthSession> {
        self.auth.read().clone()
    }

    fn set_auth(&self, auth: Option<AuthSession>) {
        match auth {
            Some(session) => self.sign_in(session),
            None => self.sign_out(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_and_out() {
        let store = SessionStore::new();
        assert!(!store.is_signed_in());
        assert_eq!(store.token(), None);

        store.sign_in(AuthSession::new("jwt-1"));
        assert_eq!(store.token().as_deref(), Some("jwt-1"));

        store.set_auth(None);
        assert!(store.auth().is_none());
    }

    #[test]
    fn debug_output_redacts_token() {
        let session = AuthSession::new("super-secret");
        let printed = format!("{:?}", session);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("redacted"));
    }
}
