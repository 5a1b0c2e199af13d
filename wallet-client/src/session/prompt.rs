//! Sign-in prompt signal.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Which form the authentication prompt opens on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Application-level request to show the authentication prompt.
pub trait AuthPrompt: Send + Sync {
    fn open(&self, mode: AuthMode);
}

/// Authentication modal state, observable by the UI loop.
///
/// `open` is idempotent: opening an already open modal in the same mode
/// does not notify subscribers again.
#[derive(Debug)]
pub struct AuthModal {
    state: watch::Sender<Option<AuthMode>>,
}

impl Default for AuthModal {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthModal {
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self { state }
    }

    pub fn close(&self) {
        self.state.send_if_modified(|current| current.take().is_some());
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Mode the modal is open in, `None` when closed.
    pub fn mode(&self) -> Option<AuthMode> {
        *self.state.borrow()
    }

    /// Receiver that wakes whenever the modal opens, closes, or switches mode.
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthMode>> {
        self.state.subscribe()
    }
}

impl AuthPrompt for AuthModal {
    fn open(&self, mode: AuthMode) {
        let changed = self.state.send_if_modified(|current| {
            if *current == Some(mode) {
                false
            } else {
                *current = Some(mode);
                true
            }
        });
        if changed {
            tracing::debug!(?mode, "Auth prompt opened");
        }
    }
}
