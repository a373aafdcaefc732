//! Sign-in state for clients that embed this crate.
//!
//! The server routes never read it. A client that wraps an identity-provider
//! library forwards the provider's user-loaded and user-unloaded events here,
//! and its views subscribe for changes instead of reading a global.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::config;

/// Signed-in user as reported by the identity provider
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub subject: String,
    pub name: Option<String>,
    pub access_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionUser {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(false, |exp| exp <= now)
    }
}

// Keep tokens out of logs
impl std::fmt::Debug for SessionUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionUser")
            .field("subject", &self.subject)
            .field("name", &self.name)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// No sign-in or sign-out event seen yet
    Pending,
    SignedIn(SessionUser),
    SignedOut,
}

impl SessionStatus {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionStatus::SignedIn(user) => Some(user),
            _ => None,
        }
    }
}

/// Current authentication state shared between consumers.
///
/// Clones share one state. New subscribers see the latest status straight
/// away and are woken on every sign-in or sign-out.
#[derive(Debug, Clone)]
pub struct SessionState {
    sender: Arc<watch::Sender<SessionStatus>>,
}

impl SessionState {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(SessionStatus::Pending);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Record a user reported by the identity provider
    pub fn user_loaded(&self, user: SessionUser) {
        if config::config().session.log_events {
            tracing::debug!("User loaded: {:?}", user);
        }
        self.sender.send_replace(SessionStatus::SignedIn(user));
    }

    /// Record that the identity provider dropped the user
    pub fn user_unloaded(&self) {
        if config::config().session.log_events {
            tracing::debug!("User unloaded");
        }
        self.sender.send_replace(SessionStatus::SignedOut);
    }

    pub fn status(&self) -> SessionStatus {
        self.sender.borrow().clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.sender.borrow().user().cloned()
    }

    pub fn user_available(&self) -> bool {
        self.sender.borrow().user().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.sender.subscribe()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
