//! Session context for the signed-in user.
//!
//! An explicit handle passed to whatever layer issues authenticated
//! requests. Clones share the same underlying state.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// The user a session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User ID.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
}

#[derive(Debug, Default)]
struct SessionState {
    user: Option<SessionUser>,
    token: Option<String>,
    signed_in_at: Option<DateTime<Utc>>,
}

/// Shared, cloneable session holder with `get`/`set`/`clear`.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    state: Arc<RwLock<SessionState>>,
}

impl SessionContext {
    /// Creates an empty (signed-out) session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current user, if any.
    #[must_use]
    pub fn get(&self) -> Option<SessionUser> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user
            .clone()
    }

    /// Stores the signed-in user.
    pub fn set(&self, user: SessionUser) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(user_id = %user.id, "Session user set");
        state.user = Some(user);
        state.signed_in_at = Some(Utc::now());
    }

    /// Returns the bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    /// Stores the bearer token used by the request layer.
    pub fn set_token(&self, token: impl Into<String>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .token = Some(token.into());
    }

    /// When the current user was set.
    #[must_use]
    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .signed_in_at
    }

    /// Returns true if both a user and a token are present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.user.is_some() && state.token.is_some()
    }

    /// Signs out: drops user and token.
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = SessionState::default();
        tracing::debug!("Session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: UserId::generate(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = SessionContext::new();
        assert!(session.get().is_none());
        assert!(session.token().is_none());
        assert!(session.signed_in_at().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_set_and_get_user() {
        let session = SessionContext::new();
        let user = user();
        session.set(user.clone());
        assert_eq!(session.get(), Some(user));
        assert!(session.signed_in_at().is_some());
        assert!(!session.is_authenticated());

        session.set_token("token-123");
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("token-123"));
    }

    #[test]
    fn test_clones_share_state() {
        let session = SessionContext::new();
        let handle = session.clone();
        handle.set(user());
        handle.set_token("abc");
        assert!(session.is_authenticated());

        session.clear();
        assert!(handle.get().is_none());
        assert!(handle.token().is_none());
    }
}
