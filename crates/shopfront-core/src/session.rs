//! Session credential held by the client.
//!
//! The bearer token lives in an explicitly constructed [`SessionContext`] that
//! is shared by cloning. Everything that needs the token (the request
//! interceptor, the auth service, the host application) holds a clone of the
//! same context.

use std::sync::{Arc, RwLock};
use tokio::sync::watch;

/// Token values that upstream serialization bugs produce and that must be
/// treated as "no token".
const SENTINEL_TOKENS: [&str; 2] = ["null", "undefined"];

/// Observable authentication state of a [`SessionContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Returns the token if it is usable as a bearer credential.
///
/// Empty, whitespace-only and the literal strings `"null"` / `"undefined"` are
/// all rejected.
pub fn usable_token(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || SENTINEL_TOKENS.contains(&trimmed) {
        None
    } else {
        Some(trimmed)
    }
}

struct Inner {
    token: RwLock<Option<String>>,
    state: watch::Sender<SessionState>,
}

/// Shared handle to the current session credential.
///
/// Cloning is cheap; all clones observe the same token.
#[derive(Clone)]
pub struct SessionContext {
    inner: Arc<Inner>,
}

impl SessionContext {
    /// Creates an anonymous session.
    pub fn new() -> Self {
        let (state, _) = watch::channel(SessionState::Anonymous);
        Self {
            inner: Arc::new(Inner {
                token: RwLock::new(None),
                state,
            }),
        }
    }

    /// Creates a session that already holds `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    /// Stores a credential after login or an OAuth callback.
    ///
    /// Returns `false` and leaves the session anonymous when the value is not a
    /// usable token.
    pub fn set_token(&self, token: impl Into<String>) -> bool {
        let token = token.into();
        let Some(token) = usable_token(&token).map(str::to_string) else {
            tracing::warn!("[Session] Rejected unusable token value");
            self.clear();
            return false;
        };

        {
            let mut guard = self.inner.token.write().unwrap_or_else(|e| e.into_inner());
            *guard = Some(token);
        }
        self.publish(SessionState::Authenticated);
        tracing::debug!("[Session] Credential stored");
        true
    }

    /// Returns the credential to attach to outgoing requests, if any.
    pub fn token(&self) -> Option<String> {
        let guard = self.inner.token.read().unwrap_or_else(|e| e.into_inner());
        guard
            .as_deref()
            .and_then(usable_token)
            .map(str::to_string)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Session teardown. Idempotent.
    ///
    /// Returns `true` only for the call that actually removed a credential, so
    /// concurrent failing requests produce a single teardown notification.
    pub fn clear(&self) -> bool {
        let removed = {
            let mut guard = self.inner.token.write().unwrap_or_else(|e| e.into_inner());
            guard.take().is_some()
        };
        self.publish(SessionState::Anonymous);
        if removed {
            tracing::info!("[Session] Credential cleared");
        }
        removed
    }

    pub fn state(&self) -> SessionState {
        *self.inner.state.borrow()
    }

    /// Subscribes to state transitions (e.g. to redirect to login on teardown).
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    fn publish(&self, next: SessionState) {
        self.inner.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token itself.
        f.debug_struct("SessionContext")
            .field("state", &self.state())
            .finish()
    }
}
