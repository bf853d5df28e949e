/*
[INPUT]:  Login and userkey obtained from the service
[OUTPUT]: Session state retrieval and sign-in status
[POS]:    Auth layer - session lifecycle management
[UPDATE]: When adding session persistence or changing storage strategy
*/

use std::sync::{Arc, RwLock};

/// Stored session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub login: String,
    /// Absent when the session was resumed from a bare login and the userkey
    /// still has to be re-fetched
    pub userkey: Option<String>,
}

/// Thread-safe user session manager
#[derive(Debug, Clone, Default)]
pub struct Session {
    data: Arc<RwLock<Option<SessionData>>>,
}

impl Session {
    /// Create a new empty session
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }

    /// Store a signed-in user
    pub fn sign_in(&self, login: impl Into<String>, userkey: impl Into<String>) {
        let mut guard = self.data.write().unwrap();
        *guard = Some(SessionData {
            login: login.into(),
            userkey: Some(userkey.into()),
        });
    }

    /// Store a login without a userkey; the next user operation re-logs in
    pub fn resume(&self, login: impl Into<String>) {
        let mut guard = self.data.write().unwrap();
        *guard = Some(SessionData {
            login: login.into(),
            userkey: None,
        });
    }

    /// Signed-in user's login, if any
    pub fn login(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|data| data.login.clone())
    }

    /// Current userkey, if any
    pub fn userkey(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().and_then(|data| data.userkey.clone())
    }

    /// Whether both a login and a userkey are present
    pub fn is_signed_in(&self) -> bool {
        let guard = self.data.read().unwrap();
        guard
            .as_ref()
            .is_some_and(|data| data.userkey.is_some())
    }

    /// Session data snapshot, if any
    pub fn data(&self) -> Option<SessionData> {
        let guard = self.data.read().unwrap();
        guard.clone()
    }

    /// Drop the stored session
    ///
    /// Local only; the service has no call to invalidate a userkey.
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap();
        *guard = None;
    }
}
