//! Login gate
//!
//! The session router only needs two capabilities from a credential store:
//! check a username/password pair and register a new pair. This is a demo
//! gate, not a security boundary: passwords are kept as plain strings in
//! process memory and are never persisted.

use crate::core::{AuthProviderKind, Error, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Credential store used by the session router
pub trait AuthenticationProvider {
    /// Whether `password` matches the one registered for `username`
    fn verify(&self, username: &str, password: &str) -> bool;

    /// Register a new user; fails with [`Error::Conflict`] if the name is taken
    fn register(&mut self, username: &str, password: &str) -> Result<()>;
}

impl<P: AuthenticationProvider + ?Sized> AuthenticationProvider for Box<P> {
    fn verify(&self, username: &str, password: &str) -> bool {
        (**self).verify(username, password)
    }

    fn register(&mut self, username: &str, password: &str) -> Result<()> {
        (**self).register(username, password)
    }
}

/// Users registered during this process, keyed by username
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentials {
    users: HashMap<String, String>,
}

impl InMemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl AuthenticationProvider for InMemoryCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|stored| stored == password)
    }

    fn register(&mut self, username: &str, password: &str) -> Result<()> {
        if self.users.contains_key(username) {
            return Err(Error::Conflict(format!("Username '{}' already exists", username)));
        }
        self.users.insert(username.to_string(), password.to_string());
        Ok(())
    }
}

/// One credential map shared by several sessions
///
/// Clones point at the same map; every access goes through the mutex.
#[derive(Debug, Clone, Default)]
pub struct SharedCredentials {
    inner: Arc<Mutex<InMemoryCredentials>>,
}

impl SharedCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuthenticationProvider for SharedCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        let users = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        users.verify(username, password)
    }

    fn register(&mut self, username: &str, password: &str) -> Result<()> {
        let mut users = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        users.register(username, password)
    }
}

/// Accepts any non-empty username and password
///
/// Empty fields never reach the provider; the router rejects them first.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGate;

impl AuthenticationProvider for OpenGate {
    fn verify(&self, username: &str, password: &str) -> bool {
        !username.is_empty() && !password.is_empty()
    }

    fn register(&mut self, _username: &str, _password: &str) -> Result<()> {
        Ok(())
    }
}

/// Build the provider selected in the configuration
pub fn provider_for(kind: AuthProviderKind) -> Box<dyn AuthenticationProvider> {
    match kind {
        AuthProviderKind::Memory => Box::new(InMemoryCredentials::new()),
        AuthProviderKind::Open => Box::new(OpenGate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_verify() {
        let mut creds = InMemoryCredentials::new();
        assert!(!creds.verify("alice", "secret"));

        creds.register("alice", "secret").unwrap();
        assert!(creds.verify("alice", "secret"));
        assert!(!creds.verify("alice", "wrong"));
        assert!(!creds.verify("bob", "secret"));
    }

    #[test]
    fn test_duplicate_registration_conflicts() {
        let mut creds = InMemoryCredentials::new();
        creds.register("alice", "secret").unwrap();

        let err = creds.register("alice", "other").unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        // First password is kept
        assert!(creds.verify("alice", "secret"));
        assert_eq!(creds.len(), 1);
    }

    #[test]
    fn test_shared_credentials_are_shared() {
        let mut first = SharedCredentials::new();
        let second = first.clone();

        first.register("alice", "secret").unwrap();
        assert!(second.verify("alice", "secret"));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_open_gate() {
        let mut gate = OpenGate;
        assert!(gate.verify("anyone", "anything"));
        assert!(!gate.verify("anyone", ""));
        assert!(gate.register("anyone", "x").is_ok());
        assert!(gate.register("anyone", "x").is_ok());
    }

    #[test]
    fn test_provider_for_kind() {
        let mut memory = provider_for(AuthProviderKind::Memory);
        assert!(!memory.verify("alice", "secret"));
        memory.register("alice", "secret").unwrap();
        assert!(memory.verify("alice", "secret"));

        let open = provider_for(AuthProviderKind::Open);
        assert!(open.verify("alice", "secret"));
    }
}
