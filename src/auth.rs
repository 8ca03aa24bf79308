//! Demo-account authentication.
//!
//! Accounts are a fixed list. The logged-in user is kept in memory and in
//! storage under [`SESSION_KEY`] so a later run starts already logged in.

use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Role, User};
use crate::storage::{Storage, StorageError};

/// Storage key holding the serialized [`User`].
pub const SESSION_KEY: &str = "user";

/// A demo account.
#[derive(Debug, Clone, Copy)]
pub struct Credential {
    pub username: &'static str,
    pub password: &'static str,
    pub role: Role,
}

pub const DEMO_ACCOUNTS: [Credential; 3] = [
    Credential {
        username: "admin",
        password: "admin123",
        role: Role::Administrator,
    },
    Credential {
        username: "teacher",
        password: "teacher123",
        role: Role::Teacher,
    },
    Credential {
        username: "parent",
        password: "parent123",
        role: Role::Parent,
    },
];

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please enter both username and password")]
    MissingFields,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Look up a username/password pair in the demo account list.
pub fn authenticate(username: &str, password: &str) -> Option<User> {
    DEMO_ACCOUNTS
        .iter()
        .find(|account| account.username == username && account.password == password)
        .map(|account| User {
            username: account.username.to_string(),
            role: account.role,
        })
}

/// Current login state plus the storage it is mirrored to.
pub struct AuthContext<S: Storage> {
    user: Option<User>,
    storage: S,
}

impl<S: Storage> AuthContext<S> {
    /// Restore a previous session from `storage`.
    ///
    /// A stored value that does not deserialize is ignored and the context
    /// starts logged out.
    pub fn restore(storage: S) -> Result<Self, StorageError> {
        let user = match storage.get_item(SESSION_KEY)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(username = %user.username, role = %user.role, "restored session");
                    Some(user)
                }
                Err(err) => {
                    warn!("ignoring malformed stored session: {err}");
                    None
                }
            },
            None => None,
        };

        Ok(Self { user, storage })
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Log in with a demo account. On failure the current state is untouched.
    pub fn login(&mut self, username: &str, password: &str) -> Result<User, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let Some(user) = authenticate(username, password) else {
            warn!(username, "rejected login");
            return Err(AuthError::InvalidCredentials);
        };

        let serialized = serde_json::to_string(&user)?;
        self.storage.set_item(SESSION_KEY, &serialized)?;

        info!(username = %user.username, role = %user.role, "logged in");
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Log out. If the stored session cannot be removed the user stays logged in.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.storage.remove_item(SESSION_KEY)?;

        if let Some(user) = self.user.take() {
            info!(username = %user.username, "logged out");
        }
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
