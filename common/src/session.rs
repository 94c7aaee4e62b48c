//! Admin session credentials and the dashboard access check.
//!
//! The browser keeps two entries in local storage: `token` (the raw bearer
//! token) and `user` (the JSON-serialised [`User`]).  Anything that can hold
//! string key/value pairs implements [`CredentialStore`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::routes;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Role claim of a signed-in user.  Anything but `admin` keeps the value the
/// API sent so it is stored back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Other(String),
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        if s == "admin" {
            Role::Admin
        } else {
            Role::Other(s)
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "admin".to_string(),
            Role::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("cannot write `{0}` to browser storage")]
    Write(&'static str),
    #[error("cannot clear browser storage")]
    Clear,
}

/// Client-side key/value storage for credentials.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &'static str, value: &str) -> Result<(), StorageError>;
    /// Wipe everything, not just the credential keys.
    fn clear(&self) -> Result<(), StorageError>;
}

#[cfg(test)]
pub(crate) use memory::MemoryStore;


/// Bearer token plus the user it was issued to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    /// Read the stored session.  A missing token, a missing user record or a
    /// user record that does not parse all count as "no session".
    pub fn load(store: &impl CredentialStore) -> Option<Session> {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let raw_user = store.get(USER_KEY)?;
        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                debug!("Ignoring unreadable stored user: {e}");
                None
            }
        }
    }

    pub fn save(&self, store: &impl CredentialStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.user).map_err(|_| StorageError::Write(USER_KEY))?;
        store.set(TOKEN_KEY, &self.token)?;
        store.set(USER_KEY, &json)
    }

    /// Forget the session (logout, or the backend rejected the token).
    pub fn clear(store: &impl CredentialStore) -> Result<(), StorageError> {
        store.clear()
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }
}

/// Outcome of the dashboard precondition check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted(Session),
    Redirect(&'static str),
}

/// Decide whether the admin dashboard may render.
///
/// No stored session sends the visitor to the login page; a signed-in
/// non-admin is sent home.
pub fn check_admin_access(store: &impl CredentialStore) -> Access {
    match Session::load(store) {
        None => Access::Redirect(routes::ADMIN_LOGIN),
        Some(session) if !session.is_admin() => Access::Redirect(routes::HOME),
        Some(session) => Access::Granted(session),
    }
}

// ─── tests ───────────────────────────────────────────────────────────────
