//! Browser `localStorage` as a [`CredentialStore`].
//!
//! On the server build there is no browser, so every read misses and writes
//! fail with [`StorageError::Unavailable`].  Pages only touch the store from
//! effects and event handlers, which never run during SSR.

use isocert_common::session::{CredentialStore, StorageError};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
impl CredentialStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key))
    }

    fn clear(&self) -> Result<(), StorageError> {
        local_storage()?.clear().map_err(|_| StorageError::Clear)
    }
}

#[cfg(not(feature = "hydrate"))]
impl CredentialStore for BrowserStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &'static str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
