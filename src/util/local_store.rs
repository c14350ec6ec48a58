//! Browser `localStorage` helpers for small client-side preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Values are stored as JSON text. Every failure (no window, storage
//! disabled, quota exceeded, malformed JSON) is logged and swallowed; reads
//! return the caller's fallback instead.

#[cfg(test)]
#[path = "local_store_test.rs"]
mod local_store_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    match web_sys::window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => Some(storage),
        Some(Err(e)) => {
            log::warn!("localStorage unavailable: {e:?}");
            None
        }
        _ => None,
    }
}

/// Decode a stored JSON value, or `None` when the slot is empty or malformed.
fn decode<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Option<T> {
    let raw = raw.filter(|r| !r.is_empty())?;
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("get_data({key}) decode error: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = (key, e);
            None
        }
    }
}

/// Read the JSON value stored under `key`, or `fallback` on any failure.
pub fn get_data<T: DeserializeOwned>(key: &str, fallback: T) -> T {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return fallback;
        };
        let raw = match storage.get_item(key) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("get_data({key}) error: {e:?}");
                return fallback;
            }
        };
        decode(key, raw.as_deref()).unwrap_or(fallback)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        decode(key, None).unwrap_or(fallback)
    }
}

/// Store `value` as JSON under `key`.
pub fn set_data<T: Serialize>(key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("set_data({key}) encode error: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            return;
        }
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, &raw) {
            log::warn!("set_data({key}) error: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
    }
}

/// Delete the value stored under `key`.
pub fn remove_data(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            log::warn!("remove_data({key}) error: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
