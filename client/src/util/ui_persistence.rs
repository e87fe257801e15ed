//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only persisted value is the one-time gallery consent. It is stored as
//! the JSON literal `true`, which is also what older builds of the page
//! wrote, so a guest who agreed once is never asked again.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub const SHARE_CONFIRMED_KEY: &str = "retroCameraShareConfirmed";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        parse_stored(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if let Err(e) = storage.set_item(key, &raw) {
            log::warn!("localStorage write failed for {key}: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_stored<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

/// Whether the guest already agreed to share photos to the gallery.
pub fn share_confirmed() -> bool {
    load_json::<bool>(SHARE_CONFIRMED_KEY).unwrap_or(false)
}

pub fn remember_share_confirmed() {
    save_json(SHARE_CONFIRMED_KEY, &true);
}
