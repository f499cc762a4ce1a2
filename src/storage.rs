//! Persistence Adapter
//!
//! Thin wrapper over the browser's per-origin localStorage. Reads fail soft
//! to None; write failures (quota, denial) are logged to the console and
//! otherwise ignored, the UI is never interrupted.

const STORAGE_KEY: &str = "tasks";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Last persisted snapshot, if any
pub fn get() -> Option<String> {
    local_storage()?.get_item(STORAGE_KEY).ok().flatten()
}

/// Persist the full snapshot blob
pub fn set(snapshot: &str) {
    let Some(storage) = local_storage() else {
        web_sys::console::warn_1(&"[BOARD] localStorage unavailable, state not persisted".into());
        return;
    };
    if storage.set_item(STORAGE_KEY, snapshot).is_err() {
        web_sys::console::warn_1(&"[BOARD] localStorage write failed, state not persisted".into());
    }
}
