// localStorage-хранилище (только WASM)

use crate::storage::LocalStore;
use web_sys::Storage;

/// Обёртка над window.localStorage.
///
/// Если localStorage недоступен (приватный режим, песочница) —
/// все операции становятся no-op, чтение даёт `None`.
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable, persistence disabled");
        }
        Self { storage }
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStore for BrowserStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_raw(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            // Квота может быть исчерпана; витрина переживает потерю записи
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}
