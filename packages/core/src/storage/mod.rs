// Модуль хранилища (localStorage для WASM)

pub mod keys;
pub mod memory;
pub mod models;

#[cfg(target_arch = "wasm32")]
pub mod local;

pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
pub use local::BrowserStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Единственное долговременное хранилище витрины.
///
/// Контракт: чтение никогда не падает — битые или отсутствующие данные
/// дают `None`, и вызывающая сторона подставляет дефолт.
pub trait LocalStore {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);

    /// Прочитать и декодировать JSON-значение.
    /// Ошибки декодирования проглатываются.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(key, error = %e, "malformed persisted value, falling back to default");
                None
            }
        }
    }

    /// Закодировать значение в JSON и сохранить.
    /// Ошибки сериализации проглатываются (значение не сохраняется).
    fn write_json<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(encoded) => self.set_raw(key, &encoded),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize persisted value");
            }
        }
    }
}
