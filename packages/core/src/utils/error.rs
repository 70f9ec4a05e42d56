// Типы ошибок

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Settings error: {0}")]
    SettingsError(#[from] SettingsError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Типизированный результат чтения удалённой настройки.
///
/// Политика витрины одинакова для всех вариантов (подставить дефолты),
/// но вызывающая сторона при желании может отличить "не настроено"
/// от сбоя транспорта или битого значения.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("setting not found: {0}")]
    NotFound(String),

    #[error("setting decode failed: {0}")]
    Decode(String),

    #[error("settings transport failed: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

// Для WASM-биндингов
#[cfg(target_arch = "wasm32")]
impl From<StorefrontError> for wasm_bindgen::JsValue {
    fn from(error: StorefrontError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}
