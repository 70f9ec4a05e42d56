// Доступ к удалённому key-value хранилищу настроек

use crate::utils::error::SettingsError;
use std::collections::HashMap;

/// Шов к внешней таблице настроек.
///
/// Витрина только читает; админская сторона (вне этого ядра) делает
/// upsert по тем же ключам. Все ошибки для витрины равнозначны
/// "не настроено", но тип различает причины.
pub trait RemoteSettings {
    fn read_setting(&self, key: &str) -> Result<String, SettingsError>;
}

/// In-memory таблица настроек для тестов и non-WASM окружений.
/// Значение `None` моделирует NULL-колонку в строке таблицы.
#[derive(Debug, Default)]
pub struct MemorySettings {
    rows: HashMap<String, Option<String>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: &str, value: Option<&str>) {
        self.rows
            .insert(key.to_string(), value.map(|v| v.to_string()));
    }

    pub fn remove(&mut self, key: &str) {
        self.rows.remove(key);
    }
}

impl RemoteSettings for MemorySettings {
    fn read_setting(&self, key: &str) -> Result<String, SettingsError> {
        match self.rows.get(key) {
            Some(Some(value)) => Ok(value.clone()),
            // NULL в колонке value равносилен отсутствию строки
            Some(None) | None => Err(SettingsError::NotFound(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_row() {
        let mut settings = MemorySettings::new();
        settings.insert("telegram_username", Some("Hottpay"));
        assert_eq!(
            settings.read_setting("telegram_username").unwrap(),
            "Hottpay"
        );
    }

    #[test]
    fn test_missing_row_is_not_found() {
        let settings = MemorySettings::new();
        let err = settings.read_setting("absent").unwrap_err();
        assert_eq!(err, SettingsError::NotFound("absent".to_string()));
    }

    #[test]
    fn test_null_value_is_not_found() {
        let mut settings = MemorySettings::new();
        settings.insert("special_offer", None);
        assert!(matches!(
            settings.read_setting("special_offer"),
            Err(SettingsError::NotFound(_))
        ));
    }
}
