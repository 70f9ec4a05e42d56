// Модели персистентных данных

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Одна запись счётчика продаж.
///
/// Имена полей в JSON ("count"/"lastUpdated") — контракт совместимости
/// с ранее сохранёнными данными браузеров.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRecord {
    pub count: u64,
    #[serde(rename = "lastUpdated")]
    pub last_updated: i64,
}

/// Карта всех счётчиков продаж: "global" и идентификаторы товаров
pub type SalesCounters = HashMap<String, CounterRecord>;

/// Тема оформления
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_str(value: &str) -> Option<Theme> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_record_wire_format() {
        let record = CounterRecord {
            count: 1240,
            last_updated: 1_700_000_000_000,
        };

        let encoded = serde_json::to_string(&record).unwrap();
        assert!(encoded.contains("\"lastUpdated\""));
        assert!(encoded.contains("\"count\""));

        let decoded: CounterRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_counters_map_roundtrip() {
        let mut counters = SalesCounters::new();
        counters.insert(
            "global".to_string(),
            CounterRecord { count: 10, last_updated: 5 },
        );
        counters.insert(
            "video-42".to_string(),
            CounterRecord { count: 3, last_updated: 7 },
        );

        let encoded = serde_json::to_string(&counters).unwrap();
        let decoded: SalesCounters = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded["global"].count, 10);
    }

    #[test]
    fn test_theme_strings() {
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::from_str("light"), Some(Theme::Light));
        assert_eq!(Theme::from_str("purple"), None);
    }
}
