// Конфигурация спец-предложения
//
// Источник — JSON-блоб в удалённой таблице настроек. Декодирование
// никогда не роняет вызывающую сторону: любой сбой деградирует до
// дефолтов, частично валидный объект мержится по полям.

use crate::settings::{RemoteSettings, SPECIAL_OFFER_KEY};
use crate::storage::keys;
use crate::storage::LocalStore;
use crate::utils::time::end_of_today_rfc3339;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_BADGE_TEXT: &str = "Limited Time Offer";
const DEFAULT_TITLE: &str = "All Content Bundle";
const DEFAULT_PRICE: f64 = 100.0;
const DEFAULT_ORIGINAL_PRICE: f64 = 200.0;
const DEFAULT_CHECKOUT_URL: &str =
    "https://checkout.gadgetxafrica.store/b/eVq3cw8RX5ClctNbLqgA80N";
const DEFAULT_TELEGRAM_MESSAGE: &str =
    "I want to buy the SPECIAL OFFER - All Content for $100";
const DEFAULT_BENEFITS: &[&str] = &[
    "Access to ALL premium content",
    "Instant delivery after payment",
    "One-time payment, lifetime access",
    "Exclusive members-only content",
    "24/7 Telegram support",
];

/// Типизированная конфигурация спец-предложения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOfferConfig {
    pub badge_text: String,
    pub title: String,
    pub price: f64,
    pub original_price: f64,
    pub checkout_url: String,
    pub telegram_message: String,
    pub benefits: Vec<String>,
    pub expires_at: String,
}

impl SpecialOfferConfig {
    /// Полный набор дефолтов; `expiresAt` — сегодня в 23:59:59 локально
    pub fn default_with(now: DateTime<Local>) -> Self {
        Self {
            badge_text: DEFAULT_BADGE_TEXT.to_string(),
            title: DEFAULT_TITLE.to_string(),
            price: DEFAULT_PRICE,
            original_price: DEFAULT_ORIGINAL_PRICE,
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
            telegram_message: DEFAULT_TELEGRAM_MESSAGE.to_string(),
            benefits: DEFAULT_BENEFITS.iter().map(|b| b.to_string()).collect(),
            expires_at: end_of_today_rfc3339(now),
        }
    }
}

// Число либо строка с числом; всё остальное (включая NaN и отрицательные
// значения — цена не бывает меньше нуля) отбрасывается
fn coerce_price(value: Option<&Value>, default: f64) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(p) if p.is_finite() && p >= 0.0 => p,
        _ => default,
    }
}

fn string_field(value: Option<&Value>, default: &str) -> String {
    match value.and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => default.to_string(),
    }
}

/// Разобрать сырой JSON настройки и домержить дефолтами по полям
pub fn parse_config(raw: &str, now: DateTime<Local>) -> SpecialOfferConfig {
    let defaults = SpecialOfferConfig::default_with(now);

    let object = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            tracing::debug!("special offer blob is not a JSON object, using defaults");
            return defaults;
        }
    };

    let benefits = match object.get("benefits") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect(),
        // Поле не массив — целиком откатываемся к дефолтному списку
        _ => defaults.benefits.clone(),
    };

    let expires_at = match object.get("expiresAt").and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => defaults.expires_at.clone(),
    };

    SpecialOfferConfig {
        badge_text: string_field(object.get("badgeText"), &defaults.badge_text),
        title: string_field(object.get("title"), &defaults.title),
        price: coerce_price(object.get("price"), defaults.price),
        original_price: coerce_price(object.get("originalPrice"), defaults.original_price),
        checkout_url: string_field(object.get("checkoutUrl"), &defaults.checkout_url),
        telegram_message: string_field(
            object.get("telegramMessage"),
            &defaults.telegram_message,
        ),
        benefits,
        expires_at,
    }
}

/// Получить конфигурацию спец-предложения. Никогда не падает:
/// отсутствие настройки, сбой транспорта или битый JSON дают дефолты.
pub fn resolve<S: RemoteSettings>(settings: &S, now: DateTime<Local>) -> SpecialOfferConfig {
    match settings.read_setting(SPECIAL_OFFER_KEY) {
        Ok(raw) => parse_config(&raw, now),
        Err(err) => {
            tracing::debug!(error = %err, "special offer setting unavailable, using defaults");
            SpecialOfferConfig::default_with(now)
        }
    }
}

// === Флаг показа попапа ===

pub fn popup_shown<S: LocalStore>(store: &S) -> bool {
    store.get_raw(keys::OFFER_POPUP_SHOWN).as_deref() == Some("true")
}

pub fn mark_popup_shown<S: LocalStore>(store: &mut S) {
    store.set_raw(keys::OFFER_POPUP_SHOWN, "true");
}
