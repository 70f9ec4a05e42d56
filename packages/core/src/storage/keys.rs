// Ключи localStorage
//
// Точные строки — контракт совместимости: данные, сохранённые прежними
// версиями витрины, должны читаться без миграции.

/// Флаг подтверждения возраста
pub const AGE_VERIFIED: &str = "hotpay_age_verified";

/// Тема оформления
pub const THEME: &str = "hotpay-theme";

/// JSON-карта счётчиков продаж (key → {count, lastUpdated})
pub const SALES_COUNTERS: &str = "hotpay-sales-counters";

/// Флаг показа попапа спец-предложения
pub const OFFER_POPUP_SHOWN: &str = "special_offer_popup_shown";
