// Работа со временем

use chrono::{DateTime, Local};

/// Текущее время в миллисекундах с начала эпохи
#[cfg(target_arch = "wasm32")]
pub fn current_timestamp() -> i64 {
    js_sys::Date::now() as i64
}

/// Текущее время в миллисекундах с начала эпохи
#[cfg(not(target_arch = "wasm32"))]
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Начало следующих календарных суток в локальной таймзоне (epoch ms).
///
/// При неоднозначности локального времени (переход на летнее время)
/// берётся более ранний вариант; при невозможности вычислить — now + 24h.
pub fn next_local_midnight(now: DateTime<Local>) -> i64 {
    let midnight = now
        .date_naive()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(|naive| naive.and_local_timezone(Local).earliest());

    match midnight {
        Some(m) => m.timestamp_millis(),
        None => now.timestamp_millis() + 24 * 60 * 60 * 1000,
    }
}

/// Сегодня в 23:59:59 локального времени, как RFC 3339 строка.
/// Используется как дефолтный `expiresAt` спец-предложения.
pub fn end_of_today_rfc3339(now: DateTime<Local>) -> String {
    let end = now
        .date_naive()
        .and_hms_opt(23, 59, 59)
        .and_then(|naive| naive.and_local_timezone(Local).earliest());

    match end {
        Some(e) => e.to_rfc3339(),
        None => now.to_rfc3339(),
    }
}
