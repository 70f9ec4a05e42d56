// Таймер обратного отсчёта до целевого момента

use crate::config::Config;
use crate::utils::time::next_local_midnight;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Снимок оставшегося времени на один тик
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownTime {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub formatted: String,
    pub is_expired: bool,
}

impl CountdownTime {
    fn expired() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
            formatted: "00:00:00".to_string(),
            is_expired: true,
        }
    }
}

/// Таймер обратного отсчёта.
///
/// Чистая функция от текущего момента: tick(now) декомпозирует остаток
/// до цели. После достижения цели все компоненты прижаты к нулю, а флаг
/// is_expired взведён, пока не задана новая цель (retarget).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    target_ms: i64,
}

impl CountdownTimer {
    pub fn new(target_ms: i64) -> Self {
        Self { target_ms }
    }

    /// Цель из RFC 3339 строки; мусор на входе — None
    pub fn from_iso(target: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(target.trim())
            .ok()
            .map(|d| Self::new(d.timestamp_millis()))
    }

    /// Дефолтная цель: начало следующих локальных суток
    pub fn until_next_midnight(now: DateTime<Local>) -> Self {
        Self::new(next_local_midnight(now))
    }

    /// Сменить цель (сбрасывает состояние истечения)
    pub fn retarget(&mut self, target_ms: i64) {
        self.target_ms = target_ms;
    }

    pub fn target_ms(&self) -> i64 {
        self.target_ms
    }

    /// Рекомендуемый период тиков для хозяина цикла
    pub fn tick_interval_ms() -> i64 {
        Config::global().countdown_tick_ms
    }

    /// Пересчитать остаток.
    ///
    /// Часы намеренно НЕ сворачиваются по модулю 24: остаток больше суток
    /// отображается суммарными часами ("30:00:00").
    pub fn tick(&self, now_ms: i64) -> CountdownTime {
        let diff = self.target_ms - now_ms;
        if diff <= 0 {
            return CountdownTime::expired();
        }

        let total_seconds = diff / 1000;
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        CountdownTime {
            hours,
            minutes,
            seconds,
            formatted: format!("{:02}:{:02}:{:02}", hours, minutes, seconds),
            is_expired: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_strictly_decrease_each_tick() {
        let timer = CountdownTimer::new(10_000);

        let mut previous = timer.tick(0);
        assert_eq!(previous.seconds, 10);

        for tick in 1..10 {
            let now = tick * 1000;
            let current = timer.tick(now);
            assert!(!current.is_expired);
            assert_eq!(current.seconds, previous.seconds - 1);
            previous = current;
        }

        // Достигли цели — ноль навсегда
        assert!(timer.tick(10_000).is_expired);
        assert!(timer.tick(11_000).is_expired);
    }

    #[test]
    fn test_past_target_immediately_expired() {
        let timer = CountdownTimer::new(5_000);
        let time = timer.tick(6_000);

        assert_eq!(time.hours, 0);
        assert_eq!(time.minutes, 0);
        assert_eq!(time.seconds, 0);
        assert_eq!(time.formatted, "00:00:00");
        assert!(time.is_expired);
    }

    #[test]
    fn test_target_equal_to_now_is_expired() {
        let timer = CountdownTimer::new(5_000);
        assert!(timer.tick(5_000).is_expired);
    }

    #[test]
    fn test_decomposition_and_padding() {
        // 1 час 2 минуты 3 секунды
        let timer = CountdownTimer::new((3600 + 2 * 60 + 3) * 1000);
        let time = timer.tick(0);

        assert_eq!(time.hours, 1);
        assert_eq!(time.minutes, 2);
        assert_eq!(time.seconds, 3);
        assert_eq!(time.formatted, "01:02:03");
    }

    #[test]
    fn test_hours_not_wrapped_past_one_day() {
        // 30 часов до цели
        let timer = CountdownTimer::new(30 * 3600 * 1000);
        let time = timer.tick(0);

        assert_eq!(time.hours, 30);
        assert_eq!(time.formatted, "30:00:00");
    }

    #[test]
    fn test_fractional_second_floors() {
        let timer = CountdownTimer::new(1_999);
        let time = timer.tick(0);
        assert_eq!(time.seconds, 1);
    }

    #[test]
    fn test_retarget_clears_expiry() {
        let mut timer = CountdownTimer::new(1_000);
        assert!(timer.tick(2_000).is_expired);

        timer.retarget(10_000);
        assert!(!timer.tick(2_000).is_expired);
    }

    #[test]
    fn test_from_iso() {
        let timer = CountdownTimer::from_iso("2024-06-15T12:00:00+00:00").unwrap();
        assert!(timer.target_ms() > 0);

        assert!(CountdownTimer::from_iso("not a date").is_none());
        assert!(CountdownTimer::from_iso("").is_none());
    }

    #[test]
    fn test_until_next_midnight_in_future() {
        let now = Local::now();
        let timer = CountdownTimer::until_next_midnight(now);
        assert!(!timer.tick(now.timestamp_millis()).is_expired);
    }
}
