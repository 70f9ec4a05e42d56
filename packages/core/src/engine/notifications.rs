// Генератор синтетических уведомлений о покупках

use crate::config::Config;
use rand::Rng;
use serde::Serialize;

// Фиксированные каталоги. "Someone" встречается чаще намеренно —
// распределение меток неравномерное.
const BUYER_NAMES: &[&str] = &[
    "Someone", "A customer", "A buyer", "Someone", "A customer", "Someone",
    "A buyer", "Someone", "A customer", "Someone",
];

/// Страна покупателя
#[derive(Debug, Clone, Copy)]
pub struct CountryInfo {
    pub name: &'static str,
    pub code: &'static str,
    pub flag: &'static str,
}

const COUNTRIES: &[CountryInfo] = &[
    CountryInfo { name: "USA", code: "US", flag: "🇺🇸" },
    CountryInfo { name: "UK", code: "GB", flag: "🇬🇧" },
    CountryInfo { name: "Brazil", code: "BR", flag: "🇧🇷" },
    CountryInfo { name: "Germany", code: "DE", flag: "🇩🇪" },
    CountryInfo { name: "France", code: "FR", flag: "🇫🇷" },
    CountryInfo { name: "Canada", code: "CA", flag: "🇨🇦" },
    CountryInfo { name: "Spain", code: "ES", flag: "🇪🇸" },
    CountryInfo { name: "Italy", code: "IT", flag: "🇮🇹" },
    CountryInfo { name: "Portugal", code: "PT", flag: "🇵🇹" },
    CountryInfo { name: "Australia", code: "AU", flag: "🇦🇺" },
    CountryInfo { name: "Mexico", code: "MX", flag: "🇲🇽" },
    CountryInfo { name: "Argentina", code: "AR", flag: "🇦🇷" },
    CountryInfo { name: "Japan", code: "JP", flag: "🇯🇵" },
    CountryInfo { name: "Netherlands", code: "NL", flag: "🇳🇱" },
    CountryInfo { name: "Sweden", code: "SE", flag: "🇸🇪" },
];

const PRODUCT_NAMES: &[&str] = &[
    "Exclusive Content 🔥",
    "Premium Bundle",
    "Hot Collection 🔥",
    "VIP Content",
    "Special Pack",
    "Premium Access",
];

const PRICES: &[u32] = &[20, 25, 30, 35, 40, 45, 60, 65, 85, 95];

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Флаг страны по коду; неизвестный код — глобус
pub fn country_flag(country_code: &str) -> &'static str {
    COUNTRIES
        .iter()
        .find(|c| c.code == country_code)
        .map(|c| c.flag)
        .unwrap_or("🌍")
}

/// Синтетическое событие "кто-то только что купил".
///
/// Не персистится; id достаточно уникален для ключей UI-переходов,
/// но глобальная уникальность не гарантируется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseNotification {
    pub id: String,
    pub buyer_name: &'static str,
    pub country: &'static str,
    pub country_code: &'static str,
    pub product_name: &'static str,
    pub price: u32,
}

/// Сгенерировать случайное уведомление из фиксированных каталогов
pub fn generate<R: Rng>(rng: &mut R, now_ms: i64) -> PurchaseNotification {
    let buyer_name = BUYER_NAMES[rng.gen_range(0..BUYER_NAMES.len())];
    let country = COUNTRIES[rng.gen_range(0..COUNTRIES.len())];
    let product_name = PRODUCT_NAMES[rng.gen_range(0..PRODUCT_NAMES.len())];
    let price = PRICES[rng.gen_range(0..PRICES.len())];

    let suffix: String = (0..9)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();

    PurchaseNotification {
        id: format!("{}-{}", now_ms, suffix),
        buyer_name,
        country: country.name,
        country_code: country.code,
        product_name,
        price,
    }
}

/// Фаза показа уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Hidden,
    Visible,
    Exiting,
}

/// Конвейер показа уведомлений.
///
/// Расписание привязано к моменту монтирования: первый показ через 8 с,
/// дальше каждые 30 с. Новый цикл всегда вытесняет текущее уведомление,
/// сколько бы времени показа у того ни оставалось. Ручное закрытие
/// отменяет только авто-закрытие текущего экземпляра, но не расписание.
#[derive(Debug)]
pub struct NotificationTimeline<R: Rng> {
    phase: NotificationPhase,
    current: Option<PurchaseNotification>,
    mounted_at: i64,
    next_show_at: i64,
    shown_intervals: u32,
    auto_dismiss_at: Option<i64>,
    clear_at: Option<i64>,
    rng: R,
}

impl<R: Rng> NotificationTimeline<R> {
    pub fn new(now_ms: i64, rng: R) -> Self {
        let cfg = Config::global();
        Self {
            phase: NotificationPhase::Hidden,
            current: None,
            mounted_at: now_ms,
            next_show_at: now_ms + cfg.notification_initial_delay_ms,
            shown_intervals: 0,
            auto_dismiss_at: None,
            clear_at: None,
            rng,
        }
    }

    /// Продвинуть конвейер до момента now
    pub fn poll(&mut self, now_ms: i64) {
        let cfg = Config::global();

        if now_ms >= self.next_show_at {
            // Новый цикл вытесняет всё, что на экране
            self.current = Some(generate(&mut self.rng, now_ms));
            self.phase = NotificationPhase::Visible;
            self.auto_dismiss_at = Some(now_ms + cfg.notification_visible_ms);
            self.clear_at = None;

            self.shown_intervals += 1;
            self.next_show_at =
                self.mounted_at + cfg.notification_interval_ms * self.shown_intervals as i64;
            // Пропущенные при долгом простое интервалы схлопываются в один показ
            while self.next_show_at <= now_ms {
                self.shown_intervals += 1;
                self.next_show_at = self.mounted_at
                    + cfg.notification_interval_ms * self.shown_intervals as i64;
            }
        }

        if self.phase == NotificationPhase::Visible {
            if let Some(deadline) = self.auto_dismiss_at {
                if now_ms >= deadline {
                    self.phase = NotificationPhase::Exiting;
                    self.auto_dismiss_at = None;
                    self.clear_at = Some(now_ms + cfg.notification_exit_ms);
                }
            }
        }

        if self.phase == NotificationPhase::Exiting {
            if let Some(deadline) = self.clear_at {
                if now_ms >= deadline {
                    self.phase = NotificationPhase::Hidden;
                    self.clear_at = None;
                    self.current = None;
                }
            }
        }
    }

    /// Закрыть уведомление вручную: сразу в фазу выхода, авто-закрытие
    /// этого экземпляра отменяется. Расписание показов не трогаем.
    pub fn dismiss(&mut self, now_ms: i64) {
        if self.phase == NotificationPhase::Visible {
            let cfg = Config::global();
            self.phase = NotificationPhase::Exiting;
            self.auto_dismiss_at = None;
            self.clear_at = Some(now_ms + cfg.notification_exit_ms);
        }
    }

    pub fn phase(&self) -> NotificationPhase {
        self.phase
    }

    pub fn current(&self) -> Option<&PurchaseNotification> {
        self.current.as_ref()
    }

    /// Ближайший дедлайн конвейера (подсказка хозяину цикла)
    pub fn next_deadline(&self) -> i64 {
        let mut deadline = self.next_show_at;
        if let Some(d) = self.auto_dismiss_at {
            deadline = deadline.min(d);
        }
        if let Some(d) = self.clear_at {
            deadline = deadline.min(d);
        }
        deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn timeline(seed: u64) -> NotificationTimeline<StdRng> {
        NotificationTimeline::new(0, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_generate_draws_from_catalogs() {
        let mut rng = StdRng::seed_from_u64(1);
        let n = generate(&mut rng, 1_700_000_000_000);

        assert!(BUYER_NAMES.contains(&n.buyer_name));
        assert!(PRODUCT_NAMES.contains(&n.product_name));
        assert!(PRICES.contains(&n.price));
        assert!(COUNTRIES.iter().any(|c| c.code == n.country_code));
        assert!(n.id.starts_with("1700000000000-"));
        assert_eq!(n.id.len(), "1700000000000-".len() + 9);
    }

    #[test]
    fn test_country_flag_lookup() {
        assert_eq!(country_flag("BR"), "🇧🇷");
        assert_eq!(country_flag("XX"), "🌍");
    }

    #[test]
    fn test_first_show_after_initial_delay() {
        let mut tl = timeline(1);

        tl.poll(7_999);
        assert_eq!(tl.phase(), NotificationPhase::Hidden);
        assert!(tl.current().is_none());

        tl.poll(8_000);
        assert_eq!(tl.phase(), NotificationPhase::Visible);
        assert!(tl.current().is_some());
    }

    #[test]
    fn test_auto_dismiss_sequence() {
        let mut tl = timeline(2);
        tl.poll(8_000);

        // Видимо до истечения 4.5 с
        tl.poll(8_000 + 4_499);
        assert_eq!(tl.phase(), NotificationPhase::Visible);

        tl.poll(8_000 + 4_500);
        assert_eq!(tl.phase(), NotificationPhase::Exiting);
        assert!(tl.current().is_some());

        tl.poll(8_000 + 4_500 + 300);
        assert_eq!(tl.phase(), NotificationPhase::Hidden);
        assert!(tl.current().is_none());
    }

    #[test]
    fn test_repeating_schedule_anchored_to_mount() {
        let mut tl = timeline(3);
        tl.poll(8_000);
        let first_id = tl.current().unwrap().id.clone();

        // Следующий показ в mount+30с, не в 8с+30с
        assert_eq!(tl.next_show_at, 30_000);

        tl.poll(30_000);
        assert_eq!(tl.phase(), NotificationPhase::Visible);
        assert_ne!(tl.current().unwrap().id, first_id);
        assert_eq!(tl.next_show_at, 60_000);
    }

    #[test]
    fn test_new_cycle_supersedes_visible_notification() {
        let mut tl = timeline(4);
        tl.poll(8_000);

        // Следующий цикл наступает при невыработанном авто-дедлайне
        // предыдущего экземпляра: показ обрабатывается первым и вытесняет его
        tl.poll(30_000);
        assert_eq!(tl.phase(), NotificationPhase::Visible);
        // Свежий таймер видимости: жив до 30с+4.5с
        tl.poll(34_000);
        assert_eq!(tl.phase(), NotificationPhase::Visible);
        tl.poll(34_500);
        assert_eq!(tl.phase(), NotificationPhase::Exiting);
    }

    #[test]
    fn test_manual_dismiss_cancels_auto_dismiss_only() {
        let mut tl = timeline(5);
        tl.poll(8_000);

        tl.dismiss(9_000);
        assert_eq!(tl.phase(), NotificationPhase::Exiting);

        tl.poll(9_300);
        assert_eq!(tl.phase(), NotificationPhase::Hidden);
        assert!(tl.current().is_none());

        // Старый авто-дедлайн (8с+4.5с) не оживляет ничего
        tl.poll(12_500);
        assert_eq!(tl.phase(), NotificationPhase::Hidden);
        assert!(tl.current().is_none());

        // Расписание осталось: следующий показ в 30с
        tl.poll(30_000);
        assert_eq!(tl.phase(), NotificationPhase::Visible);
    }

    #[test]
    fn test_dismiss_when_hidden_is_noop() {
        let mut tl = timeline(6);
        tl.dismiss(1_000);
        assert_eq!(tl.phase(), NotificationPhase::Hidden);
    }

    #[test]
    fn test_long_stall_collapses_missed_intervals() {
        let mut tl = timeline(7);
        // Очень поздний первый poll: один показ, расписание уходит вперёд
        tl.poll(95_000);
        assert_eq!(tl.phase(), NotificationPhase::Visible);
        assert!(tl.next_show_at > 95_000);
        assert_eq!(tl.next_show_at % 30_000, 0);
    }

    #[test]
    fn test_next_deadline_tracks_earliest() {
        let mut tl = timeline(8);
        assert_eq!(tl.next_deadline(), 8_000);

        tl.poll(8_000);
        // Авто-закрытие раньше следующего показа
        assert_eq!(tl.next_deadline(), 12_500);
    }
}
