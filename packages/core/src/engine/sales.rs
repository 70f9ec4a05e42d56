// Симулятор счётчиков продаж
//
// Два семейства с общим механизмом: глобальный счётчик и счётчики по
// товарам. Оба персистятся в одной JSON-карте и растут двумя путями:
// "догоняющий" кредит при загрузке (за время отсутствия, с лимитом)
// и живые инкременты по случайным дедлайнам. Счётчики монотонны:
// догоняющий кредит только добавляет, отрицательное время даёт ноль.

use crate::config::Config;
use crate::storage::keys;
use crate::storage::models::{CounterRecord, SalesCounters};
use crate::storage::LocalStore;
use rand::Rng;

/// Ключ глобального счётчика внутри персистентной карты
const GLOBAL_COUNTER_KEY: &str = "global";

fn load_counters<S: LocalStore>(store: &S) -> SalesCounters {
    store.read_json(keys::SALES_COUNTERS).unwrap_or_default()
}

// Read-modify-write одной записи. Выполняется целиком внутри одного
// тика, поэтому последняя запись всегда отражает актуальное значение.
fn persist_record<S: LocalStore>(store: &mut S, key: &str, count: u64, now_ms: i64) {
    let mut counters = load_counters(store);
    counters.insert(
        key.to_string(),
        CounterRecord {
            count,
            last_updated: now_ms,
        },
    );
    store.write_json(keys::SALES_COUNTERS, &counters);
}

fn minutes_between(last_updated: i64, now_ms: i64) -> u64 {
    if now_ms <= last_updated {
        // Часы ушли назад — кредита нет, счётчик не трогаем
        0
    } else {
        ((now_ms - last_updated) / 60_000) as u64
    }
}

/// Детерминированный базовый счётчик товара: одинаковый идентификатор
/// даёт одинаковое значение в любой сессии (диапазон 150..=549).
pub fn product_base_count(product_id: &str) -> u64 {
    let cfg = Config::global();
    let hash: u64 = product_id.bytes().map(u64::from).sum();
    cfg.product_base_offset + hash % cfg.product_base_modulo
}

/// Глобальный счётчик продаж витрины.
///
/// Короткий интервал и крупные инкременты: должен ощущаться "всегда живым".
#[derive(Debug)]
pub struct GlobalSalesCounter<R: Rng> {
    count: u64,
    next_increment_at: i64,
    rng: R,
}

impl<R: Rng> GlobalSalesCounter<R> {
    /// Смонтировать счётчик: прочитать сохранённую запись и начислить
    /// догоняющий кредит (1 продажа за минуту отсутствия, максимум 50).
    /// Без записи — принять базовое значение.
    pub fn mount<S: LocalStore>(store: &S, base_count: u64, now_ms: i64, mut rng: R) -> Self {
        let cfg = Config::global();
        let counters = load_counters(store);

        let count = match counters.get(GLOBAL_COUNTER_KEY) {
            Some(record) => {
                let credit =
                    minutes_between(record.last_updated, now_ms).min(cfg.global_catchup_cap);
                if credit > 0 {
                    tracing::debug!(credit, stored = record.count, "global counter catch-up");
                }
                record.count + credit
            }
            None => base_count,
        };

        let next_increment_at = now_ms + next_global_delay(&mut rng);
        Self {
            count,
            next_increment_at,
            rng,
        }
    }

    /// Живой инкремент: по дедлайну добавить 1..=5, сохранить
    /// {count, now} и назначить следующий дедлайн.
    pub fn tick<S: LocalStore>(&mut self, store: &mut S, now_ms: i64) -> u64 {
        let cfg = Config::global();

        if now_ms >= self.next_increment_at {
            self.count += self
                .rng
                .gen_range(cfg.global_increment_min..=cfg.global_increment_max);
            persist_record(store, GLOBAL_COUNTER_KEY, self.count, now_ms);
            self.next_increment_at = now_ms + next_global_delay(&mut self.rng);
        }

        self.count
    }

    /// Финальная запись при демонтаже: фиксирует точку отсчёта для
    /// догоняющего кредита следующей загрузки.
    pub fn shutdown<S: LocalStore>(&self, store: &mut S, now_ms: i64) {
        persist_record(store, GLOBAL_COUNTER_KEY, self.count, now_ms);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn next_deadline(&self) -> i64 {
        self.next_increment_at
    }
}

fn next_global_delay<R: Rng>(rng: &mut R) -> i64 {
    let cfg = Config::global();
    rng.gen_range(cfg.global_interval_min_ms..cfg.global_interval_max_ms)
}

/// Счётчик продаж одного товара.
///
/// Длинный интервал и мелкие инкременты; каждый живой инкремент сразу
/// персистится, поэтому отдельной записи при демонтаже не требуется.
#[derive(Debug)]
pub struct ProductSalesCounter<R: Rng> {
    product_id: String,
    count: u64,
    next_increment_at: i64,
    rng: R,
}

impl<R: Rng> ProductSalesCounter<R> {
    /// Смонтировать счётчик товара: запись есть — кредит 1 продажа за
    /// каждые 5 минут отсутствия (максимум 10); записи нет —
    /// детерминированная база от идентификатора.
    pub fn mount<S: LocalStore>(store: &S, product_id: &str, now_ms: i64, mut rng: R) -> Self {
        let cfg = Config::global();
        let counters = load_counters(store);

        let count = match counters.get(product_id) {
            Some(record) => {
                let minutes = minutes_between(record.last_updated, now_ms);
                let credit = (minutes / cfg.product_catchup_minutes_per_sale)
                    .min(cfg.product_catchup_cap);
                record.count + credit
            }
            None => product_base_count(product_id),
        };

        let next_increment_at = now_ms + next_product_delay(&mut rng);
        Self {
            product_id: product_id.to_string(),
            count,
            next_increment_at,
            rng,
        }
    }

    /// Живой инкремент: по дедлайну добавить 1..=3 и сохранить запись
    pub fn tick<S: LocalStore>(&mut self, store: &mut S, now_ms: i64) -> u64 {
        let cfg = Config::global();

        if now_ms >= self.next_increment_at {
            self.count += self
                .rng
                .gen_range(cfg.product_increment_min..=cfg.product_increment_max);
            persist_record(store, &self.product_id, self.count, now_ms);
            self.next_increment_at = now_ms + next_product_delay(&mut self.rng);
        }

        self.count
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn next_deadline(&self) -> i64 {
        self.next_increment_at
    }
}

fn next_product_delay<R: Rng>(rng: &mut R) -> i64 {
    let cfg = Config::global();
    rng.gen_range(cfg.product_interval_min_ms..cfg.product_interval_max_ms)
}
