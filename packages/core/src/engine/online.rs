// Симулятор счётчика "сейчас на сайте"

use crate::config::Config;
use rand::Rng;

/// Медленно дрейфующий счётчик онлайн-посетителей.
///
/// Не персистится: каждая загрузка страницы начинает с базового значения.
/// Обновления происходят со случайным интервалом; после каждого обновления
/// назначается новый дедлайн.
#[derive(Debug)]
pub struct OnlineCountSimulator<R: Rng> {
    count: i64,
    next_update_at: i64,
    rng: R,
}

impl<R: Rng> OnlineCountSimulator<R> {
    pub fn new(base_count: u32, now_ms: i64, mut rng: R) -> Self {
        let next_update_at = now_ms + next_delay(&mut rng);
        Self {
            count: base_count as i64,
            next_update_at,
            rng,
        }
    }

    /// Продвинуть симуляцию. Если дедлайн наступил — применить случайный
    /// сдвиг в [-5, +8] и прижать результат к границам [60, 120].
    pub fn tick(&mut self, now_ms: i64) -> u32 {
        let cfg = Config::global();

        if now_ms >= self.next_update_at {
            let delta = self
                .rng
                .gen_range(cfg.online_delta_min..=cfg.online_delta_max);
            self.count = (self.count + delta)
                .clamp(cfg.online_min as i64, cfg.online_max as i64);
            self.next_update_at = now_ms + next_delay(&mut self.rng);
        }

        self.count as u32
    }

    pub fn count(&self) -> u32 {
        self.count as u32
    }

    /// Ближайший дедлайн обновления (подсказка хозяину цикла)
    pub fn next_deadline(&self) -> i64 {
        self.next_update_at
    }
}

fn next_delay<R: Rng>(rng: &mut R) -> i64 {
    let cfg = Config::global();
    rng.gen_range(cfg.online_interval_min_ms..cfg.online_interval_max_ms)
}
