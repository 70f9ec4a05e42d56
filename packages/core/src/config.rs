//! Централизованная конфигурация движков симуляции
//!
//! Все интервалы, границы и лимиты должны быть определены здесь,
//! чтобы избежать хардкода по всему проекту. Значения повторяют
//! поведение, на которое завязана витрина.

use std::sync::OnceLock;

/// Глобальная конфигурация приложения (синглтон)
static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

/// Основная структура конфигурации
#[derive(Debug, Clone)]
pub struct Config {
    // ============================================
    // ТАЙМЕР ОБРАТНОГО ОТСЧЁТА
    // ============================================

    /// Период пересчёта таймера (в миллисекундах)
    pub countdown_tick_ms: i64,

    // ============================================
    // СИМУЛЯТОР ОНЛАЙН-СЧЁТЧИКА
    // ============================================

    /// Стартовое значение счётчика "сейчас на сайте"
    pub online_base_count: u32,

    /// Нижняя граница счётчика
    pub online_min: u32,

    /// Верхняя граница счётчика
    pub online_max: u32,

    /// Минимальное изменение за одно обновление
    pub online_delta_min: i64,

    /// Максимальное изменение за одно обновление
    pub online_delta_max: i64,

    /// Минимальная задержка между обновлениями (в миллисекундах)
    pub online_interval_min_ms: i64,

    /// Максимальная задержка между обновлениями (в миллисекундах, не включительно)
    pub online_interval_max_ms: i64,

    // ============================================
    // ГЛОБАЛЬНЫЙ СЧЁТЧИК ПРОДАЖ
    // ============================================

    /// Стартовое значение при отсутствии сохранённой записи
    pub global_sales_base: u64,

    /// Лимит "догоняющих" продаж за время отсутствия (1 продажа в минуту)
    pub global_catchup_cap: u64,

    /// Минимальная задержка между живыми инкрементами (в миллисекундах)
    pub global_interval_min_ms: i64,

    /// Максимальная задержка между живыми инкрементами (в миллисекундах, не включительно)
    pub global_interval_max_ms: i64,

    /// Минимальный живой инкремент
    pub global_increment_min: u64,

    /// Максимальный живой инкремент
    pub global_increment_max: u64,

    // ============================================
    // СЧЁТЧИК ПРОДАЖ ТОВАРА
    // ============================================

    /// Минут отсутствия на одну "догоняющую" продажу
    pub product_catchup_minutes_per_sale: u64,

    /// Лимит "догоняющих" продаж товара
    pub product_catchup_cap: u64,

    /// Минимальная задержка между живыми инкрементами (в миллисекундах)
    pub product_interval_min_ms: i64,

    /// Максимальная задержка между живыми инкрементами (в миллисекундах, не включительно)
    pub product_interval_max_ms: i64,

    /// Минимальный живой инкремент
    pub product_increment_min: u64,

    /// Максимальный живой инкремент
    pub product_increment_max: u64,

    /// Смещение детерминированного базового счётчика товара
    pub product_base_offset: u64,

    /// Модуль детерминированного базового счётчика товара
    pub product_base_modulo: u64,

    // ============================================
    // УВЕДОМЛЕНИЯ О ПОКУПКАХ
    // ============================================

    /// Задержка первого уведомления после монтирования (в миллисекундах)
    pub notification_initial_delay_ms: i64,

    /// Период генерации уведомлений (в миллисекундах)
    pub notification_interval_ms: i64,

    /// Время видимости уведомления (в миллисекундах)
    pub notification_visible_ms: i64,

    /// Длительность анимации скрытия (в миллисекундах)
    pub notification_exit_ms: i64,

    // ============================================
    // ВНЕШНИЕ ПЕРЕХОДЫ
    // ============================================

    /// Окно дедупликации повторного открытия одного URL (в миллисекундах)
    pub open_dedup_window_ms: i64,
}

impl Config {
    /// Создать конфигурацию с дефолтными значениями
    pub fn default() -> Self {
        Self {
            // Таймер
            countdown_tick_ms: 1000,

            // Онлайн-счётчик
            online_base_count: 85,
            online_min: 60,
            online_max: 120,
            online_delta_min: -5,
            online_delta_max: 8,
            online_interval_min_ms: 20_000,
            online_interval_max_ms: 40_000,

            // Глобальный счётчик продаж
            global_sales_base: 1240,
            global_catchup_cap: 50,
            global_interval_min_ms: 20_000,
            global_interval_max_ms: 60_000,
            global_increment_min: 1,
            global_increment_max: 5,

            // Счётчик продаж товара
            product_catchup_minutes_per_sale: 5,
            product_catchup_cap: 10,
            product_interval_min_ms: 60_000,
            product_interval_max_ms: 180_000,
            product_increment_min: 1,
            product_increment_max: 3,
            product_base_offset: 150,
            product_base_modulo: 400,

            // Уведомления
            notification_initial_delay_ms: 8_000,
            notification_interval_ms: 30_000,
            notification_visible_ms: 4_500,
            notification_exit_ms: 300,

            // Внешние переходы
            open_dedup_window_ms: 1_000,
        }
    }

    /// Создать конфигурацию из переменных окружения
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Переопределяем значения из env, если они заданы
        if let Ok(val) = std::env::var("ONLINE_BASE_COUNT") {
            if let Ok(parsed) = val.parse() {
                config.online_base_count = parsed;
            }
        }

        if let Ok(val) = std::env::var("GLOBAL_SALES_BASE") {
            if let Ok(parsed) = val.parse() {
                config.global_sales_base = parsed;
            }
        }

        if let Ok(val) = std::env::var("NOTIFICATION_INTERVAL_MS") {
            if let Ok(parsed) = val.parse() {
                config.notification_interval_ms = parsed;
            }
        }

        if let Ok(val) = std::env::var("OPEN_DEDUP_WINDOW_MS") {
            if let Ok(parsed) = val.parse() {
                config.open_dedup_window_ms = parsed;
            }
        }

        config
    }

    /// Получить глобальный экземпляр конфигурации
    ///
    /// Автоматически инициализирует конфигурацию со значениями по умолчанию при первом вызове
    pub fn global() -> &'static Config {
        GLOBAL_CONFIG.get_or_init(Config::default)
    }

    /// Инициализировать глобальную конфигурацию со значениями по умолчанию
    ///
    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init() -> Result<(), &'static str> {
        GLOBAL_CONFIG.set(Self::default())
            .map_err(|_| "Config already initialized")
    }

    /// Инициализировать глобальную конфигурацию из переменных окружения
    ///
    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init_from_env() -> Result<(), &'static str> {
        GLOBAL_CONFIG.set(Self::from_env())
            .map_err(|_| "Config already initialized")
    }

    /// Инициализировать глобальную конфигурацию с кастомным экземпляром
    ///
    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init_with(config: Config) -> Result<(), &'static str> {
        GLOBAL_CONFIG.set(config)
            .map_err(|_| "Config already initialized")
    }

    /// Проверить, инициализирована ли глобальная конфигурация
    pub fn is_initialized() -> bool {
        GLOBAL_CONFIG.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.online_base_count, 85);
        assert_eq!(config.global_catchup_cap, 50);
        assert_eq!(config.notification_interval_ms, 30_000);
    }

    #[test]
    fn test_config_values() {
        let config = Config::default();

        // Онлайн-счётчик
        assert_eq!(config.online_min, 60);
        assert_eq!(config.online_max, 120);
        assert_eq!(config.online_delta_min, -5);
        assert_eq!(config.online_delta_max, 8);

        // Счётчики продаж
        assert_eq!(config.global_sales_base, 1240);
        assert_eq!(config.product_catchup_cap, 10);
        assert_eq!(config.product_base_offset, 150);
        assert_eq!(config.product_base_modulo, 400);

        // Уведомления
        assert_eq!(config.notification_initial_delay_ms, 8_000);
        assert_eq!(config.notification_visible_ms, 4_500);
        assert_eq!(config.notification_exit_ms, 300);
    }
}
