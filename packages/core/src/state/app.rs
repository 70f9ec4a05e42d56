// Главное состояние витрины

use crate::checkout;
use crate::config::Config;
use crate::engine::age_gate::{AgeVerificationGate, VerificationState};
use crate::engine::notifications::{NotificationPhase, NotificationTimeline, PurchaseNotification};
use crate::engine::online::OnlineCountSimulator;
use crate::engine::sales::{GlobalSalesCounter, ProductSalesCounter};
use crate::state::theme::ThemeManager;
use crate::storage::models::Theme;
use crate::storage::LocalStore;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::telegram::ExternalOpener;
use rand::Rng;
use std::collections::HashMap;

/// Фасад клиентского ядра витрины.
///
/// Владеет хранилищем и всеми симуляторами. Возрастной гейт — корневой:
/// пока возраст не подтверждён, tick() не продвигает ни один симулятор,
/// а в момент подтверждения все расписания перепривязываются к этому
/// моменту — симуляторы монтируются после прохождения гейта, не при
/// создании фасада. Демонтаж страницы обязан вызвать teardown(), чтобы
/// глобальный счётчик зафиксировал точку отсчёта для следующей загрузки.
pub struct StorefrontState<S: LocalStore, R: Rng + Clone> {
    store: S,
    rng: R,

    // === Гейт и предпочтения ===
    gate: AgeVerificationGate,
    theme: ThemeManager,

    // === Симуляторы ===
    online: OnlineCountSimulator<R>,
    global_sales: GlobalSalesCounter<R>,
    product_sales: HashMap<String, ProductSalesCounter<R>>,
    notifications: NotificationTimeline<R>,

    // === Внешние переходы ===
    opener: ExternalOpener,
}

impl<S: LocalStore, R: Rng + Clone> StorefrontState<S, R> {
    /// Создать состояние витрины поверх хранилища
    pub fn new(store: S, rng: R, now_ms: i64) -> Self {
        let cfg = Config::global();

        let gate = AgeVerificationGate::load(&store);
        let theme = ThemeManager::load(&store);
        let online = OnlineCountSimulator::new(cfg.online_base_count, now_ms, rng.clone());
        let global_sales =
            GlobalSalesCounter::mount(&store, cfg.global_sales_base, now_ms, rng.clone());
        let notifications = NotificationTimeline::new(now_ms, rng.clone());

        Self {
            store,
            rng,
            gate,
            theme,
            online,
            global_sales,
            product_sales: HashMap::new(),
            notifications,
            opener: ExternalOpener::new(),
        }
    }

    // === Возрастной гейт ===

    pub fn verification_state(&self) -> VerificationState {
        self.gate.state()
    }

    /// Подтвердить возраст. При переходе в Verified расписания всех
    /// симуляторов перепривязываются к моменту подтверждения: первый
    /// показ уведомления — через 8 секунд после прохождения гейта,
    /// а не после загрузки страницы.
    pub fn verify_age(&mut self, now_ms: i64) {
        let was_verified = self.gate.is_verified();
        self.gate.verify(&mut self.store);
        if !was_verified {
            self.remount_simulators(now_ms);
        }
    }

    pub fn deny_age(&mut self) {
        self.gate.deny();
    }

    pub fn reset_age(&mut self) {
        self.gate.reset(&mut self.store);
    }

    // === Тема ===

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle(&mut self.store)
    }

    // === Счётчики товаров ===

    /// Смонтировать счётчик продаж товара (идемпотентно)
    pub fn mount_product(&mut self, product_id: &str, now_ms: i64) {
        if !self.product_sales.contains_key(product_id) {
            let counter =
                ProductSalesCounter::mount(&self.store, product_id, now_ms, self.rng.clone());
            self.product_sales.insert(product_id.to_string(), counter);
        }
    }

    /// Демонтировать счётчик товара (уход со страницы товара)
    pub fn unmount_product(&mut self, product_id: &str) {
        self.product_sales.remove(product_id);
    }

    // Пересоздать симуляторы с дедлайнами от now. Смонтированные
    // счётчики товаров переживают перепривязку: их набор определяется
    // открытой страницей, а не гейтом.
    fn remount_simulators(&mut self, now_ms: i64) {
        let cfg = Config::global();

        self.online = OnlineCountSimulator::new(cfg.online_base_count, now_ms, self.rng.clone());
        self.global_sales =
            GlobalSalesCounter::mount(&self.store, cfg.global_sales_base, now_ms, self.rng.clone());
        self.notifications = NotificationTimeline::new(now_ms, self.rng.clone());

        let product_ids: Vec<String> = self.product_sales.keys().cloned().collect();
        for id in product_ids {
            let counter = ProductSalesCounter::mount(&self.store, &id, now_ms, self.rng.clone());
            self.product_sales.insert(id, counter);
        }
    }

    // === Продвижение симуляции ===

    /// Продвинуть все симуляторы до момента now.
    /// До подтверждения возраста витрина не живёт.
    pub fn tick(&mut self, now_ms: i64) {
        if !self.gate.is_verified() {
            return;
        }

        self.online.tick(now_ms);
        self.global_sales.tick(&mut self.store, now_ms);
        for counter in self.product_sales.values_mut() {
            counter.tick(&mut self.store, now_ms);
        }
        self.notifications.poll(now_ms);
    }

    /// Ближайший дедлайн всех симуляторов (подсказка хозяину цикла)
    pub fn next_deadline(&self) -> i64 {
        let mut deadline = self
            .online
            .next_deadline()
            .min(self.global_sales.next_deadline())
            .min(self.notifications.next_deadline());
        for counter in self.product_sales.values() {
            deadline = deadline.min(counter.next_deadline());
        }
        deadline
    }

    /// Зафиксировать состояние перед выгрузкой страницы
    pub fn teardown(&mut self, now_ms: i64) {
        self.global_sales.shutdown(&mut self.store, now_ms);
    }

    // === Геттеры для UI ===

    pub fn online_count(&self) -> u32 {
        self.online.count()
    }

    pub fn global_sales_count(&self) -> u64 {
        self.global_sales.count()
    }

    pub fn product_sales_count(&self, product_id: &str) -> Option<u64> {
        self.product_sales.get(product_id).map(|c| c.count())
    }

    pub fn notification(&self) -> Option<&PurchaseNotification> {
        self.notifications.current()
    }

    pub fn notification_phase(&self) -> NotificationPhase {
        self.notifications.phase()
    }

    pub fn dismiss_notification(&mut self, now_ms: i64) {
        self.notifications.dismiss(now_ms);
    }

    // === Внешние переходы ===

    /// Подготовить внешний URL к открытию (нормализация + дедупликация)
    pub fn prepare_open(&mut self, url: &str, now_ms: i64) -> Option<String> {
        self.opener.prepare(url, now_ms)
    }

    /// Ссылка на оплату для цены из прайс-листа.
    /// Для цены вне таблицы UI уходит в чат поддержки.
    pub fn checkout_url(&self, price: u32) -> Result<&'static str> {
        checkout::checkout_url_for_price(price)
            .ok_or_else(|| StorefrontError::NotFound(format!("no checkout url for price {}", price)))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
