// WASM bindings

use crate::engine::countdown::CountdownTimer;
use crate::settings::special_offer;
use crate::state::app::StorefrontState;
use crate::storage::BrowserStore;
use crate::utils::time::current_timestamp;
use chrono::Local;
use rand::rngs::ThreadRng;
use wasm_bindgen::prelude::*;

/// Витрина для JS: один экземпляр на вкладку.
///
/// JS-сторона владеет setTimeout/setInterval и дергает tick()/poll-методы;
/// nextDeadline() подсказывает, когда просыпаться в следующий раз.
#[wasm_bindgen]
pub struct Storefront {
    inner: StorefrontState<BrowserStore, ThreadRng>,
}

#[wasm_bindgen]
impl Storefront {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Storefront {
        console_error_panic_hook::set_once();
        crate::wasm::console::init_logging();

        let now = current_timestamp();
        Storefront {
            inner: StorefrontState::new(BrowserStore::new(), rand::thread_rng(), now),
        }
    }

    /// Продвинуть все симуляторы до текущего момента
    pub fn tick(&mut self) {
        self.inner.tick(current_timestamp());
    }

    /// Ближайший дедлайн симуляторов (epoch ms)
    #[wasm_bindgen(js_name = nextDeadline)]
    pub fn next_deadline(&self) -> f64 {
        self.inner.next_deadline() as f64
    }

    /// Зафиксировать состояние перед выгрузкой страницы
    pub fn teardown(&mut self) {
        self.inner.teardown(current_timestamp());
    }

    // === Возрастной гейт ===

    #[wasm_bindgen(js_name = verificationState)]
    pub fn verification_state(&self) -> String {
        self.inner.verification_state().as_str().to_string()
    }

    #[wasm_bindgen(js_name = verifyAge)]
    pub fn verify_age(&mut self) {
        self.inner.verify_age(current_timestamp());
    }

    #[wasm_bindgen(js_name = denyAge)]
    pub fn deny_age(&mut self) {
        self.inner.deny_age();
    }

    #[wasm_bindgen(js_name = resetAge)]
    pub fn reset_age(&mut self) {
        self.inner.reset_age();
    }

    // === Тема ===

    pub fn theme(&self) -> String {
        self.inner.theme().as_str().to_string()
    }

    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&mut self) -> String {
        self.inner.toggle_theme().as_str().to_string()
    }

    // === Счётчики ===

    #[wasm_bindgen(js_name = onlineCount)]
    pub fn online_count(&self) -> u32 {
        self.inner.online_count()
    }

    #[wasm_bindgen(js_name = globalSalesCount)]
    pub fn global_sales_count(&self) -> f64 {
        self.inner.global_sales_count() as f64
    }

    #[wasm_bindgen(js_name = mountProduct)]
    pub fn mount_product(&mut self, product_id: String) {
        self.inner.mount_product(&product_id, current_timestamp());
    }

    #[wasm_bindgen(js_name = unmountProduct)]
    pub fn unmount_product(&mut self, product_id: String) {
        self.inner.unmount_product(&product_id);
    }

    #[wasm_bindgen(js_name = productSalesCount)]
    pub fn product_sales_count(&self, product_id: String) -> Option<f64> {
        self.inner.product_sales_count(&product_id).map(|c| c as f64)
    }

    // === Уведомления ===

    /// Текущее уведомление ({id, buyerName, ...}) либо null
    pub fn notification(&self) -> JsValue {
        match self.inner.notification() {
            Some(n) => serde_wasm_bindgen::to_value(n).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    #[wasm_bindgen(js_name = notificationExiting)]
    pub fn notification_exiting(&self) -> bool {
        self.inner.notification_phase() == crate::engine::NotificationPhase::Exiting
    }

    #[wasm_bindgen(js_name = dismissNotification)]
    pub fn dismiss_notification(&mut self) {
        self.inner.dismiss_notification(current_timestamp());
    }

    // === Таймер обратного отсчёта ===

    /// Остаток до цели (RFC 3339) либо до следующей локальной полуночи,
    /// если цель не задана или не парсится
    pub fn countdown(&self, target_iso: Option<String>) -> JsValue {
        let timer = target_iso
            .as_deref()
            .and_then(CountdownTimer::from_iso)
            .unwrap_or_else(|| CountdownTimer::until_next_midnight(Local::now()));

        let time = timer.tick(current_timestamp());
        serde_wasm_bindgen::to_value(&time).unwrap_or(JsValue::NULL)
    }

    // === Спец-предложение ===

    #[wasm_bindgen(js_name = popupShown)]
    pub fn popup_shown(&self) -> bool {
        special_offer::popup_shown(self.inner.store())
    }

    #[wasm_bindgen(js_name = markPopupShown)]
    pub fn mark_popup_shown(&mut self) {
        special_offer::mark_popup_shown(self.inner.store_mut());
    }

    // === Внешние переходы ===

    /// Checkout-ссылка для цены из прайс-листа; для прочих цен — ошибка,
    /// JS-сторона уводит покупателя в чат поддержки
    #[wasm_bindgen(js_name = checkoutUrl)]
    pub fn checkout_url(&self, price: u32) -> Result<String, JsValue> {
        Ok(self.inner.checkout_url(price)?.to_string())
    }

    /// Открыть внешний URL в новой вкладке с дедупликацией быстрых
    /// повторных кликов
    #[wasm_bindgen(js_name = openExternal)]
    pub fn open_external(&mut self, url: String) {
        if let Some(normalized) = self.inner.prepare_open(&url, current_timestamp()) {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target_and_features(
                    &normalized,
                    "_blank",
                    "noopener,noreferrer",
                );
            }
        }
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}

/// Разобрать JSON-настройку спец-предложения, полученную JS-стороной
/// из таблицы настроек. null/мусор дают полный набор дефолтов.
#[wasm_bindgen(js_name = resolveSpecialOffer)]
pub fn resolve_special_offer(raw: Option<String>) -> JsValue {
    let config = match raw {
        Some(raw) => special_offer::parse_config(&raw, Local::now()),
        None => special_offer::SpecialOfferConfig::default_with(Local::now()),
    };
    serde_wasm_bindgen::to_value(&config).unwrap_or(JsValue::NULL)
}
