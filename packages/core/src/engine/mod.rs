// Движки клиентской симуляции
//
// Все компоненты устроены одинаково: владеют абсолютными дедлайнами
// (epoch ms) и продвигаются вызовами tick()/poll() от хозяина цикла.
// Собственных таймеров у ядра нет, teardown — это Drop.

pub mod age_gate;
pub mod countdown;
pub mod notifications;
pub mod online;
pub mod sales;

pub use age_gate::{AgeVerificationGate, VerificationState};
pub use countdown::{CountdownTime, CountdownTimer};
pub use notifications::{NotificationPhase, NotificationTimeline, PurchaseNotification};
pub use online::OnlineCountSimulator;
pub use sales::{GlobalSalesCounter, ProductSalesCounter};
