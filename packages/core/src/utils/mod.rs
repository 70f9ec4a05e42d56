// Вспомогательные модули

pub mod error;
pub mod telegram;
pub mod time;
