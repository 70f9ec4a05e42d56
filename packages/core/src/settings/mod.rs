// Удалённые настройки витрины (таблица app_settings: key → nullable value)

pub mod remote;
pub mod special_offer;

pub use remote::{MemorySettings, RemoteSettings};
pub use special_offer::SpecialOfferConfig;

use crate::utils::telegram;

/// Ключ настройки с Telegram-хендлом поддержки
pub const TELEGRAM_USERNAME_KEY: &str = "telegram_username";

/// Ключ настройки спец-предложения (JSON-блоб)
pub const SPECIAL_OFFER_KEY: &str = "special_offer";

/// Прочитать Telegram-хендл; пустое или отсутствующее значение — дефолт
pub fn telegram_username<S: RemoteSettings>(settings: &S) -> String {
    match settings.read_setting(TELEGRAM_USERNAME_KEY) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => telegram::DEFAULT_USERNAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telegram_username_configured() {
        let mut settings = MemorySettings::new();
        settings.insert(TELEGRAM_USERNAME_KEY, Some("  MyShop  "));
        assert_eq!(telegram_username(&settings), "MyShop");
    }

    #[test]
    fn test_telegram_username_defaults() {
        let settings = MemorySettings::new();
        assert_eq!(telegram_username(&settings), telegram::DEFAULT_USERNAME);

        let mut settings = MemorySettings::new();
        settings.insert(TELEGRAM_USERNAME_KEY, Some("   "));
        assert_eq!(telegram_username(&settings), telegram::DEFAULT_USERNAME);
    }
}
