// Telegram-ссылки и безопасное открытие внешних URL

use crate::config::Config;

/// Хендл поддержки по умолчанию
pub const DEFAULT_USERNAME: &str = "Hottpay";

/// Нормализовать Telegram-username из любого пользовательского формата:
/// `username`, `@username`, `https://t.me/username`, `t.me/username`.
pub fn clean_username(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DEFAULT_USERNAME.to_string();
    }

    let cleaned = trimmed.strip_prefix('@').unwrap_or(trimmed);

    if let Some(pos) = cleaned.to_ascii_lowercase().find("t.me/") {
        let rest = &cleaned[pos + "t.me/".len()..];
        let end = rest.find(|c| c == '/' || c == '?').unwrap_or(rest.len());
        if end > 0 {
            return rest[..end].to_string();
        }
    }

    cleaned.to_string()
}

/// Ссылка на чат покупки
pub fn buy_link(telegram_username: &str) -> String {
    format!("https://t.me/{}", clean_username(telegram_username))
}

/// Ссылка в поддержку с предзаполненным сообщением о товаре
pub fn support_link(title: &str, price: f64, telegram_username: &str) -> String {
    let message = format!(
        "Hello HotPay support, I want to buy: {} – Price: ${:.2}",
        title, price
    );
    build_link(telegram_username, &message)
}

/// Собрать t.me-ссылку с произвольным сообщением.
/// Username принимается в любом формате (plain, @, полный URL).
pub fn build_link(telegram_username: &str, message: &str) -> String {
    format!(
        "https://t.me/{}?text={}",
        clean_username(telegram_username),
        encode_component(message)
    )
}

// Percent-кодирование в семантике encodeURIComponent
fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(byte as char);
            }
            _ => {
                out.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    out
}

fn has_scheme(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Дедупликация открытия внешних ссылок.
///
/// Состояние принадлежит владельцу (не модульные глобалы): повторное
/// открытие того же URL в пределах окна подавляется, чтобы быстрые
/// повторные клики не плодили вкладки.
#[derive(Debug, Default)]
pub struct ExternalOpener {
    last_url: Option<String>,
    last_opened_at: i64,
}

impl ExternalOpener {
    pub fn new() -> Self {
        Self {
            last_url: None,
            last_opened_at: 0,
        }
    }

    /// Подготовить URL к открытию.
    ///
    /// Возвращает нормализованный URL, либо `None`, если открывать не нужно
    /// (пустой ввод или дубликат в пределах окна дедупликации).
    pub fn prepare(&mut self, url: &str, now_ms: i64) -> Option<String> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return None;
        }

        let normalized = if has_scheme(trimmed) {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };

        let window = Config::global().open_dedup_window_ms;
        if self.last_url.as_deref() == Some(normalized.as_str())
            && now_ms - self.last_opened_at < window
        {
            return None;
        }

        self.last_url = Some(normalized.clone());
        self.last_opened_at = now_ms;
        Some(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_username_formats() {
        assert_eq!(clean_username("username"), "username");
        assert_eq!(clean_username("@username"), "username");
        assert_eq!(clean_username("https://t.me/username"), "username");
        assert_eq!(clean_username("t.me/username"), "username");
        assert_eq!(clean_username("t.me/username?start=1"), "username");
        assert_eq!(clean_username("  @username  "), "username");
        assert_eq!(clean_username(""), DEFAULT_USERNAME);
    }

    #[test]
    fn test_build_link_encodes_message() {
        let link = build_link("Hottpay", "I want to buy: Bundle – $100");
        assert!(link.starts_with("https://t.me/Hottpay?text="));
        assert!(!link.contains(' '));
        assert!(link.contains("%20"));
    }

    #[test]
    fn test_support_link_contains_price() {
        let link = support_link("Premium Bundle", 45.0, "@Hottpay");
        assert!(link.starts_with("https://t.me/Hottpay?text="));
        assert!(link.contains("45.00"));
    }

    #[test]
    fn test_opener_dedup_window() {
        let mut opener = ExternalOpener::new();

        assert_eq!(
            opener.prepare("example.com/x", 1_000),
            Some("https://example.com/x".to_string())
        );
        // Тот же URL в пределах окна — подавляется
        assert_eq!(opener.prepare("example.com/x", 1_500), None);
        // После окна — открывается снова
        assert_eq!(
            opener.prepare("example.com/x", 2_100),
            Some("https://example.com/x".to_string())
        );
    }

    #[test]
    fn test_opener_different_url_not_deduped() {
        let mut opener = ExternalOpener::new();
        assert!(opener.prepare("https://a.example", 0).is_some());
        assert!(opener.prepare("https://b.example", 10).is_some());
    }

    #[test]
    fn test_opener_empty_input() {
        let mut opener = ExternalOpener::new();
        assert_eq!(opener.prepare("   ", 0), None);
    }
}
