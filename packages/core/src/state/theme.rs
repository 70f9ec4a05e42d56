// Тема оформления

use crate::storage::keys;
use crate::storage::models::Theme;
use crate::storage::LocalStore;

/// Менеджер темы. Дефолт — тёмная; выбор пользователя персистится.
#[derive(Debug, Clone, Copy)]
pub struct ThemeManager {
    theme: Theme,
}

impl ThemeManager {
    /// Восстановить тему из хранилища (нераспознанное значение — тёмная)
    pub fn load<S: LocalStore>(store: &S) -> Self {
        let theme = store
            .get_raw(keys::THEME)
            .and_then(|value| Theme::from_str(&value))
            .unwrap_or(Theme::Dark);
        Self { theme }
    }

    /// Переключить тему и сохранить выбор
    pub fn toggle<S: LocalStore>(&mut self, store: &mut S) -> Theme {
        let next = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        self.set(store, next);
        next
    }

    pub fn set<S: LocalStore>(&mut self, store: &mut S, theme: Theme) {
        self.theme = theme;
        store.set_raw(keys::THEME, theme.as_str());
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_is_dark() {
        let store = MemoryStore::new();
        let manager = ThemeManager::load(&store);
        assert_eq!(manager.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let mut store = MemoryStore::new();
        let mut manager = ThemeManager::load(&store);

        assert_eq!(manager.toggle(&mut store), Theme::Light);
        assert_eq!(store.get_raw(keys::THEME), Some("light".to_string()));

        let manager = ThemeManager::load(&store);
        assert_eq!(manager.theme(), Theme::Light);
    }

    #[test]
    fn test_garbage_value_falls_back_to_dark() {
        let mut store = MemoryStore::new();
        store.set_raw(keys::THEME, "neon");

        let manager = ThemeManager::load(&store);
        assert_eq!(manager.theme(), Theme::Dark);
    }
}
