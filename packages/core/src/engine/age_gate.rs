// Возрастной гейт — корневой гейт витрины

use crate::storage::keys;
use crate::storage::LocalStore;

/// Состояние подтверждения возраста
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationState {
    /// Записи нет — показать модалку
    Unknown,
    /// Подтверждено и сохранено
    Verified,
    /// Отказ в текущей сессии
    Denied,
}

impl VerificationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationState::Unknown => "unknown",
            VerificationState::Verified => "verified",
            VerificationState::Denied => "denied",
        }
    }
}

/// Гейт подтверждения возраста с тремя состояниями.
///
/// Асимметрия намеренная: verify() персистится, deny() живёт только в
/// памяти — отказавшийся посетитель при следующем заходе снова увидит
/// вопрос, а не захлопнутую дверь.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeVerificationGate {
    state: VerificationState,
}

impl AgeVerificationGate {
    /// Восстановить состояние из хранилища
    pub fn load<S: LocalStore>(store: &S) -> Self {
        let state = match store.get_raw(keys::AGE_VERIFIED) {
            None => VerificationState::Unknown,
            Some(value) if value == "true" => VerificationState::Verified,
            Some(_) => VerificationState::Denied,
        };
        Self { state }
    }

    /// Подтвердить возраст и запомнить это навсегда
    pub fn verify<S: LocalStore>(&mut self, store: &mut S) {
        store.set_raw(keys::AGE_VERIFIED, "true");
        self.state = VerificationState::Verified;
    }

    /// Отказ — только в памяти, в хранилище ничего не пишем
    pub fn deny(&mut self) {
        self.state = VerificationState::Denied;
    }

    /// Сбросить сохранённое состояние
    pub fn reset<S: LocalStore>(&mut self, store: &mut S) {
        store.remove(keys::AGE_VERIFIED);
        self.state = VerificationState::Unknown;
    }

    pub fn state(&self) -> VerificationState {
        self.state
    }

    pub fn is_verified(&self) -> bool {
        self.state == VerificationState::Verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_fresh_store_is_unknown() {
        let store = MemoryStore::new();
        let gate = AgeVerificationGate::load(&store);
        assert_eq!(gate.state(), VerificationState::Unknown);
        assert!(!gate.is_verified());
    }

    #[test]
    fn test_verify_survives_reload() {
        let mut store = MemoryStore::new();
        let mut gate = AgeVerificationGate::load(&store);
        gate.verify(&mut store);
        assert!(gate.is_verified());

        // "Перезагрузка": новый гейт над тем же хранилищем
        let gate = AgeVerificationGate::load(&store);
        assert_eq!(gate.state(), VerificationState::Verified);
    }

    #[test]
    fn test_deny_does_not_survive_reload() {
        let mut store = MemoryStore::new();
        let mut gate = AgeVerificationGate::load(&store);
        gate.deny();
        assert_eq!(gate.state(), VerificationState::Denied);

        // Отказ не был записан — свежая загрузка снова Unknown
        let gate = AgeVerificationGate::load(&store);
        assert_eq!(gate.state(), VerificationState::Unknown);
    }

    #[test]
    fn test_reset_clears_persisted_state() {
        let mut store = MemoryStore::new();
        let mut gate = AgeVerificationGate::load(&store);
        gate.verify(&mut store);

        gate.reset(&mut store);
        assert_eq!(gate.state(), VerificationState::Unknown);

        let gate = AgeVerificationGate::load(&store);
        assert_eq!(gate.state(), VerificationState::Unknown);
    }

    #[test]
    fn test_legacy_false_value_reads_as_denied() {
        let mut store = MemoryStore::new();
        store.set_raw(keys::AGE_VERIFIED, "false");

        let gate = AgeVerificationGate::load(&store);
        assert_eq!(gate.state(), VerificationState::Denied);
    }
}
