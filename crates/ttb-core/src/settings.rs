use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::domain::ChatId;

/// In-memory per-chat translation toggle.
///
/// A chat without an entry is enabled. Entries live for the lifetime of the
/// process; nothing is persisted. The lock is only held for the lookup or the
/// read-modify-write, never across network calls.
#[derive(Debug, Default)]
pub struct SettingsStore {
    enabled: Mutex<HashMap<ChatId, bool>>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_enabled(&self, chat_id: ChatId) -> bool {
        let map = self.enabled.lock().await;
        map.get(&chat_id).copied().unwrap_or(true)
    }

    /// Flip the flag for `chat_id` and return the new value.
    pub async fn toggle(&self, chat_id: ChatId) -> bool {
        let mut map = self.enabled.lock().await;
        let entry = map.entry(chat_id).or_insert(true);
        *entry = !*entry;
        *entry
    }
}
