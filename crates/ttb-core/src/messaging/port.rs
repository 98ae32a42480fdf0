use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef, UserId},
    messaging::types::MemberStatus,
    Result,
};

/// Outbound side of the chat transport.
///
/// Receiving updates stays in the adapter; the core only needs to answer a
/// message and look up a member's role for admin-only commands.
#[async_trait]
pub trait ChatPort: Send + Sync {
    /// Send `html` (Telegram HTML parse mode) as a reply to `to`.
    async fn reply(&self, to: MessageRef, html: &str) -> Result<MessageRef>;

    async fn member_status(&self, chat_id: ChatId, user_id: UserId) -> Result<MemberStatus>;
}
