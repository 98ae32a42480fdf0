//! Telegram adapter (teloxide).
//!
//! This crate implements the `ttb-core` ChatPort over the Telegram Bot API and
//! converts incoming Telegram messages into core `InboundMessage`s.

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{ChatMemberKind, ParseMode},
};

use tokio::time::sleep;

pub mod handlers;
pub mod router;

use ttb_core::{
    domain::{ChatId, MessageId, MessageRef, UserId},
    errors::Error,
    messaging::{
        port::ChatPort,
        types::{ChatKind, ForwardOrigin, InboundMessage, MemberStatus, Sender},
    },
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn tg_msg_id(message_id: MessageId) -> teloxide::types::MessageId {
        teloxide::types::MessageId(message_id.0)
    }

    fn tg_user(user_id: UserId) -> teloxide::types::UserId {
        teloxide::types::UserId(user_id.0 as u64)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }

    async fn with_retry<T, Fut>(&self, mut op: impl FnMut() -> Fut) -> Result<T>
    where
        Fut: std::future::IntoFuture<Output = std::result::Result<T, teloxide::RequestError>>,
        Fut::IntoFuture: Send,
    {
        const MAX_RETRIES: usize = 1;
        let mut attempts = 0usize;
        loop {
            match op().await {
                Ok(v) => return Ok(v),
                Err(e) => match e {
                    teloxide::RequestError::RetryAfter(d) if attempts < MAX_RETRIES => {
                        attempts += 1;
                        sleep(d).await;
                        continue;
                    }
                    other => return Err(Self::map_err(other)),
                },
            }
        }
    }
}

#[async_trait]
impl ChatPort for TelegramMessenger {
    async fn reply(&self, to: MessageRef, html: &str) -> Result<MessageRef> {
        let msg = self
            .with_retry(|| {
                self.bot
                    .send_message(Self::tg_chat(to.chat_id), html.to_string())
                    .parse_mode(ParseMode::Html)
                    .reply_to_message_id(Self::tg_msg_id(to.message_id))
                    .allow_sending_without_reply(true)
            })
            .await?;

        Ok(MessageRef {
            chat_id: to.chat_id,
            message_id: MessageId(msg.id.0),
        })
    }

    async fn member_status(&self, chat_id: ChatId, user_id: UserId) -> Result<MemberStatus> {
        let member = self
            .with_retry(|| {
                self.bot
                    .get_chat_member(Self::tg_chat(chat_id), Self::tg_user(user_id))
            })
            .await?;
        Ok(member_status(&member.kind))
    }
}

pub(crate) fn member_status(kind: &ChatMemberKind) -> MemberStatus {
    match kind {
        ChatMemberKind::Owner(_) => MemberStatus::Creator,
        ChatMemberKind::Administrator(_) => MemberStatus::Administrator,
        ChatMemberKind::Member => MemberStatus::Member,
        ChatMemberKind::Restricted(_) => MemberStatus::Restricted,
        ChatMemberKind::Left => MemberStatus::Left,
        ChatMemberKind::Banned(_) => MemberStatus::Banned,
    }
}

pub(crate) fn chat_kind(chat: &teloxide::types::Chat) -> ChatKind {
    if chat.is_channel() {
        ChatKind::Channel
    } else if chat.is_supergroup() {
        ChatKind::Supergroup
    } else if chat.is_group() {
        ChatKind::Group
    } else {
        ChatKind::Private
    }
}

/// Convert a Telegram message into the transport-neutral view used by the core.
pub fn inbound_from_message(msg: &Message) -> InboundMessage {
    let sender = msg.from().map(|u| Sender {
        user_id: UserId(u.id.0 as i64),
        username: u.username.clone(),
        is_bot: u.is_bot,
    });

    let forward_origin = if let Some(chat) = msg.forward_from_chat() {
        Some(ForwardOrigin::Chat(chat_kind(chat)))
    } else if msg.forward_from_user().is_some() {
        Some(ForwardOrigin::User)
    } else if msg.forward_from_sender_name().is_some() {
        Some(ForwardOrigin::HiddenUser)
    } else {
        None
    };

    let text = msg.text().map(str::to_string);
    let is_command = text.as_deref().is_some_and(|t| t.starts_with('/'));

    InboundMessage {
        message: MessageRef {
            chat_id: ChatId(msg.chat.id.0),
            message_id: MessageId(msg.id.0),
        },
        chat_kind: chat_kind(&msg.chat),
        sender,
        text,
        forward_origin,
        is_command,
    }
}
