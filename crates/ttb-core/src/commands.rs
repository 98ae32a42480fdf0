//! Bot commands: `/start`, `/help`, `/toggle`, `/settings`.
//!
//! `/toggle` is admin-only; `/settings` is readable by anyone in the group.

use std::sync::Arc;

use crate::{
    languages,
    messaging::{port::ChatPort, types::InboundMessage},
    settings::SettingsStore,
    Result,
};

pub const GROUP_ONLY: &str = "❌ This command works only in groups!";
pub const ADMIN_ONLY: &str = "❌ Only admins can use this command!";
pub const PERMISSION_CHECK_FAILED: &str = "❌ Error checking permissions!";
pub const COMMAND_FAILED: &str = "❌ Command failed!";

pub const START_TEXT: &str = "🌐 <b>Welcome to Translation Bot!</b>

I automatically translate non-English messages to English in groups.

<b>Admin Commands:</b>
/toggle - Enable/disable translation
/settings - Show current settings
/help - Get help guide

Add me to your group and make me admin to start translating!";

pub const HELP_TEXT: &str = "🤖 <b>Translation Bot Help</b>

<b>How to use:</b>
1. Add me to your group
2. Make me administrator
3. I'll auto-translate non-English messages

<b>Commands:</b>
/start - Start the bot
/toggle - Toggle translation (admin only)
/settings - Show settings
/help - This message

<b>Note:</b> I translate messages from group members (not forwarded messages from channels)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Help,
    Toggle,
    Settings,
}

fn status_label(enabled: bool) -> &'static str {
    if enabled {
        "ENABLED"
    } else {
        "DISABLED"
    }
}

pub struct CommandService {
    settings: Arc<SettingsStore>,
}

impl CommandService {
    pub fn new(settings: Arc<SettingsStore>) -> Self {
        Self { settings }
    }

    /// Run `cmd` and reply to the invoking message.
    pub async fn execute(
        &self,
        port: &dyn ChatPort,
        cmd: BotCommand,
        msg: &InboundMessage,
    ) -> Result<()> {
        let html = self.respond(port, cmd, msg).await;
        port.reply(msg.message, &html).await?;
        Ok(())
    }

    /// Text to answer `cmd` with. Mutates settings for a permitted `/toggle`.
    pub async fn respond(
        &self,
        port: &dyn ChatPort,
        cmd: BotCommand,
        msg: &InboundMessage,
    ) -> String {
        match cmd {
            BotCommand::Start => START_TEXT.to_string(),
            BotCommand::Help => HELP_TEXT.to_string(),
            BotCommand::Toggle => self.toggle(port, msg).await,
            BotCommand::Settings => self.settings_text(msg).await,
        }
    }

    async fn toggle(&self, port: &dyn ChatPort, msg: &InboundMessage) -> String {
        if !msg.chat_kind.is_group_like() {
            return GROUP_ONLY.to_string();
        }
        let chat_id = msg.message.chat_id;

        let Some(sender) = msg.sender.as_ref() else {
            return ADMIN_ONLY.to_string();
        };

        match port.member_status(chat_id, sender.user_id).await {
            Ok(status) if status.is_privileged() => {}
            Ok(status) => {
                tracing::info!(
                    chat_id = chat_id.0,
                    user_id = sender.user_id.0,
                    "toggle denied for {status:?}"
                );
                return ADMIN_ONLY.to_string();
            }
            Err(e) => {
                tracing::error!("Permission check failed: {e}");
                return PERMISSION_CHECK_FAILED.to_string();
            }
        }

        let enabled = self.settings.toggle(chat_id).await;
        tracing::info!(
            chat_id = chat_id.0,
            user_id = sender.user_id.0,
            "translation {}",
            status_label(enabled)
        );
        format!(
            "🔄 Translation is now {} for this group!",
            status_label(enabled)
        )
    }

    async fn settings_text(&self, msg: &InboundMessage) -> String {
        if !msg.chat_kind.is_group_like() {
            return GROUP_ONLY.to_string();
        }
        let enabled = self.settings.is_enabled(msg.message.chat_id).await;
        format!(
            "⚙️ <b>Translation Settings</b>\n\n\
             <b>Status:</b> {}\n\
             <b>Target Language:</b> English\n\
             <b>Supported Languages:</b> {}+\n\n\
             Use /toggle to enable/disable translation",
            status_label(enabled),
            languages::supported_count()
        )
    }
}
