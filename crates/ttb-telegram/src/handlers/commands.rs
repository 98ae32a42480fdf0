use teloxide::utils::command::{BotCommands, ParseError};

use ttb_core::{
    commands::{BotCommand, COMMAND_FAILED},
    messaging::types::InboundMessage,
};

use crate::router::AppState;

#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "start the bot")]
    Start,
    #[command(description = "show usage instructions")]
    Help,
    #[command(description = "enable/disable translation (admins only)")]
    Toggle,
    #[command(description = "show translation settings for this group")]
    Settings,
}

impl From<Command> for BotCommand {
    fn from(c: Command) -> Self {
        match c {
            Command::Start => BotCommand::Start,
            Command::Help => BotCommand::Help,
            Command::Toggle => BotCommand::Toggle,
            Command::Settings => BotCommand::Settings,
        }
    }
}

/// Resolve `/cmd` or `/cmd@bot_username`. Commands for other bots and unknown
/// commands yield `None`. Arguments (e.g. `/start` deep-link payloads) are ignored.
pub fn parse_command(text: &str, bot_username: &str) -> Option<BotCommand> {
    let head = text.split_whitespace().next().unwrap_or("");
    match Command::parse(head, bot_username) {
        Ok(cmd) => Some(cmd.into()),
        Err(ParseError::WrongBotName(name)) => {
            tracing::debug!("ignoring command addressed to @{name}");
            None
        }
        Err(_) => None,
    }
}

pub async fn handle_command(msg: &InboundMessage, state: &AppState) {
    let Some(text) = msg.text.as_deref() else {
        return;
    };
    let Some(cmd) = parse_command(text, &state.bot_username) else {
        return;
    };

    let port = state.messenger.as_ref();
    if let Err(e) = state.commands.execute(port, cmd, msg).await {
        tracing::error!("{cmd:?} command error: {e}");
        if let Err(e) = port.reply(msg.message, COMMAND_FAILED).await {
            tracing::error!("failed to report command failure: {e}");
        }
    }
}
