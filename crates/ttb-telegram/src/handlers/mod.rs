//! Telegram update handlers.
//!
//! Every handler is fault-isolated: failures are logged and swallowed so one
//! bad message cannot stop the dispatcher.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use crate::{inbound_from_message, router::AppState};

pub mod commands;
mod text;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let inbound = inbound_from_message(&msg);

    if inbound.is_command {
        commands::handle_command(&inbound, &state).await;
        return Ok(());
    }

    if inbound.text.is_some() {
        text::handle_text(&inbound, &state).await;
    }

    Ok(())
}
