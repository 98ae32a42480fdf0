use ttb_core::messaging::types::InboundMessage;

use crate::router::AppState;

pub async fn handle_text(msg: &InboundMessage, state: &AppState) {
    if let Err(e) = state
        .pipeline
        .handle(state.messenger.as_ref(), msg)
        .await
    {
        tracing::error!(
            chat_id = msg.message.chat_id.0,
            "Message handling error: {e}"
        );
    }
}
