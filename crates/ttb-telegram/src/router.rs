use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*, utils::command::BotCommands};

use ttb_core::{
    commands::CommandService,
    config::Config,
    messaging::port::ChatPort,
    pipeline::{PipelinePolicy, TranslationPipeline},
    ports::Translator,
    settings::SettingsStore,
};

use crate::handlers::{self, commands::Command};
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TranslationPipeline>,
    pub commands: Arc<CommandService>,
    pub messenger: Arc<dyn ChatPort>,
    /// Without the leading `@`; used to accept `/cmd@bot` addressed to us.
    pub bot_username: String,
}

impl AppState {
    /// Wire the pipeline and command service around one shared settings store.
    pub fn new(
        cfg: &Config,
        translator: Arc<dyn Translator>,
        messenger: Arc<dyn ChatPort>,
        bot_username: String,
    ) -> Self {
        let settings = Arc::new(SettingsStore::new());
        let pipeline = Arc::new(TranslationPipeline::new(
            settings.clone(),
            translator,
            PipelinePolicy::from_config(cfg),
        ));
        let commands = Arc::new(CommandService::new(settings));
        Self {
            pipeline,
            commands,
            messenger,
            bot_username,
        }
    }
}

pub async fn run_polling(cfg: Arc<Config>, translator: Arc<dyn Translator>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    let me = bot.get_me().await?;
    let bot_username = me.username().to_string();
    tracing::info!("ttb started: @{bot_username}");
    tracing::info!(
        "max length {} chars, engine timeout {}ms",
        cfg.max_message_len,
        cfg.translate_timeout.as_millis()
    );

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!("Failed to register command menu: {e}");
    }

    if cfg.drop_pending_updates {
        if let Err(e) = bot.delete_webhook().drop_pending_updates(true).await {
            tracing::warn!("Failed to drop pending updates: {e}");
        }
    }

    let messenger: Arc<dyn ChatPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let state = Arc::new(AppState::new(&cfg, translator, messenger, bot_username));

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    tracing::info!("Bot is running, translating group member messages (not channel forwards)");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
