use std::sync::Arc;

use ttb_core::{config::Config, ports::Translator};
use ttb_google::GoogleTranslator;

#[tokio::main]
async fn main() -> Result<(), ttb_core::Error> {
    ttb_core::logging::init("ttb")?;

    let cfg = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            tracing::error!("{e}");
            return Err(e);
        }
    };

    let translator: Arc<dyn Translator> = Arc::new(GoogleTranslator::from_config(&cfg)?);

    ttb_telegram::router::run_polling(cfg, translator)
        .await
        .map_err(|e| ttb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
