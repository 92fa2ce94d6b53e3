use std::path::Path;

use vanilla::VanillaServer;
use vanilla_core::ServerConfig;

const CONFIG_PATH: &str = "config/vanilla_config.json5";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vanilla::logger::init()?;

    let config = ServerConfig::load_or_create(Path::new(CONFIG_PATH))?;
    let server = VanillaServer::new(config);

    let cancel_token = server.cancel_token.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for shutdown signal: {err}");
        }
        log::info!("Shutting down");
        cancel_token.cancel();
    });

    server.run().await;
    Ok(())
}
