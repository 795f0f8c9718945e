use ems_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env overrides nothing already set)
    dotenv::dotenv().ok();

    // 2. Load configuration and set up logging
    let config = Config::from_env();
    init_logger_with_file(None, config.log_dir.as_deref());

    tracing::info!("EMS server starting...");

    // 3. Initialize server state (database + migrations)
    let state = ServerState::initialize(&config).await;

    // 4. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
