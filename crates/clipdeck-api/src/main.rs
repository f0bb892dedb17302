use clipdeck_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load .env for local development; real deployments set the environment.
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize the application (tracing, database, storage, routes)
    let (_state, router) = clipdeck_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    clipdeck_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
