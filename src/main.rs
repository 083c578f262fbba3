use anyhow::Context;
use activation_web::{
    activation::ActivationClient,
    api::AppState,
    configuration::get_configuration,
    startup::{run, shutdown_signal},
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("info,tower_http=debug".into(), std::io::stdout);
    init_subscriber(subscriber).context("Failed to install tracing subscriber.")?;

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let activation = ActivationClient::from_settings(&configuration)
        .context("Failed to build activation client.")?;
    tracing::info!(api_url = %activation.base_url().as_ref(), "activation client ready");

    let address = configuration.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}."))?;
    tracing::info!(%address, "web client listening");

    run(listener, AppState::new(activation))?
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("web client stopped");
    Ok(())
}
