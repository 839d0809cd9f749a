use common::settings::get_settings;

mod startup;
mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = get_settings(".env").map_err(std::io::Error::other)?;

    let _guard = telemetry::init_subscriber(settings.debug, settings.application.max_log_files)?;

    let application = startup::Application::build(settings).await?;

    tracing::event!(target: "backend", tracing::Level::INFO, "Listening on http://{}:{}/", application.host(), application.port());

    application.run_until_stopped().await?;

    drop(_guard);
    Ok(())
}
