use plant_care::{app::PlantCareApp, config::Config};
use tracing::error;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    // Refuse to serve anything without a model credential
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    };

    let app = match PlantCareApp::new(&config) {
        Ok(app) => app,
        Err(e) => {
            error!("failed to build app: {e:#}");
            std::process::exit(1);
        }
    };
    let app = Box::leak(Box::new(app));

    app.start(&config.bind_address).await
}
