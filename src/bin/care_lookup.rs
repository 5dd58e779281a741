use plant_care::{app::PlantCareApp, config::Config};
use std::env;

// Runs one care lookup against the live model, handy for checking prompt changes.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Expected exactly one argument, the plant name, had: {args:?}");
        std::process::exit(1);
    }

    let config = Config::from_env().unwrap_or_else(|e| {
        eprintln!("{e:#}");
        std::process::exit(1);
    });
    let app = PlantCareApp::new(&config).unwrap_or_else(|e| {
        eprintln!("{e:#}");
        std::process::exit(1);
    });

    match app.plant_care_controller.lookup(&args[1]).await {
        Ok(profile) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&profile).expect("profile should serialize")
            );
            println!(
                "{}-{} lux, {} irrigation",
                profile.light_lux.min,
                profile.light_lux.max,
                profile.irrigation.description()
            );
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
