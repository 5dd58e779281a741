use crate::{
    ai::gemini::Gemini,
    config::Config,
    controllers::plant_care::{plant_care_handler, PlantCareController},
};
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use mockall_double::double;
use tracing::info;

#[double]
use crate::ai::Ai;

pub struct PlantCareApp {
    pub plant_care_controller: PlantCareController,
}

impl PlantCareApp {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let gemini = Gemini::new(
            &config.google_api_key,
            &config.gemini_model,
            &config.gemini_base_url,
            config.gemini_timeout,
        )?;
        let plant_care_controller = PlantCareController::new(Ai::new(gemini));

        Ok(Self {
            plant_care_controller,
        })
    }

    pub async fn start(&'static self, bind_address: &str) -> std::io::Result<()> {
        info!("listening on {bind_address}");

        HttpServer::new(move || {
            // Public api, any origin may call it
            let cors = Cors::permissive();

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(self))
                .service(plant_care_handler)
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
