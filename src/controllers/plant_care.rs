use actix_web::{get, web, HttpResponse};
use mockall_double::double;
use tracing::{info, warn};

#[double]
use crate::ai::Ai;
use crate::{
    ai::prompts::{
        care::{CarePrompt, CareReply},
        Prompt,
    },
    app::PlantCareApp,
    domain::{CareProfile, PlantName},
    error::CareError,
};

pub struct PlantCareController {
    pub ai: Ai,
}

impl PlantCareController {
    pub fn new(ai: Ai) -> Self {
        Self { ai }
    }

    /// Asks the model for the care profile of one plant.  Makes exactly one
    /// model call for any non-blank name, and none for a blank one.
    pub async fn lookup(&self, raw_name: &str) -> Result<CareProfile, CareError> {
        let plant_name = PlantName::parse(raw_name).ok_or(CareError::InvalidInput)?;
        info!("looking up care for {plant_name}");

        let prompt = CarePrompt::new(plant_name);

        let raw_response = self.ai.generate(prompt.build_prompt()).await.map_err(|e| {
            warn!("language model call failed: {e:#}");
            CareError::UpstreamFailure(e)
        })?;

        let reply = prompt.parse_response(&raw_response).map_err(|e| {
            warn!("could not parse language model reply: {e:#}");
            CareError::MalformedUpstreamResponse(e)
        })?;

        match reply {
            CareReply::Found(profile) => Ok(profile),
            CareReply::NotFound(message) => {
                info!("model did not recognize plant: {message}");
                Err(CareError::NotFound(message))
            }
        }
    }
}

#[get("/plant-care/{plant_name}")]
async fn plant_care_handler(
    plant_name: web::Path<String>,
    app: web::Data<&'static PlantCareApp>,
) -> Result<HttpResponse, CareError> {
    let profile = app.plant_care_controller.lookup(&plant_name).await?;

    Ok(HttpResponse::Ok().json(profile))
}
