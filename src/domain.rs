use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A trimmed, non-empty plant name.  Only constructed through `parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantName(String);

impl PlantName {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Care data for one plant.  Field names are the wire names the frontend
/// and the sensor firmware expect.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CareProfile {
    #[serde(rename = "luminosidade_ideal_lux")]
    pub light_lux: LuxRange,
    #[serde(rename = "umidade_ar_ideal")]
    pub air_humidity: String,
    #[serde(rename = "metodo_irrigacao_ideal")]
    pub irrigation: IrrigationMethod,
    /// "HH:MM" -> target soil moisture, like "70%"
    #[serde(rename = "horarios_umidade_solo")]
    pub soil_moisture_schedule: HashMap<String, String>,
    #[serde(rename = "temperatura_ideal_celsius")]
    pub temperature: String,
    #[serde(rename = "tipo_planta")]
    pub category: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuxRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrrigationMethod {
    #[serde(rename = "gotejamento")]
    Drip,
    #[serde(rename = "agendado")]
    Scheduled,
}

impl IrrigationMethod {
    pub fn description(&self) -> &str {
        match self {
            IrrigationMethod::Drip => "drip",
            IrrigationMethod::Scheduled => "scheduled",
        }
    }
}
