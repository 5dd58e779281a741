use anyhow::{anyhow, Context};
use std::env;
use std::time::Duration;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gemini_timeout: Duration,
    pub bind_address: String,
}

impl Config {
    /// Reads configuration from the environment, loading a `.env` file first
    /// if one exists.  Fails when GOOGLE_API_KEY is missing.
    pub fn from_env() -> anyhow::Result<Self> {
        // A missing .env is fine, real deployments set the environment directly
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        // Blank values count as unset
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let google_api_key = lookup("GOOGLE_API_KEY")
            .ok_or_else(|| anyhow!("Must define $GOOGLE_API_KEY (or set it in .env)"))?;

        let gemini_timeout = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.trim()
                    .parse()
                    .with_context(|| format!("Invalid $GEMINI_TIMEOUT_SECS: {secs}"))?,
            ),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            google_api_key,
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: lookup("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            gemini_timeout,
            bind_address: lookup("PLANT_CARE_BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}
