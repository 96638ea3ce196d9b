use std::env;
use std::num::NonZeroU32;

use crate::error::AppError;
use crate::riot::Platform;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub riot_api_key: String,
    /// Server assumed when a command omits the argument.
    pub default_platform: Platform,
    pub ddragon_version: String,
    pub riot_rate_limit_per_minute: NonZeroU32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        const DEFAULT_SERVER: &str = "EUNE";
        const DEFAULT_DDRAGON_VERSION: &str = "14.3.1";
        const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 100;

        let discord_token = env::var("DISCORD_TOKEN")
            .map_err(|_| AppError::Config("DISCORD_TOKEN must be set".into()))?;

        let riot_api_key = env::var("RIOT_API_KEY")
            .map_err(|_| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let default_platform = env::var("DEFAULT_SERVER")
            .unwrap_or_else(|_| DEFAULT_SERVER.into())
            .parse()?;

        let ddragon_version =
            env::var("DDRAGON_VERSION").unwrap_or_else(|_| DEFAULT_DDRAGON_VERSION.into());

        let riot_rate_limit_per_minute = env::var("RIOT_RATE_LIMIT_PER_MINUTE")
            .ok()
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new)
            .unwrap_or_else(|| {
                NonZeroU32::new(DEFAULT_RATE_LIMIT_PER_MINUTE).unwrap_or(NonZeroU32::MIN)
            });

        Ok(Self {
            discord_token,
            riot_api_key,
            default_platform,
            ddragon_version,
            riot_rate_limit_per_minute,
        })
    }
}
