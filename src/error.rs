use thiserror::Error;

use crate::riot::client::RiotApiError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Riot API error: {0}")]
    Riot(#[from] RiotApiError),

    #[error("Discord error: {0}")]
    Discord(Box<serenity::Error>),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "Unknown server '{0}'. Valid servers: BR, EUNE, EUW, JP, KR, LAN, LAS, NA, OCE, RU, SEA, TR, TW, VN"
    )]
    InvalidServer(String),

    #[error("Data Dragon error: {0}")]
    Ddragon(String),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(Box::new(err))
    }
}
