use poise::serenity_prelude as serenity;
use tracing::info;

use lolbot::config::Config;
use lolbot::ddragon::ChampionIndex;
use lolbot::discord::bot::{create_framework, Data};
use lolbot::error::AppError;
use lolbot::logging;
use lolbot::riot::{RiotApi, RiotClient};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logging::init();

    let config = Config::from_env()?;

    // The champion table is required for rendering; failing to fetch it is a
    // startup fault, not a runtime surprise.
    let champions = ChampionIndex::load(&config.ddragon_version).await?;
    info!("loaded champion index for ddragon v{}", champions.version());

    let client = RiotClient::new(
        config.riot_api_key.clone(),
        config.riot_rate_limit_per_minute,
    );
    client.start_metrics_logging();

    let data = Data {
        riot: RiotApi::new(client),
        champions,
        default_platform: config.default_platform,
    };

    let framework = create_framework(data);
    let intents = serenity::GatewayIntents::non_privileged();

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await?;

    info!("🚀 starting bot");
    client.start().await?;
    Ok(())
}
