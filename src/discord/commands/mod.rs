mod help;
mod history;
mod match_info;
mod profile;

pub use help::help;
pub use history::history;
pub use match_info::match_info;
pub use profile::profile;

use tracing::info;

use crate::discord::bot::Context;
use crate::error::AppError;
use crate::riot::Platform;

fn enter_command_log(command_name: &str) {
    info!("/{} invoked", command_name)
}

/// Resolve a Riot ID to its PUUID, answering with the not-found message when
/// the account does not exist.
async fn resolve_account(
    ctx: &Context<'_>,
    name: &str,
    tag: &str,
    platform: Platform,
) -> Result<Option<String>, AppError> {
    let puuid = ctx
        .data()
        .riot
        .account_puuid(name, tag, platform.to_region())
        .await?;
    if puuid.is_none() {
        ctx.say(format!("Riot account **{}#{}** doesn't exist!", name, tag))
            .await?;
    }
    Ok(puuid)
}
