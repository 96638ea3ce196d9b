use super::{enter_command_log, resolve_account};
use crate::discord::bot::Context;
use crate::discord::embeds;
use crate::error::AppError;
use crate::riot::Platform;

const DEFAULT_COUNT: u32 = 5;

/// Out-of-range counts silently fall back to the default window, before any
/// network call is made.
fn normalize_count(count: Option<u32>) -> u32 {
    match count {
        Some(c) if (1..=20).contains(&c) => c,
        _ => DEFAULT_COUNT,
    }
}

/// Show the last n matches of a player.
#[poise::command(slash_command)]
pub async fn history(
    ctx: Context<'_>,
    #[description = "Game name (before the #)"] name: String,
    #[description = "Tag line (after the #)"] tag: String,
    #[description = "Number of games (1-20)"] count: Option<u32>,
    #[description = "Game server"] server: Option<Platform>,
) -> Result<(), AppError> {
    enter_command_log("history");

    let count = normalize_count(count);
    let platform = server.unwrap_or(ctx.data().default_platform);

    let Some(puuid) = resolve_account(&ctx, &name, &tag, platform).await? else {
        return Ok(());
    };

    // Resolving a full window of matches takes a while.
    ctx.defer().await?;

    let Some((games, summoner)) = ctx
        .data()
        .riot
        .recent_matches_infos(&puuid, platform, count)
        .await?
    else {
        ctx.say(format!("Summoner **{}#{}** doesn't exist!", name, tag))
            .await?;
        return Ok(());
    };

    if games.is_empty() {
        ctx.say(format!(
            "No match history found for summoner {}#{}",
            name, tag
        ))
        .await?;
        return Ok(());
    }

    let embed = embeds::history_embed(
        &games,
        &summoner,
        &format!("{}#{}", name, tag),
        &ctx.data().champions,
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_counts_fall_back_to_default() {
        assert_eq!(normalize_count(Some(0)), 5);
        assert_eq!(normalize_count(Some(25)), 5);
        assert_eq!(normalize_count(Some(1)), 1);
        assert_eq!(normalize_count(Some(20)), 20);
        assert_eq!(normalize_count(None), 5);
    }
}
