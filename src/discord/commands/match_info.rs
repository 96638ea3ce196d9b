use super::{enter_command_log, resolve_account};
use crate::discord::bot::Context;
use crate::discord::embeds;
use crate::error::AppError;
use crate::riot::Platform;

/// Show the n-th last match of a player.
#[poise::command(slash_command, rename = "match")]
pub async fn match_info(
    ctx: Context<'_>,
    #[description = "Game name (before the #)"] name: String,
    #[description = "Tag line (after the #)"] tag: String,
    #[description = "How many games back, 1 = most recent"] id: Option<u32>,
    #[description = "Game server"] server: Option<Platform>,
) -> Result<(), AppError> {
    enter_command_log("match");

    let id = id.unwrap_or(1);
    let platform = server.unwrap_or(ctx.data().default_platform);

    if !(1..=100).contains(&id) {
        ctx.say("You can only see your last 100 matches!").await?;
        return Ok(());
    }

    let Some(puuid) = resolve_account(&ctx, &name, &tag, platform).await? else {
        return Ok(());
    };

    // Resolving every participant's name tag takes a while.
    ctx.defer().await?;

    if ctx
        .data()
        .riot
        .summoner_by_puuid(&puuid, platform)
        .await?
        .is_none()
    {
        ctx.say(format!("Summoner **{}#{}** doesn't exist!", name, tag))
            .await?;
        return Ok(());
    }

    let Some(game) = ctx
        .data()
        .riot
        .recent_match_info(&puuid, platform, (id - 1) as usize)
        .await?
    else {
        ctx.say("Match not found!").await?;
        return Ok(());
    };

    let embed = embeds::match_embed(&game, &puuid);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
