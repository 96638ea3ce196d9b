use super::{enter_command_log, resolve_account};
use crate::discord::bot::Context;
use crate::discord::embeds;
use crate::error::AppError;
use crate::riot::Platform;

/// Show the profile of a player.
#[poise::command(slash_command)]
pub async fn profile(
    ctx: Context<'_>,
    #[description = "Game name (before the #)"] name: String,
    #[description = "Tag line (after the #)"] tag: String,
    #[description = "Game server"] server: Option<Platform>,
) -> Result<(), AppError> {
    enter_command_log("profile");

    let platform = server.unwrap_or(ctx.data().default_platform);

    let Some(puuid) = resolve_account(&ctx, &name, &tag, platform).await? else {
        return Ok(());
    };

    ctx.defer().await?;

    let Some(user) = ctx.data().riot.profile_info(&puuid, platform).await? else {
        ctx.say(format!("Summoner **{}#{}** doesn't exist!", name, tag))
            .await?;
        return Ok(());
    };

    let embed = embeds::profile_embed(&user, &ctx.data().champions);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
