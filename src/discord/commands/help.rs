use super::enter_command_log;
use crate::discord::bot::Context;
use crate::discord::embeds;
use crate::error::AppError;

/// List the available commands and game servers.
#[poise::command(slash_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), AppError> {
    enter_command_log("help");

    let embed = embeds::help_embed(ctx.data().default_platform);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
