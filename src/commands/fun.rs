use crate::flavor::{random_line, DRONE_JOKES, MOTIVATION_LINES};
use crate::{Context, Error};

/// Tell a random drone joke
#[poise::command(prefix_command, category = "Fun")]
pub async fn dronejoke(ctx: Context<'_>) -> Result<(), Error> {
    let line = random_line(DRONE_JOKES, &mut rand::rng());
    ctx.say(line).await?;
    Ok(())
}

/// Get a line of pilot motivation
#[poise::command(prefix_command, category = "Fun")]
pub async fn motivation(ctx: Context<'_>) -> Result<(), Error> {
    let line = random_line(MOTIVATION_LINES, &mut rand::rng());
    ctx.say(line).await?;
    Ok(())
}
