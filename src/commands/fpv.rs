use crate::{pipeline, Context, Error};
use tracing::{debug, error, info};

pub const USAGE: &str = "Usage: !fpv <question>";

/// Ask the FPV agent a question. Usage: !fpv <question>
#[poise::command(prefix_command, category = "FPV")]
pub async fn fpv(
    ctx: Context<'_>,
    #[description = "Your FPV question"]
    #[rest]
    question: Option<String>,
) -> Result<(), Error> {
    let Some(question) = question.map(|q| q.trim().to_string()).filter(|q| !q.is_empty()) else {
        ctx.say(USAGE).await?;
        return Ok(());
    };

    info!(
        "FPV question from {} in channel {}: {}",
        ctx.author().name,
        ctx.channel_id(),
        question
    );

    let data = ctx.data();
    debug!(
        "Searching trusted domains: {}",
        data.config.trusted_domains.join(", ")
    );

    // Typing is shown by the pipeline for the whole invocation
    if let Err(e) = pipeline::run(&data.search, &data.llm_client, &ctx, &question).await {
        error!("Unexpected error in !fpv: {:?}", e);
        ctx.say(format!("An error occurred: {}", e)).await?;
    }

    Ok(())
}
