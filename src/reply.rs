use crate::config::DISCORD_MESSAGE_LIMIT;
use crate::Error;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use tracing::debug;

pub const EMPTY_PLACEHOLDER: &str = "(no content)";

/// Somewhere a command can post plain text messages.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Typing stays visible until the guard is dropped.
    type TypingGuard: Send;

    fn start_typing(&self) -> Self::TypingGuard;

    async fn send_text(&self, content: String) -> Result<(), Error>;
}

#[async_trait]
impl<'a, 'e> MessageSink
    for poise::Context<'a, crate::Data, Box<dyn std::error::Error + Send + Sync + 'e>>
{
    type TypingGuard = serenity::Typing;

    fn start_typing(&self) -> serenity::Typing {
        self.channel_id().start_typing(&self.serenity_context().http)
    }

    async fn send_text(&self, content: String) -> Result<(), Error> {
        self.say(content).await?;
        Ok(())
    }
}

/// Split `text` into contiguous pieces of at most `limit` characters.
///
/// Splits on `char` boundaries, so multi-byte text is never cut mid-codepoint.
/// An empty string yields no chunks.
pub fn chunk_text(text: &str, limit: usize) -> Vec<&str> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == limit {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}

/// Send `text` in platform-sized chunks, awaiting each before the next.
pub async fn deliver<S: MessageSink + ?Sized>(sink: &S, text: &str) -> Result<(), Error> {
    if text.is_empty() {
        sink.send_text(EMPTY_PLACEHOLDER.to_string()).await?;
        return Ok(());
    }

    let chunks = chunk_text(text, DISCORD_MESSAGE_LIMIT);
    debug!("Delivering reply in {} chunk(s)", chunks.len());
    for chunk in chunks {
        sink.send_text(chunk.to_string()).await?;
    }
    Ok(())
}
