use dotenvy::dotenv;
use fpv_assistant::youtube::{ResourceStore, YoutubeClient, DEFAULT_RESOURCES_PATH};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let api_key = env::var("YOUTUBE_API_KEY")
        .map_err(|_| anyhow::anyhow!("YOUTUBE_API_KEY must be set"))?;
    let resources_path = PathBuf::from(
        env::var("YOUTUBE_RESOURCES_PATH").unwrap_or_else(|_| DEFAULT_RESOURCES_PATH.to_string()),
    );

    print!("Enter the YouTube Channel URL, handle, or Channel ID: ");
    io::stdout().flush()?;
    let mut channel_input = String::new();
    io::stdin().read_line(&mut channel_input)?;

    let client = YoutubeClient::new(&api_key);
    let channel_id = match client.resolve_channel_id(channel_input.trim()).await {
        Ok(id) => id,
        Err(e) => {
            error!("Error resolving channel: {}", e);
            return Err(e.into());
        }
    };
    println!("Resolved channel ID: {}", channel_id);

    let mut store = ResourceStore::load(&resources_path)?;
    let uploads = client.uploads_playlist_id(&channel_id).await?;
    info!("Uploads playlist for {}: {}", channel_id, uploads);

    let videos = client.playlist_videos(&uploads).await?;
    let added = store.merge(videos)?;
    store.save()?;

    println!(
        "✅ Added {} new videos ({} total) to {}",
        added,
        store.videos().len(),
        resources_path.display()
    );
    Ok(())
}
