use super::{ChannelInput, VideoRecord, YoutubeError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
const PAGE_SIZE: &str = "50";

#[derive(Debug, Deserialize)]
struct ItemList<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItem {
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnippet {
    channel_id: String,
}

#[derive(Debug, Deserialize)]
struct ChannelIdItem {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelDetailsItem {
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDetails {
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    uploads: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    snippet: PlaylistSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistSnippet {
    title: String,
    #[serde(default)]
    description: String,
    resource_id: ResourceId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    video_id: String,
}

/// Minimal YouTube Data API v3 client keyed by an API key.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl YoutubeClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_api_base(api_key, YOUTUBE_API_BASE)
    }

    pub fn with_api_base(api_key: &str, api_base: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ItemList<T>, YoutubeError> {
        debug!("YouTube request: {} {:?}", endpoint, params);
        let resp = self
            .client
            .get(format!("{}/{}", self.api_base, endpoint))
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(YoutubeError::Api { status, body });
        }
        Ok(resp.json().await?)
    }

    /// Turn a channel URL, handle, or id into the canonical channel id.
    pub async fn resolve_channel_id(&self, input: &str) -> Result<String, YoutubeError> {
        let parsed = ChannelInput::parse(input);
        if let Some(id) = parsed.channel_id {
            return Ok(id);
        }

        if let Some(handle) = parsed.handle.as_deref() {
            let found: ItemList<SearchItem> = self
                .get(
                    "search",
                    &[("part", "snippet"), ("q", handle), ("type", "channel"), ("maxResults", "1")],
                )
                .await?;
            if let Some(item) = found.items.into_iter().next() {
                return Ok(item.snippet.channel_id);
            }
        }

        if let Some(username) = parsed.username.as_deref() {
            let found: ItemList<ChannelIdItem> = self
                .get("channels", &[("part", "id"), ("forUsername", username)])
                .await?;
            if let Some(item) = found.items.into_iter().next() {
                return Ok(item.id);
            }
        }

        Err(YoutubeError::Unresolved)
    }

    pub async fn uploads_playlist_id(&self, channel_id: &str) -> Result<String, YoutubeError> {
        let found: ItemList<ChannelDetailsItem> = self
            .get("channels", &[("part", "contentDetails"), ("id", channel_id)])
            .await?;
        found
            .items
            .into_iter()
            .next()
            .and_then(|item| item.content_details.related_playlists.uploads)
            .ok_or_else(|| YoutubeError::NoUploads(channel_id.to_string()))
    }

    /// Walk every page of a playlist.
    pub async fn playlist_videos(&self, playlist_id: &str) -> Result<Vec<VideoRecord>, YoutubeError> {
        let mut videos = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut params = vec![
                ("part", "snippet"),
                ("playlistId", playlist_id),
                ("maxResults", PAGE_SIZE),
            ];
            if let Some(token) = page_token.as_deref() {
                params.push(("pageToken", token));
            }

            let page: ItemList<PlaylistItem> = self.get("playlistItems", &params).await?;
            videos.extend(page.items.into_iter().map(|item| {
                VideoRecord::new(
                    item.snippet.title,
                    &item.snippet.resource_id.video_id,
                    item.snippet.description,
                )
            }));
            info!("Fetched {} videos so far", videos.len());

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(videos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn playlist_item(title: &str, id: &str) -> serde_json::Value {
        json!({"snippet": {"title": title, "description": "", "resourceId": {"videoId": id}}})
    }

    #[tokio::test]
    async fn raw_ids_skip_the_api() {
        let server = MockServer::start().await;
        let client = YoutubeClient::with_api_base("yt-key", &server.uri());
        let id = client.resolve_channel_id("UCabc").await.unwrap();
        assert_eq!(id, "UCabc");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn handles_resolve_through_search() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "JoshuaBardwell"))
            .and(query_param("type", "channel"))
            .and(query_param("key", "yt-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"snippet": {"channelId": "UCX6b17PVsYBQ0ip5gyeme-Q"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = YoutubeClient::with_api_base("yt-key", &server.uri());
        let id = client
            .resolve_channel_id("https://www.youtube.com/@JoshuaBardwell")
            .await
            .unwrap();
        assert_eq!(id, "UCX6b17PVsYBQ0ip5gyeme-Q");
    }

    #[tokio::test]
    async fn legacy_usernames_resolve_through_channels() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/channels"))
            .and(query_param("forUsername", "rotorriot"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": "UCrr"}]})))
            .mount(&server)
            .await;

        let client = YoutubeClient::with_api_base("yt-key", &server.uri());
        let id = client
            .resolve_channel_id("https://www.youtube.com/user/rotorriot")
            .await
            .unwrap();
        assert_eq!(id, "UCrr");
    }

    #[tokio::test]
    async fn unknown_handles_are_unresolved() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let client = YoutubeClient::with_api_base("yt-key", &server.uri());
        let err = client.resolve_channel_id("@nobody").await.unwrap_err();
        assert!(matches!(err, YoutubeError::Unresolved));
        let err = client.resolve_channel_id("nonsense").await.unwrap_err();
        assert!(matches!(err, YoutubeError::Unresolved));
    }

    #[tokio::test]
    async fn uploads_playlist_comes_from_content_details() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/channels"))
            .and(query_param("part", "contentDetails"))
            .and(query_param("id", "UCabc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"contentDetails": {"relatedPlaylists": {"uploads": "UUabc"}}}]
            })))
            .mount(&server)
            .await;

        let client = YoutubeClient::with_api_base("yt-key", &server.uri());
        assert_eq!(client.uploads_playlist_id("UCabc").await.unwrap(), "UUabc");
    }

    #[tokio::test]
    async fn playlists_are_paginated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .and(query_param("playlistId", "UUabc"))
            .and(query_param_is_missing("pageToken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [playlist_item("Rates explained", "v1"), playlist_item("Soldering", "v2")],
                "nextPageToken": "PAGE2"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .and(query_param("pageToken", "PAGE2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [playlist_item("Filters", "v3")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = YoutubeClient::with_api_base("yt-key", &server.uri());
        let videos = client.playlist_videos("UUabc").await.unwrap();
        let titles: Vec<_> = videos.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Rates explained", "Soldering", "Filters"]);
        assert_eq!(videos[2].url, "https://www.youtube.com/watch?v=v3");
    }

    #[tokio::test]
    async fn api_errors_surface() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/channels"))
            .respond_with(ResponseTemplate::new(403).set_body_string("quotaExceeded"))
            .mount(&server)
            .await;

        let client = YoutubeClient::with_api_base("yt-key", &server.uri());
        let err = client.uploads_playlist_id("UCabc").await.unwrap_err();
        assert!(matches!(err, YoutubeError::Api { .. }));
        assert!(err.to_string().contains("quotaExceeded"));
    }
}
