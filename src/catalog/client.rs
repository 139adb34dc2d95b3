use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::models::{Comment, SearchItem, VideoMetadata};
use crate::common::http::HttpClient;
use crate::common::types::VideoId;
use crate::configs::CatalogConfig;

/// Gateway to the upstream video-catalog API (Data API v3 shape). Plain
/// metadata CRUD; every method is best-effort and maps upstream oddities to
/// empty results instead of errors.
pub struct CatalogClient {
    api_base: String,
    client: Client,
}

fn text_at<'a>(value: &'a Value, path: &[&str]) -> &'a str {
    let mut current = value;
    for key in path {
        match current.get(key) {
            Some(next) => current = next,
            None => return "",
        }
    }
    current.as_str().unwrap_or("")
}

/// Statistics come back as JSON strings, but missing fields are common on
/// videos with disabled counters.
fn stat_at(value: &Value, key: &str) -> String {
    value
        .get("statistics")
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("0")
        .to_string()
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            client: HttpClient::new()?,
        })
    }

    async fn get_json(&self, url: &str) -> Option<Value> {
        match self.client.get(url).send().await {
            Ok(response) => match response.json::<Value>().await {
                Ok(body) => Some(body),
                Err(e) => {
                    warn!("Catalog response was not JSON: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Catalog request failed: {}", e);
                None
            }
        }
    }

    /// Returns `None` when the catalog has no record for the id.
    pub async fn video_metadata(&self, video_id: &VideoId, api_key: &str) -> Option<VideoMetadata> {
        let url = format!(
            "{}/videos?id={}&key={}&part=snippet,contentDetails,statistics",
            self.api_base, video_id, api_key
        );

        let body = self.get_json(&url).await?;
        let item = body.get("items").and_then(|i| i.get(0))?;

        Some(VideoMetadata {
            title: text_at(item, &["snippet", "title"]).to_string(),
            author: text_at(item, &["snippet", "channelTitle"]).to_string(),
            description: text_at(item, &["snippet", "description"]).to_string(),
            duration: text_at(item, &["contentDetails", "duration"]).to_string(),
            published_at: text_at(item, &["snippet", "publishedAt"]).to_string(),
            likes: stat_at(item, "likeCount"),
            views: stat_at(item, "viewCount"),
            comment_count: stat_at(item, "commentCount"),
            channel_id: text_at(item, &["snippet", "channelId"]).to_string(),
        })
    }

    /// Top-level comments, best effort. Comments being disabled or the call
    /// failing both come back as an empty list.
    pub async fn comments(&self, video_id: &VideoId, api_key: &str, max: u32) -> Vec<Comment> {
        let url = format!(
            "{}/commentThreads?key={}&textFormat=plainText&part=snippet&videoId={}&maxResults={}",
            self.api_base, api_key, video_id, max
        );

        let Some(body) = self.get_json(&url).await else {
            return Vec::new();
        };

        let Some(items) = body.get("items").and_then(|i| i.as_array()) else {
            debug!("No comments returned for {}", video_id);
            return Vec::new();
        };

        items
            .iter()
            .map(|item| Comment {
                author: text_at(
                    item,
                    &["snippet", "topLevelComment", "snippet", "authorDisplayName"],
                )
                .to_string(),
                text: text_at(item, &["snippet", "topLevelComment", "snippet", "textDisplay"])
                    .to_string(),
                published_at: text_at(
                    item,
                    &["snippet", "topLevelComment", "snippet", "publishedAt"],
                )
                .to_string(),
            })
            .collect()
    }

    /// Default-size channel thumbnail URL, or `None` when the channel is
    /// unknown or the lookup fails.
    pub async fn channel_thumbnail(&self, channel_id: &str, api_key: &str) -> Option<String> {
        if channel_id.is_empty() {
            return None;
        }

        let url = format!(
            "{}/channels?part=snippet&id={}&key={}",
            self.api_base, channel_id, api_key
        );

        let body = self.get_json(&url).await?;
        let thumb = text_at(
            body.get("items")?.get(0)?,
            &["snippet", "thumbnails", "default", "url"],
        );

        if thumb.is_empty() {
            None
        } else {
            Some(thumb.to_string())
        }
    }

    pub async fn search(&self, query: &str, max: u32, api_key: &str) -> Vec<SearchItem> {
        let url = format!(
            "{}/search?part=snippet&q={}&maxResults={}&type=video&key={}",
            self.api_base,
            urlencoding::encode(query),
            max,
            api_key
        );

        let Some(body) = self.get_json(&url).await else {
            return Vec::new();
        };

        let Some(items) = body.get("items").and_then(|i| i.as_array()) else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| {
                let video_id = text_at(item, &["id", "videoId"]);
                if video_id.is_empty() {
                    return None;
                }
                Some(SearchItem {
                    title: text_at(item, &["snippet", "title"]).to_string(),
                    author: text_at(item, &["snippet", "channelTitle"]).to_string(),
                    video_id: video_id.to_string(),
                    channel_id: text_at(item, &["snippet", "channelId"]).to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_at_walks_nested_objects() {
        let body = json!({"snippet": {"title": "A video"}});
        assert_eq!(text_at(&body, &["snippet", "title"]), "A video");
        assert_eq!(text_at(&body, &["snippet", "missing"]), "");
        assert_eq!(text_at(&body, &["nope"]), "");
    }

    #[test]
    fn missing_statistics_default_to_zero() {
        let item = json!({"statistics": {"viewCount": "123"}});
        assert_eq!(stat_at(&item, "viewCount"), "123");
        assert_eq!(stat_at(&item, "likeCount"), "0");
    }
}
