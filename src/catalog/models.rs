use serde::{Deserialize, Serialize};

/// Flattened metadata for one catalog video.
#[derive(Debug, Clone)]
pub struct VideoMetadata {
    pub title: String,
    pub author: String,
    pub description: String,
    /// ISO 8601 duration as the catalog reports it, e.g. "PT4M13S".
    pub duration: String,
    pub published_at: String,
    pub likes: String,
    pub views: String,
    pub comment_count: String,
    pub channel_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub published_at: String,
}

/// Raw search result before proxy rewriting.
#[derive(Debug, Clone)]
pub struct SearchItem {
    pub title: String,
    pub author: String,
    pub video_id: String,
    pub channel_id: String,
}

/// One row of a catalog search response.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub author: String,
    pub video_id: String,
    pub thumbnail: String,
    pub channel_thumbnail: String,
    pub url: String,
}

/// Full JSON body of the resolve endpoint.
#[derive(Debug, Serialize)]
pub struct VideoInfoResponse {
    pub title: String,
    pub author: String,
    pub description: String,
    pub video_id: String,
    pub embed_url: String,
    pub duration: String,
    pub published_at: String,
    pub likes: String,
    pub views: String,
    pub comment_count: String,
    pub comments: Vec<Comment>,
    pub channel_thumbnail: String,
    pub thumbnail: String,
    /// Absent playback is an expected outcome, hence nullable rather than
    /// an error.
    pub video_url: Option<String>,
}
