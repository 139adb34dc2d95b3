use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, warn};

use crate::common::types::{QualityTier, VideoId};
use crate::resolve::strategy::{Budget, ResolutionStrategy};

/// Shells out to a configured resolver tool (typically a yt-dlp wrapper)
/// and scrapes the direct URL from its stdout. Behind the same trait as the
/// network strategies: the process runs under the remaining budget and any
/// failure is just this strategy failing.
pub struct ExternalCommandStrategy {
    command: Vec<String>,
    url_pattern: Regex,
}

impl ExternalCommandStrategy {
    pub fn new(command: Vec<String>) -> Self {
        Self {
            command,
            url_pattern: Regex::new(r"Direct video URL: (https?://\S+)").unwrap(),
        }
    }

    fn parse_output(&self, stdout: &str) -> Option<String> {
        self.url_pattern
            .captures(stdout)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

#[async_trait]
impl ResolutionStrategy for ExternalCommandStrategy {
    fn name(&self) -> &str {
        "external-command"
    }

    async fn resolve(
        &self,
        video_id: &VideoId,
        _quality: QualityTier,
        budget: &Budget,
    ) -> Option<String> {
        let (program, args) = self.command.split_first()?;

        let mut cmd = tokio::process::Command::new(program);
        cmd.args(args)
            .arg(&video_id.0)
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::null())
            .kill_on_drop(true);

        match tokio::time::timeout(budget.remaining(), cmd.output()).await {
            Ok(Ok(output)) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let url = self.parse_output(&stdout);
                if url.is_none() {
                    debug!("external-command produced no URL for {}", video_id);
                }
                url
            }
            Ok(Err(e)) => {
                warn!("external-command failed to run for {}: {}", video_id, e);
                None
            }
            Err(_) => {
                debug!("external-command timed out for {}", video_id);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_direct_url_line() {
        let strategy = ExternalCommandStrategy::new(vec!["true".to_string()]);
        let out = "some noise\nDirect video URL: https://cdn.example/v.mp4\ntrailer";
        assert_eq!(
            strategy.parse_output(out).as_deref(),
            Some("https://cdn.example/v.mp4")
        );
    }

    #[test]
    fn missing_marker_yields_none() {
        let strategy = ExternalCommandStrategy::new(vec!["true".to_string()]);
        assert_eq!(strategy.parse_output("Could not get video URL"), None);
    }

    #[tokio::test]
    async fn echo_tool_resolves() {
        let strategy = ExternalCommandStrategy::new(vec![
            "sh".to_string(),
            "-c".to_string(),
            "echo Direct video URL: https://cdn.example/$0.mp4".to_string(),
        ]);
        let budget = Budget::new(std::time::Duration::from_secs(5));
        let url = strategy
            .resolve(&VideoId::from("abc123"), QualityTier::Q360, &budget)
            .await;
        assert_eq!(url.as_deref(), Some("https://cdn.example/abc123.mp4"));
    }
}
