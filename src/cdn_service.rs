use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use spdlog::warn;

use crate::folder_name::parse_folder_name;
use crate::manifest::ManifestEntry;
use crate::post::Post;
use crate::service::BlogService;

/// Backend for a blog published to a CDN: `manifest.json` at the root,
/// one `{folder}/content.md` per post.
pub struct CdnService {
    base_url: String,
    client: reqwest::Client,
}

impl CdnService {
    pub fn new(base_url: &str) -> Self {
        CdnService {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn content_url(&self, folder: &str) -> String {
        format!("{}/{}/content.md", self.base_url, folder)
    }

    fn manifest_url(&self) -> String {
        format!("{}/manifest.json", self.base_url)
    }
}

#[async_trait]
impl BlogService for CdnService {
    async fn fetch_manifest(&self) -> Result<Value> {
        let url = self.manifest_url();
        let response = self.client.get(&url)
            .send()
            .await
            .with_context(|| format!("Error fetching manifest from {}", url))?
            .error_for_status()
            .with_context(|| format!("Error fetching manifest from {}", url))?;

        let manifest = response.json()
            .await
            .with_context(|| format!("Manifest at {} is not valid JSON", url))?;
        Ok(manifest)
    }

    async fn fetch_post_by_folder(&self, entry: &ManifestEntry) -> Result<Option<Post>> {
        let Some(date) = parse_folder_name(&entry.folder) else {
            return Ok(None);
        };

        let url = self.content_url(&entry.folder);
        let response = self.client.get(&url)
            .send()
            .await
            .with_context(|| format!("Error fetching {}", url))?;

        // A missing content.md is a dropped post, not a protocol error
        if !response.status().is_success() {
            warn!("No content.md found in {}", entry.folder);
            return Ok(None);
        }

        let content = response.text()
            .await
            .with_context(|| format!("Error reading body of {}", url))?;

        let post = Post::new(
            entry.folder.clone(),
            date,
            content,
            entry.folder.clone(),
            entry.tags.clone(),
        )?;
        Ok(Some(post))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let service = CdnService::new("https://cdn.example.com/blog");
        assert_eq!(service.manifest_url(), "https://cdn.example.com/blog/manifest.json");
        assert_eq!(service.content_url("230101"), "https://cdn.example.com/blog/230101/content.md");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let service = CdnService::new("https://cdn.example.com/blog/");
        assert_eq!(service.manifest_url(), "https://cdn.example.com/blog/manifest.json");
    }
}
