use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::folder_name::parse_folder_name;
use crate::manifest::ManifestEntry;
use crate::post::Post;
use crate::service::BlogService;

/// In-process backend for development and tests. No transport involved;
/// the manifest is synthesized from the posts it holds.
pub struct MockService {
    posts: Vec<Post>,
}

/// The canned development content. Called explicitly so there is no
/// hidden process-load initialization.
pub fn sample_posts() -> Vec<Post> {
    let samples = [
        ("250901", "# First Post\nThis is the content of the first post.\nIt supports **Markdown** formatting!", vec!["intro"]),
        ("250910", "# Second Post\nHere is some more content for the second post.\nEnjoy reading!", vec!["intro", "writing"]),
        ("250914", "# Third Post\nThis is the third sample blog post.\nStay tuned for more!", vec![]),
    ];

    samples
        .into_iter()
        .map(|(folder, content, tags)| {
            let date = parse_folder_name(folder).unwrap();
            let tags = tags.into_iter().map(|tag: &str| tag.to_string()).collect();
            Post::new(folder.to_string(), date, content.to_string(), folder.to_string(), tags).unwrap()
        })
        .collect()
}

impl MockService {
    pub fn new() -> Self {
        MockService { posts: sample_posts() }
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        MockService { posts }
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogService for MockService {
    async fn fetch_manifest(&self) -> Result<Value> {
        let entries: Vec<Value> = self.posts
            .iter()
            .map(|post| json!({ "folder": post.folder, "tags": post.tags }))
            .collect();
        Ok(Value::Array(entries))
    }

    async fn fetch_post_by_folder(&self, entry: &ManifestEntry) -> Result<Option<Post>> {
        let post = self.posts.iter().find(|post| post.folder == entry.folder);
        Ok(post.cloned())
    }
}
