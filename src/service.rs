use std::collections::BTreeSet;

use anyhow::Result;
use async_trait::async_trait;
use futures_util::future::join_all;
use serde_json::Value;
use spdlog::warn;

use crate::manifest::{normalize_manifest, ManifestEntry};
use crate::paginator::{page_bounds, PageRequest, PaginatedPosts};
use crate::post::Post;

/// A per-item load that did not produce a post. Collected and returned
/// alongside the successful subset instead of being dumped onto a log the
/// caller cannot see.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    pub folder: String,
    pub reason: String,
}

impl FetchFailure {
    fn new(folder: &str, reason: impl Into<String>) -> Self {
        FetchFailure {
            folder: folder.to_string(),
            reason: reason.into(),
        }
    }
}

/// Every post the backend could deliver, newest first, plus the entries
/// that were dropped along the way.
#[derive(Debug)]
pub struct PostSet {
    pub posts: Vec<Post>,
    pub failures: Vec<FetchFailure>,
}

/// A blog content source. Backends implement the two primitives,
/// everything above them is shared.
///
/// A failed manifest fetch aborts the whole operation; a failed content
/// fetch only drops that one post. There is no retry and no cancellation:
/// when a caller supersedes an in-flight call (say, the tag filter changed),
/// discarding the stale result is the caller's job, typically by tagging
/// requests with a sequence number.
#[async_trait]
pub trait BlogService: Send + Sync {
    /// The raw manifest document, exactly as the backend stores it.
    /// Both wire shapes described in [`crate::manifest`] are acceptable.
    async fn fetch_manifest(&self) -> Result<Value>;

    /// Content for a single manifest entry. `Ok(None)` means the post is
    /// unavailable; `Err` is reserved for transport failures.
    async fn fetch_post_by_folder(&self, entry: &ManifestEntry) -> Result<Option<Post>>;

    /// Fetched, validated and sorted manifest entries, newest first.
    async fn manifest_entries(&self) -> Result<Vec<ManifestEntry>> {
        let raw = self.fetch_manifest().await?;
        normalize_manifest(raw)
    }

    /// All posts the manifest knows about, newest first.
    async fn fetch_all_posts(&self) -> Result<PostSet> {
        let entries = self.manifest_entries().await?;
        let (mut posts, failures) = collect_posts(self, &entries).await;
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(PostSet { posts, failures })
    }

    /// A single post by its folder name. An id absent from the manifest is
    /// not an error, and no content fetch is attempted for it.
    async fn fetch_post_by_id(&self, id: &str) -> Result<Option<Post>> {
        let entries = self.manifest_entries().await?;
        let Some(entry) = entries.iter().find(|entry| entry.folder == id) else {
            return Ok(None);
        };
        self.fetch_post_by_folder(entry).await
    }

    /// One page of posts, optionally narrowed to entries carrying at least
    /// one of the requested tags. `total` counts the filtered entries before
    /// slicing, and only the page slice is fetched from the backend.
    async fn fetch_posts_with_pagination(&self, request: PageRequest, tags: &[String]) -> Result<PaginatedPosts> {
        let request = request.normalized();
        let entries = self.manifest_entries().await?;

        let filtered: Vec<ManifestEntry> = entries
            .into_iter()
            .filter(|entry| tags.is_empty() || entry.tags.iter().any(|tag| tags.contains(tag)))
            .collect();

        let total = filtered.len();
        let (start, end) = page_bounds(request.page, request.limit, total);
        let (posts, failures) = collect_posts(self, &filtered[start..end]).await;

        Ok(PaginatedPosts {
            data: posts,
            total,
            page: request.page,
            limit: request.limit,
            has_more: end < total,
            failures,
        })
    }

    /// Every tag in the manifest, deduplicated and sorted ascending.
    async fn all_tags(&self) -> Result<Vec<String>> {
        let entries = self.manifest_entries().await?;
        let tags: BTreeSet<String> = entries.into_iter().flat_map(|entry| entry.tags).collect();
        Ok(tags.into_iter().collect())
    }
}

impl std::fmt::Debug for dyn BlogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BlogService")
    }
}

/// Fetches content for a batch of entries concurrently and splits the
/// outcome into posts and failures. Results keep manifest order.
async fn collect_posts<S: BlogService + ?Sized>(service: &S, entries: &[ManifestEntry]) -> (Vec<Post>, Vec<FetchFailure>) {
    let results = join_all(entries.iter().map(|entry| service.fetch_post_by_folder(entry))).await;

    let mut posts = Vec::with_capacity(entries.len());
    let mut failures = vec![];
    for (entry, result) in entries.iter().zip(results) {
        match result {
            Ok(Some(post)) => posts.push(post),
            Ok(None) => {
                warn!("No content available for {}", entry.folder);
                failures.push(FetchFailure::new(&entry.folder, "content unavailable"));
            }
            Err(e) => {
                warn!("Error fetching content for {}: {}", entry.folder, e);
                failures.push(FetchFailure::new(&entry.folder, e.to_string()));
            }
        }
    }
    (posts, failures)
}
