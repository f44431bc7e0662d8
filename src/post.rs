use std::fmt;
use std::fmt::{Display, Formatter};

use anyhow::{bail, Result};
use chrono::NaiveDate;

pub const DEFAULT_PREVIEW_LEN: usize = 300;

/// A single blog post, assembled from a manifest entry and its fetched
/// markdown content. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub name: String,
    pub date: NaiveDate,
    pub content: String,
    pub folder: String,
    pub tags: Vec<String>,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "name={}, date={}, folder={}, tags={}\ncontent:\n{}",
               self.name,
               self.date,
               self.folder,
               self.tags.join(" "),
               self.content,
        )
    }
}

impl Post {
    /// Validation happens eagerly, first failing field wins:
    /// name, content, folder.
    pub fn new(name: String, date: NaiveDate, content: String, folder: String, tags: Vec<String>) -> Result<Post> {
        if name.trim().is_empty() {
            bail!("Post name is required");
        }
        if content.trim().is_empty() {
            bail!("Post content is required");
        }
        if folder.trim().is_empty() {
            bail!("Post folder is required");
        }

        Ok(Post {
            name,
            date,
            content,
            folder,
            tags,
        })
    }

    /// First `max_length` characters of the content, with a trailing
    /// ellipsis when the content was cut.
    pub fn preview(&self, max_length: usize) -> String {
        if self.content.chars().count() > max_length {
            let truncated: String = self.content.chars().take(max_length).collect();
            truncated + "..."
        } else {
            self.content.clone()
        }
    }

    pub fn preview_default(&self) -> String {
        self.preview(DEFAULT_PREVIEW_LEN)
    }

    /// Long date rendering, e.g. "1 January 2025".
    pub fn formatted_date(&self) -> String {
        self.date.format("%-d %B %Y").to_string()
    }
}
