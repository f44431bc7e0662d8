use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::folder_name::parse_folder_name;

/// One row of the remote catalog: a date-named folder plus its tags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestEntry {
    pub folder: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The two wire shapes of manifest.json. Older blogs publish a bare list of
/// folder names; newer ones a list of entries carrying tags.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawManifest {
    Tagged(Vec<ManifestEntry>),
    Legacy(Vec<String>),
}

/// Decodes a raw manifest document into a clean entry list: legacy folder
/// names get empty tags, folders that do not decode to a calendar date are
/// skipped, and the survivors are sorted by date, newest first.
pub fn normalize_manifest(raw: Value) -> Result<Vec<ManifestEntry>> {
    let manifest: RawManifest = serde_json::from_value(raw)
        .context("Manifest is neither a folder list nor an entry list")?;

    let entries = match manifest {
        RawManifest::Tagged(entries) => entries,
        RawManifest::Legacy(folders) => folders
            .into_iter()
            .map(|folder| ManifestEntry { folder, tags: vec![] })
            .collect(),
    };

    let mut dated: Vec<_> = entries
        .into_iter()
        .filter_map(|entry| parse_folder_name(&entry.folder).map(|date| (date, entry)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(dated.into_iter().map(|(_, entry)| entry).collect())
}
