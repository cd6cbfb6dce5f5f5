use chrono::{DateTime, Utc};
use std::path::Path;

use super::Document;
use super::metadata::extract_title;
use crate::error::{DocsError, Result};

/// Reads one document file and builds its [`Document`] record.
///
/// `subcategory` is the directory the file was found under (if any) inside
/// its category.
pub async fn load_document(
    path: &Path,
    category: &str,
    subcategory: Option<&str>,
) -> Result<Document> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DocsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|source| DocsError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
    let updated_at: DateTime<Utc> = metadata
        .modified()
        .map_err(|source| DocsError::Stat {
            path: path.to_path_buf(),
            source,
        })?
        .into();

    let filename = file_token(path);
    let info = extract_title(&content);
    let tags = build_tags(category, subcategory, &filename, &info.title);
    let id = build_id(category, subcategory, &filename);

    Ok(Document {
        id,
        title: info.title,
        description: info.description,
        content,
        category: category.to_string(),
        subcategory: subcategory.map(str::to_string),
        tags,
        path: path.to_path_buf(),
        updated_at,
    })
}

/// File name with its last extension removed.
fn file_token(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `category[/subcategory]/filename`.
pub fn build_id(category: &str, subcategory: Option<&str>, filename: &str) -> String {
    let mut parts = vec![category];
    parts.extend(subcategory);
    parts.push(filename);
    parts.join("/")
}

/// Structural tags first, then filename pieces, then title words longer than
/// three characters. Duplicates keep their first position.
pub fn build_tags(
    category: &str,
    subcategory: Option<&str>,
    filename: &str,
    title: &str,
) -> Vec<String> {
    let mut candidates: Vec<String> = vec![category.to_string()];
    candidates.extend(subcategory.map(str::to_string));
    candidates.push(filename.to_string());

    if filename.contains('-') {
        candidates.extend(filename.split('-').map(str::to_string));
    }

    candidates.extend(
        title
            .to_lowercase()
            .split_whitespace()
            .filter(|w| w.chars().count() > 3)
            .map(str::to_string),
    );

    let mut tags: Vec<String> = Vec::with_capacity(candidates.len());
    for tag in candidates {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
