//! Documentation tree model, loading and caching.
//!
//! - **[`metadata`]** — title/description extraction from the `# Title [Description]` heading
//! - **[`loader`]** — one file → one [`Document`]
//! - **[`walker`]** — recursive category/subcategory walk of the documentation root
//! - **[`catalog`]** — insertion-ordered id → document mapping with derived indexes
//! - **[`store`]** — process-wide lazy cache around the catalog
pub mod catalog;
pub mod loader;
pub mod metadata;
pub mod store;
pub mod walker;

use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub use catalog::Catalog;
pub use store::DocStore;

/// File extensions recognised as documents.
pub const DOC_EXTENSIONS: [&str; 2] = [".md", ".mdx"];

/// A single indexed document. Immutable once inserted into a [`Catalog`].
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// `category[/subcategory]/filename`, extension stripped.
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: String,
    pub subcategory: Option<String>,
    /// Deduplicated, first-seen order.
    pub tags: Vec<String>,
    pub path: PathBuf,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// First 100 characters of the content with newlines flattened, followed by `...`.
    pub fn preview(&self) -> String {
        let head: String = self.content.chars().take(100).collect();
        format!("{}...", head.replace('\n', " "))
    }

    /// `category` or `category / subcategory`, as shown next to titles.
    pub fn location(&self) -> String {
        location_label(&self.category, self.subcategory.as_deref())
    }
}

/// `category` or `category / subcategory`.
pub fn location_label(category: &str, subcategory: Option<&str>) -> String {
    match subcategory {
        Some(sub) => format!("{category} / {sub}"),
        None => category.to_string(),
    }
}

/// Whether a file name carries one of the [`DOC_EXTENSIONS`].
pub fn is_doc_file(name: &str) -> bool {
    DOC_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

#[cfg(test)]
pub(crate) fn sample_doc(id: &str, category: &str, subcategory: Option<&str>) -> Document {
    Document {
        id: id.to_string(),
        title: format!("Title of {id}"),
        description: String::new(),
        content: format!("Body of {id}"),
        category: category.to_string(),
        subcategory: subcategory.map(str::to_string),
        tags: vec![category.to_string()],
        path: PathBuf::from(format!("{id}.md")),
        updated_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}
