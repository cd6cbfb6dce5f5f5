//! Read-only queries over the documentation catalog.
//!
//! [`QueryEngine`] returns plain data; [`render`] turns that data into the
//! text handed back to MCP clients, and [`text`] wires the two together, one
//! method per external request type.
pub mod render;
pub mod text;
pub mod uri;

use std::sync::Arc;

use crate::docs::{Catalog, DocStore, Document, location_label};

/// Listing entry: a document reduced to what list views show.
#[derive(Debug, Clone, PartialEq)]
pub struct DocSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub preview: String,
}

impl From<&Document> for DocSummary {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.title.clone(),
            description: doc.description.clone(),
            category: doc.category.clone(),
            subcategory: doc.subcategory.clone(),
            preview: doc.preview(),
        }
    }
}

impl DocSummary {
    pub fn location(&self) -> String {
        location_label(&self.category, self.subcategory.as_deref())
    }
}

/// Documents of one subcategory bucket; `name == None` is the root bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct SubcategoryGroup {
    pub name: Option<String>,
    pub docs: Vec<DocSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListing {
    pub category: String,
    pub subcategories: Vec<String>,
    /// Root bucket first, then one group per subcategory in listing order.
    pub groups: Vec<SubcategoryGroup>,
}

impl CategoryListing {
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.docs.is_empty())
    }

    pub fn doc_count(&self) -> usize {
        self.groups.iter().map(|g| g.docs.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    pub subcategories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicsSummary {
    pub total: usize,
    pub categories: Vec<CategorySummary>,
}

/// Two topics, each resolved to a document when possible.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub topic1: String,
    pub topic2: String,
    pub first: Option<Document>,
    pub second: Option<Document>,
}

impl Comparison {
    /// Tags of the first document also present on the second, first document's order.
    pub fn common_tags(&self) -> Vec<String> {
        match (&self.first, &self.second) {
            (Some(a), Some(b)) => a
                .tags
                .iter()
                .filter(|t| b.tags.contains(t))
                .cloned()
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: Arc<DocStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<DocStore>) -> Self {
        Self { store }
    }

    async fn catalog(&self) -> Arc<Catalog> {
        self.store.ensure_loaded().await
    }

    /// Exact id lookup.
    pub async fn get_by_id(&self, id: &str) -> Option<Document> {
        self.catalog().await.get(id).cloned()
    }

    pub async fn list_categories(&self) -> Vec<String> {
        self.store.list_categories().await
    }

    pub async fn list_subcategories(&self, category: &str) -> Vec<String> {
        self.store.list_subcategories(category).await
    }

    /// Documents of `category` grouped by subcategory, root bucket first.
    pub async fn list_by_category(&self, category: &str) -> CategoryListing {
        let catalog = self.catalog().await;
        let subcategories = catalog.subcategories(category).to_vec();
        let docs: Vec<DocSummary> = catalog.in_category(category).map(DocSummary::from).collect();

        let mut groups = Vec::with_capacity(subcategories.len() + 1);
        groups.push(SubcategoryGroup {
            name: None,
            docs: docs.iter().filter(|d| d.subcategory.is_none()).cloned().collect(),
        });
        for sub in &subcategories {
            groups.push(SubcategoryGroup {
                name: Some(sub.clone()),
                docs: docs
                    .iter()
                    .filter(|d| d.subcategory.as_deref() == Some(sub.as_str()))
                    .cloned()
                    .collect(),
            });
        }

        CategoryListing {
            category: category.to_string(),
            subcategories,
            groups,
        }
    }

    /// Documents matching both category and subcategory exactly.
    pub async fn list_by_subcategory(&self, category: &str, subcategory: &str) -> Vec<DocSummary> {
        self.catalog()
            .await
            .in_category(category)
            .filter(|d| d.subcategory.as_deref() == Some(subcategory))
            .map(DocSummary::from)
            .collect()
    }

    /// Documents carrying `tag`.
    pub async fn list_by_tag(&self, tag: &str) -> Vec<DocSummary> {
        self.catalog().await.with_tag(tag).map(DocSummary::from).collect()
    }

    /// Case-insensitive substring match over title, description, content and tags.
    pub async fn search(&self, query: &str) -> Vec<DocSummary> {
        let needle = query.to_lowercase();
        self.catalog()
            .await
            .iter()
            .filter(|d| search_text(d, true).contains(&needle))
            .map(DocSummary::from)
            .collect()
    }

    /// Resolves a topic to a document: exact id first, otherwise the first
    /// document whose title, description or content contains it.
    pub async fn find_doc(&self, topic: &str) -> Option<Document> {
        let catalog = self.catalog().await;
        if let Some(doc) = catalog.get(topic) {
            return Some(doc.clone());
        }
        let needle = topic.to_lowercase();
        catalog
            .iter()
            .find(|d| search_text(d, false).contains(&needle))
            .cloned()
    }

    pub async fn compare(&self, topic1: &str, topic2: &str) -> Comparison {
        Comparison {
            topic1: topic1.to_string(),
            topic2: topic2.to_string(),
            first: self.find_doc(topic1).await,
            second: self.find_doc(topic2).await,
        }
    }

    /// Per-category document count and subcategories.
    pub async fn topics_summary(&self) -> TopicsSummary {
        let catalog = self.catalog().await;
        TopicsSummary {
            total: catalog.len(),
            categories: catalog
                .categories()
                .iter()
                .map(|c| CategorySummary {
                    category: c.clone(),
                    count: catalog.category_count(c),
                    subcategories: catalog.subcategories(c).to_vec(),
                })
                .collect(),
        }
    }
}

/// Lowercased haystack for substring matching.
fn search_text(doc: &Document, with_tags: bool) -> String {
    let mut text = format!("{} {} {}", doc.title, doc.description, doc.content);
    if with_tags {
        text.push(' ');
        text.push_str(&doc.tags.join(" "));
    }
    text.to_lowercase()
}
