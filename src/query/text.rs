use super::uri::DocUri;
use super::{QueryEngine, render};

/// Rendered responses, one per external request type.
impl QueryEngine {
    pub async fn doc_text(&self, id: &str) -> String {
        render::document(id, self.get_by_id(id).await.as_ref())
    }

    pub async fn category_text(&self, category: &str) -> String {
        render::category(&self.list_by_category(category).await)
    }

    pub async fn subcategory_text(&self, category: &str, subcategory: &str) -> String {
        let docs = self.list_by_subcategory(category, subcategory).await;
        render::subcategory(category, subcategory, &docs)
    }

    pub async fn search_text(&self, query: &str) -> String {
        render::search(query, &self.search(query).await)
    }

    pub async fn tag_text(&self, tag: &str) -> String {
        render::tagged(tag, &self.list_by_tag(tag).await)
    }

    pub async fn topics_text(&self) -> String {
        render::topics(&self.topics_summary().await)
    }

    pub async fn categories_text(&self) -> String {
        render::categories(&self.list_categories().await)
    }

    pub async fn compare_text(&self, topic1: &str, topic2: &str) -> String {
        render::comparison(&self.compare(topic1, topic2).await)
    }

    /// Follows an access pointer printed by one of the listings.
    pub async fn uri_text(&self, uri: &DocUri) -> String {
        match uri {
            DocUri::Doc(id) => self.doc_text(id).await,
            DocUri::Category(category) => self.category_text(category).await,
            DocUri::Subcategory {
                category,
                subcategory,
            } => self.subcategory_text(category, subcategory).await,
        }
    }
}
