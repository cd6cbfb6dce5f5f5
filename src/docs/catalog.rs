use std::collections::HashMap;

use super::Document;

/// Insertion-ordered mapping from document id to [`Document`].
///
/// Iteration follows the order in which ids were first inserted. Re-inserting
/// an existing id replaces the document in place (last write wins, position
/// kept). Category, subcategory and tag indexes are derived on [`finish`].
///
/// [`finish`]: CatalogBuilder::finish
#[derive(Debug, Default)]
pub struct Catalog {
    docs: Vec<Document>,
    by_id: HashMap<String, usize>,
    categories: Vec<String>,
    by_category: HashMap<String, Vec<usize>>,
    subcategories: HashMap<String, Vec<String>>,
    by_tag: HashMap<String, Vec<usize>>,
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    docs: Vec<Document>,
    by_id: HashMap<String, usize>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a document. Returns `true` when it replaced an existing id.
    pub fn insert(&mut self, doc: Document) -> bool {
        match self.by_id.get(&doc.id) {
            Some(&idx) => {
                self.docs[idx] = doc;
                true
            }
            None => {
                self.by_id.insert(doc.id.clone(), self.docs.len());
                self.docs.push(doc);
                false
            }
        }
    }

    pub fn finish(self) -> Catalog {
        let mut categories: Vec<String> = Vec::new();
        let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();
        let mut subcategories: HashMap<String, Vec<String>> = HashMap::new();
        let mut by_tag: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, doc) in self.docs.iter().enumerate() {
            if !by_category.contains_key(&doc.category) {
                categories.push(doc.category.clone());
            }
            by_category.entry(doc.category.clone()).or_default().push(idx);

            let subs = subcategories.entry(doc.category.clone()).or_default();
            if let Some(sub) = doc.subcategory.as_deref().filter(|s| !s.is_empty()) {
                if !subs.iter().any(|s| s == sub) {
                    subs.push(sub.to_string());
                }
            }

            for tag in &doc.tags {
                by_tag.entry(tag.clone()).or_default().push(idx);
            }
        }

        Catalog {
            docs: self.docs,
            by_id: self.by_id,
            categories,
            by_category,
            subcategories,
            by_tag,
        }
    }
}

impl Catalog {
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.by_id.get(id).map(|&idx| &self.docs[idx])
    }

    /// All documents in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.iter()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Up to `n` ids in mapping order.
    pub fn sample_ids(&self, n: usize) -> Vec<&str> {
        self.docs.iter().take(n).map(|d| d.id.as_str()).collect()
    }

    /// Distinct categories, first-encountered order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Distinct non-empty subcategories of `category`, first-encountered order.
    pub fn subcategories(&self, category: &str) -> &[String] {
        self.subcategories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn in_category<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a Document> + 'a {
        self.indexed(self.by_category.get(category))
    }

    pub fn category_count(&self, category: &str) -> usize {
        self.by_category.get(category).map_or(0, Vec::len)
    }

    /// Documents carrying `tag`, in mapping order.
    pub fn with_tag<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Document> + 'a {
        self.indexed(self.by_tag.get(tag))
    }

    fn indexed<'a>(&'a self, idx: Option<&'a Vec<usize>>) -> impl Iterator<Item = &'a Document> + 'a {
        idx.into_iter().flatten().map(|&i| &self.docs[i])
    }
}

impl FromIterator<Document> for Catalog {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut builder = CatalogBuilder::new();
        for doc in iter {
            builder.insert(doc);
        }
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::sample_doc;

    #[test]
    fn test_last_write_wins_keeps_position() {
        let mut builder = CatalogBuilder::new();
        builder.insert(sample_doc("a/x", "a", None));
        builder.insert(sample_doc("a/y", "a", None));

        let mut replacement = sample_doc("a/x", "a", None);
        replacement.title = "Replacement".to_string();
        assert!(builder.insert(replacement));

        let catalog = builder.finish();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a/x").unwrap().title, "Replacement");
        assert_eq!(catalog.sample_ids(5), vec!["a/x", "a/y"]);
    }

    #[test]
    fn test_categories_and_subcategories_order() {
        let catalog: Catalog = vec![
            sample_doc("b/one", "b", None),
            sample_doc("a/s2/one", "a", Some("s2")),
            sample_doc("a/s1/one", "a", Some("s1")),
            sample_doc("a/s2/two", "a", Some("s2")),
            sample_doc("a/root", "a", None),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.categories(), ["b", "a"]);
        assert_eq!(catalog.subcategories("a"), ["s2", "s1"]);
        assert!(catalog.subcategories("b").is_empty());
        assert!(catalog.subcategories("missing").is_empty());
        assert_eq!(catalog.category_count("a"), 4);
        assert_eq!(catalog.category_count("missing"), 0);
    }

    #[test]
    fn test_with_tag() {
        let mut tagged = sample_doc("a/x", "a", None);
        tagged.tags.push("routing".to_string());
        let catalog: Catalog = vec![tagged, sample_doc("b/y", "b", None)]
            .into_iter()
            .collect();

        let ids: Vec<&str> = catalog.with_tag("routing").map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a/x"]);
        assert_eq!(catalog.with_tag("b").count(), 1);
        assert_eq!(catalog.with_tag("nothing").count(), 0);
    }

    #[test]
    fn test_empty_subcategory_ignored() {
        let catalog: Catalog = vec![sample_doc("a/x", "a", Some(""))].into_iter().collect();
        assert!(catalog.subcategories("a").is_empty());
    }
}
