use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use super::catalog::Catalog;
use super::walker::index_tree;

/// Process-wide documentation cache.
///
/// The tree under `root` is walked once, on the first call to
/// [`ensure_loaded`](Self::ensure_loaded). Concurrent first callers wait on the
/// same walk; every later call returns the same cached [`Catalog`].
#[derive(Debug)]
pub struct DocStore {
    root: PathBuf,
    catalog: OnceCell<Arc<Catalog>>,
}

impl DocStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            catalog: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.initialized()
    }

    /// Returns the cached catalog, indexing the tree first if needed.
    pub async fn ensure_loaded(&self) -> Arc<Catalog> {
        self.catalog
            .get_or_init(|| async {
                info!("Loading documentation from {}...", self.root.display());
                let catalog = index_tree(&self.root).await;
                info!("Loaded {} documentation entries", catalog.len());
                if !catalog.is_empty() {
                    info!("Sample document IDs: {}", catalog.sample_ids(5).join(", "));
                }
                Arc::new(catalog)
            })
            .await
            .clone()
    }

    /// Distinct categories, first-encountered order.
    pub async fn list_categories(&self) -> Vec<String> {
        self.ensure_loaded().await.categories().to_vec()
    }

    /// Distinct subcategories of `category`, first-encountered order.
    pub async fn list_subcategories(&self, category: &str) -> Vec<String> {
        self.ensure_loaded().await.subcategories(category).to_vec()
    }
}
