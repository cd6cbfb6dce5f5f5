use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tracing::{info, warn};

use super::catalog::{Catalog, CatalogBuilder};
use super::loader::load_document;
use super::{Document, is_doc_file};
use crate::error::{DocsError, Result};

type BranchFuture<'a> = Pin<Box<dyn Future<Output = Vec<Document>> + Send + 'a>>;

/// Indexes every category under `root` into a [`Catalog`].
///
/// Each immediate subdirectory of `root` is a category. An unreadable root
/// yields an empty catalog; unreadable branches and files are skipped.
pub async fn index_tree(root: &Path) -> Catalog {
    let entries = match list_dir(root).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Error loading documentation collection: {e}");
            return Catalog::default();
        }
    };

    let mut builder = CatalogBuilder::new();
    for (path, kind) in entries {
        if kind != EntryKind::Dir {
            continue;
        }
        let Some(category) = dir_name(&path) else {
            continue;
        };

        let docs = index_category(&path, &category).await;
        info!("Indexed {} documents for category \"{category}\"", docs.len());
        for doc in docs {
            builder.insert(doc);
        }
    }

    builder.finish()
}

/// Collects all documents below one category directory.
pub async fn index_category(dir: &Path, category: &str) -> Vec<Document> {
    let ctx = Branch {
        category,
        subcategory: None,
    };
    walk(ctx, dir.to_path_buf()).await
}

/// Category/subcategory in effect for a subtree.
#[derive(Clone, Copy)]
struct Branch<'a> {
    category: &'a str,
    subcategory: Option<&'a str>,
}

fn walk<'a>(ctx: Branch<'a>, dir: PathBuf) -> BranchFuture<'a> {
    Box::pin(async move {
        let entries = match list_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Error indexing documents in {}: {e}", dir.display());
                return Vec::new();
            }
        };

        let mut docs = Vec::new();
        for (path, kind) in entries {
            match kind {
                EntryKind::Dir => {
                    // The first directory below the category names the
                    // subcategory for everything beneath it.
                    let nested = match ctx.subcategory {
                        Some(_) => walk(ctx, path).await,
                        None => match dir_name(&path) {
                            Some(name) => {
                                let sub = Branch {
                                    subcategory: Some(name.as_str()),
                                    ..ctx
                                };
                                walk(sub, path).await
                            }
                            None => continue,
                        },
                    };
                    docs.extend(nested);
                }
                EntryKind::File => {
                    let is_doc = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(is_doc_file);
                    if !is_doc {
                        continue;
                    }
                    match load_document(&path, ctx.category, ctx.subcategory).await {
                        Ok(doc) => docs.push(doc),
                        Err(e) => warn!("Skipping document: {e}"),
                    }
                }
                EntryKind::Other => {}
            }
        }
        docs
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
    Other,
}

/// Lists a directory in filesystem enumeration order.
async fn list_dir(dir: &Path) -> Result<Vec<(PathBuf, EntryKind)>> {
    let list_err = |source| DocsError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut read_dir = tokio::fs::read_dir(dir).await.map_err(list_err)?;
    let mut entries = Vec::new();
    while let Some(entry) = read_dir.next_entry().await.map_err(list_err)? {
        let kind = match entry.file_type().await {
            Ok(ft) if ft.is_dir() => EntryKind::Dir,
            Ok(ft) if ft.is_file() => EntryKind::File,
            Ok(_) => EntryKind::Other,
            Err(e) => {
                warn!("Cannot stat {}: {e}", entry.path().display());
                EntryKind::Other
            }
        };
        entries.push((entry.path(), kind));
    }
    Ok(entries)
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
