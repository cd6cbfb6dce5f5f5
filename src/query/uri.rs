use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const DOC_SCHEME: &str = "docs://";
pub const CATEGORY_SCHEME: &str = "docs-category://";
pub const SUBCATEGORY_SCHEME: &str = "docs-subcategory://";

/// Access pointer to a document, a category, or a subcategory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocUri {
    Doc(String),
    Category(String),
    Subcategory { category: String, subcategory: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UriError {
    #[error("unsupported URI scheme: {0}")]
    UnknownScheme(String),

    #[error("missing {part} in URI: {uri}")]
    Missing { part: &'static str, uri: String },
}

impl DocUri {
    pub fn doc(id: &str) -> Self {
        Self::Doc(id.to_string())
    }

    pub fn category(category: &str) -> Self {
        Self::Category(category.to_string())
    }

    pub fn subcategory(category: &str, subcategory: &str) -> Self {
        Self::Subcategory {
            category: category.to_string(),
            subcategory: subcategory.to_string(),
        }
    }
}

impl fmt::Display for DocUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doc(id) => write!(f, "{DOC_SCHEME}{id}"),
            Self::Category(c) => write!(f, "{CATEGORY_SCHEME}{c}"),
            Self::Subcategory {
                category,
                subcategory,
            } => write!(f, "{SUBCATEGORY_SCHEME}{category}/{subcategory}"),
        }
    }
}

impl FromStr for DocUri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let missing = |part| UriError::Missing {
            part,
            uri: s.to_string(),
        };

        if let Some(id) = s.strip_prefix(DOC_SCHEME) {
            if id.is_empty() {
                return Err(missing("document id"));
            }
            Ok(Self::doc(id))
        } else if let Some(category) = s.strip_prefix(CATEGORY_SCHEME) {
            if category.is_empty() {
                return Err(missing("category"));
            }
            Ok(Self::category(category))
        } else if let Some(rest) = s.strip_prefix(SUBCATEGORY_SCHEME) {
            match rest.split_once('/') {
                Some((c, sub)) if !c.is_empty() && !sub.is_empty() => Ok(Self::subcategory(c, sub)),
                _ if rest.is_empty() || rest.starts_with('/') => Err(missing("category")),
                _ => Err(missing("subcategory")),
            }
        } else {
            Err(UriError::UnknownScheme(s.to_string()))
        }
    }
}
