/// Text rendering for query results.
///
/// Every response is a markdown-ish blob meant to be read by a person or an
/// LLM, with `docs://`, `docs-category://` and `docs-subcategory://`
/// pointers for follow-up requests.
use crate::docs::Document;

use super::uri::DocUri;
use super::{CategoryListing, Comparison, DocSummary, TopicsSummary};

/// Optional `> description` block, followed by a blank line.
fn quote(description: &str) -> String {
    if description.is_empty() {
        String::new()
    } else {
        format!("> {description}\n\n")
    }
}

/// Lowercase, whitespace runs replaced by `-`.
fn anchor(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn doc_section(heading: &str, doc: &DocSummary) -> String {
    format!(
        "{heading} {}\n{}{}\n\nAccess full document: {}",
        doc.title,
        quote(&doc.description),
        doc.preview,
        DocUri::doc(&doc.id)
    )
}

pub fn document(id: &str, doc: Option<&Document>) -> String {
    let Some(doc) = doc else {
        return format!("Documentation not found for {id}");
    };

    let mut metadata = vec![format!("Category: {}", doc.category)];
    if let Some(sub) = &doc.subcategory {
        metadata.push(format!("Subcategory: {sub}"));
    }
    metadata.push(format!("Tags: {}", doc.tags.join(", ")));
    metadata.push(format!("Last Updated: {}", doc.updated_at.format("%Y-%m-%d")));

    format!(
        "# {}\n\n{}{}\n\n{}",
        doc.title,
        quote(&doc.description),
        metadata.join(" | "),
        doc.content
    )
}

pub fn category(listing: &CategoryListing) -> String {
    if listing.is_empty() {
        return format!("No documentation found for category: {}", listing.category);
    }

    let mut out = format!("# {} Documentation\n\n", listing.category);

    if !listing.subcategories.is_empty() {
        out.push_str("## Subcategories\n\n");
        for sub in &listing.subcategories {
            out.push_str(&format!("- [{sub}](#{})\n", anchor(sub)));
        }
        out.push('\n');
    }

    for group in listing.groups.iter().filter(|g| !g.docs.is_empty()) {
        let heading = group.name.as_deref().unwrap_or("Main Documents");
        out.push_str(&format!("## {heading}\n\n"));
        for doc in &group.docs {
            out.push_str(&doc_section("###", doc));
            out.push_str("\n\n");
        }
    }

    out
}

pub fn subcategory(category: &str, subcategory: &str, docs: &[DocSummary]) -> String {
    if docs.is_empty() {
        return format!(
            "No documentation found for subcategory: {subcategory} in category: {category}"
        );
    }

    let sections: Vec<String> = docs.iter().map(|d| doc_section("##", d)).collect();
    format!("# {category} / {subcategory}\n\n{}", sections.join("\n\n"))
}

fn result_entry(doc: &DocSummary) -> String {
    let location = doc.location();
    let description = if doc.description.is_empty() {
        String::new()
    } else {
        format!("{}\n  ", doc.description)
    };
    format!(
        "- {} [{location}]\n  {description}{}\n  Access with: {}",
        doc.title,
        doc.preview,
        DocUri::doc(&doc.id)
    )
}

pub fn search(query: &str, results: &[DocSummary]) -> String {
    if results.is_empty() {
        return format!("No results found for \"{query}\".");
    }

    let entries: Vec<String> = results.iter().map(result_entry).collect();
    format!(
        "Found {} results for \"{query}\":\n\n{}",
        results.len(),
        entries.join("\n\n")
    )
}

pub fn tagged(tag: &str, results: &[DocSummary]) -> String {
    if results.is_empty() {
        return format!("No documents tagged \"{tag}\".");
    }

    let entries: Vec<String> = results.iter().map(result_entry).collect();
    format!(
        "{} documents tagged \"{tag}\":\n\n{}",
        results.len(),
        entries.join("\n\n")
    )
}

pub fn topics(summary: &TopicsSummary) -> String {
    let sections: Vec<String> = summary
        .categories
        .iter()
        .map(|c| {
            let subs = if c.subcategories.is_empty() {
                "No subcategories.".to_string()
            } else {
                let lines: Vec<String> = c
                    .subcategories
                    .iter()
                    .map(|s| format!("- {s} (Access: {})", DocUri::subcategory(&c.category, s)))
                    .collect();
                format!("Subcategories:\n{}\n", lines.join("\n"))
            };
            format!(
                "## {} ({} documents)\nAccess category: {}\n\n{subs}",
                c.category,
                c.count,
                DocUri::category(&c.category)
            )
        })
        .collect();

    format!(
        "# Documentation Overview\n\nTotal documents: {}\n\n{}",
        summary.total,
        sections.join("\n\n")
    )
}

pub fn categories(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let entries: Vec<String> = categories
        .iter()
        .map(|c| format!("- {c}\n  Access with: {}", DocUri::category(c)))
        .collect();
    format!("Available documentation categories:\n\n{}", entries.join("\n\n"))
}

fn comparison_header(doc: &Document) -> String {
    format!(
        "## {} [{}]\n{}Access with: {}\n\n",
        doc.title,
        doc.location(),
        quote(&doc.description),
        DocUri::doc(&doc.id)
    )
}

pub fn comparison(cmp: &Comparison) -> String {
    let (first, second) = match (&cmp.first, &cmp.second) {
        (None, None) => {
            return format!(
                "Could not find documentation for either \"{}\" or \"{}\".",
                cmp.topic1, cmp.topic2
            );
        }
        (None, Some(_)) => return format!("Could not find documentation for \"{}\".", cmp.topic1),
        (Some(_), None) => return format!("Could not find documentation for \"{}\".", cmp.topic2),
        (Some(a), Some(b)) => (a, b),
    };

    let common = cmp.common_tags();
    let common = if common.is_empty() {
        "No common tags.".to_string()
    } else {
        common.join(", ")
    };

    format!(
        "# Comparison: {} vs {}\n\n{}{}## Common Tags\n{common}",
        first.title,
        second.title,
        comparison_header(first),
        comparison_header(second)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::sample_doc;
    use crate::query::{CategorySummary, SubcategoryGroup};

    fn summary(id: &str, title: &str, description: &str, sub: Option<&str>) -> DocSummary {
        DocSummary {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: "catA".to_string(),
            subcategory: sub.map(str::to_string),
            preview: "preview...".to_string(),
        }
    }

    #[test]
    fn test_document_found() {
        let mut doc = sample_doc("catA/sub1/doc-one", "catA", Some("sub1"));
        doc.title = "Doc One".into();
        doc.description = "A sample".into();
        doc.content = "# Doc One [A sample]".into();
        doc.tags = vec!["catA".into(), "sub1".into()];

        let text = document("catA/sub1/doc-one", Some(&doc));
        assert_eq!(
            text,
            "# Doc One\n\n> A sample\n\nCategory: catA | Subcategory: sub1 | Tags: catA, sub1 | Last Updated: 1970-01-01\n\n# Doc One [A sample]"
        );
    }

    #[test]
    fn test_document_not_found() {
        assert_eq!(document("x/y", None), "Documentation not found for x/y");
    }

    #[test]
    fn test_category_layout() {
        let listing = CategoryListing {
            category: "catA".into(),
            subcategories: vec!["Getting Started".into()],
            groups: vec![
                SubcategoryGroup {
                    name: None,
                    docs: vec![summary("catA/intro", "Intro", "", None)],
                },
                SubcategoryGroup {
                    name: Some("Getting Started".into()),
                    docs: vec![summary(
                        "catA/Getting Started/setup",
                        "Setup",
                        "First steps",
                        Some("Getting Started"),
                    )],
                },
            ],
        };

        let text = category(&listing);
        assert!(text.starts_with("# catA Documentation\n\n## Subcategories\n\n"));
        assert!(text.contains("- [Getting Started](#getting-started)\n"));
        let main = text.find("## Main Documents").unwrap();
        let sub = text.find("## Getting Started\n").unwrap();
        assert!(main < sub);
        assert!(text.contains("### Intro\npreview...\n\nAccess full document: docs://catA/intro"));
        assert!(text.contains("### Setup\n> First steps\n\npreview..."));
    }

    #[test]
    fn test_category_empty() {
        let listing = CategoryListing {
            category: "nope".into(),
            subcategories: vec![],
            groups: vec![SubcategoryGroup { name: None, docs: vec![] }],
        };
        assert_eq!(category(&listing), "No documentation found for category: nope");
    }

    #[test]
    fn test_subcategory_listing() {
        let docs = vec![
            summary("catA/s/a", "A", "", Some("s")),
            summary("catA/s/b", "B", "desc", Some("s")),
        ];
        assert_eq!(
            subcategory("catA", "s", &docs),
            "# catA / s\n\n## A\npreview...\n\nAccess full document: docs://catA/s/a\n\n## B\n> desc\n\npreview...\n\nAccess full document: docs://catA/s/b"
        );
        assert_eq!(
            subcategory("catA", "none", &[]),
            "No documentation found for subcategory: none in category: catA"
        );
    }

    #[test]
    fn test_search_output() {
        let results = vec![summary("catA/sub1/doc-one", "Doc One", "A sample", Some("sub1"))];
        assert_eq!(
            search("sample", &results),
            "Found 1 results for \"sample\":\n\n- Doc One [catA / sub1]\n  A sample\n  preview...\n  Access with: docs://catA/sub1/doc-one"
        );
        assert_eq!(search("zzz", &[]), "No results found for \"zzz\".");
    }

    #[test]
    fn test_topics_output() {
        let s = TopicsSummary {
            total: 3,
            categories: vec![
                CategorySummary {
                    category: "catA".into(),
                    count: 2,
                    subcategories: vec!["sub1".into()],
                },
                CategorySummary {
                    category: "catB".into(),
                    count: 1,
                    subcategories: vec![],
                },
            ],
        };
        assert_eq!(
            topics(&s),
            "# Documentation Overview\n\nTotal documents: 3\n\n\
             ## catA (2 documents)\nAccess category: docs-category://catA\n\n\
             Subcategories:\n- sub1 (Access: docs-subcategory://catA/sub1)\n\n\n\
             ## catB (1 documents)\nAccess category: docs-category://catB\n\nNo subcategories."
        );
    }

    #[test]
    fn test_categories_output() {
        assert_eq!(categories(&[]), "No categories found.");
        assert_eq!(
            categories(&["a".into(), "b".into()]),
            "Available documentation categories:\n\n- a\n  Access with: docs-category://a\n\n- b\n  Access with: docs-category://b"
        );
    }

    #[test]
    fn test_comparison_output() {
        let mut a = sample_doc("x/a", "x", None);
        a.title = "Alpha".into();
        a.tags = vec!["x".into(), "alpha".into()];
        let mut b = sample_doc("y/s/b", "y", Some("s"));
        b.title = "Beta".into();
        b.description = "second".into();
        b.tags = vec!["y".into()];

        let cmp = Comparison {
            topic1: "x/a".into(),
            topic2: "y/s/b".into(),
            first: Some(a.clone()),
            second: Some(b.clone()),
        };
        assert_eq!(
            comparison(&cmp),
            "# Comparison: Alpha vs Beta\n\n\
             ## Alpha [x]\nAccess with: docs://x/a\n\n\
             ## Beta [y / s]\n> second\n\nAccess with: docs://y/s/b\n\n\
             ## Common Tags\nNo common tags."
        );

        let missing = Comparison {
            second: None,
            topic2: "nonexistent-topic".into(),
            ..cmp.clone()
        };
        assert_eq!(
            comparison(&missing),
            "Could not find documentation for \"nonexistent-topic\"."
        );

        let neither = Comparison {
            first: None,
            second: None,
            ..cmp
        };
        assert_eq!(
            comparison(&neither),
            "Could not find documentation for either \"x/a\" or \"y/s/b\"."
        );
    }
}
