//! Title and readable-text extraction from HTML

use scraper::{ElementRef, Html, Node, Selector};
use std::sync::OnceLock;

/// Title used when a page has none
pub const UNTITLED: &str = "untitled";

/// Elements whose text is never part of the readable content
const HIDDEN_ELEMENTS: [&str; 2] = ["script", "style"];

/// Readable content of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Contents of `<title>`, or [`UNTITLED`]
    pub title: String,
    /// Main text, one phrase per line
    pub text: String,
}

struct Selectors {
    title: Selector,
    article: Selector,
    main: Selector,
    body: Selector,
}

fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(|| {
        let parse = |css: &str| Selector::parse(css).expect("hardcoded selector is valid");
        Selectors {
            title: parse("title"),
            article: parse("article"),
            main: parse("main"),
            body: parse("body"),
        }
    })
}

/// Extract the title and main text of an HTML document
///
/// The content root is the first `<article>`, else `<main>`, else `<body>`.
pub fn extract_page(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);
    let sel = selectors();

    let title = document
        .select(&sel.title)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    let root = document
        .select(&sel.article)
        .next()
        .or_else(|| document.select(&sel.main).next())
        .or_else(|| document.select(&sel.body).next())
        .unwrap_or_else(|| document.root_element());

    ExtractedPage {
        title,
        text: normalize_text(&visible_text(root)),
    }
}

fn visible_text(root: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in root.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|el| HIDDEN_ELEMENTS.contains(&el.value().name()));
        if !hidden {
            out.push_str(text);
        }
    }
    out
}

/// Collapse raw text into one trimmed phrase per line
///
/// Lines are split on runs of two spaces, which usually separate headings
/// that were laid out side by side. Blank results are dropped.
pub fn normalize_text(raw: &str) -> String {
    raw.lines()
        .flat_map(|line| line.trim().split("  "))
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
