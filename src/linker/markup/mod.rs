
use scraper::{ElementRef, Html, Selector};

/// Elements whose text never reaches the reader
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head", "title"];

/// Parsed page content, remembering whether it was a whole document or a
/// body fragment so it can be written back the same way.
pub struct ParsedContent {
    pub document: Html,
    pub is_document: bool,
}

impl ParsedContent {
    #[inline]
    pub fn parse(content: &str) -> Self {
        if is_full_document(content) {
            Self {
                document: Html::parse_document(content),
                is_document: true,
            }
        } else {
            Self {
                document: Html::parse_fragment(content),
                is_document: false,
            }
        }
    }

    /// Parse errors reported by the HTML parser
    #[inline]
    pub fn errors(&self) -> &[std::borrow::Cow<'static, str>] {
        &self.document.errors
    }

    /// The element whose descendants carry linkable text: `<body>` for whole
    /// documents, the synthetic root for fragments.
    #[inline]
    pub fn content_root(&self) -> ElementRef<'_> {
        let root = self.document.root_element();
        if !self.is_document {
            return root;
        }

        Selector::parse("body")
            .ok()
            .and_then(|selector| self.document.select(&selector).next())
            .unwrap_or(root)
    }

    /// Serialize back to a string of the same shape as the input
    #[inline]
    pub fn serialize(&self) -> String {
        if self.is_document {
            self.document.html()
        } else {
            self.document.root_element().inner_html()
        }
    }
}

/// Whether `content` looks like a complete HTML document rather than a fragment
#[inline]
pub fn is_full_document(content: &str) -> bool {
    let head = content.trim_start().to_lowercase();
    head.starts_with("<!doctype") || head.starts_with("<html")
}

/// The text a reader would see, with markup removed and hidden elements
/// (scripts, styles, the document head) skipped.
///
/// Text from adjacent nodes is joined with a single space so words from
/// different elements never run together.
#[inline]
pub fn visible_text(content: &str) -> String {
    let parsed = ParsedContent::parse(content);
    let root = parsed.content_root();

    let mut pieces: Vec<&str> = Vec::new();
    for node in root.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
        });
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            pieces.push(trimmed);
        }
    }

    pieces.join(" ")
}
