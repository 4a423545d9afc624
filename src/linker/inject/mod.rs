
use html_escape::encode_double_quoted_attribute;
use scraper::node::Text;
use scraper::{Html, Node, Selector};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, warn};

use super::index::{CorpusIndex, IndexEntry};
use super::keywords::{Keyword, KeywordExtractor};
use super::markup::ParsedContent;
use super::search::find_word;

/// Links inserted into one page when nothing else is configured
pub const DEFAULT_MAX_LINKS: usize = 3;

/// Parents whose direct text is never linked: anchors, the page heading,
/// scripts and styles
pub const DEFAULT_EXCLUDED_PARENTS: &[&str] = &["a", "h1", "script", "style"];

static DEFAULT_EXTRACTOR: LazyLock<KeywordExtractor> = LazyLock::new(KeywordExtractor::default);

#[derive(Debug, Error)]
pub enum InjectError {
    #[error("content could not be parsed cleanly: {0}")]
    Malformed(String),
    #[error("could not build anchor for {0}")]
    Anchor(String),
    #[error("invalid selector: {0}")]
    Selector(String),
}

/// An anchor added to a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedLink {
    pub keyword: Keyword,
    /// The linked text as it appeared in the page
    pub text: String,
    pub url: String,
    pub title: String,
}

/// Result of rewriting one page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub html: String,
    pub links: Vec<InsertedLink>,
}

/// A text node split around the links planned for it
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Link(InsertedLink),
}

/// Rewrites page bodies to link keyword occurrences to other indexed pages
#[derive(Debug, Clone)]
pub struct LinkInjector<'a> {
    index: &'a CorpusIndex,
    extractor: &'a KeywordExtractor,
    max_links: usize,
    excluded_parents: Vec<String>,
    strict_parsing: bool,
}

impl<'a> LinkInjector<'a> {
    #[inline]
    pub fn new(index: &'a CorpusIndex, extractor: &'a KeywordExtractor) -> Self {
        Self {
            index,
            extractor,
            max_links: DEFAULT_MAX_LINKS,
            excluded_parents: DEFAULT_EXCLUDED_PARENTS
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            strict_parsing: false,
        }
    }

    #[inline]
    pub fn with_max_links(mut self, max_links: usize) -> Self {
        self.max_links = max_links;
        self
    }

    #[inline]
    pub fn with_excluded_parents<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_parents = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .collect();
        self
    }

    /// Treat any HTML parse error as unparseable content
    #[inline]
    pub fn with_strict_parsing(mut self, strict: bool) -> Self {
        self.strict_parsing = strict;
        self
    }

    /// Rewrite `content`, returning the original text unchanged if it cannot
    /// be processed.
    #[inline]
    pub fn inject(&self, content: &str, current_url: &str) -> String {
        match self.rewrite(content, current_url) {
            Ok(rewrite) => {
                debug!("Added {} links to {}", rewrite.links.len(), current_url);
                rewrite.html
            }
            Err(e) => {
                warn!("Leaving {} without internal links: {}", current_url, e);
                content.to_string()
            }
        }
    }

    /// Rewrite `content` and report which links were added.
    ///
    /// Text nodes are visited in document order. The link limit applies to
    /// the whole page, and a page that gains no links is returned verbatim.
    #[inline]
    pub fn rewrite(&self, content: &str, current_url: &str) -> Result<Rewrite, InjectError> {
        let mut links: Vec<InsertedLink> = Vec::new();
        if self.max_links == 0 || content.trim().is_empty() {
            return Ok(Rewrite {
                html: content.to_string(),
                links,
            });
        }

        let mut parsed = ParsedContent::parse(content);
        if self.strict_parsing && !parsed.errors().is_empty() {
            return Err(InjectError::Malformed(parsed.errors().join("; ")));
        }

        let text_nodes: Vec<_> = parsed
            .content_root()
            .descendants()
            .filter(|node| node.value().is_text())
            .map(|node| node.id())
            .collect();

        for node_id in text_nodes {
            if links.len() >= self.max_links {
                break;
            }

            let Some(node) = parsed.document.tree.get(node_id) else {
                continue;
            };
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let excluded = node
                .parent()
                .and_then(|parent| parent.value().as_element().map(|element| element.name()))
                .is_some_and(|name| self.is_excluded(name));
            if excluded {
                continue;
            }

            let budget = self.max_links - links.len();
            let Some(segments) = self.plan_links(&text.text, current_url, budget) else {
                continue;
            };

            let Some(mut target) = parsed.document.tree.get_mut(node_id) else {
                continue;
            };
            for segment in segments {
                match segment {
                    Segment::Text(text) => {
                        target.insert_before(text_node(&text));
                    }
                    Segment::Link(link) => {
                        let mut anchor = target.insert_before(anchor_node(&link.url, &link.title)?);
                        anchor.append(text_node(&link.text));
                        links.push(link);
                    }
                }
            }
            target.detach();
        }

        if links.is_empty() {
            return Ok(Rewrite {
                html: content.to_string(),
                links,
            });
        }

        Ok(Rewrite {
            html: parsed.serialize(),
            links,
        })
    }

    fn is_excluded(&self, element_name: &str) -> bool {
        self.excluded_parents
            .iter()
            .any(|name| name.eq_ignore_ascii_case(element_name))
    }

    /// Decide which keywords of one text node become links, at most `budget`.
    /// Returns `None` when the node stays as it is.
    fn plan_links(&self, text: &str, current_url: &str, budget: usize) -> Option<Vec<Segment>> {
        let keywords = self.extractor.extract(text);
        if keywords.is_empty() {
            return None;
        }

        let mut segments = vec![Segment::Text(text.to_string())];
        let mut added = 0;
        for keyword in keywords {
            if added >= budget {
                break;
            }

            let Some(target) = first_candidate(self.index.lookup(keyword.as_str()), current_url)
            else {
                continue;
            };

            if link_first_occurrence(&mut segments, keyword, target) {
                added += 1;
            }
        }

        (added > 0).then_some(segments)
    }
}

/// Rewrite `content` with the built-in stop words and phrases.
///
/// See [`LinkInjector::inject`]; malformed content comes back unchanged.
#[inline]
pub fn inject_links(
    content: &str,
    current_url: &str,
    index: &CorpusIndex,
    max_links: usize,
) -> String {
    LinkInjector::new(index, &DEFAULT_EXTRACTOR)
        .with_max_links(max_links)
        .inject(content, current_url)
}

/// The earliest indexed page that is not the page being rewritten
fn first_candidate<'e>(entries: &'e [IndexEntry], current_url: &str) -> Option<&'e IndexEntry> {
    entries.iter().find(|entry| entry.url != current_url)
}

/// Wrap the first whole-word occurrence of `keyword` found in the plain text
/// segments. Text already inside a planned link is never searched again.
fn link_first_occurrence(segments: &mut Vec<Segment>, keyword: Keyword, target: &IndexEntry) -> bool {
    for position in 0..segments.len() {
        let Some(Segment::Text(text)) = segments.get(position) else {
            continue;
        };
        let Some((start, end)) = find_word(text, keyword.as_str()) else {
            continue;
        };

        let (Some(before), Some(matched), Some(after)) =
            (text.get(..start), text.get(start..end), text.get(end..))
        else {
            continue;
        };

        let mut replacement = Vec::with_capacity(3);
        if !before.is_empty() {
            replacement.push(Segment::Text(before.to_string()));
        }
        replacement.push(Segment::Link(InsertedLink {
            text: matched.to_string(),
            keyword,
            url: target.url.clone(),
            title: target.title.clone(),
        }));
        if !after.is_empty() {
            replacement.push(Segment::Text(after.to_string()));
        }

        segments.splice(position..=position, replacement);
        return true;
    }

    false
}

fn text_node(text: &str) -> Node {
    Node::Text(Text { text: text.into() })
}

fn anchor_node(url: &str, title: &str) -> Result<Node, InjectError> {
    let markup = format!(
        r#"<a href="{}" title="{}"></a>"#,
        encode_double_quoted_attribute(url),
        encode_double_quoted_attribute(title)
    );
    let fragment = Html::parse_fragment(&markup);
    let selector = Selector::parse("a").map_err(|e| InjectError::Selector(format!("{:?}", e)))?;

    fragment
        .select(&selector)
        .next()
        .map(|anchor| Node::Element(anchor.value().clone()))
        .ok_or_else(|| InjectError::Anchor(url.to_string()))
}
