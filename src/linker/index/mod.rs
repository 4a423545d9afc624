
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, info};

use super::PageRecord;
use super::context::get_context;
use super::keywords::{Keyword, KeywordExtractor};
use super::markup::visible_text;

/// Which text of a page feeds keyword extraction and context snippets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexSource {
    /// The content exactly as stored, markup included
    #[default]
    Content,
    /// Only the text a reader sees; tags, attributes, scripts and the head are skipped
    VisibleText,
}

/// One page known to contain a keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub url: String,
    pub title: String,
    /// Snippet around the keyword's first occurrence; empty when the keyword
    /// only appears in the title
    pub context: String,
}

/// Keyword → pages mapping for one generation run.
///
/// Entry lists keep the order in which pages were indexed. The index is built
/// once and then only read, so it can be shared freely between workers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusIndex {
    entries: HashMap<Keyword, Vec<IndexEntry>>,
}

impl CorpusIndex {
    /// Build an index over `pages`, in the order given.
    ///
    /// Every keyword `extractor.extract_keywords(&page.title, &page.content)`
    /// returns is recorded for that page, with its context taken from the raw
    /// content.
    #[inline]
    pub fn build(
        pages: &[PageRecord],
        extractor: &KeywordExtractor,
        context_window: usize,
    ) -> Self {
        Self::build_from(pages, extractor, context_window, IndexSource::Content)
    }

    /// Build an index reading each page's text from `source`
    #[inline]
    pub fn build_from(
        pages: &[PageRecord],
        extractor: &KeywordExtractor,
        context_window: usize,
        source: IndexSource,
    ) -> Self {
        let mut index = Self::default();
        for page in pages {
            let text = match source {
                IndexSource::Content => Cow::Borrowed(page.content.as_str()),
                IndexSource::VisibleText => Cow::Owned(visible_text(&page.content)),
            };
            index.add_page(page, &text, extractor, context_window);
        }

        info!(
            "Built keyword index: {} pages, {} keywords, {} entries",
            pages.len(),
            index.len(),
            index.entry_count()
        );

        index
    }

    /// Pages indexed under `keyword`, in indexing order.
    ///
    /// The lookup is normalized the same way keywords are, so "Paving" finds
    /// "paving". Unknown keywords yield an empty slice.
    #[inline]
    pub fn lookup(&self, keyword: &str) -> &[IndexEntry] {
        if let Some(entries) = self.entries.get(keyword) {
            return entries;
        }

        self.entries
            .get(Keyword::new(keyword).as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct keywords
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of entries across all keywords
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// All indexed keywords, sorted
    #[inline]
    pub fn keywords(&self) -> Vec<&Keyword> {
        let mut keywords: Vec<&Keyword> = self.entries.keys().collect();
        keywords.sort();
        keywords
    }

    fn add_page(
        &mut self,
        page: &PageRecord,
        text: &str,
        extractor: &KeywordExtractor,
        context_window: usize,
    ) {
        let keywords = extractor.extract_keywords(&page.title, text);
        debug!("Indexing {} with {} keywords", page.url, keywords.len());

        for keyword in keywords {
            let context = get_context(text, keyword.as_str(), context_window);
            let entries = self.entries.entry(keyword).or_default();

            // A repeated url in one batch must not produce a second entry
            if entries.iter().any(|entry| entry.url == page.url) {
                debug!("Skipping duplicate index entry for {}", page.url);
                continue;
            }

            entries.push(IndexEntry {
                url: page.url.clone(),
                title: page.title.clone(),
                context,
            });
        }
    }
}
