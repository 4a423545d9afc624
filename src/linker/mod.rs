// Content linking engine
// Builds a keyword index over a batch of pages and rewrites each page body
// with internal links to the other pages.

pub mod context;
pub mod index;
pub mod inject;
pub mod keywords;
pub mod markup;
pub mod search;
pub mod tokenizer;

#[cfg(test)]
mod tests;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::LinkingConfig;

pub use context::{DEFAULT_CONTEXT_WINDOW, get_context};
pub use index::{CorpusIndex, IndexEntry, IndexSource};
pub use inject::{DEFAULT_MAX_LINKS, InjectError, InsertedLink, LinkInjector, Rewrite, inject_links};
pub use keywords::{Keyword, KeywordExtractor, KeywordSet};
pub use tokenizer::{PhraseList, detect_phrases, tokenize};

/// A generated page handed over by the page-generation pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub title: String,
    /// Unique within one batch
    pub url: String,
    /// Page body as HTML
    pub content: String,
}

/// Configured linking engine: one extractor and one set of injection rules
/// shared by every page of a run.
#[derive(Debug, Clone)]
pub struct ContentLinker {
    extractor: KeywordExtractor,
    config: LinkingConfig,
}

impl Default for ContentLinker {
    #[inline]
    fn default() -> Self {
        Self::new(LinkingConfig::default())
    }
}

impl ContentLinker {
    #[inline]
    pub fn new(config: LinkingConfig) -> Self {
        let extractor = KeywordExtractor::new(PhraseList::new(&config.phrases))
            .with_min_length(config.min_keyword_length)
            .with_stop_words(&config.extra_stop_words);

        Self { extractor, config }
    }

    #[inline]
    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    #[inline]
    pub fn config(&self) -> &LinkingConfig {
        &self.config
    }

    /// Index every page of the batch
    #[inline]
    pub fn build_index(&self, pages: &[PageRecord]) -> CorpusIndex {
        CorpusIndex::build_from(
            pages,
            &self.extractor,
            self.config.context_window,
            self.config.index_source,
        )
    }

    /// An injector reading from `index` with this linker's rules
    #[inline]
    pub fn injector<'a>(&'a self, index: &'a CorpusIndex) -> LinkInjector<'a> {
        LinkInjector::new(index, &self.extractor)
            .with_max_links(self.config.max_links)
            .with_excluded_parents(&self.config.excluded_parents)
            .with_strict_parsing(self.config.strict_parsing)
    }

    /// Rewrite one page body against an already built index
    #[inline]
    pub fn inject_links(&self, content: &str, current_url: &str, index: &CorpusIndex) -> String {
        self.injector(index).inject(content, current_url)
    }

    /// Index the whole batch, then rewrite every page in parallel.
    ///
    /// Pages come back in their original order with only `content` changed.
    #[inline]
    pub fn process_pages(&self, pages: Vec<PageRecord>) -> Vec<PageRecord> {
        let index = self.build_index(&pages);
        debug!(
            "Rewriting {} pages with at most {} links each",
            pages.len(),
            self.config.max_links
        );
        let injector = self.injector(&index);

        let processed: Vec<PageRecord> = pages
            .into_par_iter()
            .map(|page| {
                let content = injector.inject(&page.content, &page.url);
                PageRecord { content, ..page }
            })
            .collect();

        info!("Linked {} pages", processed.len());

        processed
    }
}
