#[cfg(test)]
mod tests;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use super::tokenizer::{PhraseList, detect_phrases, tokenize};

/// English stop words, matching the common NLTK list
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Minimum number of characters a single-word keyword must have
pub const DEFAULT_MIN_KEYWORD_LENGTH: usize = 4;

/// A normalized, lowercase keyword: either a single word or a domain phrase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyword(String);

impl Keyword {
    /// Normalize arbitrary text into a keyword
    #[inline]
    pub fn new(text: &str) -> Self {
        Self(text.split_whitespace().map(str::to_lowercase).join(" "))
    }

    pub(crate) fn from_normalized(text: &str) -> Self {
        Self(text.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this keyword spans more than one word
    #[inline]
    pub fn is_phrase(&self) -> bool {
        self.0.contains(' ')
    }
}

impl fmt::Display for Keyword {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Keyword {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Keyword {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Deduplicated keywords in extraction order: words in text order, then phrases
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

impl KeywordSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    #[inline]
    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k.as_str() == keyword)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Keyword> {
        self.keywords.iter()
    }
}

impl FromIterator<Keyword> for KeywordSet {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Keyword>>(iter: I) -> Self {
        Self {
            keywords: iter.into_iter().unique().collect(),
        }
    }
}

impl IntoIterator for KeywordSet {
    type Item = Keyword;
    type IntoIter = std::vec::IntoIter<Keyword>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.keywords.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a Keyword;
    type IntoIter = std::slice::Iter<'a, Keyword>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.keywords.iter()
    }
}

/// Filters tokens into indexable keywords and merges in detected phrases
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<String>,
    phrases: PhraseList,
    min_length: usize,
}

impl Default for KeywordExtractor {
    #[inline]
    fn default() -> Self {
        Self::new(PhraseList::default())
    }
}

impl KeywordExtractor {
    /// Create an extractor with the built-in stop words and the given phrases
    #[inline]
    pub fn new(phrases: PhraseList) -> Self {
        Self {
            stop_words: STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            phrases,
            min_length: DEFAULT_MIN_KEYWORD_LENGTH,
        }
    }

    #[inline]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Add stop words on top of the built-in list
    #[inline]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    #[inline]
    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    #[inline]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    #[inline]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Extract the keyword set of a page from its title and content
    #[inline]
    pub fn extract_keywords(&self, title: &str, content: &str) -> KeywordSet {
        self.extract(&format!("{} {}", title, content))
    }

    /// Extract the keyword set of a single piece of text.
    ///
    /// Empty or whitespace-only text yields an empty set.
    #[inline]
    pub fn extract(&self, text: &str) -> KeywordSet {
        if text.trim().is_empty() {
            return KeywordSet::default();
        }

        let words = tokenize(text)
            .into_iter()
            .filter(|token| self.is_indexable_word(token))
            .map(Keyword);

        words
            .chain(detect_phrases(text, &self.phrases))
            .collect()
    }

    fn is_indexable_word(&self, token: &str) -> bool {
        token.chars().count() >= self.min_length
            && token.chars().all(char::is_alphanumeric)
            && !self.stop_words.contains(token)
    }
}
