
use fancy_regex::Regex;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use super::keywords::Keyword;

/// Runs of letters and digits joined by inner hyphens ("eco-friendly" stays one
/// token). Contraction and possessive suffixes are split off as their own
/// tokens: "don't" gives "do" + "n't", "Florida's" gives "Florida" + "'s".
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)[\p{L}\p{N}]+?(?=n['’]t\b)|n['’]t\b|['’](?:s|re|ve|ll|d|m)\b|[\p{L}\p{N}]+(?:-[\p{L}\p{N}]+)*",
    )
    .expect("valid regex")
});

/// Domain phrases recognised when no phrase list is configured
pub const DEFAULT_PHRASES: &[&str] = &[
    "road construction",
    "asphalt paving",
    "highway maintenance",
    "traffic management",
    "construction services",
    "infrastructure development",
    "road repair",
    "pavement maintenance",
    "construction project",
    "road safety",
];

/// Split text into lowercase word tokens in document order.
///
/// Tokens are delimited by whitespace and punctuation. Inner hyphens are kept
/// so that callers can reject such compound tokens, while suffixes such as
/// `'s` and `n't` become separate tokens and leave the stem intact.
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .filter_map(|found| match found {
            Ok(m) => Some(m.as_str().to_lowercase()),
            Err(e) => {
                debug!("Skipping token after regex error: {}", e);
                None
            }
        })
        .collect()
}

/// An injectable set of multi-word domain phrases.
///
/// Phrases are stored lowercased and deduplicated, in the order they were
/// first supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PhraseList {
    phrases: Vec<String>,
}

impl PhraseList {
    #[inline]
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|phrase| normalize_phrase(phrase.as_ref()))
            .filter(|phrase| !phrase.is_empty())
            .unique()
            .collect();
        Self { phrases }
    }

    /// An empty list; no phrase keywords will be detected
    #[inline]
    pub fn empty() -> Self {
        Self {
            phrases: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

impl Default for PhraseList {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_PHRASES)
    }
}

impl From<Vec<String>> for PhraseList {
    #[inline]
    fn from(phrases: Vec<String>) -> Self {
        Self::new(phrases)
    }
}

impl From<PhraseList> for Vec<String> {
    #[inline]
    fn from(list: PhraseList) -> Self {
        list.phrases
    }
}

/// Find every configured phrase contained in `text`, ignoring case.
///
/// Matching is a plain substring test on the lowercased text; the result
/// follows the order of the phrase list.
#[inline]
pub fn detect_phrases(text: &str, phrases: &PhraseList) -> Vec<Keyword> {
    if phrases.is_empty() || text.trim().is_empty() {
        return Vec::new();
    }

    let haystack = text.to_lowercase();
    phrases
        .iter()
        .filter(|phrase| haystack.contains(phrase))
        .map(Keyword::from_normalized)
        .collect()
}

/// Lowercase and collapse inner whitespace so "Road  Construction" and
/// "road construction" are the same phrase.
fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .join(" ")
}
