
use super::search::occurrences;

/// Characters captured on each side of a keyword
pub const DEFAULT_CONTEXT_WINDOW: usize = 10;

/// Return the text surrounding the first case-insensitive occurrence of
/// `keyword` in `content`.
///
/// Up to `window` characters are taken on each side, stopping early at line
/// breaks and at the ends of the text. The keyword itself is inserted exactly
/// as passed in. An absent keyword yields an empty string.
#[inline]
pub fn get_context(content: &str, keyword: &str, window: usize) -> String {
    let Some((start, end)) = occurrences(content, keyword).next() else {
        return String::new();
    };

    let head = content.get(..start).unwrap_or_default();
    let tail = content.get(end..).unwrap_or_default();

    let before_len: usize = head
        .chars()
        .rev()
        .take(window)
        .take_while(|&c| c != '\n')
        .map(char::len_utf8)
        .sum();
    let after_len: usize = tail
        .chars()
        .take(window)
        .take_while(|&c| c != '\n')
        .map(char::len_utf8)
        .sum();

    let before = head.get(head.len() - before_len..).unwrap_or_default();
    let after = tail.get(..after_len).unwrap_or_default();
    format!("{}{}{}", before, keyword, after)
}
