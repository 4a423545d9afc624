#[cfg(test)]
mod tests;

/// Byte ranges of every case-insensitive occurrence of `needle` in `text`, in
/// order of their start. Occurrences may overlap; an empty needle never matches.
#[inline]
pub fn occurrences<'t>(text: &'t str, needle: &'t str) -> impl Iterator<Item = (usize, usize)> + 't {
    text.char_indices().filter_map(move |(start, _)| {
        if needle.is_empty() {
            return None;
        }
        match_at(text, start, needle).map(|end| (start, end))
    })
}

/// The first occurrence of `needle` that stands as a whole word.
///
/// A word is a run of letters and digits, and an inner hyphen joins two runs
/// into one word, so "paving" is not found inside "asphalt-paving". Apostrophes
/// do break words, which lets "Florida" match in "Florida's".
#[inline]
pub fn find_word(text: &str, needle: &str) -> Option<(usize, usize)> {
    occurrences(text, needle).find(|&(start, end)| {
        let before = text.get(..start).unwrap_or_default().chars().rev();
        let after = text.get(end..).unwrap_or_default().chars();
        is_word_edge(before) && is_word_edge(after)
    })
}

/// End of a match of `needle` starting at byte `start`
fn match_at(text: &str, start: usize, needle: &str) -> Option<usize> {
    let rest = text.get(start..)?;
    let mut haystack = rest.char_indices();
    for expected in needle.chars() {
        let (_, found) = haystack.next()?;
        if !same_letter(found, expected) {
            return None;
        }
    }

    Some(haystack.next().map_or(text.len(), |(offset, _)| start + offset))
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// `chars` walks away from a match; the edge holds unless the next character
/// continues the word, either directly or through a joining hyphen.
fn is_word_edge(mut chars: impl Iterator<Item = char>) -> bool {
    match chars.next() {
        None => true,
        Some(c) if is_word_char(c) => false,
        Some('-') => !chars.next().is_some_and(is_word_char),
        Some(_) => true,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}
