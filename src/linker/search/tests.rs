use super::*;

fn all(text: &str, needle: &str) -> Vec<(usize, usize)> {
    occurrences(text, needle).collect()
}

#[test]
fn occurrences_ignore_case() {
    assert_eq!(all("Paving and PAVING", "paving"), vec![(0, 6), (11, 17)]);
}

#[test]
fn occurrences_may_overlap() {
    assert_eq!(all("aaa", "aa"), vec![(0, 2), (1, 3)]);
}

#[test]
fn occurrences_of_empty_needle_or_text() {
    assert!(all("paving", "").is_empty());
    assert!(all("", "paving").is_empty());
}

#[test]
fn occurrences_report_byte_ranges_for_non_ascii_text() {
    assert_eq!(all("Mérida MÉRIDA", "mérida"), vec![(0, 7), (8, 15)]);
}

#[test]
fn find_word_skips_partial_words() {
    assert_eq!(find_word("Offroad repairs, road repair", "road repair"), Some((17, 28)));
    assert_eq!(find_word("pavings", "paving"), None);
}

#[test]
fn find_word_treats_hyphenated_compounds_as_one_word() {
    assert_eq!(find_word("asphalt-paving paving", "paving"), Some((15, 21)));
    assert_eq!(find_word("paving-crews", "paving"), None);
}

#[test]
fn find_word_accepts_dashes_that_do_not_join_words() {
    assert_eq!(find_word("- paving -", "paving"), Some((2, 8)));
    assert_eq!(find_word("--paving", "paving"), Some((2, 8)));
}

#[test]
fn find_word_stops_at_apostrophes() {
    assert_eq!(find_word("Florida's roads", "florida"), Some((0, 7)));
}

#[test]
fn find_word_keeps_punctuation_inside_the_needle() {
    assert_eq!(find_word("costs (est.) vary", "(est.)"), Some((6, 12)));
}
