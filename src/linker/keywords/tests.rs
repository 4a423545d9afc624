use super::*;

fn words(set: &KeywordSet) -> Vec<&str> {
    set.iter().map(Keyword::as_str).collect()
}

#[test]
fn empty_input_yields_empty_set() {
    let extractor = KeywordExtractor::default();
    assert!(extractor.extract_keywords("", "").is_empty());
    assert!(extractor.extract_keywords("  ", "\n\t").is_empty());
}

#[test]
fn drops_stop_words_and_short_tokens() {
    let extractor = KeywordExtractor::default();
    let set = extractor.extract("The crew will pave your road with care");
    assert_eq!(words(&set), vec!["crew", "pave", "road", "care"]);
    assert!(!set.contains("the"));
    assert!(!set.contains("your"));
    assert!(!set.contains("will"));
}

#[test]
fn drops_compound_tokens() {
    let extractor = KeywordExtractor::default();
    let set = extractor.extract("eco-friendly resurfacing");
    assert_eq!(words(&set), vec!["resurfacing"]);
}

#[test]
fn possessive_stems_become_keywords() {
    let extractor = KeywordExtractor::default();
    let set = extractor.extract("Florida's company's paving");
    assert_eq!(words(&set), vec!["florida", "company", "paving"]);
}

#[test]
fn contraction_stems_are_filtered_like_other_words() {
    let extractor = KeywordExtractor::default();
    let set = extractor.extract("Crews don't stop; the county's roads aren't waiting");
    assert_eq!(
        words(&set),
        vec!["crews", "stop", "county", "roads", "waiting"]
    );
}

#[test]
fn merges_phrases_after_words() {
    let extractor = KeywordExtractor::default();
    let set = extractor.extract_keywords("Road Construction", "road construction starts with planning.");
    assert_eq!(
        words(&set),
        vec!["road", "construction", "starts", "planning", "road construction"]
    );
}

#[test]
fn result_is_deduplicated() {
    let extractor = KeywordExtractor::default();
    let set = extractor.extract("Paving paving PAVING");
    assert_eq!(set.len(), 1);
    assert!(set.contains("paving"));
}

#[test]
fn custom_min_length_and_stop_words() {
    let extractor = KeywordExtractor::new(PhraseList::empty())
        .with_min_length(6)
        .with_stop_words(["Asphalt"]);
    let set = extractor.extract("asphalt paving contractor");
    assert_eq!(words(&set), vec!["paving", "contractor"]);
    assert!(extractor.is_stop_word("asphalt"));
}

#[test]
fn keyword_normalization() {
    let keyword = Keyword::new("  Road   Construction ");
    assert_eq!(keyword.as_str(), "road construction");
    assert!(keyword.is_phrase());
    assert!(!Keyword::new("Paving").is_phrase());
    assert_eq!(Keyword::new("Paving").to_string(), "paving");
}

#[test]
fn stop_word_list_is_lowercase() {
    assert!(STOP_WORDS.iter().all(|w| w.to_lowercase() == *w));
}
