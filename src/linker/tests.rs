use super::*;

fn page(url: &str, title: &str, content: &str) -> PageRecord {
    PageRecord {
        title: title.to_string(),
        url: url.to_string(),
        content: content.to_string(),
    }
}

#[test]
fn linker_uses_configured_phrases() {
    let config = LinkingConfig {
        phrases: vec!["roof repair".to_string()],
        ..LinkingConfig::default()
    };
    let linker = ContentLinker::new(config);

    let index = linker.build_index(&[page("/roof", "Roofing", "<p>Roof repair crews</p>")]);
    assert_eq!(index.lookup("roof repair").len(), 1);
    assert!(index.lookup("road construction").is_empty());
}

#[test]
fn linker_applies_min_length_and_stop_words() {
    let config = LinkingConfig {
        min_keyword_length: 8,
        extra_stop_words: vec!["sealcoating".to_string()],
        ..LinkingConfig::default()
    };
    let linker = ContentLinker::new(config);

    let index = linker.build_index(&[page("/a", "Lots", "<p>Sealcoating protects pavement</p>")]);
    assert!(index.lookup("sealcoating").is_empty());
    assert!(index.lookup("protects").len() == 1);
    assert!(index.lookup("lots").is_empty());
}

#[test]
fn linker_indexes_the_configured_source() {
    let pages = [page("/a", "Lots", "<p class=\"highlight\">Sealcoating lots</p>")];

    let raw = ContentLinker::new(LinkingConfig::default()).build_index(&pages);
    assert_eq!(raw.lookup("highlight").len(), 1);

    let config = LinkingConfig {
        index_source: IndexSource::VisibleText,
        ..LinkingConfig::default()
    };
    let visible = ContentLinker::new(config).build_index(&pages);
    assert!(visible.lookup("highlight").is_empty());
    assert_eq!(visible.lookup("sealcoating").len(), 1);
}

#[test]
fn linker_respects_configured_limit() {
    let config = LinkingConfig {
        max_links: 1,
        ..LinkingConfig::default()
    };
    let linker = ContentLinker::new(config);
    let pages = vec![
        page("/a", "Gravel", "<p>gravel</p>"),
        page("/b", "Mulch", "<p>mulch</p>"),
    ];
    let index = linker.build_index(&pages);

    let html = linker.inject_links("<p>gravel and mulch</p>", "/c", &index);
    assert_eq!(html.matches("<a ").count(), 1);
}

#[test]
fn process_pages_keeps_order_and_other_fields() {
    let pages = vec![
        page("/gravel", "Gravel Delivery", "<p>Gravel delivery and mulch.</p>"),
        page("/mulch", "Mulch Supply", "<p>Mulch supply and gravel.</p>"),
        page("/sod", "Sod", "<p>Fresh sod only.</p>"),
    ];
    let processed = ContentLinker::default().process_pages(pages.clone());

    assert_eq!(processed.len(), pages.len());
    for (before, after) in pages.iter().zip(&processed) {
        assert_eq!(before.url, after.url);
        assert_eq!(before.title, after.title);
    }

    assert!(processed[0].content.contains(r#"<a href="/mulch" title="Mulch Supply">mulch</a>"#));
    assert!(processed[1].content.contains(r#"<a href="/gravel" title="Gravel Delivery">gravel</a>"#));
    assert_eq!(processed[2].content, pages[2].content);
}

#[test]
fn process_empty_batch() {
    assert!(ContentLinker::default().process_pages(Vec::new()).is_empty());
}
