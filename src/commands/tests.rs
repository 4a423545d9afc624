use super::*;
use tempfile::TempDir;

fn write_pages(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("pages.json");
    fs::write(&path, json).expect("should write pages file");
    path
}

const PAGES: &str = r#"[
    {"title": "Gravel Delivery", "url": "/gravel", "content": "<p>Gravel delivery and mulch.</p>"},
    {"title": "Mulch Supply", "url": "/mulch", "content": "<p>Mulch supply and gravel.</p>"}
]"#;

#[test]
fn read_pages_parses_records() {
    let temp_dir = TempDir::new().expect("should create TempDir successfully");
    let path = write_pages(temp_dir.path(), PAGES);

    let pages = read_pages(&path).expect("pages should parse");
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].url, "/mulch");
}

#[test]
fn read_pages_rejects_duplicate_urls() {
    let temp_dir = TempDir::new().expect("should create TempDir successfully");
    let path = write_pages(
        temp_dir.path(),
        r#"[
            {"title": "A", "url": "/a", "content": ""},
            {"title": "B", "url": "/a", "content": ""}
        ]"#,
    );

    let result = read_pages(&path);
    assert!(matches!(result, Err(LinkerError::Input(_))));
}

#[test]
fn read_pages_rejects_bad_json() {
    let temp_dir = TempDir::new().expect("should create TempDir successfully");
    let path = write_pages(temp_dir.path(), "{not json");

    assert!(matches!(read_pages(&path), Err(LinkerError::Json(_))));
}

#[test]
fn link_pages_writes_output_file() {
    let temp_dir = TempDir::new().expect("should create TempDir successfully");
    let input = write_pages(temp_dir.path(), PAGES);
    let output = temp_dir.path().join("linked.json");

    link_pages(Config::default(), &input, Some(&output), Some(1)).expect("linking should succeed");

    let written = fs::read_to_string(&output).expect("output should exist");
    let pages: Vec<PageRecord> = serde_json::from_str(&written).expect("output should be json");
    assert_eq!(pages.len(), 2);
    for page in &pages {
        assert_eq!(page.content.matches("<a ").count(), 1);
    }
}

#[test]
fn link_pages_rejects_invalid_limit() {
    let temp_dir = TempDir::new().expect("should create TempDir successfully");
    let input = write_pages(temp_dir.path(), PAGES);

    let result = link_pages(Config::default(), &input, None, Some(0));
    assert!(matches!(result, Err(LinkerError::Config(_))));
}

#[test]
fn load_config_from_explicit_dir() {
    let temp_dir = TempDir::new().expect("should create TempDir successfully");
    let config = load_config(Some(temp_dir.path().to_path_buf())).expect("config should load");
    assert_eq!(config.get_base_dir(), temp_dir.path());
}
