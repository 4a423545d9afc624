#[cfg(test)]
mod tests;

use anyhow::Context;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{Config, get_config_dir};
use crate::linker::{ContentLinker, PageRecord};
use crate::{LinkerError, Result};

/// Resolve the configuration directory and load the configuration from it
#[inline]
pub fn load_config(config_dir: Option<PathBuf>) -> Result<Config> {
    let config_dir = match config_dir {
        Some(dir) => dir,
        None => get_config_dir()?,
    };
    Ok(Config::load(config_dir)?)
}

/// Read a JSON array of page records, rejecting duplicate urls
#[inline]
pub fn read_pages(path: &Path) -> Result<Vec<PageRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pages from {}", path.display()))?;
    let pages: Vec<PageRecord> = serde_json::from_str(&content)?;

    let mut seen = HashSet::new();
    for page in &pages {
        if !seen.insert(page.url.as_str()) {
            return Err(LinkerError::Input(format!(
                "duplicate page url {} in {}",
                page.url,
                path.display()
            )));
        }
    }

    info!("Read {} pages from {}", pages.len(), path.display());
    Ok(pages)
}

/// Add internal links to every page of `input` and write the result as JSON
#[inline]
pub fn link_pages(
    config: Config,
    input: &Path,
    output: Option<&Path>,
    max_links: Option<usize>,
) -> Result<()> {
    let mut linking = config.linking;
    if let Some(max_links) = max_links {
        linking.set_max_links(max_links)?;
    }

    let pages = read_pages(input)?;
    let processed = ContentLinker::new(linking).process_pages(pages);
    write_json(&processed, output)?;

    if let Some(path) = output {
        eprintln!("Wrote {} pages to {}", processed.len(), path.display());
    }
    Ok(())
}

/// Print the keyword index of `input`, or the entries for one keyword
#[inline]
pub fn show_index(config: Config, input: &Path, keyword: Option<&str>) -> Result<()> {
    let pages = read_pages(input)?;
    let linker = ContentLinker::new(config.linking);
    let index = linker.build_index(&pages);

    match keyword {
        Some(keyword) => write_json(&index.lookup(keyword), None),
        None => write_json(&index, None),
    }
}

fn write_json<T: serde::Serialize + ?Sized>(value: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
