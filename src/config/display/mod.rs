
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use super::Config;
use crate::linker::IndexSource;

#[inline]
pub fn show_config(config_dir: &Path) -> Result<()> {
    let config = Config::load(config_dir).context("Failed to load configuration")?;

    eprintln!("{}", style("Current Configuration").bold().cyan());
    eprintln!();

    let linking = &config.linking;
    eprintln!("{}", style("Linking Settings:").bold().yellow());
    eprintln!("  Max links per page: {}", style(linking.max_links).cyan());
    eprintln!("  Context window: {}", style(linking.context_window).cyan());
    eprintln!(
        "  Minimum keyword length: {}",
        style(linking.min_keyword_length).cyan()
    );
    eprintln!(
        "  Excluded parents: {}",
        style(linking.excluded_parents.join(", ")).cyan()
    );
    eprintln!(
        "  Strict parsing: {}",
        style(if linking.strict_parsing { "on" } else { "off" }).cyan()
    );
    eprintln!(
        "  Index source: {}",
        style(match linking.index_source {
            IndexSource::Content => "content",
            IndexSource::VisibleText => "visible text",
        })
        .cyan()
    );

    eprintln!();
    eprintln!("{}", style("Phrases:").bold().yellow());
    if linking.phrases.is_empty() {
        eprintln!("  {}", style("(none)").dim());
    }
    for phrase in &linking.phrases {
        eprintln!("  - {}", phrase);
    }

    if !linking.extra_stop_words.is_empty() {
        eprintln!();
        eprintln!("{}", style("Extra stop words:").bold().yellow());
        eprintln!("  {}", linking.extra_stop_words.join(", "));
    }

    eprintln!();
    eprintln!(
        "Config file: {}",
        style(config.config_file_path().display()).dim()
    );

    Ok(())
}

/// Write the default configuration unless a config file already exists
#[inline]
pub fn init_config(config_dir: &Path) -> Result<bool> {
    let config = Config {
        base_dir: config_dir.to_path_buf(),
        ..Config::default()
    };

    if config.config_file_path().exists() {
        eprintln!(
            "{}",
            style("Configuration already exists, leaving it untouched.").yellow()
        );
        return Ok(false);
    }

    config.save().context("Failed to save configuration")?;
    eprintln!(
        "Configuration saved to: {}",
        style(config.config_file_path().display()).cyan()
    );
    Ok(true)
}
