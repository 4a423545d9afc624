use clap::{Parser, Subcommand};
use site_linker::Result;
use site_linker::commands::{link_pages, load_config, show_index};
use site_linker::config::{get_config_dir, init_config, show_config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "site-linker")]
#[command(about = "Keyword indexing and internal link injection for generated pages")]
#[command(version)]
struct Cli {
    /// Directory holding config.toml (defaults to ~/.site-linker)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add internal links to a batch of pages
    Link {
        /// JSON array of {title, url, content} records
        #[arg(long)]
        input: PathBuf,
        /// Where to write the linked pages (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Override the configured maximum number of links per page
        #[arg(long)]
        max_links: Option<usize>,
    },
    /// Print the keyword index built from a batch of pages
    Index {
        /// JSON array of {title, url, content} records
        #[arg(long)]
        input: PathBuf,
        /// Only print the pages indexed under this keyword
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Show or initialise the configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Write the default configuration file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Link {
            input,
            output,
            max_links,
        } => {
            let config = load_config(cli.config_dir)?;
            link_pages(config, &input, output.as_deref(), max_links)?;
        }
        Commands::Index { input, keyword } => {
            let config = load_config(cli.config_dir)?;
            show_index(config, &input, keyword.as_deref())?;
        }
        Commands::Config { show, init } => {
            let config_dir = match cli.config_dir {
                Some(dir) => dir,
                None => get_config_dir()?,
            };
            if init {
                init_config(&config_dir)?;
            }
            if show || !init {
                show_config(&config_dir)?;
            }
        }
    }

    Ok(())
}
