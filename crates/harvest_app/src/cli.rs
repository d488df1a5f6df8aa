use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::HarvestConfig;

#[derive(Debug, Parser)]
#[command(
    name = "harvest",
    version,
    about = "Collect article links from a listing page and save each article as text"
)]
pub(crate) struct Cli {
    /// RON config file; flags below override its values.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_name = "URL")]
    pub listing_url: Option<String>,

    #[arg(long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[arg(long, global = true, value_name = "N")]
    pub max_links: Option<usize>,

    /// Lower bound of the pause before each article fetch.
    #[arg(long, global = true, value_name = "MS")]
    pub min_delay_ms: Option<u64>,

    /// Upper bound of the pause before each article fetch.
    #[arg(long, global = true, value_name = "MS")]
    pub max_delay_ms: Option<u64>,

    /// Also write the log to this file.
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub(crate) enum Command {
    /// Print the article links found on the listing page.
    Links,
    /// Harvest every listed article into the output directory.
    Run {
        /// Ignore the resume state and fetch every link again.
        #[arg(long)]
        fresh: bool,
    },
}

impl Cli {
    pub(crate) fn apply_overrides(&self, config: &mut HarvestConfig) {
        if let Some(url) = &self.listing_url {
            config.listing_url = url.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(max_links) = self.max_links {
            config.max_links = max_links;
        }
        if let Some(min) = self.min_delay_ms {
            config.politeness_min_ms = min;
        }
        if let Some(max) = self.max_delay_ms {
            config.politeness_max_ms = max;
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
    }
}
