use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::VerifyConfig;

#[derive(Parser, Debug)]
#[command(name = "sports-data-verify")]
#[command(version, about = "Validate the sports dataset before publishing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate every record and print aggregate counts
    Verify {
        /// Dataset root (contains stadium/, world/, teams/, competitions/)
        #[arg(default_value = ".")]
        data_dir: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Only print errors
        #[arg(short, long)]
        quiet: bool,

        /// Print every entity as it is checked
        #[arg(short, long, conflicts_with = "quiet")]
        verbose: bool,
    },

    /// Validate the dataset, then print the resolved roster of one competition
    Resolve {
        /// Competition key
        competition: String,

        /// Dataset root
        #[arg(default_value = ".")]
        data_dir: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// List the supported mechanics profiles
    ListMechanics,
}

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Configuration file (default: DATA_DIR/verify.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Additional exempt competitions (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub exempt: Option<Vec<String>>,

    /// Name of the placeholder competition
    #[arg(short, long)]
    pub placeholder: Option<String>,
}

impl ConfigArgs {
    /// Load the configuration file and apply command-line overrides
    pub fn load(&self, data_dir: &Path) -> Result<VerifyConfig> {
        let mut config = VerifyConfig::resolve(self.config.as_deref(), data_dir)?;

        if let Some(exempt) = &self.exempt {
            config.exempt.extend(exempt.iter().cloned());
        }
        if let Some(placeholder) = &self.placeholder {
            config.placeholder = placeholder.clone();
        }

        Ok(config)
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
