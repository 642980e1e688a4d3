use crate::config::{ProbeSettings, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "connectivity-probe")]
#[command(about = "Checks that the development environment can reach GitHub")]
pub struct CliConfig {
    #[arg(long, help = "URL to probe instead of https://api.github.com")]
    pub endpoint: Option<String>,

    #[arg(long, help = "TOML file with a [probe] section")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file if one was given and merges it with the flags.
    pub fn settings(&self) -> Result<ProbeSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file: {}", path.display());
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        Ok(ProbeSettings::resolve(
            self.endpoint.as_deref(),
            file.as_ref(),
        ))
    }
}
