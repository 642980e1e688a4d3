pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpStatusSource;
pub use config::{ProbeSettings, TomlConfig};
pub use core::probe::ConnectivityProbe;
pub use domain::model::{ProbeOutcome, ProbeReport};
pub use utils::error::{ProbeError, Result};
