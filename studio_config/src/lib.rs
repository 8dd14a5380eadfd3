use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use studio_models::i18n::Locale;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Load the bundled config, overlaid with the files listed in the colon
/// separated `STUDIO_CONFIG` environment variable.
pub fn load() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Ok(extra) = std::env::var("STUDIO_CONFIG") {
        paths.extend(
            extra
                .split(':')
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        );
    }
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub contact: ContactConfig,
    pub i18n: I18nConfig,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub submit_delay: Duration,
    pub simulate_failure: bool,
}

#[derive(Debug, Deserialize)]
pub struct I18nConfig {
    pub default_locale: Locale,
}
