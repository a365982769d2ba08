use std::path::PathBuf;

use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

/// Where the Unicode consortium publishes the names list.
pub const NAMES_LIST_URL: &str = "https://www.unicode.org/Public/UNIDATA/NamesList.txt";

const DEFAULT_DB_PATH: &str = "data/unicode.db";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub source_url: String,
    pub db_path: PathBuf,
    /// Skip malformed lines with a warning instead of aborting.
    pub lenient: bool,
}

impl Settings {
    /// Built-in defaults, overridable through `UNICODE_*` environment
    /// variables (`UNICODE_SOURCE_URL`, `UNICODE_DB_PATH`,
    /// `UNICODE_LENIENT`).
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("source_url", NAMES_LIST_URL)?
            .set_default("db_path", DEFAULT_DB_PATH)?
            .set_default("lenient", false)?
            .add_source(Environment::with_prefix("UNICODE").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_script() {
        let settings = Settings::load().unwrap();
        assert!(settings.source_url.ends_with("NamesList.txt"));
        assert_eq!(settings.db_path, PathBuf::from("data/unicode.db"));
        assert!(!settings.lenient);
    }
}
