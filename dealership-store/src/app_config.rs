use dealership_contract::ContractTerms;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub contract_terms: ContractTerms,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

fn default_host() -> String { "0.0.0.0".to_string() }

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// `name|address|phone` header followed by one vehicle per line
    pub dealership_file: PathBuf,
    /// Append-only contract log
    pub contracts_file: PathBuf,
}

/// Built-in schedules, layered under the files so a file can override a single
/// nested key such as `contract_terms.sales.lower_tier.processing_fee`.
#[derive(Serialize)]
struct BuiltinDefaults {
    contract_terms: ContractTerms,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let source = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let builtin = config::Config::try_from(&BuiltinDefaults { contract_terms: ContractTerms::default() })?;

        let s = config::Config::builder()
            .add_source(builtin)
            .add_source(config::File::with_name(&source("default")))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&source(&run_mode)).required(false))
            // Machine-local overrides, not checked in
            .add_source(config::File::with_name(&source("local")).required(false))
            // Eg. `DEALERSHIP__SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("DEALERSHIP").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
