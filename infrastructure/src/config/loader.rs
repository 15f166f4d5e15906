//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "jobshift";
const PROJECT_FILES: [&str; 2] = ["jobshift.toml", ".jobshift.toml"];
const ENV_PREFIX: &str = "JOBSHIFT_";

/// Unprefixed variables honoured for compatibility, and the key each maps to
const LEGACY_ENV: [(&str, &str); 8] = [
    ("OLLAMA_URL", "ollama.url"),
    ("OLLAMA_MODEL", "ollama.model"),
    ("TEMPERATURE", "inference.temperature"),
    ("MAX_TOKENS", "inference.max_tokens"),
    ("AWS_REGION", "bedrock.region"),
    ("AWS_ACCESS_KEY_ID", "bedrock.access_key_id"),
    ("AWS_SECRET_ACCESS_KEY", "bedrock.secret_access_key"),
    ("CLAUDE_MODEL_ID", "bedrock.model"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `JOBSHIFT_*` environment variables (`__` separates sections)
    /// 2. Legacy variables (`OLLAMA_URL`, `AWS_REGION`, `CLAUDE_MODEL_ID`, ...)
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./jobshift.toml` or `./.jobshift.toml`
    /// 5. Global: `~/.config/jobshift/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
        }

        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// The merged provider chain, before extraction
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Self::legacy_env())
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn legacy_env() -> Env {
        let names: Vec<&str> = LEGACY_ENV.iter().map(|(name, _)| *name).collect();
        Env::raw().only(&names).map(|key| {
            LEGACY_ENV
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map(|(_, path)| (*path).into())
                .unwrap_or_else(|| key.as_str().to_string().into())
        })
    }

    /// Get the global config file path (`<config dir>/jobshift/config.toml`)
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     {}* and legacy variables", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./jobshift.toml or ./.jobshift.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
