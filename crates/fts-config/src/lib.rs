//! Configuration management for the FTS tools.
//!
//! Parses `fts.toml` with serde, auto-discovers the file in parent
//! directories, and applies CLI overrides during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields: `site.id`, `store.base_url`, `store.token_path`.
//!
//! When no `[store]` section is present, the `FTS_STORE_URL` and
//! `FTS_TOKEN_PATH` environment variables stand in, so the extraction
//! tool can upload with nothing but environment configuration.

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use expand::expand_env;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "fts.toml";

/// Default export filename.
const DEFAULT_OUTPUT: &str = "site-data.json";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded
/// config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the site id.
    pub site_id: Option<String>,
    /// Override the static-page source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the export output path.
    pub output: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicitly named config file does not exist.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Environment variable expansion failed.
    #[error("invalid value for {field}: {message}")]
    EnvVar { field: String, message: String },
}

/// Raw `[site]` table.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site identifier used in every document address.
    pub id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            id: "flip-the-switch".to_owned(),
        }
    }
}

/// Raw `[store]` table as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct StoreConfigRaw {
    base_url: Option<String>,
    token_path: Option<String>,
}

/// Resolved store access configuration. Present only when both a base URL
/// and a credential path are configured.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Document-database base URL.
    pub base_url: String,
    /// Path to the bearer-token credential file.
    pub token_path: PathBuf,
}

/// Raw `[extract]` table as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ExtractConfigRaw {
    source_dir: Option<String>,
    output: Option<String>,
}

/// Resolved extraction tool configuration with absolute-ish paths.
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    /// Directory holding the legacy static pages.
    pub source_dir: PathBuf,
    /// Path the full extracted data set is written to.
    pub output: PathBuf,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Site identity.
    #[serde(default)]
    pub site: SiteConfig,
    /// Store access (optional section).
    #[serde(default)]
    store: Option<StoreConfigRaw>,
    /// Extraction tool settings.
    #[serde(default)]
    extract: ExtractConfigRaw,

    /// Resolved store configuration (set after loading).
    #[serde(skip)]
    pub store_resolved: Option<StoreConfig>,
    /// Resolved extraction configuration (set after loading).
    #[serde(skip)]
    pub extract_resolved: ExtractConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            store: None,
            extract: ExtractConfigRaw::default(),
            store_resolved: None,
            extract_resolved: ExtractConfig::default(),
            config_path: None,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Otherwise `fts.toml`
    /// is discovered upward from the working directory; when none is
    /// found, defaults apply. CLI settings override file values either
    /// way.
    pub fn load(path: Option<&Path>, cli: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let (mut config, base_dir) = match path {
            Some(explicit) => {
                if !explicit.is_file() {
                    return Err(ConfigError::NotFound(explicit.to_path_buf()));
                }
                (Self::parse_file(explicit)?, parent_dir(explicit))
            }
            None => match Self::discover() {
                Some(found) => (Self::parse_file(&found)?, parent_dir(&found)),
                None => (
                    Self::default(),
                    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
                ),
            },
        };

        config.resolve(&base_dir, cli)?;
        Ok(config)
    }

    fn parse_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&raw)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Search for `fts.toml` in the working directory and its ancestors.
    fn discover() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    fn resolve(&mut self, base_dir: &Path, cli: Option<&CliSettings>) -> Result<(), ConfigError> {
        self.site.id = expand_env(&self.site.id, "site.id")?;
        if let Some(site_id) = cli.and_then(|c| c.site_id.clone()) {
            self.site.id = site_id;
        }

        let source_dir = match cli.and_then(|c| c.source_dir.clone()) {
            Some(dir) => dir,
            None => self
                .extract
                .source_dir
                .as_deref()
                .map_or_else(|| base_dir.to_path_buf(), |dir| join_base(base_dir, dir)),
        };
        let output = match cli.and_then(|c| c.output.clone()) {
            Some(path) => path,
            None => self
                .extract
                .output
                .as_deref()
                .map_or_else(|| base_dir.join(DEFAULT_OUTPUT), |path| join_base(base_dir, path)),
        };
        self.extract_resolved = ExtractConfig { source_dir, output };

        let raw_store = self.store.take().unwrap_or_default();
        let base_url = match raw_store.base_url {
            Some(url) => expand_env(&url, "store.base_url")?,
            None => std::env::var("FTS_STORE_URL").unwrap_or_default(),
        };
        let token_path = match raw_store.token_path {
            Some(path) => expand_env(&path, "store.token_path")?,
            None => std::env::var("FTS_TOKEN_PATH").unwrap_or_default(),
        };
        self.store_resolved = if base_url.is_empty() || token_path.is_empty() {
            None
        } else {
            Some(StoreConfig {
                base_url,
                token_path: join_base(base_dir, &token_path),
            })
        };

        Ok(())
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn join_base(base: &Path, path: &str) -> PathBuf {
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        candidate
    } else {
        base.join(candidate)
    }
}
