use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use witsml_catalog::ResolverConfig;

/// Settings read from the optional TOML file.
///
/// ```toml
/// catalog = "field.json"
/// default_types = ["LOG", "TRAJECTORY"]
///
/// [resolver]
/// concurrent_fanout = true
/// require_any_success = false
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Snapshot used when `--catalog` is not given.
    pub catalog: Option<PathBuf>,
    /// Types listed by `ls` at wellbore level when no `-t` is given.
    pub default_types: Vec<String>,
    pub resolver: ResolverConfig,
}

impl CliConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// The snapshot to open: the flag wins over the file.
    pub fn catalog_path<'a>(&'a self, flag: Option<&'a Path>) -> Option<&'a Path> {
        flag.or(self.catalog.as_deref())
    }
}
