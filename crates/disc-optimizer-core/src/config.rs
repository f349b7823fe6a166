use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Descend into symlinked directories (cycles are detected and skipped).
    pub follow_symlinks: bool,
    /// Sort discovered discs lexicographically so output is stable.
    pub sort_results: bool,
    /// Glob patterns for paths the directory walk skips.
    pub ignore_patterns: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            sort_results: true,
            ignore_patterns: Vec::new(),
        }
    }
}

/// Load `Config.toml` from the working directory (if present), then apply
/// `DISC_OPTIMIZER_*` environment overrides.
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    load_configuration_from("Config")
}

pub fn load_configuration_from(name: &str) -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name(name).required(false))
        .add_source(
            Environment::with_prefix("DISC_OPTIMIZER")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("ignore_patterns"),
        )
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
