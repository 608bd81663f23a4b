//! Global config file source: $XDG_CONFIG_HOME/treeseal/config.toml
//! (platform config directory elsewhere).

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to global config file, if a home directory can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treeseal").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the global config file source to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: Option<PathBuf>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let Some(path) = path else {
        return Ok(builder);
    };
    if !path.is_file() {
        debug!(config_path = %path.display(), "No global configuration file");
        return Ok(builder);
    }
    Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(false)))
}
