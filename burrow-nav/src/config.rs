use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::stack::MAX_DEPTH;

/// File name looked up in `~/.burrow` and the working directory
pub const CONFIG_FILE_NAME: &str = "navigation.toml";

pub const ENV_MAX_DEPTH: &str = "BURROW_MAX_PROFILE_DEPTH";
pub const ENV_SHOW_STACK_INFO: &str = "BURROW_SHOW_STACK_INFO";

/// Settings for nested profile overlays
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavigationConfig {
    /// How many profile overlays may be stacked on one post detail view
    pub max_depth: usize,
    /// Show the `depth/max` badge and near-limit warning on overlays
    pub show_stack_info: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            show_stack_info: true,
        }
    }
}

impl NavigationConfig {
    /// Load settings with the following priority (highest last):
    /// 1. Built-in defaults
    /// 2. `~/.burrow/navigation.toml`
    /// 3. `navigation.toml` in the working directory
    /// 4. `BURROW_MAX_PROFILE_DEPTH` / `BURROW_SHOW_STACK_INFO`
    pub fn load() -> ConfigResult<Self> {
        let user_path = Self::user_config_path();
        Self::load_with(
            user_path.as_deref(),
            Path::new(CONFIG_FILE_NAME),
            |key| std::env::var(key).ok(),
        )
    }

    /// Layer defaults, `user_path`, `local_path` and the `lookup` overrides,
    /// later sources winning. Missing files are skipped.
    pub fn load_with<F>(
        user_path: Option<&Path>,
        local_path: &Path,
        lookup: F,
    ) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::defaults()?;

        for path in user_path.into_iter().chain(std::iter::once(local_path)) {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = Self::apply_overrides(builder, lookup)?;

        Self::finish(builder)
    }

    /// Load a single settings file over the defaults, ignoring the environment
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let builder = Self::defaults()?.add_source(File::from(path).required(true));
        Self::finish(builder)
    }

    /// `~/.burrow/navigation.toml`, if a home directory is known
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".burrow").join(CONFIG_FILE_NAME))
    }

    /// Reject settings that would make every profile click fail
    pub fn validate(self) -> ConfigResult<Self> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth(self.max_depth));
        }
        Ok(self)
    }

    fn defaults() -> ConfigResult<ConfigBuilder<DefaultState>> {
        let defaults = Self::default();
        let builder = Config::builder()
            .set_default("max_depth", defaults.max_depth as u64)?
            .set_default("show_stack_info", defaults.show_stack_info)?;
        Ok(builder)
    }

    fn apply_overrides<F>(
        mut builder: ConfigBuilder<DefaultState>,
        lookup: F,
    ) -> ConfigResult<ConfigBuilder<DefaultState>>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(max_depth) = lookup(ENV_MAX_DEPTH) {
            builder = builder.set_override("max_depth", max_depth)?;
        }
        if let Some(show) = lookup(ENV_SHOW_STACK_INFO) {
            builder = builder.set_override("show_stack_info", show)?;
        }
        Ok(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> ConfigResult<Self> {
        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()
    }
}
