use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};
use std::fs::{File, OpenOptions};
use std::path::PathBuf;

/// Target of records written by [`crate::stack::NavigationStack`] and of
/// controller stack snapshots
pub const PROFILE_STACK_TARGET: &str = "profile_stack";

/// Target of controller decisions (open, reject, dismiss, handoff)
pub const NAVIGATION_TARGET: &str = "navigation";

/// Where navigation logs go and which of them are kept
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// When false, `init_logging` installs a sink and the controller macros
    /// stay silent regardless of `features`
    pub enabled: bool,
    pub log_file: PathBuf,
    /// Truncate `log_file` in `init_logging`
    pub clear_on_startup: bool,
    pub features: LogFeatures,
    pub level: LevelFilter,
}

/// Per-target switches. A target switched off is muted in the controller
/// macros and filtered out by the logger `init_logging` installs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFeatures {
    pub profile_stack: bool,
    pub navigation: bool,
}

impl LogFeatures {
    pub fn all() -> Self {
        Self {
            profile_stack: true,
            navigation: true,
        }
    }

    pub fn none() -> Self {
        Self {
            profile_stack: false,
            navigation: false,
        }
    }
}

impl Default for LogFeatures {
    fn default() -> Self {
        Self::all()
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_file: PathBuf::from("burrow_nav.log"),
            clear_on_startup: true,
            features: LogFeatures::all(),
            level: LevelFilter::Debug,
        }
    }
}

impl LogConfig {
    /// Master switch off; no log file is touched
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            features: LogFeatures::none(),
            ..Default::default()
        }
    }

    /// Warnings and errors only, with both navigation targets muted
    pub fn minimal() -> Self {
        Self {
            level: LevelFilter::Warn,
            features: LogFeatures::none(),
            ..Default::default()
        }
    }

    /// Every target down to trace level
    pub fn verbose() -> Self {
        Self {
            level: LevelFilter::Trace,
            features: LogFeatures::all(),
            ..Default::default()
        }
    }

    /// Targets the installed logger drops
    pub fn muted_targets(&self) -> Vec<&'static str> {
        let mut muted = Vec::new();
        if !self.features.profile_stack {
            muted.push(PROFILE_STACK_TARGET);
        }
        if !self.features.navigation {
            muted.push(NAVIGATION_TARGET);
        }
        muted
    }
}

/// Install a file logger for `config`.
///
/// The logger is process-wide; a second call fails.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    if !config.enabled {
        let _ = WriteLogger::init(LevelFilter::Off, Config::default(), std::io::sink());
        return Ok(());
    }

    if config.clear_on_startup {
        File::create(&config.log_file)?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let mut builder = ConfigBuilder::new();
    builder.set_time_format_rfc3339();
    // Falls back to UTC when the local offset can't be determined
    let _ = builder.set_time_offset_to_local();
    for target in config.muted_targets() {
        builder.add_filter_ignore_str(target);
    }

    WriteLogger::init(config.level, builder.build(), log_file)?;

    log::info!(
        "Navigation logging to {} at {:?}, muted targets: {:?}",
        config.log_file.display(),
        config.level,
        config.muted_targets()
    );

    Ok(())
}

/// Debug record on [`PROFILE_STACK_TARGET`], if `$config` lets it through
#[macro_export]
macro_rules! log_profile_stack {
    ($config:expr, $($arg:tt)*) => {
        if $config.enabled && $config.features.profile_stack {
            log::debug!(target: $crate::logging::PROFILE_STACK_TARGET, $($arg)*);
        }
    };
}

/// Debug record on [`NAVIGATION_TARGET`], if `$config` lets it through
#[macro_export]
macro_rules! log_navigation {
    ($config:expr, $($arg:tt)*) => {
        if $config.enabled && $config.features.navigation {
            log::debug!(target: $crate::logging::NAVIGATION_TARGET, $($arg)*);
        }
    };
}
