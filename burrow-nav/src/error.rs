use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Source(#[from] ::config::ConfigError),

    #[error("Invalid max_depth {0}: at least one profile overlay must be allowed")]
    InvalidMaxDepth(usize),
}

#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("Malformed post detail arguments: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing post id in post detail arguments")]
    MissingPostId,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ArgsResult<T> = Result<T, ArgsError>;
