use thiserror::Error;

mod app_config;
mod boundaries;
mod config;

pub use app_config::{AppConfig, Environment};
pub use boundaries::{BoundaryEntry, BoundaryFile, BoundaryTable};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read boundary table {path}: {source}")]
    BoundaryFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse boundary table: {0}")]
    BoundaryFileParse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
