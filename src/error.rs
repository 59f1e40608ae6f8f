use std::path::PathBuf;

/// Failures while loading a [`SliderConfig`](crate::SliderConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid slider config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color for `{field}`: {value:?}")]
    InvalidColor { field: &'static str, value: String },
}
