use thiserror::Error;

#[derive(Debug, Error)]
pub enum FulfillmentError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("No role given. Pass `--role` or set `default_role` in fulfillment.toml.")]
    MissingRole,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
