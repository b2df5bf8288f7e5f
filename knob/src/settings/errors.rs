use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("settings file access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
