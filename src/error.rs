use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building or configuring a card.
///
/// Bad display input (an unparseable creation date) is not an error: the
/// card falls back to placeholder text instead.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("persistent volume not bound: objectMeta.name is missing")]
    NotBound,

    #[error("no route registered for state {0:?}")]
    UnknownState(String),

    #[error("route for state {state:?} uses unknown parameter {param:?}")]
    UnknownRouteParam { state: String, param: String },

    #[error("invalid short date pattern {0:?}")]
    InvalidDatePattern(String),

    #[error("UTC offset of {0} minutes is out of range")]
    InvalidUtcOffset(i32),

    #[error("failed to read settings {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    SettingsFormat(#[from] serde_yaml::Error),

    #[error("failed to parse persistent volume payload: {0}")]
    Payload(#[from] serde_json::Error),
}
