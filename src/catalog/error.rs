use thiserror::Error;

use crate::links::Band;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown frequency band table: {0}")]
    UnknownBand(String),
    #[error("device '{name}' not found in band {band} table")]
    DeviceNotFound { band: Band, name: String },
}
