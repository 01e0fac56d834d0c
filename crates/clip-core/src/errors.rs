use thiserror::Error;

use crate::ids::EntryId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    #[error("unknown category: {0}")]
    Unknown(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate entry id: {0}")]
    DuplicateId(EntryId),

    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
}
