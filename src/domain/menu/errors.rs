//! Menu Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
