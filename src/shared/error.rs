use serde::Serialize;
use thiserror::Error;

use crate::shared::types::Category;

#[derive(Error, Debug, Serialize)]
pub enum AppError {
    #[error("Unknown {category} unit: {unit}")]
    UnknownUnit { category: Category, unit: String },

    #[error("A favorite named '{0}' already exists")]
    DuplicateFavorite(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Validation Error: {0}")]
    Validation(String),
}

// Implement conversion from standard errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

// Helper for Tauri Result
pub type AppResult<T> = Result<T, AppError>;
