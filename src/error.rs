use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Output error: {0}")]
    OutputError(String),
}
