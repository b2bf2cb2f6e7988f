use thiserror::Error;

#[derive(Error, Debug)]
pub enum GbvError {
    #[error("Project validation failed: {0}")]
    ProjectValidation(String),

    #[error("Malformed dependency report: {0}")]
    MalformedReport(String),

    #[error("Code generation failed: {0}")]
    CodeGeneration(String),

    #[error("Git operation failed: {0}")]
    GitOperation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GbvError>;
