// errors.rs
use thiserror::Error;

/// Errors a route handler can return. `main` turns each into an HTML error
/// page with the matching status.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Serialization Error: {0}")]
    JsonError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::XlsxError(_) | ServerError::JsonError(_) | ServerError::InternalError => {
                500
            }
        }
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(e: serde_json::Error) -> Self {
        ServerError::JsonError(e.to_string())
    }
}
