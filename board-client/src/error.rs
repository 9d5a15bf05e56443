use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardClientError {
    // HTTP ошибки
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    // Бизнес-логика ошибки
    #[error("Resource not found")]
    NotFound,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    // Транспортные ошибки
    #[error("Transport error: {0}")]
    TransportError(String),
}

impl BoardClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BoardClientError::NotFound)
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, BoardClientError::InvalidRequest(_))
    }
}
