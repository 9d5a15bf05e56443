use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found")]
    PostNotFound,

    #[error("{0}")]
    ValidationError(String),

    // Reported as 500, same as any other failed lookup.
    #[error("Malformed post id: {0}")]
    MalformedId(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    pub fn to_status_code(&self) -> u16 {
        match self {
            Self::PostNotFound => 404,
            Self::ValidationError(_) => 400,
            Self::MalformedId(_) | Self::DatabaseError(_) => 500,
        }
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::PostNotFound,
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_category() {
        assert_eq!(DomainError::PostNotFound.to_status_code(), 404);
        assert_eq!(
            DomainError::ValidationError("missing".into()).to_status_code(),
            400
        );
        assert_eq!(DomainError::MalformedId("abc".into()).to_status_code(), 500);
        assert_eq!(
            DomainError::DatabaseError("down".into()).to_status_code(),
            500
        );
    }

    #[test]
    fn row_not_found_maps_to_post_not_found() {
        let err: DomainError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DomainError::PostNotFound));
    }
}
