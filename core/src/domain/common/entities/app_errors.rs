use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Incorrect email or password.")]
    InvalidCredentials,

    #[error("This email is already registered.")]
    EmailAlreadyInUse,

    #[error("Password should be at least 6 characters.")]
    WeakPassword,

    #[error("Invalid or expired session")]
    InvalidToken,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Service temporarily unavailable")]
    ServiceUnavailable,

    #[error("Internal server error")]
    InternalServerError,
}
