use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("content store is not configured")]
    NotConfigured,

    #[error("not found")]
    NotFound,

    #[error("malformed row in {table}: {reason}")]
    MalformedRow { table: &'static str, reason: String },

    #[error("unknown column '{column}' for table {table}")]
    UnknownColumn { table: &'static str, column: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid session token format")]
    InvalidTokenFormat,

    #[error("bad request: {0}")]
    BadRequest(String),
}

pub type Result<T> = std::result::Result<T, Error>;
