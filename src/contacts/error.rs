use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactsError {
    // Displayed bare: validation messages travel verbatim as HTTP 500 bodies
    #[error("{0}")]
    Validation(String),

    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("server returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, ContactsError>;
