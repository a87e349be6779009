use crate::status::BookingStatus;

/// Error taxonomy for the booking engine.
///
/// `Database` maps straight from diesel so that ledger and orchestrator
/// code can use `?` inside transactions; everything else is raised
/// explicitly at the point where the business rule breaks.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Invariant(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("cannot {action} a booking in state {from}")]
    InvalidState {
        from: BookingStatus,
        action: &'static str,
    },

    #[error("payment gateway failure: {0}")]
    Gateway(String),

    #[error("invoice queue failure: {0}")]
    Queue(String),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("connection pool error: {0}")]
    Pool(String),
}

impl BookingError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }

    pub fn pool(err: impl std::fmt::Display) -> Self {
        Self::Pool(err.to_string())
    }

    pub fn gateway(err: impl std::fmt::Display) -> Self {
        Self::Gateway(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
