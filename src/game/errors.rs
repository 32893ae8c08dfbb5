use thiserror::Error;

/// Errors that can arise in the rule engine and its storage layer.
#[derive(Debug, Error)]
pub enum GameError {
    /// Wrapper around sled's error type.
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),

    /// Wrapper around bincode serialization and deserialization errors.
    #[error("serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Wrapper around IO errors (directory creation, seed files, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when fetching a record that is not present.
    #[error("record not found: {0}")]
    NotFound(String),

    /// Returned when deserializing a record with an unexpected schema version.
    #[error("schema mismatch for {entity}: expected {expected}, got {found}")]
    SchemaMismatch {
        entity: &'static str,
        expected: u8,
        found: u8,
    },

    /// Registering a user id that already has a record.
    #[error("player already registered: {0}")]
    AlreadyRegistered(u64),

    /// Item name that resolves to nothing in the catalog.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// Class tag that resolves to nothing in the content tables.
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// Malformed or inconsistent content seed data.
    #[error("invalid content: {0}")]
    InvalidContent(String),
}
