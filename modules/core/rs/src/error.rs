use derive_more::{Display, Error};

/// Failures surfaced by the dict-like operations of a bound map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum MapError {
    /// The requested key is not present in the container.
    #[display("key not found")]
    KeyNotFound,
}

pub type Result<T> = std::result::Result<T, MapError>;
