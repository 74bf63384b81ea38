use thiserror::Error;

/// Errors raised while constructing navigation data.
///
/// Failed lookups and unreachable goals are not errors; those are reported as
/// `None` by the query APIs. This enum only covers structural invariant
/// violations surfaced at construction/insertion time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    DegeneratePolygon { count: usize },

    #[error("polygon id {id} is already registered")]
    DuplicatePolygon { id: u32 },
}

pub type Result<T> = std::result::Result<T, NavError>;
