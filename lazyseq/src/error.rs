use thiserror::Error;

/// Library error.
///
/// There is a single kind: an operator was invoked with an argument that
/// must not be absent. It is raised eagerly, before any lazy wrapper is
/// constructed, and is a programmer-error signal; there is nothing to
/// retry or recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
