use thiserror::Error as ThisError;

/// Raised when a checksummed base58 string fails to decode as a hash
/// identifier: not valid base58, bad checksum, wrong binary prefix, or wrong
/// payload length. Carries the offending string.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("Invalid notation: {0}")]
pub struct InvalidNotation(pub String);

/// Raised when a string fails to parse as a rollup identifier.
///
/// Every underlying decode failure collapses into this single externally
/// visible kind, with the offending string embedded.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("Invalid rollup notation: {0}")]
pub struct InvalidRollupNotation(pub String);

impl From<InvalidNotation> for InvalidRollupNotation {
    fn from(err: InvalidNotation) -> Self {
        InvalidRollupNotation(err.0)
    }
}

/// General error type in the module system.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Custom error thrown by a module.
    #[error(transparent)]
    ModuleError(#[from] anyhow::Error),
}
