//! Error types for constructing algebraic structures.

use thiserror::Error;

/// Errors that can occur while constructing a structure.
///
/// Law checks never produce errors: a sampled law that does not hold is a
/// `false` verdict, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// The additive and multiplicative identities of a field coincide.
    #[error("0 = 1: additive identity {identity} cannot equal the multiplicative identity")]
    DegenerateField {
        /// `Debug` rendering of the shared identity.
        identity: String,
    },
}

/// Result type for structure construction.
pub type Result<T> = std::result::Result<T, AlgebraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_field_message() {
        let err = AlgebraError::DegenerateField {
            identity: "0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "0 = 1: additive identity 0 cannot equal the multiplicative identity"
        );
    }
}
