//! Common error types for the cqlprim tools

/// A specialized `Result` type for configuration and setup
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for configuration and setup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An environment variable holds a value that cannot be used
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidEnv {
        /// Name of the variable
        var: &'static str,
        /// The value it holds
        value: String,
        /// Why the value was refused
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidEnv {
            var: "CQLPRIM_LOG",
            value: "loud".to_string(),
            reason: "not a level".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value \"loud\" for CQLPRIM_LOG: not a level");
    }
}
