use thiserror::Error;

/// Errors raised by random source operations.
///
/// Generation itself never fails; errors only report arguments that were
/// rejected before any value was drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// An argument was absent or outside the accepted domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the rejected argument.
        name: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },
}

/// A type alias for `Result<T, RandomError>`.
pub type RandomResult<T> = Result<T, RandomError>;
