use jw_reflect::Reflect;
use thiserror::Error;

// -----------------------------------------------------------------------------
// EmitError

/// A fatal condition during a write call.
///
/// Only true failures surface here. Policy-resolved conditions (depth
/// exceeded, reference cycle detected) and recoverable extraction failures
/// are handled inside the traversal and never reach the caller; values the
/// classifier cannot place degrade to the undefined marker instead of
/// erroring. Once a fatal condition occurs the engine makes no attempt to
/// complete a partial document.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The sink failed to accept a token.
    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),

    /// A float with no finite decimal representation (NaN, an infinity, or a
    /// magnitude beyond the decimal range) reached number emission.
    #[error("number has no finite decimal representation: {0}")]
    NonFiniteNumber(f64),

    /// A custom emitter failed while handling a value it claimed.
    #[error("custom emitter failed for `{type_path}`: {message}")]
    Custom {
        /// Type path of the claimed value.
        type_path: String,
        /// Failure description supplied by the emitter.
        message: String,
    },
}

impl EmitError {
    /// Builds a [`EmitError::Custom`] for the given value.
    pub fn custom(value: &dyn Reflect, message: impl Into<String>) -> Self {
        EmitError::Custom {
            type_path: value.type_path().into_owned(),
            message: message.into(),
        }
    }
}
