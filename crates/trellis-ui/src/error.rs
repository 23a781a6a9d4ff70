//! Error types for the widget toolkit.

use std::fmt;
use std::thread::ThreadId;

use crate::widget::WidgetClass;

/// Errors surfaced at the toolkit boundary.
///
/// Lifecycle violations (`WidgetDisposed`, `ThreadInvalidAccess`) represent
/// programmer error and are reported synchronously at the call site rather
/// than being swallowed or deferred.
#[derive(Debug)]
pub enum Error {
    /// Any operation other than `is_disposed` invoked on a disposed widget.
    WidgetDisposed,

    /// An operation was invoked from a thread other than the owning thread
    /// of the widget's display.
    ThreadInvalidAccess {
        /// The display's owning thread.
        expected: ThreadId,
        /// The thread the call was made from.
        actual: ThreadId,
    },

    /// A required argument was empty or missing.
    NullArgument {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// Construction of a widget whose behavior does not match the concrete
    /// type its class enumerates.
    InvalidSubclass {
        /// The class the constructor expected.
        class: WidgetClass,
    },

    /// A numeric argument fell outside the permitted range.
    InvalidRange {
        /// The rejected value.
        value: i32,
        /// Lower bound (inclusive).
        min: i32,
        /// Upper bound (inclusive).
        max: i32,
    },

    /// Leaf-specific argument validation failure.
    InvalidArgument {
        /// Description of the rejected argument.
        reason: String,
    },

    /// The platform backend failed to create or operate on a native handle.
    BackendFailure {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WidgetDisposed => {
                write!(f, "Widget is disposed")
            }
            Error::ThreadInvalidAccess { expected, actual } => {
                write!(
                    f,
                    "Invalid thread access: owning thread is {:?}, called from {:?}",
                    expected, actual
                )
            }
            Error::NullArgument { name } => {
                write!(f, "Argument cannot be null: {}", name)
            }
            Error::InvalidSubclass { class } => {
                write!(f, "Subclassing not allowed for widget class {:?}", class)
            }
            Error::InvalidRange { value, min, max } => {
                write!(f, "Value {} out of range [{}, {}]", value, min, max)
            }
            Error::InvalidArgument { reason } => {
                write!(f, "Invalid argument: {}", reason)
            }
            Error::BackendFailure { reason } => {
                write!(f, "Platform backend failure: {}", reason)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result alias for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;
