//! Error types for solo.
//!
//! Registry construction and appends are total, so the error surface is
//! small: argument checks made by callers (for example the number of racing
//! workers) and failures while writing the buffer to an output stream.

use thiserror::Error;

/// The top-level error type used throughout solo.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Writing messages to an output stream failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Shorthand `Result` type used throughout solo.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use solo_core::{ensure, errors::Error};
/// fn workers(n: usize) -> solo_core::errors::Result<usize> {
///     ensure!(n > 0, "need at least one worker, got {n}");
///     Ok(n)
/// }
/// assert!(workers(4).is_ok());
/// assert_eq!(
///     workers(0),
///     Err(Error::Precondition("need at least one worker, got 0".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(n: i32) -> Result<i32> {
        crate::ensure!(n >= 0, "negative input {n}");
        Ok(n * 2)
    }

    #[test]
    fn ensure_passes_through() {
        assert_eq!(checked(21), Ok(42));
    }

    #[test]
    fn ensure_reports_precondition() {
        let err = checked(-1).unwrap_err();
        assert_eq!(err, Error::Precondition("negative input -1".to_string()));
        assert_eq!(err.to_string(), "precondition not satisfied: negative input -1");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert_eq!(err, Error::Io("pipe closed".to_string()));
        assert_eq!(err.to_string(), "i/o error: pipe closed");
    }
}
