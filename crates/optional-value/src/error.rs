//! Error returned when extracting a value from an empty [`Optional`](crate::Optional).

use std::{error, fmt, iter};

/// Error returned by [`Optional::get()`](crate::Optional::get()) if the optional is empty.
///
/// This is the only error produced by the crate. Its identity survives wrapping: as long as the wrapping error
/// exposes it via [`source()`](error::Error::source()) (e.g., `anyhow::Context` does), the condition can be detected
/// with [`Self::is_in_chain()`] or by downcasting.
///
/// # Examples
///
/// ```
/// use anyhow::Context as _;
/// use optional_value::{NoValueError, Optional};
///
/// let err = Optional::<u16>::empty()
///     .get()
///     .context("port is not configured")
///     .unwrap_err();
/// assert_eq!(err.to_string(), "port is not configured");
/// assert!(err.downcast_ref::<NoValueError>().is_some());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoValueError;

impl fmt::Display for NoValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("optional has no value")
    }
}

impl error::Error for NoValueError {}

impl NoValueError {
    /// Checks whether `err` or any of its [sources](error::Error::source()) is a [`NoValueError`].
    pub fn is_in_chain(err: &(dyn error::Error + 'static)) -> bool {
        iter::successors(Some(err), |err| err.source()).any(<dyn error::Error>::is::<Self>)
    }
}
