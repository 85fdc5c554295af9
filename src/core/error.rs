use log::error;
use thiserror::Error;

/// Errors reported by the curve kernel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A caller-supplied argument was rejected before any interpolation
    /// work started.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type CurveResult<T> = Result<T, CurveError>;

// Every rejection goes through here so it is logged at the site that
// detected it, in addition to travelling back in the returned error.
pub(crate) fn invalid_argument<T>(msg: String) -> CurveResult<T> {
    error!("{}", msg);
    Err(CurveError::InvalidArgument(msg))
}
