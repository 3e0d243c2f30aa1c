use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised when constructing generators from caller-supplied state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Stream increments must be odd to give the full `2^64` period.
    #[error("gamma {0:#018x} is even; stream increments must be odd")]
    EvenGamma(u64),
}
