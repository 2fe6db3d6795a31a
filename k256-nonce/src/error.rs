//! Error types.

use core::fmt::{self, Display};

/// Nonce derivation errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The secret or the reduced digest does not fit in 32 big-endian bytes.
    Encoding,

    /// The rejection loop ran for `iterations` candidates without finding one
    /// in `[1, N)`. Only reachable with a broken group order.
    IterationLimit {
        /// Number of candidates drawn before giving up.
        iterations: u32,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Encoding => f.write_str("value does not fit in 32 bytes"),
            Error::IterationLimit { iterations } => {
                write!(f, "no nonce in range after {iterations} candidates")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
