//! Error types for the protocol layer.

/// Errors that can occur while decoding protocol values.
///
/// These only come up at the raw boundary, when an `i32` has to be turned
/// back into a typed value. `thiserror::Error` generates the
/// `std::error::Error` and `Display` impls from the `#[error(...)]`
/// attributes, so `ProtocolError::UnknownCode(-1).to_string()` reads
/// `"unknown status code: -1"`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The integer is negative but is not one of the known status codes.
    #[error("unknown status code: {0}")]
    UnknownCode(i32),

    /// The integer cannot name a game or player.
    ///
    /// Game ids must be non-negative and player ids strictly positive.
    #[error("invalid identifier: {0}")]
    InvalidId(i32),
}
