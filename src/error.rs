//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur while dealing a round.
///
/// Transport and parse failures are not errors here: they are reported through
/// the [`ApiCallResult`](crate::source::ApiCallResult) envelope so that callers
/// can inspect the raw status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// No deck has been acquired for this round.
    #[error("no active deck")]
    NoActiveDeck,
}
