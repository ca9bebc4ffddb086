//! Game errors.
//!
//! The engine has exactly one class of failure: an operation that is not
//! legal in the current state. There is no I/O, so nothing is transient;
//! every error leaves the session unchanged.

use thiserror::Error;

use super::container::ContainerId;
use super::session::Phase;

/// Errors returned by `GameSession` operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("{action} is not valid in phase {phase:?}")]
    InvalidPhase {
        /// The operation that was attempted.
        action: &'static str,
        /// The phase the session was in.
        phase: Phase,
    },

    #[error("container {} is not on the board", .0.get())]
    UnknownContainer(ContainerId),

    #[error("container {} is the chosen container and cannot be eliminated", .0.get())]
    ChosenContainer(ContainerId),

    #[error("container {} has already been opened", .0.get())]
    AlreadyOpened(ContainerId),
}
