//! Core engine types: money, containers, RNG, offers, the session.
//!
//! Everything here is presentation-free; the front-end reads state through
//! the session accessors and owns all formatting.

pub mod container;
pub mod error;
pub mod money;
pub mod offer;
pub mod rng;
pub mod session;

pub use container::{Board, Container, ContainerId};
pub use error::GameError;
pub use money::{Money, BOARD_VALUES, CONTAINER_COUNT};
pub use offer::banker_offer;
pub use rng::GameRng;
pub use session::{GameSession, Outcome, Phase};
