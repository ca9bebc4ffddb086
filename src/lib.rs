//! # dond-engine
//!
//! A Deal or No Deal game engine: 26 containers, one chosen, rounds of
//! eliminations, a banker offer after each round.
//!
//! ## Design Principles
//!
//! 1. **One owned session**: all game state lives in a single `GameSession`
//!    with explicit transition methods; no globals, no implicit environment.
//!
//! 2. **Deterministic when asked**: the shuffle runs on a seedable RNG, so
//!    tests inject a seed and get a reproducible board.
//!
//! 3. **Core stops at state**: currency formatting, layout, and input belong
//!    to the presentation layer, which polls the accessors after each call.
//!
//! ## Modules
//!
//! - `core::money`: integer-cent amounts and the fixed 26-value prize board
//! - `core::container`: containers and the dealt board
//! - `core::rng`: seedable ChaCha8 RNG
//! - `core::offer`: the pure banker-offer function
//! - `core::session`: the phase state machine and round loop
//! - `core::error`: the invalid-operation error type
//!
//! ## Example
//!
//! ```
//! use dond_engine::{ContainerId, GameSession, Phase};
//!
//! let mut game = GameSession::new(42);
//! game.start()?;
//! game.choose_container(ContainerId::new(7))?;
//!
//! // Open six containers to finish round 1
//! for id in [1u8, 2, 3, 4, 5, 6] {
//!     game.eliminate(ContainerId::new(id))?;
//! }
//!
//! assert_eq!(game.phase(), Phase::ReviewingOffer);
//! let offer = game.offer().unwrap();
//! game.respond_to_offer(true)?;
//! assert_eq!(game.outcome().unwrap().amount(), offer);
//! # Ok::<(), dond_engine::GameError>(())
//! ```

pub mod core;

// Re-export commonly used types
pub use crate::core::{
    banker_offer, Board, Container, ContainerId, GameError, GameRng, GameSession, Money, Outcome,
    Phase, BOARD_VALUES, CONTAINER_COUNT,
};
