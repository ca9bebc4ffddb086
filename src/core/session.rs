//! The game session: phases, transitions, and the round loop.
//!
//! `GameSession` is the single owned piece of mutable state. Every
//! user-facing operation is a method that either completes atomically or
//! returns a `GameError` with the session untouched. The presentation layer
//! drives it by calling operations and re-reading the accessors; the core
//! pushes no notifications and depends on no reactive machinery.

use serde::{Deserialize, Serialize};

use super::container::{Board, Container, ContainerId};
use super::error::GameError;
use super::money::{Money, BOARD_VALUES};
use super::offer::banker_offer;
use super::rng::GameRng;

/// Containers to open in the first round.
const FIRST_BATCH: u8 = 6;

/// Where the session is in the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No board has been dealt yet.
    NotStarted,
    /// The player is picking the container they will keep.
    ChoosingContainer,
    /// The player is opening containers to finish the current batch.
    EliminatingContainers,
    /// A banker offer is on the table.
    ReviewingOffer,
    /// The game is over; `outcome()` is set.
    Finished,
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player took the banker's offer.
    Deal(Money),
    /// The player held out and won the chosen container's value.
    NoDeal(Money),
}

impl Outcome {
    /// The amount the player walks away with.
    #[must_use]
    pub fn amount(&self) -> Money {
        match self {
            Outcome::Deal(amount) | Outcome::NoDeal(amount) => *amount,
        }
    }

    /// Whether the player accepted a banker offer.
    #[must_use]
    pub fn is_deal(&self) -> bool {
        matches!(self, Outcome::Deal(_))
    }
}

/// One complete game of Deal or No Deal.
#[derive(Clone, Debug)]
pub struct GameSession {
    phase: Phase,
    board: Option<Board>,
    chosen: Option<ContainerId>,
    round: u32,
    remaining_in_batch: u8,
    eliminated_values: Vec<Money>,
    offer: Option<Money>,
    outcome: Option<Outcome>,
    rng: GameRng,
}

impl GameSession {
    /// Create a session with an explicit RNG seed.
    ///
    /// The same seed always deals the same board, which is what tests (and
    /// anyone replaying a deal) want.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a session seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    fn with_rng(rng: GameRng) -> Self {
        Self {
            phase: Phase::NotStarted,
            board: None,
            chosen: None,
            round: 1,
            remaining_in_batch: FIRST_BATCH,
            eliminated_values: Vec::new(),
            offer: None,
            outcome: None,
            rng,
        }
    }

    // === Operations ===

    /// Deal a fresh board and move to `ChoosingContainer`.
    ///
    /// Valid in `NotStarted`, and again in `Finished` to play another game
    /// on the same session (the board is re-dealt from the same RNG stream).
    pub fn start(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::NotStarted | Phase::Finished => {}
            phase => {
                return Err(GameError::InvalidPhase {
                    action: "start",
                    phase,
                })
            }
        }

        self.board = Some(Board::deal(&mut self.rng));
        self.chosen = None;
        self.round = 1;
        self.remaining_in_batch = FIRST_BATCH;
        self.eliminated_values.clear();
        self.offer = None;
        self.outcome = None;
        self.phase = Phase::ChoosingContainer;
        Ok(())
    }

    /// Record the player's container and move to `EliminatingContainers`.
    pub fn choose_container(&mut self, id: ContainerId) -> Result<(), GameError> {
        if self.phase != Phase::ChoosingContainer {
            return Err(GameError::InvalidPhase {
                action: "choose_container",
                phase: self.phase,
            });
        }

        let board = self.board.as_ref().ok_or(GameError::InvalidPhase {
            action: "choose_container",
            phase: self.phase,
        })?;
        if board.get(id).is_none() {
            return Err(GameError::UnknownContainer(id));
        }

        self.chosen = Some(id);
        self.phase = Phase::EliminatingContainers;
        Ok(())
    }

    /// Open a non-chosen container and return its revealed value.
    ///
    /// When this completes the current batch, the banker's offer is computed
    /// and the session moves to `ReviewingOffer`.
    pub fn eliminate(&mut self, id: ContainerId) -> Result<Money, GameError> {
        if self.phase != Phase::EliminatingContainers {
            return Err(GameError::InvalidPhase {
                action: "eliminate",
                phase: self.phase,
            });
        }

        // Both are set before EliminatingContainers is ever reachable.
        let chosen = self.chosen.ok_or(GameError::InvalidPhase {
            action: "eliminate",
            phase: self.phase,
        })?;
        let board = self.board.as_mut().ok_or(GameError::InvalidPhase {
            action: "eliminate",
            phase: self.phase,
        })?;

        let container = board.get(id).ok_or(GameError::UnknownContainer(id))?;
        if id == chosen {
            return Err(GameError::ChosenContainer(id));
        }
        if container.is_opened() {
            return Err(GameError::AlreadyOpened(id));
        }

        // Validated above, so the open cannot refuse.
        let value = board.open(id).ok_or(GameError::AlreadyOpened(id))?;
        self.eliminated_values.push(value);
        self.remaining_in_batch -= 1;

        if self.remaining_in_batch == 0 {
            let unopened = board.unopened_values();
            self.offer = Some(banker_offer(&unopened, self.round));
            self.phase = Phase::ReviewingOffer;
        }

        Ok(value)
    }

    /// Answer the banker: deal or no deal.
    ///
    /// Accepting finishes the game at the offer amount. Rejecting either
    /// starts the next round, or, when only the chosen container is left
    /// unopened, finishes the game at that container's value.
    pub fn respond_to_offer(&mut self, accept: bool) -> Result<(), GameError> {
        if self.phase != Phase::ReviewingOffer {
            return Err(GameError::InvalidPhase {
                action: "respond_to_offer",
                phase: self.phase,
            });
        }

        let offer = self.offer.ok_or(GameError::InvalidPhase {
            action: "respond_to_offer",
            phase: self.phase,
        })?;

        if accept {
            self.outcome = Some(Outcome::Deal(offer));
            self.phase = Phase::Finished;
            return Ok(());
        }

        let chosen = self.chosen.ok_or(GameError::InvalidPhase {
            action: "respond_to_offer",
            phase: self.phase,
        })?;
        let board = self.board.as_ref().ok_or(GameError::InvalidPhase {
            action: "respond_to_offer",
            phase: self.phase,
        })?;

        let remaining = board.unopened_count_excluding(chosen);
        if remaining <= 1 {
            let kept = board.get(chosen).ok_or(GameError::UnknownContainer(chosen))?;
            self.outcome = Some(Outcome::NoDeal(kept.value()));
            self.phase = Phase::Finished;
        } else {
            self.round += 1;
            self.remaining_in_batch = next_batch_size(remaining);
            self.offer = None;
            self.phase = Phase::EliminatingContainers;
        }
        Ok(())
    }

    // === Accessors ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// All containers in id order; empty before the first `start()`.
    #[must_use]
    pub fn containers(&self) -> &[Container] {
        self.board.as_ref().map_or(&[], Board::containers)
    }

    /// The player's chosen container, once picked.
    #[must_use]
    pub fn chosen_container(&self) -> Option<ContainerId> {
        self.chosen
    }

    /// Current 1-based round number.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Containers still to open before the next offer.
    #[must_use]
    pub fn remaining_in_batch(&self) -> u8 {
        self.remaining_in_batch
    }

    /// The banker's offer, present only in `ReviewingOffer`.
    #[must_use]
    pub fn offer(&self) -> Option<Money> {
        self.offer
    }

    /// Values revealed so far, in elimination order.
    #[must_use]
    pub fn eliminated_values(&self) -> &[Money] {
        &self.eliminated_values
    }

    /// The final result, present only in `Finished`.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The full prize set, for board display.
    #[must_use]
    pub fn board_values(&self) -> &'static [Money] {
        &BOARD_VALUES
    }

    /// The RNG seed behind this session's deals.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

/// Batch size for the next round, given how many unopened non-chosen
/// containers remain after a rejected offer.
fn next_batch_size(remaining: usize) -> u8 {
    if remaining >= 6 {
        5
    } else if remaining >= 5 {
        4
    } else if remaining >= 4 {
        3
    } else if remaining >= 3 {
        2
    } else {
        1
    }
}
