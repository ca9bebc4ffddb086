//! Containers and the dealt board.
//!
//! A `Board` is created once per game by shuffling the fixed prize set onto
//! the 26 container ids. Ids and values are immutable after the deal; the
//! only mutation a container ever sees is its `opened` flag flipping once.

use serde::{Deserialize, Serialize};

use super::money::{Money, BOARD_VALUES, CONTAINER_COUNT};
use super::rng::GameRng;

/// A 1-based container identifier (1..=26).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContainerId(u8);

impl ContainerId {
    /// Create a container id. The board rejects ids outside 1..=26 at use.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The raw 1-based id.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterate over all ids on a full board, in display order.
    pub fn all() -> impl Iterator<Item = ContainerId> {
        (1..=CONTAINER_COUNT as u8).map(ContainerId::new)
    }
}

/// A sealed container holding one hidden prize value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    id: ContainerId,
    value: Money,
    opened: bool,
}

impl Container {
    /// This container's id.
    #[must_use]
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// The prize inside. Whether to show it is the presentation layer's call.
    #[must_use]
    pub fn value(&self) -> Money {
        self.value
    }

    /// Whether this container has been opened.
    #[must_use]
    pub fn is_opened(&self) -> bool {
        self.opened
    }
}

/// The 26 dealt containers for one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    containers: Vec<Container>,
}

impl Board {
    /// Deal a new board: an unbiased random assignment of the fixed prize
    /// set to container ids 1..=26.
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        let mut values = BOARD_VALUES;
        rng.shuffle(&mut values);

        let containers = values
            .iter()
            .zip(ContainerId::all())
            .map(|(&value, id)| Container {
                id,
                value,
                opened: false,
            })
            .collect();

        Self { containers }
    }

    /// All containers in id order.
    #[must_use]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Look up a container by id.
    #[must_use]
    pub fn get(&self, id: ContainerId) -> Option<&Container> {
        let idx = (id.get() as usize).checked_sub(1)?;
        self.containers.get(idx)
    }

    /// Open a container. Returns its value, or `None` if the id is off the
    /// board or the container is already open.
    pub fn open(&mut self, id: ContainerId) -> Option<Money> {
        let idx = (id.get() as usize).checked_sub(1)?;
        let container = self.containers.get_mut(idx)?;
        if container.opened {
            return None;
        }
        container.opened = true;
        Some(container.value)
    }

    /// Values of every unopened container, the chosen one included.
    #[must_use]
    pub fn unopened_values(&self) -> Vec<Money> {
        self.containers
            .iter()
            .filter(|c| !c.opened)
            .map(Container::value)
            .collect()
    }

    /// Count of unopened containers other than `chosen`.
    #[must_use]
    pub fn unopened_count_excluding(&self, chosen: ContainerId) -> usize {
        self.containers
            .iter()
            .filter(|c| !c.opened && c.id != chosen)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_deal_assigns_all_values_once() {
        let mut rng = GameRng::new(42);
        let board = Board::deal(&mut rng);

        assert_eq!(board.containers().len(), CONTAINER_COUNT);

        let dealt: HashSet<Money> = board.containers().iter().map(Container::value).collect();
        let expected: HashSet<Money> = BOARD_VALUES.iter().copied().collect();
        assert_eq!(dealt, expected);
    }

    #[test]
    fn test_deal_is_seeded() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let board1 = Board::deal(&mut rng1);
        let board2 = Board::deal(&mut rng2);

        assert_eq!(board1.containers(), board2.containers());
    }

    #[test]
    fn test_ids_are_one_based_and_in_order() {
        let mut rng = GameRng::new(1);
        let board = Board::deal(&mut rng);

        for (idx, container) in board.containers().iter().enumerate() {
            assert_eq!(container.id().get() as usize, idx + 1);
        }
    }

    #[test]
    fn test_get_bounds() {
        let mut rng = GameRng::new(1);
        let board = Board::deal(&mut rng);

        assert!(board.get(ContainerId::new(1)).is_some());
        assert!(board.get(ContainerId::new(26)).is_some());
        assert!(board.get(ContainerId::new(0)).is_none());
        assert!(board.get(ContainerId::new(27)).is_none());
    }

    #[test]
    fn test_open_transitions_once() {
        let mut rng = GameRng::new(1);
        let mut board = Board::deal(&mut rng);
        let id = ContainerId::new(5);

        let value = board.open(id);
        assert_eq!(value, Some(board.get(id).unwrap().value()));
        assert!(board.get(id).unwrap().is_opened());

        // Second open is refused, flag untouched
        assert_eq!(board.open(id), None);
        assert!(board.get(id).unwrap().is_opened());
    }

    #[test]
    fn test_unopened_queries() {
        let mut rng = GameRng::new(1);
        let mut board = Board::deal(&mut rng);
        let chosen = ContainerId::new(7);

        assert_eq!(board.unopened_values().len(), CONTAINER_COUNT);
        assert_eq!(board.unopened_count_excluding(chosen), CONTAINER_COUNT - 1);

        board.open(ContainerId::new(1)).unwrap();
        board.open(ContainerId::new(2)).unwrap();

        assert_eq!(board.unopened_values().len(), CONTAINER_COUNT - 2);
        assert_eq!(board.unopened_count_excluding(chosen), CONTAINER_COUNT - 3);
    }
}
