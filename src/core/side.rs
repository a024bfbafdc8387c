//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two seats at the table: the human player and the automated
//! opponent. Both are dealt from the same deck composition.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for anything that exists
//! once per side (boards, deals).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a mock match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The user driving the simulator.
    Human,
    /// The automated opponent. It only draws; it never acts.
    Opponent,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Side; 2] = [Side::Human, Side::Opponent];

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }

    /// Whether this is the human seat.
    #[must_use]
    pub const fn is_human(self) -> bool {
        matches!(self, Side::Human)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use deck_simulator::core::{Side, SideMap};
///
/// let mut drawn: SideMap<u32> = SideMap::with_value(0);
/// drawn[Side::Opponent] += 1;
///
/// assert_eq!(drawn[Side::Human], 0);
/// assert_eq!(drawn[Side::Opponent], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    human: T,
    opponent: T,
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    ///
    /// The factory is called for the human side first.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        let human = factory(Side::Human);
        let opponent = factory(Side::Opponent);
        Self { human, opponent }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            human: value.clone(),
            opponent: value,
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Human => &self.human,
            Side::Opponent => &self.opponent,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Human => &mut self.human,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Transform both entries, consuming the map.
    pub fn map<U>(self, mut f: impl FnMut(Side, T) -> U) -> SideMap<U> {
        SideMap {
            human: f(Side::Human, self.human),
            opponent: f(Side::Opponent, self.opponent),
        }
    }

    /// Iterate over (Side, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Human, &self.human), (Side::Opponent, &self.opponent)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
