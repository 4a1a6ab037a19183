//! Seat assignment for committees and the directing board.
//!
//! Both bodies have a fixed list of named seats. Assigning a candidate to a
//! seat clears that candidate from any other seat they occupy in the same
//! body, so no person holds two seats simultaneously. Clearing a seat empties
//! its occupant but keeps the seat in the list, and only non-empty seats are
//! submitted on save (`filled()`).

use std::fmt;

use crate::enums::BoardRole;
use crate::errors::CoreError;

/// Committee seat keys: one Presidente, one Relator, and a bounded set of
/// indexed Membro seats (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitteeSeatKey {
    Presidente,
    Relator,
    Membro(u8),
}

impl CommitteeSeatKey {
    /// Parse the persisted form (`presidente`, `relator`, `membro_3`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "presidente" => Some(Self::Presidente),
            "relator" => Some(Self::Relator),
            _ => s
                .strip_prefix("membro_")
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| *n >= 1)
                .map(Self::Membro),
        }
    }
}

impl fmt::Display for CommitteeSeatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Presidente => f.write_str("presidente"),
            Self::Relator => f.write_str("relator"),
            Self::Membro(n) => write!(f, "membro_{n}"),
        }
    }
}

/// One seat in a body: a key and an optional occupant (councilor ID).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat<K> {
    pub key: K,
    pub occupant: Option<String>,
}

/// Fixed seat list with the assignment invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap<K> {
    seats: Vec<Seat<K>>,
}

impl SeatMap<CommitteeSeatKey> {
    /// Seat map for a committee: Presidente, Relator, and `membro_seats`
    /// indexed Membro slots.
    #[must_use]
    pub fn committee(membro_seats: u8) -> Self {
        let mut keys = vec![CommitteeSeatKey::Presidente, CommitteeSeatKey::Relator];
        keys.extend((1..=membro_seats).map(CommitteeSeatKey::Membro));
        Self::new(keys)
    }
}

impl SeatMap<BoardRole> {
    /// Seat map for the directing board: the six fixed named seats.
    #[must_use]
    pub fn board() -> Self {
        Self::new(BoardRole::ALL)
    }
}

impl<K: Copy + Eq + fmt::Display> SeatMap<K> {
    /// Build a seat map from a fixed key list, all seats empty.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            seats: keys
                .into_iter()
                .map(|key| Seat { key, occupant: None })
                .collect(),
        }
    }

    /// Assign `occupant` to the seat `key`, clearing the same occupant from
    /// any other seat in this body.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownSeat` when `key` is not in the seat list.
    pub fn assign(&mut self, key: K, occupant: impl Into<String>) -> Result<(), CoreError> {
        if !self.seats.iter().any(|seat| seat.key == key) {
            return Err(CoreError::UnknownSeat {
                seat: key.to_string(),
            });
        }

        let occupant = occupant.into();
        for seat in &mut self.seats {
            if seat.key == key {
                seat.occupant = Some(occupant.clone());
            } else if seat.occupant.as_deref() == Some(occupant.as_str()) {
                seat.occupant = None;
            }
        }
        Ok(())
    }

    /// Empty the seat `key`, returning its prior occupant. The seat itself
    /// stays in the list.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownSeat` when `key` is not in the seat list.
    pub fn clear(&mut self, key: K) -> Result<Option<String>, CoreError> {
        self.seats
            .iter_mut()
            .find(|seat| seat.key == key)
            .map(|seat| seat.occupant.take())
            .ok_or(CoreError::UnknownSeat {
                seat: key.to_string(),
            })
    }

    /// Current occupant of a seat, if any.
    #[must_use]
    pub fn occupant(&self, key: K) -> Option<&str> {
        self.seats
            .iter()
            .find(|seat| seat.key == key)
            .and_then(|seat| seat.occupant.as_deref())
    }

    /// All seats, occupied or not, in fixed order.
    #[must_use]
    pub fn seats(&self) -> &[Seat<K>] {
        &self.seats
    }

    /// Only the seats with a non-empty assignment. This is what gets saved.
    pub fn filled(&self) -> impl Iterator<Item = (K, &str)> {
        self.seats
            .iter()
            .filter_map(|seat| seat.occupant.as_deref().map(|o| (seat.key, o)))
    }
}
