//! Player domain model.
//!
//! The variant set is closed: a player is a goalkeeper, a contracted
//! outfield player, or a free agent. Shared field groups live in
//! [`BaseAttributes`] and [`FieldStats`]; the [`Player`] enum dispatches the
//! polymorphic surface (value, rating, status, birthday, record codec).

pub mod base;
pub mod contract;
pub mod contracted;
pub mod field;
pub mod free_agent;
pub mod goalkeeper;

pub use base::{BaseAttributes, Injury};
pub use contract::{is_valid_iso_date, ContractDetails};
pub use contracted::ContractedPlayer;
pub use field::FieldStats;
pub use free_agent::FreeAgent;
pub use goalkeeper::Goalkeeper;

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, ValidationError};
use crate::record;

/// Playing position. The goalkeeper tag exists for wire compatibility but
/// outfield players use the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Position {
    Goalkeeper = 0,
    Defender = 1,
    Midfielder = 2,
    Forward = 3,
}

impl Position {
    pub fn all() -> &'static [Position] {
        &[Position::Goalkeeper, Position::Defender, Position::Midfielder, Position::Forward]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }

    /// Numeric tag used on the wire.
    pub fn index(&self) -> i64 {
        *self as i64
    }

    /// Maps a wire tag back; anything out of range reads as forward.
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => Position::Goalkeeper,
            1 => Position::Defender,
            2 => Position::Midfielder,
            3 => Position::Forward,
            _ => Position::Forward,
        }
    }
}

/// One roster entry. Dispatches the per-variant behavior without exposing
/// which variant the caller holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Player {
    Goalkeeper(Goalkeeper),
    Contracted(ContractedPlayer),
    FreeAgent(FreeAgent),
}

impl Player {
    pub fn base(&self) -> &BaseAttributes {
        match self {
            Player::Goalkeeper(gk) => &gk.base,
            Player::Contracted(p) => &p.base,
            Player::FreeAgent(a) => &a.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut BaseAttributes {
        match self {
            Player::Goalkeeper(gk) => &mut gk.base,
            Player::Contracted(p) => &mut p.base,
            Player::FreeAgent(a) => &mut a.base,
        }
    }

    pub fn id(&self) -> u32 {
        self.base().id
    }

    pub fn set_id(&mut self, id: u32) -> Result<(), ValidationError> {
        self.base_mut().set_id(id)
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn role(&self) -> &'static str {
        match self {
            Player::Goalkeeper(_) => goalkeeper::ROLE,
            Player::Contracted(_) => contracted::ROLE,
            Player::FreeAgent(_) => free_agent::ROLE,
        }
    }

    /// Normalized 0-10 score from variant-specific weighted statistics.
    pub fn performance_rating(&self) -> f64 {
        match self {
            Player::Goalkeeper(gk) => gk.performance_rating(),
            Player::Contracted(p) => p.performance_rating(),
            Player::FreeAgent(a) => a.performance_rating(),
        }
    }

    pub fn calculate_value(&self) -> f64 {
        match self {
            Player::Goalkeeper(gk) => gk.calculate_value(),
            Player::Contracted(p) => p.calculate_value(),
            Player::FreeAgent(a) => a.calculate_value(),
        }
    }

    pub fn status(&self) -> String {
        match self {
            Player::Goalkeeper(gk) => gk.status(),
            Player::Contracted(p) => p.status(),
            Player::FreeAgent(a) => a.status(),
        }
    }

    pub fn celebrate_birthday(&mut self) {
        match self {
            Player::Goalkeeper(gk) => gk.celebrate_birthday(),
            Player::Contracted(p) => p.celebrate_birthday(),
            Player::FreeAgent(a) => a.celebrate_birthday(),
        }
    }

    /// Human-readable info block, one player per call.
    pub fn describe(&self) -> String {
        match self {
            Player::Goalkeeper(gk) => gk.describe(),
            Player::Contracted(p) => p.describe(),
            Player::FreeAgent(a) => a.describe(),
        }
    }

    pub fn serialize_record(&self) -> String {
        match self {
            Player::Goalkeeper(gk) => gk.serialize_record(),
            Player::Contracted(p) => p.serialize_record(),
            Player::FreeAgent(a) => a.serialize_record(),
        }
    }

    /// Picks the variant by the record's `role` tag. A missing or unknown
    /// role is a format error the bulk loader reports and skips.
    pub fn from_record(line: &str) -> Result<Self, RosterError> {
        match record::find_string(line, "role") {
            Some(role) if role == goalkeeper::ROLE => {
                Ok(Player::Goalkeeper(Goalkeeper::from_record(line)))
            }
            Some(role) if role == contracted::ROLE => {
                Ok(Player::Contracted(ContractedPlayer::from_record(line)))
            }
            Some(role) if role == free_agent::ROLE => {
                Ok(Player::FreeAgent(FreeAgent::from_record(line)))
            }
            Some(role) => Err(RosterError::Format(format!("unknown role {:?}", role))),
            None => Err(RosterError::Format(String::from("missing role tag"))),
        }
    }
}

impl From<Goalkeeper> for Player {
    fn from(gk: Goalkeeper) -> Self {
        Player::Goalkeeper(gk)
    }
}

impl From<ContractedPlayer> for Player {
    fn from(p: ContractedPlayer) -> Self {
        Player::Contracted(p)
    }
}

impl From<FreeAgent> for Player {
    fn from(a: FreeAgent) -> Self {
        Player::FreeAgent(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_round_trips_through_index() {
        for &pos in Position::all() {
            assert_eq!(Position::from_index(pos.index()), pos);
        }
        assert_eq!(Position::from_index(99), Position::Forward);
    }

    #[test]
    fn from_record_dispatches_on_role() {
        let gk = Goalkeeper::new("K", 30, "X", "Y", 1.9, 85.0, 0.0).unwrap();
        let line = gk.serialize_record();
        assert!(matches!(Player::from_record(&line), Ok(Player::Goalkeeper(_))));

        let agent = FreeAgent::new(
            "F", 27, "X", "Y", 1.8, 75.0, 0.0, Position::Forward, 0.0, "Club",
        )
        .unwrap();
        let line = agent.serialize_record();
        assert!(matches!(Player::from_record(&line), Ok(Player::FreeAgent(_))));
    }

    #[test]
    fn from_record_rejects_unknown_role() {
        assert!(Player::from_record(r#"{"id":1,"role":"Coach"}"#).is_err());
        assert!(Player::from_record(r#"{"id":1,"name":"X"}"#).is_err());
    }
}
