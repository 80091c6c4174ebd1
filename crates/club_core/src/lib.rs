//! # club_core - Football Club Roster Management
//!
//! Domain library for managing a football club's roster: goalkeepers,
//! contracted outfield players and free agents, each with its own rating
//! and market-value model, plus a transfer budget and a line-oriented
//! text persistence format.
//!
//! ## Features
//! - Validated player records with injury tracking
//! - Contract lifecycle: extensions, loans, transfers, termination
//! - Free-agent negotiation with budget enforcement
//! - Atomic roster persistence (temp file + rename)

pub mod error;
pub mod models;
pub mod record;
pub mod roster;
pub mod store;

pub use error::{RosterError, ValidationError};
pub use models::{
    BaseAttributes, ContractDetails, ContractedPlayer, FieldStats, FreeAgent, Goalkeeper, Injury,
    Player, Position,
};
pub use roster::RosterManager;
pub use store::RosterStore;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_builds_a_working_roster() {
        let mut roster = RosterManager::new("Dynamo Kyiv", 10_000_000.0).unwrap();

        let keeper =
            Goalkeeper::new("Heorhii Bushchan", 30, "Ukraine", "Kyiv", 1.96, 85.0, 7_000_000.0)
                .unwrap();
        let id = roster.add_player(keeper.into()).unwrap();

        assert!(id > 1000);
        assert_eq!(roster.players()[0].role(), "Goalkeeper");
    }
}
