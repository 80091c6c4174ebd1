//! Roster manager: the ordered player collection, the transfer budget, and
//! the club-level serialization protocol.

use crate::error::{RosterError, ValidationError};
use crate::models::{FreeAgent, Player};

/// Ids below this are reserved; fresh ids start at `ID_FLOOR + 1`.
const ID_FLOOR: u32 = 1000;

/// Owns one club's roster and transfer budget. Insertion order is display
/// order; every mutating operation either fully applies or fully rejects.
pub struct RosterManager {
    club_name: String,
    transfer_budget: f64,
    players: Vec<Player>,
}

impl RosterManager {
    pub fn new(club_name: &str, transfer_budget: f64) -> Result<Self, ValidationError> {
        if transfer_budget < 0.0 {
            return Err(ValidationError::NegativeBudget(transfer_budget));
        }

        log::info!("roster manager for {:?} initialized, budget {:.2}", club_name, transfer_budget);
        Ok(Self {
            club_name: club_name.to_string(),
            transfer_budget,
            players: Vec::new(),
        })
    }

    pub fn club_name(&self) -> &str {
        &self.club_name
    }

    pub fn transfer_budget(&self) -> f64 {
        self.transfer_budget
    }

    pub fn set_transfer_budget(&mut self, amount: f64) -> Result<(), ValidationError> {
        if amount < 0.0 {
            return Err(ValidationError::NegativeBudget(amount));
        }
        self.transfer_budget = amount;
        Ok(())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    /// Mutable access by id; absence is a domain error rather than an
    /// `Option` so callers driving single-player operations can use `?`.
    pub fn player_mut(&mut self, id: u32) -> Result<&mut Player, RosterError> {
        self.find_by_id_mut(id).ok_or(RosterError::NotFound(id))
    }

    /// Next fresh id: one past the highest id in use, never below the floor.
    /// Ids are never reused after removal.
    fn next_id(&self) -> u32 {
        self.players.iter().map(Player::id).fold(ID_FLOOR, u32::max) + 1
    }

    /// Adds a player, assigning a fresh id when the player carries none.
    /// An explicit id that is already taken is rejected.
    pub fn add_player(&mut self, mut player: Player) -> Result<u32, RosterError> {
        if player.id() == 0 {
            let id = self.next_id();
            player.set_id(id)?;
        } else if self.find_by_id(player.id()).is_some() {
            return Err(ValidationError::DuplicateId(player.id()).into());
        }

        let id = player.id();
        log::info!("added player {} (id {})", player.name(), id);
        self.players.push(player);
        Ok(id)
    }

    /// Removes every entry with the given id (normally at most one) and
    /// returns how many were removed. Zero is a reported no-op.
    pub fn remove_players(&mut self, id: u32) -> usize {
        let before = self.players.len();
        self.players.retain(|p| p.id() != id);
        let removed = before - self.players.len();

        if removed > 0 {
            log::info!("removed player with id {}", id);
        } else {
            log::info!("no player with id {} in the roster", id);
        }
        removed
    }

    /// Stable descending sort by polymorphic performance rating.
    pub fn sort_by_performance_rating(&mut self) {
        self.players.sort_by(|a, b| {
            b.performance_rating()
                .partial_cmp(&a.performance_rating())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Case-insensitive substring match on the player name. The roster is
    /// not changed; results keep roster order.
    pub fn search_by_name(&self, query: &str) -> Vec<&Player> {
        let query = query.to_lowercase();
        self.players.iter().filter(|p| p.name().to_lowercase().contains(&query)).collect()
    }

    /// Case-insensitive substring match on the polymorphic status string.
    pub fn filter_by_status(&self, query: &str) -> Vec<&Player> {
        let query = query.to_lowercase();
        self.players.iter().filter(|p| p.status().to_lowercase().contains(&query)).collect()
    }

    /// Negotiates with a free agent and, on acceptance, debits the budget
    /// and places the signed agent in the roster. Every rejection path
    /// leaves the budget, the roster and the agent unchanged.
    pub fn sign_free_agent(
        &mut self,
        mut agent: FreeAgent,
        salary_offer: f64,
        contract_until: &str,
    ) -> Result<u32, RosterError> {
        if salary_offer <= 0.0 {
            return Err(ValidationError::InvalidOffer(salary_offer).into());
        }
        if salary_offer > self.transfer_budget {
            return Err(RosterError::InsufficientBudget {
                offer: salary_offer,
                budget: self.transfer_budget,
            });
        }
        if !agent.negotiate_offer(salary_offer) {
            return Err(RosterError::OfferRejected(agent.base.name.clone()));
        }

        agent.accept_contract(&self.club_name);
        self.transfer_budget -= salary_offer;

        let id = agent.base.id;
        let signed = match self.players.iter_mut().find(|p| id != 0 && p.id() == id) {
            // Already rostered: the signed state replaces the old entry.
            Some(slot) => {
                *slot = Player::FreeAgent(agent);
                id
            }
            None => self.add_player(Player::FreeAgent(agent))?,
        };

        log::info!(
            "signed free agent (id {}) until {}, remaining budget {:.2}",
            signed,
            contract_until,
            self.transfer_budget
        );
        Ok(signed)
    }

    /// Club header line plus one record line per player.
    pub fn serialize(&self) -> String {
        let mut out = format!("{},{:.2}\n", self.club_name, self.transfer_budget);
        for player in &self.players {
            out.push_str(&player.serialize_record());
            out.push('\n');
        }
        out
    }

    /// Destructive reload from serialized lines: the in-memory roster is
    /// cleared first, then the header is parsed and each player line is
    /// dispatched by its role tag. Lines that fail to parse are skipped with
    /// a warning; zero loaded players just means an empty roster. Returns
    /// the number of players loaded.
    pub fn load_from_lines<'a, I>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.players.clear();

        let mut lines = lines.into_iter();
        let Some(header) = lines.next() else {
            log::warn!("empty roster data, starting with an empty roster");
            return 0;
        };

        match header.split_once(',') {
            Some((name, budget)) => {
                self.club_name = name.to_string();
                match budget.trim().parse::<f64>() {
                    Ok(b) if b >= 0.0 => self.transfer_budget = b,
                    _ => log::warn!("unreadable budget {:?} in header, keeping {:.2}", budget, self.transfer_budget),
                }
            }
            None => log::warn!("malformed roster header {:?}", header),
        }
        log::info!("loaded club {:?}, budget {:.2}", self.club_name, self.transfer_budget);

        let mut loaded = 0;
        for line in lines {
            if line.is_empty() {
                continue;
            }
            match Player::from_record(line) {
                Ok(mut player) => {
                    if player.id() == 0 {
                        let id = self.next_id();
                        // next_id is always positive.
                        let _ = player.set_id(id);
                    }
                    self.players.push(player);
                    loaded += 1;
                }
                Err(err) => log::warn!("skipping player line: {}", err),
            }
        }
        loaded
    }
}


#[cfg(all(test, feature = "proptest"))]
mod proptests {
    use super::*;
    use crate::models::{Goalkeeper, Position};
    use proptest::prelude::*;

    fn any_keeper(name: String) -> Player {
        Goalkeeper::new(&format!("P{}", name), 25, "X", "Y", 1.9, 85.0, 0.0).unwrap().into()
    }

    proptest! {
        /// Property: assigned ids are unique regardless of insertion count
        #[test]
        fn prop_assigned_ids_unique(count in 1usize..40) {
            let mut r = RosterManager::new("Prop FC", 0.0).unwrap();
            let mut ids = Vec::new();
            for i in 0..count {
                ids.push(r.add_player(any_keeper(i.to_string())).unwrap());
            }
            let mut deduped = ids.clone();
            deduped.sort_unstable();
            deduped.dedup();
            prop_assert_eq!(ids.len(), deduped.len());
        }

        /// Property: the budget never goes negative through signings
        #[test]
        fn prop_budget_never_negative(
            budget in 0.0f64..10_000_000.0,
            offers in proptest::collection::vec(1.0f64..5_000_000.0, 0..10),
        ) {
            let mut r = RosterManager::new("Prop FC", budget).unwrap();
            for offer in offers {
                let agent = crate::models::FreeAgent::new(
                    "A", 25, "X", "Y", 1.8, 75.0, 0.0,
                    Position::Midfielder, offer / 2.0, "Old",
                ).unwrap();
                let _ = r.sign_free_agent(agent, offer, "2027-06-30");
            }
            prop_assert!(r.transfer_budget() >= 0.0);
        }

        /// Property: serialize then load reproduces the roster size and budget
        #[test]
        fn prop_serialize_load_roundtrip(count in 0usize..20, budget in 0.0f64..1e9) {
            let mut source = RosterManager::new("Prop FC", budget).unwrap();
            for i in 0..count {
                source.add_player(any_keeper(i.to_string())).unwrap();
            }

            let data = source.serialize();
            let mut dest = RosterManager::new("Other", 0.0).unwrap();
            prop_assert_eq!(dest.load_from_lines(data.lines()), count);
            prop_assert_eq!(dest.len(), count);
            prop_assert!((dest.transfer_budget() - (budget * 100.0).round() / 100.0).abs() < 0.01);
        }
    }
}
