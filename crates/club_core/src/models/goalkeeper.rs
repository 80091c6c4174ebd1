//! Goalkeeper variant.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::BaseAttributes;
use crate::record::{self, RecordWriter};

pub const ROLE: &str = "Goalkeeper";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Goalkeeper {
    pub base: BaseAttributes,
    pub matches_played: u32,
    pub clean_sheets: u32,
    pub saves_total: u32,
    pub goals_conceded: u32,
    pub penalties_saved: u32,
}

impl Goalkeeper {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        age: u32,
        nationality: &str,
        origin: &str,
        height: f64,
        weight: f64,
        market_value: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            base: BaseAttributes::new(name, age, nationality, origin, height, weight, market_value)?,
            ..Self::default()
        })
    }

    /// Registers one match: accumulates saves and goals against, and counts
    /// a clean sheet automatically when nothing was conceded.
    pub fn update_match_stats(&mut self, goals_against: i32, saves: i32) -> Result<(), ValidationError> {
        if goals_against < 0 {
            return Err(ValidationError::NegativeStat { stat: "goals against", value: goals_against });
        }
        if saves < 0 {
            return Err(ValidationError::NegativeStat { stat: "saves", value: saves });
        }

        self.matches_played += 1;
        self.goals_conceded += goals_against as u32;
        self.saves_total += saves as u32;
        if goals_against == 0 {
            self.register_clean_sheet();
        }
        Ok(())
    }

    pub fn register_clean_sheet(&mut self) {
        self.clean_sheets += 1;
    }

    pub fn register_penalty_save(&mut self) {
        self.penalties_saved += 1;
    }

    pub fn reset_season_stats(&mut self) {
        self.matches_played = 0;
        self.clean_sheets = 0;
        self.saves_total = 0;
        self.goals_conceded = 0;
        self.penalties_saved = 0;
        log::info!("season stats reset for goalkeeper {}", self.base.name);
    }

    /// Saves over shots faced, as a percentage; 0 before facing any shot.
    pub fn save_percentage(&self) -> f64 {
        let faced = self.saves_total + self.goals_conceded;
        if faced == 0 {
            return 0.0;
        }
        self.saves_total as f64 / faced as f64 * 100.0
    }

    pub fn is_veteran(&self) -> bool {
        self.base.age >= 35
    }

    pub fn performance_rating(&self) -> f64 {
        if self.matches_played == 0 {
            return 0.0;
        }

        let save_factor = self.save_percentage() / 10.0;
        let goals_per_game = self.goals_conceded as f64 / self.matches_played as f64;
        let rating = self.clean_sheets as f64 * 4.0 + self.penalties_saved as f64 * 3.0
            + save_factor
            - goals_per_game * 2.0;
        rating.clamp(0.0, 10.0)
    }

    pub fn calculate_value(&self) -> f64 {
        self.base.market_value
            + self.performance_rating() * 100_000.0
            + self.clean_sheets as f64 * 300_000.0
    }

    pub fn status(&self) -> String {
        if self.base.injured {
            String::from("injured goalkeeper")
        } else {
            String::from("active goalkeeper")
        }
    }

    pub fn celebrate_birthday(&mut self) {
        let new_age = self.base.age + 1;
        // Setter cannot fail here; age only grows.
        let _ = self.base.set_age(new_age);
        log::info!("happy birthday, {} (now {})", self.base.name, new_age);
    }

    pub fn describe(&self) -> String {
        format!(
            "=== GOALKEEPER ===\n\
             ID: {} | {} | Age: {} | Status: {}\n\
             Matches: {} | Clean sheets: {}\n\
             Saves: {} | Conceded: {} | Penalties saved: {}\n\
             Save percentage: {:.2}%",
            self.base.id,
            self.base.name,
            self.base.age,
            self.status(),
            self.matches_played,
            self.clean_sheets,
            self.saves_total,
            self.goals_conceded,
            self.penalties_saved,
            self.save_percentage()
        )
    }

    pub fn serialize_record(&self) -> String {
        let mut w = RecordWriter::new();
        self.base.write_fields(&mut w);
        w.string("role", ROLE);
        w.int("matchesPlayed", self.matches_played as i64);
        w.int("cleanSheets", self.clean_sheets as i64);
        w.int("savesTotal", self.saves_total as i64);
        w.int("goalsConceded", self.goals_conceded as i64);
        w.int("penaltiesSaved", self.penalties_saved as i64);
        w.finish()
    }

    pub fn from_record(data: &str) -> Self {
        let mut gk = Self::default();
        gk.base.read_fields(data);

        let read = |key| record::find_int(data, key).unwrap_or(0).max(0) as u32;
        gk.matches_played = read("matchesPlayed");
        gk.clean_sheets = read("cleanSheets");
        gk.saves_total = read("savesTotal");
        gk.goals_conceded = read("goalsConceded");
        gk.penalties_saved = read("penaltiesSaved");
        gk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keeper() -> Goalkeeper {
        Goalkeeper::new("Heorhii Bushchan", 30, "Ukraine", "Kyiv", 1.96, 85.0, 7_000_000.0)
            .unwrap()
    }

    #[test]
    fn clean_sheet_auto_registered() {
        let mut gk = keeper();
        gk.update_match_stats(0, 5).unwrap();
        gk.update_match_stats(2, 3).unwrap();

        assert_eq!(gk.matches_played, 2);
        assert_eq!(gk.clean_sheets, 1);
        assert_eq!(gk.saves_total, 8);
        assert_eq!(gk.goals_conceded, 2);
    }

    #[test]
    fn negative_match_stats_rejected() {
        let mut gk = keeper();
        assert!(gk.update_match_stats(-1, 3).is_err());
        assert!(gk.update_match_stats(1, -3).is_err());
        assert_eq!(gk.matches_played, 0);
    }

    #[test]
    fn save_percentage_zero_without_shots_faced() {
        let gk = keeper();
        assert_eq!(gk.save_percentage(), 0.0);
    }

    #[test]
    fn rating_zero_without_matches() {
        let gk = keeper();
        assert_eq!(gk.performance_rating(), 0.0);
    }

    #[test]
    fn rating_clamped_to_ten() {
        let mut gk = keeper();
        for _ in 0..5 {
            gk.update_match_stats(0, 6).unwrap();
        }
        gk.register_penalty_save();
        assert_eq!(gk.performance_rating(), 10.0);
    }

    #[test]
    fn value_includes_clean_sheet_bonus() {
        let mut gk = keeper();
        gk.update_match_stats(0, 4).unwrap();
        let expected =
            gk.base.market_value + gk.performance_rating() * 100_000.0 + 300_000.0;
        assert!((gk.calculate_value() - expected).abs() < 1e-6);
    }

    #[test]
    fn status_reflects_injury() {
        let mut gk = keeper();
        assert_eq!(gk.status(), "active goalkeeper");
        gk.base.report_injury("shoulder", 30).unwrap();
        assert_eq!(gk.status(), "injured goalkeeper");
    }

    #[test]
    fn record_round_trip() {
        let mut gk = keeper();
        gk.base.set_id(1001).unwrap();
        gk.update_match_stats(0, 7).unwrap();
        gk.update_match_stats(1, 2).unwrap();
        gk.register_penalty_save();

        let restored = Goalkeeper::from_record(&gk.serialize_record());
        assert_eq!(restored, gk);
    }
}
