//! Match statistics shared by contracted players and free agents.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::Position;
use crate::record::{self, RecordWriter};

/// Running outfield totals. All accumulators are strictly additive; updates
/// never replace a total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    pub total_games: u32,
    pub total_goals: u32,
    pub total_assists: u32,
    pub total_shots: u32,
    pub total_tackles: u32,
    pub key_passes: u32,
    pub position: Position,
}

impl Default for FieldStats {
    fn default() -> Self {
        Self::new(Position::Forward)
    }
}

impl FieldStats {
    pub fn new(position: Position) -> Self {
        Self {
            total_games: 0,
            total_goals: 0,
            total_assists: 0,
            total_shots: 0,
            total_tackles: 0,
            key_passes: 0,
            position,
        }
    }

    pub fn record_attacking(
        &mut self,
        goals: i32,
        assists: i32,
        shots: i32,
    ) -> Result<(), ValidationError> {
        if goals < 0 {
            return Err(ValidationError::NegativeStat { stat: "goals", value: goals });
        }
        if assists < 0 {
            return Err(ValidationError::NegativeStat { stat: "assists", value: assists });
        }
        if shots < 0 {
            return Err(ValidationError::NegativeStat { stat: "shots", value: shots });
        }

        self.total_goals += goals as u32;
        self.total_assists += assists as u32;
        self.total_shots += shots as u32;
        Ok(())
    }

    pub fn record_defensive(&mut self, tackles: i32) -> Result<(), ValidationError> {
        if tackles < 0 {
            return Err(ValidationError::NegativeStat { stat: "tackles", value: tackles });
        }
        self.total_tackles += tackles as u32;
        Ok(())
    }

    pub fn register_match_played(&mut self) {
        self.total_games += 1;
    }

    pub fn register_key_pass(&mut self) {
        self.key_passes += 1;
    }

    pub fn reset_season(&mut self) {
        self.total_games = 0;
        self.total_goals = 0;
        self.total_assists = 0;
        self.total_shots = 0;
        self.total_tackles = 0;
        self.key_passes = 0;
    }

    /// Shot conversion as a percentage; 0 with no shots taken.
    pub fn conversion_rate(&self) -> f64 {
        if self.total_shots == 0 {
            return 0.0;
        }
        self.total_goals as f64 / self.total_shots as f64 * 100.0
    }

    /// Weighted per-match score used by both outfield variants:
    /// 5×goals + 3×assists + 1×key passes + 1.5×tackles, per game.
    pub fn per_match_score(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        (5.0 * self.total_goals as f64
            + 3.0 * self.total_assists as f64
            + 1.0 * self.key_passes as f64
            + 1.5 * self.total_tackles as f64)
            / self.total_games as f64
    }

    pub fn write_fields(&self, w: &mut RecordWriter) {
        w.int("position", self.position.index());
        w.int("totalGames", self.total_games as i64);
        w.int("totalGoals", self.total_goals as i64);
        w.int("totalAssists", self.total_assists as i64);
        w.int("totalShots", self.total_shots as i64);
        w.int("totalTackles", self.total_tackles as i64);
        w.int("keyPasses", self.key_passes as i64);
    }

    pub fn read_fields(&mut self, data: &str) {
        if let Some(p) = record::find_int(data, "position") {
            self.position = Position::from_index(p);
        }
        let read = |key| record::find_int(data, key).unwrap_or(0).max(0) as u32;
        self.total_games = read("totalGames");
        self.total_goals = read("totalGoals");
        self.total_assists = read("totalAssists");
        self.total_shots = read("totalShots");
        self.total_tackles = read("totalTackles");
        self.key_passes = read("keyPasses");
    }
}
