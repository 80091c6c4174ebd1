//! Free agent variant: an outfield player without a club, subject to
//! salary negotiation and a time-decay on rating and value.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::{BaseAttributes, FieldStats, Position};
use crate::record::{self, RecordWriter};

pub const ROLE: &str = "FreeAgent";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeAgent {
    pub base: BaseAttributes,
    pub stats: FieldStats,
    expected_salary: f64,
    last_club: String,
    months_without_club: u32,
    available_for_negotiation: bool,
}

impl Default for FreeAgent {
    fn default() -> Self {
        Self {
            base: BaseAttributes::default(),
            stats: FieldStats::default(),
            expected_salary: 0.0,
            last_club: String::from("Unknown"),
            months_without_club: 0,
            available_for_negotiation: true,
        }
    }
}

impl FreeAgent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        age: u32,
        nationality: &str,
        origin: &str,
        height: f64,
        weight: f64,
        market_value: f64,
        position: Position,
        expected_salary: f64,
        last_club: &str,
    ) -> Result<Self, ValidationError> {
        if expected_salary < 0.0 {
            return Err(ValidationError::NegativeExpectedSalary(expected_salary));
        }

        Ok(Self {
            base: BaseAttributes::new(name, age, nationality, origin, height, weight, market_value)?,
            stats: FieldStats::new(position),
            expected_salary,
            last_club: last_club.to_string(),
            months_without_club: 0,
            available_for_negotiation: true,
        })
    }

    pub fn expected_salary(&self) -> f64 {
        self.expected_salary
    }

    pub fn last_club(&self) -> &str {
        &self.last_club
    }

    pub fn months_without_club(&self) -> u32 {
        self.months_without_club
    }

    pub fn is_available_for_negotiation(&self) -> bool {
        self.available_for_negotiation
    }

    pub fn set_last_club(&mut self, last_club: &str) {
        self.last_club = last_club.to_string();
    }

    pub fn set_months_without_club(&mut self, months: u32) {
        self.months_without_club = months;
    }

    pub fn set_availability(&mut self, available: bool) {
        self.available_for_negotiation = available;
        log::info!(
            "{} {} negotiations",
            self.base.name,
            if available { "opened" } else { "closed" }
        );
    }

    /// Considers a salary offer. Returns `true` and closes negotiations when
    /// the offer meets the expectation; `false` (state unchanged) when the
    /// agent is unavailable or the offer falls short.
    pub fn negotiate_offer(&mut self, offer: f64) -> bool {
        if !self.available_for_negotiation {
            log::info!("{} is not negotiating at the moment", self.base.name);
            return false;
        }

        if offer >= self.expected_salary {
            self.available_for_negotiation = false;
            log::info!("{} accepted an offer of {:.2}", self.base.name, offer);
            true
        } else {
            log::info!(
                "{} rejected an offer of {:.2} (expects {:.2})",
                self.base.name,
                offer,
                self.expected_salary
            );
            false
        }
    }

    /// Raises the expected salary by a percentage; non-positive is a no-op.
    pub fn increase_expectations(&mut self, percent: f64) {
        if percent <= 0.0 {
            return;
        }
        self.expected_salary *= 1.0 + percent / 100.0;
    }

    /// Lowers the expected salary by a percentage, clamped at zero;
    /// non-positive is a no-op.
    pub fn decrease_expectations(&mut self, percent: f64) {
        if percent <= 0.0 {
            return;
        }
        self.expected_salary *= 1.0 - percent / 100.0;
        if self.expected_salary < 0.0 {
            self.expected_salary = 0.0;
        }
    }

    /// Marks the agent signed with `club`.
    pub fn accept_contract(&mut self, club: &str) {
        self.available_for_negotiation = false;
        self.last_club = club.to_string();
        self.months_without_club = 0;
        log::info!("{} signed with {}", self.base.name, club);
    }

    /// An undervalued signing target: worth well above asking salary and
    /// still young enough.
    pub fn is_bargain(&self) -> bool {
        self.calculate_value() > self.expected_salary * 1.3 && self.base.age <= 30
    }

    pub fn celebrate_birthday(&mut self) {
        let new_age = self.base.age + 1;
        let _ = self.base.set_age(new_age);
        log::info!("happy birthday, {} (now {})", self.base.name, new_age);
        self.increase_expectations(3.0);
    }

    pub fn performance_rating(&self) -> f64 {
        let months = self.months_without_club as f64;
        if self.stats.total_games == 0 {
            // No recorded matches: start from a middling baseline and decay.
            return (5.0 - months * 0.3).max(0.0);
        }

        (self.stats.per_match_score() - months * 0.2).clamp(0.0, 10.0)
    }

    pub fn calculate_value(&self) -> f64 {
        let discount = (1.0 - self.months_without_club as f64 * 0.05).max(0.5);
        self.base.market_value * discount + self.performance_rating() * 40_000.0
    }

    pub fn status(&self) -> String {
        if self.base.injured {
            String::from("injured free agent")
        } else if self.available_for_negotiation {
            String::from("free agent (available)")
        } else {
            String::from("free agent (signed)")
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "=== FREE AGENT ===\n\
             ID: {} | {} | Age: {} | Position: {} | Status: {}\n\
             Last club: {} | Months without club: {}\n\
             Matches: {} | Goals: {} | Assists: {} | Conversion: {:.2}%\n\
             Expected salary: {:.2} | Available for negotiation: {}",
            self.base.id,
            self.base.name,
            self.base.age,
            self.stats.position.name(),
            self.status(),
            self.last_club,
            self.months_without_club,
            self.stats.total_games,
            self.stats.total_goals,
            self.stats.total_assists,
            self.stats.conversion_rate(),
            self.expected_salary,
            if self.available_for_negotiation { "yes" } else { "no" }
        )
    }

    pub fn serialize_record(&self) -> String {
        let mut w = RecordWriter::new();
        self.base.write_fields(&mut w);
        self.stats.write_fields(&mut w);
        w.string("role", ROLE);
        w.money("expectedSalary", self.expected_salary);
        w.string("lastClub", &self.last_club);
        w.int("monthsWithoutClub", self.months_without_club as i64);
        w.bool("available", self.available_for_negotiation);
        w.finish()
    }

    pub fn from_record(data: &str) -> Self {
        let mut agent = Self::default();
        agent.base.read_fields(data);
        agent.stats.read_fields(data);

        agent.expected_salary = record::find_number(data, "expectedSalary").unwrap_or(0.0).max(0.0);
        if let Some(club) = record::find_string(data, "lastClub") {
            if !club.is_empty() {
                agent.last_club = club;
            }
        }
        agent.months_without_club =
            record::find_int(data, "monthsWithoutClub").unwrap_or(0).max(0) as u32;
        agent.available_for_negotiation = record::find_bool(data, "available").unwrap_or(false);
        agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> FreeAgent {
        FreeAgent::new(
            "Ruslan",
            28,
            "Ukraine",
            "Zhytomyr",
            1.81,
            79.0,
            10_000_000.0,
            Position::Midfielder,
            1_000_000.0,
            "Genoa",
        )
        .unwrap()
    }

    #[test]
    fn negotiation_accepts_at_expectation() {
        let mut a = agent();
        assert!(!a.negotiate_offer(900_000.0));
        assert!(a.is_available_for_negotiation());

        assert!(a.negotiate_offer(1_000_000.0));
        assert!(!a.is_available_for_negotiation());
    }

    #[test]
    fn negotiation_fails_when_unavailable() {
        let mut a = agent();
        a.set_availability(false);
        assert!(!a.negotiate_offer(5_000_000.0));
    }

    #[test]
    fn expectation_adjustments_clamp_and_ignore_non_positive() {
        let mut a = agent();
        a.increase_expectations(10.0);
        assert!((a.expected_salary() - 1_100_000.0).abs() < 1e-6);

        a.increase_expectations(0.0);
        a.increase_expectations(-5.0);
        assert!((a.expected_salary() - 1_100_000.0).abs() < 1e-6);

        a.decrease_expectations(200.0);
        assert_eq!(a.expected_salary(), 0.0);
    }

    #[test]
    fn accept_contract_resets_agent_state() {
        let mut a = agent();
        a.set_months_without_club(7);
        a.accept_contract("Dynamo");
        assert!(!a.is_available_for_negotiation());
        assert_eq!(a.last_club(), "Dynamo");
        assert_eq!(a.months_without_club(), 0);
    }

    #[test]
    fn rating_decays_with_idle_months() {
        let mut a = agent();
        assert_eq!(a.performance_rating(), 5.0);

        a.set_months_without_club(10);
        assert!((a.performance_rating() - 2.0).abs() < 1e-9);

        a.set_months_without_club(30);
        assert_eq!(a.performance_rating(), 0.0);
    }

    #[test]
    fn rating_with_games_uses_field_formula_minus_decay() {
        let mut a = agent();
        for _ in 0..10 {
            a.stats.register_match_played();
        }
        a.stats.record_attacking(8, 4, 30).unwrap();
        a.set_months_without_club(5);
        // (5*8 + 3*4)/10 - 5*0.2 = 5.2 - 1.0
        assert!((a.performance_rating() - 4.2).abs() < 1e-9);
    }

    #[test]
    fn value_discount_floors_at_half() {
        let mut a = agent();
        a.set_months_without_club(4);
        let expected = 10_000_000.0 * 0.8 + a.performance_rating() * 40_000.0;
        assert!((a.calculate_value() - expected).abs() < 1e-6);

        a.set_months_without_club(20);
        let floored = 10_000_000.0 * 0.5 + a.performance_rating() * 40_000.0;
        assert!((a.calculate_value() - floored).abs() < 1e-6);
    }

    #[test]
    fn bargain_requires_value_margin_and_youth() {
        let a = agent();
        // value ≈ 10.2M > 1.3M, age 28
        assert!(a.is_bargain());

        let mut old = agent();
        let _ = old.base.set_age(31);
        assert!(!old.is_bargain());
    }

    #[test]
    fn birthday_bumps_expectations() {
        let mut a = agent();
        a.celebrate_birthday();
        assert_eq!(a.base.age, 29);
        assert!((a.expected_salary() - 1_030_000.0).abs() < 1e-6);
    }

    #[test]
    fn record_round_trip() {
        let mut a = agent();
        a.base.set_id(1003).unwrap();
        a.stats.register_match_played();
        a.stats.record_attacking(1, 2, 4).unwrap();
        a.set_months_without_club(3);

        let restored = FreeAgent::from_record(&a.serialize_record());
        assert_eq!(restored, a);
    }
}
