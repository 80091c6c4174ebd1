//! Attributes shared by every player variant.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::record::{self, RecordWriter};

/// One entry in a player's append-only injury log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Injury {
    pub kind: String,
    /// ISO date the injury was recorded.
    pub date_occurred: String,
    pub recovery_days: u32,
}

/// Identity and physical data common to every variant. Invariants: age,
/// height and weight are positive; market value never goes negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAttributes {
    /// Unique roster id; 0 means "not yet assigned".
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub nationality: String,
    pub origin: String,
    /// Height in meters.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub market_value: f64,
    pub injured: bool,
    pub injury_history: Vec<Injury>,
}

impl Default for BaseAttributes {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::from("Unknown"),
            age: 0,
            nationality: String::from("Unknown"),
            origin: String::from("Unknown"),
            height: 0.0,
            weight: 0.0,
            market_value: 0.0,
            injured: false,
            injury_history: Vec::new(),
        }
    }
}

impl BaseAttributes {
    pub fn new(
        name: &str,
        age: u32,
        nationality: &str,
        origin: &str,
        height: f64,
        weight: f64,
        market_value: f64,
    ) -> Result<Self, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if nationality.is_empty() {
            return Err(ValidationError::EmptyNationality);
        }
        if age == 0 {
            return Err(ValidationError::InvalidAge(age));
        }
        if height <= 0.0 {
            return Err(ValidationError::InvalidHeight(height));
        }
        if weight <= 0.0 {
            return Err(ValidationError::InvalidWeight(weight));
        }
        if market_value < 0.0 {
            return Err(ValidationError::NegativeMarketValue(market_value));
        }

        Ok(Self {
            id: 0,
            name: name.to_string(),
            age,
            nationality: nationality.to_string(),
            // Empty origin is the one input corrected instead of rejected.
            origin: if origin.is_empty() { String::from("Unknown") } else { origin.to_string() },
            height,
            weight,
            market_value,
            injured: false,
            injury_history: Vec::new(),
        })
    }

    pub fn set_id(&mut self, id: u32) -> Result<(), ValidationError> {
        if id == 0 {
            return Err(ValidationError::InvalidId);
        }
        self.id = id;
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        self.name = name.to_string();
        Ok(())
    }

    pub fn set_age(&mut self, age: u32) -> Result<(), ValidationError> {
        if age == 0 {
            return Err(ValidationError::InvalidAge(age));
        }
        self.age = age;
        Ok(())
    }

    pub fn set_nationality(&mut self, nationality: &str) -> Result<(), ValidationError> {
        if nationality.is_empty() {
            return Err(ValidationError::EmptyNationality);
        }
        self.nationality = nationality.to_string();
        Ok(())
    }

    pub fn set_origin(&mut self, origin: &str) {
        self.origin =
            if origin.is_empty() { String::from("Unknown") } else { origin.to_string() };
    }

    pub fn set_height(&mut self, height: f64) -> Result<(), ValidationError> {
        if height <= 0.0 {
            return Err(ValidationError::InvalidHeight(height));
        }
        self.height = height;
        Ok(())
    }

    pub fn set_weight(&mut self, weight: f64) -> Result<(), ValidationError> {
        if weight <= 0.0 {
            return Err(ValidationError::InvalidWeight(weight));
        }
        self.weight = weight;
        Ok(())
    }

    pub fn set_market_value(&mut self, value: f64) -> Result<(), ValidationError> {
        if value < 0.0 {
            return Err(ValidationError::NegativeMarketValue(value));
        }
        self.market_value = value;
        Ok(())
    }

    /// Appends to the injury log and marks the player injured.
    pub fn report_injury(&mut self, kind: &str, recovery_days: u32) -> Result<(), ValidationError> {
        if kind.is_empty() {
            return Err(ValidationError::EmptyInjuryKind);
        }
        if recovery_days == 0 {
            return Err(ValidationError::InvalidRecoveryDays);
        }

        self.injured = true;
        self.injury_history.push(Injury {
            kind: kind.to_string(),
            date_occurred: Local::now().format("%Y-%m-%d").to_string(),
            recovery_days,
        });

        log::info!(
            "{} injured: {} (estimated recovery {} days)",
            self.name,
            kind,
            recovery_days
        );
        Ok(())
    }

    pub fn return_to_fitness(&mut self) {
        self.injured = false;
        log::info!("{} has recovered from injury", self.name);
    }

    /// Applies a percentage delta to the market value, clamped at zero.
    pub fn update_market_value(&mut self, percent: f64) {
        let factor = 1.0 + percent / 100.0;
        self.market_value *= factor;
        if self.market_value < 0.0 {
            self.market_value = 0.0;
        }
    }

    /// Writes the common-field fragment of the record format. Every variant
    /// codec calls this exactly once, before its own fields.
    pub fn write_fields(&self, w: &mut RecordWriter) {
        w.int("id", self.id as i64);
        w.string("name", &self.name);
        w.int("age", self.age as i64);
        w.string("nationality", &self.nationality);
        w.string("origin", &self.origin);
        w.number("height", self.height);
        w.number("weight", self.weight);
        w.number("marketValue", self.market_value);
        w.bool("injured", self.injured);
    }

    /// Reads the common fields back from a record line; missing keys keep
    /// their defaults.
    pub fn read_fields(&mut self, data: &str) {
        if let Some(id) = record::find_int(data, "id") {
            self.id = id.max(0) as u32;
        }
        if let Some(name) = record::find_string(data, "name") {
            self.name = name;
        }
        if let Some(age) = record::find_int(data, "age") {
            self.age = age.max(0) as u32;
        }
        if let Some(nat) = record::find_string(data, "nationality") {
            self.nationality = nat;
        }
        if let Some(origin) = record::find_string(data, "origin") {
            self.origin = origin;
        }
        if let Some(h) = record::find_number(data, "height") {
            self.height = h;
        }
        if let Some(wt) = record::find_number(data, "weight") {
            self.weight = wt;
        }
        if let Some(mv) = record::find_number(data, "marketValue") {
            self.market_value = mv.max(0.0);
        }
        if let Some(injured) = record::find_bool(data, "injured") {
            self.injured = injured;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseAttributes {
        BaseAttributes::new("Test Player", 25, "Ukraine", "Kyiv", 1.85, 78.0, 1_000_000.0)
            .unwrap()
    }

    #[test]
    fn constructor_rejects_invalid_fields() {
        assert_eq!(
            BaseAttributes::new("", 25, "X", "Y", 1.8, 75.0, 0.0),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            BaseAttributes::new("A", 0, "X", "Y", 1.8, 75.0, 0.0),
            Err(ValidationError::InvalidAge(0))
        );
        assert_eq!(
            BaseAttributes::new("A", 25, "X", "Y", 0.0, 75.0, 0.0),
            Err(ValidationError::InvalidHeight(0.0))
        );
        assert_eq!(
            BaseAttributes::new("A", 25, "X", "Y", 1.8, -1.0, 0.0),
            Err(ValidationError::InvalidWeight(-1.0))
        );
        assert_eq!(
            BaseAttributes::new("A", 25, "X", "Y", 1.8, 75.0, -5.0),
            Err(ValidationError::NegativeMarketValue(-5.0))
        );
    }

    #[test]
    fn empty_origin_defaults_to_unknown() {
        let b = BaseAttributes::new("A", 25, "X", "", 1.8, 75.0, 0.0).unwrap();
        assert_eq!(b.origin, "Unknown");
    }

    #[test]
    fn failed_setter_leaves_value_unchanged() {
        let mut b = base();
        assert!(b.set_age(0).is_err());
        assert_eq!(b.age, 25);
        assert!(b.set_market_value(-1.0).is_err());
        assert_eq!(b.market_value, 1_000_000.0);
    }

    #[test]
    fn report_injury_appends_and_flags() {
        let mut b = base();
        b.report_injury("hamstring strain", 21).unwrap();
        assert!(b.injured);
        assert_eq!(b.injury_history.len(), 1);
        assert_eq!(b.injury_history[0].kind, "hamstring strain");

        b.report_injury("ankle sprain", 10).unwrap();
        assert_eq!(b.injury_history.len(), 2);

        b.return_to_fitness();
        assert!(!b.injured);
        // Recovery does not erase the log.
        assert_eq!(b.injury_history.len(), 2);
    }

    #[test]
    fn report_injury_rejects_bad_input() {
        let mut b = base();
        assert_eq!(b.report_injury("", 10), Err(ValidationError::EmptyInjuryKind));
        assert_eq!(b.report_injury("knock", 0), Err(ValidationError::InvalidRecoveryDays));
        assert!(!b.injured);
    }

    #[test]
    fn market_value_clamps_at_zero() {
        let mut b = base();
        b.update_market_value(-150.0);
        assert_eq!(b.market_value, 0.0);
    }

    #[test]
    fn market_value_percentage_delta() {
        let mut b = base();
        b.update_market_value(10.0);
        assert!((b.market_value - 1_100_000.0).abs() < 1e-6);
    }

    #[test]
    fn base_fields_round_trip() {
        let mut b = base();
        b.set_id(1001).unwrap();
        b.injured = true;

        let mut w = RecordWriter::new();
        b.write_fields(&mut w);
        let line = w.finish();

        let mut restored = BaseAttributes::default();
        restored.read_fields(&line);
        assert_eq!(restored.id, 1001);
        assert_eq!(restored.name, "Test Player");
        assert_eq!(restored.age, 25);
        assert_eq!(restored.nationality, "Ukraine");
        assert_eq!(restored.origin, "Kyiv");
        assert_eq!(restored.height, 1.85);
        assert_eq!(restored.weight, 78.0);
        assert_eq!(restored.market_value, 1_000_000.0);
        assert!(restored.injured);
    }
}

#[cfg(all(test, feature = "proptest"))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: percentage updates never drive the market value negative
        #[test]
        fn prop_market_value_never_negative(
            start in 0.0f64..1e8,
            deltas in proptest::collection::vec(-500.0f64..500.0, 0..20),
        ) {
            let mut b = BaseAttributes::new("P", 25, "X", "Y", 1.8, 75.0, start).unwrap();
            for delta in deltas {
                b.update_market_value(delta);
                prop_assert!(b.market_value >= 0.0);
            }
        }

        /// Property: written common fields always read back equal
        #[test]
        fn prop_common_fields_roundtrip(
            age in 1u32..60,
            height in 1.4f64..2.2,
            value in 0.0f64..1e8,
        ) {
            let b = BaseAttributes::new("Round Trip", age, "X", "Y", height, 80.0, value).unwrap();

            let mut w = RecordWriter::new();
            b.write_fields(&mut w);
            let line = w.finish();

            let mut restored = BaseAttributes::default();
            restored.read_fields(&line);
            prop_assert_eq!(restored.age, age);
            prop_assert!((restored.height - height).abs() < 1e-9);
            prop_assert!((restored.market_value - value).abs() < 1e-9);
        }
    }
}
