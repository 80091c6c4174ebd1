//! Contracted player variant: outfield stats plus a club contract and the
//! transfer-listing state machine.

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, ValidationError};
use crate::models::{BaseAttributes, ContractDetails, FieldStats, Position};
use crate::record::{self, RecordWriter};

pub const ROLE: &str = "ContractedPlayer";

/// Club marker left behind by `terminate_contract`. The player stays a
/// contracted player with a dangling contract; nothing converts it to a
/// free agent.
pub const NO_CLUB: &str = "No club (contract terminated)";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContractedPlayer {
    pub base: BaseAttributes,
    pub stats: FieldStats,
    pub contract: ContractDetails,
    listed_for_transfer: bool,
    transfer_fee: f64,
    transfer_conditions: String,
    previous_club: String,
}

impl ContractedPlayer {
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
        salary: f64,
        contract_until: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            base: BaseAttributes::new(name, age, nationality, origin, height, weight, market_value)?,
            stats: FieldStats::new(position),
            // The signing club is filled in afterwards.
            contract: ContractDetails::new("Unknown", salary, contract_until)?,
            listed_for_transfer: false,
            transfer_fee: 0.0,
            transfer_conditions: String::new(),
            previous_club: String::new(),
        })
    }

    pub fn is_listed_for_transfer(&self) -> bool {
        self.listed_for_transfer
    }

    pub fn transfer_fee(&self) -> f64 {
        self.transfer_fee
    }

    pub fn transfer_conditions(&self) -> &str {
        &self.transfer_conditions
    }

    pub fn previous_club(&self) -> &str {
        &self.previous_club
    }

    /// Puts the player on the transfer list at a minimum fee.
    pub fn list_for_transfer(&mut self, fee: f64, conditions: &str) -> Result<(), ValidationError> {
        if fee <= 0.0 {
            return Err(ValidationError::InvalidTransferFee(fee));
        }

        self.listed_for_transfer = true;
        self.transfer_fee = fee;
        self.transfer_conditions = conditions.to_string();
        log::info!("{} listed for transfer, asking {:.2}", self.base.name, fee);
        Ok(())
    }

    /// Safe no-op when the player is not listed.
    pub fn remove_from_transfer_list(&mut self) {
        self.listed_for_transfer = false;
        self.transfer_fee = 0.0;
        self.transfer_conditions.clear();
    }

    /// Completes a transfer. Rejected (state untouched) unless the player is
    /// listed and the offered fee meets the asking fee.
    pub fn transfer_to_club(&mut self, new_club: &str, fee: f64) -> Result<(), RosterError> {
        if !self.listed_for_transfer {
            return Err(RosterError::NotListedForTransfer);
        }
        if fee < self.transfer_fee {
            return Err(RosterError::TransferFeeTooLow { offered: fee, asking: self.transfer_fee });
        }

        self.previous_club = self.contract.club_name().to_string();
        self.contract.set_club_name(new_club)?;
        self.listed_for_transfer = false;
        log::info!("{} transferred to {} for {:.2}", self.base.name, new_club, fee);
        Ok(())
    }

    /// Extends the contract and moves the salary to `new_salary` through the
    /// contract's percentage path. A zero current salary has no base for a
    /// percentage step, so the adjustment is rejected.
    pub fn extend_contract(&mut self, new_date: &str, new_salary: f64) -> Result<(), ValidationError> {
        if new_salary <= 0.0 {
            return Err(ValidationError::NonPositiveSalary(new_salary));
        }

        let old_salary = self.contract.salary();
        self.contract.extend_date(new_date)?;

        let percent = if old_salary > 0.0 {
            (new_salary - old_salary) / old_salary * 100.0
        } else {
            100.0
        };
        self.contract.adjust_salary(percent)?;
        Ok(())
    }

    pub fn send_on_loan(&mut self, other_club: &str, end_date: &str) -> Result<(), ValidationError> {
        self.contract.set_on_loan(end_date)?;
        log::info!("{} sent on loan to {} until {}", self.base.name, other_club, end_date);
        Ok(())
    }

    pub fn return_from_loan(&mut self) {
        self.contract.return_from_loan();
    }

    /// Resets the contract's club to the no-club marker. The player keeps
    /// its variant and its (now dangling) contract.
    pub fn terminate_contract(&mut self, reason: &str) {
        // NO_CLUB is non-empty, so the setter cannot fail.
        let _ = self.contract.set_club_name(NO_CLUB);
        log::warn!("contract of {} terminated: {}", self.base.name, reason);
    }

    pub fn celebrate_birthday(&mut self) {
        let new_age = self.base.age + 1;
        let _ = self.base.set_age(new_age);
        log::info!("happy birthday, {} (now {})", self.base.name, new_age);

        // Mild age-related decline past 30.
        if new_age > 30 {
            self.base.update_market_value(-3.0);
        }
    }

    pub fn performance_rating(&self) -> f64 {
        self.stats.per_match_score().min(10.0)
    }

    pub fn calculate_value(&self) -> f64 {
        self.base.market_value
            + self.performance_rating() * 50_000.0
            + self.contract.salary() / 10_000.0
    }

    pub fn status(&self) -> String {
        if self.base.injured {
            String::from("injured player")
        } else if self.contract.is_on_loan() {
            String::from("on loan")
        } else {
            String::from("active player")
        }
    }

    pub fn describe(&self) -> String {
        let mut out = format!(
            "=== CONTRACTED PLAYER ===\n\
             ID: {} | {} | Age: {} | Position: {} | Status: {}\n\
             Matches: {} | Goals: {} | Assists: {} | Key passes: {}\n\
             Shots: {} | Tackles: {} | Conversion: {:.2}%\n\
             {}",
            self.base.id,
            self.base.name,
            self.base.age,
            self.stats.position.name(),
            self.status(),
            self.stats.total_games,
            self.stats.total_goals,
            self.stats.total_assists,
            self.stats.key_passes,
            self.stats.total_shots,
            self.stats.total_tackles,
            self.stats.conversion_rate(),
            self.contract.summary()
        );

        if self.listed_for_transfer {
            out.push_str(&format!("\nTransfer listed, asking {:.2}", self.transfer_fee));
            if !self.transfer_conditions.is_empty() {
                out.push_str(&format!(" ({})", self.transfer_conditions));
            }
        } else {
            out.push_str("\nNot listed for transfer");
        }
        out
    }

    pub fn serialize_record(&self) -> String {
        let mut w = RecordWriter::new();
        self.base.write_fields(&mut w);
        w.string("role", ROLE);
        self.stats.write_fields(&mut w);
        w.string("clubName", self.contract.club_name());
        w.string("previousClub", &self.previous_club);
        w.money("salary", self.contract.salary());
        w.string("contractUntil", self.contract.contract_until());
        w.bool("loaned", self.contract.is_on_loan());
        if self.contract.is_on_loan() {
            w.string("loanEndDate", self.contract.loan_end_date());
        }
        w.bool("listedForTransfer", self.listed_for_transfer);
        w.money("transferFee", self.transfer_fee);
        w.string("transferConditions", &self.transfer_conditions);
        w.finish()
    }

    pub fn from_record(data: &str) -> Self {
        let mut p = Self::default();
        p.base.read_fields(data);
        p.stats.read_fields(data);

        if let Some(club) = record::find_string(data, "clubName") {
            if !club.is_empty() {
                let _ = p.contract.set_club_name(&club);
            }
        }
        if let Some(salary) = record::find_number(data, "salary") {
            if salary >= 0.0 {
                let _ = p.contract.set_salary(salary);
            }
        }
        if let Some(until) = record::find_string(data, "contractUntil") {
            let _ = p.contract.set_contract_until(&until);
        }
        if record::find_bool(data, "loaned").unwrap_or(false) {
            match record::find_string(data, "loanEndDate") {
                Some(end) if p.contract.set_on_loan(&end).is_ok() => {}
                _ => log::warn!("record for {} has loan flag without a usable end date", p.base.name),
            }
        }

        p.listed_for_transfer = record::find_bool(data, "listedForTransfer").unwrap_or(false);
        p.transfer_fee = record::find_number(data, "transferFee").unwrap_or(0.0);
        if let Some(cond) = record::find_string(data, "transferConditions") {
            p.transfer_conditions = cond;
        }
        if let Some(prev) = record::find_string(data, "previousClub") {
            p.previous_club = prev;
        }
        p
    }
}
