//! Contract value object embedded in a contracted player.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Calendar-date shape check: `YYYY-MM-DD`, year 1900-2100, month 1-12,
/// day 1-31. No day-of-month or leap-year cross-check; stored files carry
/// dates that only ever passed this shape check.
pub fn is_valid_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    for &i in &[0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[i].is_ascii_digit() {
            return false;
        }
    }

    let year: i32 = s[0..4].parse().unwrap_or(0);
    let month: u32 = s[5..7].parse().unwrap_or(0);
    let day: u32 = s[8..10].parse().unwrap_or(0);
    (1900..=2100).contains(&year) && (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// Club, salary and expiry for one player. Owned exclusively by its
/// `ContractedPlayer`; loan state layers on top of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDetails {
    club_name: String,
    salary: f64,
    contract_until: String,
    is_loaned: bool,
    loan_end_date: String,
}

impl Default for ContractDetails {
    fn default() -> Self {
        Self {
            club_name: String::from("Unknown"),
            salary: 0.0,
            contract_until: String::from("Unknown"),
            is_loaned: false,
            loan_end_date: String::new(),
        }
    }
}

impl ContractDetails {
    pub fn new(club_name: &str, salary: f64, contract_until: &str) -> Result<Self, ValidationError> {
        if club_name.is_empty() {
            return Err(ValidationError::EmptyClubName);
        }
        if salary < 0.0 {
            return Err(ValidationError::NegativeSalary(salary));
        }
        if !is_valid_iso_date(contract_until) {
            return Err(ValidationError::InvalidDate(contract_until.to_string()));
        }

        Ok(Self {
            club_name: club_name.to_string(),
            salary,
            contract_until: contract_until.to_string(),
            is_loaned: false,
            loan_end_date: String::new(),
        })
    }

    pub fn club_name(&self) -> &str {
        &self.club_name
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn contract_until(&self) -> &str {
        &self.contract_until
    }

    pub fn is_on_loan(&self) -> bool {
        self.is_loaned
    }

    pub fn loan_end_date(&self) -> &str {
        &self.loan_end_date
    }

    pub fn is_contract_valid(&self) -> bool {
        is_valid_iso_date(&self.contract_until)
    }

    /// True when the contract ends within the next six calendar months,
    /// counting the current month.
    pub fn is_expiring_soon(&self) -> bool {
        if !self.is_contract_valid() {
            return false;
        }

        let now = Local::now();
        let year: i32 = self.contract_until[0..4].parse().unwrap_or(0);
        let month: i32 = self.contract_until[5..7].parse().unwrap_or(0);

        let diff_months = (year - now.year()) * 12 + (month - now.month() as i32);
        (0..=6).contains(&diff_months)
    }

    pub fn set_club_name(&mut self, club_name: &str) -> Result<(), ValidationError> {
        if club_name.is_empty() {
            return Err(ValidationError::EmptyClubName);
        }
        self.club_name = club_name.to_string();
        Ok(())
    }

    pub fn set_salary(&mut self, salary: f64) -> Result<(), ValidationError> {
        if salary < 0.0 {
            return Err(ValidationError::NegativeSalary(salary));
        }
        self.salary = salary;
        Ok(())
    }

    pub fn set_contract_until(&mut self, contract_until: &str) -> Result<(), ValidationError> {
        if !is_valid_iso_date(contract_until) {
            return Err(ValidationError::InvalidDate(contract_until.to_string()));
        }
        self.contract_until = contract_until.to_string();
        Ok(())
    }

    pub fn set_on_loan(&mut self, loan_end_date: &str) -> Result<(), ValidationError> {
        if !is_valid_iso_date(loan_end_date) {
            return Err(ValidationError::InvalidDate(loan_end_date.to_string()));
        }
        self.is_loaned = true;
        self.loan_end_date = loan_end_date.to_string();
        log::info!("player loaned out until {}", self.loan_end_date);
        Ok(())
    }

    /// Clears the loan state; safe to call when not on loan.
    pub fn return_from_loan(&mut self) {
        self.is_loaned = false;
        self.loan_end_date.clear();
    }

    /// Percentage salary change. Requires a positive current salary, so the
    /// delta has a base to apply to.
    pub fn adjust_salary(&mut self, percent: f64) -> Result<(), ValidationError> {
        if self.salary <= 0.0 {
            return Err(ValidationError::SalaryNotAdjustable);
        }
        self.salary *= 1.0 + percent / 100.0;
        log::info!("salary adjusted by {}%, now {:.2}", percent, self.salary);
        Ok(())
    }

    pub fn extend_date(&mut self, new_date: &str) -> Result<(), ValidationError> {
        if !is_valid_iso_date(new_date) {
            return Err(ValidationError::InvalidDate(new_date.to_string()));
        }
        self.contract_until = new_date.to_string();
        log::info!("contract extended until {}", new_date);
        Ok(())
    }

    pub fn summary(&self) -> String {
        let mut out = format!(
            "Club: {} | Salary: {:.2} | Contract until: {}",
            self.club_name, self.salary, self.contract_until
        );
        if self.is_loaned {
            out.push_str(&format!(" (on loan until {})", self.loan_end_date));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;

    #[test]
    fn iso_date_shape_check() {
        assert!(is_valid_iso_date("2026-06-30"));
        assert!(is_valid_iso_date("1900-01-01"));
        assert!(is_valid_iso_date("2100-12-31"));
        // Shape check only; no day-of-month cross-check.
        assert!(is_valid_iso_date("2025-02-31"));

        assert!(!is_valid_iso_date("2026/06/30"));
        assert!(!is_valid_iso_date("26-06-30"));
        assert!(!is_valid_iso_date("1899-06-30"));
        assert!(!is_valid_iso_date("2101-01-01"));
        assert!(!is_valid_iso_date("2026-13-01"));
        assert!(!is_valid_iso_date("2026-00-10"));
        assert!(!is_valid_iso_date("2026-06-32"));
        assert!(!is_valid_iso_date(""));
    }

    #[test]
    fn constructor_validates() {
        assert!(ContractDetails::new("Dynamo", 1000.0, "2027-06-30").is_ok());
        assert_eq!(
            ContractDetails::new("", 1000.0, "2027-06-30"),
            Err(ValidationError::EmptyClubName)
        );
        assert_eq!(
            ContractDetails::new("Dynamo", -1.0, "2027-06-30"),
            Err(ValidationError::NegativeSalary(-1.0))
        );
        assert!(matches!(
            ContractDetails::new("Dynamo", 1000.0, "soon"),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn loan_requires_valid_date_and_clears_idempotently() {
        let mut c = ContractDetails::new("Dynamo", 1000.0, "2027-06-30").unwrap();
        assert!(c.set_on_loan("not-a-date").is_err());
        assert!(!c.is_on_loan());

        c.set_on_loan("2026-12-31").unwrap();
        assert!(c.is_on_loan());
        assert_eq!(c.loan_end_date(), "2026-12-31");

        c.return_from_loan();
        assert!(!c.is_on_loan());
        assert_eq!(c.loan_end_date(), "");

        // Second return is a safe no-op.
        c.return_from_loan();
        assert!(!c.is_on_loan());
        assert_eq!(c.loan_end_date(), "");
    }

    #[test]
    fn adjust_salary_requires_positive_base() {
        let mut c = ContractDetails::new("Dynamo", 0.0, "2027-06-30").unwrap();
        assert_eq!(c.adjust_salary(10.0), Err(ValidationError::SalaryNotAdjustable));

        c.set_salary(1000.0).unwrap();
        c.adjust_salary(10.0).unwrap();
        assert!((c.salary() - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn expiring_soon_window() {
        let now = Local::now().date_naive();

        let in_three = now.checked_add_months(Months::new(3)).unwrap();
        let c = ContractDetails::new("A", 0.0, &in_three.format("%Y-%m-%d").to_string()).unwrap();
        assert!(c.is_expiring_soon());

        let this_month = ContractDetails::new("A", 0.0, &now.format("%Y-%m-%d").to_string())
            .unwrap();
        assert!(this_month.is_expiring_soon());

        let in_nine = now.checked_add_months(Months::new(9)).unwrap();
        let far = ContractDetails::new("A", 0.0, &in_nine.format("%Y-%m-%d").to_string()).unwrap();
        assert!(!far.is_expiring_soon());

        let past = now.checked_sub_months(Months::new(2)).unwrap();
        let expired =
            ContractDetails::new("A", 0.0, &past.format("%Y-%m-%d").to_string()).unwrap();
        assert!(!expired.is_expiring_soon());
    }
}
