use thiserror::Error;

/// Rejected constructor or setter argument. Always fatal to the call that
/// produced it; the entity is left unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("player name cannot be empty")]
    EmptyName,

    #[error("nationality cannot be empty")]
    EmptyNationality,

    #[error("age must be positive, got {0}")]
    InvalidAge(u32),

    #[error("height must be positive, got {0}")]
    InvalidHeight(f64),

    #[error("weight must be positive, got {0}")]
    InvalidWeight(f64),

    #[error("market value cannot be negative, got {0}")]
    NegativeMarketValue(f64),

    #[error("player id must be positive")]
    InvalidId,

    #[error("player id {0} is already in the roster")]
    DuplicateId(u32),

    #[error("injury type cannot be empty")]
    EmptyInjuryKind,

    #[error("recovery days must be positive")]
    InvalidRecoveryDays,

    #[error("{stat} cannot be negative, got {value}")]
    NegativeStat { stat: &'static str, value: i32 },

    #[error("club name cannot be empty")]
    EmptyClubName,

    #[error("salary cannot be negative, got {0}")]
    NegativeSalary(f64),

    #[error("salary must be positive, got {0}")]
    NonPositiveSalary(f64),

    #[error("cannot adjust salary: current value is not positive")]
    SalaryNotAdjustable,

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("transfer fee must be positive, got {0}")]
    InvalidTransferFee(f64),

    #[error("expected salary cannot be negative, got {0}")]
    NegativeExpectedSalary(f64),

    #[error("salary offer must be positive, got {0}")]
    InvalidOffer(f64),

    #[error("transfer budget cannot be negative, got {0}")]
    NegativeBudget(f64),
}

/// Roster-level and player-level domain failures. Expected rejections
/// (budget, negotiation, transfer fee) are ordinary error values, never
/// panics; bulk loaders handle `Format` per line and keep going.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("player with id {0} not found in roster")]
    NotFound(u32),

    #[error("salary offer {offer:.2} exceeds transfer budget {budget:.2}")]
    InsufficientBudget { offer: f64, budget: f64 },

    #[error("{0} declined the salary offer")]
    OfferRejected(String),

    #[error("player is not listed for transfer")]
    NotListedForTransfer,

    #[error("offered fee {offered:.2} is below the asking fee {asking:.2}")]
    TransferFeeTooLow { offered: f64, asking: f64 },

    #[error("malformed record: {0}")]
    Format(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
