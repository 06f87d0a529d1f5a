//! Core types and data structures for the trip expense ledger

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// How an expense is divided among its participants
///
/// This is a closed set; the wire representation matches the original
/// application values (`equal`, `percent`, `shares`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitPolicy {
    /// Every participant owes the same per-head amount
    Equal,
    /// Each participant owes a percentage of the total
    Percent,
    /// Each participant owes a number of relative share units
    Shares,
}

/// A trip that groups members and expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: String,
    /// Human-readable trip title
    pub title: String,
    /// Optional first day of the trip
    pub start_date: Option<NaiveDate>,
    /// Optional last day of the trip
    pub end_date: Option<NaiveDate>,
    /// When the trip was created
    pub created_at: NaiveDateTime,
}

impl Trip {
    /// Create a new trip with a generated identifier
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            start_date: None,
            end_date: None,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Set the travel dates for the trip
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }
}

/// An explicitly registered trip member
///
/// The display name is the join key: expenses reference members by name, and
/// a name appearing as payer or share participant is implicitly a member even
/// if no `Member` record was ever saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Trip this member belongs to
    pub trip_id: String,
    /// Display name, unique within the trip
    pub name: String,
    /// Optional contact email
    pub email: Option<String>,
    /// Role within the trip (e.g. "member", "organizer")
    pub role: String,
    /// When the member joined the trip
    pub joined_at: NaiveDateTime,
}

impl Member {
    /// Create a new member with the default role
    pub fn new(trip_id: String, name: String) -> Self {
        Self {
            trip_id,
            name,
            email: None,
            role: "member".to_string(),
            joined_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Attach a contact email
    pub fn with_email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }
}

/// One participant's stake in an expense
///
/// The participant and its weight travel together as a single record, so the
/// two can never fall out of alignment. A missing weight means "unspecified"
/// and is resolved to the policy default during allocation (0 for percent,
/// 1 for shares); equal splits carry no weights at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseShare {
    /// Participant name
    pub name: String,
    /// Policy-specific weight, absent when unspecified
    pub weight: Option<BigDecimal>,
}

impl ExpenseShare {
    /// Create a share with an explicit weight
    pub fn weighted(name: String, weight: BigDecimal) -> Self {
        Self {
            name,
            weight: Some(weight),
        }
    }

    /// Create a share with no weight, deferring to the policy default
    pub fn unweighted(name: String) -> Self {
        Self { name, weight: None }
    }
}

/// A recorded expense
///
/// Expenses are immutable once recorded; they may be deleted but never
/// edited, and the ledger only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier for the expense
    pub id: String,
    /// Trip this expense belongs to
    pub trip_id: String,
    /// Free-text label
    pub title: String,
    /// Total cost fronted by the payer
    pub amount: BigDecimal,
    /// Currency code, informational only (no conversion is performed)
    pub currency: String,
    /// Name of the participant who fronted the money
    pub payer: String,
    /// Participants sharing the cost, each with its own weight
    pub shares: Vec<ExpenseShare>,
    /// How the cost is divided
    pub policy: SplitPolicy,
    /// When the expense was recorded
    pub created_at: NaiveDateTime,
}

impl Expense {
    /// Create a new expense with a generated identifier
    pub fn new(
        trip_id: String,
        title: String,
        amount: BigDecimal,
        payer: String,
        policy: SplitPolicy,
        shares: Vec<ExpenseShare>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id,
            title,
            amount,
            currency: "USD".to_string(),
            payer,
            shares,
            policy,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Names of all participants sharing this expense, in declaration order
    pub fn participant_names(&self) -> impl Iterator<Item = &str> {
        self.shares.iter().map(|s| s.name.as_str())
    }

    /// Structural validation
    ///
    /// Deliberately minimal: the balance computation is lenient by contract
    /// and absorbs degenerate numeric input, so only the fields that make an
    /// expense attributable at all are required here. Stricter rules
    /// (positive amount, percent weights summing to 100) are layered by
    /// callers, see [`crate::utils::validation`].
    pub fn validate(&self) -> TripResult<()> {
        if self.title.trim().is_empty() {
            return Err(TripError::Validation(
                "Expense title cannot be empty".to_string(),
            ));
        }

        if self.payer.trim().is_empty() {
            return Err(TripError::Validation(
                "Expense payer cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Running totals for one participant while folding expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantState {
    /// Participant name
    pub name: String,
    /// Total amount this participant has fronted
    pub paid: BigDecimal,
    /// Total amount this participant owes across all expenses
    pub owed: BigDecimal,
}

impl ParticipantState {
    /// Create a fresh state with zero totals
    pub fn new(name: String) -> Self {
        Self {
            name,
            paid: BigDecimal::from(0),
            owed: BigDecimal::from(0),
        }
    }

    /// Record money fronted by this participant
    pub fn record_payment(&mut self, amount: &BigDecimal) {
        self.paid += amount;
    }

    /// Record a portion of an expense this participant owes
    pub fn record_obligation(&mut self, amount: &BigDecimal) {
        self.owed += amount;
    }

    /// Net balance: positive means the group owes this participant
    pub fn balance(&self) -> BigDecimal {
        &self.paid - &self.owed
    }
}

/// One participant's final net position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceLine {
    /// Participant name
    pub name: String,
    /// Signed net balance (positive = creditor, negative = debtor)
    pub balance: BigDecimal,
}

/// Balance sheet for a whole trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Trip the report was computed for
    pub trip_id: String,
    /// Net balance per participant name
    pub balances: HashMap<String, BalanceLine>,
    /// Sum of all amounts fronted
    pub total_paid: BigDecimal,
    /// Sum of all obligations allocated
    pub total_owed: BigDecimal,
    /// Whether the balances conserve money (net balances sum to zero)
    pub is_settled: bool,
}

/// Errors that can occur in the trip ledger
#[derive(Debug, thiserror::Error)]
pub enum TripError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Trip not found: {0}")]
    TripNotFound(String),
    #[error("Member not found: {0}")]
    MemberNotFound(String),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(String),
}

/// Result type for ledger operations
pub type TripResult<T> = Result<T, TripError>;
