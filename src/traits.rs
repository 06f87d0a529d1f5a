//! Traits for storage abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for trip records
///
/// This trait is the repository boundary of the crate: every record kind is
/// keyed by trip identifier, so the ledger always receives already-filtered,
/// already-typed inputs. Any durable key-value or document store can satisfy
/// it (PostgreSQL, SQLite, in-memory, etc.).
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Save a trip to storage
    async fn save_trip(&mut self, trip: &Trip) -> TripResult<()>;

    /// Get a trip by ID
    async fn get_trip(&self, trip_id: &str) -> TripResult<Option<Trip>>;

    /// List all trips
    async fn list_trips(&self) -> TripResult<Vec<Trip>>;

    /// Delete a trip together with all of its members and expenses
    async fn delete_trip(&mut self, trip_id: &str) -> TripResult<()>;

    /// Save a member to storage
    async fn save_member(&mut self, member: &Member) -> TripResult<()>;

    /// List all members of a trip
    async fn list_members(&self, trip_id: &str) -> TripResult<Vec<Member>>;

    /// Delete a member by trip and name
    async fn delete_member(&mut self, trip_id: &str, name: &str) -> TripResult<()>;

    /// Save an expense to storage
    async fn save_expense(&mut self, expense: &Expense) -> TripResult<()>;

    /// Get an expense by ID
    async fn get_expense(&self, expense_id: &str) -> TripResult<Option<Expense>>;

    /// List all expenses of a trip
    async fn list_expenses(&self, trip_id: &str) -> TripResult<Vec<Expense>>;

    /// Delete an expense by ID
    async fn delete_expense(&mut self, expense_id: &str) -> TripResult<()>;
}

/// Trait for implementing custom member validation rules
pub trait MemberValidator: Send + Sync {
    /// Validate a member before saving
    fn validate_member(&self, member: &Member) -> TripResult<()>;

    /// Validate member removal (e.g. check for expenses still naming them)
    fn validate_member_removal(&self, trip_id: &str, name: &str) -> TripResult<()>;
}

/// Trait for implementing custom expense validation rules
pub trait ExpenseValidator: Send + Sync {
    /// Validate an expense before recording
    fn validate_expense(&self, expense: &Expense) -> TripResult<()>;
}

/// Default member validator with basic rules
pub struct DefaultMemberValidator;

impl MemberValidator for DefaultMemberValidator {
    fn validate_member(&self, member: &Member) -> TripResult<()> {
        if member.name.trim().is_empty() {
            return Err(TripError::Validation(
                "Member name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_member_removal(&self, _trip_id: &str, _name: &str) -> TripResult<()> {
        // Removal is always allowed: a removed member still appears in
        // balances for as long as expenses name them.
        Ok(())
    }
}

/// Default expense validator, structural checks only
///
/// The balance ledger is tolerant by design so that partial user input still
/// yields a sensible number; this validator enforces nothing beyond the
/// structural minimum. Use the strict validators in
/// [`crate::utils::validation`] for caller-side rules.
pub struct DefaultExpenseValidator;

impl ExpenseValidator for DefaultExpenseValidator {
    fn validate_expense(&self, expense: &Expense) -> TripResult<()> {
        expense.validate()
    }
}
