//! Main ledger orchestrator that coordinates trips, members, and expenses

use bigdecimal::BigDecimal;
use std::collections::HashMap;

use crate::ledger::balance;
use crate::traits::*;
use crate::types::*;

/// Main trip ledger that orchestrates all expense-tracking operations
///
/// The ledger delegates persistence to a [`TripStore`] implementation and
/// keeps the balance computation itself pure: `balance_report` fetches the
/// trip's roster and expenses and folds them in a single pass.
pub struct TripLedger<S: TripStore> {
    store: S,
    member_validator: Box<dyn MemberValidator>,
    expense_validator: Box<dyn ExpenseValidator>,
}

impl<S: TripStore> TripLedger<S> {
    /// Create a new ledger with the given storage backend
    pub fn new(store: S) -> Self {
        Self {
            store,
            member_validator: Box::new(DefaultMemberValidator),
            expense_validator: Box::new(DefaultExpenseValidator),
        }
    }

    /// Create a new ledger with custom validators
    pub fn with_validators(
        store: S,
        member_validator: Box<dyn MemberValidator>,
        expense_validator: Box<dyn ExpenseValidator>,
    ) -> Self {
        Self {
            store,
            member_validator,
            expense_validator,
        }
    }

    // Trip operations
    /// Create a new trip
    pub async fn create_trip(&mut self, trip: Trip) -> TripResult<Trip> {
        if self.store.get_trip(&trip.id).await?.is_some() {
            return Err(TripError::Validation(format!(
                "Trip with ID '{}' already exists",
                trip.id
            )));
        }

        self.store.save_trip(&trip).await?;
        Ok(trip)
    }

    /// Get a trip by ID
    pub async fn get_trip(&self, trip_id: &str) -> TripResult<Option<Trip>> {
        self.store.get_trip(trip_id).await
    }

    /// Get a trip by ID, returning an error if not found
    pub async fn get_trip_required(&self, trip_id: &str) -> TripResult<Trip> {
        self.store
            .get_trip(trip_id)
            .await?
            .ok_or_else(|| TripError::TripNotFound(trip_id.to_string()))
    }

    /// List all trips
    pub async fn list_trips(&self) -> TripResult<Vec<Trip>> {
        self.store.list_trips().await
    }

    /// Delete a trip and everything that belongs to it
    pub async fn delete_trip(&mut self, trip_id: &str) -> TripResult<()> {
        self.get_trip_required(trip_id).await?;
        self.store.delete_trip(trip_id).await
    }

    // Member operations
    /// Add a member to a trip
    pub async fn add_member(&mut self, member: Member) -> TripResult<Member> {
        self.member_validator.validate_member(&member)?;
        self.get_trip_required(&member.trip_id).await?;

        let existing = self.store.list_members(&member.trip_id).await?;
        if existing.iter().any(|m| m.name == member.name) {
            return Err(TripError::Validation(format!(
                "Member '{}' already exists in trip '{}'",
                member.name, member.trip_id
            )));
        }

        self.store.save_member(&member).await?;
        Ok(member)
    }

    /// List the explicit members of a trip
    pub async fn list_members(&self, trip_id: &str) -> TripResult<Vec<Member>> {
        self.store.list_members(trip_id).await
    }

    /// Remove a member from a trip
    ///
    /// Expenses naming the member are untouched; the name keeps appearing in
    /// balance reports for as long as any expense references it.
    pub async fn remove_member(&mut self, trip_id: &str, name: &str) -> TripResult<()> {
        self.member_validator.validate_member_removal(trip_id, name)?;
        self.store.delete_member(trip_id, name).await
    }

    // Expense operations
    /// Record a new expense
    ///
    /// Expenses are immutable once recorded: there is no update operation,
    /// only deletion.
    pub async fn record_expense(&mut self, expense: Expense) -> TripResult<Expense> {
        self.expense_validator.validate_expense(&expense)?;
        self.get_trip_required(&expense.trip_id).await?;

        if self.store.get_expense(&expense.id).await?.is_some() {
            return Err(TripError::Validation(format!(
                "Expense with ID '{}' already exists",
                expense.id
            )));
        }

        self.store.save_expense(&expense).await?;
        Ok(expense)
    }

    /// Get an expense by ID
    pub async fn get_expense(&self, expense_id: &str) -> TripResult<Option<Expense>> {
        self.store.get_expense(expense_id).await
    }

    /// List all expenses of a trip
    pub async fn list_expenses(&self, trip_id: &str) -> TripResult<Vec<Expense>> {
        self.store.list_expenses(trip_id).await
    }

    /// Delete an expense
    pub async fn delete_expense(&mut self, expense_id: &str) -> TripResult<()> {
        if self.store.get_expense(expense_id).await?.is_none() {
            return Err(TripError::ExpenseNotFound(expense_id.to_string()));
        }
        self.store.delete_expense(expense_id).await
    }

    // Balance operations
    /// Compute the net balance per participant for a trip
    pub async fn balances(&self, trip_id: &str) -> TripResult<HashMap<String, BalanceLine>> {
        self.get_trip_required(trip_id).await?;
        let members = self.store.list_members(trip_id).await?;
        let expenses = self.store.list_expenses(trip_id).await?;
        Ok(balance::compute_balances(&members, &expenses))
    }

    /// Compute the full balance report for a trip
    ///
    /// `is_settled` reports whether every fronted amount was allocated to
    /// someone, i.e. whether the net balances sum to zero.
    pub async fn balance_report(&self, trip_id: &str) -> TripResult<BalanceReport> {
        self.get_trip_required(trip_id).await?;
        let members = self.store.list_members(trip_id).await?;
        let expenses = self.store.list_expenses(trip_id).await?;

        let state = balance::accumulate(&members, &expenses);

        let total_paid: BigDecimal = state.values().map(|p| &p.paid).sum();
        let total_owed: BigDecimal = state.values().map(|p| &p.owed).sum();
        let is_settled = total_paid == total_owed;

        let balances = state
            .into_iter()
            .map(|(name, participant)| {
                let line = BalanceLine {
                    name: participant.name.clone(),
                    balance: participant.balance(),
                };
                (name, line)
            })
            .collect();

        Ok(BalanceReport {
            trip_id: trip_id.to_string(),
            balances,
            total_paid,
            total_owed,
            is_settled,
        })
    }
}
