//! In-memory storage implementation for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory [`TripStore`] implementation
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    trips: Arc<RwLock<HashMap<String, Trip>>>,
    // Members keyed by (trip id, name); expenses keyed by expense id.
    members: Arc<RwLock<HashMap<(String, String), Member>>>,
    expenses: Arc<RwLock<HashMap<String, Expense>>>,
}

impl MemoryStore {
    /// Create a new memory store instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.trips.write().unwrap().clear();
        self.members.write().unwrap().clear();
        self.expenses.write().unwrap().clear();
    }
}

#[async_trait]
impl TripStore for MemoryStore {
    async fn save_trip(&mut self, trip: &Trip) -> TripResult<()> {
        self.trips
            .write()
            .unwrap()
            .insert(trip.id.clone(), trip.clone());
        Ok(())
    }

    async fn get_trip(&self, trip_id: &str) -> TripResult<Option<Trip>> {
        Ok(self.trips.read().unwrap().get(trip_id).cloned())
    }

    async fn list_trips(&self) -> TripResult<Vec<Trip>> {
        let mut trips: Vec<Trip> = self.trips.read().unwrap().values().cloned().collect();
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(trips)
    }

    async fn delete_trip(&mut self, trip_id: &str) -> TripResult<()> {
        if self.trips.write().unwrap().remove(trip_id).is_none() {
            return Err(TripError::TripNotFound(trip_id.to_string()));
        }

        // Cascade: everything belonging to the trip goes with it.
        self.members
            .write()
            .unwrap()
            .retain(|(tid, _), _| tid != trip_id);
        self.expenses
            .write()
            .unwrap()
            .retain(|_, expense| expense.trip_id != trip_id);

        Ok(())
    }

    async fn save_member(&mut self, member: &Member) -> TripResult<()> {
        self.members.write().unwrap().insert(
            (member.trip_id.clone(), member.name.clone()),
            member.clone(),
        );
        Ok(())
    }

    async fn list_members(&self, trip_id: &str) -> TripResult<Vec<Member>> {
        let members = self.members.read().unwrap();
        let mut filtered: Vec<Member> = members
            .values()
            .filter(|member| member.trip_id == trip_id)
            .cloned()
            .collect();
        filtered.sort_by(|a, b| a.joined_at.cmp(&b.joined_at));
        Ok(filtered)
    }

    async fn delete_member(&mut self, trip_id: &str, name: &str) -> TripResult<()> {
        let key = (trip_id.to_string(), name.to_string());
        if self.members.write().unwrap().remove(&key).is_some() {
            Ok(())
        } else {
            Err(TripError::MemberNotFound(name.to_string()))
        }
    }

    async fn save_expense(&mut self, expense: &Expense) -> TripResult<()> {
        self.expenses
            .write()
            .unwrap()
            .insert(expense.id.clone(), expense.clone());
        Ok(())
    }

    async fn get_expense(&self, expense_id: &str) -> TripResult<Option<Expense>> {
        Ok(self.expenses.read().unwrap().get(expense_id).cloned())
    }

    async fn list_expenses(&self, trip_id: &str) -> TripResult<Vec<Expense>> {
        let expenses = self.expenses.read().unwrap();
        let mut filtered: Vec<Expense> = expenses
            .values()
            .filter(|expense| expense.trip_id == trip_id)
            .cloned()
            .collect();
        filtered.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(filtered)
    }

    async fn delete_expense(&mut self, expense_id: &str) -> TripResult<()> {
        if self.expenses.write().unwrap().remove(expense_id).is_some() {
            Ok(())
        } else {
            Err(TripError::ExpenseNotFound(expense_id.to_string()))
        }
    }
}
