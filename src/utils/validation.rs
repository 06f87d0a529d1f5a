//! Strict validation utilities
//!
//! The ledger core never rejects malformed numeric input; these validators
//! implement the stricter policy a caller can layer on top of it, rejecting
//! expenses outright instead of relying on the defined fallbacks.

use crate::traits::*;
use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> TripResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(TripError::Validation(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that a participant name is usable as a join key
pub fn validate_participant_name(name: &str) -> TripResult<()> {
    if name.trim().is_empty() {
        return Err(TripError::Validation(
            "Participant name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(TripError::Validation(
            "Participant name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that an expense title is valid
pub fn validate_expense_title(title: &str) -> TripResult<()> {
    if title.trim().is_empty() {
        return Err(TripError::Validation(
            "Expense title cannot be empty".to_string(),
        ));
    }

    if title.len() > 200 {
        return Err(TripError::Validation(
            "Expense title cannot exceed 200 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that percent weights are all present and sum to exactly 100
pub fn validate_percent_weights(expense: &Expense) -> TripResult<()> {
    let mut total = BigDecimal::from(0);
    for share in &expense.shares {
        match &share.weight {
            Some(weight) => total += weight,
            None => {
                return Err(TripError::Validation(format!(
                    "Participant '{}' has no percent weight",
                    share.name
                )));
            }
        }
    }

    if total != BigDecimal::from(100) {
        return Err(TripError::Validation(format!(
            "Percent weights must sum to 100, got {}",
            total
        )));
    }

    Ok(())
}

/// Strict expense validator
///
/// Rejects what the lenient core would silently absorb: non-positive
/// amounts, empty participant lists, duplicate participants, and percent
/// splits that do not account for the whole amount.
pub struct StrictExpenseValidator;

impl ExpenseValidator for StrictExpenseValidator {
    fn validate_expense(&self, expense: &Expense) -> TripResult<()> {
        // Structural checks first
        expense.validate()?;

        validate_expense_title(&expense.title)?;
        validate_positive_amount(&expense.amount)?;
        validate_participant_name(&expense.payer)?;

        if expense.shares.is_empty() {
            return Err(TripError::Validation(
                "Expense must have at least one participant".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for share in &expense.shares {
            validate_participant_name(&share.name)?;
            if !seen.insert(share.name.as_str()) {
                return Err(TripError::Validation(format!(
                    "Participant '{}' appears more than once in expense",
                    share.name
                )));
            }
        }

        if expense.policy == SplitPolicy::Percent {
            validate_percent_weights(expense)?;
        }

        Ok(())
    }
}

/// Strict member validator
pub struct StrictMemberValidator;

impl MemberValidator for StrictMemberValidator {
    fn validate_member(&self, member: &Member) -> TripResult<()> {
        validate_participant_name(&member.name)?;

        if let Some(email) = &member.email {
            if !email.contains('@') {
                return Err(TripError::Validation(format!(
                    "Invalid email address: {}",
                    email
                )));
            }
        }

        Ok(())
    }

    fn validate_member_removal(&self, _trip_id: &str, _name: &str) -> TripResult<()> {
        Ok(())
    }
}
