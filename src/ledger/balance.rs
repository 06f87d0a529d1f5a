//! Balance accumulation: folding expenses into per-participant totals
//!
//! This is the algorithmic heart of the crate. Accumulation is plain
//! addition, so the final balances do not depend on the order expenses are
//! folded in, and the whole computation is a pure function of its inputs.

use std::collections::HashMap;

use crate::ledger::roster::{build_roster, ensure_participant};
use crate::split;
use crate::types::{BalanceLine, Expense, Member, ParticipantState};

/// Fold one expense into the running participant state, in place
///
/// Each participant's share of the amount is added to their `owed` total and
/// the full amount is added to the payer's `paid` total. Names not yet in
/// the state are inserted with zero totals first; this keeps the roster
/// invariant even when an expense is applied against a stale state. The
/// expense itself is only read, never mutated.
pub fn apply_expense(state: &mut HashMap<String, ParticipantState>, expense: &Expense) {
    for (name, owed) in split::allocate(expense.policy, &expense.amount, &expense.shares) {
        ensure_participant(state, &name).record_obligation(&owed);
    }

    // The payer fronted the full amount even when the share list is empty.
    ensure_participant(state, &expense.payer).record_payment(&expense.amount);
}

/// Build the roster and fold every expense into it
pub fn accumulate(members: &[Member], expenses: &[Expense]) -> HashMap<String, ParticipantState> {
    let mut state = build_roster(members, expenses);
    for expense in expenses {
        apply_expense(&mut state, expense);
    }
    state
}

/// Compute the net balance for every participant
///
/// Every name appearing in the member list or in any expense's payer or
/// shares appears exactly once in the result. Positive balance means the
/// group owes the participant money; negative means the participant owes
/// the group.
pub fn compute_balances(members: &[Member], expenses: &[Expense]) -> HashMap<String, BalanceLine> {
    accumulate(members, expenses)
        .into_iter()
        .map(|(name, state)| {
            let line = BalanceLine {
                name: state.name.clone(),
                balance: state.balance(),
            };
            (name, line)
        })
        .collect()
}
