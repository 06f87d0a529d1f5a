//! Roster derivation: the set of participants a balance computation covers

use std::collections::HashMap;

use crate::types::{Expense, Member, ParticipantState};

/// Build the participant roster for a balance computation
///
/// The roster is seeded with every explicitly registered member at zero
/// totals, then widened with every payer and share participant found in the
/// expenses. Participants are defined by usage: a name that only ever appears
/// inside an expense is still a participant, and no error is raised for
/// names missing from the member list.
///
/// The roster is recomputed fresh on every invocation; it is not cached
/// state.
pub fn build_roster(members: &[Member], expenses: &[Expense]) -> HashMap<String, ParticipantState> {
    let mut roster = HashMap::new();

    for member in members {
        ensure_participant(&mut roster, &member.name);
    }

    for expense in expenses {
        ensure_participant(&mut roster, &expense.payer);
        for name in expense.participant_names() {
            ensure_participant(&mut roster, name);
        }
    }

    roster
}

/// Insert a participant with zero totals if not already present
pub(crate) fn ensure_participant<'a>(
    roster: &'a mut HashMap<String, ParticipantState>,
    name: &str,
) -> &'a mut ParticipantState {
    roster
        .entry(name.to_string())
        .or_insert_with_key(|name| ParticipantState::new(name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExpenseShare, SplitPolicy};
    use bigdecimal::BigDecimal;

    fn member(name: &str) -> Member {
        Member::new("trip1".to_string(), name.to_string())
    }

    fn expense(payer: &str, participants: &[&str]) -> Expense {
        Expense::new(
            "trip1".to_string(),
            "Dinner".to_string(),
            BigDecimal::from(30),
            payer.to_string(),
            SplitPolicy::Equal,
            participants
                .iter()
                .map(|p| ExpenseShare::unweighted(p.to_string()))
                .collect(),
        )
    }

    #[test]
    fn seeds_explicit_members_with_zero_totals() {
        let roster = build_roster(&[member("A"), member("B")], &[]);

        assert_eq!(roster.len(), 2);
        let a = &roster["A"];
        assert_eq!(a.paid, BigDecimal::from(0));
        assert_eq!(a.owed, BigDecimal::from(0));
    }

    #[test]
    fn inserts_names_known_only_from_expenses() {
        let roster = build_roster(&[member("A")], &[expense("B", &["A", "C"])]);

        assert_eq!(roster.len(), 3);
        assert!(roster.contains_key("B"));
        assert!(roster.contains_key("C"));
    }

    #[test]
    fn duplicate_mentions_produce_one_entry() {
        let roster = build_roster(
            &[member("A")],
            &[expense("A", &["A", "B"]), expense("B", &["A", "B"])],
        );

        assert_eq!(roster.len(), 2);
    }
}
