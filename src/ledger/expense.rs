//! Expense construction helpers

use bigdecimal::BigDecimal;

use crate::types::*;

/// Fluent builder for expenses
///
/// Defaults to an equal split over an empty share list; the split methods
/// set the policy and the shares together so the two cannot disagree.
#[derive(Debug)]
pub struct ExpenseBuilder {
    expense: Expense,
}

impl ExpenseBuilder {
    /// Create a new expense builder
    pub fn new(trip_id: String, title: String, amount: BigDecimal) -> Self {
        Self {
            expense: Expense::new(
                trip_id,
                title,
                amount,
                String::new(),
                SplitPolicy::Equal,
                Vec::new(),
            ),
        }
    }

    /// Set the participant who fronted the money
    pub fn paid_by(mut self, payer: String) -> Self {
        self.expense.payer = payer;
        self
    }

    /// Set the currency code
    pub fn currency(mut self, currency: String) -> Self {
        self.expense.currency = currency;
        self
    }

    /// Split the amount equally among the given participants
    pub fn equal_split(mut self, participants: Vec<String>) -> Self {
        self.expense.policy = SplitPolicy::Equal;
        self.expense.shares = participants
            .into_iter()
            .map(ExpenseShare::unweighted)
            .collect();
        self
    }

    /// Split the amount by percentage weights
    pub fn percent_split(mut self, shares: Vec<(String, BigDecimal)>) -> Self {
        self.expense.policy = SplitPolicy::Percent;
        self.expense.shares = shares
            .into_iter()
            .map(|(name, weight)| ExpenseShare::weighted(name, weight))
            .collect();
        self
    }

    /// Split the amount by relative share units
    pub fn shares_split(mut self, shares: Vec<(String, BigDecimal)>) -> Self {
        self.expense.policy = SplitPolicy::Shares;
        self.expense.shares = shares
            .into_iter()
            .map(|(name, weight)| ExpenseShare::weighted(name, weight))
            .collect();
        self
    }

    /// Append a single share record
    pub fn share(mut self, share: ExpenseShare) -> Self {
        self.expense.shares.push(share);
        self
    }

    /// Build the expense
    pub fn build(self) -> TripResult<Expense> {
        self.expense.validate()?;
        Ok(self.expense)
    }
}

/// Common expense shapes
pub mod patterns {
    use super::*;
    use crate::split;

    /// Create an equally split expense
    pub fn equal_expense(
        trip_id: String,
        title: String,
        amount: BigDecimal,
        payer: String,
        participants: Vec<String>,
    ) -> TripResult<Expense> {
        ExpenseBuilder::new(trip_id, title, amount)
            .paid_by(payer)
            .equal_split(participants)
            .build()
    }

    /// Create a percentage-split expense
    pub fn percent_expense(
        trip_id: String,
        title: String,
        amount: BigDecimal,
        payer: String,
        shares: Vec<(String, BigDecimal)>,
    ) -> TripResult<Expense> {
        ExpenseBuilder::new(trip_id, title, amount)
            .paid_by(payer)
            .percent_split(shares)
            .build()
    }

    /// Create a share-unit-split expense
    pub fn shares_expense(
        trip_id: String,
        title: String,
        amount: BigDecimal,
        payer: String,
        shares: Vec<(String, BigDecimal)>,
    ) -> TripResult<Expense> {
        ExpenseBuilder::new(trip_id, title, amount)
            .paid_by(payer)
            .shares_split(shares)
            .build()
    }

    /// Create an expense from the original form input: comma-separated
    /// participant names and comma-separated weight text
    pub fn expense_from_form(
        trip_id: String,
        title: String,
        amount: BigDecimal,
        payer: String,
        policy: SplitPolicy,
        participants: &str,
        weights: &str,
    ) -> TripResult<Expense> {
        let shares = split::parse_share_list(policy, participants, weights);
        let mut builder = ExpenseBuilder::new(trip_id, title, amount).paid_by(payer);
        builder.expense.policy = policy;
        builder.expense.shares = shares;
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn builder_sets_policy_and_shares_together() {
        let expense = ExpenseBuilder::new("trip1".to_string(), "Hotel".to_string(), dec("200"))
            .paid_by("Asha".to_string())
            .percent_split(vec![
                ("Asha".to_string(), dec("40")),
                ("Ben".to_string(), dec("60")),
            ])
            .build()
            .unwrap();

        assert_eq!(expense.policy, SplitPolicy::Percent);
        assert_eq!(expense.shares.len(), 2);
        assert_eq!(expense.shares[1].weight, Some(dec("60")));
    }

    #[test]
    fn builder_appends_individual_shares() {
        let expense = ExpenseBuilder::new("trip1".to_string(), "Bus".to_string(), dec("18"))
            .paid_by("Cara".to_string())
            .equal_split(vec!["Asha".to_string(), "Ben".to_string()])
            .share(ExpenseShare::unweighted("Cara".to_string()))
            .build()
            .unwrap();

        assert_eq!(expense.shares.len(), 3);
    }

    #[test]
    fn builder_rejects_missing_payer() {
        let result = ExpenseBuilder::new("trip1".to_string(), "Hotel".to_string(), dec("200"))
            .equal_split(vec!["Asha".to_string()])
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn form_input_produces_weighted_shares() {
        let expense = patterns::expense_from_form(
            "trip1".to_string(),
            "Museum".to_string(),
            dec("45"),
            "Ben".to_string(),
            SplitPolicy::Shares,
            "Asha, Ben, Cara",
            "1, 1, 2",
        )
        .unwrap();

        assert_eq!(expense.shares.len(), 3);
        assert_eq!(expense.shares[2].weight, Some(dec("2")));
    }
}
