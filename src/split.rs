//! Split-policy arithmetic for dividing an expense among participants
//!
//! The allocation functions here are total: degenerate input (no
//! participants, missing or unparseable weights, weights summing to zero)
//! always resolves to a defined fallback instead of an error. Callers that
//! want stricter rules layer them on top, see [`crate::utils::validation`].

use bigdecimal::BigDecimal;

use crate::types::{ExpenseShare, SplitPolicy};

/// Weight substituted for an unspecified or unparseable percent entry.
pub const PERCENT_DEFAULT_WEIGHT: i64 = 0;

/// Weight substituted for an unspecified or unparseable shares entry.
///
/// Distinct from the percent default: shares denote relative weight, so an
/// unspecified entry reasonably counts as one unit.
pub const SHARES_DEFAULT_WEIGHT: i64 = 1;

/// Denominator used when percent weights sum to zero or less.
pub const PERCENT_FALLBACK_TOTAL: i64 = 100;

/// Denominator used when share weights sum to zero.
pub const SHARES_FALLBACK_TOTAL: i64 = 1;

impl SplitPolicy {
    /// Weight assumed for a share that carries no usable weight
    pub fn default_weight(self) -> BigDecimal {
        match self {
            SplitPolicy::Shares => BigDecimal::from(SHARES_DEFAULT_WEIGHT),
            SplitPolicy::Equal | SplitPolicy::Percent => BigDecimal::from(PERCENT_DEFAULT_WEIGHT),
        }
    }
}

/// Compute each participant's owed portion of `amount` under `policy`
///
/// Returns one `(name, owed)` pair per share, in declaration order. An empty
/// share list yields an empty allocation: the expense contributes no
/// obligations rather than dividing by zero.
pub fn allocate(
    policy: SplitPolicy,
    amount: &BigDecimal,
    shares: &[ExpenseShare],
) -> Vec<(String, BigDecimal)> {
    match policy {
        SplitPolicy::Equal => allocate_equal(amount, shares),
        SplitPolicy::Percent | SplitPolicy::Shares => allocate_weighted(policy, amount, shares),
    }
}

fn allocate_equal(amount: &BigDecimal, shares: &[ExpenseShare]) -> Vec<(String, BigDecimal)> {
    if shares.is_empty() {
        return Vec::new();
    }
    let per_head = amount / BigDecimal::from(shares.len() as i64);
    shares
        .iter()
        .map(|share| (share.name.clone(), per_head.clone()))
        .collect()
}

fn allocate_weighted(
    policy: SplitPolicy,
    amount: &BigDecimal,
    shares: &[ExpenseShare],
) -> Vec<(String, BigDecimal)> {
    let weights: Vec<BigDecimal> = shares
        .iter()
        .map(|share| {
            share
                .weight
                .clone()
                .unwrap_or_else(|| policy.default_weight())
        })
        .collect();

    let total: BigDecimal = weights.iter().sum();
    let denominator = effective_total(policy, total);

    shares
        .iter()
        .zip(weights)
        .map(|(share, weight)| {
            let owed = (weight * amount) / &denominator;
            (share.name.clone(), owed)
        })
        .collect()
}

/// Resolve the denominator for weighted allocation
///
/// Percent weights summing to zero or less fall back to 100, so each weight
/// is effectively read as a percentage of an unmet whole. Share weights
/// summing to exactly zero fall back to 1.
fn effective_total(policy: SplitPolicy, total: BigDecimal) -> BigDecimal {
    let zero = BigDecimal::from(0);
    match policy {
        SplitPolicy::Percent if total <= zero => BigDecimal::from(PERCENT_FALLBACK_TOTAL),
        SplitPolicy::Shares if total == zero => BigDecimal::from(SHARES_FALLBACK_TOTAL),
        _ => total,
    }
}

/// Parse one free-text weight entry, falling back to the policy default
pub fn parse_weight(policy: SplitPolicy, text: &str) -> BigDecimal {
    text.trim()
        .parse::<BigDecimal>()
        .unwrap_or_else(|_| policy.default_weight())
}

/// Build shares from the original form input: a comma-separated name list
/// and a comma-separated weight list
///
/// Names are paired with weights by position. Names beyond the end of the
/// weight list get no explicit weight and resolve to the policy default
/// during allocation; surplus weights are dropped. Equal splits ignore the
/// weight text entirely.
pub fn parse_share_list(policy: SplitPolicy, names: &str, weights: &str) -> Vec<ExpenseShare> {
    let names: Vec<&str> = names
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if policy == SplitPolicy::Equal {
        return names
            .into_iter()
            .map(|name| ExpenseShare::unweighted(name.to_string()))
            .collect();
    }

    // Weight entries are not filtered: a blank entry still occupies its
    // position and resolves to the policy default, keeping later entries
    // aligned with their names.
    let parsed: Vec<BigDecimal> = if weights.trim().is_empty() {
        Vec::new()
    } else {
        weights
            .split(',')
            .map(|s| parse_weight(policy, s))
            .collect()
    };

    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| match parsed.get(i) {
            Some(weight) => ExpenseShare::weighted(name.to_string(), weight.clone()),
            None => ExpenseShare::unweighted(name.to_string()),
        })
        .collect()
}
