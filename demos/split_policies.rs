//! Walkthrough of the three split policies and their fallback behavior

use bigdecimal::BigDecimal;
use tripledger_core::types::{ExpenseShare, SplitPolicy};
use tripledger_core::{allocate, parse_share_list};

fn show(label: &str, allocation: &[(String, BigDecimal)]) {
    println!("{label}");
    for (name, owed) in allocation {
        println!("  {:8} owes {}", name, owed);
    }
    println!();
}

fn main() {
    let amount = BigDecimal::from(90);

    // Equal: everyone pays the same per-head amount
    let shares: Vec<ExpenseShare> = ["Asha", "Ben", "Cara"]
        .iter()
        .map(|n| ExpenseShare::unweighted(n.to_string()))
        .collect();
    show(
        "Equal split of $90:",
        &allocate(SplitPolicy::Equal, &amount, &shares),
    );

    // Percent: weights are read as percentages of their own sum
    let shares = vec![
        ExpenseShare::weighted("Asha".to_string(), BigDecimal::from(30)),
        ExpenseShare::weighted("Ben".to_string(), BigDecimal::from(70)),
    ];
    show(
        "Percent split of $90 at 30/70:",
        &allocate(SplitPolicy::Percent, &amount, &shares),
    );

    // Shares: relative units, an unspecified weight counts as one unit
    let shares = vec![
        ExpenseShare::weighted("Asha".to_string(), BigDecimal::from(2)),
        ExpenseShare::unweighted("Ben".to_string()),
    ];
    show(
        "Share split of $90 at 2:1 (Ben unspecified):",
        &allocate(SplitPolicy::Shares, &amount, &shares),
    );

    // Legacy form input: comma-separated names and weights
    let shares = parse_share_list(SplitPolicy::Shares, "Asha, Ben, Cara", "1, 1, 2");
    show(
        "Share split of $90 parsed from form text \"1, 1, 2\":",
        &allocate(SplitPolicy::Shares, &amount, &shares),
    );

    // Degenerate percent weights fall back to a denominator of 100,
    // so nobody is charged and the payer simply stays in credit.
    let shares = vec![
        ExpenseShare::weighted("Asha".to_string(), BigDecimal::from(0)),
        ExpenseShare::weighted("Ben".to_string(), BigDecimal::from(0)),
    ];
    show(
        "Percent split of $90 with all-zero weights:",
        &allocate(SplitPolicy::Percent, &amount, &shares),
    );
}
