//! Integration tests for tripledger-core

use bigdecimal::BigDecimal;
use tripledger_core::{
    patterns,
    utils::{MemoryStore, StrictExpenseValidator, StrictMemberValidator},
    ExpenseBuilder, Member, SplitPolicy, Trip, TripError, TripLedger, TripStore,
};

fn dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_complete_trip_workflow() {
    let store = MemoryStore::new();
    let mut ledger = TripLedger::new(store);

    let trip = ledger
        .create_trip(Trip::new("Goa Weekend".to_string()))
        .await
        .unwrap();

    for name in ["Asha", "Ben", "Cara"] {
        ledger
            .add_member(Member::new(trip.id.clone(), name.to_string()))
            .await
            .unwrap();
    }

    // One expense per split policy.
    let taxi = patterns::equal_expense(
        trip.id.clone(),
        "Airport taxi".to_string(),
        dec("90"),
        "Asha".to_string(),
        vec!["Asha".to_string(), "Ben".to_string(), "Cara".to_string()],
    )
    .unwrap();
    ledger.record_expense(taxi).await.unwrap();

    let hotel = patterns::percent_expense(
        trip.id.clone(),
        "Hotel".to_string(),
        dec("100"),
        "Ben".to_string(),
        vec![("Asha".to_string(), dec("30")), ("Ben".to_string(), dec("70"))],
    )
    .unwrap();
    ledger.record_expense(hotel).await.unwrap();

    let dinner = patterns::shares_expense(
        trip.id.clone(),
        "Dinner".to_string(),
        dec("90"),
        "Cara".to_string(),
        vec![
            ("Asha".to_string(), dec("1")),
            ("Ben".to_string(), dec("1")),
            ("Cara".to_string(), dec("2")),
        ],
    )
    .unwrap();
    ledger.record_expense(dinner).await.unwrap();

    let report = ledger.balance_report(&trip.id).await.unwrap();
    assert!(report.is_settled);
    assert_eq!(report.total_paid, dec("280"));
    assert_eq!(report.total_owed, dec("280"));

    // Asha: paid 90, owes 30 + 30 + 22.5
    assert_eq!(report.balances["Asha"].balance, dec("7.5"));
    // Ben: paid 100, owes 30 + 70 + 22.5
    assert_eq!(report.balances["Ben"].balance, dec("-22.5"));
    // Cara: paid 90, owes 30 + 45
    assert_eq!(report.balances["Cara"].balance, dec("15"));

    // The balances conserve money.
    let net: BigDecimal = report.balances.values().map(|line| &line.balance).sum();
    assert_eq!(net, dec("0"));

    // Deleting the trip cascades to members and expenses.
    ledger.delete_trip(&trip.id).await.unwrap();
    assert!(ledger.list_trips().await.unwrap().is_empty());
    assert!(ledger.list_members(&trip.id).await.unwrap().is_empty());
    assert!(ledger.list_expenses(&trip.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unregistered_participants_show_up_in_report() {
    let store = MemoryStore::new();
    let mut ledger = TripLedger::new(store);

    let trip = ledger
        .create_trip(Trip::new("Road Trip".to_string()))
        .await
        .unwrap();

    ledger
        .add_member(Member::new(trip.id.clone(), "Asha".to_string()))
        .await
        .unwrap();

    // Dana never registered but fronted the fuel money.
    let fuel = patterns::equal_expense(
        trip.id.clone(),
        "Fuel".to_string(),
        dec("60"),
        "Dana".to_string(),
        vec!["Asha".to_string(), "Dana".to_string()],
    )
    .unwrap();
    ledger.record_expense(fuel).await.unwrap();

    let report = ledger.balance_report(&trip.id).await.unwrap();
    assert_eq!(report.balances.len(), 2);
    assert_eq!(report.balances["Dana"].balance, dec("30"));
    assert_eq!(report.balances["Asha"].balance, dec("-30"));
}

#[tokio::test]
async fn test_strict_validators_reject_incomplete_percent_split() {
    let store = MemoryStore::new();
    let mut ledger = TripLedger::with_validators(
        store,
        Box::new(StrictMemberValidator),
        Box::new(StrictExpenseValidator),
    );

    let trip = ledger
        .create_trip(Trip::new("Strict Trip".to_string()))
        .await
        .unwrap();

    let incomplete = ExpenseBuilder::new(trip.id.clone(), "Hotel".to_string(), dec("100"))
        .paid_by("Asha".to_string())
        .percent_split(vec![
            ("Asha".to_string(), dec("30")),
            ("Ben".to_string(), dec("30")),
        ])
        .build()
        .unwrap();

    let result = ledger.record_expense(incomplete).await;
    assert!(matches!(result, Err(TripError::Validation(_))));

    // A complete split passes the same validator.
    let complete = ExpenseBuilder::new(trip.id.clone(), "Hotel".to_string(), dec("100"))
        .paid_by("Asha".to_string())
        .percent_split(vec![
            ("Asha".to_string(), dec("30")),
            ("Ben".to_string(), dec("70")),
        ])
        .build()
        .unwrap();
    assert!(ledger.record_expense(complete).await.is_ok());
}

#[tokio::test]
async fn test_lenient_default_accepts_degenerate_weights() {
    let store = MemoryStore::new();
    let mut ledger = TripLedger::new(store);

    let trip = ledger
        .create_trip(Trip::new("Lenient Trip".to_string()))
        .await
        .unwrap();

    // Zero percent weights: the fallback denominator kicks in and nobody
    // gets charged, but the expense still records and the payer is credited.
    let expense = patterns::percent_expense(
        trip.id.clone(),
        "Mystery".to_string(),
        dec("50"),
        "Asha".to_string(),
        vec![("Asha".to_string(), dec("0")), ("Ben".to_string(), dec("0"))],
    )
    .unwrap();
    ledger.record_expense(expense).await.unwrap();

    let report = ledger.balance_report(&trip.id).await.unwrap();
    assert_eq!(report.balances["Asha"].balance, dec("50"));
    assert_eq!(report.balances["Ben"].balance, dec("0"));
    assert!(!report.is_settled);
}

#[tokio::test]
async fn test_expense_from_form_matches_builder_split() {
    let store = MemoryStore::new();
    let mut ledger = TripLedger::new(store);

    let trip = ledger
        .create_trip(Trip::new("Form Trip".to_string()))
        .await
        .unwrap();

    let expense = patterns::expense_from_form(
        trip.id.clone(),
        "Museum tickets".to_string(),
        dec("45"),
        "Ben".to_string(),
        SplitPolicy::Shares,
        "Asha, Ben, Cara",
        "1, 1, abc",
    )
    .unwrap();
    ledger.record_expense(expense).await.unwrap();

    // The unparseable third weight falls back to one share unit.
    let report = ledger.balance_report(&trip.id).await.unwrap();
    assert_eq!(report.balances["Asha"].balance, dec("-15"));
    assert_eq!(report.balances["Ben"].balance, dec("30"));
    assert_eq!(report.balances["Cara"].balance, dec("-15"));
}

#[tokio::test]
async fn test_memory_store_operations() {
    let mut store = MemoryStore::new();

    let trip = Trip::new("Store Test".to_string());
    store.save_trip(&trip).await.unwrap();

    let retrieved = store.get_trip(&trip.id).await.unwrap();
    assert_eq!(retrieved.as_ref().map(|t| t.title.as_str()), Some("Store Test"));

    let member = Member::new(trip.id.clone(), "Asha".to_string());
    store.save_member(&member).await.unwrap();
    assert_eq!(store.list_members(&trip.id).await.unwrap().len(), 1);

    let expense = patterns::equal_expense(
        trip.id.clone(),
        "Snacks".to_string(),
        dec("12"),
        "Asha".to_string(),
        vec!["Asha".to_string()],
    )
    .unwrap();
    store.save_expense(&expense).await.unwrap();
    assert!(store.get_expense(&expense.id).await.unwrap().is_some());

    let missing = store.delete_expense("nope").await;
    assert!(matches!(missing, Err(TripError::ExpenseNotFound(_))));

    store.delete_trip(&trip.id).await.unwrap();
    assert!(store.list_members(&trip.id).await.unwrap().is_empty());
    assert!(store.get_expense(&expense.id).await.unwrap().is_none());
}

#[test]
fn test_split_policy_wire_format() {
    // The serialized form matches the original application values.
    assert_eq!(
        serde_json::to_string(&SplitPolicy::Percent).unwrap(),
        "\"percent\""
    );
    let parsed: SplitPolicy = serde_json::from_str("\"shares\"").unwrap();
    assert_eq!(parsed, SplitPolicy::Shares);
}
