//! Basic trip ledger usage example

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use tripledger_core::utils::MemoryStore;
use tripledger_core::{patterns, Member, Trip, TripLedger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧳 Tripledger Core - Basic Trip Example\n");

    let store = MemoryStore::new();
    let mut ledger = TripLedger::new(store);

    // 1. Create a trip and register members
    let trip = Trip::new("Goa Weekend".to_string()).with_dates(
        NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
    );
    let trip = ledger.create_trip(trip).await?;
    println!("✈️  Created trip: {} ({})", trip.title, trip.id);

    for name in ["Asha", "Ben", "Cara"] {
        ledger
            .add_member(Member::new(trip.id.clone(), name.to_string()))
            .await?;
        println!("  ✓ Added member: {}", name);
    }
    println!();

    // 2. Record expenses with different split policies
    println!("💰 Recording Expenses...\n");

    let taxi = patterns::equal_expense(
        trip.id.clone(),
        "Airport taxi".to_string(),
        BigDecimal::from(90),
        "Asha".to_string(),
        vec!["Asha".to_string(), "Ben".to_string(), "Cara".to_string()],
    )?;
    ledger.record_expense(taxi).await?;
    println!("  ✓ Airport taxi: $90 paid by Asha, split equally");

    let hotel = patterns::percent_expense(
        trip.id.clone(),
        "Hotel".to_string(),
        BigDecimal::from(100),
        "Ben".to_string(),
        vec![
            ("Asha".to_string(), BigDecimal::from(30)),
            ("Ben".to_string(), BigDecimal::from(70)),
        ],
    )?;
    ledger.record_expense(hotel).await?;
    println!("  ✓ Hotel: $100 paid by Ben, split 30/70");

    let dinner = patterns::shares_expense(
        trip.id.clone(),
        "Dinner".to_string(),
        BigDecimal::from(90),
        "Cara".to_string(),
        vec![
            ("Asha".to_string(), BigDecimal::from(1)),
            ("Ben".to_string(), BigDecimal::from(1)),
            ("Cara".to_string(), BigDecimal::from(2)),
        ],
    )?;
    ledger.record_expense(dinner).await?;
    println!("  ✓ Dinner: $90 paid by Cara, split 1:1:2\n");

    // 3. Compute the balance report
    println!("📊 Balance Report (positive = gets money, negative = owes):\n");
    let report = ledger.balance_report(&trip.id).await?;

    let mut lines: Vec<_> = report.balances.values().collect();
    lines.sort_by(|a, b| a.name.cmp(&b.name));
    for line in lines {
        println!("  {:8} {:>8}", line.name, line.balance);
    }
    println!(
        "\n  Total paid: {}  Total owed: {}  Settled: {}",
        report.total_paid, report.total_owed, report.is_settled
    );

    Ok(())
}
