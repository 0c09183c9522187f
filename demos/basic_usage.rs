// ============================================================================
// Basic Usage Example
// ============================================================================

use chrono::Utc;
use exchange_view::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    exchange_view::telemetry::init_tracing();

    println!("=== Exchange View Example ===\n");

    // Build the ZRX/WETH book from a snapshot
    let mut snapshot = Vec::new();
    for i in 0i64..5 {
        snapshot.push(Order::new(
            format!("0xsell{}", i),
            Side::Sell,
            Decimal::new(3_000 + i * 10, 6),
            Decimal::from(10 + i * 5),
            OrderStatus::Pending,
            i == 2,
        )?);
        snapshot.push(Order::new(
            format!("0xbuy{}", i),
            Side::Buy,
            Decimal::new(2_990 - i * 10, 6),
            Decimal::from(40 - i * 5),
            OrderStatus::Pending,
            false,
        )?);
    }

    let view = OrderBookView::from_snapshot(snapshot);

    println!("Asks:");
    for row in &view.sells {
        println!(
            "  {} @ {}  [{}%]",
            row.order.amount(),
            row.order.price(),
            row.fill_percent().round_dp(1)
        );
    }

    println!("\nBids:");
    for row in &view.buys {
        println!(
            "  {} @ {}  [{}%]",
            row.order.amount(),
            row.order.price(),
            row.fill_percent().round_dp(1)
        );
    }

    println!("\nSpread: {:?}", view.spread());

    // Validate a buy using 75% of the WETH balance
    println!("\n=== Order Entry ===");
    let zrx = TokenBalance::new("ZRX", "0x Protocol Token", Decimal::from(50), Decimal::from(35));
    let weth = TokenBalance::new("WETH", "Wrapped Ether", Decimal::new(15, 2), Decimal::new(12, 2));
    let ctx = ValidationContext::from_balances(
        Side::Buy,
        &zrx,
        &weth,
        ValidationConstraints::weth_pairs(),
    );

    let price = suggest_price(&view, Side::Buy).unwrap_or(Decimal::ONE);
    let amount = suggest_amount(AmountPreset::ThreeQuarters, price, &ctx).unwrap_or_default();
    let input = OrderInput::new(
        price.to_string(),
        amount.to_string(),
        Some(ExpirationPreset::Week.expires_at(Utc::now())),
    );

    match submit(&input, &ctx, &LoggingSubmitter) {
        Ok(order) => println!("Accepted: {} ZRX for {} WETH", order.amount, order.total),
        Err(errors) => println!("Rejected: {}", errors),
    }

    let greedy = OrderInput::new(price.to_string(), "1000", None);
    println!("Rejected: {}", validate(&greedy, &ctx));

    println!("\nZRX locked in orders: {}", zrx.reserved_in_orders());

    Ok(())
}
