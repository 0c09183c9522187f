// ============================================================================
// Exchange View Library
// Order validation and order-book display aggregation for an exchange frontend
// ============================================================================

//! # Exchange View
//!
//! The computational core behind a decentralized-exchange trading screen.
//!
//! ## Features
//!
//! - **Order validation** of buy/sell form input against format rules,
//!   order-value bounds and spendable balances, reporting every problem per field
//! - **Order book aggregation** into display rows with relative fill bars
//! - **Exact decimal arithmetic** on `rust_decimal`; no floating point anywhere
//! - **Pure functions**: no I/O and no global state, safe to call from any thread
//!
//! ## Example
//!
//! ```rust
//! use exchange_view::prelude::*;
//! use chrono::{Duration, Utc};
//! use rust_decimal::Decimal;
//!
//! // Selling ZRX for WETH with 4 ZRX spendable
//! let ctx = ValidationContext::new(
//!     Side::Sell,
//!     Decimal::from(4),
//!     Decimal::ZERO,
//!     ValidationConstraints::weth_pairs(),
//! );
//!
//! let input = OrderInput::new("0.002", "5", Some(Utc::now() + Duration::days(1)));
//! let errors = validate(&input, &ctx);
//! assert_eq!(
//!     errors.get(Field::Amount),
//!     Some("You don't have the required amount")
//! );
//!
//! // Render one side of the book
//! let orders = vec![
//!     Order::parse("0x01", Side::Buy, "0.0021", "10", OrderStatus::Pending, false).unwrap(),
//!     Order::parse("0x02", Side::Buy, "0.0020", "5", OrderStatus::Pending, true).unwrap(),
//! ];
//! let rows = aggregate(&orders, Side::Buy);
//! assert_eq!(rows[1].fill_ratio, Decimal::new(5, 1));
//! ```

pub mod book;
pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod validation;

#[cfg(feature = "logging")]
pub mod telemetry;

// Re-exports for convenience
pub mod prelude {
    pub use crate::book::{aggregate, DisplayOrder, OrderBookView, SnapshotCache};
    pub use crate::domain::{
        ConfigError, Order, OrderId, OrderStatus, Side, TokenBalance, ValidationConstraints,
    };
    pub use crate::interfaces::{LoggingSubmitter, NoOpSubmitter, OrderSubmitter};
    pub use crate::numeric::{NumericError, NumericResult};
    pub use crate::validation::{
        check, order_total, submit, suggest_amount, suggest_price, validate, AmountPreset,
        ExpirationPreset, Field, OrderDescriptor, OrderInput, ValidationContext, ValidationErrors,
    };
}
