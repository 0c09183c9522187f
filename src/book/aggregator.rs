// ============================================================================
// Order Book Aggregator
// Derives fill-bar ratios for one side of an order book snapshot
// ============================================================================

use crate::domain::{Order, Side};
use crate::numeric::checked_ratio;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::Serialize;

/// An order row together with its fill-bar width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DisplayOrder {
    pub order: Order,
    /// `amount / max amount` of the rows passed in, in [0, 1]
    pub fill_ratio: Decimal,
}

impl DisplayOrder {
    /// Fill-bar width as a percentage.
    pub fn fill_percent(&self) -> Decimal {
        self.fill_ratio * Decimal::ONE_HUNDRED
    }
}

/// Compute fill ratios for `orders`, keeping their order.
///
/// The scale is the largest amount among the orders passed in, so the caller
/// decides whether that is the visible slice or the whole book. Sorting is
/// also left to the caller.
pub fn aggregate(orders: &[Order], side: Side) -> Vec<DisplayOrder> {
    let max_amount = max_amount(orders);

    let foreign = orders.iter().filter(|o| o.side != side).count();
    if foreign > 0 {
        tracing::debug!(%side, foreign, "aggregating orders from the other side");
    }

    tracing::trace!(%side, rows = orders.len(), %max_amount, "aggregating order book side");

    orders
        .iter()
        .map(|order| DisplayOrder {
            order: order.clone(),
            fill_ratio: fill_ratio(order.amount(), max_amount),
        })
        .collect()
}

/// Largest amount in `orders`, or zero when empty.
pub fn max_amount(orders: &[Order]) -> Decimal {
    orders
        .iter()
        .map(Order::amount)
        .max()
        .unwrap_or(Decimal::ZERO)
}

fn fill_ratio(amount: Decimal, max_amount: Decimal) -> Decimal {
    if max_amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    checked_ratio(amount, max_amount)
        .unwrap_or(Decimal::ZERO)
        .clamp(Decimal::ZERO, Decimal::ONE)
}
