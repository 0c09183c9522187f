// ============================================================================
// Order Book View
// Both sides of a snapshot, sorted for display and aggregated
// ============================================================================

use super::aggregator::{aggregate, DisplayOrder};
use crate::domain::{Order, Side};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Sort one side for the order book table.
///
/// Both sides list the highest price first. The sell table is anchored to
/// its bottom edge, so the best ask ends up next to the best bid in the
/// middle of the widget. Equal prices keep their incoming order.
pub fn sort_for_display(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.price().cmp(&a.price()));
}

/// Display-ready order book built from one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OrderBookView {
    /// Sell rows, highest price first
    pub sells: Vec<DisplayOrder>,
    /// Buy rows, highest price first
    pub buys: Vec<DisplayOrder>,
}

impl OrderBookView {
    /// Split a mixed snapshot by side, sort each for display and derive
    /// fill ratios per side.
    pub fn from_snapshot(orders: impl IntoIterator<Item = Order>) -> Self {
        let (mut sells, mut buys): (Vec<Order>, Vec<Order>) = orders
            .into_iter()
            .partition(|order| order.side == Side::Sell);

        sort_for_display(&mut sells);
        sort_for_display(&mut buys);

        tracing::debug!(
            sells = sells.len(),
            buys = buys.len(),
            "order book snapshot aggregated"
        );

        Self {
            sells: aggregate(&sells, Side::Sell),
            buys: aggregate(&buys, Side::Buy),
        }
    }

    pub fn side(&self, side: Side) -> &[DisplayOrder] {
        match side {
            Side::Buy => &self.buys,
            Side::Sell => &self.sells,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sells.is_empty() && self.buys.is_empty()
    }

    /// Highest buy price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.buys.first().map(|row| row.order.price())
    }

    /// Lowest sell price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.sells.last().map(|row| row.order.price())
    }

    /// Current spread (ask - bid)
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Rows belonging to the viewing account, sells first.
    pub fn user_orders(&self) -> impl Iterator<Item = &DisplayOrder> {
        self.sells
            .iter()
            .chain(self.buys.iter())
            .filter(|row| row.order.is_user)
    }
}
