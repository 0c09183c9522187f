// ============================================================================
// Order Domain Model
// ============================================================================

use crate::numeric::{checked_total, parse_decimal, NumericResult};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Opaque order identifier (a 0x order hash on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("buy"),
            Side::Sell => f.write_str("sell"),
        }
    }
}

// ============================================================================
// Order Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OrderStatus {
    /// Submitted and resting, or awaiting chain confirmation
    Pending,
    Completed,
    Canceled,
    Failed,
}

impl OrderStatus {
    /// Pending rows are drawn with a loading marker.
    pub fn is_pending(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Completed | OrderStatus::Canceled | OrderStatus::Failed
        )
    }
}

// ============================================================================
// Order View
// ============================================================================

/// Display/validation view of a single order.
///
/// `price`, `amount` and `total` are fixed at construction, so `total` can
/// never drift from `price × amount`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    price: Decimal,
    amount: Decimal,
    total: Decimal,
    pub status: OrderStatus,
    pub is_user: bool,
}

impl Order {
    /// Build an order view from exact decimals.
    ///
    /// # Errors
    /// Returns `Overflow` if `price × amount` is not representable.
    pub fn new(
        id: impl Into<OrderId>,
        side: Side,
        price: Decimal,
        amount: Decimal,
        status: OrderStatus,
        is_user: bool,
    ) -> NumericResult<Self> {
        let total = checked_total(price, amount)?;
        Ok(Self {
            id: id.into(),
            side,
            price,
            amount,
            total,
            status,
            is_user,
        })
    }

    /// Build an order view from the decimal strings carried by a snapshot.
    pub fn parse(
        id: impl Into<OrderId>,
        side: Side,
        price: &str,
        amount: &str,
        status: OrderStatus,
        is_user: bool,
    ) -> NumericResult<Self> {
        let price = parse_decimal(price)?;
        let amount = parse_decimal(amount)?;
        Self::new(id, side, price, amount, status, is_user)
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

// ============================================================================
// Wire Record
// ============================================================================

/// String-typed snapshot row as delivered by the order API.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub side: Side,
    pub price: String,
    pub amount: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub is_user: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<OrderRecord> for Order {
    type Error = crate::numeric::NumericError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        Order::parse(
            record.id,
            record.side,
            &record.price,
            &record.amount,
            record.status,
            record.is_user,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_creation() {
        let order = Order::new(
            "0xabc",
            Side::Buy,
            dec!(0.1),
            dec!(0.2),
            OrderStatus::Pending,
            true,
        )
        .unwrap();

        assert_eq!(order.id.as_str(), "0xabc");
        assert_eq!(order.total(), dec!(0.02));
        assert!(order.status.is_pending());
    }

    #[test]
    fn test_order_parse() {
        let order = Order::parse(
            "0xdef",
            Side::Sell,
            "250.5",
            "4",
            OrderStatus::Completed,
            false,
        )
        .unwrap();

        assert_eq!(order.price(), dec!(250.5));
        assert_eq!(order.total(), dec!(1002));
        assert!(order.status.is_terminal());
    }

    #[test]
    fn test_order_parse_rejects_malformed_amount() {
        let err = Order::parse("0x1", Side::Sell, "1", "1,5", OrderStatus::Pending, false)
            .unwrap_err();
        assert_eq!(err, NumericError::InvalidLiteral("1,5".to_string()));
    }

    #[test]
    fn test_status_classification() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(OrderStatus::Canceled.is_terminal());
        assert!(OrderStatus::Failed.is_terminal());
        assert!(!OrderStatus::Failed.is_pending());
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.to_string(), "sell");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_conversion() {
        let json = r#"{"id":"0x01","type":"sell","price":"0.5","amount":"3","status":"pending","isUser":true}"#;
        let record: OrderRecord = serde_json::from_str(json).unwrap();
        let order = Order::try_from(record).unwrap();
        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.total(), dec!(1.5));
        assert!(order.is_user);
    }
}
