// ============================================================================
// Token Balance
// Wallet balance of one token as shown to the trader
// ============================================================================

use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Balance of a single token held by the viewing account.
///
/// `available` is what can still be committed to new orders; the rest of
/// `full_balance` is locked in resting orders.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TokenBalance {
    pub symbol: String,
    pub name: String,
    pub full_balance: Decimal,
    pub available: Decimal,
    is_tradable: bool,
}

impl TokenBalance {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        full_balance: Decimal,
        available: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            full_balance,
            available,
            is_tradable: false,
        }
    }

    /// Builder method: start out already unlocked
    pub fn tradable(mut self) -> Self {
        self.is_tradable = true;
        self
    }

    /// Amount committed to resting orders.
    pub fn reserved_in_orders(&self) -> Decimal {
        self.full_balance - self.available
    }

    pub fn is_tradable(&self) -> bool {
        self.is_tradable
    }

    /// Mark the token as approved for trading.
    ///
    /// There is no way back: the balance switch only ever fires the unlock
    /// action. Returns true if the flag changed.
    pub fn unlock(&mut self) -> bool {
        if self.is_tradable {
            return false;
        }
        tracing::debug!(symbol = %self.symbol, "token unlocked for trading");
        self.is_tradable = true;
        true
    }
}
