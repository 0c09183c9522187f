// ============================================================================
// Validation Configuration
// Order-value thresholds applied to every order entered in the frontend
// ============================================================================

use rust_decimal::Decimal;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised when building or loading a `ValidationConstraints`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum order value cannot be negative (got {0})")]
    NegativeMinimum(Decimal),

    #[error("minimum order value {min} exceeds maximum {max}")]
    InvertedBounds { min: Decimal, max: Decimal },

    #[cfg(feature = "serde")]
    #[error("malformed constraints document: {0}")]
    Malformed(String),
}

// ============================================================================
// Validation Constraints
// ============================================================================

/// Bounds on an order's total (`price × amount`), in units of the pair token.
///
/// Passed explicitly into validation; the engine never reads thresholds from
/// process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValidationConstraints {
    /// Totals strictly below this are rejected as too small
    pub min_order_value: Decimal,

    /// Totals strictly above this are rejected as too big
    pub max_order_value: Decimal,
}

impl ValidationConstraints {
    /// Create constraints with explicit bounds
    pub fn new(min_order_value: Decimal, max_order_value: Decimal) -> Self {
        Self {
            min_order_value,
            max_order_value,
        }
    }

    /// Builder method: Set the smallest accepted total
    pub fn with_min_order_value(mut self, min: Decimal) -> Self {
        self.min_order_value = min;
        self
    }

    /// Builder method: Set the largest accepted total
    pub fn with_max_order_value(mut self, max: Decimal) -> Self {
        self.max_order_value = max;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_order_value < Decimal::ZERO {
            return Err(ConfigError::NegativeMinimum(self.min_order_value));
        }

        if self.min_order_value > self.max_order_value {
            return Err(ConfigError::InvertedBounds {
                min: self.min_order_value,
                max: self.max_order_value,
            });
        }

        Ok(())
    }

    /// Load and validate constraints from a JSON document such as
    /// `{"minOrderValue": "0.0001", "maxOrderValue": "1000"}`.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let constraints: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        constraints.validate()?;
        tracing::debug!(
            min = %constraints.min_order_value,
            max = %constraints.max_order_value,
            "loaded validation constraints"
        );
        Ok(constraints)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ValidationConstraints {
    /// Thresholds used for WETH-quoted pairs
    /// - Smallest total: 0.000001 WETH
    /// - Biggest total: 1000 WETH
    pub fn weth_pairs() -> Self {
        Self::new(Decimal::new(1, 6), Decimal::from(1000))
    }

    /// No bounds beyond non-negativity; useful for tests and simulations
    pub fn unbounded() -> Self {
        Self::new(Decimal::ZERO, Decimal::MAX)
    }
}

impl Default for ValidationConstraints {
    fn default() -> Self {
        Self::weth_pairs()
    }
}
