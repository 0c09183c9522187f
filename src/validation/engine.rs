// ============================================================================
// Order Validation Engine
// Checks a buy/sell form entry against format, value and balance rules
// ============================================================================

use super::errors::{messages, Field, ValidationErrors};
use crate::domain::{Side, TokenBalance, ValidationConstraints};
use crate::interfaces::OrderSubmitter;
use crate::numeric::{checked_total, is_decimal_literal, parse_decimal, NumericError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Inputs
// ============================================================================

/// Raw order form values, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderInput {
    pub price: String,
    pub amount: String,
    #[cfg_attr(feature = "serde", serde(rename = "exp"))]
    pub expiration: Option<DateTime<Utc>>,
}

impl OrderInput {
    pub fn new(
        price: impl Into<String>,
        amount: impl Into<String>,
        expiration: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            price: price.into(),
            amount: amount.into(),
            expiration,
        }
    }
}

/// Account state and thresholds an order is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub side: Side,
    /// Spendable balance of the traded token (what a sell gives away)
    pub available_base_balance: Decimal,
    /// Spendable balance of the quote token (what a buy pays with)
    pub available_pair_balance: Decimal,
    pub constraints: ValidationConstraints,
}

impl ValidationContext {
    pub fn new(
        side: Side,
        available_base_balance: Decimal,
        available_pair_balance: Decimal,
        constraints: ValidationConstraints,
    ) -> Self {
        Self {
            side,
            available_base_balance,
            available_pair_balance,
            constraints,
        }
    }

    /// Context for trading `token` against `pair` with their spendable balances.
    pub fn from_balances(
        side: Side,
        token: &TokenBalance,
        pair: &TokenBalance,
        constraints: ValidationConstraints,
    ) -> Self {
        Self::new(side, token.available, pair.available, constraints)
    }
}

// ============================================================================
// Output
// ============================================================================

/// An order that passed every rule, ready for signing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderDescriptor {
    pub side: Side,
    pub price: Decimal,
    pub amount: Decimal,
    pub total: Decimal,
    pub expiration: DateTime<Utc>,
}

struct Priced {
    price: Decimal,
    amount: Decimal,
    total: Decimal,
}

// ============================================================================
// Rules
// ============================================================================

/// Validate an order form entry.
///
/// Every rule runs regardless of earlier failures so the form can show all
/// problems at once. Each field carries at most one message; when several
/// rules hit the same field the last one wins. An empty result means the
/// order can be submitted.
pub fn validate(input: &OrderInput, ctx: &ValidationContext) -> ValidationErrors {
    evaluate(input, ctx).0
}

/// Validate and, on success, return the exact order to submit.
pub fn check(
    input: &OrderInput,
    ctx: &ValidationContext,
) -> Result<OrderDescriptor, ValidationErrors> {
    let (errors, priced) = evaluate(input, ctx);

    match (errors.is_empty(), priced, input.expiration) {
        (true, Some(priced), Some(expiration)) => Ok(OrderDescriptor {
            side: ctx.side,
            price: priced.price,
            amount: priced.amount,
            total: priced.total,
            expiration,
        }),
        _ => Err(errors),
    }
}

/// Validate and hand the order to `submitter` when it passes.
pub fn submit(
    input: &OrderInput,
    ctx: &ValidationContext,
    submitter: &dyn OrderSubmitter,
) -> Result<OrderDescriptor, ValidationErrors> {
    let order = check(input, ctx)?;
    submitter.submit(order.clone());
    Ok(order)
}

/// Exact total for the form's "Total" readout.
pub fn order_total(price: &str, amount: &str) -> Result<Decimal, NumericError> {
    checked_total(parse_decimal(price)?, parse_decimal(amount)?)
}

fn evaluate(input: &OrderInput, ctx: &ValidationContext) -> (ValidationErrors, Option<Priced>) {
    let mut errors = ValidationErrors::new();

    if is_missing_or_zero(&input.amount) {
        errors.insert(Field::Amount, messages::MISSING_AMOUNT);
    }
    if is_missing_or_zero(&input.price) {
        errors.insert(Field::Price, messages::MISSING_PRICE);
    }
    if input.expiration.is_none() {
        errors.insert(Field::Expiration, messages::MISSING_EXPIRATION);
    }

    let price = parsed_number(&input.price, Field::Price, &mut errors);
    let amount = parsed_number(&input.amount, Field::Amount, &mut errors);

    // a zero amount keeps "Please enter amount"
    let priced = match (price, amount) {
        (Some(price), Some(amount)) if !amount.is_zero() => {
            check_value(price, amount, ctx, &mut errors)
        },
        _ => None,
    };

    tracing::debug!(
        side = %ctx.side,
        price = %input.price,
        amount = %input.amount,
        violations = errors.len(),
        "order input validated"
    );

    (errors, priced)
}

fn is_missing_or_zero(raw: &str) -> bool {
    raw.is_empty() || parse_decimal(raw).is_ok_and(|value| value.is_zero())
}

/// Format check. Returns the value of any literal that parses, including
/// zero and negatives, so the value rules still see it.
fn parsed_number(raw: &str, field: Field, errors: &mut ValidationErrors) -> Option<Decimal> {
    if raw.is_empty() {
        return None;
    }
    if !is_decimal_literal(raw) {
        errors.insert(field, messages::ONLY_NUMBERS);
        return None;
    }

    match parse_decimal(raw) {
        Ok(value) => {
            if value.is_sign_negative() && !value.is_zero() {
                errors.insert(field, messages::NOT_POSITIVE);
            }
            Some(value)
        },
        Err(e) => {
            tracing::trace!(%field, error = %e, "rejecting literal");
            errors.insert(field, messages::OUT_OF_RANGE);
            None
        },
    }
}

fn check_value(
    price: Decimal,
    amount: Decimal,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Option<Priced> {
    let total = match checked_total(price, amount) {
        Ok(total) => total,
        Err(_) => {
            errors.insert(Field::Amount, messages::ORDER_TOO_BIG);
            return None;
        },
    };

    if total < ctx.constraints.min_order_value {
        errors.insert(Field::Amount, messages::ORDER_TOO_SMALL);
    }
    if total > ctx.constraints.max_order_value {
        errors.insert(Field::Amount, messages::ORDER_TOO_BIG);
    }

    let insufficient = match ctx.side {
        Side::Sell => amount > ctx.available_base_balance,
        Side::Buy => total > ctx.available_pair_balance,
    };
    if insufficient {
        errors.insert(Field::Amount, messages::INSUFFICIENT_BALANCE);
    }

    let positive = price > Decimal::ZERO && amount > Decimal::ZERO;
    positive.then_some(Priced {
        price,
        amount,
        total,
    })
}
