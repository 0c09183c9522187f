// ============================================================================
// Order Entry Presets
// Quick-fill values offered next to the amount and expiration fields
// ============================================================================

use super::engine::ValidationContext;
use crate::book::OrderBookView;
use crate::domain::Side;
use chrono::{DateTime, Duration, Months, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Token amounts are never suggested with more places than an ERC-20 holds.
pub const SUGGESTED_AMOUNT_DP: u32 = 18;

/// Share of the spendable balance to fill into the amount field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountPreset {
    Quarter,
    Half,
    ThreeQuarters,
    Full,
}

impl AmountPreset {
    pub fn coefficient(&self) -> Decimal {
        match self {
            AmountPreset::Quarter => Decimal::new(25, 2),
            AmountPreset::Half => Decimal::new(50, 2),
            AmountPreset::ThreeQuarters => Decimal::new(75, 2),
            AmountPreset::Full => Decimal::ONE,
        }
    }
}

/// Amount that commits `preset` of the relevant spendable balance.
///
/// A sell spends the base token directly. A buy spends the pair token, so
/// the amount is that balance share divided by `price`, rounded down so the
/// resulting total never exceeds the balance. Returns `None` for a buy
/// without a positive price.
pub fn suggest_amount(
    preset: AmountPreset,
    price: Decimal,
    ctx: &ValidationContext,
) -> Option<Decimal> {
    let coef = preset.coefficient();
    let amount = match ctx.side {
        Side::Sell => ctx.available_base_balance.checked_mul(coef)?,
        Side::Buy => {
            if price <= Decimal::ZERO {
                return None;
            }
            ctx.available_pair_balance
                .checked_mul(coef)?
                .checked_div(price)?
        },
    };

    Some(
        amount
            .round_dp_with_strategy(SUGGESTED_AMOUNT_DP, RoundingStrategy::ToZero)
            .normalize(),
    )
}

/// Price that trades immediately against the book.
///
/// A buy is filled at the best ask and a sell at the best bid. Returns `None`
/// when the opposite side of the book is empty.
pub fn suggest_price(view: &OrderBookView, side: Side) -> Option<Decimal> {
    match side {
        Side::Buy => view.best_ask(),
        Side::Sell => view.best_bid(),
    }
}

/// Expiration shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirationPreset {
    Day,
    Week,
    Month,
}

impl ExpirationPreset {
    pub fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            ExpirationPreset::Day => now + Duration::days(1),
            ExpirationPreset::Week => now + Duration::days(7),
            ExpirationPreset::Month => now
                .checked_add_months(Months::new(1))
                .unwrap_or(now + Duration::days(30)),
        }
    }
}

/// Only dates after the current (UTC) day can be picked as expiration.
pub fn is_selectable_expiration(candidate: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    candidate.date_naive() > now.date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Order, OrderStatus, ValidationConstraints};
    use crate::validation::{validate, OrderInput};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn ctx(side: Side, base: Decimal, pair: Decimal) -> ValidationContext {
        ValidationContext::new(side, base, pair, ValidationConstraints::unbounded())
    }

    #[test]
    fn test_sell_presets_scale_base_balance() {
        let ctx = ctx(Side::Sell, dec!(8), dec!(0));
        assert_eq!(suggest_amount(AmountPreset::Quarter, dec!(3), &ctx), Some(dec!(2)));
        assert_eq!(suggest_amount(AmountPreset::Half, dec!(3), &ctx), Some(dec!(4)));
        assert_eq!(
            suggest_amount(AmountPreset::ThreeQuarters, dec!(3), &ctx),
            Some(dec!(6))
        );
        assert_eq!(suggest_amount(AmountPreset::Full, dec!(3), &ctx), Some(dec!(8)));
    }

    #[test]
    fn test_buy_preset_divides_by_price() {
        let ctx = ctx(Side::Buy, dec!(0), dec!(1));
        assert_eq!(suggest_amount(AmountPreset::Half, dec!(0.25), &ctx), Some(dec!(2)));
        assert_eq!(suggest_amount(AmountPreset::Full, dec!(0), &ctx), None);
    }

    #[test]
    fn test_full_buy_suggestion_passes_validation() {
        let ctx = ctx(Side::Buy, dec!(0), dec!(1));
        let amount = suggest_amount(AmountPreset::Full, dec!(3), &ctx).unwrap();
        assert_eq!(amount, dec!(0.333333333333333333));

        let expiry = Utc.with_ymd_and_hms(2031, 6, 1, 12, 0, 0).unwrap();
        let input = OrderInput::new("3", amount.to_string(), Some(expiry));
        assert!(validate(&input, &ctx).is_empty());
    }

    fn resting(id: &str, side: Side, price: Decimal) -> Order {
        Order::new(id, side, price, dec!(5), OrderStatus::Pending, false).unwrap()
    }

    #[test]
    fn test_price_presets_take_top_of_book() {
        let view = OrderBookView::from_snapshot(vec![
            resting("s1", Side::Sell, dec!(0.0031)),
            resting("s2", Side::Sell, dec!(0.003)),
            resting("b1", Side::Buy, dec!(0.0028)),
            resting("b2", Side::Buy, dec!(0.0029)),
        ]);

        assert_eq!(suggest_price(&view, Side::Buy), Some(dec!(0.003)));
        assert_eq!(suggest_price(&view, Side::Sell), Some(dec!(0.0029)));
    }

    #[test]
    fn test_price_preset_needs_opposite_side() {
        let only_bids = OrderBookView::from_snapshot(vec![resting("b1", Side::Buy, dec!(2))]);

        assert_eq!(suggest_price(&only_bids, Side::Buy), None);
        assert_eq!(suggest_price(&only_bids, Side::Sell), Some(dec!(2)));
        assert_eq!(suggest_price(&OrderBookView::default(), Side::Sell), None);
    }

    #[test]
    fn test_expiration_presets() {
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 10, 0, 0).unwrap();
        assert_eq!(
            ExpirationPreset::Day.expires_at(now),
            Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap()
        );
        assert_eq!(
            ExpirationPreset::Week.expires_at(now),
            Utc.with_ymd_and_hms(2024, 2, 7, 10, 0, 0).unwrap()
        );
        // clamps to the last day of February
        assert_eq!(
            ExpirationPreset::Month.expires_at(now),
            Utc.with_ymd_and_hms(2024, 2, 29, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_selectable_expiration() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 9, 30, 0).unwrap();
        assert!(!is_selectable_expiration(
            Utc.with_ymd_and_hms(2024, 5, 10, 23, 59, 0).unwrap(),
            now
        ));
        assert!(!is_selectable_expiration(
            Utc.with_ymd_and_hms(2024, 5, 9, 12, 0, 0).unwrap(),
            now
        ));
        assert!(is_selectable_expiration(
            Utc.with_ymd_and_hms(2024, 5, 11, 0, 0, 0).unwrap(),
            now
        ));
        assert!(is_selectable_expiration(ExpirationPreset::Day.expires_at(now), now));
    }
}
