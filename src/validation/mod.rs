// ============================================================================
// Validation Module
// Order form validation and entry helpers
// ============================================================================

mod engine;
mod errors;
mod presets;

pub use engine::{
    check, order_total, submit, validate, OrderDescriptor, OrderInput, ValidationContext,
};
pub use errors::{messages, Field, ValidationErrors};
pub use presets::{
    is_selectable_expiration, suggest_amount, suggest_price, AmountPreset, ExpirationPreset,
    SUGGESTED_AMOUNT_DP,
};
