// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod balance;
pub mod config;
pub mod order;

pub use balance::TokenBalance;
pub use config::{ConfigError, ValidationConstraints};
pub use order::{Order, OrderId, OrderStatus, Side};

#[cfg(feature = "serde")]
pub use order::OrderRecord;
