// ============================================================================
// Order Book Module
// Turns order-book snapshots into display rows
// ============================================================================

mod aggregator;
mod cache;
mod view;

pub use aggregator::{aggregate, max_amount, DisplayOrder};
pub use cache::SnapshotCache;
pub use view::{sort_for_display, OrderBookView};
