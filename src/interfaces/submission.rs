// ============================================================================
// Order Submission Interface
// Contract for the collaborator that signs and broadcasts validated orders
// ============================================================================

use crate::validation::OrderDescriptor;

/// Receives orders that passed validation.
/// Implementations hand the order to a wallet for signing and broadcast.
pub trait OrderSubmitter: Send + Sync {
    /// Handle a validated order
    fn submit(&self, order: OrderDescriptor);
}

/// No-op submitter for testing
pub struct NoOpSubmitter;

impl OrderSubmitter for NoOpSubmitter {
    fn submit(&self, _order: OrderDescriptor) {
        // Do nothing
    }
}

/// Logging submitter
pub struct LoggingSubmitter;

impl OrderSubmitter for LoggingSubmitter {
    fn submit(&self, order: OrderDescriptor) {
        tracing::info!(
            side = %order.side,
            price = %order.price,
            amount = %order.amount,
            total = %order.total,
            expiration = %order.expiration,
            "order ready for signing"
        );
    }
}
