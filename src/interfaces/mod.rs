// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod submission;

pub use submission::{LoggingSubmitter, NoOpSubmitter, OrderSubmitter};
