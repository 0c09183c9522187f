// ============================================================================
// Snapshot Cache
// Reuses the last aggregation per side while the snapshot is unchanged
// ============================================================================

use super::aggregator::{aggregate, DisplayOrder};
use crate::domain::{Order, Side};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

struct Entry {
    input: Vec<Order>,
    rows: Arc<[DisplayOrder]>,
}

/// Memoizes [`aggregate`] for the most recent snapshot of each side.
///
/// A hit requires the new snapshot to be equal to the cached one, so the
/// result is always what a fresh call would produce.
#[derive(Default)]
pub struct SnapshotCache {
    buys: Mutex<Option<Entry>>,
    sells: Mutex<Option<Entry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aggregate(&self, orders: &[Order], side: Side) -> Arc<[DisplayOrder]> {
        let slot = match side {
            Side::Buy => &self.buys,
            Side::Sell => &self.sells,
        };

        let mut entry = slot.lock();
        if let Some(cached) = entry.as_ref().filter(|cached| cached.input == orders) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(&cached.rows);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let rows: Arc<[DisplayOrder]> = aggregate(orders, side).into();
        *entry = Some(Entry {
            input: orders.to_vec(),
            rows: Arc::clone(&rows),
        });
        rows
    }

    /// Drop both cached sides.
    pub fn clear(&self) {
        *self.buys.lock() = None;
        *self.sells.lock() = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderStatus;
    use rust_decimal_macros::dec;
    use std::thread;

    fn book() -> Vec<Order> {
        vec![
            Order::new("a", Side::Buy, dec!(10), dec!(3), OrderStatus::Pending, false).unwrap(),
            Order::new("b", Side::Buy, dec!(9), dec!(6), OrderStatus::Pending, true).unwrap(),
        ]
    }

    #[test]
    fn test_hit_matches_fresh_aggregation() {
        let cache = SnapshotCache::new();
        let orders = book();

        let first = cache.aggregate(&orders, Side::Buy);
        let second = cache.aggregate(&orders, Side::Buy);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(&*second, aggregate(&orders, Side::Buy).as_slice());
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_changed_snapshot_recomputes() {
        let cache = SnapshotCache::new();
        let mut orders = book();
        cache.aggregate(&orders, Side::Buy);

        orders[0] =
            Order::new("a", Side::Buy, dec!(10), dec!(12), OrderStatus::Pending, false).unwrap();
        let rows = cache.aggregate(&orders, Side::Buy);

        assert_eq!(rows[0].fill_ratio, dec!(1));
        assert_eq!(rows[1].fill_ratio, dec!(0.5));
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_equal_snapshot_from_new_allocation_hits() {
        let cache = SnapshotCache::new();
        cache.aggregate(&book(), Side::Buy);
        cache.aggregate(&book(), Side::Buy);

        // same length, different total
        let mut resized = book();
        resized[1] =
            Order::new("b", Side::Buy, dec!(9), dec!(6.5), OrderStatus::Pending, true).unwrap();
        cache.aggregate(&resized, Side::Buy);

        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_sides_cached_independently() {
        let cache = SnapshotCache::new();
        let orders = book();

        cache.aggregate(&orders, Side::Buy);
        cache.aggregate(&[], Side::Sell);
        cache.aggregate(&orders, Side::Buy);

        assert_eq!(cache.hits(), 1);

        cache.clear();
        cache.aggregate(&orders, Side::Buy);
        assert_eq!(cache.misses(), 3);
    }

    #[test]
    fn test_shared_across_threads() {
        let cache = Arc::new(SnapshotCache::new());
        let orders = Arc::new(book());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let orders = Arc::clone(&orders);
                thread::spawn(move || cache.aggregate(&orders, Side::Buy).to_vec())
            })
            .collect();

        let expected = aggregate(&orders, Side::Buy);
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
        assert_eq!(cache.hits() + cache.misses(), 4);
    }
}
