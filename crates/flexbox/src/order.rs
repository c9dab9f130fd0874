//! Ordering of children by their `order` value.

use log::debug;

/// Stable ordering key: `(order, original_index)`.
type OrderKey = (i32, usize);

/// Physical child indices sorted by `order`, ties kept in original index order.
pub fn sort_by_order_stable(orders: &[i32]) -> Vec<usize> {
    let mut keyed: Vec<OrderKey> = orders
        .iter()
        .copied()
        .enumerate()
        .map(|(original_index, order)| (order, original_index))
        .collect();
    keyed.sort_by_key(|key| key.0);
    keyed.into_iter().map(|(_, index)| index).collect()
}

/// Cached permutation plus the per-index order values it was computed from.
///
/// The permutation is rebuilt only when the child count or any child's order changed since
/// the previous pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderCache {
    orders: Vec<i32>,
    permutation: Vec<usize>,
    built: bool,
}

impl OrderCache {
    /// An empty cache that builds its permutation on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `orders` differs from the values the cached permutation was built from.
    pub fn is_stale(&self, orders: &[i32]) -> bool {
        !self.built || self.orders.as_slice() != orders
    }

    /// The ordering for `orders`, recomputed only if stale.
    pub fn permutation(&mut self, orders: &[i32]) -> &[usize] {
        if self.is_stale(orders) {
            self.permutation = sort_by_order_stable(orders);
            self.orders.clear();
            self.orders.extend_from_slice(orders);
            self.built = true;
            debug!(
                target: "flexbox::order",
                "rebuilt order permutation for {} children: {:?}",
                orders.len(),
                self.permutation
            );
        }
        &self.permutation
    }

    /// Forget the cached permutation.
    pub fn clear(&mut self) {
        self.orders.clear();
        self.permutation.clear();
        self.built = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if stable order sorting does not preserve input order for ties.
    fn stable_order_sorting() {
        assert_eq!(sort_by_order_stable(&[1, 0, 1, 0]), vec![1, 3, 0, 2]);
        assert_eq!(sort_by_order_stable(&[-2, 5, -2]), vec![0, 2, 1]);
        assert!(sort_by_order_stable(&[]).is_empty());
    }

    #[test]
    /// # Panics
    /// Panics if the cache does not detect order or child-count changes.
    fn cache_detects_changes() {
        let mut cache = OrderCache::new();
        assert!(cache.is_stale(&[]));
        assert_eq!(cache.permutation(&[2, 1, 1]), &[1, 2, 0]);
        assert!(!cache.is_stale(&[2, 1, 1]));
        assert!(cache.is_stale(&[2, 1, 3]));
        assert!(cache.is_stale(&[2, 1]));
        assert_eq!(cache.permutation(&[2, 1, 3]), &[1, 0, 2]);
        cache.clear();
        assert!(cache.is_stale(&[2, 1, 3]));
    }
}
