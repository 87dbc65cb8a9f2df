//! Category Lock Registry
//!
//! Hands out one lock per category name. Entries are created on first use
//! and live as long as the registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::debug;

/// Shared handle serializing writes to one category's file.
pub type CategoryLock = Arc<Mutex<()>>;

/// Map from category name to its lock.
///
/// The map has its own `RwLock`, separate from the category locks it vends,
/// so that two threads racing on a new name always receive the same handle.
#[derive(Debug, Default)]
pub struct CategoryLockRegistry {
    locks: RwLock<BTreeMap<String, CategoryLock>>,
}

impl CategoryLockRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            locks: RwLock::new(BTreeMap::new()),
        }
    }

    /// Return the lock for `category`, creating it if absent.
    pub fn get_or_create(&self, category: &str) -> CategoryLock {
        {
            let locks = self.locks.read();
            if let Some(lock) = locks.get(category) {
                return Arc::clone(lock);
            }
        }

        // Re-check under the write lock: another thread may have inserted it
        let mut locks = self.locks.write();
        let lock = locks.entry(category.to_string()).or_insert_with(|| {
            debug!(category, "created category lock");
            Arc::new(Mutex::new(()))
        });
        Arc::clone(lock)
    }

    /// Whether a lock exists for `category`.
    pub fn contains(&self, category: &str) -> bool {
        self.locks.read().contains_key(category)
    }

    /// Number of categories seen.
    pub fn len(&self) -> usize {
        self.locks.read().len()
    }

    /// Whether no category has been used yet.
    pub fn is_empty(&self) -> bool {
        self.locks.read().is_empty()
    }

    /// Category names in sorted order.
    pub fn categories(&self) -> Vec<String> {
        self.locks.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_same_category_same_lock() {
        let registry = CategoryLockRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("System"));

        let a = registry.get_or_create("System");
        let b = registry.get_or_create("System");
        let c = registry.get_or_create("Battle");

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("System"));
        assert!(!registry.contains("Memory"));
        assert_eq!(registry.categories(), vec!["Battle".to_string(), "System".to_string()]);
    }

    #[test]
    fn test_racing_creators_converge() {
        let registry = Arc::new(CategoryLockRegistry::new());
        let barrier = Arc::new(Barrier::new(100));

        let handles: Vec<_> = (0..100)
            .map(|_| {
                let registry = registry.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    registry.get_or_create("Raid")
                })
            })
            .collect();

        let locks: Vec<CategoryLock> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(registry.len(), 1);
        assert!(locks.iter().all(|lock| Arc::ptr_eq(lock, &locks[0])));
    }

    #[test]
    fn test_distinct_categories_do_not_contend() {
        let registry = CategoryLockRegistry::new();
        let system = registry.get_or_create("System");
        let battle = registry.get_or_create("Battle");

        let _held = system.lock();
        // Holding one category never blocks another
        assert!(battle.try_lock().is_some());
        assert!(system.try_lock().is_none());
    }
}
