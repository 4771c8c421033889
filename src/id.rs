//! Monotonic identifier allocation.

use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out increasing integer ids (node ids, unique names).
///
/// There is no global instance: whoever needs ids owns an allocator and
/// passes it along. Safe to share between threads.
#[derive(Debug)]
pub struct IdAllocator {
    last: AtomicI64,
}

impl IdAllocator {
    /// The conventional starting point; the first id handed out is 1001.
    pub const DEFAULT_START: i64 = 1000;

    /// Allocator whose first id is `start + 1`.
    pub fn new(start: i64) -> Self {
        log::debug!("id allocator starting after {start}");
        IdAllocator {
            last: AtomicI64::new(start),
        }
    }

    /// Next id. Wraps around past `i64::MAX`, as the counter itself does.
    pub fn next(&self) -> i64 {
        self.last.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// The most recently allocated id (or the start value).
    pub fn current(&self) -> i64 {
        self.last.load(Ordering::Relaxed)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        IdAllocator::new(Self::DEFAULT_START)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn starts_after_initial_value() {
        let ids = IdAllocator::default();
        assert_eq!(ids.current(), 1000);
        assert_eq!(ids.next(), 1001);
        assert_eq!(ids.next(), 1002);
        assert_eq!(ids.current(), 1002);
    }

    #[test]
    fn independent_allocators() {
        let a = IdAllocator::new(0);
        let b = IdAllocator::new(0);
        assert_eq!(a.next(), 1);
        assert_eq!(a.next(), 2);
        assert_eq!(b.next(), 1);
    }

    #[test]
    fn wraps_at_the_top_of_the_range() {
        let ids = IdAllocator::new(i64::MAX - 1);
        assert_eq!(ids.next(), i64::MAX);
        assert_eq!(ids.next(), i64::MIN);
        assert_eq!(ids.current(), i64::MIN);
    }

    #[test]
    fn unique_across_threads() {
        let ids = IdAllocator::new(0);
        let mut all = HashSet::new();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| (0..250).map(|_| ids.next()).collect::<Vec<_>>()))
                .collect();
            for handle in handles {
                all.extend(handle.join().unwrap());
            }
        });
        assert_eq!(all.len(), 1000);
        assert_eq!(ids.current(), 1000);
    }
}
