//! Bounded top-K container.
//!
//! Every trie node keeps one of these so that the ranking work is paid at
//! insertion time. The container is a min-heap of at most `capacity`
//! elements: the root of the heap is the worst element currently retained,
//! which is exactly the threshold a newcomer has to beat.
//!
//! Elements are ranked by their [`Ord`] implementation, greater is better.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Keeps the `capacity` greatest elements ever offered to it.
#[derive(Debug, Clone)]
pub struct TopK<T: Ord> {
    /// Min-heap (via `Reverse`) so `peek` yields the worst retained element
    heap: BinaryHeap<Reverse<T>>,
    /// Maximum number of retained elements (k)
    capacity: usize,
}

impl<T: Ord> TopK<T> {
    /// Create an empty container that retains at most `capacity` elements.
    ///
    /// A zero capacity is accepted here and simply rejects everything; the
    /// index validates its limit before building any node.
    pub fn new(capacity: usize) -> Self {
        Self {
            // Nodes are numerous and most of them stay small
            heap: BinaryHeap::new(),
            capacity,
        }
    }

    /// Offer an element.
    ///
    /// Below capacity the element is always kept. At capacity it replaces the
    /// current worst element only if it ranks strictly higher. Returns true if
    /// the element was retained.
    pub fn offer(&mut self, item: T) -> bool {
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(item));
            return true;
        }

        match self.heap.peek_mut() {
            Some(mut worst) if item > worst.0 => {
                // Replacing through PeekMut sifts down once instead of pop + push
                *worst = Reverse(item);
                true
            }
            _ => false,
        }
    }

    /// Check whether `item` would be retained if offered now.
    #[inline]
    pub fn would_accept(&self, item: &T) -> bool {
        if self.heap.len() < self.capacity {
            return true;
        }
        self.worst().is_some_and(|worst| item > worst)
    }

    /// The worst retained element, i.e. the admission threshold once full.
    #[inline]
    pub fn worst(&self) -> Option<&T> {
        self.heap.peek().map(|r| &r.0)
    }

    /// Retained elements, best first. Does not mutate the container.
    pub fn ranked(&self) -> Vec<&T> {
        let mut entries: Vec<&T> = self.heap.iter().map(|r| &r.0).collect();
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries
    }

    /// Consume the container and return its elements, best first.
    pub fn into_ranked(self) -> Vec<T> {
        // Ascending order of Reverse<T> is descending order of T
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|r| r.0)
            .collect()
    }

    /// Retained elements in heap order (unspecified).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.iter().map(|r| &r.0)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Check if the container is at capacity
    #[inline]
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_k_basic() {
        let mut top = TopK::new(3);

        assert!(top.is_empty());
        assert!(!top.is_full());
        assert_eq!(top.worst(), None);

        assert!(top.offer(1));
        assert!(top.offer(3));
        assert!(top.offer(2));

        // Now full, threshold is the minimum
        assert!(top.is_full());
        assert_eq!(top.worst(), Some(&1));

        // Something worse is discarded
        assert!(!top.offer(0));
        assert_eq!(top.len(), 3);

        // Something better evicts the lowest
        assert!(top.offer(4));
        assert_eq!(top.len(), 3);
        assert_eq!(top.worst(), Some(&2));

        assert_eq!(top.ranked(), vec![&4, &3, &2]);
        assert_eq!(top.into_ranked(), vec![4, 3, 2]);
    }

    #[test]
    fn test_equal_to_threshold_is_rejected() {
        let mut top = TopK::new(2);
        top.offer(5);
        top.offer(7);

        assert!(!top.would_accept(&5));
        assert!(!top.offer(5));
        assert_eq!(top.ranked(), vec![&7, &5]);
    }

    #[test]
    fn test_bounded_size() {
        let mut top = TopK::new(10);
        for i in 0..2000 {
            top.offer(i % 256);
            assert!(top.len() <= 10);
        }
        assert_eq!(top.len(), 10);
        assert_eq!(
            top.into_ranked(),
            vec![255, 255, 255, 255, 255, 255, 255, 254, 254, 254]
        );
    }

    #[test]
    fn test_keeps_largest() {
        let mut top = TopK::new(5);
        for i in [1, 5, 3, 8, 2, 9, 4, 7, 6, 10] {
            top.offer(i);
        }
        assert_eq!(top.into_ranked(), vec![10, 9, 8, 7, 6]);
    }

    #[test]
    fn test_ranked_does_not_mutate() {
        let mut top = TopK::new(4);
        for i in [4, -2, 9, 0, 3] {
            top.offer(i);
        }
        let first: Vec<i32> = top.ranked().into_iter().copied().collect();
        let second: Vec<i32> = top.ranked().into_iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![9, 4, 3, 0]);
        assert_eq!(top.len(), 4);
    }

    #[test]
    fn test_would_accept() {
        let mut top = TopK::new(2);
        assert!(top.would_accept(&-100));
        top.offer(10);
        top.offer(20);
        assert!(top.would_accept(&11));
        assert!(!top.would_accept(&10));
        assert!(!top.would_accept(&3));
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut top = TopK::new(0);
        assert!(top.is_full());
        assert!(!top.offer(1));
        assert!(top.ranked().is_empty());
    }
}
