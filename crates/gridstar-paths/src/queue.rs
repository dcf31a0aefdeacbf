//! Array-backed binary min-heap ordered by a caller-supplied comparison.

use std::cmp::Ordering;
use std::fmt;

/// A binary min-heap over `T`, ordered by `cmp`.
///
/// `pop` returns an element that compares `<=` every element still in the
/// queue. The order among equal elements is unspecified.
///
/// `cmp` must be a total order for as long as the queue lives. A
/// comparison that changes its mind produces a wrongly ordered queue, never
/// undefined behaviour.
pub struct PriorityQueue<T, F = fn(&T, &T) -> Ordering>
where
    F: Fn(&T, &T) -> Ordering,
{
    items: Vec<T>,
    cmp: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create an empty queue ordered by `cmp`.
    pub fn new(cmp: F) -> Self {
        Self {
            items: Vec::new(),
            cmp,
        }
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize, cmp: F) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Number of items in the queue.
    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The minimum item, if any.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Remove every item, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Insert `item`. O(log n).
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the minimum item. O(log n).
    pub fn pop(&mut self) -> Result<T, EmptyQueueError> {
        if self.items.is_empty() {
            return Err(EmptyQueueError);
        }
        let front = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(front)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if (self.cmp)(&self.items[parent], &self.items[i]) != Ordering::Greater {
                break;
            }
            self.items.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let mut child = 2 * i + 1;
            if child >= len {
                break;
            }
            let right = child + 1;
            if right < len && (self.cmp)(&self.items[child], &self.items[right]) == Ordering::Greater
            {
                child = right;
            }
            if (self.cmp)(&self.items[i], &self.items[child]) != Ordering::Greater {
                break;
            }
            self.items.swap(i, child);
            i = child;
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Returned by [`PriorityQueue::pop`] on an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pop from an empty priority queue")
    }
}

impl std::error::Error for EmptyQueueError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngExt, SeedableRng};

    fn min_queue() -> PriorityQueue<i32> {
        PriorityQueue::new(i32::cmp as fn(&i32, &i32) -> Ordering)
    }

    fn assert_heap<T, F: Fn(&T, &T) -> Ordering>(q: &PriorityQueue<T, F>) {
        for i in 1..q.items.len() {
            let parent = (i - 1) / 2;
            assert_ne!((q.cmp)(&q.items[parent], &q.items[i]), Ordering::Greater);
        }
    }

    #[test]
    fn pop_empty_fails() {
        let mut q = min_queue();
        assert_eq!(q.count(), 0);
        assert_eq!(q.pop(), Err(EmptyQueueError));
    }

    #[test]
    fn pops_in_ascending_order() {
        let mut q = min_queue();
        for v in [5, 3, 8, 1, 9, 2, 7] {
            q.push(v);
        }
        assert_eq!(q.count(), 7);
        assert_eq!(q.peek(), Some(&1));
        let mut out = Vec::new();
        while let Ok(v) = q.pop() {
            out.push(v);
        }
        assert_eq!(out, vec![1, 2, 3, 5, 7, 8, 9]);
        assert!(q.is_empty());
    }

    #[test]
    fn keeps_duplicates() {
        let mut q = min_queue();
        for v in [4, 4, 1, 4, 1] {
            q.push(v);
        }
        let out: Vec<_> = std::iter::from_fn(|| q.pop().ok()).collect();
        assert_eq!(out, vec![1, 1, 4, 4, 4]);
    }

    #[test]
    fn custom_order_max_heap() {
        let mut q = PriorityQueue::new(|a: &i32, b: &i32| b.cmp(a));
        for v in [1, 10, 5] {
            q.push(v);
        }
        assert_eq!(q.pop(), Ok(10));
        assert_eq!(q.pop(), Ok(5));
        assert_eq!(q.pop(), Ok(1));
    }

    #[test]
    fn orders_by_key_field() {
        let mut q = PriorityQueue::with_capacity(4, |a: &(f64, char), b: &(f64, char)| {
            a.0.total_cmp(&b.0)
        });
        q.push((2.5, 'c'));
        q.push((0.5, 'a'));
        q.push((1.5, 'b'));
        assert_eq!(q.pop().map(|x| x.1), Ok('a'));
        assert_eq!(q.pop().map(|x| x.1), Ok('b'));
        assert_eq!(q.pop().map(|x| x.1), Ok('c'));
    }

    #[test]
    fn clear_empties() {
        let mut q = min_queue();
        q.push(3);
        q.push(1);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.peek(), None);
    }

    #[test]
    fn random_interleaving_pops_minimum() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut q = min_queue();
        let mut shadow: Vec<i32> = Vec::new();
        for _ in 0..2000 {
            if shadow.is_empty() || rng.random_range(0..3) > 0 {
                let v = rng.random_range(-100..100);
                q.push(v);
                shadow.push(v);
            } else {
                let v = q.pop().unwrap();
                let min = *shadow.iter().min().unwrap();
                assert_eq!(v, min);
                let pos = shadow.iter().position(|&x| x == v).unwrap();
                shadow.swap_remove(pos);
            }
            assert_eq!(q.count(), shadow.len());
            assert_heap(&q);
        }
    }
}
