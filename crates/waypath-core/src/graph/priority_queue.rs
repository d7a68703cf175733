//! Indexed binary min-heap
//!
//! Unlike `std::collections::BinaryHeap`, every queued element can be found
//! in O(1) and re-prioritised in O(log n), which is what shortest-path
//! relaxation needs. Elements must be unique; see [`PriorityQueue::insert`].

use std::collections::HashMap;
use std::hash::Hash;

/// Min-priority queue over unique elements `K` ordered by priority `P`
#[derive(Debug, Clone)]
pub struct PriorityQueue<K, P> {
    /// Complete binary tree; children of slot `i` live at `2i + 1` and `2i + 2`
    heap: Vec<K>,
    position: HashMap<K, usize>,
    priority: HashMap<K, P>,
}

impl<K, P> Default for PriorityQueue<K, P> {
    fn default() -> Self {
        Self {
            heap: Vec::new(),
            position: HashMap::new(),
            priority: HashMap::new(),
        }
    }
}

impl<K, P> PriorityQueue<K, P>
where
    K: Eq + Hash + Clone,
    P: Ord,
{
    /// Build a queue by inserting each `(element, priority)` pair in turn
    pub fn new(entries: impl IntoIterator<Item = (K, P)>) -> Self {
        let mut queue = Self::default();
        for (elt, priority) in entries {
            queue.insert(elt, priority);
        }
        queue
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn contains(&self, elt: &K) -> bool {
        self.position.contains_key(elt)
    }

    /// Current priority of a queued element
    pub fn priority(&self, elt: &K) -> Option<&P> {
        self.priority.get(elt)
    }

    /// Minimum element without removing it
    pub fn peek(&self) -> Option<&K> {
        self.heap.first()
    }

    /// Append `elt` and sift it up to its place.
    ///
    /// `elt` must not already be queued. Inserting a duplicate is undefined
    /// behaviour for the queue: the position index is left pointing at only
    /// one of the copies, so later `update_priority` and `extract_min` calls
    /// may return elements out of order. Debug builds panic instead.
    pub fn insert(&mut self, elt: K, priority: P) {
        debug_assert!(
            !self.position.contains_key(&elt),
            "element queued twice in PriorityQueue"
        );
        let slot = self.heap.len();
        self.position.insert(elt.clone(), slot);
        self.priority.insert(elt.clone(), priority);
        self.heap.push(elt);
        self.sift_up(slot);
    }

    /// Remove and return the minimum-priority element
    pub fn extract_min(&mut self) -> Option<K> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let min = self.heap.pop()?;
        self.position.remove(&min);
        self.priority.remove(&min);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Change the priority of a queued element in either direction.
    ///
    /// Returns `false` without touching the queue when `elt` is not queued.
    pub fn update_priority(&mut self, elt: &K, priority: P) -> bool {
        let Some(&slot) = self.position.get(elt) else {
            return false;
        };
        if let Some(current) = self.priority.get_mut(elt) {
            *current = priority;
        }

        // Only one of the two passes can move the element
        let slot = self.sift_up(slot);
        self.sift_down(slot);
        true
    }

    /// Move the element at `slot` toward the root while its parent is
    /// strictly greater. Returns the final slot.
    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.priority_at(slot) < self.priority_at(parent) {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
        slot
    }

    /// Move the element at `slot` toward the leaves. Among equal children the
    /// left one is preferred.
    fn sift_down(&mut self, mut slot: usize) -> usize {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            let child = if right < len && self.priority_at(right) < self.priority_at(left) {
                right
            } else {
                left
            };

            if self.priority_at(child) < self.priority_at(slot) {
                self.swap(slot, child);
                slot = child;
            } else {
                break;
            }
        }
        slot
    }

    /// Exchange two heap slots, keeping the position index in step
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.position.insert(self.heap[a].clone(), a);
        self.position.insert(self.heap[b].clone(), b);
    }

    fn priority_at(&self, slot: usize) -> &P {
        &self.priority[&self.heap[slot]]
    }

    /// True when every parent's priority is <= its children's
    #[cfg(test)]
    pub(crate) fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|slot| self.priority_at((slot - 1) / 2) <= self.priority_at(slot))
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(slot, elt)| self.position.get(elt) == Some(&slot))
    }
}
