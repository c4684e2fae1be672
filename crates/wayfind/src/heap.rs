//! Array-backed d-ary heap with in-place update.
//!
//! [`Heap`] is ordered by a caller-supplied predicate `before(a, b)` that
//! returns `true` when `a` must pop before `b`. Besides `insert` and
//! `pop_best` it supports [`update_at`](Heap::update_at), which overwrites a
//! slot and restores heap order; this is the decrease-key primitive used for
//! relaxation.
//!
//! The heap knows nothing about what it stores. Callers that need to know
//! where an element currently lives plug in a [`SlotObserver`], which is
//! told about every slot change.

/// Receives a notification whenever an element lands in a heap slot or
/// leaves the heap.
pub trait SlotObserver<T> {
    /// `item` now lives at `slot`.
    fn placed(&mut self, item: &T, slot: usize);

    /// `item` has been removed from the heap.
    fn removed(&mut self, item: &T);
}

/// No-op observer.
impl<T> SlotObserver<T> for () {
    #[inline]
    fn placed(&mut self, _item: &T, _slot: usize) {}

    #[inline]
    fn removed(&mut self, _item: &T) {}
}

/// Branch factor of a classic binary heap.
pub const BINARY: usize = 2;

/// A d-ary heap ordered by the predicate `F`, optionally observed by `O`.
#[derive(Clone)]
pub struct Heap<T, F, O = ()> {
    items: Vec<T>,
    before: F,
    branch: usize,
    observer: O,
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create an empty binary heap.
    pub fn new(before: F) -> Self {
        Self::with_branch_factor(BINARY, before)
    }

    /// Create an empty heap where every node has up to `branch` children.
    ///
    /// # Panics
    ///
    /// Panics if `branch < 2`.
    pub fn with_branch_factor(branch: usize, before: F) -> Self {
        Self::with_observer(branch, before, ())
    }

    /// Heapify `items` in linear time.
    pub fn from_unordered(items: Vec<T>, before: F) -> Self {
        let mut heap = Self::new(before);
        heap.build(items);
        heap
    }
}

impl<T, F, O> Heap<T, F, O>
where
    F: Fn(&T, &T) -> bool,
    O: SlotObserver<T>,
{
    /// Create an empty heap reporting slot changes to `observer`.
    ///
    /// # Panics
    ///
    /// Panics if `branch < 2`.
    pub fn with_observer(branch: usize, before: F, observer: O) -> Self {
        assert!(branch >= 2, "heap branch factor must be at least 2, got {branch}");
        Self {
            items: Vec::new(),
            before,
            branch,
            observer,
        }
    }

    /// Number of children per node.
    #[inline]
    pub fn branch_factor(&self) -> usize {
        self.branch
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element that would be returned by the next `pop_best`.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Elements in slot order (not pop order).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Slot of the first element matching `pred`, by linear scan.
    pub fn position_of(&self, pred: impl Fn(&T) -> bool) -> Option<usize> {
        self.items.iter().position(pred)
    }

    /// Add an element. O(log n).
    pub fn insert(&mut self, item: T) {
        let slot = self.items.len();
        self.items.push(item);
        self.observer.placed(&self.items[slot], slot);
        self.sift_up(slot);
    }

    /// Remove and return the best element, or `None` when empty. O(log n).
    pub fn pop_best(&mut self) -> Option<T> {
        let last = self.items.len().checked_sub(1)?;
        if last > 0 {
            self.swap_slots(0, last);
        }
        let best = self.items.pop()?;
        self.observer.removed(&best);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some(best)
    }

    /// Overwrite slot `slot` with `item` and restore heap order. O(log n).
    ///
    /// Returns the slot where `item` ends up.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of bounds.
    pub fn update_at(&mut self, slot: usize, item: T) -> usize {
        assert!(
            slot < self.items.len(),
            "heap slot {slot} out of bounds (len {})",
            self.items.len()
        );
        let old = std::mem::replace(&mut self.items[slot], item);
        self.observer.removed(&old);
        self.observer.placed(&self.items[slot], slot);
        if slot > 0 && (self.before)(&self.items[slot], &self.items[self.parent(slot)]) {
            self.sift_up(slot)
        } else {
            self.sift_down(slot)
        }
    }

    /// Replace the contents with `items` and heapify bottom-up. O(n).
    pub fn build(&mut self, items: Vec<T>) {
        self.clear();
        self.items = items;
        for (slot, item) in self.items.iter().enumerate() {
            self.observer.placed(item, slot);
        }
        if self.items.len() < 2 {
            return;
        }
        let last_internal = self.parent(self.items.len() - 1);
        for slot in (0..=last_internal).rev() {
            self.sift_down(slot);
        }
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        for item in self.items.drain(..) {
            self.observer.removed(&item);
        }
    }

    /// Consume the heap, returning elements in slot order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Whether every element is not ordered before its parent.
    pub fn is_valid(&self) -> bool {
        (1..self.items.len())
            .all(|i| !(self.before)(&self.items[i], &self.items[self.parent(i)]))
    }

    // -----------------------------------------------------------------------
    // Index algebra
    // -----------------------------------------------------------------------

    #[inline]
    fn parent(&self, slot: usize) -> usize {
        (slot - 1) / self.branch
    }

    #[inline]
    fn first_child(&self, slot: usize) -> usize {
        slot * self.branch + 1
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.observer.placed(&self.items[a], a);
        self.observer.placed(&self.items[b], b);
    }

    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = self.parent(slot);
            if !(self.before)(&self.items[slot], &self.items[parent]) {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) -> usize {
        let len = self.items.len();
        loop {
            let first = self.first_child(slot);
            if first >= len {
                break;
            }
            let end = (first + self.branch).min(len);
            let mut best = slot;
            for child in first..end {
                if (self.before)(&self.items[child], &self.items[best]) {
                    best = child;
                }
            }
            if best == slot {
                break;
            }
            self.swap_slots(slot, best);
            slot = best;
        }
        slot
    }
}

impl<T: std::fmt::Debug, F, O> std::fmt::Debug for Heap<T, F, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heap")
            .field("branch", &self.branch)
            .field("items", &self.items)
            .finish()
    }
}
