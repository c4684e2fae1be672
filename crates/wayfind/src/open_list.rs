//! Frontier plus visited index.
//!
//! [`OpenList`] owns every [`SearchNode`] created during one search. Nodes
//! live in an arena addressed by [`NodeId`]; the frontier heap stores small
//! `(f, seq, id)` entries and a side table maps each id to its current heap
//! slot so relaxation never scans the heap.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::cost::Cost;
use crate::heap::{BINARY, Heap, SlotObserver};
use crate::node::{NodeId, SearchNode};

/// Frontier entry. Ordered by `f`, then by insertion order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry<C> {
    f: C,
    seq: u64,
    id: NodeId,
}

fn entry_before<C: Cost>(a: &Entry<C>, b: &Entry<C>) -> bool {
    a.f < b.f || (a.f == b.f && a.seq < b.seq)
}

const NOT_IN_HEAP: usize = usize::MAX;

/// Heap slot of every node id, kept current by the frontier.
#[derive(Debug, Clone, Default)]
pub(crate) struct SlotTable {
    slots: Vec<usize>,
}

impl SlotTable {
    #[inline]
    fn slot(&self, id: NodeId) -> Option<usize> {
        match self.slots.get(id.0) {
            Some(&s) if s != NOT_IN_HEAP => Some(s),
            _ => None,
        }
    }
}

impl<C> SlotObserver<Entry<C>> for SlotTable {
    fn placed(&mut self, item: &Entry<C>, slot: usize) {
        let i = item.id.0;
        if i >= self.slots.len() {
            self.slots.resize(i + 1, NOT_IN_HEAP);
        }
        self.slots[i] = slot;
    }

    fn removed(&mut self, item: &Entry<C>) {
        if let Some(s) = self.slots.get_mut(item.id.0) {
            *s = NOT_IN_HEAP;
        }
    }
}

type EntryOrder<C> = fn(&Entry<C>, &Entry<C>) -> bool;

/// The open list of a single search: frontier heap, node arena and
/// position index.
///
/// Invariants:
/// - every node in the frontier is also indexed by its position;
/// - a position is indexed at most once;
/// - a closed node never re-enters the frontier.
pub struct OpenList<P, C> {
    nodes: Vec<SearchNode<P, C>>,
    visited: FxHashMap<P, NodeId>,
    frontier: Heap<Entry<C>, EntryOrder<C>, SlotTable>,
    next_seq: u64,
    closed: usize,
}

impl<P, C> Default for OpenList<P, C>
where
    P: Clone + Eq + Hash,
    C: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P: fmt::Debug, C: fmt::Debug> fmt::Debug for OpenList<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenList")
            .field("nodes", &self.nodes)
            .field("open", &self.frontier.len())
            .field("closed", &self.closed)
            .finish()
    }
}

impl<P, C> OpenList<P, C>
where
    P: Clone + Eq + Hash,
    C: Cost,
{
    /// Create an empty open list backed by a binary heap.
    pub fn new() -> Self {
        Self::with_branch_factor(BINARY)
    }

    /// Create an empty open list whose frontier nodes have `branch`
    /// children.
    ///
    /// # Panics
    ///
    /// Panics if `branch < 2`.
    pub fn with_branch_factor(branch: usize) -> Self {
        Self {
            nodes: Vec::new(),
            visited: FxHashMap::default(),
            frontier: Heap::with_observer(
                branch,
                entry_before::<C> as EntryOrder<C>,
                SlotTable::default(),
            ),
            next_seq: 0,
            closed: 0,
        }
    }

    /// Put `position` on the frontier with the given scores.
    ///
    /// A position already on the frontier is rescored in place rather than
    /// duplicated. A closed position is left untouched. Either way the id of
    /// the position's node is returned.
    pub fn insert(&mut self, position: P, g: C, h: C, parent: Option<NodeId>) -> NodeId {
        if let Some(&id) = self.visited.get(&position) {
            let node = &mut self.nodes[id.0];
            if node.closed {
                return id;
            }
            node.rescore(g, h, parent);
            let entry = Entry {
                f: node.f,
                seq: node.seq,
                id,
            };
            self.place(entry);
            return id;
        }

        let id = NodeId(self.nodes.len());
        let seq = self.next_seq;
        self.next_seq += 1;
        let node = SearchNode::new(id, position.clone(), g, h, parent, seq);
        let entry = Entry { f: node.f, seq, id };
        self.nodes.push(node);
        self.visited.insert(position, id);
        self.frontier.insert(entry);
        id
    }

    /// Pop the best frontier node and close it.
    ///
    /// Returns a copy of the closed node, or `None` once the frontier is
    /// exhausted.
    pub fn pop_best(&mut self) -> Option<SearchNode<P, C>> {
        let entry = self.frontier.pop_best()?;
        let node = &mut self.nodes[entry.id.0];
        node.closed = true;
        self.closed += 1;
        Some(node.clone())
    }

    /// The node recorded for `position`, open or closed.
    #[inline]
    pub fn lookup(&self, position: &P) -> Option<&SearchNode<P, C>> {
        self.visited.get(position).map(|&id| &self.nodes[id.0])
    }

    /// Lower the cost of an open node reached through `parent`.
    ///
    /// Does nothing and returns `false` if the position is unknown, already
    /// closed, or `g` is not strictly lower than its current cost.
    pub fn relax(&mut self, position: &P, g: C, parent: NodeId) -> bool {
        let Some(&id) = self.visited.get(position) else {
            return false;
        };
        let node = &mut self.nodes[id.0];
        if node.closed || !(g < node.g) {
            return false;
        }
        log::trace!("relax node {}: g {:?} -> {:?}", id.0, node.g, g);
        node.reparent(g, parent);
        let entry = Entry {
            f: node.f,
            seq: node.seq,
            id,
        };
        self.place(entry);
        true
    }

    /// Map every visited position that has a parent to its parent's
    /// position.
    pub fn reconstruct_parent_map(&self) -> FxHashMap<P, P> {
        self.nodes
            .iter()
            .filter_map(|n| {
                let parent = n.parent?;
                Some((n.position.clone(), self.nodes[parent.0].position.clone()))
            })
            .collect()
    }

    /// Positions from the root of `id`'s parent chain to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<P> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(i) = cur {
            let node = &self.nodes[i.0];
            path.push(node.position.clone());
            cur = node.parent;
        }
        path.reverse();
        path
    }

    /// # Panics
    ///
    /// Panics if `id` was not created by this open list.
    #[inline]
    pub fn node(&self, id: NodeId) -> &SearchNode<P, C> {
        &self.nodes[id.0]
    }

    /// The node that would be popped next.
    pub fn peek(&self) -> Option<&SearchNode<P, C>> {
        self.frontier.peek().map(|e| &self.nodes[e.id.0])
    }

    /// All visited nodes in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchNode<P, C>> {
        self.nodes.iter()
    }

    /// Number of visited positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes still on the frontier.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of closed nodes.
    #[inline]
    pub fn closed_count(&self) -> usize {
        self.closed
    }

    fn place(&mut self, entry: Entry<C>) {
        match self.frontier.observer().slot(entry.id) {
            Some(slot) => {
                self.frontier.update_at(slot, entry);
            }
            None => self.frontier.insert(entry),
        }
    }

    #[cfg(test)]
    fn frontier_is_consistent(&self) -> bool {
        self.frontier.is_valid()
            && self.frontier.iter().enumerate().all(|(slot, e)| {
                self.frontier.observer().slot(e.id) == Some(slot)
                    && !self.nodes[e.id.0].closed
                    && self.visited.get(&self.nodes[e.id.0].position) == Some(&e.id)
            })
    }
}
