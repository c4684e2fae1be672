use crate::cost::Cost;

/// Stable handle of a [`SearchNode`] inside the open list that created it.
///
/// Ids are only meaningful for the search that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena index of the node, in creation order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A visited position together with its search bookkeeping.
///
/// `f` is always `g + h`. The parent link is a [`NodeId`] into the same open
/// list, so nodes never own each other.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode<P, C> {
    pub(crate) id: NodeId,
    pub(crate) position: P,
    pub(crate) g: C,
    pub(crate) h: C,
    pub(crate) f: C,
    pub(crate) closed: bool,
    pub(crate) parent: Option<NodeId>,
    /// Insertion order, used to break ties between equal `f`.
    pub(crate) seq: u64,
}

impl<P, C: Cost> SearchNode<P, C> {
    pub(crate) fn new(
        id: NodeId,
        position: P,
        g: C,
        h: C,
        parent: Option<NodeId>,
        seq: u64,
    ) -> Self {
        Self {
            id,
            position,
            g,
            h,
            f: g + h,
            closed: false,
            parent,
            seq,
        }
    }

    /// Overwrite the cost estimates, keeping `f == g + h`.
    pub(crate) fn rescore(&mut self, g: C, h: C, parent: Option<NodeId>) {
        self.g = g;
        self.h = h;
        self.f = g + h;
        self.parent = parent;
    }

    /// Accept a cheaper route through `parent`. `h` is unchanged.
    pub(crate) fn reparent(&mut self, g: C, parent: NodeId) {
        self.rescore(g, self.h, Some(parent));
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> &P {
        &self.position
    }

    /// Accumulated cost from the start.
    #[inline]
    pub fn g(&self) -> C {
        self.g
    }

    /// Heuristic estimate to the goal.
    #[inline]
    pub fn h(&self) -> C {
        self.h
    }

    /// Priority, `g + h`.
    #[inline]
    pub fn f(&self) -> C {
        self.f
    }

    /// Whether the node has been popped from the frontier.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}
