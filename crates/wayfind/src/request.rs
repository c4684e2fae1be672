use std::hash::Hash;

use crate::cost::Cost;

/// The caller's view of the graph being searched.
///
/// The search core owns no graph data: positions, adjacency, step costs and
/// the heuristic all come from this trait. Which methods a search actually
/// calls depends on its [`Strategy`](crate::Strategy).
///
/// # Preconditions
///
/// None of these are validated:
/// - `cost` and `heuristic` must be non-negative;
/// - for A* to return cost-optimal paths, `heuristic` must never
///   overestimate the remaining cost (admissible), and for it to close each
///   node once it must also be consistent;
/// - `neighbors` must be finite and stable between calls.
pub trait Request {
    /// A graph vertex.
    type Position: Clone + Eq + Hash;
    /// Edge weight and heuristic type.
    type Cost: Cost;

    /// Append the positions reachable in one step from `p` into `buf`.
    /// The caller clears `buf` before calling. Impassable positions must
    /// already be filtered out.
    fn neighbors(&self, p: &Self::Position, buf: &mut Vec<Self::Position>);

    /// Cost of moving from `from` to the adjacent `to`.
    fn cost(&self, from: &Self::Position, to: &Self::Position) -> Self::Cost;

    /// Estimated remaining cost from `p` to the goal.
    fn heuristic(&self, p: &Self::Position) -> Self::Cost;
}

impl<R: Request + ?Sized> Request for &R {
    type Position = R::Position;
    type Cost = R::Cost;

    #[inline]
    fn neighbors(&self, p: &Self::Position, buf: &mut Vec<Self::Position>) {
        (**self).neighbors(p, buf)
    }

    #[inline]
    fn cost(&self, from: &Self::Position, to: &Self::Position) -> Self::Cost {
        (**self).cost(from, to)
    }

    #[inline]
    fn heuristic(&self, p: &Self::Position) -> Self::Cost {
        (**self).heuristic(p)
    }
}

/// Total step cost along `path` according to `request`.
///
/// Returns zero for paths with fewer than two positions.
pub fn path_cost<R: Request>(request: &R, path: &[R::Position]) -> R::Cost {
    path.windows(2)
        .fold(<R::Cost as Cost>::ZERO, |acc, w| acc + request.cost(&w[0], &w[1]))
}
