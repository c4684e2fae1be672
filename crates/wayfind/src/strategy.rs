//! Expansion policies.
//!
//! All four strategies share the same open list and expansion routine; they
//! differ only in how a candidate is scored and whether a cheaper route to
//! an already-seen position replaces the old one.
//!
//! | Strategy | g | h | Relax on revisit |
//! |---|---|---|---|
//! | [`BreadthFirst`](Strategy::BreadthFirst) | 0 | 0 | no |
//! | [`GreedyBestFirst`](Strategy::GreedyBestFirst) | 0 | heuristic | no |
//! | [`Dijkstra`](Strategy::Dijkstra) | parent g + cost | 0 | yes |
//! | [`AStar`](Strategy::AStar) | parent g + cost | heuristic | yes |
//!
//! Breadth-first relies on the open list popping equal priorities in
//! insertion order, which turns the heap into a FIFO queue.

use std::fmt;
use std::str::FromStr;

use crate::cost::Cost;
use crate::error::ParseStrategyError;
use crate::node::SearchNode;
use crate::open_list::OpenList;
use crate::request::Request;

/// A search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Fewest steps; ignores costs and heuristic.
    BreadthFirst,
    /// Always expands the position that looks closest to the goal.
    /// Fast, but paths are not guaranteed to be cheapest.
    GreedyBestFirst,
    /// Cheapest path, uninformed.
    Dijkstra,
    /// Cheapest path guided by the heuristic.
    #[default]
    AStar,
}

/// How a strategy scores candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Policy {
    /// `g` accumulates step costs; otherwise it stays 0.
    pub use_cost: bool,
    /// `h` comes from the request; otherwise it is 0.
    pub use_heuristic: bool,
    /// A cheaper route to an open position replaces the old one; otherwise
    /// the first route found is kept.
    pub relax: bool,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::GreedyBestFirst,
        Strategy::Dijkstra,
        Strategy::AStar,
    ];

    pub const fn policy(self) -> Policy {
        match self {
            Strategy::BreadthFirst => Policy {
                use_cost: false,
                use_heuristic: false,
                relax: false,
            },
            Strategy::GreedyBestFirst => Policy {
                use_cost: false,
                use_heuristic: true,
                relax: false,
            },
            Strategy::Dijkstra => Policy {
                use_cost: true,
                use_heuristic: false,
                relax: true,
            },
            Strategy::AStar => Policy {
                use_cost: true,
                use_heuristic: true,
                relax: true,
            },
        }
    }

    /// Whether paths found by this strategy are cost-optimal (given an
    /// admissible heuristic for A*).
    pub const fn is_optimal(self) -> bool {
        matches!(self, Strategy::Dijkstra | Strategy::AStar)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::GreedyBestFirst => "greedy",
            Strategy::Dijkstra => "dijkstra",
            Strategy::AStar => "astar",
        }
    }

    /// Offer `candidate`, reached from `from`, to the open list.
    ///
    /// `from == None` seeds the search: the candidate gets `g = 0` and no
    /// parent.
    pub fn expand<R: Request>(
        self,
        candidate: &R::Position,
        from: Option<&SearchNode<R::Position, R::Cost>>,
        request: &R,
        open: &mut OpenList<R::Position, R::Cost>,
    ) {
        self.policy().expand(candidate, from, request, open)
    }
}

impl Policy {
    /// See [`Strategy::expand`].
    pub fn expand<R: Request>(
        self,
        candidate: &R::Position,
        from: Option<&SearchNode<R::Position, R::Cost>>,
        request: &R,
        open: &mut OpenList<R::Position, R::Cost>,
    ) {
        let zero = <R::Cost as Cost>::ZERO;
        let g = match from {
            Some(n) if self.use_cost => n.g() + request.cost(n.position(), candidate),
            _ => zero,
        };

        if open.lookup(candidate).is_some() {
            if let (true, Some(n)) = (self.relax, from) {
                open.relax(candidate, g, n.id());
            }
            return;
        }

        let h = if self.use_heuristic {
            request.heuristic(candidate)
        } else {
            zero
        };
        open.insert(candidate.clone(), g, h, from.map(SearchNode::id));
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth_first" | "breadthfirst" => {
                Ok(Strategy::BreadthFirst)
            }
            "greedy" | "greedy-best-first" | "best-first" => Ok(Strategy::GreedyBestFirst),
            "dijkstra" => Ok(Strategy::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Graph;

    #[test]
    fn seeding_uses_policy() {
        let graph = Graph::new().heuristic(0, 7);
        for (strategy, h) in [
            (Strategy::BreadthFirst, 0),
            (Strategy::GreedyBestFirst, 7),
            (Strategy::Dijkstra, 0),
            (Strategy::AStar, 7),
        ] {
            let mut open = OpenList::new();
            strategy.expand(&0, None, &graph, &mut open);
            let node = open.lookup(&0).unwrap();
            assert_eq!((node.g(), node.h(), node.parent()), (0, h, None), "{strategy}");
        }
    }

    #[test]
    fn costs_only_accumulate_when_used() {
        let graph = Graph::new().edge(0, 1, 5).heuristic(1, 2);
        for (strategy, g, h) in [
            (Strategy::BreadthFirst, 0, 0),
            (Strategy::GreedyBestFirst, 0, 2),
            (Strategy::Dijkstra, 5, 0),
            (Strategy::AStar, 5, 2),
        ] {
            let mut open = OpenList::new();
            strategy.expand(&0, None, &graph, &mut open);
            let root = open.pop_best().unwrap();
            strategy.expand(&1, Some(&root), &graph, &mut open);
            let node = open.lookup(&1).unwrap();
            assert_eq!((node.g(), node.h(), node.f()), (g, h, g + h), "{strategy}");
            assert_eq!(node.parent(), Some(root.id()));
        }
    }

    #[test]
    fn revisits_relax_only_for_cost_strategies() {
        // 0 -> 2 costs 9 directly, 4 via 1.
        let graph = Graph::new().edge(0, 1, 1).edge(0, 2, 9).edge(1, 2, 3);
        for strategy in Strategy::ALL {
            let mut open = OpenList::new();
            strategy.expand(&0, None, &graph, &mut open);
            let root = open.pop_best().unwrap();
            strategy.expand(&1, Some(&root), &graph, &mut open);
            strategy.expand(&2, Some(&root), &graph, &mut open);
            let one = open.pop_best().unwrap();
            assert_eq!(one.position(), &1, "{strategy}");
            strategy.expand(&2, Some(&one), &graph, &mut open);

            let two = open.lookup(&2).unwrap();
            if strategy.policy().relax {
                assert_eq!((two.g(), two.parent()), (4, Some(one.id())), "{strategy}");
            } else {
                assert_eq!(two.parent(), Some(root.id()), "{strategy}");
            }
            assert_eq!(open.len(), 3);
        }
    }

    #[test]
    fn closed_positions_are_never_reopened() {
        let graph = Graph::new().edge(0, 1, 1);
        let mut open = OpenList::new();
        Strategy::Dijkstra.expand(&0, None, &graph, &mut open);
        let root = open.pop_best().unwrap();
        Strategy::Dijkstra.expand(&1, Some(&root), &graph, &mut open);
        let one = open.pop_best().unwrap();
        Strategy::Dijkstra.expand(&0, Some(&one), &graph, &mut open);
        assert_eq!(open.open_len(), 0);
        assert_eq!(open.lookup(&0).unwrap().g(), 0);
    }

    #[test]
    fn parse_and_display() {
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>(), Ok(s));
        }
        assert_eq!("BFS".parse(), Ok(Strategy::BreadthFirst));
        assert_eq!(" A* ".parse(), Ok(Strategy::AStar));
        assert_eq!(
            "dfs".parse::<Strategy>(),
            Err(ParseStrategyError("dfs".to_string()))
        );
        assert_eq!(Strategy::default(), Strategy::AStar);
        assert!(Strategy::Dijkstra.is_optimal());
        assert!(!Strategy::GreedyBestFirst.is_optimal());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn kebab_case_names() {
        let json = serde_json::to_string(&Strategy::GreedyBestFirst).unwrap();
        assert_eq!(json, r#""greedy-best-first""#);
        let back: Strategy = serde_json::from_str(r#""a-star""#).unwrap();
        assert_eq!(back, Strategy::AStar);
    }
}
