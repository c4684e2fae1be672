//! Strategy-pluggable pathfinding over implicit graphs.
//!
//! The graph is never stored: a caller-supplied [`Request`] enumerates the
//! neighbors of a position, prices each step and estimates the remaining
//! distance. One search loop serves four strategies:
//!
//! - **Breadth-first**: fewest steps ([`Strategy::BreadthFirst`])
//! - **Greedy best-first**: heuristic only, fast but not optimal
//!   ([`Strategy::GreedyBestFirst`])
//! - **Dijkstra**: cheapest path ([`Strategy::Dijkstra`])
//! - **A\***: cheapest path guided by an admissible heuristic
//!   ([`Strategy::AStar`])
//!
//! ```
//! use wayfind::{PathResult, Request, Strategy, find_path};
//!
//! /// Integers on a line; each step costs 1.
//! struct Line {
//!     goal: i32,
//! }
//!
//! impl Request for Line {
//!     type Position = i32;
//!     type Cost = i32;
//!
//!     fn neighbors(&self, p: &i32, buf: &mut Vec<i32>) {
//!         buf.extend([p - 1, p + 1]);
//!     }
//!
//!     fn cost(&self, _from: &i32, _to: &i32) -> i32 {
//!         1
//!     }
//!
//!     fn heuristic(&self, p: &i32) -> i32 {
//!         (self.goal - p).abs()
//!     }
//! }
//!
//! let path = find_path(0, 3, Strategy::AStar, &Line { goal: 3 });
//! assert_eq!(path, PathResult::Found(vec![0, 1, 2, 3]));
//! ```
//!
//! # Building blocks
//!
//! | Type | Role |
//! |---|---|
//! | [`Heap`] | d-ary heap with update-in-place |
//! | [`OpenList`] | frontier + visited index, owns all [`SearchNode`]s |
//! | [`Strategy`] | how candidates are scored and relaxed |
//! | [`Search`] | the stepping state machine |
//! | [`PathFinder`] | configured entry point |
//!
//! Searches are single-threaded and keep no state between calls. Progress
//! is reported through the [`log`] facade at debug and trace level.

mod cancel;
mod config;
mod cost;
mod error;
pub mod heap;
mod node;
mod open_list;
mod request;
mod search;
mod strategy;

#[cfg(test)]
mod testing;

pub use cancel::CancelToken;
pub use config::SearchConfig;
pub use cost::Cost;
pub use error::{ConfigError, ParseStrategyError};
pub use heap::{Heap, SlotObserver};
pub use node::{NodeId, SearchNode};
pub use open_list::OpenList;
pub use request::{Request, path_cost};
pub use search::{PathFinder, PathResult, Search, SearchReport, SearchState, find_path};
pub use strategy::{Policy, Strategy};

/// Hash map type returned by parent-map queries.
pub use rustc_hash::FxHashMap;
