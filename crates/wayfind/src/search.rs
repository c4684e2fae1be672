//! Search orchestration: the main loop and its results.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::cancel::CancelToken;
use crate::config::SearchConfig;
use crate::cost::Cost;
use crate::error::ConfigError;
use crate::node::{NodeId, SearchNode};
use crate::open_list::OpenList;
use crate::request::Request;
use crate::strategy::Strategy;

/// Where a [`Search`] stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// More nodes remain to expand.
    Running,
    /// The goal was popped from the frontier.
    GoalReached,
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// The [`CancelToken`] was triggered.
    Cancelled,
    /// The configured expansion limit was hit.
    LimitReached,
}

impl SearchState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != SearchState::Running
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchState::Running => "running",
            SearchState::GoalReached => "goal reached",
            SearchState::Exhausted => "exhausted",
            SearchState::Cancelled => "cancelled",
            SearchState::LimitReached => "expansion limit reached",
        })
    }
}

/// Outcome of a path query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult<P> {
    /// Positions from start to goal, both included.
    Found(Vec<P>),
    /// The goal cannot be reached (or the search was stopped early).
    NoPath,
}

impl<P> PathResult<P> {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn path(&self) -> Option<&[P]> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NoPath => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<P>> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NoPath => None,
        }
    }

    /// Number of positions in the path, 0 for [`NoPath`](PathResult::NoPath).
    pub fn len(&self) -> usize {
        self.path().map_or(0, <[P]>::len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P> From<Option<Vec<P>>> for PathResult<P> {
    fn from(path: Option<Vec<P>>) -> Self {
        path.map_or(PathResult::NoPath, PathResult::Found)
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A single search, advanced one expansion at a time.
///
/// Most callers want [`find_path`] or [`PathFinder`]; `Search` is for
/// callers that drive or display the search step by step.
pub struct Search<'r, R: Request> {
    request: &'r R,
    strategy: Strategy,
    goal: R::Position,
    open: OpenList<R::Position, R::Cost>,
    state: SearchState,
    goal_node: Option<NodeId>,
    current: Option<NodeId>,
    expanded: usize,
    max_expansions: Option<usize>,
    cancel: Option<CancelToken>,
    nbuf: Vec<R::Position>,
}

impl<'r, R: Request> Search<'r, R> {
    /// Start a search from `start` to `goal` with the default configuration.
    pub fn new(start: R::Position, goal: R::Position, strategy: Strategy, request: &'r R) -> Self {
        Self::with_config(start, goal, strategy, request, &SearchConfig::default(), None)
    }

    /// `config` must already be validated.
    fn with_config(
        start: R::Position,
        goal: R::Position,
        strategy: Strategy,
        request: &'r R,
        config: &SearchConfig,
        cancel: Option<CancelToken>,
    ) -> Self {
        let mut open = OpenList::with_branch_factor(config.branch_factor);
        strategy.expand(&start, None, request, &mut open);
        log::debug!("{strategy} search started");
        Self {
            request,
            strategy,
            goal,
            open,
            state: SearchState::Running,
            goal_node: None,
            current: None,
            expanded: 0,
            max_expansions: config.max_expansions,
            cancel,
            nbuf: Vec::new(),
        }
    }

    /// Perform one iteration and return the resulting state.
    ///
    /// Once a terminal state is reached further calls do nothing.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return self.finish(SearchState::Cancelled);
        }
        // Popping the goal is not an expansion, so it is still allowed at
        // the limit.
        if self.max_expansions.is_some_and(|limit| self.expanded >= limit)
            && self.open.peek().is_some_and(|n| *n.position() != self.goal)
        {
            return self.finish(SearchState::LimitReached);
        }

        let Some(node) = self.open.pop_best() else {
            return self.finish(SearchState::Exhausted);
        };
        self.current = Some(node.id());
        if *node.position() == self.goal {
            self.goal_node = Some(node.id());
            return self.finish(SearchState::GoalReached);
        }

        self.expanded += 1;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.request.neighbors(node.position(), &mut nbuf);
        for np in nbuf.iter() {
            self.strategy.expand(np, Some(&node), self.request, &mut self.open);
        }
        self.nbuf = nbuf;

        SearchState::Running
    }

    /// Step until a terminal state.
    pub fn run(&mut self) -> SearchState {
        while !self.step().is_terminal() {}
        self.state
    }

    fn finish(&mut self, state: SearchState) -> SearchState {
        self.state = state;
        log::debug!(
            "{} search {}: {} expanded, {} visited",
            self.strategy,
            state,
            self.expanded,
            self.open.len()
        );
        state
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn goal(&self) -> &R::Position {
        &self.goal
    }

    /// Number of nodes expanded so far (the goal is not counted).
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// The node popped by the most recent step.
    pub fn current(&self) -> Option<&SearchNode<R::Position, R::Cost>> {
        self.current.map(|id| self.open.node(id))
    }

    #[inline]
    pub fn open_list(&self) -> &OpenList<R::Position, R::Cost> {
        &self.open
    }

    /// The path found so far: `Found` only once the goal is reached.
    pub fn path(&self) -> PathResult<R::Position> {
        match self.goal_node {
            Some(id) => PathResult::Found(self.open.path_to(id)),
            None => PathResult::NoPath,
        }
    }

    /// Parent position of every visited position except the start.
    pub fn parent_map(&self) -> FxHashMap<R::Position, R::Position> {
        self.open.reconstruct_parent_map()
    }

    /// Finish bookkeeping, releasing the borrow of the request.
    pub fn into_report(self) -> SearchReport<R::Position, R::Cost> {
        SearchReport {
            result: self.path(),
            state: self.state,
            strategy: self.strategy,
            expanded: self.expanded,
            goal_node: self.goal_node,
            open: self.open,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchReport
// ---------------------------------------------------------------------------

/// Everything a finished search produced.
#[derive(Debug)]
pub struct SearchReport<P, C> {
    result: PathResult<P>,
    state: SearchState,
    strategy: Strategy,
    expanded: usize,
    goal_node: Option<NodeId>,
    open: OpenList<P, C>,
}

impl<P, C> SearchReport<P, C>
where
    P: Clone + Eq + Hash,
    C: Cost,
{
    #[inline]
    pub fn result(&self) -> &PathResult<P> {
        &self.result
    }

    pub fn into_result(self) -> PathResult<P> {
        self.result
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of distinct positions discovered.
    #[inline]
    pub fn visited(&self) -> usize {
        self.open.len()
    }

    /// `g` of the goal node, if reached. Only a true path cost for
    /// strategies that accumulate costs.
    pub fn cost(&self) -> Option<C> {
        self.goal_node.map(|id| self.open.node(id).g())
    }

    /// Parent position of every visited position except the start.
    pub fn parent_map(&self) -> FxHashMap<P, P> {
        self.open.reconstruct_parent_map()
    }

    #[inline]
    pub fn open_list(&self) -> &OpenList<P, C> {
        &self.open
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Configured entry point for path queries.
///
/// `PathFinder` holds no per-search state; every query builds and drops
/// its own open list.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    config: SearchConfig,
    cancel: Option<CancelToken>,
}

impl PathFinder {
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            cancel: None,
        })
    }

    /// Check `token` once per iteration of every search.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Create a search without running it.
    pub fn start<'r, R: Request>(
        &self,
        start: R::Position,
        goal: R::Position,
        strategy: Strategy,
        request: &'r R,
    ) -> Search<'r, R> {
        Search::with_config(
            start,
            goal,
            strategy,
            request,
            &self.config,
            self.cancel.clone(),
        )
    }

    /// Run a search to completion and return everything it produced.
    pub fn search<R: Request>(
        &self,
        start: R::Position,
        goal: R::Position,
        strategy: Strategy,
        request: &R,
    ) -> SearchReport<R::Position, R::Cost> {
        let mut search = self.start(start, goal, strategy, request);
        search.run();
        search.into_report()
    }

    /// Run a search to completion and return the path.
    pub fn find_path<R: Request>(
        &self,
        start: R::Position,
        goal: R::Position,
        strategy: Strategy,
        request: &R,
    ) -> PathResult<R::Position> {
        let mut search = self.start(start, goal, strategy, request);
        search.run();
        search.path()
    }
}

/// Find a path from `start` to `goal` with the default configuration.
///
/// Blocks until the goal is reached or every reachable position has been
/// expanded. An unreachable goal yields [`PathResult::NoPath`].
pub fn find_path<R: Request>(
    start: R::Position,
    goal: R::Position,
    strategy: Strategy,
    request: &R,
) -> PathResult<R::Position> {
    PathFinder::default().find_path(start, goal, strategy, request)
}
