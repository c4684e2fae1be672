//! Small explicit graph for unit tests.

use std::collections::HashMap;

use crate::request::Request;

/// Undirected weighted graph over `u32` vertices with a lookup-table
/// heuristic (missing entries estimate 0).
#[derive(Default)]
pub(crate) struct Graph {
    edges: HashMap<u32, Vec<(u32, u32)>>,
    estimates: HashMap<u32, u32>,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn edge(mut self, a: u32, b: u32, cost: u32) -> Self {
        self.edges.entry(a).or_default().push((b, cost));
        self.edges.entry(b).or_default().push((a, cost));
        self
    }

    pub(crate) fn heuristic(mut self, p: u32, h: u32) -> Self {
        self.estimates.insert(p, h);
        self
    }

    /// A path graph 0 - 1 - ... - (n - 1) with unit costs.
    pub(crate) fn line(n: u32) -> Self {
        (1..n).fold(Self::new(), |g, i| g.edge(i - 1, i, 1))
    }
}

impl Request for Graph {
    type Position = u32;
    type Cost = u32;

    fn neighbors(&self, p: &u32, buf: &mut Vec<u32>) {
        if let Some(adj) = self.edges.get(p) {
            buf.extend(adj.iter().map(|&(n, _)| n));
        }
    }

    fn cost(&self, from: &u32, to: &u32) -> u32 {
        self.edges[from]
            .iter()
            .find(|&&(n, _)| n == *to)
            .map(|&(_, c)| c)
            .unwrap_or_else(|| panic!("no edge {from} -> {to}"))
    }

    fn heuristic(&self, p: &u32) -> u32 {
        self.estimates.get(p).copied().unwrap_or(0)
    }
}
