//! Undirected graph over generic vertices with a depth-first path query.
//!
//! Adjacency is kept in ordered sets, so neighbors are always visited in
//! ascending order. That makes [`Graph::find_one_path`] reproducible: the
//! search pushes neighbors in ascending order and therefore explores the
//! largest unvisited neighbor first.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::GraphError;

/// Undirected graph stored as an adjacency list.
///
/// Every edge is inserted in both directions; nothing else writes to the
/// adjacency sets, so checking one direction is enough to detect an
/// existing edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<V> {
    adjacency: BTreeMap<V, BTreeSet<V>>,
}

impl<V: Ord + Clone> Graph<V> {
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Insert `v` with no neighbors. Returns `false` if it already existed.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, BTreeSet::new());
        true
    }

    /// Insert the undirected edge `(v1, v2)`, adding missing endpoints.
    ///
    /// Returns `false` without touching the graph if the edge exists.
    /// A self-loop `(v, v)` puts `v` in its own adjacency set.
    pub fn add_edge(&mut self, v1: V, v2: V) -> bool {
        self.add_vertex(v1.clone());
        self.add_vertex(v2.clone());

        if self.adjacency[&v1].contains(&v2) {
            return false;
        }

        if let Some(adjacent) = self.adjacency.get_mut(&v1) {
            adjacent.insert(v2.clone());
        }
        if let Some(adjacent) = self.adjacency.get_mut(&v2) {
            adjacent.insert(v1);
        }
        true
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Neighbors of `v`, or [`GraphError::VertexNotFound`] if `v` is absent.
    pub fn adjacents_of(&self, v: &V) -> Result<&BTreeSet<V>, GraphError>
    where
        V: fmt::Debug,
    {
        self.adjacency
            .get(v)
            .ok_or_else(|| GraphError::VertexNotFound {
                vertex: format!("{v:?}"),
            })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Vertices in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Find some path from `start` to `goal`, both included.
    ///
    /// Returns `None` if either endpoint is missing or they are not
    /// connected. Uses an explicit stack, so the result is a depth-first
    /// path and not necessarily the shortest one.
    pub fn find_one_path(&self, start: &V, goal: &V) -> Option<Vec<V>> {
        if !self.contains_vertex(start) || !self.contains_vertex(goal) {
            return None;
        }

        // came_from[v] is the vertex v was first reached from; None for start.
        let mut came_from: BTreeMap<&V, Option<&V>> = BTreeMap::new();
        let mut stack = vec![start];
        came_from.insert(start, None);

        let mut found = false;
        while let Some(current) = stack.pop() {
            if current == goal {
                found = true;
                break;
            }
            for adjacent in &self.adjacency[current] {
                if !came_from.contains_key(adjacent) {
                    came_from.insert(adjacent, Some(current));
                    stack.push(adjacent);
                }
            }
        }

        if !found {
            tracing::debug!(explored = came_from.len(), "no path found");
            return None;
        }

        let mut path = vec![goal.clone()];
        let mut step = goal;
        while let Some(&Some(previous)) = came_from.get(step) {
            path.push(previous.clone());
            step = previous;
        }
        path.reverse();

        tracing::debug!(length = path.len(), explored = came_from.len(), "path found");
        Some(path)
    }
}

impl<V: Ord + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per vertex: `v -> [a, b]`
impl<V: fmt::Debug> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, adjacent) in &self.adjacency {
            writeln!(f, "{vertex:?} -> {:?}", adjacent)?;
        }
        Ok(())
    }
}
