use std::collections::HashMap;

use tracing::{debug, warn};

use crate::vertex::{Label, Vertex};

/// Undirected graph: label-keyed vertex map plus an undirected edge counter.
///
/// Every edge is stored twice, once in each endpoint's adjacency list.
/// `edge_count` counts the pair once.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    vertices: HashMap<T, Vertex<T>>,
    edge_count: usize,
}

impl<T: Label> Graph<T> {
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    /// Add a vertex. Returns false if the label is already present.
    pub fn add_vertex(&mut self, label: T) -> bool {
        if self.vertices.contains_key(&label) {
            return false;
        }
        self.vertices.insert(label.clone(), Vertex::new(label));
        true
    }

    /// Remove a vertex and every edge that touches it.
    ///
    /// The removed vertex keeps its own adjacency list so callers can see
    /// who it was connected to.
    pub fn remove_vertex(&mut self, label: &T) -> Option<Vertex<T>> {
        let removed = self.vertices.remove(label)?;

        for neighbor in removed.neighbors() {
            let detached = self
                .vertices
                .get_mut(neighbor)
                .is_some_and(|v| v.disconnect(label));
            if detached {
                debug_assert!(self.edge_count > 0, "edge counter out of sync");
                self.edge_count -= 1;
            }
        }

        debug!(
            degree = removed.neighbor_count(),
            edges = self.edge_count,
            "graph: vertex removed"
        );
        Some(removed)
    }

    pub fn add_edge(&mut self, begin: &T, end: &T) -> bool {
        self.connect_both(begin, end, None)
    }

    pub fn add_edge_weighted(&mut self, begin: &T, end: &T, weight: f64) -> bool {
        self.connect_both(begin, end, Some(weight))
    }

    pub fn remove_edge(&mut self, begin: &T, end: &T) -> bool {
        self.disconnect_both(begin, end, None)
    }

    /// Remove an edge only if it carries exactly `weight`.
    pub fn remove_edge_weighted(&mut self, begin: &T, end: &T, weight: f64) -> bool {
        self.disconnect_both(begin, end, Some(weight))
    }

    /// Connect `begin→end`, then `end→begin`.
    ///
    /// Both directions succeed or neither does: if the second side fails the
    /// first is rolled back, so the adjacency lists stay symmetric.
    fn connect_both(&mut self, begin: &T, end: &T, weight: Option<f64>) -> bool {
        if !self.contains(begin) || !self.contains(end) {
            return false;
        }
        if !self.connect_one(begin, end, weight) {
            return false;
        }
        if !self.connect_one(end, begin, weight) {
            if let Some(v) = self.vertices.get_mut(begin) {
                v.disconnect(end);
            }
            warn!("graph: half-added edge rolled back");
            return false;
        }
        self.edge_count += 1;
        true
    }

    fn connect_one(&mut self, from: &T, to: &T, weight: Option<f64>) -> bool {
        self.vertices.get_mut(from).is_some_and(|v| match weight {
            None => v.connect(to),
            Some(w) => v.connect_weighted(to, w),
        })
    }

    /// Disconnect both directions, all or nothing. A rolled-back side gets
    /// its edge back at the same index, so edge order is unchanged.
    fn disconnect_both(&mut self, begin: &T, end: &T, weight: Option<f64>) -> bool {
        if !self.contains(begin) || !self.contains(end) {
            return false;
        }
        let Some((index, edge)) = self
            .vertices
            .get_mut(begin)
            .and_then(|v| v.take_edge(end, weight))
        else {
            return false;
        };

        let detached = self
            .vertices
            .get_mut(end)
            .is_some_and(|v| v.take_edge(begin, weight).is_some());
        if !detached {
            if let Some(v) = self.vertices.get_mut(begin) {
                v.restore_edge(index, edge);
            }
            warn!("graph: half-removed edge rolled back");
            return false;
        }

        debug_assert!(self.edge_count > 0, "edge counter out of sync");
        self.edge_count -= 1;
        true
    }

    /// True if `end` is among `begin`'s neighbors.
    pub fn has_edge(&self, begin: &T, end: &T) -> bool {
        self.vertices
            .get(begin)
            .is_some_and(|v| v.is_adjacent(end))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, label: &T) -> bool {
        self.vertices.contains_key(label)
    }

    pub fn vertex(&self, label: &T) -> Option<&Vertex<T>> {
        self.vertices.get(label)
    }

    pub(crate) fn vertex_mut(&mut self, label: &T) -> Option<&mut Vertex<T>> {
        self.vertices.get_mut(label)
    }

    /// Snapshot of all vertices in no particular order, or None if empty.
    pub fn vertices(&self) -> Option<Vec<&Vertex<T>>> {
        if self.vertices.is_empty() {
            return None;
        }
        Some(self.vertices.values().collect())
    }

    pub fn labels(&self) -> impl Iterator<Item = &T> + '_ {
        self.vertices.keys()
    }

    /// First unvisited neighbor of `label`, judged by the graph's own
    /// visited flags.
    pub fn unvisited_neighbor(&self, label: &T) -> Option<&T> {
        self.vertices.get(label)?.unvisited_neighbor(|n| {
            self.vertices.get(n).is_some_and(|v| v.is_visited())
        })
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    /// Clear visited/cost/predecessor on every vertex.
    pub fn reset_vertices(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.reset();
        }
    }
}

impl<T: Label> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
