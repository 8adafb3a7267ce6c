use std::hash::Hash;

/// Bound for vertex labels: cheap to clone, hashable, comparable by value.
pub trait Label: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Label for T {}

/// One half of an undirected edge, stored in the adjacency list of its
/// source vertex. The target is a label handle into the owning graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<T> {
    pub target: T,
    pub weight: Option<f64>,
}

/// A graph node: label, traversal scratch state, and adjacency list.
///
/// `visited`, `cost` and `predecessor` are only meaningful during or right
/// after a traversal; the graph resets them before each one.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    label: T,
    visited: bool,
    cost: u32,
    predecessor: Option<T>,
    edges: Vec<Edge<T>>,
}

impl<T: Label> Vertex<T> {
    pub fn new(label: T) -> Self {
        Self {
            label,
            visited: false,
            cost: 0,
            predecessor: None,
            edges: Vec::new(),
        }
    }

    pub fn label(&self) -> &T {
        &self.label
    }

    /// Add an unweighted edge to `neighbor`.
    ///
    /// Fails on a self-loop or if an edge to `neighbor` already exists.
    /// Only this vertex's list changes; the caller connects the other side.
    pub fn connect(&mut self, neighbor: &T) -> bool {
        self.push_edge(neighbor, None)
    }

    /// Add a weighted edge to `neighbor`.
    ///
    /// Uniqueness ignores the weight: a second edge to the same neighbor is
    /// rejected whatever its weight.
    pub fn connect_weighted(&mut self, neighbor: &T, weight: f64) -> bool {
        self.push_edge(neighbor, Some(weight))
    }

    fn push_edge(&mut self, neighbor: &T, weight: Option<f64>) -> bool {
        if *neighbor == self.label || self.is_adjacent(neighbor) {
            return false;
        }
        self.edges.push(Edge {
            target: neighbor.clone(),
            weight,
        });
        true
    }

    /// Remove the first edge pointing at `neighbor`, whatever its weight.
    pub fn disconnect(&mut self, neighbor: &T) -> bool {
        self.take_edge(neighbor, None).is_some()
    }

    /// Remove the first edge pointing at `neighbor` that carries exactly `weight`.
    pub fn disconnect_weighted(&mut self, neighbor: &T, weight: f64) -> bool {
        self.take_edge(neighbor, Some(weight)).is_some()
    }

    /// Remove the first edge to `neighbor` (with exactly `weight`, if given)
    /// and hand it back with the index it held.
    pub(crate) fn take_edge(&mut self, neighbor: &T, weight: Option<f64>) -> Option<(usize, Edge<T>)> {
        let idx = self
            .edges
            .iter()
            .position(|e| e.target == *neighbor && (weight.is_none() || e.weight == weight))?;
        Some((idx, self.edges.remove(idx)))
    }

    /// Put an edge taken by `take_edge` back where it was.
    pub(crate) fn restore_edge(&mut self, index: usize, edge: Edge<T>) {
        let index = index.min(self.edges.len());
        self.edges.insert(index, edge);
    }

    /// Neighbor labels in edge insertion order. Call again to restart.
    pub fn neighbors(&self) -> impl Iterator<Item = &T> + '_ {
        self.edges.iter().map(|e| &e.target)
    }

    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    pub fn is_adjacent(&self, neighbor: &T) -> bool {
        self.neighbors().any(|n| n == neighbor)
    }

    pub fn has_neighbor(&self) -> bool {
        !self.edges.is_empty()
    }

    pub fn neighbor_count(&self) -> usize {
        self.edges.len()
    }

    pub fn visit(&mut self) {
        self.visited = true;
    }

    pub fn unvisit(&mut self) {
        self.visited = false;
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn set_cost(&mut self, cost: u32) {
        self.cost = cost;
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn set_predecessor(&mut self, predecessor: Option<T>) {
        self.predecessor = predecessor;
    }

    pub fn predecessor(&self) -> Option<&T> {
        self.predecessor.as_ref()
    }

    pub fn has_predecessor(&self) -> bool {
        self.predecessor.is_some()
    }

    /// First neighbor, in edge order, that `is_visited` reports as unvisited.
    ///
    /// The vertex only holds handles, so the caller supplies the visited
    /// lookup (see `Graph::unvisited_neighbor`).
    pub fn unvisited_neighbor<F>(&self, is_visited: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.neighbors().find(|n| !is_visited(n))
    }

    /// Clear traversal scratch state.
    pub(crate) fn reset(&mut self) {
        self.visited = false;
        self.cost = 0;
        self.predecessor = None;
    }
}

/// Vertices compare by label only, never by edges or traversal state.
impl<T: PartialEq> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<T: Eq> Eq for Vertex<T> {}
