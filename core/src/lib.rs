//! social-graph-core: undirected in-memory graph with BFS traversal.
//!
//! A pure Rust library holding a label-keyed vertex map with symmetric
//! adjacency lists, plus breadth-first traversal and unweighted shortest
//! path queries. Edges and predecessors refer to vertices by label, so
//! removing a vertex can never leave a dangling reference.
//!
//! Traversal state (visited flag, hop cost, predecessor) lives on the
//! vertices and is reset at the start of every traversal. A `Graph` is
//! therefore not reentrant: one traversal at a time, callers serialize
//! access themselves.

mod graph;
mod traversal;
mod vertex;

pub use graph::Graph;
pub use traversal::{
    breadth_first_traversal, second_degree_neighbors, shortest_path, shortest_path_into,
    PathOutcome,
};
pub use vertex::{Edge, Label, Vertex};
