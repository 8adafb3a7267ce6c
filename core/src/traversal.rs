use std::collections::VecDeque;

use tracing::trace;

use crate::graph::Graph;
use crate::vertex::Label;

/// Result of a shortest path query.
///
/// Keeps "no such endpoint" and "no route" apart; `hops()` folds both back
/// into the `-1` sentinel for callers that only want a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome<T> {
    /// Origin or destination is not in the graph.
    MissingEndpoint,
    /// Both endpoints exist but are in different components.
    Unreachable,
    /// `path` runs origin → destination inclusive; `hops == path.len() - 1`.
    Found { hops: u32, path: Vec<T> },
}

impl<T> PathOutcome<T> {
    pub fn hops(&self) -> i32 {
        match self {
            PathOutcome::Found { hops, .. } => *hops as i32,
            _ => -1,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found { .. })
    }

    pub fn into_path(self) -> Option<Vec<T>> {
        match self {
            PathOutcome::Found { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Neighbor labels of `label`, cloned out so the caller can mutate the
/// graph while walking them.
fn neighbor_labels<T: Label>(graph: &Graph<T>, label: &T) -> Vec<T> {
    graph
        .vertex(label)
        .map(|v| v.neighbors().cloned().collect())
        .unwrap_or_default()
}

fn is_visited<T: Label>(graph: &Graph<T>, label: &T) -> bool {
    graph.vertex(label).is_some_and(|v| v.is_visited())
}

/// Mark `label` visited. Returns false if it was visited already.
fn mark<T: Label>(graph: &mut Graph<T>, label: &T) -> bool {
    match graph.vertex_mut(label) {
        Some(v) if !v.is_visited() => {
            v.visit();
            true
        }
        _ => false,
    }
}

/// Breadth-first traversal from `origin`.
///
/// Returns labels in visitation order, origin first. Every vertex reachable
/// from `origin` appears exactly once; unreachable vertices never appear.
/// Returns None if `origin` is not in the graph.
///
/// Resets and then uses the vertices' visited flags, hence `&mut`.
pub fn breadth_first_traversal<T: Label>(graph: &mut Graph<T>, origin: &T) -> Option<VecDeque<T>> {
    if !graph.contains(origin) {
        return None;
    }
    graph.reset_vertices();

    let mut order: VecDeque<T> = VecDeque::new();
    let mut queue: VecDeque<T> = VecDeque::new();

    mark(graph, origin);
    order.push_back(origin.clone());
    queue.push_back(origin.clone());

    while let Some(front) = queue.pop_front() {
        for neighbor in neighbor_labels(graph, &front) {
            if mark(graph, &neighbor) {
                order.push_back(neighbor.clone());
                queue.push_back(neighbor);
            }
        }
    }

    trace!(visited = order.len(), "bfs: traversal complete");
    Some(order)
}

/// Unweighted shortest path from `origin` to `destination` by BFS.
///
/// Each newly discovered vertex records its predecessor and a cost of
/// parent cost + 1. The search stops as soon as `destination` is
/// discovered, so the path follows edge insertion order among equally
/// short routes.
pub fn shortest_path<T: Label>(graph: &mut Graph<T>, origin: &T, destination: &T) -> PathOutcome<T> {
    if !graph.contains(origin) || !graph.contains(destination) {
        return PathOutcome::MissingEndpoint;
    }
    graph.reset_vertices();

    if origin == destination {
        return PathOutcome::Found {
            hops: 0,
            path: vec![origin.clone()],
        };
    }

    let mut queue: VecDeque<T> = VecDeque::new();
    mark(graph, origin);
    queue.push_back(origin.clone());

    'search: while let Some(front) = queue.pop_front() {
        let front_cost = graph.vertex(&front).map_or(0, |v| v.cost());

        for neighbor in neighbor_labels(graph, &front) {
            if mark(graph, &neighbor) {
                if let Some(v) = graph.vertex_mut(&neighbor) {
                    v.set_cost(front_cost + 1);
                    v.set_predecessor(Some(front.clone()));
                }
                queue.push_back(neighbor.clone());
            }
            if neighbor == *destination {
                break 'search;
            }
        }
    }

    let Some(dest) = graph.vertex(destination) else {
        return PathOutcome::MissingEndpoint;
    };
    if !dest.has_predecessor() {
        return PathOutcome::Unreachable;
    }
    let hops = dest.cost();

    let mut path = vec![destination.clone()];
    let mut current = destination.clone();
    while let Some(prev) = graph.vertex(&current).and_then(|v| v.predecessor()).cloned() {
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();

    trace!(hops, "bfs: shortest path found");
    PathOutcome::Found { hops, path }
}

/// Sentinel form of [`shortest_path`].
///
/// On success pushes the destination, then each predecessor back to the
/// origin, so `path` reads as a stack whose top (`last()`) is the origin.
/// Returns the hop count, or -1 with `path` untouched if either endpoint is
/// missing or the destination is unreachable.
pub fn shortest_path_into<T: Label>(
    graph: &mut Graph<T>,
    origin: &T,
    destination: &T,
    path: &mut Vec<T>,
) -> i32 {
    match shortest_path(graph, origin, destination) {
        PathOutcome::Found { hops, path: found } => {
            path.extend(found.into_iter().rev());
            hops as i32
        }
        _ => -1,
    }
}

/// Vertices exactly two hops from `origin` that are not direct neighbors.
///
/// Marks the origin and its neighbors visited, then walks each neighbor's
/// adjacency list in edge order, collecting every unvisited vertex once.
/// Returns None if `origin` is not in the graph.
pub fn second_degree_neighbors<T: Label>(graph: &mut Graph<T>, origin: &T) -> Option<Vec<T>> {
    if !graph.contains(origin) {
        return None;
    }
    graph.reset_vertices();

    mark(graph, origin);
    let direct = neighbor_labels(graph, origin);
    for neighbor in &direct {
        mark(graph, neighbor);
    }

    let mut found = Vec::new();
    for neighbor in &direct {
        for candidate in neighbor_labels(graph, neighbor) {
            if !is_visited(graph, &candidate) {
                mark(graph, &candidate);
                found.push(candidate);
            }
        }
    }
    Some(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_chain(n: u32) -> Graph<u32> {
        let mut g = Graph::new();
        for i in 0..n {
            g.add_vertex(i);
        }
        for i in 1..n {
            g.add_edge(&(i - 1), &i);
        }
        g
    }

    fn make_star(leaves: u32) -> Graph<u32> {
        let mut g = Graph::new();
        g.add_vertex(0);
        for i in 1..=leaves {
            g.add_vertex(i);
            g.add_edge(&0, &i);
        }
        g
    }

    fn make_cycle(n: u32) -> Graph<u32> {
        let mut g = make_chain(n);
        g.add_edge(&(n - 1), &0);
        g
    }

    /// Nine-vertex grid-like graph with thirteen edges.
    fn make_lattice() -> Graph<char> {
        let mut g = Graph::new();
        for c in 'A'..='I' {
            g.add_vertex(c);
        }
        let edges = [
            ('A', 'B'),
            ('A', 'D'),
            ('A', 'E'),
            ('B', 'C'),
            ('B', 'E'),
            ('C', 'F'),
            ('D', 'G'),
            ('E', 'H'),
            ('E', 'F'),
            ('F', 'I'),
            ('F', 'H'),
            ('G', 'H'),
            ('H', 'I'),
        ];
        for (a, b) in edges {
            assert!(g.add_edge(&a, &b));
        }
        g
    }

    fn assert_walk<T: Label + std::fmt::Debug>(g: &Graph<T>, path: &[T]) {
        for pair in path.windows(2) {
            assert!(g.has_edge(&pair[0], &pair[1]), "{:?} not adjacent", pair);
        }
    }

    #[test]
    fn test_bfs_chain() {
        let mut g = make_chain(5);
        let order = breadth_first_traversal(&mut g, &0).unwrap();
        assert_eq!(order, VecDeque::from(vec![0, 1, 2, 3, 4]));
    }

    #[test]
    fn test_bfs_star_follows_edge_order() {
        let mut g = make_star(4);
        let order = breadth_first_traversal(&mut g, &0).unwrap();
        assert_eq!(order, VecDeque::from(vec![0, 1, 2, 3, 4]));

        let order = breadth_first_traversal(&mut g, &3).unwrap();
        assert_eq!(order, VecDeque::from(vec![3, 0, 1, 2, 4]));
    }

    #[test]
    fn test_bfs_cycle_no_infinite_loop() {
        let mut g = make_cycle(6);
        let order = breadth_first_traversal(&mut g, &0).unwrap();
        assert_eq!(order.len(), 6);
    }

    #[test]
    fn test_bfs_empty_graph() {
        let mut g: Graph<&str> = Graph::new();
        assert!(breadth_first_traversal(&mut g, &"X").is_none());
    }

    #[test]
    fn test_bfs_start_not_in_graph() {
        let mut g = make_chain(3);
        assert!(breadth_first_traversal(&mut g, &99).is_none());
    }

    #[test]
    fn test_bfs_skips_other_components() {
        let mut g = make_chain(3);
        g.add_vertex(10);
        g.add_vertex(11);
        g.add_edge(&10, &11);
        let order = breadth_first_traversal(&mut g, &0).unwrap();
        assert!(!order.contains(&10));
        assert!(!order.contains(&11));
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_bfs_repeatable() {
        let mut g = make_lattice();
        let first = breadth_first_traversal(&mut g, &'A').unwrap();
        let second = breadth_first_traversal(&mut g, &'A').unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.iter().collect::<String>(),
            "ABDECGHFI"
        );
    }

    #[test]
    fn test_shortest_path_lattice() {
        let mut g = make_lattice();
        match shortest_path(&mut g, &'A', &'I') {
            PathOutcome::Found { hops, path } => {
                assert_eq!(hops, 3);
                // H is discovered from E before F, so I is reached via H.
                assert_eq!(path, vec!['A', 'E', 'H', 'I']);
                assert_walk(&g, &path);
            }
            other => panic!("expected a path, got {:?}", other),
        }
    }

    #[test]
    fn test_shortest_path_into_stack_order() {
        let mut g = make_lattice();
        let mut stack = Vec::new();
        assert_eq!(shortest_path_into(&mut g, &'A', &'I', &mut stack), 3);

        let mut popped = Vec::new();
        while let Some(label) = stack.pop() {
            popped.push(label);
        }
        assert_eq!(popped, vec!['A', 'E', 'H', 'I']);
    }

    #[test]
    fn test_shortest_path_chain() {
        let mut g = make_chain(5);
        let outcome = shortest_path(&mut g, &0, &4);
        assert_eq!(outcome.hops(), 4);
        assert_eq!(outcome.into_path().unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_shortest_path_reverse_direction() {
        let mut g = make_chain(4);
        let path = shortest_path(&mut g, &3, &0).into_path().unwrap();
        assert_eq!(path, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_shortest_path_cycle_takes_short_side() {
        let mut g = make_cycle(6);
        assert_eq!(shortest_path(&mut g, &0, &5).hops(), 1);
        assert_eq!(shortest_path(&mut g, &0, &3).hops(), 3);
        assert_eq!(shortest_path(&mut g, &1, &5).hops(), 2);
    }

    #[test]
    fn test_shortest_path_self() {
        let mut g = make_chain(3);
        let outcome = shortest_path(&mut g, &1, &1);
        assert_eq!(
            outcome,
            PathOutcome::Found {
                hops: 0,
                path: vec![1]
            }
        );
    }

    #[test]
    fn test_shortest_path_no_path() {
        let mut g = make_chain(3);
        g.add_vertex(7);
        let outcome = shortest_path(&mut g, &0, &7);
        assert_eq!(outcome, PathOutcome::Unreachable);
        assert_eq!(outcome.hops(), -1);

        let mut stack = Vec::new();
        assert_eq!(shortest_path_into(&mut g, &0, &7, &mut stack), -1);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_shortest_path_missing_endpoint() {
        let mut g = make_chain(3);
        assert_eq!(shortest_path(&mut g, &0, &42), PathOutcome::MissingEndpoint);
        assert_eq!(shortest_path(&mut g, &42, &0), PathOutcome::MissingEndpoint);
        assert_eq!(shortest_path(&mut g, &42, &0).hops(), -1);
    }

    #[test]
    fn test_no_stale_state_between_queries() {
        let mut g = make_chain(4);
        g.add_vertex(9);
        assert!(shortest_path(&mut g, &0, &3).is_found());
        // 9 is isolated; stale predecessors from the previous run must not leak.
        assert_eq!(shortest_path(&mut g, &9, &3), PathOutcome::Unreachable);
        assert_eq!(shortest_path(&mut g, &3, &0).hops(), 3);
    }

    #[test]
    fn test_shortest_path_after_edge_removal() {
        let mut g = make_cycle(5);
        assert_eq!(shortest_path(&mut g, &0, &4).hops(), 1);
        g.remove_edge(&4, &0);
        let outcome = shortest_path(&mut g, &0, &4);
        assert_eq!(outcome.hops(), 4);
        assert_walk(&g, &outcome.into_path().unwrap());
    }

    #[test]
    fn test_second_degree_neighbors() {
        // 0 - 1 - 3, 0 - 2 - 3, 2 - 4
        let mut g = Graph::new();
        for i in 0..5 {
            g.add_vertex(i);
        }
        for (a, b) in [(0, 1), (0, 2), (1, 3), (2, 3), (2, 4)] {
            g.add_edge(&a, &b);
        }
        assert_eq!(second_degree_neighbors(&mut g, &0).unwrap(), vec![3, 4]);
    }

    #[test]
    fn test_second_degree_excludes_direct_neighbors() {
        // Triangle: every vertex is a direct neighbor of every other.
        let mut g = make_cycle(3);
        assert!(second_degree_neighbors(&mut g, &0).unwrap().is_empty());
    }

    #[test]
    fn test_second_degree_missing_origin() {
        let mut g = make_chain(2);
        assert!(second_degree_neighbors(&mut g, &5).is_none());
    }
}
