//! Beam search: level-synchronous breadth-first expansion that keeps only the
//! best `beta` frontier nodes per level.
//!
//! Pruned candidates are gone for good and visited positions are never
//! reopened, so the search is deliberately incomplete: it can discard the only
//! route to the goal, and a returned path carries no optimality guarantee.
//! What it buys is a hard bound on frontier size.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;

use crate::algorithms::common::{Node, NodeArena, NodeId};
use crate::grid::{Grid, Heuristic, Position};
use crate::statistics::{AlgorithmParams, SearchError, SearchStats};

/// Runs a beam search over `grid` with frontier width `beta`.
///
/// Returns the path (start and goal inclusive) when one is found, `None` with
/// an error entry in the stats when start or goal is undefined, and `None`
/// with normal stats when the beam empties without reaching the goal.
pub fn beam_search(
    grid: &Grid,
    beta: usize,
    heuristic: Heuristic,
) -> (Option<Vec<Position>>, SearchStats) {
    assert!(beta >= 1, "beam width must be at least 1");

    let params = AlgorithmParams::Beam { width: beta };
    let (start, goal) = match (grid.start, grid.goal) {
        (Some(start), Some(goal)) => (start, goal),
        (None, _) => return (None, SearchStats::failed(params, SearchError::MissingStart)),
        (_, None) => return (None, SearchStats::failed(params, SearchError::MissingGoal)),
    };

    let mut stats = SearchStats::new(params);
    let mut arena = NodeArena::new();
    let root = arena.insert(Node {
        position: start,
        parent: None,
        g: 0.0,
        h: grid.heuristic(start, goal, heuristic),
        depth: 0,
    });

    let mut current_level: Vec<NodeId> = vec![root];
    let mut visited: FxHashSet<Position> = FxHashSet::default();

    while !current_level.is_empty() {
        let mut next_level: Vec<NodeId> = Vec::new();

        for &node_id in &current_level {
            stats.nodes_expanded += 1;

            let (position, g, depth) = {
                let node = arena.get(node_id);
                (node.position, node.g, node.depth)
            };

            // First goal reached within a level wins; same-level candidates
            // are not compared against each other.
            if position == goal {
                let path = arena.reconstruct_path(node_id);
                stats.path_length = path.len();
                stats.path_cost = g;
                return (Some(path), stats);
            }

            visited.insert(position);

            for neighbor in grid.neighbors(position) {
                if visited.contains(&neighbor) {
                    continue;
                }
                let child = Node {
                    position: neighbor,
                    parent: Some(node_id),
                    g: g + grid.get_cost(neighbor.x, neighbor.y),
                    h: grid.heuristic(neighbor, goal, heuristic),
                    depth: depth + 1,
                };
                next_level.push(arena.insert(child));
                stats.nodes_generated += 1;
            }
        }

        // Keep the beta best candidates by f = g + h. The sort is stable, so
        // generation order (and through it the neighbor probe order) breaks
        // ties reproducibly.
        next_level.sort_by(|&a, &b| {
            arena
                .get(a)
                .f()
                .partial_cmp(&arena.get(b).f())
                .unwrap_or(Ordering::Equal)
        });
        next_level.truncate(beta);
        current_level = next_level;
    }

    (None, stats)
}
