//! Dynamic-weighted A*: best-first search whose heuristic weight decays with
//! node depth.
//!
//! The evaluation value is `f = g + h + epsilon * (1 - depth/N) * h` where `N`
//! estimates the maximum search depth. Shallow nodes are ranked greedily
//! (heuristic inflated by up to `1 + epsilon`); as depth approaches `N` the
//! inflation fades out, and past `N` it turns into a discount. With
//! `epsilon = 0` the ordering is plain `g + h` and the search is standard A*.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::algorithms::common::{Node, NodeArena, NodeId};
use crate::grid::{Grid, Heuristic, Position};
use crate::statistics::{AlgorithmParams, SearchError, SearchStats};

/// Heap entry ordered by evaluation value alone, reversed so the std max-heap
/// pops the smallest value. Entries for the same position are never compared
/// beyond their value.
struct OpenEntry {
    f: f64,
    node: NodeId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.partial_cmp(&self.f).unwrap_or(Ordering::Equal)
    }
}

/// Runs dynamic-weighted A* over `grid` with heuristic weight `epsilon`.
///
/// Same result surface as [`crate::algorithms::beam_search::beam_search`]:
/// the path plus stats on success, `None` with an error entry when start or
/// goal is undefined, `None` with normal stats when the open set empties.
pub fn dynamic_weighted_astar(
    grid: &Grid,
    epsilon: f64,
    heuristic: Heuristic,
) -> (Option<Vec<Position>>, SearchStats) {
    assert!(epsilon >= 0.0, "epsilon must be non-negative");

    let (start, goal) = match (grid.start, grid.goal) {
        (Some(start), Some(goal)) => (start, goal),
        (None, _) => {
            let params = AlgorithmParams::DynamicWeighted {
                epsilon,
                max_depth: 0.0,
            };
            return (None, SearchStats::failed(params, SearchError::MissingStart));
        }
        (_, None) => {
            let params = AlgorithmParams::DynamicWeighted {
                epsilon,
                max_depth: 0.0,
            };
            return (None, SearchStats::failed(params, SearchError::MissingGoal));
        }
    };

    // Estimated maximum search depth: heuristic distance start-to-goal scaled
    // by 1.5, or the larger grid dimension when that estimate is zero.
    let mut max_depth = grid.heuristic(start, goal, heuristic) * 1.5;
    if max_depth == 0.0 {
        max_depth = grid.width.max(grid.height) as f64;
    }

    let params = AlgorithmParams::DynamicWeighted { epsilon, max_depth };
    let mut stats = SearchStats::new(params);

    let mut arena = NodeArena::new();
    let root = arena.insert(Node {
        position: start,
        parent: None,
        g: 0.0,
        h: grid.heuristic(start, goal, heuristic),
        depth: 0,
    });

    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        f: arena.get(root).weighted_f(epsilon, max_depth),
        node: root,
    });
    let mut open_index: FxHashMap<Position, NodeId> = FxHashMap::default();
    open_index.insert(start, root);
    let mut closed: FxHashSet<Position> = FxHashSet::default();

    while let Some(entry) = open.pop() {
        let current = entry.node;
        let position = arena.get(current).position;

        // Stale duplicate left behind by a cost improvement; there is no
        // decrease-key, superseded entries are discarded here instead.
        if closed.contains(&position) {
            continue;
        }

        stats.nodes_expanded += 1;

        if position == goal {
            let path = arena.reconstruct_path(current);
            stats.path_length = path.len();
            stats.path_cost = arena.get(current).g;
            return (Some(path), stats);
        }

        closed.insert(position);
        open_index.remove(&position);

        let (current_g, current_depth) = {
            let node = arena.get(current);
            (node.g, node.depth)
        };

        for neighbor in grid.neighbors(position) {
            if closed.contains(&neighbor) {
                continue;
            }
            let tentative_g = current_g + grid.get_cost(neighbor.x, neighbor.y);

            if let Some(&existing) = open_index.get(&neighbor) {
                if tentative_g < arena.get(existing).g {
                    // Cheaper route to an open position: rewrite the node in
                    // place (h stays fixed) and push a fresh entry. The old
                    // entry remains queued and dies on the closed-set check.
                    let node = arena.get_mut(existing);
                    node.g = tentative_g;
                    node.parent = Some(current);
                    node.depth = current_depth + 1;
                    let f = arena.get(existing).weighted_f(epsilon, max_depth);
                    open.push(OpenEntry { f, node: existing });
                }
            } else {
                let child = Node {
                    position: neighbor,
                    parent: Some(current),
                    g: tentative_g,
                    h: grid.heuristic(neighbor, goal, heuristic),
                    depth: current_depth + 1,
                };
                let id = arena.insert(child);
                let f = arena.get(id).weighted_f(epsilon, max_depth);
                open.push(OpenEntry { f, node: id });
                open_index.insert(neighbor, id);
                stats.nodes_generated += 1;
            }
        }
    }

    (None, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn missing_markers_are_reported_in_stats() {
        let mut grid = Grid::new(3, 3);
        let (path, stats) = dynamic_weighted_astar(&grid, 1.0, Heuristic::Manhattan);
        assert!(path.is_none());
        assert_eq!(stats.error, Some(SearchError::MissingStart));

        grid.set_cell(0, 0, Cell::Start);
        let (path, stats) = dynamic_weighted_astar(&grid, 1.0, Heuristic::Manhattan);
        assert!(path.is_none());
        assert_eq!(stats.error, Some(SearchError::MissingGoal));
    }

    #[test]
    fn zero_epsilon_finds_the_optimal_cost_on_an_open_grid() {
        let mut grid = Grid::new(5, 5);
        grid.set_cell(0, 0, Cell::Start);
        grid.set_cell(4, 4, Cell::Goal);
        let (path, stats) = dynamic_weighted_astar(&grid, 0.0, Heuristic::Manhattan);
        let path = path.unwrap();
        assert_eq!(stats.path_cost, 8.0);
        assert_eq!(stats.path_length, 9);
        assert_eq!(path[0], Position::new(0, 0));
        assert_eq!(path[8], Position::new(4, 4));
    }

    #[test]
    fn start_equals_goal_is_satisfied_on_the_first_pop() {
        let mut grid = Grid::new(6, 6);
        grid.set_cell(3, 3, Cell::Start);
        grid.set_cell(3, 3, Cell::Goal);
        let (path, stats) = dynamic_weighted_astar(&grid, 2.0, Heuristic::Manhattan);
        assert_eq!(path, Some(vec![Position::new(3, 3)]));
        assert_eq!(stats.path_cost, 0.0);
        assert_eq!(stats.path_length, 1);
        assert_eq!(stats.nodes_expanded, 1);
    }

    #[test]
    fn zero_heuristic_estimate_falls_back_to_grid_dimension() {
        let mut grid = Grid::new(9, 4);
        grid.set_cell(1, 1, Cell::Start);
        grid.set_cell(1, 1, Cell::Goal);
        let (_, stats) = dynamic_weighted_astar(&grid, 1.0, Heuristic::Manhattan);
        assert_eq!(
            stats.params,
            AlgorithmParams::DynamicWeighted {
                epsilon: 1.0,
                max_depth: 9.0
            }
        );
    }

    #[test]
    fn poison_is_paid_once_per_traversed_cell() {
        // single-file corridor, poison in the middle
        let mut grid = Grid::new(3, 1);
        grid.set_cell(0, 0, Cell::Start);
        grid.set_cell(1, 0, Cell::Poison);
        grid.set_cell(2, 0, Cell::Goal);
        let (path, stats) = dynamic_weighted_astar(&grid, 0.0, Heuristic::Manhattan);
        assert_eq!(
            path,
            Some(vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
            ])
        );
        assert_eq!(stats.path_cost, 6.0);
    }

    #[test]
    fn avoids_poison_when_a_detour_is_cheaper() {
        // poison next to the start, open row underneath
        let mut grid = Grid::new(3, 2);
        grid.set_cell(0, 0, Cell::Start);
        grid.set_cell(1, 0, Cell::Poison);
        grid.set_cell(2, 0, Cell::Goal);
        let (path, stats) = dynamic_weighted_astar(&grid, 0.0, Heuristic::Manhattan);
        let path = path.unwrap();
        assert_eq!(stats.path_cost, 4.0);
        assert!(!path.contains(&Position::new(1, 0)));
    }

    /// Two poison cells sit on the straight row to the goal and the weighting
    /// sends the search through them first, so the detour row underneath
    /// reaches several open positions second, with cheaper costs. The
    /// improvement rewrites their cost and parent in place; the final path
    /// and its cost are only right if those rewrites happened.
    #[test]
    fn cheaper_routes_rewrite_open_nodes_in_place() {
        let mut grid = Grid::new(6, 5);
        for x in 0..6 {
            grid.set_cell(x, 2, Cell::Obstacle);
        }
        grid.set_cell(0, 3, Cell::Start);
        grid.set_cell(1, 3, Cell::Poison);
        grid.set_cell(2, 3, Cell::Poison);
        grid.set_cell(5, 3, Cell::Goal);
        grid.poison_cost = 4.0;

        let (path, stats) = dynamic_weighted_astar(&grid, 1.0, Heuristic::Manhattan);
        let path = path.unwrap();

        // The detour through row 4 wins; the poison cells stay off the path.
        assert_eq!(stats.path_cost, 7.0);
        assert_eq!(stats.path_length, 8);
        assert_eq!(
            &path[..5],
            &[
                Position::new(0, 3),
                Position::new(0, 4),
                Position::new(1, 4),
                Position::new(2, 4),
                Position::new(3, 4),
            ]
        );
        assert_eq!(path[7], Position::new(5, 3));
        // the reported cost is the sum of step costs along the final parent
        // chain, so a botched rewrite would show up here
        let recomputed: f64 = path[1..]
            .iter()
            .map(|p| grid.get_cost(p.x, p.y))
            .sum();
        assert_eq!(recomputed, stats.path_cost);
    }

    #[test]
    fn walled_off_goal_empties_the_open_set() {
        let mut grid = Grid::new(5, 5);
        grid.set_cell(0, 0, Cell::Start);
        grid.set_cell(4, 4, Cell::Goal);
        grid.set_cell(3, 4, Cell::Obstacle);
        grid.set_cell(3, 3, Cell::Obstacle);
        grid.set_cell(4, 3, Cell::Obstacle);
        let (path, stats) = dynamic_weighted_astar(&grid, 1.5, Heuristic::Manhattan);
        assert!(path.is_none());
        assert!(stats.nodes_expanded > 0);
        assert_eq!(stats.error, None);
    }
}
