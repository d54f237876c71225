//! Breadth-first pathfinding over the tile grid.
//!
//! Both searches treat walkability as the only traversal predicate;
//! occupancy is the caller's concern, checked on the step it actually takes.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::grid::Grid;
use crate::state::{Direction, Position};

/// Walkable tiles reachable from `start` within `radius` steps, paired with
/// their step distance, in breadth-first discovery order.
///
/// Includes `start` itself and never crosses a non-walkable tile.
pub fn bfs_reachable(grid: &Grid, start: Position, radius: u32) -> Vec<(Position, u32)> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    let mut out = Vec::new();

    seen.insert(start);
    queue.push_back((start, 0u32));

    while let Some((pos, dist)) = queue.pop_front() {
        out.push((pos, dist));
        if dist == radius {
            continue;
        }
        for direction in Direction::ALL {
            let next = pos.step(direction);
            if grid.is_walkable(next) && seen.insert(next) {
                queue.push_back((next, dist + 1));
            }
        }
    }
    out
}

/// First step of a shortest walkable path from `from` towards `to`.
///
/// Whole-grid search with parent backtracking; returns `None` when `to` is
/// unreachable or equals `from`. Neighbours expand in the fixed compass
/// order, so ties between equal-length paths break deterministically.
pub fn first_step_towards(grid: &Grid, from: Position, to: Position) -> Option<Position> {
    if from == to {
        return None;
    }

    let mut parent: HashMap<Position, Position> = HashMap::new();
    let mut queue = VecDeque::new();
    parent.insert(from, from);
    queue.push_back(from);

    while let Some(pos) = queue.pop_front() {
        if pos == to {
            // Walk the parent chain back to the tile right after `from`.
            let mut step = pos;
            while parent[&step] != from {
                step = parent[&step];
            }
            return Some(step);
        }
        for direction in Direction::ALL {
            let next = pos.step(direction);
            if grid.is_walkable(next) && !parent.contains_key(&next) {
                parent.insert(next, pos);
                queue.push_back(next);
            }
        }
    }
    None
}
