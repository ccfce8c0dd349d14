//! Shortest climbs on a height map.
//!
//! All edges have unit cost, so a breadth-first search finds shortest paths: cells leave the
//! frontier in non-decreasing order of distance, and the first time the target leaves it, its
//! distance is final.

use tracing::{debug, trace};

use crate::frontier::{DistanceTable, Frontier};
use crate::heightmap::{Elevation, HeightMap};
use crate::options::Strategy;
use crate::position::Position;
use crate::rule::{self, Traversal};

/// Minimum number of steps from `start` to `goal`, or [`map.unreachable()`] if there's no way.
///
/// Panics if `start` is out of bounds.
///
/// [`map.unreachable()`]: HeightMap::unreachable
pub fn shortest_path(map: &HeightMap, start: Position, goal: Position) -> u32 {
    bfs(map, start, Traversal::Forward, |pos| pos == goal)
}

/// Minimum, over every cell at the lowest elevation, of the number of steps to `goal`.
///
/// Runs an independent search from each candidate, so this takes time proportional to the number
/// of candidates times the number of cells.
pub fn min_distance_from_lowest(map: &HeightMap, goal: Position) -> u32 {
    map.find_all(Elevation::LOWEST)
        .map(|start| {
            let distance = shortest_path(map, start, goal);
            trace!(?start, distance, "candidate start");
            distance
        })
        .fold(map.unreachable(), u32::min)
}

/// Same as [`min_distance_from_lowest`], but with a single search that walks backwards from
/// `goal` until it meets the first cell at the lowest elevation.
pub fn min_distance_from_lowest_reversed(map: &HeightMap, goal: Position) -> u32 {
    bfs(map, goal, Traversal::Backward, |pos| map[pos] == Elevation::LOWEST)
}

/// Solves the lowest-start query with `strategy`.
pub fn min_distance_with(map: &HeightMap, goal: Position, strategy: Strategy) -> u32 {
    match strategy {
        Strategy::Repeated => min_distance_from_lowest(map, goal),
        Strategy::Reversed => min_distance_from_lowest_reversed(map, goal),
    }
}

/// Breadth-first search from `root` until some cell satisfies `is_target`.
///
/// Returns the distance to that cell, or the unreachable sentinel if the frontier runs dry first.
fn bfs(
    map: &HeightMap,
    root: Position,
    traversal: Traversal,
    is_target: impl Fn(Position) -> bool,
) -> u32 {
    let mut frontier = Frontier::new(DistanceTable::for_grid(map.grid()));
    frontier.push(root, 0);

    while let Some((pos, distance)) = frontier.pop() {
        if is_target(pos) {
            debug!(
                ?root,
                ?pos,
                distance,
                expanded = frontier.table().visited_count(),
                "reached target"
            );
            return distance;
        }

        for next in rule::legal_steps(map, pos, traversal) {
            frontier.push(next, distance + 1);
        }
    }

    debug!(
        ?root,
        expanded = frontier.table().visited_count(),
        "target unreachable"
    );
    map.unreachable()
}
