//! Find the shortest climb to the best signal on an elevation map.
//!
//! # High-level overview
//!
//! The input is a rectangular map of elevations, one letter per cell, from `a` (lowest) to `z`
//! (highest). Two cells are marked instead: `S`, the current position, at elevation `a`, and `E`,
//! the location with the best signal, at elevation `z`.
//!
//! Each step moves to one of the four orthogonally adjacent cells, and can go up at most one
//! level; going down is never restricted. The program answers two questions:
//!
//! 1. What is the fewest number of steps from `S` to `E`?
//! 2. What is the fewest number of steps to `E` from *any* cell at elevation `a`?
//!
//! # Implementation notes
//!
//! The map is an implicit, directed, unweighted graph, so a breadth-first search finds shortest
//! paths. A cell is marked as visited when it is first enqueued, not when it is expanded, so each
//! cell enters the queue at most once and each search is linear in the number of cells.
//!
//! A goal that can't be reached is not an error: its distance is reported as `width * height`,
//! which is more than the length of any path on the map.
//!
//! The second question can be answered by repeating the first search from every lowest cell, or
//! with a single search that follows the steps backwards, from `E` to the nearest `a`. Both are
//! available (see `--strategy`), and `--check` runs both and compares the answers.
//!
//! Set `RUST_LOG=debug` (or `trace`) to see how much of the map each search explores.
//!
//! # Build, test and execute
//!
//! - Run the unit tests: `cargo test`
//! - Solve a puzzle input: `cargo run --release -- input.txt`
//! - View this documentation in the browser: `cargo doc --open`
//! - For more options, consult the Cargo documentation and `--help`.

pub mod bitgrid;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod heightmap;
pub mod options;
pub mod position;
pub mod rule;
pub mod search;

pub use crate::error::GridError;
pub use crate::heightmap::{Elevation, HeightMap};
pub use crate::options::Strategy;
pub use crate::position::Position;
pub use crate::search::{min_distance_from_lowest, min_distance_from_lowest_reversed, shortest_path};
