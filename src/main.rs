//! Command-line front end: reads a height map, prints the two shortest climbs.
//!
//! Answers go to standard output, one per line; logs go to standard error.

use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use hillclimb::options::Options;
use hillclimb::{search, HeightMap};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let options = Options::parse();
    debug!(?options);

    let input = read_input(&options)?;
    let map: HeightMap = input.parse().context("could not parse height map")?;
    info!(
        width = map.width(),
        height = map.height(),
        start = ?map.start(),
        goal = ?map.goal(),
        "loaded height map"
    );

    for part in options.parts() {
        let distance = solve(&map, part, &options)?;
        println!("{distance}");
    }

    Ok(())
}

/// Answers one part of the puzzle.
fn solve(map: &HeightMap, part: u8, options: &Options) -> anyhow::Result<u32> {
    let distance = match part {
        1 => search::shortest_path(map, map.start(), map.goal()),
        2 => {
            let distance = search::min_distance_with(map, map.goal(), options.strategy);
            if options.check {
                let other = options.strategy.alternative();
                let expected = search::min_distance_with(map, map.goal(), other);
                if distance != expected {
                    bail!(
                        "strategies disagree: {:?} found {distance}, {other:?} found {expected}",
                        options.strategy
                    );
                }
            }
            distance
        }
        _ => bail!("no such part: {part}"),
    };

    if distance == map.unreachable() {
        info!(part, "goal is unreachable");
    } else {
        info!(part, distance, "found shortest climb");
    }
    Ok(distance)
}

fn read_input(options: &Options) -> anyhow::Result<String> {
    match &options.input {
        Some(path) if !options.reads_stdin() => fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("could not read standard input")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

    fn options(args: &[&str]) -> Options {
        Options::try_parse_from(std::iter::once("hillclimb").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn solve_both_parts() {
        let map: HeightMap = EXAMPLE.parse().unwrap();
        let options = options(&[]);
        assert_eq!(solve(&map, 1, &options).unwrap(), 31);
        assert_eq!(solve(&map, 2, &options).unwrap(), 29);
    }

    #[test]
    fn solve_with_cross_check() {
        let map: HeightMap = EXAMPLE.parse().unwrap();
        let options = options(&["--strategy", "reversed", "--check"]);
        assert_eq!(solve(&map, 2, &options).unwrap(), 29);
    }

    #[test]
    fn unreachable_goal_reports_the_sentinel() {
        let map: HeightMap = "SbzE".parse().unwrap();
        let options = options(&["--check"]);
        assert_eq!(solve(&map, 1, &options).unwrap(), 4);
        assert_eq!(solve(&map, 2, &options).unwrap(), 4);
    }

    #[test]
    fn reject_unknown_part() {
        let map: HeightMap = EXAMPLE.parse().unwrap();
        assert!(solve(&map, 3, &options(&[])).is_err());
    }

    #[test]
    fn read_input_from_file() {
        let path = std::env::temp_dir().join(format!("hillclimb-{}.txt", std::process::id()));
        fs::write(&path, EXAMPLE).unwrap();
        let options = options(&[path.to_str().unwrap()]);
        let input = read_input(&options).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(input, EXAMPLE);
    }

    #[test]
    fn missing_file_is_an_error() {
        let options = options(&["/nonexistent/hillclimb/input.txt"]);
        let err = read_input(&options).unwrap_err();
        assert!(err.to_string().contains("could not read"));
    }
}
