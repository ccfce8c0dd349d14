use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Hill climbing solver: how many steps to the best signal?
#[derive(Parser, Debug)]
pub struct Options {
    /// Read the height map from `FILE` (standard input if omitted or `-`).
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Only solve part `NUMBER`.
    #[arg(short, long, value_name = "NUMBER", value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,

    /// How to find the shortest climb from the lowest ground.
    #[arg(long, value_enum, default_value_t = Strategy::Repeated)]
    pub strategy: Strategy,

    /// Cross-check the result against the other strategy.
    #[arg(long)]
    pub check: bool,
}

/// Formulations of the shortest climb from any cell at the lowest elevation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// One search from each lowest cell; simple, but quadratic in the worst case.
    Repeated,
    /// A single search backwards from the goal.
    Reversed,
}

impl Strategy {
    /// The other formulation, for cross-checking.
    pub fn alternative(self) -> Self {
        match self {
            Strategy::Repeated => Strategy::Reversed,
            Strategy::Reversed => Strategy::Repeated,
        }
    }
}

impl Options {
    pub fn parts(&self) -> RangeInclusive<u8> {
        if let Some(only) = self.part {
            only..=only
        } else {
            1..=2
        }
    }

    /// Whether the input should be read from standard input.
    pub fn reads_stdin(&self) -> bool {
        match &self.input {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }
}
