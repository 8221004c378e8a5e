use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::infra::MazeError;
use crate::state::ValidityRule;

pub const MAZE_FILE: &str = "MAZE_FILE";
pub const MAZE_STEP_DELAY_MS: &str = "MAZE_STEP_DELAY_MS";
pub const MAZE_VALIDITY: &str = "MAZE_VALIDITY";
pub const MAZE_SHOW_MAZE: &str = "MAZE_SHOW_MAZE";

const DEFAULT_MAZE_FILE: &str = "maze.txt";
const DEFAULT_STEP_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub maze_file: PathBuf,
    /// Pause between exploration steps; zero disables pacing.
    pub step_delay: Duration,
    pub validity: ValidityRule,
    /// Print the raw maze before exploring.
    pub show_maze: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            maze_file: PathBuf::from(DEFAULT_MAZE_FILE),
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
            validity: ValidityRule::default(),
            show_maze: true,
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self, MazeError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unparseable numbers and
    /// booleans fall back to their defaults; an unknown validity rule is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MazeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let maze_file = lookup(MAZE_FILE)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.maze_file);

        let step_delay = parse_or(&lookup, MAZE_STEP_DELAY_MS, DEFAULT_STEP_DELAY_MS);

        let validity = match lookup(MAZE_VALIDITY) {
            Some(value) => ValidityRule::parse(&value).ok_or(MazeError::InvalidConfig {
                key: MAZE_VALIDITY,
                value,
            })?,
            None => defaults.validity,
        };

        let show_maze = parse_or(&lookup, MAZE_SHOW_MAZE, defaults.show_maze);

        Ok(Self {
            maze_file,
            step_delay: Duration::from_millis(step_delay),
            validity,
            show_maze,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Debug,
{
    match lookup(key) {
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|_| {
            warn!("Ignoring {}={:?}, using {:?}", key, value, default);
            default
        }),
        None => default,
    }
}
