pub mod config;
pub mod infra;
pub mod runner;
pub mod state;

// Re-export commonly used types for convenience
pub use config::RunnerConfig;
pub use infra::{Direction, MazeError, Position};
pub use runner::{MazeRunner, TraversalOutcome};
pub use state::{Maze, ValidityRule};
