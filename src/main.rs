use std::io::{self, Write};

use dotenv::dotenv;
use mazerunner::infra::{DefaultObserver, load_maze, render_maze};
use mazerunner::{MazeRunner, RunnerConfig};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mazerunner=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_logging();

    let config = RunnerConfig::from_env()?;
    info!("Maze file: {}", config.maze_file.display());
    info!("Validity rule: {:?}", config.validity);

    let maze = load_maze(&config.maze_file)?;
    if maze.goal_positions().is_empty() {
        warn!("Maze has no goal cell, exploration will end when the frontier is exhausted");
    }

    if config.show_maze {
        let _ = writeln!(io::stdout(), "{}", render_maze(&maze));
    }

    let mut runner = MazeRunner::with_rule(maze, config.validity)
        .with_observer(DefaultObserver::new(config.step_delay));

    let outcome = runner.explore_dfs();
    if !outcome.is_goal_reached() {
        warn!("No goal reachable from the start");
    }

    Ok(())
}
