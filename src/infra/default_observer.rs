use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::infra::{Position, TraversalObserver, render_with_agent};
use crate::runner::TraversalOutcome;
use crate::state::{AgentState, Effect, Maze};

/// Logs traversal events and prints a snapshot of the maze after each step,
/// pausing between steps so a human can follow along.
pub struct DefaultObserver {
    step_delay: Duration,
}

impl DefaultObserver {
    pub fn new(step_delay: Duration) -> Self {
        Self { step_delay }
    }
}

impl TraversalObserver for DefaultObserver {
    fn on_traversal_start(&mut self, maze: &Maze, agent: &AgentState) {
        info!("Traversal started at {}", agent.position);
        info!("- rows: {}", maze.row_count());
        info!("- cells: {}", maze.len());
    }

    fn on_step(&mut self, maze: &Maze, agent: &AgentState) {
        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }

        info!(
            "step: {}, pos: {}, perception: {}, step width: {}",
            agent.steps_taken, agent.position, agent.perception_radius, agent.step_width,
        );

        let snapshot = render_with_agent(maze, agent.position);
        let _ = writeln!(io::stdout(), "{}", snapshot);
    }

    fn on_effect_applied(&mut self, effect: Effect, agent: &AgentState) {
        debug!(
            "{:?} at {} -> perception {}, step width {}",
            effect, agent.position, agent.perception_radius, agent.step_width
        );
    }

    fn on_goal_reached(&mut self, steps: u32, position: Position) {
        info!("Goal reached at {}! Steps taken: {}", position, steps);
    }

    fn on_traversal_finished(&mut self, outcome: &TraversalOutcome) {
        match outcome {
            TraversalOutcome::GoalReached { steps, .. } => {
                info!("Traversal finished on goal after {} steps", steps);
            }
            TraversalOutcome::Exhausted { steps, visited } => {
                info!(
                    "Traversal exhausted the reachable region: {} cells visited, {} steps",
                    visited, steps
                );
            }
        }
    }
}
