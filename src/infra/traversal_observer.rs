use crate::infra::Position;
use crate::runner::TraversalOutcome;
use crate::state::{AgentState, Effect, Maze};

/// Trait for observing traversal events while the runner explores a maze
pub trait TraversalObserver {
    /// Called once before exploration begins
    fn on_traversal_start(&mut self, _maze: &Maze, _agent: &AgentState) {
        // Default implementation does nothing
    }

    /// Called after every committed exploration step
    fn on_step(&mut self, maze: &Maze, agent: &AgentState);

    /// Called when a special cell changes an agent parameter
    fn on_effect_applied(&mut self, _effect: Effect, _agent: &AgentState) {
        // Default implementation does nothing
    }

    /// Called each time the agent arrives on a goal cell
    fn on_goal_reached(&mut self, steps: u32, position: Position);

    /// Called when exploration stops
    fn on_traversal_finished(&mut self, outcome: &TraversalOutcome);
}

/// Observer that ignores every event.
pub struct NullObserver;

impl TraversalObserver for NullObserver {
    fn on_step(&mut self, _maze: &Maze, _agent: &AgentState) {}

    fn on_goal_reached(&mut self, _steps: u32, _position: Position) {}

    fn on_traversal_finished(&mut self, _outcome: &TraversalOutcome) {}
}
