use crate::infra::{Position, TraversalObserver};
use crate::runner::TraversalOutcome;
use crate::state::{AgentState, Effect, Maze};

pub struct CompositeObserver {
    observers: Vec<Box<dyn TraversalObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Box<dyn TraversalObserver>>) -> Self {
        Self { observers }
    }
}

impl TraversalObserver for CompositeObserver {
    fn on_traversal_start(&mut self, maze: &Maze, agent: &AgentState) {
        for observer in &mut self.observers {
            observer.on_traversal_start(maze, agent);
        }
    }

    fn on_step(&mut self, maze: &Maze, agent: &AgentState) {
        for observer in &mut self.observers {
            observer.on_step(maze, agent);
        }
    }

    fn on_effect_applied(&mut self, effect: Effect, agent: &AgentState) {
        for observer in &mut self.observers {
            observer.on_effect_applied(effect, agent);
        }
    }

    fn on_goal_reached(&mut self, steps: u32, position: Position) {
        for observer in &mut self.observers {
            observer.on_goal_reached(steps, position);
        }
    }

    fn on_traversal_finished(&mut self, outcome: &TraversalOutcome) {
        for observer in &mut self.observers {
            observer.on_traversal_finished(outcome);
        }
    }
}
