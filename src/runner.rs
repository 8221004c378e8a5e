use std::collections::HashSet;

use tracing::debug;

use crate::infra::{Direction, NullObserver, Position, TraversalObserver};
use crate::state::{AgentState, CellKind, Effect, Maze, ValidityRule};

/// What `update_gameplay` did for the cell under the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEvent {
    Effect(Effect),
    GoalReached { steps: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOutcome {
    GoalReached { steps: u32, position: Position },
    /// Frontier ran dry without touching a goal.
    Exhausted { steps: u32, visited: usize },
}

impl TraversalOutcome {
    pub fn steps(&self) -> u32 {
        match self {
            TraversalOutcome::GoalReached { steps, .. } | TraversalOutcome::Exhausted { steps, .. } => {
                *steps
            }
        }
    }

    pub fn is_goal_reached(&self) -> bool {
        matches!(self, TraversalOutcome::GoalReached { .. })
    }
}

/// Drives a single agent through a maze. The maze is never mutated.
pub struct MazeRunner {
    maze: Maze,
    agent: AgentState,
    rule: ValidityRule,
    observer: Box<dyn TraversalObserver>,
}

impl MazeRunner {
    pub fn new(maze: Maze) -> Self {
        Self::with_rule(maze, ValidityRule::default())
    }

    pub fn with_rule(maze: Maze, rule: ValidityRule) -> Self {
        Self {
            maze,
            agent: AgentState::new(),
            rule,
            observer: Box::new(NullObserver),
        }
    }

    pub fn with_observer(mut self, observer: impl TraversalObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn agent(&self) -> &AgentState {
        &self.agent
    }

    pub fn rule(&self) -> ValidityRule {
        self.rule
    }

    pub fn position(&self) -> Position {
        self.agent.position
    }

    pub fn direction(&self) -> Direction {
        self.agent.direction
    }

    pub fn perception_radius(&self) -> u32 {
        self.agent.perception_radius
    }

    pub fn step_width(&self) -> u32 {
        self.agent.step_width
    }

    pub fn steps_taken(&self) -> u32 {
        self.agent.steps_taken
    }

    pub fn is_valid_move(&self, pos: &Position) -> bool {
        self.maze
            .kind_at(pos)
            .is_some_and(|kind| self.rule.allows(kind))
    }

    /// Steps one cell in the facing direction. Returns `false` and leaves the
    /// agent untouched when the target is out of bounds or not enterable.
    pub fn move_forward(&mut self) -> bool {
        let target = self.agent.position.step(self.agent.direction);
        if !self.is_valid_move(&target) {
            debug!(
                "Move {:?} from {} to {} rejected",
                self.agent.direction, self.agent.position, target
            );
            return false;
        }

        self.commit(target);
        true
    }

    pub fn turn_left(&mut self) {
        self.agent.direction = self.agent.direction.turn_left();
        debug!("Turned left, now facing {:?}", self.agent.direction);
    }

    pub fn turn_right(&mut self) {
        self.agent.direction = self.agent.direction.turn_right();
        debug!("Turned right, now facing {:?}", self.agent.direction);
    }

    pub fn is_goal_reached(&self) -> bool {
        self.maze
            .kind_at(&self.agent.position)
            .is_some_and(CellKind::is_goal)
    }

    /// Applies the rule of the cell under the agent. Re-entering a special
    /// cell triggers it again.
    pub fn update_gameplay(&mut self) -> Option<CellEvent> {
        match self.maze.kind_at(&self.agent.position)? {
            CellKind::Effect(effect) => {
                self.agent.apply(effect);
                self.observer.on_effect_applied(effect, &self.agent);
                Some(CellEvent::Effect(effect))
            }
            CellKind::Goal => {
                let steps = self.agent.steps_taken;
                debug!("Goal cell entered at {} after {} steps", self.agent.position, steps);
                self.observer.on_goal_reached(steps, self.agent.position);
                Some(CellEvent::GoalReached { steps })
            }
            CellKind::Open | CellKind::Wall | CellKind::Unknown(_) => None,
        }
    }

    fn commit(&mut self, target: Position) {
        self.agent.position = target;
        self.agent.steps_taken += 1;
        self.update_gameplay();
    }

    /// Depth-first exploration from the current position until a goal is
    /// entered or every reachable cell has been committed once.
    #[tracing::instrument(level = "debug", skip(self), fields(start = %self.agent.position))]
    pub fn explore_dfs(&mut self) -> TraversalOutcome {
        let mut frontier = vec![self.agent.position];
        let mut visited: HashSet<Position> = HashSet::new();

        self.observer.on_traversal_start(&self.maze, &self.agent);

        let outcome = loop {
            let Some(current) = frontier.pop() else {
                break TraversalOutcome::Exhausted {
                    steps: self.agent.steps_taken,
                    visited: visited.len(),
                };
            };

            if visited.contains(&current) {
                continue;
            }

            // The first entry is the start cell, where the agent already stands.
            if visited.is_empty() {
                self.update_gameplay();
            } else {
                self.commit(current);
            }
            self.observer.on_step(&self.maze, &self.agent);

            if self.is_goal_reached() {
                break TraversalOutcome::GoalReached {
                    steps: self.agent.steps_taken,
                    position: current,
                };
            }

            visited.insert(current);
            for neighbor in current.neighbors() {
                if self.is_valid_move(&neighbor) && !visited.contains(&neighbor) {
                    frontier.push(neighbor);
                }
            }
            debug!("At {}, frontier size {}", current, frontier.len());
        };

        self.observer.on_traversal_finished(&outcome);
        outcome
    }
}
