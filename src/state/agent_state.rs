use crate::infra::{Direction, Position};
use crate::state::Effect;

pub const MIN_PERCEPTION_RADIUS: u32 = 1;
pub const MIN_STEP_WIDTH: u32 = 1;
pub const MAX_STEP_WIDTH: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentState {
    pub position: Position,
    pub direction: Direction,
    /// Field of view breadth. At least 1, no upper bound.
    pub perception_radius: u32,
    /// Movement speed multiplier, kept within 1..=3.
    pub step_width: u32,
    pub steps_taken: u32,
}

impl Default for AgentState {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentState {
    pub fn new() -> Self {
        Self {
            position: Position::new(0, 0),
            direction: Direction::Right,
            perception_radius: MIN_PERCEPTION_RADIUS,
            step_width: MIN_STEP_WIDTH,
            steps_taken: 0,
        }
    }

    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::PerceptionBoost => self.perception_radius += 1,
            Effect::SpeedBoost => self.step_width = (self.step_width + 1).min(MAX_STEP_WIDTH),
            Effect::Fog => {
                self.perception_radius = self.perception_radius.saturating_sub(1).max(MIN_PERCEPTION_RADIUS)
            }
            Effect::SlowPotion => {
                self.step_width = self.step_width.saturating_sub(1).max(MIN_STEP_WIDTH)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let agent = AgentState::new();
        assert_eq!(agent.position, Position::new(0, 0));
        assert_eq!(agent.direction, Direction::Right);
        assert_eq!(agent.perception_radius, 1);
        assert_eq!(agent.step_width, 1);
        assert_eq!(agent.steps_taken, 0);
    }

    #[test]
    fn test_step_width_clamped() {
        let mut agent = AgentState::new();
        for _ in 0..5 {
            agent.apply(Effect::SpeedBoost);
        }
        assert_eq!(agent.step_width, MAX_STEP_WIDTH);
        for _ in 0..5 {
            agent.apply(Effect::SlowPotion);
        }
        assert_eq!(agent.step_width, MIN_STEP_WIDTH);
    }

    #[test]
    fn test_perception_unbounded_upwards() {
        let mut agent = AgentState::new();
        for _ in 0..10 {
            agent.apply(Effect::PerceptionBoost);
        }
        assert_eq!(agent.perception_radius, 11);
        agent.apply(Effect::Fog);
        assert_eq!(agent.perception_radius, 10);
    }

    #[test]
    fn test_fog_floor() {
        let mut agent = AgentState::new();
        agent.apply(Effect::Fog);
        assert_eq!(agent.perception_radius, MIN_PERCEPTION_RADIUS);
    }
}
