mod agent_state;
mod cell;
mod maze;

pub use agent_state::{AgentState, MAX_STEP_WIDTH, MIN_PERCEPTION_RADIUS, MIN_STEP_WIDTH};
pub use cell::{CellKind, Effect, ValidityRule};
pub use maze::Maze;
