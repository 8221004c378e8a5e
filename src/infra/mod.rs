mod composite_observer;
mod default_observer;
mod error;
mod loader;
mod renderer;
mod traversal_observer;
mod types;

pub use composite_observer::CompositeObserver;
pub use default_observer::DefaultObserver;
pub use error::MazeError;
pub use loader::{load_maze, parse_maze};
pub use renderer::{render_maze, render_with_agent};
pub use traversal_observer::{NullObserver, TraversalObserver};
pub use types::{Direction, Position};
