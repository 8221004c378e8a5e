use crate::infra::Position;
use crate::state::Maze;

const AGENT: &str = "A";

/// Raw codes, one line per row.
pub fn render_maze(maze: &Maze) -> String {
    render(maze, None)
}

/// Like [`render_maze`] but the agent's cell shows `A`.
pub fn render_with_agent(maze: &Maze, agent: Position) -> String {
    render(maze, Some(agent))
}

fn render(maze: &Maze, agent: Option<Position>) -> String {
    let mut output = String::new();

    for (r, row) in maze.rows().iter().enumerate() {
        for (c, code) in row.iter().enumerate() {
            if agent == Some(Position::new(r as i32, c as i32)) {
                output.push_str(AGENT);
            } else {
                output.push_str(&code.to_string());
            }
            output.push(' ');
        }
        output.push('\n');
    }

    output
}
