use crate::infra::{MazeError, Position};
use crate::state::CellKind;

/// Immutable table of cell codes. Rows may differ in length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    rows: Vec<Vec<i32>>,
}

impl Maze {
    /// Builds a maze from rows of cell codes. The agent starts at (0, 0), so
    /// the first row must hold at least one cell.
    pub fn new(rows: Vec<Vec<i32>>) -> Result<Self, MazeError> {
        match rows.first() {
            Some(first) if !first.is_empty() => Ok(Self { rows }),
            _ => Err(MazeError::Empty),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in `row`, zero when the row does not exist.
    pub fn col_count(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// `(row count, column count of row)`.
    pub fn dimensions(&self, row: usize) -> (usize, usize) {
        (self.row_count(), self.col_count(row))
    }

    pub fn is_in_bounds(&self, pos: &Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.row_count()
            && (pos.col as usize) < self.col_count(pos.row as usize)
    }

    /// Raw code at `pos`, `None` when out of bounds.
    pub fn cell_at(&self, pos: &Position) -> Option<i32> {
        if !self.is_in_bounds(pos) {
            return None;
        }
        Some(self.rows[pos.row as usize][pos.col as usize])
    }

    pub fn kind_at(&self, pos: &Position) -> Option<CellKind> {
        self.cell_at(pos).map(CellKind::from_code)
    }

    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &code)| (Position::new(r as i32, c as i32), code))
        })
    }

    pub fn goal_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, code)| CellKind::from_code(*code).is_goal())
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
