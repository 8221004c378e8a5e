use std::fs;
use std::path::Path;

use tracing::debug;

use crate::infra::MazeError;
use crate::state::Maze;

/// Parses maze text: one row per non-blank line, codes separated by commas
/// and/or whitespace. Rows may have different lengths.
pub fn parse_maze(text: &str) -> Result<Maze, MazeError> {
    let mut rows = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<i32>().map_err(|_| MazeError::InvalidToken {
                    line: index + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<i32>, MazeError>>()?;

        if !row.is_empty() {
            rows.push(row);
        }
    }

    Maze::new(rows)
}

pub fn load_maze(path: impl AsRef<Path>) -> Result<Maze, MazeError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MazeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let maze = parse_maze(&text)?;
    debug!("Loaded maze from {} ({} rows, {} cells)", path.display(), maze.row_count(), maze.len());
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_comma_separated() {
        let maze = parse_maze("0,1,0\n0,0,3\n").unwrap();
        assert_eq!(maze.rows(), &[vec![0, 1, 0], vec![0, 0, 3]]);
    }

    #[test]
    fn test_parse_mixed_separators_and_ragged_rows() {
        let maze = parse_maze("0, 0 4\n\n  1\t0,  3  \n5\n").unwrap();
        assert_eq!(maze.rows(), &[vec![0, 0, 4], vec![1, 0, 3], vec![5]]);
    }

    #[test]
    fn test_parse_reports_bad_token_line() {
        let err = parse_maze("0,0\n0,x\n").unwrap_err();
        match err {
            MazeError::InvalidToken { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_maze(""), Err(MazeError::Empty)));
        assert!(matches!(parse_maze(" \n , \n"), Err(MazeError::Empty)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0,0,3").unwrap();
        writeln!(file, "1,0").unwrap();

        let maze = load_maze(file.path()).unwrap();
        assert_eq!(maze.row_count(), 2);
        assert_eq!(maze.col_count(1), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(matches!(load_maze(&path), Err(MazeError::Io { .. })));
    }
}
