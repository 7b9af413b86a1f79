//! Maze file loading.
//!
//! Format: a header line `R C`, then `R` rows of cells in the input
//! alphabet (`#` wall, `e` start, `s` exit, anything else open). Rows
//! shorter than `C` are padded with open cells, as if their trailing
//! spaces had been stripped; rows longer than `C` are rejected. Lines
//! past row `R` are ignored.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::maze::{Grid, Marker, Position};

/// Why a maze description could not be turned into a grid.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be opened or read.
    Io { path: PathBuf, source: io::Error },
    /// The header or a grid row is malformed. `line_number` is 1-based.
    Parse { line_number: usize, message: String },
    /// The description contains no `e` cell to start from.
    MissingStart,
}

impl LoadError {
    fn parse(line_number: usize, message: impl Into<String>) -> Self {
        LoadError::Parse {
            line_number,
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            LoadError::Parse {
                line_number,
                message,
            } => write!(f, "line {}: {}", line_number, message),
            LoadError::MissingStart => write!(f, "maze has no start cell ('e')"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read and parse a maze file, producing the grid and the start position.
pub fn load_maze(path: &Path) -> Result<(Grid, Position), LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_maze(&text)
}

/// Parse a maze description from text.
pub fn parse_maze(text: &str) -> Result<(Grid, Position), LoadError> {
    let mut lines = text.lines();

    let header = lines
        .next()
        .ok_or_else(|| LoadError::parse(1, "empty maze description"))?;
    let (rows, cols) = parse_header(header)?;

    let mut cells = Vec::with_capacity(rows * cols);
    let mut start: Option<Position> = None;

    for row in 0..rows {
        let line_number = row + 2;
        let line = lines.next().ok_or_else(|| {
            LoadError::parse(line_number, format!("expected {} rows, got {}", rows, row))
        })?;
        if line.chars().count() > cols {
            return Err(LoadError::parse(
                line_number,
                format!("row is wider than the declared {} columns", cols),
            ));
        }

        let mut width = 0;
        for (col, c) in line.chars().enumerate() {
            let marker = Marker::from_char(c);
            if marker == Marker::Start {
                if start.is_some() {
                    return Err(LoadError::parse(line_number, "more than one start cell"));
                }
                start = Some(Position::new(row, col));
            }
            cells.push(marker);
            width += 1;
        }
        // Short rows read as if padded with trailing spaces.
        cells.resize(cells.len() + (cols - width), Marker::Open);
    }

    let start = start.ok_or(LoadError::MissingStart)?;
    Ok((Grid::from_cells(rows, cols, cells), start))
}

fn parse_header(header: &str) -> Result<(usize, usize), LoadError> {
    let mut fields = header.split_whitespace();
    let rows = fields
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| LoadError::parse(1, "header must be two numbers: rows cols"))?;
    let cols = fields
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| LoadError::parse(1, "header must be two numbers: rows cols"))?;
    if fields.next().is_some() {
        return Err(LoadError::parse(1, "header must be two numbers: rows cols"));
    }
    if rows == 0 || cols == 0 {
        return Err(LoadError::parse(1, "maze dimensions must be non-zero"));
    }
    Ok((rows, cols))
}
