//! Serializable grid snapshot.
//!
//! This is the shape a map takes when a persistence layer saves it to or
//! loads it from storage: dimensions, the cell-code matrix, and the recorded
//! start/goal coordinates. The core only converts between `Grid` and this
//! shape; reading and writing files is the caller's concern.

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::grid::{Cell, Grid, Position};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    /// `height` rows of `width` cell codes (see [`Cell::code`]).
    pub grid: Vec<Vec<u8>>,
    pub start: Option<(i32, i32)>,
    pub goal: Option<(i32, i32)>,
}

impl From<&Grid> for GridSnapshot {
    fn from(grid: &Grid) -> Self {
        GridSnapshot {
            width: grid.width,
            height: grid.height,
            grid: grid
                .cells
                .iter()
                .map(|row| row.iter().map(|c| c.code()).collect())
                .collect(),
            start: grid.start.map(|p| (p.x, p.y)),
            goal: grid.goal.map(|p| (p.x, p.y)),
        }
    }
}

impl TryFrom<GridSnapshot> for Grid {
    type Error = MapError;

    /// Restores a grid from a snapshot, validating the matrix shape and cell
    /// codes. The recorded start/goal are taken from the snapshot verbatim;
    /// the matrix is not scanned for marker cells.
    fn try_from(snapshot: GridSnapshot) -> Result<Self, MapError> {
        if snapshot.grid.len() != snapshot.height {
            return Err(MapError::Snapshot(format!(
                "expected {} rows, found {}",
                snapshot.height,
                snapshot.grid.len()
            )));
        }

        let mut grid = Grid::new(snapshot.width, snapshot.height);
        for (y, row) in snapshot.grid.iter().enumerate() {
            if row.len() != snapshot.width {
                return Err(MapError::Snapshot(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    snapshot.width
                )));
            }
            for (x, &code) in row.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or_else(|| {
                    MapError::Snapshot(format!("unknown cell code {code} at ({x}, {y})"))
                })?;
                grid.cells[y][x] = cell;
            }
        }

        grid.start = snapshot.start.map(|(x, y)| Position::new(x, y));
        grid.goal = snapshot.goal.map(|(x, y)| Position::new(x, y));
        Ok(grid)
    }
}
