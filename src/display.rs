//! ASCII rendering of a grid and an optional path.
//!
//! Presentation only: the renderer reads the grid and the path the caller
//! hands it and produces a string, nothing more. Keeping it out of the
//! engines means any other front end can replace it wholesale.

use std::fmt::Write;

use crate::grid::{Cell, Grid, Position};

/// Renders the grid with row/column indices and a legend. Path cells are
/// overlaid with `*`, except the start and goal which keep their markers.
pub fn render(grid: &Grid, path: Option<&[Position]>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Legend: S=Start, G=Goal, #=Obstacle, %=Poison, *=Path, .=Empty");

    let _ = write!(out, "   ");
    for x in 0..grid.width {
        let _ = write!(out, "{:2}", x % 10);
    }
    let _ = writeln!(out);

    for y in 0..grid.height {
        let _ = write!(out, "{:2} ", y);
        for x in 0..grid.width {
            let pos = Position::new(x as i32, y as i32);
            let on_path = path.map_or(false, |p| p.contains(&pos));
            let glyph = if grid.start == Some(pos) {
                'S'
            } else if grid.goal == Some(pos) {
                'G'
            } else if on_path {
                '*'
            } else {
                match grid.get_cell(pos.x, pos.y) {
                    Cell::Obstacle => '#',
                    Cell::Poison => '%',
                    Cell::Start => 'S',
                    Cell::Goal => 'G',
                    Cell::Empty => '.',
                }
            };
            let _ = write!(out, "{} ", glyph);
        }
        let _ = writeln!(out);
    }

    out
}
