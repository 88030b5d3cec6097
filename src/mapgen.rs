//! Map construction for the demo binary: a fixed sample layout and a seeded
//! random generator. The engines never call into this module; it only builds
//! `Grid` values for them to consume.

use rand::{Rng, SeedableRng};

use crate::grid::{Cell, Grid, Position};

/// The built-in 20x15 demo map: two obstacle runs forming a rough cross and
/// a few poison patches between start and goal.
pub fn sample_map() -> Grid {
    let mut grid = Grid::new(20, 15);

    grid.set_cell(1, 1, Cell::Start);
    grid.set_cell(18, 13, Cell::Goal);

    for x in 5..15 {
        grid.set_cell(x, 7, Cell::Obstacle);
    }
    for y in 3..10 {
        grid.set_cell(10, y, Cell::Obstacle);
    }

    grid.set_cell(3, 5, Cell::Poison);
    grid.set_cell(4, 5, Cell::Poison);
    grid.set_cell(15, 10, Cell::Poison);
    grid.set_cell(16, 10, Cell::Poison);

    grid
}

/// Generates a random map with the start in the upper-left quadrant and the
/// goal in the lower-right. Obstacle and poison placement is attempt-capped
/// so a crowded request cannot loop forever; cells already taken (including
/// start and goal) are never overwritten.
pub fn random_map(
    width: usize,
    height: usize,
    num_obstacles: usize,
    num_poison: usize,
    seed: Option<u64>,
) -> Grid {
    let mut rng = match seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    };

    let mut grid = Grid::new(width, height);

    let start = Position::new(
        rng.gen_range(0..(width / 2).max(1)) as i32,
        rng.gen_range(0..(height / 2).max(1)) as i32,
    );
    let goal = Position::new(
        rng.gen_range(width / 2..width) as i32,
        rng.gen_range(height / 2..height) as i32,
    );
    grid.set_cell(start.x, start.y, Cell::Start);
    grid.set_cell(goal.x, goal.y, Cell::Goal);

    place_random(&mut grid, &mut rng, Cell::Obstacle, num_obstacles);
    place_random(&mut grid, &mut rng, Cell::Poison, num_poison);

    grid
}

fn place_random(grid: &mut Grid, rng: &mut rand::rngs::StdRng, kind: Cell, count: usize) {
    let mut placed = 0;
    let mut attempts = 0;
    while placed < count && attempts < count * 3 {
        let x = rng.gen_range(0..grid.width) as i32;
        let y = rng.gen_range(0..grid.height) as i32;
        if grid.get_cell(x, y) == Cell::Empty {
            grid.set_cell(x, y, kind);
            placed += 1;
        }
        attempts += 1;
    }
}
