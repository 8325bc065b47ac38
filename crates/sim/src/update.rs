//! Simulation update logic - pass orchestration.

use rand::Rng;

use crate::config::SimConfig;
use crate::grid::Grid;
use crate::material::Material;
use crate::sand::update_sand;
use crate::water::update_water;

/// Horizontal scan direction within a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanDirection {
    LeftToRight,
    RightToLeft,
}

impl ScanDirection {
    /// Even passes scan left to right, odd passes right to left.
    #[inline]
    pub fn for_pass(pass: usize) -> Self {
        if pass % 2 == 0 {
            ScanDirection::LeftToRight
        } else {
            ScanDirection::RightToLeft
        }
    }
}

/// Run one pass over the whole grid.
///
/// Water is resolved for every cell first, then sand, each in its own
/// bottom-to-top sweep. Scanning from the bottom means a cell that falls
/// lands in a row that was already visited, so nothing moves twice per sweep.
///
/// Returns the number of rule applications that moved material.
pub fn update_pass<R: Rng + ?Sized>(
    grid: &mut Grid,
    pass: usize,
    config: &SimConfig,
    rng: &mut R,
) -> usize {
    let direction = ScanDirection::for_pass(pass);

    let water_moves = sweep(grid, direction, Material::Water, |grid, x, y| {
        update_water(grid, x, y, config, rng)
    });
    let sand_moves = sweep(grid, direction, Material::Sand, update_sand);

    water_moves + sand_moves
}

/// Visit every cell bottom to top, applying `rule` to cells holding `material`.
fn sweep<F>(grid: &mut Grid, direction: ScanDirection, material: Material, mut rule: F) -> usize
where
    F: FnMut(&mut Grid, i32, i32) -> bool,
{
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let mut moves = 0;

    for y in (0..height).rev() {
        let x_range: Box<dyn Iterator<Item = i32>> = match direction {
            ScanDirection::LeftToRight => Box::new(0..width),
            ScanDirection::RightToLeft => Box::new((0..width).rev()),
        };

        for x in x_range {
            if grid.is(x, y, material) && rule(grid, x, y) {
                moves += 1;
            }
        }
    }

    moves
}
