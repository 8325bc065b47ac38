//! Water rule - pressure descent, sideways flow, surface tension, equalization.
//!
//! Water is stateless per cell. The weight of a column is recovered each
//! pass by counting the contiguous water above a cell (its pressure), which
//! lets tall columns punch through several rows of water below them to
//! reach an empty cell. Water that cannot descend spreads sideways, but a
//! surface-tension roll refuses some of those moves so flat pools do not
//! flicker. After each sideways move the surface is nudged level by pulling
//! one unit of water from the taller neighbor column into the one that just
//! lost water.

use rand::Rng;

use crate::config::SimConfig;
use crate::grid::Grid;
use crate::material::Material;

/// Update a water cell for one pass.
///
/// Returns true if any cell changed.
pub fn update_water<R: Rng + ?Sized>(
    grid: &mut Grid,
    x: i32,
    y: i32,
    config: &SimConfig,
    rng: &mut R,
) -> bool {
    debug_assert!(grid.is(x, y, Material::Water));

    let pressure = pressure(grid, x, y, config.max_water_pressure);
    if descend(grid, x, y, pressure) {
        return true;
    }

    flow_sideways(grid, x, y, config.surface_tension, rng)
}

/// Count contiguous water from `(x, y)` upward, including the cell itself.
///
/// Capped at `max`, and never more than the rows above `y`.
pub fn pressure(grid: &Grid, x: i32, y: i32, max: usize) -> usize {
    let max = i32::try_from(max).unwrap_or(i32::MAX);
    (0..max)
        .take_while(|&dy| grid.is(x, y - dy, Material::Water))
        .count()
}

/// Move down to the first empty cell within `pressure` rows, looking
/// through water only. Sand or the floor ends the search.
fn descend(grid: &mut Grid, x: i32, y: i32, pressure: usize) -> bool {
    let reach = i32::try_from(pressure).unwrap_or(i32::MAX);
    for dy in 1..=reach {
        let Some(below) = y.checked_add(dy) else {
            return false;
        };
        match grid.get(x, below) {
            Some(Material::Empty) => {
                grid.swap((x, y), (x, below));
                return true;
            }
            Some(Material::Water) => continue,
            Some(Material::Sand) | None => return false,
        }
    }

    false
}

/// Flow into an empty left/right neighbor, subject to surface tension.
fn flow_sideways<R: Rng + ?Sized>(
    grid: &mut Grid,
    x: i32,
    y: i32,
    surface_tension: f64,
    rng: &mut R,
) -> bool {
    let can_flow_left = grid.is(x - 1, y, Material::Empty);
    let can_flow_right = grid.is(x + 1, y, Material::Empty);

    let target_x = match (can_flow_left, can_flow_right) {
        (true, true) => {
            if rng.gen::<f64>() < 0.5 {
                x - 1
            } else {
                x + 1
            }
        }
        (true, false) => x - 1,
        (false, true) => x + 1,
        (false, false) => return false,
    };

    if rng.gen::<f64>() < surface_tension {
        return false;
    }

    grid.swap((x, y), (target_x, y));
    equalize(grid, x, target_x, y);
    true
}

/// After water left column `x` for `target_x`, pull a unit back down from
/// the top of the target column if it now stands taller.
fn equalize(grid: &mut Grid, x: i32, target_x: i32, y: i32) {
    if grid.is(x, y - 1, Material::Empty) && grid.is(target_x, y - 1, Material::Water) {
        grid.swap((x, y - 1), (target_x, y - 1));
    }
}
