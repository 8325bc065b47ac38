//! Sand rule - falls, slides diagonally, sinks through water.

use crate::grid::Grid;
use crate::material::Material;

/// Update a sand cell for one pass.
///
/// Priority: straight down, then left-down, then right-down. Water in the
/// target cell is swapped up into the grain's old position. The diagonal
/// tie-break is fixed to the left; there is no randomness here.
///
/// Returns true if the grain moved.
pub fn update_sand(grid: &mut Grid, x: i32, y: i32) -> bool {
    debug_assert!(grid.is(x, y, Material::Sand));

    // Resting on the floor
    if !grid.contains(x, y + 1) {
        return false;
    }

    for nx in [x, x - 1, x + 1] {
        if can_sink_into(grid.get(nx, y + 1)) {
            grid.swap((x, y), (nx, y + 1));
            return true;
        }
    }

    false
}

/// Check if a grain can move into the target cell.
#[inline]
fn can_sink_into(target: Option<Material>) -> bool {
    target.is_some_and(Material::yields_to_sand)
}
