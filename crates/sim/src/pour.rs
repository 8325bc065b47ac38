//! Pour / paint - stamping material into the grid from pointer input.

use rand::Rng;

use crate::config::Brush;
use crate::grid::Grid;
use crate::material::Material;

/// Pointer and modifier state sampled by the host once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerInput {
    /// Pointer position in grid cells. May lie outside the grid.
    pub x: i32,
    pub y: i32,
    /// Primary button held.
    pub active: bool,
    /// Water modifier held.
    pub water: bool,
    /// Erase modifier held.
    pub erase: bool,
}

impl PointerInput {
    /// No button held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Primary button held at `(x, y)` with no modifiers.
    pub fn pressed(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            active: true,
            ..Self::default()
        }
    }

    /// Material chosen by the modifiers. Water wins over erase.
    pub fn material(&self) -> Material {
        if self.water {
            Material::Water
        } else if self.erase {
            Material::Empty
        } else {
            Material::Sand
        }
    }

    /// The pour this input asks for, if the button is held.
    pub fn pour_request(&self, brush: Brush) -> Option<PourRequest> {
        self.active.then(|| PourRequest {
            x: self.x,
            y: self.y,
            material: self.material(),
            brush,
        })
    }
}

/// A single stamp, consumed immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PourRequest {
    pub x: i32,
    pub y: i32,
    pub material: Material,
    pub brush: Brush,
}

/// Stamp `request.material` into the grid.
///
/// The origin cell is always written. Then every in-bounds cell under the
/// brush is written independently with probability `brush.density`, giving
/// a splatter rather than a hard rectangle. An origin outside the grid is
/// ignored.
///
/// Returns the number of writes, the origin included.
pub fn pour<R: Rng + ?Sized>(grid: &mut Grid, request: &PourRequest, rng: &mut R) -> usize {
    let Some(origin) = grid.get_mut(request.x, request.y) else {
        return 0;
    };
    *origin = request.material;
    let mut written = 1;

    let (width, height) = (grid.width() as i32, grid.height() as i32);
    for (x, y) in request.brush.footprint(request.x, request.y, width, height) {
        if rng.gen::<f64>() < request.brush.density {
            if let Some(cell) = grid.get_mut(x, y) {
                *cell = request.material;
                written += 1;
            }
        }
    }

    written
}
