//! Rasterizes the simulation grid into an RGBA pixel buffer.
//!
//! One pixel per cell. The buffer is uploaded to a texture and scaled up
//! by the window, so this stays a plain slice copy.

use sandsim::{Grid, Material};

pub const BACKGROUND_RGBA: [u8; 4] = [0, 0, 0, 255];
pub const SAND_RGBA: [u8; 4] = [203, 189, 147, 255];
pub const WATER_RGBA: [u8; 4] = [173, 216, 255, 255];

/// Display color for a material.
#[inline]
pub const fn material_rgba(material: Material) -> [u8; 4] {
    match material {
        Material::Empty => BACKGROUND_RGBA,
        Material::Sand => SAND_RGBA,
        Material::Water => WATER_RGBA,
    }
}

/// Texture dimensions for a `width` x `height` grid, or `None` if either
/// side exceeds what an `Image` can hold.
pub fn texture_size(width: usize, height: usize) -> Option<(u16, u16)> {
    Some((u16::try_from(width).ok()?, u16::try_from(height).ok()?))
}

/// Write every cell of `grid` into `pixels` (row-major, same size as the grid).
pub fn rasterize(grid: &Grid, pixels: &mut [[u8; 4]]) {
    debug_assert_eq!(pixels.len(), grid.width() * grid.height());

    for (pixel, &material) in pixels.iter_mut().zip(grid.cells()) {
        *pixel = material_rgba(material);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_map_to_pixels_in_row_order() {
        let grid = Grid::from_ascii("s.\n.~").unwrap();
        let mut pixels = vec![[9u8; 4]; 4];

        rasterize(&grid, &mut pixels);

        assert_eq!(pixels, vec![SAND_RGBA, BACKGROUND_RGBA, BACKGROUND_RGBA, WATER_RGBA]);
    }

    #[test]
    fn oversized_grids_have_no_texture() {
        assert_eq!(texture_size(320, 240), Some((320, 240)));
        assert_eq!(texture_size(65535, 1), Some((65535, 1)));
        assert_eq!(texture_size(65536, 1), None);
        assert_eq!(texture_size(1, 70000), None);
    }

    #[test]
    fn materials_have_distinct_colors() {
        assert_ne!(material_rgba(Material::Sand), material_rgba(Material::Water));
        assert_ne!(material_rgba(Material::Sand), material_rgba(Material::Empty));
    }
}
