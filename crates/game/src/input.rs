//! Maps window input to the engine's pointer state.

use sandsim::PointerInput;

/// Raw input sampled from the window for one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawInput {
    /// Mouse position in window pixels.
    pub mouse: (f32, f32),
    pub left_button: bool,
    pub water_key: bool,
    pub erase_key: bool,
}

/// Convert window coordinates to grid cells at the given window scale.
///
/// Positions left of or above the window floor to negative cells, so the
/// engine sees them as outside the grid instead of clamped onto the edge.
pub fn to_pointer(raw: &RawInput, scale: f32) -> PointerInput {
    PointerInput {
        x: (raw.mouse.0 / scale).floor() as i32,
        y: (raw.mouse.1 / scale).floor() as i32,
        active: raw.left_button,
        water: raw.water_key,
        erase: raw.erase_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandsim::Material;

    #[test]
    fn window_pixels_scale_down_to_cells() {
        let raw = RawInput {
            mouse: (301.0, 32.9),
            left_button: true,
            ..Default::default()
        };
        let pointer = to_pointer(&raw, 3.0);

        assert_eq!((pointer.x, pointer.y), (100, 10));
        assert!(pointer.active);
        assert_eq!(pointer.material(), Material::Sand);
    }

    #[test]
    fn positions_outside_window_stay_outside() {
        let raw = RawInput {
            mouse: (-1.0, -0.5),
            ..Default::default()
        };
        let pointer = to_pointer(&raw, 3.0);

        assert_eq!((pointer.x, pointer.y), (-1, -1));
    }

    #[test]
    fn keys_select_material() {
        let raw = RawInput {
            water_key: true,
            erase_key: true,
            ..Default::default()
        };
        assert_eq!(to_pointer(&raw, 1.0).material(), Material::Water);
    }
}
