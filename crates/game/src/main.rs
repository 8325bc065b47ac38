//! Falling Sand - Sandbox
//!
//! Windowed front end for the falling sand engine.
//!
//! Controls:
//! - Left Mouse: Pour sand
//! - W + Left Mouse: Pour water
//! - E + Left Mouse: Erase
//! - SPACE: Pause / resume
//! - R: Re-seed the grid
//! - C: Clear the grid
//!
//! Run: cargo run -p sandbox --release [-- path/to/config.json]

mod input;
mod render;

use std::path::Path;
use std::sync::OnceLock;

use macroquad::prelude::*;
use sandsim::{SimConfig, Simulation};

use input::{to_pointer, RawInput};

const WINDOW_SCALE: f32 = 3.0;

/// Configuration shared by `window_conf` and `main`, loaded once.
struct Setup {
    config: SimConfig,
    texture_width: u16,
    texture_height: u16,
}

static SETUP: OnceLock<Setup> = OnceLock::new();

fn setup() -> &'static Setup {
    SETUP.get_or_init(load_setup)
}

fn load_setup() -> Setup {
    let config = match std::env::args().nth(1) {
        None => SimConfig::default(),
        Some(path) => match SimConfig::load_json(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Failed to load config {}: {}", path, err);
                std::process::exit(1);
            }
        },
    };

    let Some((texture_width, texture_height)) = render::texture_size(config.width, config.height)
    else {
        log::error!(
            "Grid {}x{} is too large to display (max {} per side)",
            config.width,
            config.height,
            u16::MAX
        );
        std::process::exit(1);
    };

    Setup {
        config,
        texture_width,
        texture_height,
    }
}

fn window_conf() -> Conf {
    // Called before main
    env_logger::init();

    let config = &setup().config;
    Conf {
        window_title: "Sandbox Simulation".to_owned(),
        window_width: (config.width as f32 * WINDOW_SCALE) as i32,
        window_height: (config.height as f32 * WINDOW_SCALE) as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let setup = setup();
    let mut sim = match Simulation::new(setup.config.clone()) {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("Failed to create simulation: {}", err);
            std::process::exit(1);
        }
    };

    let width = sim.grid().width();
    let height = sim.grid().height();
    log::info!(
        "Sandbox {}x{}, {} passes per tick",
        width,
        height,
        sim.config().passes
    );

    // Render buffer in grid space, one pixel per cell
    let mut render_buffer =
        Image::gen_image_color(setup.texture_width, setup.texture_height, BLACK);
    let render_texture = Texture2D::from_image(&render_buffer);
    render_texture.set_filter(FilterMode::Nearest);

    let mut paused = false;

    loop {
        // --- INPUT ---
        if is_key_pressed(KeyCode::Space) {
            paused = !paused;
        }
        if is_key_pressed(KeyCode::R) {
            sim.reset();
        }
        if is_key_pressed(KeyCode::C) {
            sim.clear();
        }

        let raw = RawInput {
            mouse: mouse_position(),
            left_button: is_mouse_button_down(MouseButton::Left),
            water_key: is_key_down(KeyCode::W),
            erase_key: is_key_down(KeyCode::E),
        };
        let pointer = to_pointer(&raw, WINDOW_SCALE);

        // --- UPDATE ---
        if paused {
            sim.apply_input(&pointer);
        } else {
            sim.tick(&pointer);
        }

        // --- RENDER ---
        render::rasterize(sim.grid(), render_buffer.get_image_data_mut());
        render_texture.update(&render_buffer);

        clear_background(BLACK);
        draw_texture_ex(
            &render_texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(
                    width as f32 * WINDOW_SCALE,
                    height as f32 * WINDOW_SCALE,
                )),
                ..Default::default()
            },
        );

        let counts = sim.grid().counts();
        let status = if paused { " [PAUSED]" } else { "" };
        draw_text(
            &format!(
                "Sandbox Simulation{}  cells: {}  sand: {}  water: {}  fps: {}",
                status,
                counts.occupied(),
                counts.sand,
                counts.water,
                get_fps()
            ),
            10.0,
            20.0,
            20.0,
            WHITE,
        );

        next_frame().await
    }
}
