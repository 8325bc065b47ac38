//! Simulation - owns the grid and runs ticks.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::grid::Grid;
use crate::material::Material;
use crate::pour::{pour, PointerInput, PourRequest};
use crate::update::update_pass;

/// What one tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number, starting at 1.
    pub frame: u64,
    /// Cell writes made by the pour.
    pub poured: usize,
    /// Rule applications that moved material, summed over all passes.
    pub moves: usize,
}

impl TickReport {
    /// True if no material moved during the passes.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.moves == 0
    }
}

/// The falling sand engine.
///
/// Owns the grid exclusively. The random source drives the water coin flip,
/// surface tension, pour splatter and seeding; any `RngCore` can be plugged
/// in, which is how tests pin probabilistic branches.
pub struct Simulation<R = ChaCha8Rng> {
    grid: Grid,
    config: SimConfig,
    rng: R,
    frame: u64,
}

impl Simulation<ChaCha8Rng> {
    /// Create a simulation, seeded from `config.seed` or OS entropy.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a reproducible simulation.
    pub fn with_seed(config: SimConfig, seed: u64) -> Result<Self, SimError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Simulation<R> {
    /// Create a simulation driven by `rng`, with the grid seeded per `config`.
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self, SimError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;

        let mut sim = Self {
            grid,
            config,
            rng,
            frame: 0,
        };
        sim.seed_grid();
        Ok(sim)
    }

    /// Wrap an existing grid. The grid's size overrides the configured one.
    pub fn from_grid(grid: Grid, mut config: SimConfig, rng: R) -> Result<Self, SimError> {
        config.width = grid.width();
        config.height = grid.height();
        config.validate()?;

        Ok(Self {
            grid,
            config,
            rng,
            frame: 0,
        })
    }

    /// Read-only view for renderers.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of ticks run since creation or the last reset.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Stamp material into the grid. Returns the number of cell writes.
    pub fn pour(&mut self, request: &PourRequest) -> usize {
        pour(&mut self.grid, request, &mut self.rng)
    }

    /// Pour according to the pointer state; a no-op when the button is up.
    pub fn apply_input(&mut self, input: &PointerInput) -> usize {
        match input.pour_request(self.config.brush) {
            Some(request) => self.pour(&request),
            None => 0,
        }
    }

    /// Run a single pass. `pass` picks the scan direction by parity.
    pub fn step_pass(&mut self, pass: usize) -> usize {
        update_pass(&mut self.grid, pass, &self.config, &mut self.rng)
    }

    /// Run every configured pass without any input.
    pub fn step(&mut self) -> TickReport {
        self.run_tick(0)
    }

    /// One full tick: pour from `input`, then every configured pass.
    pub fn tick(&mut self, input: &PointerInput) -> TickReport {
        let poured = self.apply_input(input);
        self.run_tick(poured)
    }

    fn run_tick(&mut self, poured: usize) -> TickReport {
        let moves = (0..self.config.passes)
            .map(|pass| self.step_pass(pass))
            .sum();
        self.frame += 1;

        let report = TickReport {
            frame: self.frame,
            poured,
            moves,
        };
        log::trace!("{report:?}");
        report
    }

    /// Empty the grid.
    pub fn clear(&mut self) {
        self.grid.fill(Material::Empty);
        log::debug!("cleared {}x{} grid", self.grid.width(), self.grid.height());
    }

    /// Empty the grid, re-seed it per the config and restart the frame count.
    pub fn reset(&mut self) {
        self.grid.fill(Material::Empty);
        self.frame = 0;
        self.seed_grid();
    }

    fn seed_grid(&mut self) {
        let density = self.config.initial_sand_density;
        if density <= 0.0 {
            return;
        }

        let seeded = self.grid.scatter(Material::Sand, density, &mut self.rng);
        log::debug!(
            "seeded {}x{} grid with {seeded} sand cells",
            self.grid.width(),
            self.grid.height()
        );
    }
}
