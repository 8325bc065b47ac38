//! Grid - a fixed W x H field of materials.

use std::fmt;

use rand::Rng;

use crate::error::SimError;
use crate::material::Material;

/// Per-material cell totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaterialCounts {
    pub empty: usize,
    pub sand: usize,
    pub water: usize,
}

impl MaterialCounts {
    /// Number of non-empty cells.
    #[inline]
    pub fn occupied(&self) -> usize {
        self.sand + self.water
    }
}

/// A fixed-size 2D grid of materials.
///
/// Cells live in one contiguous row-major buffer indexed by `y * width + x`.
/// Row 0 is the top; gravity points towards larger `y`.
///
/// Coordinates are signed so neighbor lookups like `x - 1` at the left edge
/// stay representable. Every access is bounds-checked: reads outside the grid
/// return `None`, writes return `SimError::OutOfBounds`. Nothing is clamped or
/// wrapped into an adjacent row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Material>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(width: usize, height: usize) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidConfig(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(SimError::InvalidConfig(format!(
                "grid dimensions {width}x{height} exceed the signed coordinate range"
            )));
        }

        Ok(Self {
            width,
            height,
            cells: vec![Material::Empty; width * height],
        })
    }

    /// Parse a grid from text rows, one glyph per cell (see `Material::glyph`).
    ///
    /// Blank lines and surrounding whitespace are ignored. All rows must have
    /// the same length.
    pub fn from_ascii(text: &str) -> Result<Self, SimError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut grid = Self::new(width, rows.len())?;

        for (line, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(SimError::InvalidConfig(format!(
                    "row {line} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (column, glyph) in row.chars().enumerate() {
                let material = Material::from_glyph(glyph).ok_or(SimError::UnknownGlyph {
                    glyph,
                    line,
                    column,
                })?;
                grid.cells[line * width + column] = material;
            }
        }

        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Buffer index for a coordinate, `None` outside the grid.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Material at `(x, y)`, or `None` when the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Material> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Material> {
        let idx = self.index(x, y)?;
        Some(&mut self.cells[idx])
    }

    /// True if `(x, y)` is inside the grid and holds `material`.
    #[inline]
    pub fn is(&self, x: i32, y: i32, material: Material) -> bool {
        self.get(x, y) == Some(material)
    }

    /// Overwrite the cell at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, material: Material) -> Result<(), SimError> {
        let (width, height) = (self.width, self.height);
        let cell = self.get_mut(x, y).ok_or(SimError::OutOfBounds {
            x,
            y,
            width,
            height,
        })?;
        *cell = material;
        Ok(())
    }

    /// Exchange the contents of two cells.
    ///
    /// Movement rules only swap cells they have already inspected, so an
    /// out-of-range coordinate here is a logic error and panics.
    #[inline]
    pub fn swap(&mut self, a: (i32, i32), b: (i32, i32)) {
        match (self.index(a.0, a.1), self.index(b.0, b.1)) {
            (Some(i), Some(j)) => self.cells.swap(i, j),
            _ => panic!(
                "swap {a:?} <-> {b:?} reaches outside the {}x{} grid",
                self.width, self.height
            ),
        }
    }

    /// Set every cell to `material`.
    pub fn fill(&mut self, material: Material) {
        self.cells.fill(material);
    }

    /// Independently turn each cell into `material` with `probability`.
    ///
    /// Returns the number of cells written.
    pub fn scatter<R: Rng + ?Sized>(
        &mut self,
        material: Material,
        probability: f64,
        rng: &mut R,
    ) -> usize {
        let mut written = 0;
        for cell in self.cells.iter_mut() {
            if rng.gen::<f64>() < probability {
                *cell = material;
                written += 1;
            }
        }
        written
    }

    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|&&m| m == material).count()
    }

    pub fn counts(&self) -> MaterialCounts {
        let mut counts = MaterialCounts::default();
        for material in &self.cells {
            match material {
                Material::Empty => counts.empty += 1,
                Material::Sand => counts.sand += 1,
                Material::Water => counts.water += 1,
            }
        }
        counts
    }

    /// Read-only row-major view of every cell.
    #[inline]
    pub fn cells(&self) -> &[Material] {
        &self.cells
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Material]> {
        self.cells.chunks_exact(self.width)
    }
}

/// Text rendering, the inverse of `Grid::from_ascii`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for material in row {
                write!(f, "{}", material.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
