use crate::config::EdgeMode;
use crate::error::{Result, SimError};
use crate::geometry::{circle_circle, circle_point};
use vivarium_data::{Creature, State, Vec2};

/// One lattice cell of the spatial grid.
///
/// Members are indices into the creature slice the grid was last rebuilt
/// from. A creature near a cell boundary may be a member of several cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub center: Vec2,
    /// Full diagonal of one cell, so the bounding circle covers the cell.
    pub radius: f64,
    /// Stationary grown-up creatures (plants).
    pub statics: Vec<usize>,
    /// Moving creatures and children.
    pub dynamics: Vec<usize>,
}

impl Cell {
    fn clear(&mut self) {
        self.statics.clear();
        self.dynamics.clear();
    }

    /// All members, dynamic first.
    pub fn members(&self) -> impl Iterator<Item = usize> + '_ {
        self.dynamics.iter().chain(self.statics.iter()).copied()
    }
}

/// World bounds and an N×N spatial grid over them.
///
/// The grid is rebuilt from scratch every tick by [`World::update_cells`];
/// there is no incremental bookkeeping.
///
/// # Examples
/// ```
/// use vivarium_core::world::World;
/// use vivarium_data::{Creature, Vec2};
///
/// let mut world = World::new(600.0, 600.0, 6).unwrap();
/// let creatures = vec![Creature { pos: Vec2::new(50.0, 50.0), radius: 3.0, ..Default::default() }];
/// world.update_cells(&creatures);
/// assert_eq!(world.find_creature(&creatures, Vec2::new(51.0, 50.0), 5.0), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct World {
    pub width: f64,
    pub height: f64,
    pub edge_mode: EdgeMode,
    grid_size: usize,
    cell_width: f64,
    cell_height: f64,
    cells: Vec<Cell>,
}

impl World {
    pub fn new(width: f64, height: f64, grid_size: usize) -> Result<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(SimError::invalid_world(format!(
                "bounds must be positive, got {width}x{height}"
            )));
        }
        if grid_size == 0 {
            return Err(SimError::invalid_world("grid size must be at least 1"));
        }

        let cell_width = width / grid_size as f64;
        let cell_height = height / grid_size as f64;
        let radius = (cell_width * cell_width + cell_height * cell_height).sqrt();

        let mut cells = Vec::with_capacity(grid_size * grid_size);
        for row in 0..grid_size {
            for col in 0..grid_size {
                cells.push(Cell {
                    center: Vec2::new(
                        (col as f64 + 0.5) * cell_width,
                        (row as f64 + 0.5) * cell_height,
                    ),
                    radius,
                    ..Default::default()
                });
            }
        }

        Ok(Self {
            width,
            height,
            edge_mode: EdgeMode::Loop,
            grid_size,
            cell_width,
            cell_height,
            cells,
        })
    }

    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clears every cell and re-registers each creature in all cells its
    /// circle overlaps.
    pub fn update_cells(&mut self, creatures: &[Creature]) {
        for cell in &mut self.cells {
            cell.clear();
        }
        for (idx, c) in creatures.iter().enumerate() {
            let is_static = !c.is_moving() && c.state != State::Child;
            for cell in &mut self.cells {
                if !circle_circle(c.pos, c.radius, cell.center, cell.radius) {
                    continue;
                }
                if is_static {
                    cell.statics.push(idx);
                } else {
                    cell.dynamics.push(idx);
                }
            }
        }
    }

    /// Index of the cell containing `point`, or `None` outside the bounds.
    pub fn find_cell(&self, point: Vec2) -> Option<usize> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / self.cell_width) as usize;
        let row = (point.y / self.cell_height) as usize;
        if col >= self.grid_size || row >= self.grid_size {
            return None;
        }
        Some(row * self.grid_size + col)
    }

    /// First creature in the cell under `point` whose circle, grown by
    /// `margin`, contains the point. Reads the grid as of the last rebuild.
    pub fn find_creature(&self, creatures: &[Creature], point: Vec2, margin: f64) -> Option<usize> {
        let cell = self.cells.get(self.find_cell(point)?)?;
        cell.members().find(|&idx| {
            creatures
                .get(idx)
                .is_some_and(|c| circle_point(c.pos, c.radius + margin, point))
        })
    }
}
