//! Seeded random grid generation.
//!
//! Each cell is blocked independently with `obstacle_probability`.  The
//! default of 0.2 reproduces the classic "two in ten cells are walls" demo
//! density.  Generation is a pure function of the config: the same config
//! always yields the same grid.

use log::debug;

use pf_core::{Coord, MapRng, PfError, PfResult};

use crate::GridMap;

/// Parameters for [`generate`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
    /// Probability in `[0, 1]` that any given cell is blocked.
    pub obstacle_probability: f64,
    pub seed: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            obstacle_probability: 0.2,
            seed: 42,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> PfResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PfError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.obstacle_probability) {
            return Err(PfError::Config(format!(
                "obstacle probability {} is outside [0, 1]",
                self.obstacle_probability
            )));
        }
        Ok(())
    }
}

/// Build a random grid from `config`.  No endpoints are bound.
pub fn generate(config: &GridConfig) -> PfResult<GridMap> {
    config.validate()?;
    let mut map = GridMap::new(config.width, config.height)?;
    let mut rng = MapRng::new(config.seed);

    for y in 0..config.height {
        for x in 0..config.width {
            if rng.gen_bool(config.obstacle_probability) {
                map.set_passable(x, y, false)?;
            }
        }
    }

    debug!(
        "generated {}x{} grid (seed {}): {} of {} cells open",
        config.width,
        config.height,
        config.seed,
        map.passable_count(),
        config.width as u64 * config.height as u64,
    );
    Ok(map)
}

/// Pick a passable cell uniformly at random.
///
/// Returns `None` only if every cell is blocked.
pub fn random_open_cell(map: &GridMap, rng: &mut MapRng) -> Option<Coord> {
    let open: Vec<Coord> = map.open_cells().collect();
    rng.choose(&open).copied()
}
