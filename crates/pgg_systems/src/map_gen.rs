//! One-shot province map generation.
//!
//! The generator lays a grid of square province tiles over the screen,
//! leaving random cells empty as water. It runs on the first tick it is
//! updated and is a no-op afterwards.

use pgg_ecs::GameWorld;
use pgg_ecs::components::{ProvinceInfo, Renderable, Transform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::GameConfig;

/// Generates the province grid once.
#[derive(Debug)]
pub struct MapGenerator {
    width: i32,
    height: i32,
    tile_size: i32,
    skip_probability: f64,
    rng: ChaCha8Rng,
    generated: bool,
}

impl MapGenerator {
    /// A generator for a `width × height` grid of `tile_size` pixel tiles,
    /// seeded from the OS.
    #[must_use]
    pub fn new(width: i32, height: i32, tile_size: i32, skip_probability: f64) -> Self {
        Self {
            width,
            height,
            tile_size,
            skip_probability,
            rng: ChaCha8Rng::from_os_rng(),
            generated: false,
        }
    }

    /// Replace the random source with one seeded from `seed`.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Build a generator covering the configured screen.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let generator = Self::new(
            config.grid_width(),
            config.grid_height(),
            config.tile_size,
            config.skip_probability,
        );
        match config.seed {
            Some(seed) => generator.with_seed(seed),
            None => generator,
        }
    }

    /// Returns `true` once the map has been generated.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Generate the map on the first call. Returns the number of provinces
    /// created by this call, which is always 0 after the first one.
    pub fn update(&mut self, world: &mut GameWorld) -> usize {
        if self.generated {
            return 0;
        }

        info!(
            width = self.width,
            height = self.height,
            tile_size = self.tile_size,
            "generating map"
        );

        let mut created = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.rng.random::<f64>() < self.skip_probability {
                    continue;
                }

                let province = world.create_entity();
                world.add_component(province, Transform::from_grid(x, y, self.tile_size));
                world.add_component(province, Renderable::tile());
                world.add_component(province, ProvinceInfo::new(ProvinceInfo::grid_name(x, y)));
                created += 1;
            }
        }

        self.generated = true;
        info!(provinces = created, "map generation complete");
        created
    }
}
