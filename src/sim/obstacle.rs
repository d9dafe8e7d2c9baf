//! Gap-pair obstacles scrolling in from the right
//!
//! One spawn produces both the top and bottom rectangle, sharing an x and a
//! randomized gap. Everything but x is immutable after spawn.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Aabb;
use crate::config::Config;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge; decreases every tick
    pub x: f32,
    /// Top of the gap
    pub gap_y: f32,
    pub gap_height: f32,
    pub width: f32,
}

impl Obstacle {
    /// Spawn at `x` with a randomized gap. The narrow flag forces the tight
    /// gap used for difficulty scaling instead of drawing from the range.
    pub fn spawn(x: f32, narrow: bool, config: &Config, rng: &mut Pcg32) -> Self {
        let gap_height = if narrow {
            config.gap_narrow
        } else if config.gap_min < config.gap_max {
            rng.random_range(config.gap_min..config.gap_max)
        } else {
            config.gap_min
        };
        let lo = config.gap_margin;
        let hi = config.panel_height - gap_height - config.gap_margin;
        let gap_y = if lo < hi { rng.random_range(lo..hi) } else { lo };

        Self {
            x,
            gap_y,
            gap_height,
            width: config.obstacle_width,
        }
    }

    pub fn update(&mut self, config: &Config) {
        self.x -= config.obstacle_speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn top_rect(&self) -> Aabb {
        Aabb::new(self.x, 0.0, self.width, self.gap_y)
    }

    pub fn bottom_rect(&self, config: &Config) -> Aabb {
        let top = self.gap_y + self.gap_height;
        Aabb::new(self.x, top, self.width, config.panel_height - top)
    }

    pub fn collides_with(&self, bounds: &Aabb, config: &Config) -> bool {
        bounds.intersects(&self.top_rect()) || bounds.intersects(&self.bottom_rect(config))
    }
}
