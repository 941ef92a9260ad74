use crate::config::{GameConfig, SCREEN_WIDTH};
use crate::surface::{Placement, SpriteSize};
use rand::Rng;

/// One falling jellyfish
#[derive(Debug, Clone, PartialEq)]
pub struct Jellyfish {
    pub x: f64,
    pub y: f64,
    /// Pixels per frame
    pub speed: f64,
    pub scale: f64,
    pub deleted: bool,
}

impl Jellyfish {
    /// Creates a jellyfish at the top edge of the screen
    pub fn new(x: f64, speed: f64, scale: f64) -> Self {
        Jellyfish {
            x,
            y: 0.0,
            speed,
            scale,
            deleted: false,
        }
    }

    /// Creates a jellyfish with a random column, speed, and size
    ///
    /// The column is a whole pixel in `[0, SCREEN_WIDTH)`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Self {
        let x = rng.gen_range(0..SCREEN_WIDTH) as f64;
        let speed = config.base_speed + rng.gen_range(0.0..1.0) * config.speed_spread;
        let scale = config.min_scale + rng.gen_range(0.0..1.0) * config.scale_spread;
        Jellyfish::new(x, speed, scale)
    }

    pub fn fall(&mut self) {
        self.y += self.speed;
    }

    pub fn is_below(&self, screen_height: f64) -> bool {
        self.y > screen_height
    }

    /// Screen rectangle for the scaled sprite, centered on (x, y)
    pub fn placement(&self, sprite: SpriteSize) -> Placement {
        let width = sprite.width as f64 * self.scale;
        let height = sprite.height as f64 * self.scale;
        Placement {
            x: self.x - width / 2.0,
            y: self.y - height / 2.0,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_ranges() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let j = Jellyfish::spawn(&mut rng, &config);
            assert!(j.x >= 0.0 && j.x < 640.0);
            assert_eq!(j.x, j.x.trunc());
            assert_eq!(j.y, 0.0);
            assert!(j.speed >= 3.0 && j.speed < 8.0, "speed {}", j.speed);
            assert!(j.scale >= 0.1 && j.scale < 0.3, "scale {}", j.scale);
            assert!(!j.deleted);
        }
    }

    #[test]
    fn test_fall_and_bounds() {
        let mut j = Jellyfish::new(10.0, 3.0, 0.2);
        for _ in 0..160 {
            j.fall();
        }
        assert_eq!(j.y, 480.0);
        assert!(!j.is_below(480.0));

        j.fall();
        assert!(j.is_below(480.0));
    }

    #[test]
    fn test_placement_is_centered() {
        let mut j = Jellyfish::new(100.0, 3.0, 0.25);
        j.y = 40.0;
        let placement = j.placement(SpriteSize { width: 128, height: 64 });

        assert_eq!(placement.width, 32.0);
        assert_eq!(placement.height, 16.0);
        assert_eq!(placement.x, 84.0);
        assert_eq!(placement.y, 32.0);
    }
}
