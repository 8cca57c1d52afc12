use rand::Rng;

use crate::config::FieldConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub opacity: f32,
}

fn rand_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.gen::<f32>()
}

/// Reflects `velocity` so that a particle at `position` heads back inside
/// `[0, max]` whenever the next move would cross a bound.
fn reflect(position: f32, velocity: f32, max: f32) -> f32 {
    let next = position + velocity;
    if next > max {
        -velocity.abs()
    } else if next < 0.0 {
        velocity.abs()
    } else {
        velocity
    }
}

impl Particle {
    /// Spawns a particle uniformly inside a `width` x `height` viewport.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, config: &FieldConfig) -> Self {
        Particle {
            x: rng.gen::<f32>() * width.max(0.0),
            y: rng.gen::<f32>() * height.max(0.0),
            vx: rand_range(rng, -config.max_speed, config.max_speed),
            vy: rand_range(rng, -config.max_speed, config.max_speed),
            radius: rand_range(rng, config.radius.0, config.radius.1),
            opacity: rand_range(rng, config.opacity.0, config.opacity.1),
        }
    }

    pub fn update(&mut self, width: f32, height: f32) {
        self.vx = reflect(self.x, self.vx, width);
        self.vy = reflect(self.y, self.vy, height);
        self.x += self.vx;
        self.y += self.vy;
    }

    #[inline(always)]
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}
