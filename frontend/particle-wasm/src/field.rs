use rand::Rng;
use tracing::debug;

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::{Circle, Line, Surface};

/// Number of particles for a viewport of `width` pixels.
pub fn particle_count(width: f32, config: &FieldConfig) -> usize {
    if config.viewport_per_particle <= 0.0 {
        return 0;
    }
    // NaN and negatives saturate to zero
    let by_width = (width / config.viewport_per_particle).floor().max(0.0) as usize;
    by_width.min(config.max_particles)
}

/// Linear fade from `base` at distance 0 to nothing at `max`. `None` once
/// the distance reaches `max`.
#[inline(always)]
pub fn link_opacity(distance: f32, max: f32, base: f32) -> Option<f32> {
    if distance < max {
        Some(base * (1.0 - distance / max))
    } else {
        None
    }
}

/// The animated backdrop: particles, viewport bounds and the last pointer
/// position.
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: FieldConfig,
    width: f32,
    height: f32,
    pointer: (f32, f32),
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn initialize<R: Rng + ?Sized>(
        width: f32,
        height: f32,
        config: FieldConfig,
        rng: &mut R,
    ) -> Self {
        let count = particle_count(width, &config);
        let particles = (0..count)
            .map(|_| Particle::spawn(rng, width, height, &config))
            .collect();
        debug!("particle field {}x{} with {} particles", width, height, count);
        Self {
            config,
            width,
            height,
            pointer: (0.0, 0.0),
            particles,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
    }

    /// Changes the bounds only. Particles keep their positions and the
    /// count stays what it was at initialization.
    pub fn resize(&mut self, width: f32, height: f32) {
        debug!("particle field resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in self.particles.iter_mut() {
            particle.update(width, height);
        }
    }

    /// Draws the current state. Pure with respect to the field, so two
    /// renders without a step in between record the same frame.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let config = &self.config;
        surface.clear(self.width, self.height);

        for p in &self.particles {
            surface.fill_circle(Circle {
                x: p.x,
                y: p.y,
                radius: p.radius,
                color: config.particle_color.with_alpha(p.opacity),
            });
        }

        // O(n^2) on purpose, n is capped by max_particles
        let (px, py) = self.pointer;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.distance_to(b.x, b.y);
                if let Some(alpha) =
                    link_opacity(distance, config.link_distance, config.link_opacity)
                {
                    surface.stroke_line(Line {
                        x1: a.x,
                        y1: a.y,
                        x2: b.x,
                        y2: b.y,
                        width: config.link_width,
                        color: config.link_color.with_alpha(alpha),
                    });
                }
            }

            let distance = a.distance_to(px, py);
            if let Some(alpha) =
                link_opacity(distance, config.pointer_distance, config.pointer_opacity)
            {
                surface.stroke_line(Line {
                    x1: a.x,
                    y1: a.y,
                    x2: px,
                    y2: py,
                    width: config.pointer_width,
                    color: config.pointer_color.with_alpha(alpha),
                });
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn from_particles(
        width: f32,
        height: f32,
        config: FieldConfig,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            config,
            width,
            height,
            pointer: (0.0, 0.0),
            particles,
        }
    }
}
