use crate::surface::Rgba;

const INDIGO: Rgba = Rgba::rgb(99.0, 102.0, 241.0);
const CYAN: Rgba = Rgba::rgb(6.0, 182.0, 212.0);

/// Tunables of the particle backdrop. `Default` matches the portfolio page.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Upper bound on the particle count regardless of viewport width.
    pub max_particles: usize,
    /// Viewport width (px) that earns one particle.
    pub viewport_per_particle: f32,
    /// Velocity per axis is drawn from `[-max_speed, max_speed]`.
    pub max_speed: f32,
    pub radius: (f32, f32),
    pub opacity: (f32, f32),
    pub particle_color: Rgba,
    /// Particles closer than this are joined by a line.
    pub link_distance: f32,
    pub link_opacity: f32,
    pub link_width: f32,
    pub link_color: Rgba,
    /// Particles closer than this to the pointer are joined to it.
    pub pointer_distance: f32,
    pub pointer_opacity: f32,
    pub pointer_width: f32,
    pub pointer_color: Rgba,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: 80,
            viewport_per_particle: 15.0,
            max_speed: 0.2,
            radius: (0.5, 2.5),
            opacity: (0.1, 0.6),
            particle_color: INDIGO,
            link_distance: 150.0,
            link_opacity: 0.08,
            link_width: 0.5,
            link_color: INDIGO,
            pointer_distance: 200.0,
            pointer_opacity: 0.15,
            pointer_width: 0.8,
            pointer_color: CYAN,
        }
    }
}
