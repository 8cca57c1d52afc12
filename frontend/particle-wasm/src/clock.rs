use crate::field::ParticleField;
use crate::surface::Surface;

pub const TARGET_FPS: f64 = 60.0;
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / TARGET_FPS;

/// Source of display refresh ticks.
pub trait FrameClock {
    /// Timestamp (ms) of the next frame, or `None` once the loop should stop.
    fn next_frame(&mut self) -> Option<f64>;
}

/// Synthetic clock producing a fixed number of evenly spaced frames.
#[derive(Debug, Clone)]
pub struct FixedClock {
    remaining: u64,
    now_ms: f64,
    interval_ms: f64,
}

impl FixedClock {
    pub fn new(frames: u64) -> Self {
        Self::with_interval(frames, FRAME_INTERVAL_MS)
    }

    pub fn with_interval(frames: u64, interval_ms: f64) -> Self {
        Self {
            remaining: frames,
            now_ms: 0.0,
            interval_ms,
        }
    }
}

impl FrameClock for FixedClock {
    fn next_frame(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.now_ms += self.interval_ms;
        Some(self.now_ms)
    }
}

/// Owns the field and the surface it draws on; one `tick` per frame.
#[derive(Debug)]
pub struct FrameLoop<S: Surface> {
    field: ParticleField,
    surface: S,
    frames: u64,
    last_frame_ms: Option<f64>,
}

impl<S: Surface> FrameLoop<S> {
    pub fn new(field: ParticleField, surface: S) -> Self {
        Self {
            field,
            surface,
            frames: 0,
            last_frame_ms: None,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame_ms(&self) -> Option<f64> {
        self.last_frame_ms
    }

    pub fn tick(&mut self) {
        self.field.step();
        self.field.render(&mut self.surface);
        self.frames += 1;
    }

    /// Redraws without advancing, e.g. right after a resize.
    pub fn redraw(&mut self) {
        self.field.render(&mut self.surface);
    }

    /// Ticks once per clock frame until the clock stops. Returns the number
    /// of frames run.
    pub fn run<C: FrameClock + ?Sized>(&mut self, clock: &mut C) -> u64 {
        let mut ran = 0;
        while let Some(now) = clock.next_frame() {
            self.last_frame_ms = Some(now);
            self.tick();
            ran += 1;
        }
        ran
    }

    pub fn into_parts(self) -> (ParticleField, S) {
        (self.field, self.surface)
    }
}
