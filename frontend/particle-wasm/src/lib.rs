//! Animated logic of the portfolio page, compiled to `wasm32-unknown-unknown`.
//!
//! The page glue calls the `extern "C"` functions below. Everything they
//! touch lives in thread-local state, so calls made before `particles_init`
//! (for instance when the page has no canvas) are no-ops returning zero.

use std::cell::RefCell;
use std::thread_local;

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub mod clock;
pub mod config;
pub mod easing;
pub mod field;
pub mod particle;
pub mod surface;
pub mod typing;

pub use clock::{FixedClock, FrameClock, FrameLoop};
pub use config::FieldConfig;
pub use field::ParticleField;
pub use particle::Particle;
pub use surface::{Circle, DrawList, Line, Rgba, Surface};
pub use typing::Typewriter;

use surface::{CIRCLE_STRIDE, LINE_STRIDE};

thread_local! {
    static BACKDROP: RefCell<Option<FrameLoop<DrawList>>> = const { RefCell::new(None) };
    static TYPEWRITER: RefCell<Typewriter> = RefCell::new(Typewriter::default());
}

fn with_backdrop<F, R>(default: R, f: F) -> R
where
    F: FnOnce(&mut FrameLoop<DrawList>) -> R,
{
    BACKDROP.with(|cell| match cell.borrow_mut().as_mut() {
        Some(backdrop) => f(backdrop),
        None => default,
    })
}

fn with_typewriter<F, R>(f: F) -> R
where
    F: FnOnce(&mut Typewriter) -> R,
{
    TYPEWRITER.with(|cell| f(&mut cell.borrow_mut()))
}

fn sanitize(extent: f32) -> f32 {
    if extent.is_finite() {
        extent.max(0.0)
    } else {
        0.0
    }
}

#[no_mangle]
pub extern "C" fn particles_init(width: f32, height: f32, seed: u32) {
    let (width, height) = (sanitize(width), sanitize(height));
    let mut rng = SmallRng::seed_from_u64(seed as u64);
    let config = FieldConfig::default();
    let max_links = config.max_particles * config.max_particles.saturating_sub(1) / 2;
    let field = ParticleField::initialize(width, height, config, &mut rng);
    let surface = DrawList::with_capacity(field.len(), max_links + field.len());
    let mut backdrop = FrameLoop::new(field, surface);
    backdrop.redraw();
    BACKDROP.with(|cell| *cell.borrow_mut() = Some(backdrop));
}

#[no_mangle]
pub extern "C" fn particles_resize(width: f32, height: f32) {
    with_backdrop((), |backdrop| {
        backdrop.field_mut().resize(sanitize(width), sanitize(height));
    });
}

#[no_mangle]
pub extern "C" fn particles_pointer_move(x: f32, y: f32) {
    with_backdrop((), |backdrop| backdrop.field_mut().set_pointer(x, y));
}

/// One animation frame: step, then render into the draw buffers.
#[no_mangle]
pub extern "C" fn particles_frame() {
    with_backdrop((), |backdrop| backdrop.tick());
}

#[no_mangle]
pub extern "C" fn particles_render() {
    with_backdrop((), |backdrop| backdrop.redraw());
}

#[no_mangle]
pub extern "C" fn particles_count() -> u32 {
    with_backdrop(0, |backdrop| backdrop.field().len() as u32)
}

#[no_mangle]
pub extern "C" fn particles_circles_ptr() -> *const f32 {
    with_backdrop(std::ptr::null(), |backdrop| backdrop.surface().circles_ptr())
}

#[no_mangle]
pub extern "C" fn particles_circles_len() -> u32 {
    with_backdrop(0, |backdrop| backdrop.surface().circles_len())
}

#[no_mangle]
pub extern "C" fn particles_lines_ptr() -> *const f32 {
    with_backdrop(std::ptr::null(), |backdrop| backdrop.surface().lines_ptr())
}

#[no_mangle]
pub extern "C" fn particles_lines_len() -> u32 {
    with_backdrop(0, |backdrop| backdrop.surface().lines_len())
}

#[no_mangle]
pub extern "C" fn particles_circle_stride() -> u32 {
    CIRCLE_STRIDE as u32
}

#[no_mangle]
pub extern "C" fn particles_line_stride() -> u32 {
    LINE_STRIDE as u32
}

#[no_mangle]
pub extern "C" fn typing_reset() {
    with_typewriter(|writer| writer.reset());
}

#[no_mangle]
pub extern "C" fn typing_push_role(chars: u32) {
    with_typewriter(|writer| writer.push_role(chars as usize));
}

/// Advances the typewriter and returns the delay (ms) before the next call,
/// or 0 when no roles are registered.
#[no_mangle]
pub extern "C" fn typing_tick() -> u32 {
    with_typewriter(|writer| writer.tick().unwrap_or(0))
}

#[no_mangle]
pub extern "C" fn typing_role() -> u32 {
    with_typewriter(|writer| writer.role() as u32)
}

#[no_mangle]
pub extern "C" fn typing_visible() -> u32 {
    with_typewriter(|writer| writer.visible() as u32)
}

#[no_mangle]
pub extern "C" fn counter_value(target: i32, elapsed_ms: f32, duration_ms: f32) -> i32 {
    easing::counter_value(target, elapsed_ms, duration_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    // each #[test] runs on its own thread, so thread-local state starts empty

    #[test]
    fn exports_are_inert_before_init() {
        particles_frame();
        particles_render();
        particles_resize(100.0, 100.0);
        particles_pointer_move(1.0, 1.0);
        assert_eq!(particles_count(), 0);
        assert!(particles_circles_ptr().is_null());
        assert!(particles_lines_ptr().is_null());
        assert_eq!(particles_circles_len(), 0);
        assert_eq!(particles_lines_len(), 0);
    }

    #[test]
    fn init_renders_first_frame() {
        particles_init(1200.0, 800.0, 1234);
        assert_eq!(particles_count(), 80);
        assert_eq!(particles_circles_len(), 80 * particles_circle_stride());
        assert!(!particles_circles_ptr().is_null());
        assert_eq!(particles_lines_len() % particles_line_stride(), 0);
    }

    #[test]
    fn frame_advances_and_keeps_count_across_resize() {
        particles_init(300.0, 300.0, 99);
        let before = with_backdrop(Vec::new(), |b| b.field().particles().to_vec());
        particles_frame();
        let after = with_backdrop(Vec::new(), |b| b.field().particles().to_vec());
        assert_ne!(before, after);

        particles_resize(1500.0, 900.0);
        assert_eq!(particles_count(), 20);
        assert_eq!(
            with_backdrop((0.0, 0.0), |b| b.field().bounds()),
            (1500.0, 900.0)
        );
    }

    #[test]
    fn pointer_move_is_read_by_next_render() {
        particles_init(600.0, 600.0, 5);
        particles_pointer_move(300.0, 300.0);
        particles_render();
        let lines = with_backdrop(Vec::new(), |b| b.surface().lines().to_vec());
        assert!(lines.iter().all(|l| l.color.a > 0.0));
        assert!(lines.iter().any(|l| (l.x2, l.y2) == (300.0, 300.0)));
    }

    #[test]
    fn degenerate_viewport_yields_empty_field() {
        particles_init(f32::NAN, -10.0, 0);
        assert_eq!(particles_count(), 0);
        particles_frame();
        assert_eq!(particles_circles_len(), 0);
    }

    #[test]
    fn typing_exports_drive_the_typewriter() {
        assert_eq!(typing_tick(), 0);
        typing_push_role(3);
        typing_push_role(2);
        assert_eq!(typing_tick(), 80);
        assert_eq!(typing_visible(), 1);
        assert_eq!(typing_tick(), 80);
        assert_eq!(typing_tick(), 2000);
        assert_eq!(typing_role(), 0);
        typing_reset();
        assert_eq!(typing_tick(), 0);
    }

    #[test]
    fn counter_export_matches_easing() {
        assert_eq!(counter_value(40, 2000.0, easing::COUNTER_DURATION_MS), 40);
        assert_eq!(counter_value(40, 1000.0, easing::COUNTER_DURATION_MS), 35);
        assert_eq!(counter_value(-40, 1000.0, easing::COUNTER_DURATION_MS), -35);
    }
}
