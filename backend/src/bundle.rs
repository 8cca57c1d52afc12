//! File names of the particle wasm bundle. Also compiled into `build.rs`.

/// Cargo package compiled to `wasm32-unknown-unknown`.
pub const WASM_PACKAGE: &str = "particle_wasm";
/// `--out-name` passed to wasm-bindgen.
pub const BUNDLE_NAME: &str = "particle_field";
pub const BUNDLE_WASM: &str = "particle_field_bg.wasm";
pub const BUNDLE_JS: &str = "particle_field.js";
/// Files the page loads from `/pkg`.
pub const WASM_BUNDLE: [&str; 2] = [BUNDLE_WASM, BUNDLE_JS];
