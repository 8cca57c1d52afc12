#[path = "src/bundle.rs"]
mod bundle;

use bundle::{BUNDLE_NAME, WASM_BUNDLE, WASM_PACKAGE};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const WASM_TARGET: &str = "wasm32-unknown-unknown";
const WASM_RUSTFLAGS: &str = "-C opt-level=3 -C codegen-units=1 -C lto=fat";

fn bundle_present(pkg_dir: &Path) -> bool {
    WASM_BUNDLE.iter().all(|file| pkg_dir.join(file).is_file())
}

fn wasm_rustflags() -> String {
    let inherited = env::var("RUSTFLAGS").unwrap_or_default();
    let inherited = inherited.trim();
    if inherited.is_empty() {
        WASM_RUSTFLAGS.to_string()
    } else {
        format!("{inherited} {WASM_RUSTFLAGS}")
    }
}

/// Compiles the wasm crate into its own target dir so the outer build's
/// lock is not contended. Returns the path of the raw `.wasm`.
fn compile_wasm(workspace_root: &Path) -> PathBuf {
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| workspace_root.join("target"))
        .join("wasm-cache");

    let status = Command::new(&cargo)
        .current_dir(workspace_root)
        .args(["build", "--package", WASM_PACKAGE, "--lib", "--release"])
        .args(["--target", WASM_TARGET])
        .env("RUSTFLAGS", wasm_rustflags())
        .env("CARGO_TARGET_DIR", &target_dir)
        .status()
        .unwrap_or_else(|err| panic!("failed to invoke {cargo} for {WASM_PACKAGE}: {err}"));
    if !status.success() {
        panic!("building {WASM_PACKAGE} failed");
    }

    let artifact = target_dir
        .join(WASM_TARGET)
        .join("release")
        .join(format!("{WASM_PACKAGE}.wasm"));
    if !artifact.is_file() {
        panic!("expected wasm artifact at {}", artifact.display());
    }
    artifact
}

fn generate_bindings(artifact: &Path, pkg_dir: &Path) {
    if pkg_dir.exists() {
        fs::remove_dir_all(pkg_dir).expect("unable to clear previous pkg dir");
    }
    fs::create_dir_all(pkg_dir).expect("unable to create pkg directory");

    let wasm_bindgen = env::var("WASM_BINDGEN").unwrap_or_else(|_| "wasm-bindgen".to_string());
    let status = Command::new(&wasm_bindgen)
        .args(["--target", "web", "--out-name", BUNDLE_NAME])
        .arg("--out-dir")
        .arg(pkg_dir)
        .arg(artifact)
        .status()
        .unwrap_or_else(|err| {
            panic!(
                "failed to run {wasm_bindgen} (install via `cargo install wasm-bindgen-cli` or set WASM_BINDGEN): {err}"
            )
        });
    if !status.success() {
        panic!("{wasm_bindgen} exited with {status}");
    }
}

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR missing"));
    let workspace_root = manifest_dir
        .parent()
        .expect("backend must live inside workspace")
        .to_path_buf();
    let wasm_crate = workspace_root.join("frontend/particle-wasm");
    let pkg_dir = wasm_crate.join("pkg");

    for path in [wasm_crate.join("Cargo.toml"), wasm_crate.join("src"), pkg_dir.clone()] {
        println!("cargo:rerun-if-changed={}", path.display());
    }
    println!("cargo:rerun-if-env-changed=WASM_BINDGEN");
    println!("cargo:rerun-if-env-changed=BUILD_PARTICLE_WASM");

    // Needs the wasm32 target and wasm-bindgen-cli, so only on request.
    if env::var_os("BUILD_PARTICLE_WASM").is_none() {
        if !bundle_present(&pkg_dir) {
            println!(
                "cargo:warning=No particle wasm bundle in {} (set BUILD_PARTICLE_WASM=1 to build it); the page will run without the canvas backdrop",
                pkg_dir.display()
            );
        }
        return;
    }

    let artifact = compile_wasm(&workspace_root);
    generate_bindings(&artifact, &pkg_dir);
}
