//! Windows only: point the linker at SDL2 and put `SDL2.dll` next to the
//! simulator binary.
//!
//! The SDL2 directory is `$SDL2_LIB_DIR` if set, otherwise `vendor/sdl2` at
//! the workspace root. Other platforms use the system SDL2.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-env-changed=SDL2_LIB_DIR");
    if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    let sdl2_dir = env::var_os("SDL2_LIB_DIR").map_or_else(
        || {
            let manifest = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
            manifest.parent().unwrap().join("vendor").join("sdl2")
        },
        PathBuf::from,
    );
    println!("cargo:rerun-if-changed={}", sdl2_dir.display());

    if !sdl2_dir.is_dir() {
        println!(
            "cargo:warning=SDL2 not found at {}; set SDL2_LIB_DIR to the folder holding SDL2.lib and SDL2.dll",
            sdl2_dir.display()
        );
        return;
    }
    println!("cargo:rustc-link-search=native={}", sdl2_dir.display());

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    if let Some(profile_dir) = profile_dir(&out_dir) {
        let dll = sdl2_dir.join("SDL2.dll");
        let dest = profile_dir.join("SDL2.dll");
        if dll.is_file() && !dest.exists() && let Err(e) = fs::copy(&dll, &dest) {
            println!("cargo:warning=Could not copy SDL2.dll: {e}");
        }
    }
}

/// `target/<profile>` above `target/<profile>/build/<pkg>/out`.
fn profile_dir(out_dir: &Path) -> Option<&Path> { out_dir.ancestors().nth(3) }
