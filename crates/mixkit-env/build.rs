//! Build script for mixkit-env

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    // Expose the compiling toolchain's version as the detected host version.
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .and_then(|text| parse_rustc_version(&text))
        .unwrap_or_default();
    println!("cargo:rustc-env=MIXKIT_RUSTC_VERSION={version}");
}

/// `rustc 1.82.0 (f6e511eec 2024-10-15)` -> `1.82.0`
fn parse_rustc_version(text: &str) -> Option<String> {
    text.split_whitespace().nth(1).map(str::to_string)
}
