// File: crates/miniplot-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager pulls in.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW / RegQueryInfoKeyW from the system font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
