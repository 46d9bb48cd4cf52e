// File: crates/scatter-core/build.rs
// Summary: Links the Windows system libraries Skia/ICU need for the raster surface.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW (font discovery)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
