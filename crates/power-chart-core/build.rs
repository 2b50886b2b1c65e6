// File: crates/power-chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU pull in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used when Skia enumerates system fonts
        println!("cargo:rustc-link-lib=advapi32");
    }
}
