//! Commit and date stamped in by `build.rs`, shown by `--version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

pub fn version_line() -> String {
    format!(
        "fishing-tycoon {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
