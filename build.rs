/// Build script for sortrace
/// Captures build environment for `sortrace version`

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=Cargo.lock");

    if let Ok(version) = std::env::var("CARGO_PKG_VERSION") {
        println!("cargo:rustc-env=SORTRACE_VERSION={version}");
    }

    // Git hash is optional: tarball builds have no repository
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |h| h.trim().to_string());
    println!("cargo:rustc-env=GIT_HASH={hash}");

    println!(
        "cargo:rustc-env=BUILD_TIMESTAMP={}",
        unix_timestamp()
    );
}

/// Seconds since the Unix epoch, without pulling in a date crate.
fn unix_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{secs}")
}
