//! Embeds the build version as `DOTSTRIBUTE_VERSION`.
use std::process::Command;

fn main() {
    // Prefer DOTSTRIBUTE_VERSION if the release pipeline sets it, otherwise
    // fall back to git describe for local builds.
    if let Ok(version) = std::env::var("DOTSTRIBUTE_VERSION") {
        println!("cargo:rustc-env=DOTSTRIBUTE_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=DOTSTRIBUTE_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=DOTSTRIBUTE_VERSION");
}
