// Build script to extract version from Cargo.toml
// and optionally override patch version from CI/CD pipeline

use std::env;

fn main() {
    // Package version as declared in Cargo.toml
    let version = env::var("CARGO_PKG_VERSION").expect("CARGO_PKG_VERSION not set");

    // Expect MAJOR.MINOR.PATCH
    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() != 3 {
        panic!("Invalid version format in Cargo.toml: {}", version);
    }

    let (major, minor, patch) = (parts[0], parts[1], parts[2]);

    // Release pipeline may stamp its own patch number
    let final_patch = env::var("SEO_AGENT_PATCH_VERSION").unwrap_or_else(|_| patch.to_string());

    // Read at compile time via env!("SEO_AGENT_VERSION")
    println!(
        "cargo:rustc-env=SEO_AGENT_VERSION={}.{}.{}",
        major, minor, final_patch
    );

    // Rebuild when the manifest version or the override changes
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=SEO_AGENT_PATCH_VERSION");
}
