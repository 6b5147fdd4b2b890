//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `inkpost_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("inkpost_core version={}", inkpost_core::core_version());
    println!(
        "inkpost_core builtin_posts={}",
        inkpost_core::catalog::built_in_articles().len()
    );
}
