//! Stamps the build time into `AETHER_BUILD_TIMESTAMP`.
//!
//! `SOURCE_DATE_EPOCH` is honoured for reproducible builds.

use chrono::{DateTime, Utc};

fn main() {
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rerun-if-changed=src");

    let built_at = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|secs| secs.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    println!(
        "cargo:rustc-env=AETHER_BUILD_TIMESTAMP={}",
        built_at.format("%b %e %Y %H:%M:%S")
    );
}
