//! Custom cargo commands for the sitesearch crate.
//!
//! Usage:
//!   cargo xtask verify    - Tests, clippy, wasm build, scoring constants
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask wasm      - Build the browser bundle
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz <T>  - Run a fuzz target for 60 seconds

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const WASM_TARGET: &str = "wasm32-unknown-unknown";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("wasm") => wasm()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Tests, clippy, wasm build and scoring constant check
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  wasm      Build the browser bundle (wasm-pack if installed)
  bench     Run benchmarks
  fuzz <T>  Run fuzz target T (search_queries, index_parsing, modal_events)
"#
    );
}

fn verify() -> Result<()> {
    println!("==========================================");
    println!("sitesearch Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/4] Checking wasm build...");
    run_cargo(&["check", "--lib", "--features", "wasm", "--target", WASM_TARGET])?;
    println!("✓ wasm build checks\n");

    println!("[4/4] Verifying scoring constants...");
    verify_constants()?;
    println!("✓ Title 10 / content 1\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// wasm-pack produces the JS glue; without it, build the raw module.
fn wasm() -> Result<()> {
    let root = project_root()?;
    let has_wasm_pack = Command::new("wasm-pack")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);

    if has_wasm_pack {
        let status = Command::new("wasm-pack")
            .args([
                "build",
                "--target",
                "web",
                "--release",
                "--out-dir",
                "target/pkg",
                "--",
                "--features",
                "wasm",
            ])
            .current_dir(&root)
            .status()
            .context("Failed to run wasm-pack")?;
        if !status.success() {
            bail!("wasm-pack build failed");
        }
        println!("✓ Bundle written to target/pkg");
    } else {
        println!("  (wasm-pack not found, building raw module only)");
        run_cargo(&[
            "build",
            "--lib",
            "--release",
            "--features",
            "wasm",
            "--target",
            WASM_TARGET,
        ])?;
    }
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("usage: cargo xtask fuzz <search_queries|index_parsing|modal_events>");
    };
    let root = project_root()?;
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;
    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The shipped ranking weights.
fn verify_constants() -> Result<()> {
    let root = project_root()?;
    let scoring_rs = std::fs::read_to_string(root.join("src/scoring.rs"))
        .context("Failed to read scoring.rs")?;

    for (name, expected) in [("TITLE_MATCH_SCORE", 10), ("CONTENT_MATCH_SCORE", 1)] {
        let found = extract_const(&scoring_rs, name)
            .with_context(|| format!("{} not found in scoring.rs", name))?;
        if found != expected {
            bail!("{} = {}, expected {}", name, found, expected);
        }
    }
    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<u32> {
    // Look for "pub const NAME: u32 = 10;"
    content
        .lines()
        .find(|line| line.contains(&format!("const {}:", name)))
        .and_then(|line| line.split('=').nth(1))
        .and_then(|value| value.trim().trim_end_matches(';').trim().parse().ok())
}
