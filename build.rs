//! Build script for albumshelf.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory so it sits next to where the application looks for `.env`:
//! - Linux: `~/.local/share/albumshelf/.env.example`
//! - macOS: `~/Library/Application Support/albumshelf/.env.example`
//! - Windows: `%LOCALAPPDATA%/albumshelf/.env.example`
//!
//! A missing template only produces a cargo warning; directory or write
//! failures fail the build.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("albumshelf");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
