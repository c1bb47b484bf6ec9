//! Writes the equation reference for every formula the slab design uses.
//!
//! ```bash
//! cargo run --bin gen-equations                  # slab_core/src/equations/EQUATIONS.md
//! cargo run --bin gen-equations -- docs/eq.md    # somewhere else
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use slab_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

const DEFAULT_OUTPUT: &str = "slab_core/src/equations/EQUATIONS.md";

fn main() -> ExitCode {
    let output_path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let markdown = generate_equations_markdown();
    if let Err(e) = std::fs::write(&output_path, &markdown) {
        eprintln!("cannot write {}: {}", output_path.display(), e);
        return ExitCode::FAILURE;
    }

    println!("{} equations -> {}", ALL_EQUATIONS.len(), output_path.display());
    ExitCode::SUCCESS
}
