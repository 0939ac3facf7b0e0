//! Entry orchestration for the generator
//!
//! There is no CLI surface: no flags, no arguments, no environment
//! variables. Invocation reads the fixed input header, scans it, and writes
//! the fixed output fragment, truncating any previous one.
//!
//! `generate_file` returns a `Result` instead of exiting; only the
//! top-level `run()` prints the error and calls `process::exit`.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fs;
use std::io;
use std::path::Path;
use std::process;

use thiserror::Error;
use tracing::info;

use crate::{emitter, scanner};

/// Fixed input: the pair-potential declaration header, relative to the
/// build directory the generator runs in.
pub const INPUT_PATH: &str = "../include/rumd/PairPotential.h";

/// Fixed output: the instantiation fragment included by the native build.
pub const OUTPUT_PATH: &str = "MolecularStress_Instantiation.inc";

/// Fatal generator failures.
///
/// Malformed declaration lines are not represented here: the scanner skips
/// them silently, which may under-generate without warning.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("cannot read input header '{path}': {source}")]
    Input {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output fragment '{path}': {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Main entry point.
///
/// This is the only place where `process::exit` is called. Any failure is
/// fatal: print the diagnostic and terminate non-zero, with no retry and no
/// partial-output cleanup.
pub fn run() {
    if let Err(e) = generate_file(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH)) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Run the whole pipeline on explicit paths: read the header, scan it,
/// emit the fragment, write it out. Returns the number of discovered
/// subclasses.
///
/// ## Errors
///
/// - [`GeneratorError::Input`] if the header cannot be read
/// - [`GeneratorError::Output`] if the fragment cannot be written
pub fn generate_file(input: &Path, output: &Path) -> Result<usize, GeneratorError> {
    let source = fs::read_to_string(input).map_err(|e| GeneratorError::Input {
        path: input.display().to_string(),
        source: e,
    })?;

    // Locally scoped, ordered; consumed immediately by the emitter.
    let declarations: Vec<scanner::ClassDeclaration> = scanner::scan(&source).collect();
    info!(
        count = declarations.len(),
        "discovered direct {} subclasses",
        scanner::ROOT_CLASS
    );

    let fragment = emitter::generate(&declarations);
    fs::write(output, fragment).map_err(|e| GeneratorError::Output {
        path: output.display().to_string(),
        source: e,
    })?;
    info!(output = %output.display(), "wrote instantiation fragment");

    Ok(declarations.len())
}

// ============================================================================
// Tests
// ============================================================================
