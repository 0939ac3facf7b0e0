#![forbid(unsafe_code)]
//! Molecular-stress instantiation generator
//!
//! A build-time code generator for the molecular-dynamics engine: it scans
//! `PairPotential.h` for direct subclasses of `PairPotential` and emits
//! `MolecularStress_Instantiation.inc`, the fragment that dispatches the
//! `mol_stress_tensor` kernel per potential class and cutoff method. The
//! downstream native build includes the fragment; this crate never compiles
//! or interprets it.
//!
//! The scan is a deliberately narrow line-based heuristic (see [`scanner`]),
//! not a C++ parser. Its blind spots are documented and intentional.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod emitter;
pub mod scanner;

pub use cli::{GeneratorError, generate_file};
pub use emitter::{BANNER, BoundaryTestVariant, CutoffMethod, generate};
pub use scanner::{ClassDeclaration, ROOT_CLASS, scan};
