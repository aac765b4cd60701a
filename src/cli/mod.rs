//! Command Line Interface (CLI) layer for DIMPREP.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for describing a single scene.
//! It wires user-provided options to the underlying library functionality
//! exposed via `dimprep::api`.
//!
//! If you are embedding DIMPREP into another application, prefer using
//! the high-level `dimprep::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
