//! Proverit
//!
//! Lists the test assemblies a Visual Studio solution produces by scanning
//! the solution and its project files as plain text.

pub mod cli;
pub mod compose;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod project;
pub mod solution;
pub mod utils;

pub use error::{Error, Result};
pub use pipeline::{render, run, Options};
pub use project::{ProjectRecord, TEST_PROJECT_MARKER};
