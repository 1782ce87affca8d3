//! CLI command handling

pub mod output;
pub mod run;

pub use output::*;
pub use run::*;
