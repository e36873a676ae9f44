//! # Contracts
//!
//! Shared data structures for the IgSimulator pipeline.
//! Business crates depend on this crate only; reverse dependencies are prohibited.
//!
//! ## Data flow
//! - `RunSettings` is resolved once from the command line and never mutated
//! - each stage consumes an immutable input built from `RunSettings` plus the
//!   artifacts of earlier stages, and yields a typed artifact record
//! - the orchestrator folds those records into a `PipelineOutput`

mod artifact;
mod chain;
mod command;
mod error;
mod settings;
mod stage;
mod technology;
mod tools;

pub use artifact::*;
pub use chain::ChainType;
pub use command::ToolCommand;
pub use error::*;
pub use settings::*;
pub use stage::*;
pub use technology::Technology;
pub use tools::ToolPaths;
