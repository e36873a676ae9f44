//! Adapters for the four external tools

mod common;
mod ideal;
mod merger;
mod reads;
mod repertoire;

pub use ideal::{IdealRepertoireConstructor, IdealRepertoireInput};
pub use merger::{MergeInput, PairedReadMerger};
pub use reads::{ArtProfile, ReadSimulationInput, ReadSimulator};
pub use repertoire::{RepertoireInput, RepertoireSimulator};
