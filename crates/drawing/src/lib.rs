//! # Drawing
//!
//! Histograms of the simulated repertoire statistics.
//!
//! - `StatsTable` reads the whitespace-separated `.stats` files written by
//!   the repertoire simulator
//! - `HistogramRenderer` turns a sample into an image; `PngHistogram` is the
//!   bundled renderer
//! - `visualize_repertoire_stats` draws the four standard histograms

mod histogram;
mod repertoire;
mod stats_file;

pub use histogram::{bin_values, Bins, HistogramRenderer, HistogramSpec, PngHistogram};
pub use repertoire::visualize_repertoire_stats;
pub use stats_file::{relative_positions, StatsTable};
