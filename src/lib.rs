//! This crate provides tools for converting collections of spike times into
//! dense, regularly sampled count matrices ("rasters").
//!
//! # Binning spike times
//!
//! ```rust
//! use spike_raster::binner::{BinnerConfig, SpikeTrainBinner};
//!
//! let trials = vec![vec![0.12, 0.45, 0.46], vec![0.30]];
//! let config = BinnerConfig {
//!     sample_rate: 10.0,
//!     t_min: Some(0.0),
//!     t_max: Some(0.5),
//!     ..Default::default()
//! };
//! let binner = SpikeTrainBinner::build(trials, config).unwrap();
//!
//! // A grid of 5 bins of width 0.1, and one row of counts per trial
//! assert_eq!(binner.time(), &[0.0, 0.1, 0.2, 0.3, 0.4]);
//! let counts = binner.counts();
//! assert_eq!(counts.shape(), (2, 5));
//! assert_eq!(counts[(0, 4)], 2);
//! ```
//!
//! # Labeling trials
//!
//! ```rust
//! use spike_raster::binner::{BinnerConfig, SpikeTrainBinner};
//!
//! let trials = vec![vec![0.12], vec![0.30]];
//! let config = BinnerConfig {
//!     sample_rate: 10.0,
//!     events: Some(vec!["target".into(), "distractor".into()]),
//!     ..Default::default()
//! };
//! let binner = SpikeTrainBinner::build(trials, config).unwrap();
//!
//! // Unique labels are sorted and coded deterministically
//! assert_eq!(
//!     binner.event_id(),
//!     &[("distractor".into(), 0), ("target".into(), 1)][..]
//! );
//! ```

pub mod binner;
pub mod epochs;
pub mod error;
pub mod events;
pub mod sampler;

/// The default sampling rate of the binned raster, in bins per second.
pub const DEFAULT_SAMPLE_RATE: f64 = 1e3;
