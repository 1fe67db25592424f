//! Adapter towards a downstream epochs-style analysis consumer.
//!
//! The binning core knows nothing about any particular analysis toolkit. It
//! only packages the artifacts such a consumer needs into an
//! [`EpochsExport`]; the consumer itself is an opaque collaborator behind the
//! [`EpochsBackend`] trait.
use nalgebra::DMatrix;

use crate::binner::SpikeTrainBinner;
use crate::error::RasterError;
use crate::events::EventLabel;

/// The artifacts handed to a downstream epochs consumer.
#[derive(Debug, PartialEq, Clone)]
pub struct EpochsExport {
    /// The dense count matrix, shape (num_trials, num_bins).
    pub counts: DMatrix<u32>,
    /// The bin times of the grid.
    pub time: Vec<f64>,
    /// The event table, one (trial index, 0, event code) row per trial.
    pub event_table: DMatrix<i64>,
    /// The label-to-code mapping, sorted by label.
    pub event_id: Vec<(EventLabel, usize)>,
    /// The lower bound of the time grid.
    pub t_min: f64,
    /// The sampling rate of the raster, in bins per second.
    pub sample_rate: f64,
    /// The display label of the recorded unit.
    pub name: Option<String>,
}

impl SpikeTrainBinner {
    /// Packages the artifacts consumed by a downstream epochs backend.
    pub fn export(&self) -> EpochsExport {
        EpochsExport {
            counts: self.counts(),
            time: self.time().to_vec(),
            event_table: self.event_table(),
            event_id: self.event_id().to_vec(),
            t_min: self.t_min(),
            sample_rate: self.sample_rate(),
            name: self.name().map(str::to_string),
        }
    }
}

/// A downstream consumer of binned spike trains.
///
/// A backend whose backing library cannot be loaded reports
/// [`RasterError::DependencyUnavailable`], which is a boundary error and
/// never originates from the binning core itself.
pub trait EpochsBackend {
    type Epochs;

    /// Builds the backend's epochs object from the exported artifacts.
    fn build_epochs(&self, export: &EpochsExport) -> Result<Self::Epochs, RasterError>;
}

/// Converts a binner into a backend's epochs object.
pub fn to_epochs<B: EpochsBackend>(
    binner: &SpikeTrainBinner,
    backend: &B,
) -> Result<B::Epochs, RasterError> {
    backend.build_epochs(&binner.export())
}
