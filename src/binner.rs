//! Spike-train binning onto a uniform time grid.
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use itertools::{Itertools, MinMaxResult};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::RasterError;
use crate::events::{build_event_id, EventLabel};
use crate::DEFAULT_SAMPLE_RATE;

/// Configuration for building a [`SpikeTrainBinner`].
///
/// Absent bounds are inferred from the spike times themselves: `t_min`
/// defaults to the smaller of 0 and the earliest spike, `t_max` to the
/// latest spike.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BinnerConfig {
    /// The sampling rate of the raster, in bins per second.
    pub sample_rate: f64,
    /// The lower bound of the time grid, in seconds.
    pub t_min: Option<f64>,
    /// The upper bound of the time grid, in seconds.
    pub t_max: Option<f64>,
    /// The label of each trial, one per trial.
    pub events: Option<Vec<EventLabel>>,
    /// A display label for the recorded unit.
    pub name: Option<String>,
}

impl Default for BinnerConfig {
    fn default() -> Self {
        BinnerConfig {
            sample_rate: DEFAULT_SAMPLE_RATE,
            t_min: None,
            t_max: None,
            events: None,
            name: None,
        }
    }
}

/// A collection of per-trial spike times together with a shared uniform time grid.
///
/// The grid and the event coding are derived once at construction, which is
/// also where all input validation happens. The dense count matrix is
/// recomputed from the immutable fields on every [`counts`](Self::counts)
/// call; its memory grows linearly both in the number of trials and in the
/// number of bins, so long recordings at high sampling rates get large.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SpikeTrainBinner {
    trials: Vec<Vec<f64>>,
    sample_rate: f64,
    t_min: f64,
    t_max: f64,
    time: Vec<f64>,
    events: Vec<EventLabel>,
    event_id: Vec<(EventLabel, usize)>,
    name: Option<String>,
}

impl SpikeTrainBinner {
    /// Creates a binner from per-trial spike times and a configuration.
    ///
    /// Bounds are never clamped: supplying a `t_max` below the latest spike
    /// (or a `t_min` above the earliest one) is an error rather than a silent
    /// drop of data. When no trial contains a spike, both bounds must be
    /// given explicitly.
    ///
    /// The time grid holds the bin times `k / sample_rate` for `k` ranging
    /// over `floor(t_min * sample_rate)..floor(t_max * sample_rate)`.
    ///
    /// When labels are supplied, one per trial, the unique labels are sorted
    /// and assigned sequential codes starting at 0. Without labels, every
    /// trial gets the implicit label `1` with code 0.
    pub fn build(trials: Vec<Vec<f64>>, config: BinnerConfig) -> Result<Self, RasterError> {
        if trials.is_empty() {
            return Err(RasterError::EmptyInput(
                "at least one trial is required".to_string(),
            ));
        }
        if !config.sample_rate.is_finite() || config.sample_rate <= 0.0 {
            return Err(RasterError::InvalidParameters(
                "Invalid sampling rate value: must be positive and finite".to_string(),
            ));
        }
        if trials.iter().flatten().any(|t| !t.is_finite()) {
            return Err(RasterError::InvalidParameters(
                "Invalid spike time value: all spike times must be finite".to_string(),
            ));
        }

        let spike_range = match trials.iter().flatten().copied().minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(t) => Some((t, t)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        };

        let (t_min, t_max) = match (config.t_min, config.t_max, spike_range) {
            (Some(t_min), Some(t_max), _) => (t_min, t_max),
            (_, _, None) => {
                return Err(RasterError::EmptyInput(
                    "explicit t_min and t_max are required when no trial contains a spike"
                        .to_string(),
                ))
            }
            (t_min, t_max, Some((min_spike, max_spike))) => (
                t_min.unwrap_or_else(|| min_spike.min(0.0)),
                t_max.unwrap_or(max_spike),
            ),
        };

        if t_max < t_min {
            return Err(RasterError::InvalidBounds(format!(
                "t_max ({}) must be greater than or equal to t_min ({})",
                t_max, t_min
            )));
        }
        if let Some((min_spike, max_spike)) = spike_range {
            if t_max < max_spike {
                return Err(RasterError::InvalidBounds(format!(
                    "t_max ({}) must not be less than the maximum spike time ({})",
                    t_max, max_spike
                )));
            }
            if t_min > min_spike {
                return Err(RasterError::InvalidBounds(format!(
                    "t_min ({}) must not be greater than the minimum spike time ({})",
                    t_min, min_spike
                )));
            }
        }

        let first_bin = (t_min * config.sample_rate).floor() as i64;
        let last_bin = (t_max * config.sample_rate).floor() as i64;
        let time: Vec<f64> = (first_bin..last_bin)
            .map(|k| k as f64 / config.sample_rate)
            .collect();
        if time.is_empty() && spike_range.is_some() {
            return Err(RasterError::InvalidBounds(format!(
                "the grid between t_min ({}) and t_max ({}) at {} bins per second is empty but the trials contain spikes",
                t_min, t_max, config.sample_rate
            )));
        }

        let events = match config.events {
            Some(events) => {
                if events.len() != trials.len() {
                    return Err(RasterError::InvalidEvents(format!(
                        "expected one label per trial ({}), got {}",
                        trials.len(),
                        events.len()
                    )));
                }
                events
            }
            None => vec![EventLabel::Int(1); trials.len()],
        };
        let event_id = build_event_id(&events);

        let binner = SpikeTrainBinner {
            trials,
            sample_rate: config.sample_rate,
            t_min,
            t_max,
            time,
            events,
            event_id,
            name: config.name,
        };
        log::info!(
            "{} spikes over {} trials binned onto {} bins between {} and {}",
            binner.num_spikes(),
            binner.num_trials(),
            binner.num_bins(),
            binner.t_min,
            binner.t_max
        );

        Ok(binner)
    }

    /// Returns the per-trial spike times.
    pub fn trials(&self) -> &[Vec<f64>] {
        &self.trials
    }

    /// Returns the number of trials, i.e., the number of rows of the count matrix.
    pub fn num_trials(&self) -> usize {
        self.trials.len()
    }

    /// Returns the total number of spikes across all trials.
    pub fn num_spikes(&self) -> usize {
        self.trials.iter().map(|trial| trial.len()).sum()
    }

    /// Returns the sampling rate of the raster, in bins per second.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Returns the lower bound of the time grid.
    pub fn t_min(&self) -> f64 {
        self.t_min
    }

    /// Returns the upper bound of the time grid.
    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    /// Returns the bin times of the grid.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Returns the number of bins, i.e., the number of columns of the count matrix.
    pub fn num_bins(&self) -> usize {
        self.time.len()
    }

    /// Returns the label of each trial, in trial order.
    pub fn events(&self) -> &[EventLabel] {
        &self.events
    }

    /// Returns the label-to-code mapping, sorted by label.
    pub fn event_id(&self) -> &[(EventLabel, usize)] {
        &self.event_id
    }

    /// Returns the integer code of a label, if the label is known.
    pub fn event_code(&self, label: &EventLabel) -> Option<usize> {
        self.event_id
            .iter()
            .find(|(known, _)| known == label)
            .map(|(_, code)| *code)
    }

    /// Returns the display label of the recorded unit.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Computes the dense count matrix, one row per trial and one column per bin.
    ///
    /// Spikes falling into the same bin accumulate. A spike exactly at
    /// `t_max` lands in the last bin (the grid is half-open at the top, with
    /// the boundary clamped into the final bin rather than past the end).
    /// The matrix is recomputed on every call and is identical across calls.
    pub fn counts(&self) -> DMatrix<u32> {
        let num_bins = self.time.len();
        let mut counts = DMatrix::zeros(self.trials.len(), num_bins);
        for (row, trial) in self.trials.iter().enumerate() {
            for &spike in trial {
                // Construction guarantees t_min <= spike <= t_max.
                let bin = ((spike - self.t_min) * self.sample_rate).floor() as usize;
                counts[(row, bin.min(num_bins - 1))] += 1;
            }
        }
        counts
    }

    /// Computes the event table, one row per trial in trial order, with
    /// columns (trial index, 0, event code).
    ///
    /// All labels, integer or string, are looked up in the
    /// [`event_id`](Self::event_id) mapping, so codes always form a dense
    /// 0-based range regardless of the label values. The middle column is a
    /// fixed offset carried for the downstream consumer's layout.
    pub fn event_table(&self) -> DMatrix<i64> {
        DMatrix::from_fn(self.trials.len(), 3, |row, col| match col {
            0 => row as i64,
            1 => 0,
            _ => self
                .event_code(&self.events[row])
                .expect("every trial label is present in the event-id mapping")
                as i64,
        })
    }

    /// Saves the binner to a JSON file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Loads a binner from a JSON file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> std::io::Result<SpikeTrainBinner> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl fmt::Display for SpikeTrainBinner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Name: {} | Num Trials: {} | Events: [{}] | tmin/tmax: ({}, {})",
            self.name.as_deref().unwrap_or("unnamed"),
            self.num_trials(),
            self.event_id.iter().map(|(label, _)| label).join(", "),
            self.t_min,
            self.t_max
        )
    }
}
