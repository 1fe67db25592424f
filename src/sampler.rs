//! Random spike-train generation.
use rand::Rng;
use rand_distr::{Distribution, Exp};

use crate::error::RasterError;

/// Samples per-trial spike times from a homogeneous Poisson process.
///
/// Each trial is drawn independently by accumulating exponentially
/// distributed inter-spike intervals until `duration` is reached, so the
/// spike times of every trial are sorted and lie in `[0, duration)`.
///
/// # Parameters
/// - `num_trials`: The number of trials to sample.
/// - `duration`: The duration of each trial, in seconds.
/// - `firing_rate`: The expected number of spikes per second.
/// - `rng`: A mutable reference to a random number generator implementing the `Rng` trait.
pub fn rand_trials<R: Rng>(
    num_trials: usize,
    duration: f64,
    firing_rate: f64,
    rng: &mut R,
) -> Result<Vec<Vec<f64>>, RasterError> {
    if duration <= 0.0 {
        return Err(RasterError::InvalidParameters(
            "Invalid duration value: must be positive".to_string(),
        ));
    }
    if firing_rate <= 0.0 {
        return Err(RasterError::InvalidParameters(
            "Invalid firing rate value: must be positive".to_string(),
        ));
    }

    let inter_spike = Exp::new(firing_rate)
        .map_err(|e| RasterError::InvalidParameters(e.to_string()))?;

    let mut trials = Vec::with_capacity(num_trials);
    for _ in 0..num_trials {
        let mut spike_times = Vec::new();
        let mut time = inter_spike.sample(rng);
        while time < duration {
            spike_times.push(time);
            time += inter_spike.sample(rng);
        }
        trials.push(spike_times);
    }

    log::info!(
        "{} spikes sampled over {} trials of duration {}",
        trials.iter().map(|trial| trial.len()).sum::<usize>(),
        num_trials,
        duration
    );

    Ok(trials)
}
