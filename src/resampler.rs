//! Stage 1: uniform resampling of a continuous-time signal.

use tracing::debug;

use crate::error::PipelineError;
use crate::signal::{Sample, SampleSet, Signal};

/// Resamples a signal at a target rate.
///
/// Produces `floor(duration * sampling_rate)` samples (minimum 1) whose
/// timestamps are uniformly spaced between the signal's first and last
/// time, both inclusive; the final timestamp lands exactly on the last
/// time rather than on an accumulated sum. Amplitudes come from linear
/// interpolation of the source signal.
///
/// Pure and deterministic: the same signal and rate always produce the
/// same sample set.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidSamplingRate`] unless
/// `sampling_rate` is positive and finite.
///
/// # Examples
///
/// ```
/// use adcpipe::{Signal, resample};
///
/// let signal = Signal::from_columns(&[0.0, 1.0], &[-1.0, 1.0]).unwrap();
/// let samples = resample(&signal, 3.0).unwrap();
/// assert_eq!(samples.times(), vec![0.0, 0.5, 1.0]);
/// assert_eq!(samples.amplitudes(), vec![-1.0, 0.0, 1.0]);
/// ```
pub fn resample(signal: &Signal, sampling_rate: f64) -> Result<SampleSet, PipelineError> {
    if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
        return Err(PipelineError::InvalidSamplingRate {
            rate: sampling_rate,
        });
    }

    let start = signal.first_time();
    let end = signal.last_time();
    let duration = end - start;
    let count = ((duration * sampling_rate).floor() as usize).max(1);
    debug!(count, sampling_rate, "resampling signal");

    let mut samples = Vec::with_capacity(count);
    if count == 1 {
        samples.push(Sample {
            time: start,
            amplitude: signal.amplitude_at(start)?,
        });
    } else {
        let step = duration / (count - 1) as f64;
        for i in 0..count {
            // Pin the last timestamp to the exact end of the domain; the
            // intermediate ones are clamped so rounding can never push a
            // query past it.
            let time = if i == count - 1 {
                end
            } else {
                (start + step * i as f64).min(end)
            };
            samples.push(Sample {
                time,
                amplitude: signal.amplitude_at(time)?,
            });
        }
    }
    Ok(SampleSet::from_samples(samples))
}
