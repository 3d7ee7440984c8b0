//! Input waveforms and sampled sequences.
//!
//! This module provides the two sequence types the pipeline works over:
//! [`Signal`], the full-resolution input waveform treated as a
//! piecewise-linear function of time, and [`SampleSet`], the uniformly
//! spaced output of the resampler (or an externally supplied pre-sampled
//! dataset). Both are immutable after construction.

use crate::error::PipelineError;

/// A single (time, amplitude) measurement.
///
/// Time is in seconds; amplitude is nominally in [-1, 1] but is not
/// enforced here (the quantizer saturates out-of-range values).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Timestamp in seconds.
    pub time: f64,
    /// Amplitude at that timestamp.
    pub amplitude: f64,
}

/// A continuous-time waveform given as discrete points.
///
/// The points define a piecewise-linear function: amplitudes between two
/// stored timestamps are obtained by linear interpolation via
/// [`amplitude_at`](Signal::amplitude_at). Construction validates the two
/// invariants the interpolation relies on: at least two points, and
/// strictly increasing time.
///
/// # Examples
///
/// ```
/// use adcpipe::Signal;
///
/// let signal = Signal::from_columns(&[0.0, 1.0], &[-1.0, 1.0]).unwrap();
/// assert_eq!(signal.duration(), 1.0);
/// assert_eq!(signal.amplitude_at(0.5).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    points: Vec<Sample>,
}

impl Signal {
    /// Creates a signal from a vector of points.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InsufficientSignal`] for fewer than two
    /// points and [`PipelineError::NonMonotonicTime`] if time is not
    /// strictly increasing.
    pub fn new(points: Vec<Sample>) -> Result<Self, PipelineError> {
        if points.len() < 2 {
            return Err(PipelineError::InsufficientSignal {
                count: points.len(),
            });
        }
        if let Some(index) = first_non_increasing(&points) {
            return Err(PipelineError::NonMonotonicTime { index });
        }
        Ok(Self { points })
    }

    /// Creates a signal from parallel `time` and `amplitude` columns.
    ///
    /// This is the shape tabular sources deliver (two numeric columns); the
    /// pipeline is agnostic to where they came from.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::ColumnLengthMismatch`] if the columns have
    /// different lengths, plus the validation errors of [`Signal::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use adcpipe::Signal;
    ///
    /// let signal = Signal::from_columns(&[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0]).unwrap();
    /// assert_eq!(signal.points().len(), 3);
    /// ```
    pub fn from_columns(times: &[f64], amplitudes: &[f64]) -> Result<Self, PipelineError> {
        if times.len() != amplitudes.len() {
            return Err(PipelineError::ColumnLengthMismatch {
                times: times.len(),
                amplitudes: amplitudes.len(),
            });
        }
        Self::new(zip_columns(times, amplitudes))
    }

    /// The underlying points, in time order.
    pub fn points(&self) -> &[Sample] {
        &self.points
    }

    /// Timestamp of the first point.
    pub fn first_time(&self) -> f64 {
        self.points[0].time
    }

    /// Timestamp of the last point.
    pub fn last_time(&self) -> f64 {
        self.points[self.points.len() - 1].time
    }

    /// Time span covered by the signal.
    pub fn duration(&self) -> f64 {
        self.last_time() - self.first_time()
    }

    /// Amplitude at an arbitrary time, by linear interpolation.
    ///
    /// Querying exactly at a stored timestamp returns that point's
    /// amplitude. The bracketing points are located by binary search.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::OutOfDomain`] when `time` lies outside
    /// `[first_time, last_time]` (or is NaN).
    ///
    /// # Examples
    ///
    /// ```
    /// use adcpipe::Signal;
    ///
    /// let signal = Signal::from_columns(&[0.0, 1.0, 2.0], &[0.0, 1.0, -1.0]).unwrap();
    /// assert_eq!(signal.amplitude_at(1.0).unwrap(), 1.0);
    /// assert_eq!(signal.amplitude_at(1.5).unwrap(), 0.0);
    /// assert!(signal.amplitude_at(2.5).is_err());
    /// ```
    pub fn amplitude_at(&self, time: f64) -> Result<f64, PipelineError> {
        let start = self.first_time();
        let end = self.last_time();
        // The negated form also rejects NaN.
        if !(time >= start && time <= end) {
            return Err(PipelineError::OutOfDomain { time, start, end });
        }
        let upper = self.points.partition_point(|p| p.time <= time);
        if upper == self.points.len() {
            // Only reachable when time equals the last timestamp.
            return Ok(self.points[upper - 1].amplitude);
        }
        let lo = self.points[upper - 1];
        if lo.time == time {
            return Ok(lo.amplitude);
        }
        let hi = self.points[upper];
        let frac = (time - lo.time) / (hi.time - lo.time);
        Ok(lo.amplitude + (hi.amplitude - lo.amplitude) * frac)
    }
}

/// A sequence of samples taken from a waveform.
///
/// Produced by [`resample`](crate::resampler::resample), in which case the
/// timestamps are uniformly spaced, or supplied pre-made from
/// `sample_time`/`amplitude_sampled` columns via
/// [`SampleSet::from_columns`]. Timestamps are always strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Wraps resampler output. The caller upholds the time-ordering
    /// invariant.
    pub(crate) fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Creates a sample set from parallel `sample_time` and
    /// `amplitude_sampled` columns, validating time ordering.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::ColumnLengthMismatch`] or
    /// [`PipelineError::NonMonotonicTime`].
    pub fn from_columns(times: &[f64], amplitudes: &[f64]) -> Result<Self, PipelineError> {
        if times.len() != amplitudes.len() {
            return Err(PipelineError::ColumnLengthMismatch {
                times: times.len(),
                amplitudes: amplitudes.len(),
            });
        }
        let samples = zip_columns(times, amplitudes);
        if let Some(index) = first_non_increasing(&samples) {
            return Err(PipelineError::NonMonotonicTime { index });
        }
        Ok(Self { samples })
    }

    /// The samples, in time order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the set holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The timestamps as a column, for display layers that want parallel
    /// arrays back.
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    /// The amplitudes as a column.
    pub fn amplitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.amplitude).collect()
    }
}

fn zip_columns(times: &[f64], amplitudes: &[f64]) -> Vec<Sample> {
    times
        .iter()
        .zip(amplitudes)
        .map(|(&time, &amplitude)| Sample { time, amplitude })
        .collect()
}

/// Index of the first sample whose time fails to increase, if any.
fn first_non_increasing(samples: &[Sample]) -> Option<usize> {
    samples
        .windows(2)
        .position(|pair| pair[1].time <= pair[0].time)
        .map(|i| i + 1)
}
