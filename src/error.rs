//! Error types for the conversion pipeline.

use thiserror::Error;

/// Errors raised by the pipeline's transforms.
///
/// All errors are raised synchronously at the offending call and are never
/// retried internally: the transforms are deterministic, so retrying with
/// the same input cannot change the outcome. Callers embedding the pipeline
/// behind a UI are expected to catch these and render a friendly message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// An interpolation timestamp fell outside the source signal's time range.
    #[error("time {time} is outside the signal's domain [{start}, {end}]")]
    OutOfDomain {
        /// The requested timestamp.
        time: f64,
        /// First time covered by the signal.
        start: f64,
        /// Last time covered by the signal.
        end: f64,
    },

    /// The requested bit depth is outside the supported range [2, 8].
    #[error("bit depth {bit_depth} is outside the supported range [2, 8]")]
    InvalidBitDepth {
        /// The rejected bit depth.
        bit_depth: u32,
    },

    /// A level index does not fit the level set implied by the bit depth.
    #[error("level index {index} is out of range for {level_count} levels")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of levels the bit depth allows.
        level_count: usize,
    },

    /// An amplitude handed to batch encoding matches no quantization level.
    ///
    /// This indicates a wiring bug upstream (a raw amplitude leaked past the
    /// quantizer), not bad user input.
    #[error("amplitude {value} does not match any quantization level")]
    ValueNotInLevelSet {
        /// The unmatched amplitude.
        value: f64,
    },

    /// Fewer than two points were supplied for a signal.
    #[error("a signal needs at least two points, got {count}")]
    InsufficientSignal {
        /// Number of points supplied.
        count: usize,
    },

    /// The sampling rate was zero, negative, or not finite.
    #[error("sampling rate must be a positive finite number, got {rate}")]
    InvalidSamplingRate {
        /// The rejected rate.
        rate: f64,
    },

    /// Parallel time/amplitude columns had different lengths.
    #[error("time column has {times} entries but amplitude column has {amplitudes}")]
    ColumnLengthMismatch {
        /// Length of the time column.
        times: usize,
        /// Length of the amplitude column.
        amplitudes: usize,
    },

    /// Time values were not strictly increasing.
    #[error("time values must be strictly increasing (violated at index {index})")]
    NonMonotonicTime {
        /// Index of the first offending entry.
        index: usize,
    },
}
