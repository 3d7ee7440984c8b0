//! The three stages wired together.
//!
//! The presentation layer recomputes everything whenever a slider moves;
//! [`run`] is that recomputation as one call. There is no incremental
//! update logic and no state: the pipeline is a pure function of the
//! signal and the two parameters.

use tracing::debug;

use crate::encoder::{BinaryCode, encode};
use crate::error::PipelineError;
use crate::quantizer::{LevelSet, QuantizedSample};
use crate::resampler::resample;
use crate::signal::{SampleSet, Signal};

/// The two user-tunable parameters of the conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineParams {
    /// Samples produced per unit time during resampling. Must be positive.
    pub sampling_rate: f64,
    /// Bits per quantized sample, in [2, 8].
    pub bit_depth: u32,
}

/// Everything the pipeline produces for one (signal, params) pair.
///
/// Holds all four columns a display layer renders: sample timestamps and
/// amplitudes, quantized amplitudes with their level indices, and binary
/// codes. `quantized` and `codes` are index-aligned with `samples`.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Stage 1 output: the resampled signal.
    pub samples: SampleSet,
    /// The level set the quantizer used.
    pub levels: LevelSet,
    /// Stage 2 output, one entry per sample.
    pub quantized: Vec<QuantizedSample>,
    /// Stage 3 output, one code per sample.
    pub codes: Vec<BinaryCode>,
}

/// Runs the full pipeline: resample, quantize, encode.
///
/// Level indices flow straight from the quantizer into the encoder; the
/// value-matching [`encode_all`](crate::encoder::encode_all) path is only
/// needed for externally supplied pre-quantized columns.
///
/// # Errors
///
/// Propagates [`PipelineError::InvalidSamplingRate`] and
/// [`PipelineError::InvalidBitDepth`] from the parameter checks; the
/// remaining stages cannot fail on their own output.
///
/// # Examples
///
/// ```
/// use adcpipe::{PipelineParams, Signal, run};
///
/// let signal = Signal::from_columns(&[0.0, 1.0], &[-1.0, 1.0]).unwrap();
/// let params = PipelineParams {
///     sampling_rate: 3.0,
///     bit_depth: 2,
/// };
/// let output = run(&signal, &params).unwrap();
///
/// assert_eq!(output.samples.times(), vec![0.0, 0.5, 1.0]);
/// let codes: Vec<String> = output.codes.iter().map(|c| c.bits()).collect();
/// assert_eq!(codes, vec!["00", "01", "11"]);
/// ```
pub fn run(signal: &Signal, params: &PipelineParams) -> Result<PipelineOutput, PipelineError> {
    let samples = resample(signal, params.sampling_rate)?;
    let levels = LevelSet::new(params.bit_depth)?;

    let mut quantized = Vec::with_capacity(samples.len());
    let mut codes = Vec::with_capacity(samples.len());
    for sample in samples.samples() {
        let (index, value) = levels.quantize(sample.amplitude);
        quantized.push(QuantizedSample {
            time: sample.time,
            index,
            value,
        });
        codes.push(encode(index, params.bit_depth)?);
    }

    debug!(
        samples = samples.len(),
        sampling_rate = params.sampling_rate,
        bit_depth = params.bit_depth,
        "pipeline complete"
    );
    Ok(PipelineOutput {
        samples,
        levels,
        quantized,
        codes,
    })
}
