//! Adcpipe - an analog-to-digital conversion pipeline.
//!
//! This library implements the three numeric stages of A/D conversion as
//! stateless pure transforms over immutable inputs:
//!
//! 1. **Resampling** - a continuous signal (given as discrete points of a
//!    piecewise-linear function) is sampled at a target rate by linear
//!    interpolation.
//! 2. **Quantization** - each sampled amplitude is mapped to the nearest
//!    of `2^bit_depth` uniformly spaced levels over [-1, 1], with a fixed
//!    lowest-index tie-break.
//! 3. **Encoding** - each level index becomes a fixed-width binary code.
//!
//! Data flows strictly resampler → quantizer → encoder; nothing mutates an
//! earlier stage's output, and nothing is cached, so recomputing after a
//! parameter change is just calling [`run`] again.
//!
//! # Examples
//!
//! ```
//! use adcpipe::{PipelineParams, Signal, run};
//!
//! let signal = Signal::from_columns(&[0.0, 1.0], &[-1.0, 1.0]).unwrap();
//! let output = run(
//!     &signal,
//!     &PipelineParams {
//!         sampling_rate: 3.0,
//!         bit_depth: 2,
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(output.samples.amplitudes(), vec![-1.0, 0.0, 1.0]);
//! assert_eq!(output.codes[2].bits(), "11");
//! ```

pub mod encoder;
pub mod error;
pub mod pipeline;
pub mod quantizer;
pub mod resampler;
pub mod signal;

// Re-export commonly used items at the crate root
pub use encoder::{BinaryCode, encode, encode_all};
pub use error::PipelineError;
pub use pipeline::{PipelineOutput, PipelineParams, run};
pub use quantizer::{LevelSet, MAX_BIT_DEPTH, MIN_BIT_DEPTH, QuantizedSample};
pub use resampler::resample;
pub use signal::{Sample, SampleSet, Signal};
