//! Stage 2: uniform quantization over [-1, 1].

use crate::error::PipelineError;

/// Smallest supported bit depth.
pub const MIN_BIT_DEPTH: u32 = 2;
/// Largest supported bit depth.
pub const MAX_BIT_DEPTH: u32 = 8;

/// A quantized sample: the original timestamp together with the chosen
/// level's index and reconstructed amplitude.
///
/// The index is carried alongside the value so the encoder never has to
/// re-derive it by floating-point value match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizedSample {
    /// Timestamp of the sample this level was chosen for.
    pub time: f64,
    /// Index of the chosen level within the level set.
    pub index: usize,
    /// Amplitude of the chosen level.
    pub value: f64,
}

/// The set of discrete amplitudes a quantizer can output.
///
/// Holds `2^bit_depth` values uniformly spaced over [-1, 1] inclusive,
/// sorted ascending. Level `i` is computed as `(2i - (n-1)) / (n-1)` with
/// `n` the level count, a single division per level, so both endpoints are
/// exactly ±1.0 and symmetric levels are exact negations of each other.
/// The latter matters for tie-breaking: the midpoint between a symmetric
/// pair (e.g. amplitude 0.0) is an honest floating-point tie rather than
/// an artifact of accumulated rounding.
///
/// # Examples
///
/// ```
/// use adcpipe::LevelSet;
///
/// let levels = LevelSet::new(2).unwrap();
/// assert_eq!(levels.len(), 4);
/// assert_eq!(levels.value(0), Some(-1.0));
/// assert_eq!(levels.value(3), Some(1.0));
///
/// let (index, value) = levels.quantize(0.9);
/// assert_eq!(index, 3);
/// assert_eq!(value, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSet {
    levels: Vec<f64>,
    bit_depth: u32,
}

impl LevelSet {
    /// Builds the level set for a bit depth.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidBitDepth`] unless
    /// `bit_depth ∈ [2, 8]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use adcpipe::LevelSet;
    ///
    /// assert_eq!(LevelSet::new(8).unwrap().len(), 256);
    /// assert!(LevelSet::new(1).is_err());
    /// assert!(LevelSet::new(9).is_err());
    /// ```
    pub fn new(bit_depth: u32) -> Result<Self, PipelineError> {
        if !(MIN_BIT_DEPTH..=MAX_BIT_DEPTH).contains(&bit_depth) {
            return Err(PipelineError::InvalidBitDepth { bit_depth });
        }
        let count = 1usize << bit_depth;
        let last = (count - 1) as f64;
        let levels = (0..count)
            .map(|i| (2.0 * i as f64 - last) / last)
            .collect();
        Ok(Self { levels, bit_depth })
    }

    /// The bit depth this level set was built for.
    pub fn bit_depth(&self) -> u32 {
        self.bit_depth
    }

    /// Number of levels (`2^bit_depth`).
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; a level set holds at least four levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Spacing between adjacent levels, `2 / (2^bit_depth - 1)`.
    pub fn step(&self) -> f64 {
        2.0 / (self.levels.len() - 1) as f64
    }

    /// Amplitude of the level at `index`, if in range.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.levels.get(index).copied()
    }

    /// The levels as a sorted slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.levels
    }

    /// Maps an amplitude to its nearest level, returning the level's index
    /// and amplitude.
    ///
    /// The candidate pair bracketing the amplitude is located by binary
    /// search, then the closer of the two wins. When both are exactly
    /// equidistant the lower index (smaller amplitude) wins; this
    /// tie-break is deliberate and fixed, so identical inputs always
    /// produce identical output across runs. Amplitudes outside [-1, 1]
    /// saturate at the extreme levels.
    ///
    /// # Examples
    ///
    /// ```
    /// use adcpipe::LevelSet;
    ///
    /// let levels = LevelSet::new(2).unwrap();
    /// // 0.0 sits exactly between the two middle levels; the lower wins.
    /// let (index, value) = levels.quantize(0.0);
    /// assert_eq!(index, 1);
    /// assert!(value < 0.0);
    ///
    /// // Out-of-range input saturates.
    /// assert_eq!(levels.quantize(-3.0), (0, -1.0));
    /// ```
    pub fn quantize(&self, amplitude: f64) -> (usize, f64) {
        let upper = self.levels.partition_point(|&level| level < amplitude);
        let index = if upper == 0 {
            0
        } else if upper == self.levels.len() {
            self.levels.len() - 1
        } else {
            let lower = upper - 1;
            // Lowest index wins on an exact tie.
            if amplitude - self.levels[lower] <= self.levels[upper] - amplitude {
                lower
            } else {
                upper
            }
        };
        (index, self.levels[index])
    }

    /// Quantizes a whole amplitude column at once.
    pub fn quantize_all(&self, amplitudes: &[f64]) -> Vec<(usize, f64)> {
        amplitudes.iter().map(|&a| self.quantize(a)).collect()
    }
}
