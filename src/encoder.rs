//! Stage 3: binary encoding of level indices.

use std::fmt;

use crate::error::PipelineError;
use crate::quantizer::{LevelSet, MAX_BIT_DEPTH, MIN_BIT_DEPTH};

/// A fixed-width unsigned binary code for a quantization level index.
///
/// Rendered MSB first and zero-padded to exactly `bit_depth` characters.
/// The code stores the index and width rather than the rendered string, so
/// [`index`](BinaryCode::index) recovers the level index without any
/// string parsing; [`bits`](BinaryCode::bits) and `Display` produce the
/// '0'/'1' form.
///
/// # Examples
///
/// ```
/// use adcpipe::encode;
///
/// let code = encode(5, 4).unwrap();
/// assert_eq!(code.bits(), "0101");
/// assert_eq!(code.index(), 5);
/// assert_eq!(code.to_string(), "0101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryCode {
    index: usize,
    width: u32,
}

impl BinaryCode {
    /// The encoded level index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Width of the rendered code in bits (the bit depth).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The code as a '0'/'1' string, MSB first.
    pub fn bits(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BinaryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.index, width = self.width as usize)
    }
}

/// Encodes a level index as a fixed-width binary code.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidBitDepth`] for a bit depth outside
/// [2, 8] and [`PipelineError::IndexOutOfRange`] when
/// `index >= 2^bit_depth`.
///
/// # Examples
///
/// ```
/// use adcpipe::encode;
///
/// assert_eq!(encode(0, 2).unwrap().bits(), "00");
/// assert_eq!(encode(3, 2).unwrap().bits(), "11");
/// assert!(encode(4, 2).is_err());
/// ```
pub fn encode(index: usize, bit_depth: u32) -> Result<BinaryCode, PipelineError> {
    if !(MIN_BIT_DEPTH..=MAX_BIT_DEPTH).contains(&bit_depth) {
        return Err(PipelineError::InvalidBitDepth { bit_depth });
    }
    let level_count = 1usize << bit_depth;
    if index >= level_count {
        return Err(PipelineError::IndexOutOfRange { index, level_count });
    }
    Ok(BinaryCode {
        index,
        width: bit_depth,
    })
}

/// Encodes a column of quantized amplitudes against their level set.
///
/// Each amplitude must exactly match a level, since the expected producer
/// is [`LevelSet::quantize`]; the lookup is a binary search on the sorted
/// levels. A miss means a raw, non-quantized amplitude leaked in, which is
/// a wiring bug worth failing loudly on. The code width is taken from
/// `levels.bit_depth()`.
///
/// # Errors
///
/// Returns [`PipelineError::ValueNotInLevelSet`] for an amplitude that
/// matches no level.
///
/// # Examples
///
/// ```
/// use adcpipe::{LevelSet, encode_all};
///
/// let levels = LevelSet::new(2).unwrap();
/// let quantized: Vec<f64> = levels
///     .quantize_all(&[-1.0, 0.0, 1.0])
///     .into_iter()
///     .map(|(_, value)| value)
///     .collect();
/// let codes = encode_all(&quantized, &levels).unwrap();
/// let rendered: Vec<String> = codes.iter().map(|c| c.bits()).collect();
/// assert_eq!(rendered, vec!["00", "01", "11"]);
/// ```
pub fn encode_all(
    amplitudes: &[f64],
    levels: &LevelSet,
) -> Result<Vec<BinaryCode>, PipelineError> {
    amplitudes
        .iter()
        .map(|&value| {
            let index = levels
                .as_slice()
                .binary_search_by(|level| level.total_cmp(&value))
                .map_err(|_| PipelineError::ValueNotInLevelSet { value })?;
            encode(index, levels.bit_depth())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero_pads_to_width() {
        assert_eq!(encode(0, 4).unwrap().bits(), "0000");
        assert_eq!(encode(1, 4).unwrap().bits(), "0001");
        assert_eq!(encode(10, 4).unwrap().bits(), "1010");
        assert_eq!(encode(255, 8).unwrap().bits(), "11111111");
    }

    #[test]
    fn test_encode_round_trips_every_index() {
        for bit_depth in MIN_BIT_DEPTH..=MAX_BIT_DEPTH {
            for index in 0..(1usize << bit_depth) {
                let code = encode(index, bit_depth).unwrap();
                assert_eq!(code.index(), index);
                assert_eq!(code.width(), bit_depth);
                let bits = code.bits();
                assert_eq!(bits.len(), bit_depth as usize);
                assert_eq!(usize::from_str_radix(&bits, 2).unwrap(), index);
            }
        }
    }

    #[test]
    fn test_encode_rejects_out_of_range_index() {
        assert!(matches!(
            encode(4, 2),
            Err(PipelineError::IndexOutOfRange {
                index: 4,
                level_count: 4
            })
        ));
        assert!(matches!(
            encode(256, 8),
            Err(PipelineError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_encode_rejects_bad_bit_depth() {
        assert!(matches!(
            encode(0, 1),
            Err(PipelineError::InvalidBitDepth { bit_depth: 1 })
        ));
        assert!(matches!(
            encode(0, 9),
            Err(PipelineError::InvalidBitDepth { bit_depth: 9 })
        ));
    }

    #[test]
    fn test_encode_all_on_quantizer_output() {
        let levels = LevelSet::new(3).unwrap();
        let values: Vec<f64> = levels
            .quantize_all(&[-1.0, -0.4, 0.1, 0.8, 1.0])
            .into_iter()
            .map(|(_, value)| value)
            .collect();
        let codes = encode_all(&values, &levels).unwrap();
        assert_eq!(codes.len(), values.len());
        for (code, &value) in codes.iter().zip(&values) {
            assert_eq!(levels.value(code.index()), Some(value));
            assert_eq!(code.width(), 3);
        }
    }

    #[test]
    fn test_encode_all_rejects_raw_amplitude() {
        let levels = LevelSet::new(2).unwrap();
        // 0.5 is not one of the four 2-bit levels.
        let result = encode_all(&[-1.0, 0.5], &levels);
        assert!(matches!(
            result,
            Err(PipelineError::ValueNotInLevelSet { value }) if value == 0.5
        ));
    }

    #[test]
    fn test_encode_all_is_deterministic() {
        let levels = LevelSet::new(4).unwrap();
        let values: Vec<f64> = levels
            .quantize_all(&[-0.9, -0.2, 0.0, 0.3, 0.95])
            .into_iter()
            .map(|(_, value)| value)
            .collect();
        let first = encode_all(&values, &levels).unwrap();
        let second = encode_all(&values, &levels).unwrap();
        assert_eq!(first, second);
    }
}
