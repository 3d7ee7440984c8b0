//! End-to-end tests of the conversion pipeline.

use adcpipe::{
    LevelSet, PipelineError, PipelineParams, SampleSet, Signal, encode_all, resample, run,
};

#[test]
fn test_ramp_through_all_three_stages() {
    // A one-second ramp from -1 to 1, sampled at 3 Hz with 2-bit depth.
    let signal = Signal::from_columns(&[0.0, 1.0], &[-1.0, 1.0]).unwrap();
    let params = PipelineParams {
        sampling_rate: 3.0,
        bit_depth: 2,
    };
    let output = run(&signal, &params).unwrap();

    assert_eq!(output.samples.times(), vec![0.0, 0.5, 1.0]);
    assert_eq!(output.samples.amplitudes(), vec![-1.0, 0.0, 1.0]);

    // 0.0 ties between the middle levels; the lower one wins.
    let indices: Vec<usize> = output.quantized.iter().map(|q| q.index).collect();
    assert_eq!(indices, vec![0, 1, 3]);
    assert_eq!(output.quantized[0].value, -1.0);
    assert!(output.quantized[1].value < 0.0);
    assert_eq!(output.quantized[2].value, 1.0);

    let codes: Vec<String> = output.codes.iter().map(|c| c.bits()).collect();
    assert_eq!(codes, vec!["00", "01", "11"]);
}

#[test]
fn test_two_samples_hit_both_boundaries() {
    let signal = Signal::from_columns(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
    let samples = resample(&signal, 2.0).unwrap();
    assert_eq!(samples.times(), vec![0.0, 1.0]);
    assert_eq!(samples.amplitudes(), vec![0.0, 1.0]);
}

#[test]
fn test_pre_sampled_dataset_path() {
    // A dataset that arrives already sampled (sample_time / amplitude_sampled
    // columns) skips the resampler: quantize the amplitudes, then batch-encode
    // the quantized values by lookup.
    let set = SampleSet::from_columns(&[0.0, 0.25, 0.5, 0.75], &[-0.9, -0.1, 0.4, 0.95]).unwrap();
    let levels = LevelSet::new(3).unwrap();

    let values: Vec<f64> = set
        .amplitudes()
        .iter()
        .map(|&a| levels.quantize(a).1)
        .collect();
    let codes = encode_all(&values, &levels).unwrap();
    assert_eq!(codes.len(), set.len());
    for (code, &value) in codes.iter().zip(&values) {
        assert_eq!(levels.value(code.index()), Some(value));
    }
}

#[test]
fn test_raw_amplitudes_are_rejected_by_batch_encoding() {
    // Feeding un-quantized amplitudes into the encoder is a wiring bug and
    // must fail rather than silently encode something.
    let levels = LevelSet::new(4).unwrap();
    let result = encode_all(&[0.123], &levels);
    assert!(matches!(
        result,
        Err(PipelineError::ValueNotInLevelSet { .. })
    ));
}

#[test]
fn test_recomputation_is_identical() {
    let signal = Signal::from_columns(
        &[0.0, 0.004, 0.009, 0.013, 0.02],
        &[0.0, 0.82, -0.34, -0.97, 0.15],
    )
    .unwrap();
    let params = PipelineParams {
        sampling_rate: 800.0,
        bit_depth: 8,
    };
    let first = run(&signal, &params).unwrap();
    let second = run(&signal, &params).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.samples.len(), 16);
}

#[test]
fn test_parameter_change_recomputes_from_scratch() {
    let signal = Signal::from_columns(&[0.0, 1.0], &[-1.0, 1.0]).unwrap();
    let coarse = run(
        &signal,
        &PipelineParams {
            sampling_rate: 4.0,
            bit_depth: 2,
        },
    )
    .unwrap();
    let fine = run(
        &signal,
        &PipelineParams {
            sampling_rate: 4.0,
            bit_depth: 8,
        },
    )
    .unwrap();

    // Same timestamps, finer amplitude grid.
    assert_eq!(coarse.samples, fine.samples);
    assert_eq!(coarse.levels.len(), 4);
    assert_eq!(fine.levels.len(), 256);
    for code in &fine.codes {
        assert_eq!(code.width(), 8);
    }
}
