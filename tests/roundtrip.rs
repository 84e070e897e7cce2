//! End-to-end round-trip validation against precomputed reference values
//! for the canonical 8x8 sample block.

use blockdct::quantization::{dequantize, quantize, std_luminance_table};
use blockdct::{BLOCK_SIZE, BlockSource, Dct, Matrix, Pipeline};

/// Forward transform of the reference block, computed once in double
/// precision from the basis definition.
const EXPECTED_COEFFICIENTS: [f32; 64] = [
    407.0000, 0.0575, -0.5180, -0.5920, -0.5000, 0.1177, -0.5972, 0.0861,
    0.3515, -0.6541, 1.0186, 0.8179, 0.1793, -1.0739, 1.1901, -1.1939,
    1.9038, -0.1163, 1.0000, -0.5981, -2.1744, -0.3520, 0.2929, -1.0055,
    -0.6609, 1.3505, 0.6890, -0.0547, -0.4254, -0.5993, 0.2545, -0.4120,
    -1.0000, -0.3353, 1.1713, 0.1016, 0.5000, -0.0202, 0.8678, -0.5018,
    -0.2290, 0.1620, 0.1152, 0.7114, 0.9549, -1.9024, -0.1078, 1.4540,
    0.0232, -0.1727, -1.7071, -1.5292, 0.6301, 0.1091, 1.0000, -0.6029,
    -0.1103, -0.3833, 0.1051, 0.4704, 0.0047, 0.5679, -0.4698, 0.1112,
];

fn reference_block() -> Matrix<f32> {
    BlockSource::Reference.block(BLOCK_SIZE).unwrap()
}

#[test]
fn test_forward_matches_reference_coefficients() {
    let dct = Dct::new(BLOCK_SIZE).unwrap();
    let coeffs = dct.forward(&reference_block()).unwrap();
    let expected = Matrix::from_row_major(BLOCK_SIZE, &EXPECTED_COEFFICIENTS).unwrap();
    assert!(
        coeffs.max_abs_diff(&expected).unwrap() < 1e-2,
        "coefficients deviate from reference by {}",
        coeffs.max_abs_diff(&expected).unwrap()
    );
}

#[test]
fn test_reference_block_quantizes_to_dc_only() {
    let dct = Dct::new(BLOCK_SIZE).unwrap();
    let table = std_luminance_table();
    let coeffs = dct.forward(&reference_block()).unwrap();
    let quantized = quantize(&coeffs, &table).unwrap();
    // 407.0 / 16 = 25.4375; every AC coefficient is far below half a step
    assert_eq!(quantized.get(0, 0), 25);
    for row in 0..BLOCK_SIZE {
        for col in 0..BLOCK_SIZE {
            if row != 0 || col != 0 {
                assert_eq!(
                    quantized.get(row, col),
                    0,
                    "unexpected AC value at ({row}, {col})"
                );
            }
        }
    }
}

#[test]
fn test_lossless_round_trip_without_quantization() {
    let dct = Dct::new(BLOCK_SIZE).unwrap();
    let block = reference_block();
    let restored = dct.inverse(&dct.forward(&block).unwrap()).unwrap();
    assert!(restored.max_abs_diff(&block).unwrap() < 1e-3);
}

#[test]
fn test_lossy_round_trip_error_matches_fixture() {
    let pipeline = Pipeline::new(
        BLOCK_SIZE,
        std_luminance_table(),
        BlockSource::Reference,
    )
    .unwrap();
    let trip = pipeline.run().unwrap();

    // Quantization flattens this block to its DC average of 50, so the
    // worst per-entry deviation is the 52-valued samples.
    let max_dev = trip.reconstructed.max_abs_diff(&trip.input).unwrap();
    assert!(
        max_dev <= 2.0 + 1e-3,
        "reconstruction deviates by {max_dev}"
    );
    // The dequantized DC is 25 * 16 = 400 exactly.
    assert_eq!(trip.dequantized.get(0, 0), 400.0);
}

#[test]
fn test_dequantize_bounds_quantization_error() {
    let dct = Dct::new(BLOCK_SIZE).unwrap();
    let table = std_luminance_table();
    let coeffs = dct.forward(&reference_block()).unwrap();
    let quantized = quantize(&coeffs, &table).unwrap();
    let restored = dequantize(&quantized, &table).unwrap();
    for row in 0..BLOCK_SIZE {
        for col in 0..BLOCK_SIZE {
            let err = (restored.get(row, col) - coeffs.get(row, col)).abs();
            assert!(err <= table.get(row, col) / 2.0 + 1e-3);
        }
    }
}
