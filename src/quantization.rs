//! Uniform quantization of transform coefficients against a per-position
//! step table, and the matching dequantization.

use crate::dct::BLOCK_DIM;
use crate::error::{BlockDctError, Result};
use crate::matrix::Matrix;

/// Standard JPEG luminance quantization table (Quality 50).
pub const STD_LUMINANCE_QUANT_TABLE: [u8; BLOCK_DIM] = [
    16, 11, 10, 16, 24, 40, 51, 61,
    12, 12, 14, 19, 26, 58, 60, 55,
    14, 13, 16, 24, 40, 57, 69, 56,
    14, 17, 22, 29, 51, 87, 80, 62,
    18, 22, 37, 56, 68, 109, 103, 77,
    24, 35, 55, 64, 81, 104, 113, 92,
    49, 64, 78, 87, 103, 121, 120, 101,
    72, 92, 95, 98, 112, 100, 103, 99,
];

/// The standard luminance table as a step matrix.
pub fn std_luminance_table() -> Matrix<f32> {
    let steps: Vec<f32> = STD_LUMINANCE_QUANT_TABLE.iter().map(|&v| v as f32).collect();
    // 8x8 literal of the right length, cannot fail
    Matrix::from_row_major(8, &steps).unwrap()
}

/// Scales a base quantization table by a quality factor (1-100), libjpeg
/// convention: 50 reproduces the base table, higher is finer, lower is
/// coarser. Steps are clamped to 1..=255, so the result is always a valid
/// step table.
pub fn scaled_quant_table(base: &Matrix<f32>, quality: u32) -> Result<Matrix<f32>> {
    validate_steps(base)?;
    let quality = quality.clamp(1, 100);
    let s = if quality < 50 {
        5000 / quality
    } else {
        200 - 2 * quality
    };
    Ok(base.map(|step| {
        let scaled = (step * s as f32 / 100.0).round();
        scaled.clamp(1.0, 255.0)
    }))
}

/// Fails with `InvalidStep` at the first non-positive table entry.
pub fn validate_steps(table: &Matrix<f32>) -> Result<()> {
    for row in 0..table.dim() {
        for col in 0..table.dim() {
            if table.get(row, col) <= 0.0 {
                return Err(BlockDctError::InvalidStep { row, col });
            }
        }
    }
    Ok(())
}

/// Quantizes a coefficient block: each entry becomes
/// `round(coeff / step)`, rounding to nearest with ties away from zero.
pub fn quantize(coeffs: &Matrix<f32>, table: &Matrix<f32>) -> Result<Matrix<i32>> {
    coeffs.ensure_same_dim(table)?;
    validate_steps(table)?;
    let mut out = Matrix::new(coeffs.dim())?;
    for row in 0..coeffs.dim() {
        for col in 0..coeffs.dim() {
            let quantized = (coeffs.get(row, col) / table.get(row, col)).round() as i32;
            out.set(row, col, quantized);
        }
    }
    Ok(out)
}

/// Dequantizes a quantized block: each entry becomes `quantized * step`,
/// with no further rounding. The result approximates the original
/// coefficients within half a step per entry.
pub fn dequantize(quantized: &Matrix<i32>, table: &Matrix<f32>) -> Result<Matrix<f32>> {
    quantized.ensure_same_dim(table)?;
    validate_steps(table)?;
    let mut out = Matrix::new(quantized.dim())?;
    for row in 0..quantized.dim() {
        for col in 0..quantized.dim() {
            out.set(row, col, quantized.get(row, col) as f32 * table.get(row, col));
        }
    }
    Ok(out)
}
