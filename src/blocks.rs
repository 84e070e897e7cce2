//! Canonical input blocks for driving the transform pipeline.

use crate::dct::{BLOCK_DIM, BLOCK_SIZE};
use crate::error::{BlockDctError, Result};
use crate::matrix::Matrix;

/// Reference 8x8 sample block, a near-uniform patch with values in the
/// 50..52 range. Its forward transform concentrates almost all energy in
/// the DC coefficient, which makes it a useful fixture for inspecting
/// quantization loss.
pub const REFERENCE_BLOCK: [f32; BLOCK_DIM] = [
    51.0, 52.0, 51.0, 50.0, 50.0, 52.0, 50.0, 52.0,
    51.0, 52.0, 51.0, 51.0, 50.0, 52.0, 52.0, 51.0,
    50.0, 50.0, 51.0, 52.0, 52.0, 51.0, 51.0, 51.0,
    51.0, 50.0, 50.0, 50.0, 52.0, 50.0, 50.0, 51.0,
    51.0, 50.0, 50.0, 51.0, 50.0, 50.0, 51.0, 50.0,
    50.0, 51.0, 52.0, 52.0, 51.0, 50.0, 50.0, 50.0,
    51.0, 52.0, 51.0, 50.0, 52.0, 50.0, 52.0, 50.0,
    50.0, 51.0, 52.0, 52.0, 50.0, 51.0, 52.0, 51.0,
];

/// Selects the spatial block a pipeline run starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockSource {
    /// The built-in 8x8 reference sample block.
    Reference,
    /// A block with every entry set to the given value.
    Flat(f32),
}

impl BlockSource {
    /// Materializes a `dim` x `dim` spatial block for this source.
    ///
    /// `Reference` is only defined for the 8x8 configuration and fails
    /// with `DimensionMismatch` for any other dimension.
    pub fn block(&self, dim: usize) -> Result<Matrix<f32>> {
        match *self {
            BlockSource::Reference => {
                if dim != BLOCK_SIZE {
                    return Err(BlockDctError::DimensionMismatch {
                        expected: BLOCK_SIZE,
                        actual: dim,
                    });
                }
                Matrix::from_row_major(BLOCK_SIZE, &REFERENCE_BLOCK)
            }
            BlockSource::Flat(value) => Matrix::filled(dim, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_block_is_8x8() {
        let block = BlockSource::Reference.block(BLOCK_SIZE).unwrap();
        assert_eq!(block.dim(), BLOCK_SIZE);
        assert_eq!(block.get(0, 0), 51.0);
        assert_eq!(block.get(7, 7), 51.0);
    }

    #[test]
    fn test_reference_block_rejects_other_dimensions() {
        assert_eq!(
            BlockSource::Reference.block(4).unwrap_err(),
            BlockDctError::DimensionMismatch {
                expected: BLOCK_SIZE,
                actual: 4
            }
        );
    }

    #[test]
    fn test_flat_block_any_dimension() {
        let block = BlockSource::Flat(100.0).block(16).unwrap();
        assert_eq!(block.dim(), 16);
        assert_eq!(block.get(3, 11), 100.0);
    }
}
