//! Full lossy round trip over one block: forward DCT, quantize,
//! dequantize, inverse DCT.

use crate::blocks::BlockSource;
use crate::dct::Dct;
use crate::error::{BlockDctError, Result};
use crate::matrix::Matrix;
use crate::quantization;

/// Sequences the four-stage round trip and owns the session state: the
/// DCT basis, the quantization table, and the configured input source.
///
/// The basis is built once at construction and released when the
/// pipeline is dropped; nothing else persists across blocks.
#[derive(Debug)]
pub struct Pipeline {
    dct: Dct,
    table: Matrix<f32>,
    source: BlockSource,
}

/// Every intermediate of one round trip, exposed for inspection by
/// display or analysis collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTrip {
    /// Spatial block fed into the forward transform.
    pub input: Matrix<f32>,
    /// Transform-domain coefficients.
    pub coefficients: Matrix<f32>,
    /// Coefficients mapped onto the quantization grid.
    pub quantized: Matrix<i32>,
    /// Quantized values scaled back to coefficient magnitudes.
    pub dequantized: Matrix<f32>,
    /// Spatial block recovered by the inverse transform.
    pub reconstructed: Matrix<f32>,
}

impl Pipeline {
    /// Builds the basis for `dim` x `dim` blocks and validates the
    /// quantization table against it.
    pub fn new(dim: usize, table: Matrix<f32>, source: BlockSource) -> Result<Self> {
        let dct = Dct::new(dim)?;
        if table.dim() != dim {
            return Err(BlockDctError::DimensionMismatch {
                expected: dim,
                actual: table.dim(),
            });
        }
        quantization::validate_steps(&table)?;
        Ok(Self { dct, table, source })
    }

    pub fn dim(&self) -> usize {
        self.dct.dim()
    }

    pub fn table(&self) -> &Matrix<f32> {
        &self.table
    }

    /// Runs the configured input source through the round trip.
    pub fn run(&self) -> Result<RoundTrip> {
        let input = self.source.block(self.dim())?;
        self.round_trip(input)
    }

    /// Runs one supplied spatial block through
    /// forward -> quantize -> dequantize -> inverse.
    pub fn round_trip(&self, input: Matrix<f32>) -> Result<RoundTrip> {
        let coefficients = self.dct.forward(&input)?;
        let quantized = quantization::quantize(&coefficients, &self.table)?;
        let dequantized = quantization::dequantize(&quantized, &self.table)?;
        let reconstructed = self.dct.inverse(&dequantized)?;
        Ok(RoundTrip {
            input,
            coefficients,
            quantized,
            dequantized,
            reconstructed,
        })
    }
}
