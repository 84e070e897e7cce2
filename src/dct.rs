//! Separable 2D Discrete Cosine Transform in basis-matrix form.

use std::f32::consts::PI;

use crate::error::Result;
use crate::matrix::Matrix;

/// Reference block dimension used by JPEG-style codecs.
pub const BLOCK_SIZE: usize = 8;
pub const BLOCK_DIM: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Orthonormal DCT basis for square blocks of one fixed dimension.
///
/// Row 0 of the basis matrix U holds the constant DC vector; rows 1..n
/// sample cosines of increasing frequency. The `sqrt(2/n)` scale makes
/// `U * U^t` the identity (at n = 8 this equals the classic 1/2 global
/// scale with a `sqrt(2)/2` DC entry), so `forward` and `inverse` are
/// exact inverses up to float rounding.
///
/// The basis is built once at construction and never mutated; all
/// transform calls borrow it immutably, so a `Dct` can be shared across
/// threads processing independent blocks.
#[derive(Debug)]
pub struct Dct {
    basis: Matrix<f32>,
    basis_t: Matrix<f32>,
}

impl Dct {
    /// Builds the basis matrix for `dim` x `dim` blocks.
    ///
    /// Pure in `dim`; fails with `InvalidDimension` if `dim` is zero.
    pub fn new(dim: usize) -> Result<Self> {
        let mut basis = Matrix::new(dim)?;
        let scale = (2.0 / dim as f32).sqrt();
        for i in 0..dim {
            for j in 0..dim {
                let elem = if i == 0 {
                    2.0f32.sqrt() / 2.0
                } else {
                    (PI * (i * (2 * j + 1)) as f32 / (2 * dim) as f32).cos()
                };
                basis.set(i, j, scale * elem);
            }
        }
        let basis_t = basis.transpose();
        Ok(Self { basis, basis_t })
    }

    pub fn dim(&self) -> usize {
        self.basis.dim()
    }

    /// The basis matrix U, for inspection only.
    pub fn basis(&self) -> &Matrix<f32> {
        &self.basis
    }

    /// Forward transform `B = (U * A) * U^t` of a spatial block.
    ///
    /// Fails with `DimensionMismatch` if `block` does not match the basis
    /// dimension.
    pub fn forward(&self, block: &Matrix<f32>) -> Result<Matrix<f32>> {
        self.check_block(block)?;
        self.basis.mul(block)?.mul(&self.basis_t)
    }

    /// Inverse transform `A = (U^t * B) * U` of a coefficient block.
    ///
    /// Exact inverse of [`forward`](Self::forward) because U is orthonormal.
    pub fn inverse(&self, coeffs: &Matrix<f32>) -> Result<Matrix<f32>> {
        self.check_block(coeffs)?;
        self.basis_t.mul(coeffs)?.mul(&self.basis)
    }

    fn check_block(&self, block: &Matrix<f32>) -> Result<()> {
        self.basis.ensure_same_dim(block)
    }
}
