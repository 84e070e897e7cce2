//! Square matrix value type shared by the spatial, transform, and quantized domains.

use std::fmt;

use crate::error::{BlockDctError, Result};

/// A square, row-major matrix with runtime dimension.
///
/// One abstraction covers every block domain: `Matrix<f32>` for spatial
/// samples, transform coefficients, quantization steps, and dequantized
/// values; `Matrix<i32>` for quantized coefficients. The dimension is a
/// runtime value so pipelines with different block sizes can coexist.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    dim: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Matrix<T> {
    /// Creates a `dim` x `dim` matrix of default-valued entries.
    pub fn new(dim: usize) -> Result<Self> {
        Self::filled(dim, T::default())
    }

    /// Creates a `dim` x `dim` matrix with every entry set to `value`.
    pub fn filled(dim: usize, value: T) -> Result<Self> {
        if dim == 0 {
            return Err(BlockDctError::InvalidDimension);
        }
        Ok(Self {
            dim,
            data: vec![value; dim * dim],
        })
    }

    /// Creates a `dim` x `dim` matrix from `dim * dim` row-major values.
    pub fn from_row_major(dim: usize, values: &[T]) -> Result<Self> {
        if dim == 0 || values.len() != dim * dim {
            return Err(BlockDctError::InvalidDimension);
        }
        Ok(Self {
            dim,
            data: values.to_vec(),
        })
    }
}

impl<T: Copy> Matrix<T> {
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.dim + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.dim + col] = value;
    }

    /// Applies `f` to every entry, producing a matrix of possibly different
    /// element type (e.g. rounding `f32` coefficients down to `i32`).
    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix {
            dim: self.dim,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Fails with `DimensionMismatch` unless `other` has the same dimension.
    pub fn ensure_same_dim<U: Copy>(&self, other: &Matrix<U>) -> Result<()> {
        if self.dim != other.dim {
            return Err(BlockDctError::DimensionMismatch {
                expected: self.dim,
                actual: other.dim,
            });
        }
        Ok(())
    }
}

impl Matrix<f32> {
    pub fn transpose(&self) -> Self {
        let mut out = self.clone();
        for row in 0..self.dim {
            for col in 0..self.dim {
                out.set(row, col, self.get(col, row));
            }
        }
        out
    }

    /// Dense matrix product `self * other`.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.ensure_same_dim(other)?;
        let mut out = Self::new(self.dim)?;
        for row in 0..self.dim {
            for col in 0..self.dim {
                let mut sum = 0.0f32;
                for k in 0..self.dim {
                    sum += self.get(row, k) * other.get(k, col);
                }
                out.set(row, col, sum);
            }
        }
        Ok(out)
    }

    /// Largest absolute entrywise difference against `other`.
    pub fn max_abs_diff(&self, other: &Self) -> Result<f32> {
        self.ensure_same_dim(other)?;
        let mut max = 0.0f32;
        for (a, b) in self.data.iter().zip(&other.data) {
            max = max.max((a - b).abs());
        }
        Ok(max)
    }
}

impl fmt::Display for Matrix<f32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dim {
            for col in 0..self.dim {
                write!(f, "{:.3}\t", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Matrix<i32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dim {
            for col in 0..self.dim {
                write!(f, "{}\t", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
