use thiserror::Error;

pub type Result<T> = std::result::Result<T, BlockDctError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockDctError {
    #[error("Matrix dimension must be positive")]
    InvalidDimension,
    #[error("Operand dimension mismatch: expected {expected}x{expected}, got {actual}x{actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Quantization step at row {row}, column {col} is not positive")]
    InvalidStep { row: usize, col: usize },
}
