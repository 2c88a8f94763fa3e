use std::fmt;

use crate::matrix::error::MatrixError;

/// Dimensions of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows (height)
    pub rows: usize,
    /// Number of columns (width)
    pub cols: usize,
}

impl Shape {
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Swap rows and columns
    pub fn transposed(self) -> Shape {
        Shape {
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn zeroes(rows: usize, cols: usize) -> Self;
    fn identity(n: usize) -> Self;

    fn shape(&self) -> Shape;
    fn is_square(&self) -> bool {
        self.shape().is_square()
    }

    fn trace(&self) -> Result<T, MatrixError>;
    fn determinant(&self) -> Result<T, MatrixError>;
    fn inverse(&self) -> Result<Self, MatrixError>;
    fn transpose(&self) -> Self;

    fn at(&self, row: usize, col: usize) -> T;
    fn get(&self, row: usize, col: usize) -> Result<T, MatrixError>;
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
