use itertools::Itertools;
use num_traits::Float;
use std::fmt;
use std::ops;

use crate::matrix::error::MatrixError;
use crate::matrix::matrix::{Matrix, Shape};

pub trait DenseElement:  // Avoid repeating all the traits
    Float
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> DenseElement for T where T: Float + std::iter::Sum<T> + std::fmt::Display + std::fmt::Debug {}

/// Row-major dense matrix of floating point values.
///
/// The shape is fixed at construction, every operation returns a new matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixDense<T = f64> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// Creates a `height` x `width` matrix of zeroes.
pub fn zeroes(height: usize, width: usize) -> MatrixDense<f64> {
    MatrixDense::zeroes(height, width)
}

/// Creates a `n` x `n` identity matrix.
pub fn identity(n: usize) -> MatrixDense<f64> {
    MatrixDense::identity(n)
}

impl<T: DenseElement> Matrix<T> for MatrixDense<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        if rows == 0 || cols == 0 || lines.iter().any(|l| l.len() != cols) {
            log::debug!("Rejecting grid with {} rows", rows);
            return Err(MatrixError::InvalidGrid);
        }

        Ok(MatrixDense {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.rows_iter().map(|line| line.into()).collect()
    }

    /// # Panics
    /// If `rows` or `cols` is zero, or `rows * cols` overflows `usize`.
    fn zeroes(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "Matrix dimensions must be at least 1x1");
        let Some(len) = rows.checked_mul(cols) else {
            panic!("Matrix dimensions {}x{} overflow", rows, cols);
        };
        MatrixDense {
            rows,
            cols,
            cells: vec![T::zero(); len],
        }
    }

    fn identity(n: usize) -> Self {
        let mut id = Self::zeroes(n, n);
        for i in 0..n {
            id.cells[i * n + i] = T::one();
        }
        id
    }

    fn shape(&self) -> Shape {
        Shape {
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn trace(&self) -> Result<T, MatrixError> {
        self.check_square("trace")?;
        Ok((0..self.cols).map(|i| self.at(i, i)).sum())
    }

    /// Determinant of a 1x1 or 2x2 matrix.
    ///
    /// The determinant of a 1x1 matrix is the absolute value of its element.
    fn determinant(&self) -> Result<T, MatrixError> {
        self.check_square("determinant")?;
        self.check_small("determinant")?;

        if self.rows == 1 {
            return Ok(self.at(0, 0).abs());
        }
        // ((a, b), (c, d)) => ad - bc
        Ok(self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0))
    }

    /// Inverse of a 1x1 or 2x2 matrix.
    ///
    /// A 1x1 matrix `[[a]]` is inverted as `[[1 / a]]`, keeping the sign of `a`
    /// even though [`determinant`](Matrix::determinant) returns `|a|`.
    /// A 2x2 matrix `A` is inverted as `(trace(A) * I - A) / det(A)`.
    ///
    /// Fails with [`MatrixError::Singular`] when the determinant is zero.
    fn inverse(&self) -> Result<Self, MatrixError> {
        self.check_square("inverse")?;
        self.check_small("inverse")?;
        log::trace!("Inverting {} matrix", self.shape());

        if self.rows == 1 {
            let value = self.at(0, 0);
            if value.is_zero() {
                log::debug!("Cannot invert singular 1x1 matrix");
                return Err(MatrixError::Singular);
            }
            let mut inv = Self::zeroes(1, 1);
            inv.cells[0] = value.recip();
            return Ok(inv);
        }

        let det = self.determinant()?;
        if det.is_zero() {
            log::debug!("Cannot invert singular 2x2 matrix");
            return Err(MatrixError::Singular);
        }
        let tr = self.trace()?;
        let adjugate = (&Self::identity(2).scale(tr) - self)?;
        Ok(adjugate.scale(det.recip()))
    }

    fn transpose(&self) -> Self {
        MatrixDense {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }

    fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                shape: self.shape(),
            });
        }
        Ok(self.at(row, col))
    }
}

impl<T: DenseElement> MatrixDense<T> {
    pub fn height(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.cols
    }

    /// Checked access to a row
    pub fn row(&self, row: usize) -> Result<&[T], MatrixError> {
        if row >= self.rows {
            return Err(MatrixError::OutOfRange {
                row,
                col: 0,
                shape: self.shape(),
            });
        }
        Ok(&self[row])
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.cols)
    }

    /// Multiply every element by `k`
    pub fn scale(&self, k: T) -> MatrixDense<T> {
        MatrixDense {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|x| *x * k).collect(),
        }
    }

    pub fn add(&self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>, MatrixError> {
        self + rhs
    }

    pub fn subtract(&self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>, MatrixError> {
        self - rhs
    }

    pub fn negate(&self) -> MatrixDense<T> {
        -self
    }

    pub fn multiply(&self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>, MatrixError> {
        self * rhs
    }

    fn check_square(&self, operation: &'static str) -> Result<(), MatrixError> {
        if !self.is_square() {
            log::debug!("Rejecting {} of non-square {} matrix", operation, self.shape());
            return Err(MatrixError::NotSquare {
                operation,
                shape: self.shape(),
            });
        }
        Ok(())
    }

    fn check_small(&self, operation: &'static str) -> Result<(), MatrixError> {
        if self.rows > 2 {
            log::debug!("Rejecting {} of {} matrix", operation, self.shape());
            return Err(MatrixError::Unsupported {
                operation,
                shape: self.shape(),
            });
        }
        Ok(())
    }

    fn check_same_shape(
        &self,
        rhs: &MatrixDense<T>,
        operation: &'static str,
    ) -> Result<(), MatrixError> {
        if self.shape() != rhs.shape() {
            log::debug!(
                "Rejecting {} of {} and {} matrices",
                operation,
                self.shape(),
                rhs.shape()
            );
            return Err(MatrixError::DimensionMismatch {
                operation,
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(())
    }

    fn zip_cells(&self, rhs: &MatrixDense<T>, op: impl Fn(T, T) -> T) -> MatrixDense<T> {
        MatrixDense {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| op(*a, *b))
                .collect(),
        }
    }
}

impl<T> ops::Index<usize> for MatrixDense<T> {
    type Output = [T];

    /// Row `row` of the matrix, so that `m[i][j]` reads a single element.
    fn index(&self, row: usize) -> &[T] {
        assert!(
            row < self.rows,
            "row index {} out of range for {} rows",
            row,
            self.rows
        );
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T: DenseElement> ops::Add<&MatrixDense<T>> for &MatrixDense<T> {
    type Output = Result<MatrixDense<T>, MatrixError>;

    fn add(self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>, MatrixError> {
        self.check_same_shape(rhs, "addition")?;
        Ok(self.zip_cells(rhs, |a, b| a + b))
    }
}

impl<T: DenseElement> ops::Sub<&MatrixDense<T>> for &MatrixDense<T> {
    type Output = Result<MatrixDense<T>, MatrixError>;

    fn sub(self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>, MatrixError> {
        self.check_same_shape(rhs, "subtraction")?;
        Ok(self.zip_cells(rhs, |a, b| a - b))
    }
}

impl<T: DenseElement> ops::Neg for &MatrixDense<T> {
    type Output = MatrixDense<T>;

    fn neg(self) -> MatrixDense<T> {
        self.scale(-T::one())
    }
}

impl<T: DenseElement> ops::Mul<&MatrixDense<T>> for &MatrixDense<T> {
    type Output = Result<MatrixDense<T>, MatrixError>;

    fn mul(self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>, MatrixError> {
        if self.cols != rhs.rows {
            log::debug!(
                "Rejecting multiplication of {} by {} matrix",
                self.shape(),
                rhs.shape()
            );
            return Err(MatrixError::DimensionMismatch {
                operation: "multiplication",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        log::trace!("Multiplying {} by {} matrix", self.shape(), rhs.shape());

        Ok(MatrixDense {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols)
                        .map(move |j| (0..rhs.rows).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
        })
    }
}

// Scalar on the left: `k * m`
macro_rules! impl_scalar_mul {
    ($($scalar:ty),*) => {
        $(
            impl ops::Mul<&MatrixDense<$scalar>> for $scalar {
                type Output = MatrixDense<$scalar>;

                fn mul(self, rhs: &MatrixDense<$scalar>) -> MatrixDense<$scalar> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

macro_rules! impl_approx_eq {
    ($scalar:ty, $margin:ty) => {
        impl float_cmp::ApproxEq for &MatrixDense<$scalar> {
            type Margin = $margin;

            fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
                let margin = margin.into();
                self.shape() == other.shape()
                    && self
                        .cells
                        .iter()
                        .zip(other.cells.iter())
                        .all(|(a, b)| float_cmp::ApproxEq::approx_eq(*a, *b, margin))
            }
        }
    };
}

impl_approx_eq!(f64, float_cmp::F64Margin);
impl_approx_eq!(f32, float_cmp::F32Margin);

/// Shortest round-trip form of `x`, with exponents written as `e+16` / `e-07`
fn format_element<T: DenseElement>(x: T) -> String {
    if x.is_nan() {
        return "nan".into();
    }
    let text = format!("{:?}", x);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// One line per row, each element followed by a space.
impl<T: DenseElement> fmt::Display for MatrixDense<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            writeln!(f, "{}", row.iter().map(|x| format_element(*x) + " ").join(" "))?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
