use crate::matrix::error::{ErrorKind, MatrixError};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::MatrixDense;
use pyo3::exceptions::{PyIndexError, PyNotImplementedError, PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        let message = error.to_string();
        match error.kind() {
            ErrorKind::Value => PyValueError::new_err(message),
            ErrorKind::Unsupported => PyNotImplementedError::new_err(message),
            ErrorKind::Domain => PyZeroDivisionError::new_err(message),
            ErrorKind::Index => PyIndexError::new_err(message),
        }
    }
}

/// Python view of a `MatrixDense<f64>`
#[derive(Debug, Clone, PartialEq)]
#[pyclass(frozen, eq, name = "Matrix")]
pub struct PyMatrix {
    pub inner: MatrixDense<f64>,
}

impl From<MatrixDense<f64>> for PyMatrix {
    fn from(inner: MatrixDense<f64>) -> Self {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    #[new]
    pub fn new(grid: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(MatrixDense::from_list(grid)?.into())
    }

    #[getter]
    pub fn h(&self) -> usize {
        self.inner.height()
    }

    #[getter]
    pub fn w(&self) -> usize {
        self.inner.width()
    }

    #[getter]
    pub fn g(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    pub fn is_square(&self) -> bool {
        self.inner.is_square()
    }

    pub fn trace(&self) -> PyResult<f64> {
        Ok(self.inner.trace()?)
    }

    pub fn determinant(&self) -> PyResult<f64> {
        Ok(self.inner.determinant()?)
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.inverse()?.into())
    }

    #[allow(non_snake_case)]
    pub fn T(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    pub fn __len__(&self) -> usize {
        self.inner.height()
    }

    /// Row `idx` as a list, negative indices count from the last row
    pub fn __getitem__(&self, idx: isize) -> PyResult<Vec<f64>> {
        let height = self.inner.height() as isize;
        let row = if idx < 0 { idx + height } else { idx };
        if row < 0 {
            return Err(PyIndexError::new_err("row index out of range"));
        }
        Ok(self.inner.row(row as usize)?.to_vec())
    }

    pub fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner + &rhs.inner)?.into())
    }

    pub fn __sub__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner - &rhs.inner)?.into())
    }

    pub fn __mul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner * &rhs.inner)?.into())
    }

    pub fn __rmul__(&self, lhs: f64) -> PyMatrix {
        (lhs * &self.inner).into()
    }

    pub fn __neg__(&self) -> PyMatrix {
        (-&self.inner).into()
    }
}

#[pyfunction]
#[pyo3(name = "zeroes")]
pub fn py_zeroes(height: usize, width: usize) -> PyResult<PyMatrix> {
    if height == 0 || width == 0 || height.checked_mul(width).is_none() {
        return Err(MatrixError::InvalidGrid.into());
    }
    Ok(MatrixDense::<f64>::zeroes(height, width).into())
}

#[pyfunction]
#[pyo3(name = "identity")]
pub fn py_identity(n: usize) -> PyResult<PyMatrix> {
    if n == 0 || n.checked_mul(n).is_none() {
        return Err(MatrixError::InvalidGrid.into());
    }
    Ok(MatrixDense::<f64>::identity(n).into())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
