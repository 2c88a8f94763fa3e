#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod matrix {
    pub mod error;
    pub mod matrix;
    pub mod matrix_dense;
    #[cfg(feature = "python")]
    pub mod matrix_py;
}

pub use matrix::error::{ErrorKind, MatrixError};
pub use matrix::matrix::{Matrix, Shape};
pub use matrix::matrix_dense::{identity, zeroes, DenseElement, MatrixDense};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn dense_matrix(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_py::PyMatrix>()?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::py_zeroes, m)?)?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::py_identity, m)?)?;
    Ok(())
}
