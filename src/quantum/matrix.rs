// src/quantum/matrix.rs
//! Dense complex matrices
//!
//! A thin wrapper around `Array2<Complex64>` exposing exactly the algebra the
//! simulator needs: the Kronecker (tensor) product and a shape-checked matrix
//! product. Every operation returns a new matrix.

use std::fmt;
use ndarray::{Array1, Array2, Axis};

use crate::error::{QuantumError, Result};
use super::complex::{self, Complex64, ONE};

/// A `rows × columns` matrix of complex numbers
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Array2<Complex64>,
}

impl Matrix {
    /// Create a zero-filled matrix
    pub fn new(rows: usize, columns: usize) -> Self {
        Matrix {
            data: Array2::zeros((rows, columns)),
        }
    }

    /// Create the `dim × dim` identity matrix
    pub fn identity(dim: usize) -> Self {
        Matrix {
            data: Array2::from_diag(&Array1::from_elem(dim, ONE)),
        }
    }

    /// Create a 1×1 matrix holding `value`
    ///
    /// `Matrix::scalar(ONE)` is the neutral element of [`Matrix::tensor`] and
    /// seeds every iterative operator construction.
    pub fn scalar(value: Complex64) -> Self {
        Matrix {
            data: Array2::from_elem((1, 1), value),
        }
    }

    /// Create a column vector from the given entries
    pub fn column(values: Vec<Complex64>) -> Self {
        Matrix {
            data: Array1::from(values).insert_axis(Axis(1)),
        }
    }

    /// Build a matrix from row vectors
    ///
    /// Fails with [`QuantumError::ShapeMismatch`] when a row's length differs
    /// from the first row's, reporting `(1, expected)` against `(1, actual)`.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        if let Some(ragged) = rows.iter().find(|row| row.len() != columns) {
            return Err(QuantumError::ShapeMismatch {
                left: (1, columns),
                right: (1, ragged.len()),
            });
        }

        let row_count = rows.len();
        let data = Array2::from_shape_vec((row_count, columns), rows.into_iter().flatten().collect())
            .map_err(|_| QuantumError::ShapeMismatch {
                left: (row_count, columns),
                right: (row_count, columns),
            })?;
        Ok(Matrix { data })
    }

    /// Wrap an existing array
    pub fn from_array(data: Array2<Complex64>) -> Self {
        Matrix { data }
    }

    /// Borrow the backing array
    pub fn as_array(&self) -> &Array2<Complex64> {
        &self.data
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn columns(&self) -> usize {
        self.data.ncols()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.columns()
    }

    /// Entry at `(row, column)`, or `None` outside the matrix
    pub fn get(&self, row: usize, column: usize) -> Option<Complex64> {
        self.data.get((row, column)).copied()
    }

    /// Overwrite the entry at `(row, column)`
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the matrix, like indexing does.
    pub fn set(&mut self, row: usize, column: usize, value: Complex64) {
        self.data[[row, column]] = value;
    }

    /// Kronecker product `self ⊗ other`
    ///
    /// The result is `(A.rows·B.rows) × (A.cols·B.cols)` with
    /// `result[i·B.rows + k][j·B.cols + l] = A[i][j] · B[k][l]`.
    pub fn tensor(&self, other: &Matrix) -> Matrix {
        let (a_rows, a_cols) = self.shape();
        let (b_rows, b_cols) = other.shape();

        let data = Array2::from_shape_fn((a_rows * b_rows, a_cols * b_cols), |(r, c)| {
            self.data[[r / b_rows, c / b_cols]] * other.data[[r % b_rows, c % b_cols]]
        });

        Matrix { data }
    }

    /// Matrix product `self · other`
    ///
    /// Fails with [`QuantumError::ShapeMismatch`] when the inner dimensions
    /// disagree.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.columns() != other.rows() {
            return Err(QuantumError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        Ok(Matrix {
            data: self.data.dot(&other.data),
        })
    }

    /// Entry-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| complex::approx_eq(*a, *b, epsilon))
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.rows() {
            let entries: Vec<String> = row.iter().map(|z| z.to_string()).collect();
            writeln!(f, "[{}]", entries.join(", "))?;
        }
        Ok(())
    }
}
