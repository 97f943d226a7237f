//! Triangular-matrix aggregation and vector shifting.
//!
//! Square matrices are plain row-major `Vec<Vec<f64>>`.  Every operation
//! preserves the input shape and zero-fills positions vacated by a shift.
//!
//! Shift convention: with `shift = k`, output `w[i] = v[i + k]`.  Positive
//! shifts move values toward index 0 with zeros filling the tail; negative
//! shifts move them away with zeros filling the head.

use thiserror::Error;

/// Shape violations for the matrix operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TriangleError {
    #[error("matrix rows must have equal length: row {row} has {got} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("matrix must be square, got {rows} rows of {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    #[error("vector length ({vec_len}) must match matrix dimension ({dim})")]
    DimensionMismatch { dim: usize, vec_len: usize },
}

fn square_dim(mat: &[Vec<f64>]) -> Result<usize, TriangleError> {
    let rows = mat.len();
    let cols = mat.first().map_or(0, Vec::len);
    for (row, r) in mat.iter().enumerate() {
        if r.len() != cols {
            return Err(TriangleError::Ragged {
                row,
                expected: cols,
                got: r.len(),
            });
        }
    }
    if rows > 0 && cols != rows {
        return Err(TriangleError::NotSquare { rows, cols });
    }
    Ok(rows)
}

/// Shifts positions of a vector, `w[i] = v[i + shift]`, zero-filling.
pub fn shift_vector(vec: &[f64], shift: isize) -> Vec<f64> {
    let n = vec.len();
    let mut out = vec![0.0; n];
    for (i, slot) in out.iter_mut().enumerate() {
        let src = i as isize + shift;
        if (0..n as isize).contains(&src) {
            *slot = vec[src as usize];
        }
    }
    out
}

/// Shifts rows of a matrix, `B[i][j] = A[i + shift][j]`, zero-filling
/// vacated rows.  Rows must all have equal length.
pub fn shift_matrix_rows(mat: &[Vec<f64>], shift: isize) -> Result<Vec<Vec<f64>>, TriangleError> {
    let rows = mat.len();
    let cols = mat.first().map_or(0, Vec::len);
    for (row, r) in mat.iter().enumerate() {
        if r.len() != cols {
            return Err(TriangleError::Ragged {
                row,
                expected: cols,
                got: r.len(),
            });
        }
    }

    let mut out = vec![vec![0.0; cols]; rows];
    for (i, slot) in out.iter_mut().enumerate() {
        let src = i as isize + shift;
        if (0..rows as isize).contains(&src) {
            slot.clone_from(&mat[src as usize]);
        }
    }
    Ok(out)
}

/// Anti-cumulative (suffix) sum of a shifted vector.
///
/// `w[i] = sum of v[j] for j >= i + shift`.
pub fn reverse_cumsum(vec: &[f64], shift: isize) -> Vec<f64> {
    let mut suffix = vec![0.0; vec.len()];
    let mut acc = 0.0;
    for i in (0..vec.len()).rev() {
        acc += vec[i];
        suffix[i] = acc;
    }
    shift_vector(&suffix, shift)
}

/// Matrix-vector product restricted to the upper triangle, shifted.
///
/// `w[i] = sum over j >= i + shift of A[i + shift][j] * v[j]`.
pub fn triangular_dot(
    mat: &[Vec<f64>],
    vec: &[f64],
    shift: isize,
) -> Result<Vec<f64>, TriangleError> {
    let dim = square_dim(mat)?;
    if vec.len() != dim {
        return Err(TriangleError::DimensionMismatch {
            dim,
            vec_len: vec.len(),
        });
    }

    let mut out = vec![0.0; dim];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = (i..dim).map(|j| mat[i][j] * vec[j]).sum();
    }
    Ok(shift_vector(&out, shift))
}

/// Row sums restricted to the upper triangle, shifted.
///
/// `w[i] = sum over j >= i + shift of A[i + shift][j]`.
pub fn triangular_sum_rows(mat: &[Vec<f64>], shift: isize) -> Result<Vec<f64>, TriangleError> {
    let dim = square_dim(mat)?;

    let mut out = vec![0.0; dim];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = (i..dim).map(|j| mat[i][j]).sum();
    }
    Ok(shift_vector(&out, shift))
}

/// Column sums of the triangle whose diagonal is offset by `row_shift`.
///
/// `w[i] = sum over j <= i + row_shift of A[j][i]`.  Positive shifts include
/// below-diagonal terms, negative shifts exclude above-diagonal ones.
pub fn triangular_sum_columns(
    mat: &[Vec<f64>],
    row_shift: isize,
) -> Result<Vec<f64>, TriangleError> {
    let dim = square_dim(mat)?;

    let mut out = vec![0.0; dim];
    for (j, slot) in out.iter_mut().enumerate() {
        *slot = (0..dim)
            .filter(|&i| j as isize - i as isize >= -row_shift)
            .map(|i| mat[i][j])
            .sum();
    }
    Ok(out)
}

/// Sums the submatrix spanned by each diagonal element and the upper-right
/// corner, with offsets.
///
/// `w[i] = sum over m <= i + row_shift, j >= i + col_shift of A[m][j]`.
pub fn triangular_sum_chunks(
    mat: &[Vec<f64>],
    row_shift: isize,
    col_shift: isize,
) -> Result<Vec<f64>, TriangleError> {
    let dim = square_dim(mat)?;

    // suffix-sum each row, then column-sum the offset upper triangle
    let rows: Vec<Vec<f64>> = mat.iter().map(|r| reverse_cumsum(r, 0)).collect();
    let offset = col_shift - row_shift;

    let mut out = vec![0.0; dim];
    for (j, slot) in out.iter_mut().enumerate() {
        *slot = (0..dim)
            .filter(|&i| j as isize - i as isize >= offset)
            .map(|i| rows[i][j])
            .sum();
    }
    Ok(shift_vector(&out, col_shift))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat3() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]
    }

    #[test]
    fn test_shift_vector() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(shift_vector(&v, 0), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(shift_vector(&v, 2), vec![3.0, 4.0, 5.0, 0.0, 0.0]);
        assert_eq!(shift_vector(&v, -2), vec![0.0, 0.0, 1.0, 2.0, 3.0]);

        // shift past either end clears everything
        assert_eq!(shift_vector(&v, 7), vec![0.0; 5]);
        assert_eq!(shift_vector(&v, -7), vec![0.0; 5]);
    }

    #[test]
    fn test_shift_matrix_rows() {
        let up = shift_matrix_rows(&mat3(), 1).expect("shifted");
        assert_eq!(
            up,
            vec![
                vec![4.0, 5.0, 6.0],
                vec![7.0, 8.0, 9.0],
                vec![0.0, 0.0, 0.0],
            ]
        );

        let down = shift_matrix_rows(&mat3(), -1).expect("shifted");
        assert_eq!(
            down,
            vec![
                vec![0.0, 0.0, 0.0],
                vec![1.0, 2.0, 3.0],
                vec![4.0, 5.0, 6.0],
            ]
        );

        let same = shift_matrix_rows(&mat3(), 0).expect("shifted");
        assert_eq!(same, mat3());
    }

    #[test]
    fn test_shift_matrix_rows_ragged() {
        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        match shift_matrix_rows(&ragged, 1) {
            Err(TriangleError::Ragged { row, expected, got }) => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            other => panic!("expected Ragged, got {:?}", other),
        }
    }

    #[test]
    fn test_reverse_cumsum() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(reverse_cumsum(&v, 0), vec![10.0, 9.0, 7.0, 4.0]);
        assert_eq!(reverse_cumsum(&v, 1), vec![9.0, 7.0, 4.0, 0.0]);
        assert_eq!(reverse_cumsum(&v, -1), vec![0.0, 10.0, 9.0, 7.0]);
    }

    #[test]
    fn test_triangular_dot() {
        let v = [1.0, 1.0, 1.0];

        // upper triangle row sums: 1+2+3, 5+6, 9
        let w = triangular_dot(&mat3(), &v, 0).expect("product");
        assert_eq!(w, vec![6.0, 11.0, 9.0]);

        let w = triangular_dot(&mat3(), &v, 1).expect("product");
        assert_eq!(w, vec![11.0, 9.0, 0.0]);

        // weighted
        let w = triangular_dot(&mat3(), &[1.0, 0.0, 2.0], 0).expect("product");
        assert_eq!(w, vec![7.0, 12.0, 18.0]);
    }

    #[test]
    fn test_triangular_dot_dimension_mismatch() {
        match triangular_dot(&mat3(), &[1.0, 2.0], 0) {
            Err(TriangleError::DimensionMismatch { dim, vec_len }) => {
                assert_eq!(dim, 3);
                assert_eq!(vec_len, 2);
            }
            other => panic!("expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_triangular_sum_rows() {
        let w = triangular_sum_rows(&mat3(), 0).expect("sums");
        assert_eq!(w, vec![6.0, 11.0, 9.0]);

        let w = triangular_sum_rows(&mat3(), 1).expect("sums");
        assert_eq!(w, vec![11.0, 9.0, 0.0]);

        let w = triangular_sum_rows(&mat3(), -1).expect("sums");
        assert_eq!(w, vec![0.0, 6.0, 11.0]);
    }

    #[test]
    fn test_triangular_sum_columns() {
        // columns of the upper triangle: 1, 2+5, 3+6+9
        let w = triangular_sum_columns(&mat3(), 0).expect("sums");
        assert_eq!(w, vec![1.0, 7.0, 18.0]);

        // include one below-diagonal band
        let w = triangular_sum_columns(&mat3(), 1).expect("sums");
        assert_eq!(w, vec![5.0, 15.0, 18.0]);

        // exclude the diagonal itself
        let w = triangular_sum_columns(&mat3(), -1).expect("sums");
        assert_eq!(w, vec![0.0, 2.0, 9.0]);
    }

    #[test]
    fn test_triangular_sum_chunks() {
        // suffix sums per row: [6,5,3], [15,11,6], [24,17,9]
        // upper triangle column sums of those: 6, 5+11, 3+6+9
        let w = triangular_sum_chunks(&mat3(), 0, 0).expect("sums");
        assert_eq!(w, vec![6.0, 16.0, 18.0]);

        // row_shift includes one extra row per chunk
        let w = triangular_sum_chunks(&mat3(), 1, 0).expect("sums");
        assert_eq!(w, vec![21.0, 33.0, 18.0]);

        // col_shift moves the chunk start right and shifts the output
        let w = triangular_sum_chunks(&mat3(), 0, 1).expect("sums");
        assert_eq!(w, vec![5.0, 9.0, 0.0]);
    }

    #[test]
    fn test_square_checks() {
        let rect = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert!(matches!(
            triangular_sum_rows(&rect, 0),
            Err(TriangleError::NotSquare { rows: 2, cols: 3 })
        ));

        let ragged = vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0, 6.0]];
        assert!(matches!(
            triangular_sum_rows(&ragged, 0),
            Err(TriangleError::Ragged { .. })
        ));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(shift_vector(&[], 3).is_empty());
        assert!(reverse_cumsum(&[], 0).is_empty());
        assert!(triangular_sum_rows(&[], 0).expect("empty ok").is_empty());
        assert!(shift_matrix_rows(&[], 1).expect("empty ok").is_empty());
    }
}
