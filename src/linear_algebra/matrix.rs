use thiserror::Error;

#[derive(Error,Debug,Clone,PartialEq)]
pub enum MatrixError {
    #[error("Right-hand side has length {rhs_len}, but the matrix has {row_count} rows")]
    RhsLenUnmatch{row_count:usize,rhs_len:usize},
    #[error("Matrix size is:{matrix_size:?},but index at {accessed_index:?} was accessed")]
    IndexOutOfBounds{matrix_size:(usize,usize),accessed_index:(usize,usize)},
    #[error("Matrix have {row_count} rows ,but row at {accessed_row} was accessed")]
    RowOutOfBounds{row_count:usize,accessed_row:usize},
    #[error("Matrix have {col_count} cols ,but col at {accessed_col} was accessed")]
    ColOutOfBounds{col_count:usize,accessed_col:usize},
    #[error("Solving requires a square matrix, got ({row},{col})")]
    NonSquareError{row:usize,col:usize},
    #[error("attempted to create {row}*{col} matrix from vector with length {len}")]
    SizeMisMatch{row:usize,col:usize,len:usize},
    #[error("No usable pivot in column {column}, matrix is singular or near-singular")]
    SingularError{column:usize}
}

pub type Result<T> = std::result::Result<T,MatrixError>;

// pivots at or below this fraction of their column's original diagonal count as zero
const PIVOT_EPS:f64 = 1e-12;

// A double precision matrix, row major order
// which means rows are stored continuously
#[derive(Clone,Debug,Default,PartialEq)]
pub struct Matrix {
    row_count:usize,
    col_count:usize,
    //row*col must equal elements.len()
    elements:Vec<f64>
}

impl Matrix {
    pub fn new_with_vec(v:Vec<f64>,row:usize,col:usize) -> Result<Self> {
        if row*col != v.len() {
            return Err(MatrixError::SizeMisMatch { row, col,len: v.len() })
        }
        if row*col == 0 {
            return Ok(Self::default())
        }
        Ok(Self { row_count: row, col_count: col, elements: v })
    }

    pub fn from_rows<const N:usize>(rows:[[f64;N];N]) -> Self {
        if N == 0 {
            return Self::default()
        }
        Self {
            row_count:N,
            col_count:N,
            elements:rows.into_iter().flatten().collect()
        }
    }

    pub fn get(&self,row:usize,col:usize) -> Result<f64> {
        debug_assert_eq!(self.row_count*self.col_count,self.elements.len());
        if row >= self.row_count || col >= self.col_count {
            return Err(MatrixError::IndexOutOfBounds {
                matrix_size: (self.row_count,self.col_count),
                accessed_index: (row,col)
            })
        }
        Ok(self.elements[row*self.col_count + col])
    }

    pub fn is_empty(&self) -> bool {
        self.col_count == 0 || self.row_count == 0 || self.elements.is_empty()
    }

    pub fn dimension(&self) -> (usize,usize) {
        if self.is_empty() {return (0,0)}
        (self.row_count,self.col_count)
    }

    pub fn mul_vec(&self,v:&[f64]) -> Result<Vec<f64>> {
        if v.len() != self.col_count {
            return Err(MatrixError::RhsLenUnmatch { row_count: self.col_count, rhs_len: v.len() })
        }
        Ok(self.elements
            .chunks_exact(self.col_count.max(1))
            .map(|row| row.iter().zip(v).map(|(a,b)| a*b).sum())
            .collect())
    }

    /// Solves `self * x = rhs` by Gaussian elimination with partial pivoting.
    ///
    /// Fails with [`MatrixError::SingularError`] when a selected pivot is zero
    /// relative to the diagonal entry `|A[i][i]|` of its column in `self`, or
    /// when back substitution produces a non-finite value. Scaling a row and
    /// column pair together does not change the outcome, so systems built
    /// from very small or very large values are judged alike.
    pub fn solve(&self,rhs:&[f64]) -> Result<Vec<f64>> {
        if self.row_count != self.col_count {
            return Err(MatrixError::NonSquareError { row: self.row_count, col: self.col_count })
        }
        if rhs.len() != self.row_count {
            return Err(MatrixError::RhsLenUnmatch { row_count: self.row_count, rhs_len: rhs.len() })
        }
        let n = self.row_count;
        if n == 0 {
            return Ok(vec![])
        }

        let tolerances = (0..n)
            .map(|i| Ok(PIVOT_EPS*self.get(i, i)?.abs()))
            .collect::<Result<Vec<f64>>>()?;
        let mut augmented = self.augment(rhs)?;

        // forward elimination
        for pivot_col in 0..n {
            let (pivot_row,pivot) = augmented.select_pivot_row(pivot_col, pivot_col)?;
            if !pivot.is_finite() || pivot.abs() <= tolerances[pivot_col] {
                return Err(MatrixError::SingularError { column: pivot_col })
            }
            augmented.row_exchange(pivot_col, pivot_row, pivot_col)?;
            for dest_row in pivot_col+1..n {
                let factor = augmented.get(dest_row, pivot_col)?/pivot;
                if factor == 0.0 {continue}
                augmented.row_elimination(pivot_col, dest_row, pivot_col, factor)?;
            }
        }

        // back substitution, column n holds the rhs
        let mut solution = vec![0.0;n];
        for row in (0..n).rev() {
            let mut value = augmented.get(row, n)?;
            for col in row+1..n {
                value -= augmented.get(row, col)?*solution[col];
            }
            solution[row] = value/augmented.get(row, row)?;
        }

        if let Some(column) = solution.iter().position(|v| !v.is_finite()) {
            return Err(MatrixError::SingularError { column })
        }
        Ok(solution)
    }
}

//elimination helpers, all work on the augmented matrix
impl Matrix {
    // n*(n+1) matrix with rhs appended as last column
    fn augment(&self,rhs:&[f64]) -> Result<Self> {
        if rhs.len() != self.row_count {
            return Err(MatrixError::RhsLenUnmatch { row_count: self.row_count, rhs_len: rhs.len() })
        }
        let col = self.col_count + 1;
        let mut elements = Vec::with_capacity(self.row_count*col);
        for (row,b) in self.elements.chunks_exact(self.col_count).zip(rhs) {
            elements.extend_from_slice(row);
            elements.push(*b);
        }
        Self::new_with_vec(elements, self.row_count, col)
    }

    fn row_exchange(&mut self,row1:usize,row2:usize,offset:usize) -> Result<()> {
        let row_ofb = | row | MatrixError::RowOutOfBounds { row_count: self.row_count, accessed_row: row };
        if row1 >= self.row_count {
            return Err(row_ofb(row1))
        }
        if row2 >= self.row_count {
            return Err(row_ofb(row2))
        }
        if offset >= self.col_count {
            return Err(MatrixError::ColOutOfBounds { col_count: self.col_count, accessed_col: offset })
        }
        if row1 == row2 {
            return Ok(())
        }
        for col in offset..self.col_count {
            self.elements.swap(row1*self.col_count + col, row2*self.col_count + col);
        }
        Ok(())
    }

    // dest_row -= coefficient*src_row, starting at column offset
    fn row_elimination(&mut self,src_row:usize,dest_row:usize,offset:usize,coefficient:f64) -> Result<()> {
        let row_ofb = | row | MatrixError::RowOutOfBounds { row_count: self.row_count, accessed_row: row };
        if src_row >= self.row_count {
            return Err(row_ofb(src_row))
        }
        if dest_row >= self.row_count {
            return Err(row_ofb(dest_row))
        }
        if offset >= self.col_count {
            return Err(MatrixError::ColOutOfBounds { col_count: self.col_count, accessed_col: offset })
        }

        let src_start = self.col_count*src_row + offset;
        let src:Vec<f64> = self.elements[src_start..self.col_count*(src_row+1)].to_vec();
        let dest_start = self.col_count*dest_row + offset;
        let dest = &mut self.elements[dest_start..self.col_count*(dest_row+1)];
        for (dest_i,src_i) in dest.iter_mut().zip(src) {
            *dest_i -= coefficient*src_i;
        }
        Ok(())
    }

    // select pivot from (pivot_row,pivot_col) downwards, column is unchanged
    fn select_pivot_row(&self,pivot_row:usize,pivot_col:usize) -> Result<(usize,f64)> {
        if pivot_row >= self.row_count {
            return Err(MatrixError::RowOutOfBounds { row_count: self.row_count, accessed_row: pivot_row })
        }
        if pivot_col >= self.col_count {
            return Err(MatrixError::ColOutOfBounds { col_count: self.col_count, accessed_col: pivot_col })
        }

        let mut best_row = pivot_row;
        let mut pivot = self.get(pivot_row, pivot_col)?;
        for next_row in pivot_row+1..self.row_count {
            let candidate = self.get(next_row, pivot_col)?;
            if candidate.abs() > pivot.abs() {
                pivot = candidate;
                best_row = next_row;
            }
        }
        Ok((best_row,pivot))
    }
}
