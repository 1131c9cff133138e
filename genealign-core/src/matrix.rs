//! Dense row-major grids backing the score and path matrices

/// Row-major matrix of `Copy` cells
#[derive(Debug, Clone)]
pub struct DpMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> DpMatrix<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut m = DpMatrix::new(3, 4, 0i32);
        m.set(2, 3, 7);
        m.set(0, 1, -2);
        assert_eq!(m.get(2, 3), 7);
        assert_eq!(m.get(0, 1), -2);
        assert_eq!(m.get(1, 1), 0);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
    }

    #[test]
    fn test_row_slice() {
        let mut m = DpMatrix::new(2, 3, None);
        m.set(1, 0, Some(1));
        m.set(1, 2, Some(3));
        assert_eq!(m.row(1), &[Some(1), None, Some(3)]);
    }
}
