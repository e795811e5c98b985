use super::Element;

// A dense integer matrix with a fixed shape.
// Elements are stored row-major in a single allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Element>,
}

impl Matrix {
    // Build a matrix by evaluating f at every (row, col) position,
    // in row-major order
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Element) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Matrix { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    // Panics if row or col is out of bounds, like slice indexing
    pub fn get(&self, row: usize, col: usize) -> Element {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[Element] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[Element]> {
        self.data.chunks(self.cols)
    }
}
