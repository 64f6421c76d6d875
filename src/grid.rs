use crate::error::InputError;
use crate::pathfinding::Position;
use rand::Rng;

/// Grid structure for storing cell states
/// Cell values: 0=blocked, any nonzero value=passable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    pub cells: Vec<i32>,
}

impl Grid {
    /// Create a new grid with all cells passable (1)
    pub fn new(rows: i32, cols: i32) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![1; rows.max(0) as usize * cols.max(0) as usize],
        }
    }

    /// Create a grid with specific blocked cells given as (row, col)
    pub fn with_blocked(rows: i32, cols: i32, blocked: &[(i32, i32)]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &(row, col) in blocked {
            grid.set_cell(row, col, 0);
        }
        grid
    }

    /// Build a grid from nested rows, rejecting empty or ragged input
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, InputError> {
        let expected = rows.first().map(|r| r.len()).unwrap_or(0);
        if expected == 0 {
            return Err(InputError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * expected);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(InputError::NonRectangular {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Grid {
            rows: rows.len() as i32,
            cols: expected as i32,
            cells,
        })
    }

    /// Fill a grid randomly with 0/1, each cell passable with probability `passable_ratio`
    pub fn random<R: Rng>(rows: i32, cols: i32, passable_ratio: f64, rng: &mut R) -> Self {
        let ratio = passable_ratio.clamp(0.0, 1.0);
        let mut grid = Self::new(rows, cols);
        for cell in grid.cells.iter_mut() {
            *cell = if rng.random_bool(ratio) { 1 } else { 0 };
        }
        grid
    }

    /// Nested row view, the inverse of `from_rows`
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.cols.max(1) as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Check whether (row, col) lies inside the grid
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.in_bounds(pos.row, pos.col)
    }

    /// A cell is traversable if and only if its value is nonzero
    pub fn is_passable(&self, row: i32, col: i32) -> bool {
        self.in_bounds(row, col) && self.cells[self.get_id(row, col)] != 0
    }

    pub fn is_blocked(&self, row: i32, col: i32) -> bool {
        !self.is_passable(row, col)
    }

    /// Convert (row, col) to the row-major cell index
    pub fn get_id(&self, row: i32, col: i32) -> usize {
        (col + row * self.cols) as usize
    }

    /// Get cell value at (row, col)
    pub fn get_cell(&self, row: i32, col: i32) -> i32 {
        if !self.in_bounds(row, col) {
            return 0; // Out of bounds is treated as blocked
        }
        self.cells[self.get_id(row, col)]
    }

    /// Set cell value at (row, col)
    pub fn set_cell(&mut self, row: i32, col: i32, value: i32) {
        if self.in_bounds(row, col) {
            let id = self.get_id(row, col);
            self.cells[id] = value;
        }
    }

    /// Number of passable cells
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }
}
