use crate::math::matrix::Matrix;

const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Square canvas of intensities in [0, 1] that the user paints on.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingGrid {
    size: usize,
    cells: Vec<f64>,
    stroke: f64,
    neighbor: f64,
}

impl DrawingGrid {
    pub fn new(size: usize, stroke: f64, neighbor: f64) -> DrawingGrid {
        DrawingGrid { size, cells: vec![0.0; size * size], stroke, neighbor }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.size + col]
    }

    /// Brushes one cell and softly its eight neighbours, then clips every
    /// cell to [0, 1]. Returns false when `(row, col)` is off the grid.
    pub fn paint(&mut self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        self.cells[row * self.size + col] += self.stroke;
        for (dr, dc) in NEIGHBOURS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                continue;
            };
            if r < self.size && c < self.size {
                self.cells[r * self.size + c] += self.neighbor;
            }
        }
        self.cells.iter_mut().for_each(|v| *v = v.clamp(0.0, 1.0));
        true
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|v| *v = 0.0);
    }

    /// Cell under a pixel position, for cells of `cell_size` pixels.
    pub fn cell_at(&self, x: f32, y: f32, cell_size: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 || cell_size <= 0.0 {
            return None;
        }
        let (row, col) = ((y / cell_size) as usize, (x / cell_size) as usize);
        (row < self.size && col < self.size).then_some((row, col))
    }

    /// The grid as a `size × size` model input.
    pub fn to_input(&self) -> Matrix {
        Matrix { rows: self.size, cols: self.size, data: self.cells.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_brushes_centre_and_neighbours() {
        let mut grid = DrawingGrid::new(5, 0.8, 0.15);
        assert!(grid.paint(2, 2));
        assert_eq!(grid.get(2, 2), 0.8);
        assert_eq!(grid.get(1, 1), 0.15);
        assert_eq!(grid.get(3, 2), 0.15);
        assert_eq!(grid.get(0, 0), 0.0);
    }

    #[test]
    fn repeated_paint_clips_to_one() {
        let mut grid = DrawingGrid::new(3, 0.8, 0.15);
        grid.paint(1, 1);
        grid.paint(1, 1);
        assert_eq!(grid.get(1, 1), 1.0);
        assert!((grid.get(0, 0) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn corner_paint_stays_in_bounds() {
        let mut grid = DrawingGrid::new(3, 0.8, 0.15);
        grid.paint(0, 0);
        let touched = grid.cells().iter().filter(|&&v| v > 0.0).count();
        assert_eq!(touched, 4);
    }

    #[test]
    fn off_grid_paint_is_ignored() {
        let mut grid = DrawingGrid::new(3, 0.8, 0.15);
        assert!(!grid.paint(3, 0));
        assert!(grid.cells().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn pixel_positions_map_to_cells() {
        let grid = DrawingGrid::new(28, 0.8, 0.15);
        assert_eq!(grid.cell_at(45.0, 21.0, 20.0), Some((1, 2)));
        assert_eq!(grid.cell_at(-1.0, 5.0, 20.0), None);
        assert_eq!(grid.cell_at(560.0, 5.0, 20.0), None);
    }

    #[test]
    fn reset_and_input_shape() {
        let mut grid = DrawingGrid::new(28, 0.8, 0.15);
        grid.paint(10, 10);
        grid.reset();
        let input = grid.to_input();
        assert_eq!((input.rows, input.cols), (28, 28));
        assert!(input.data.iter().all(|&v| v == 0.0));
    }
}
