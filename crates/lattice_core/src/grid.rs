//! Triangular grid storage for recombining binomial lattices.
//!
//! A recombining lattice over `N` steps has `i + 1` nodes after step `i`,
//! giving `(N+1)(N+2)/2` nodes in total. Rather than a square grid with an
//! unused upper triangle, the nodes are packed into a flat vector with
//! row-offset indexing, so out-of-triangle cells do not exist and can never
//! be read by accident.

use num_traits::Float;

/// Triangular grid indexed by `(level, step)` with `level <= step`.
///
/// `level` counts the number of down-moves taken, so `(0, i)` is the all-up
/// node after `i` steps and `(i, i)` the all-down node. Entries are stored
/// row-major in a flat vector: row `i` begins at offset `i·(i+1)/2` and has
/// `i + 1` cells.
///
/// A lattice is a value object: its producer fills it once and hands it off
/// by value; consumers only read.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use lattice_core::grid::TriangularLattice;
///
/// let mut grid: TriangularLattice<f64> = TriangularLattice::new(2);
/// grid.set(0, 2, 121.0);
/// grid.set(1, 2, 100.0);
/// grid.set(2, 2, 82.6);
///
/// assert_eq!(grid.get(1, 2), 100.0);
/// assert_eq!(grid.terminal(), &[121.0, 100.0, 82.6]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TriangularLattice<T: Float> {
    steps: usize,
    cells: Vec<T>,
}

#[inline]
fn row_offset(step: usize) -> usize {
    step * (step + 1) / 2
}

impl<T: Float> TriangularLattice<T> {
    /// Creates a zero-filled lattice over `steps` steps (`steps + 1` rows).
    pub fn new(steps: usize) -> Self {
        let nodes = (steps + 1) * (steps + 2) / 2;
        Self {
            steps,
            cells: vec![T::zero(); nodes],
        }
    }

    /// Returns the number of steps the lattice spans.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the total number of stored nodes, `(N+1)(N+2)/2`.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.cells.len()
    }

    /// Reads the entry at `(level, step)`.
    ///
    /// # Panics
    /// Panics if `level > step` or `step > steps()`; such cells do not
    /// exist in the triangle.
    #[inline]
    pub fn get(&self, level: usize, step: usize) -> T {
        assert!(
            level <= step && step <= self.steps,
            "lattice index out of triangle: (level {}, step {}) with {} steps",
            level,
            step,
            self.steps
        );
        self.cells[row_offset(step) + level]
    }

    /// Writes the entry at `(level, step)`.
    ///
    /// # Panics
    /// Panics if `level > step` or `step > steps()`.
    #[inline]
    pub fn set(&mut self, level: usize, step: usize, value: T) {
        assert!(
            level <= step && step <= self.steps,
            "lattice index out of triangle: (level {}, step {}) with {} steps",
            level,
            step,
            self.steps
        );
        self.cells[row_offset(step) + level] = value;
    }

    /// Returns the row after `step` steps as a slice of length `step + 1`,
    /// ordered from the all-up node (level 0) to the all-down node.
    #[inline]
    pub fn row(&self, step: usize) -> &[T] {
        assert!(step <= self.steps, "row {} beyond {} steps", step, self.steps);
        let start = row_offset(step);
        &self.cells[start..start + step + 1]
    }

    /// Returns the terminal row (after the final step).
    #[inline]
    pub fn terminal(&self) -> &[T] {
        self.row(self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count_matches_triangle() {
        for steps in 0..8 {
            let grid: TriangularLattice<f64> = TriangularLattice::new(steps);
            assert_eq!(grid.node_count(), (steps + 1) * (steps + 2) / 2);
        }
    }

    #[test]
    fn test_rows_form_triangle() {
        let grid: TriangularLattice<f64> = TriangularLattice::new(4);
        for step in 0..=4 {
            assert_eq!(grid.row(step).len(), step + 1);
        }
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let mut grid: TriangularLattice<f64> = TriangularLattice::new(3);
        let mut value = 1.0;
        for step in 0..=3 {
            for level in 0..=step {
                grid.set(level, step, value);
                value += 1.0;
            }
        }
        let mut expected = 1.0;
        for step in 0..=3 {
            for level in 0..=step {
                assert_eq!(grid.get(level, step), expected);
                expected += 1.0;
            }
        }
    }

    #[test]
    fn test_rows_do_not_alias() {
        let mut grid: TriangularLattice<f64> = TriangularLattice::new(2);
        grid.set(0, 1, 7.0);
        grid.set(1, 1, 8.0);
        assert_eq!(grid.row(0), &[0.0]);
        assert_eq!(grid.row(1), &[7.0, 8.0]);
        assert_eq!(grid.row(2), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_terminal_is_last_row() {
        let mut grid: TriangularLattice<f64> = TriangularLattice::new(2);
        grid.set(0, 2, 3.0);
        grid.set(2, 2, -1.0);
        assert_eq!(grid.terminal(), &[3.0, 0.0, -1.0]);
    }

    #[test]
    #[should_panic(expected = "out of triangle")]
    fn test_get_above_diagonal_panics() {
        let grid: TriangularLattice<f64> = TriangularLattice::new(3);
        let _ = grid.get(2, 1);
    }

    #[test]
    #[should_panic(expected = "out of triangle")]
    fn test_set_beyond_final_step_panics() {
        let mut grid: TriangularLattice<f64> = TriangularLattice::new(3);
        grid.set(0, 4, 1.0);
    }

    #[test]
    fn test_zero_step_lattice_is_single_node() {
        let grid: TriangularLattice<f64> = TriangularLattice::new(0);
        assert_eq!(grid.node_count(), 1);
        assert_eq!(grid.terminal(), &[0.0]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_write_is_read_back_unchanged(
                steps in 0usize..40,
                seed in 0u64..1_000_000,
            ) {
                let mut grid: TriangularLattice<f64> = TriangularLattice::new(steps);
                let step = (seed as usize) % (steps + 1);
                let level = (seed as usize / 7) % (step + 1);
                let value = seed as f64 / 3.0;
                grid.set(level, step, value);
                prop_assert_eq!(grid.get(level, step), value);
            }

            #[test]
            fn prop_rows_partition_the_nodes(steps in 0usize..60) {
                let grid: TriangularLattice<f64> = TriangularLattice::new(steps);
                let total: usize = (0..=steps).map(|s| grid.row(s).len()).sum();
                prop_assert_eq!(total, grid.node_count());
            }
        }
    }
}
