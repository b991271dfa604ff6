//! Text rendering of the stock-price lattice.
//!
//! One canonical renderer with a single traversal bound: every row walks
//! steps `level..=steps`, so the final column is always included and nothing
//! reads outside the triangle.

use lattice_core::grid::TriangularLattice;

const CELL_WIDTH: usize = 10;

/// Renders the lattice as a level-by-step grid, all-up path on the top row.
pub fn stock_lattice(grid: &TriangularLattice<f64>) -> String {
    let steps = grid.steps();
    let mut out = String::new();

    out.push_str(&format!("Stock-price lattice ({} steps)\n", steps));
    out.push_str("level\\step");
    for step in 0..=steps {
        out.push_str(&format!("{:>width$}", step, width = CELL_WIDTH));
    }
    out.push('\n');

    for level in 0..=steps {
        out.push_str(&format!("{:>10}", level));
        // Cells left of the diagonal do not exist; pad them out.
        for _ in 0..level {
            out.push_str(&" ".repeat(CELL_WIDTH));
        }
        for step in level..=steps {
            out.push_str(&format!("{:>width$.2}", grid.get(level, step), width = CELL_WIDTH));
        }
        out.push('\n');
    }
    out
}
