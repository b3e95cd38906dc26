use crate::equil::RsFunctionTrait;
use crate::base::Grid;

/// Evaluates a dissolution (or evaporation) ratio for a set of cells
///
/// The i-th entry of `pressure` and `temperature` corresponds to the i-th entry of `cells`.
/// Returns one ratio per cell, in the same order.
pub fn compute_rs(
    grid: &Grid,
    cells: &[usize],
    pressure: &[f64],
    temperature: &[f64],
    func: &dyn RsFunctionTrait,
) -> Vec<f64> {
    let mut ratio = vec![0.0; cells.len()];
    for (i, &cell) in cells.iter().enumerate() {
        ratio[i] = func.value(grid.depth(cell), pressure[i], temperature[i]);
    }
    ratio
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::compute_rs;
    use crate::base::{DepthTable, Grid};
    use crate::equil::{NoMixing, RsVd};
    use russell_lab::approx_eq;

    #[test]
    fn no_mixing_yields_zeros() {
        let grid = Grid::new(vec![950.0, 1000.0, 1050.0]).unwrap();
        let cells = [0, 1, 2];
        let pressure = [190e5, 200e5, 210e5];
        let temperature = [293.15; 3];
        let ratio = compute_rs(&grid, &cells, &pressure, &temperature, &NoMixing {});
        assert_eq!(ratio, &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn tabulated_ratio_follows_depth() {
        let grid = Grid::new(vec![900.0, 1000.0, 1200.0]).unwrap();
        let table = DepthTable::new(vec![900.0, 1100.0], vec![40.0, 60.0]).unwrap();
        let func = RsVd::new(&table);
        let cells = [0, 1, 2];
        let pressure = [180e5, 200e5, 220e5];
        let temperature = [293.15; 3];
        let ratio = compute_rs(&grid, &cells, &pressure, &temperature, &func);
        approx_eq(ratio[0], 40.0, 1e-14); // table node
        approx_eq(ratio[1], 50.0, 1e-14); // midpoint
        approx_eq(ratio[2], 60.0, 1e-14); // constant extrapolation
    }

    #[test]
    fn subset_of_cells_is_honored() {
        let grid = Grid::new(vec![900.0, 1000.0, 1100.0]).unwrap();
        let table = DepthTable::new(vec![900.0, 1100.0], vec![40.0, 60.0]).unwrap();
        let func = RsVd::new(&table);
        let ratio = compute_rs(&grid, &[2, 0], &[220e5, 180e5], &[293.15; 2], &func);
        approx_eq(ratio[0], 60.0, 1e-14);
        approx_eq(ratio[1], 40.0, 1e-14);
    }
}
