use crate::base::Error;

/// Partitions the grid cells into equilibration regions
///
/// Region ids are contiguous and 0-based; the deck's 1-based region index
/// array is converted during construction. Every cell belongs to exactly
/// one region and the cells of a region keep the grid's iteration order.
#[derive(Clone, Debug)]
pub struct RegionMapping {
    cells: Vec<Vec<usize>>,
}

impl RegionMapping {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `n_cells` -- number of (local) grid cells
    /// * `n_regions` -- number of equilibration records
    /// * `region_index` -- optional 1-based region id per deck cell;
    ///   absent means all cells belong to region 0
    /// * `global` -- lookup translating a local cell index into its deck position
    pub fn new<F>(n_cells: usize, n_regions: usize, region_index: Option<&[usize]>, global: F) -> Result<Self, Error>
    where
        F: Fn(usize) -> usize,
    {
        if n_regions < 1 {
            return Err(Error::InvalidInput("at least one equilibration region is required"));
        }
        let mut cells = vec![Vec::new(); n_regions];
        match region_index {
            Some(index) => {
                for cell in 0..n_cells {
                    let deck_pos = global(cell);
                    if deck_pos >= index.len() {
                        return Err(Error::InvalidInput("region index array is too short for the grid"));
                    }
                    let id = index[deck_pos];
                    if id < 1 || id > n_regions {
                        return Err(Error::RegionIndexOutOfRange {
                            cell,
                            index: id,
                            n_regions,
                        });
                    }
                    cells[id - 1].push(cell);
                }
            }
            None => {
                // no explicit region data: all cells in region zero
                cells[0] = (0..n_cells).collect();
            }
        }
        Ok(RegionMapping { cells })
    }

    /// Returns the number of regions
    pub fn n_regions(&self) -> usize {
        self.cells.len()
    }

    /// Returns the ordered cell indices of a region
    pub fn cells(&self, region: usize) -> &[usize] {
        &self.cells[region]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::RegionMapping;
    use crate::base::Error;

    #[test]
    fn absent_region_data_maps_all_cells_to_region_zero() {
        let mapping = RegionMapping::new(4, 2, None, |c| c).unwrap();
        assert_eq!(mapping.n_regions(), 2);
        assert_eq!(mapping.cells(0), &[0, 1, 2, 3]);
        assert_eq!(mapping.cells(1).len(), 0);
    }

    #[test]
    fn one_based_ids_are_converted() {
        let index = vec![2, 1, 2, 1, 1];
        let mapping = RegionMapping::new(5, 2, Some(&index), |c| c).unwrap();
        assert_eq!(mapping.cells(0), &[1, 3, 4]);
        assert_eq!(mapping.cells(1), &[0, 2]);
    }

    #[test]
    fn lookup_translates_local_cells_to_deck_positions() {
        // deck has 6 positions; only cells at deck positions 1, 3, 5 are active
        let index = vec![1, 2, 1, 1, 1, 2];
        let global = |c: usize| 2 * c + 1;
        let mapping = RegionMapping::new(3, 2, Some(&index), global).unwrap();
        assert_eq!(mapping.cells(0), &[1]);
        assert_eq!(mapping.cells(1), &[0, 2]);
    }

    #[test]
    fn every_cell_belongs_to_exactly_one_region() {
        let index = vec![3, 1, 2, 3, 2, 1, 1];
        let mapping = RegionMapping::new(7, 3, Some(&index), |c| c).unwrap();
        let mut seen = vec![0; 7];
        for r in 0..mapping.n_regions() {
            for &cell in mapping.cells(r) {
                seen[cell] += 1;
            }
        }
        assert_eq!(seen, vec![1; 7]);
    }

    #[test]
    fn captures_wrong_input() {
        assert!(RegionMapping::new(3, 0, None, |c| c).is_err());
        let index = vec![1, 5, 1];
        let res = RegionMapping::new(3, 2, Some(&index), |c| c);
        match res.err().unwrap() {
            Error::RegionIndexOutOfRange { cell, index, n_regions } => {
                assert_eq!(cell, 1);
                assert_eq!(index, 5);
                assert_eq!(n_regions, 2);
            }
            _ => panic!("wrong error variant"),
        }
        let index = vec![1];
        assert!(RegionMapping::new(3, 1, Some(&index), |c| c).is_err());
    }
}
