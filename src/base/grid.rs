use crate::base::Error;

/// Holds the grid view consumed by the equilibration: cell centroid depths
/// and an optional local-to-global cell index map
///
/// Depth increases downwards (positive z pointing into the subsurface).
/// The global map translates local (active) cell indices into positions in
/// external per-cell arrays such as the deck's region index array; when the
/// map is absent, the translation is the identity.
#[derive(Clone, Debug)]
pub struct Grid {
    cell_depth: Vec<f64>,
    global_cell: Option<Vec<usize>>,
}

impl Grid {
    /// Allocates a new instance from the cell centroid depths
    pub fn new(cell_depth: Vec<f64>) -> Result<Self, Error> {
        if cell_depth.is_empty() {
            return Err(Error::InvalidInput("grid must contain at least one cell"));
        }
        Ok(Grid {
            cell_depth,
            global_cell: None,
        })
    }

    /// Sets the local-to-global cell index map
    pub fn set_global_cell(&mut self, global_cell: Vec<usize>) -> Result<&mut Self, Error> {
        if global_cell.len() != self.cell_depth.len() {
            return Err(Error::InvalidInput(
                "global cell map must have one entry per grid cell",
            ));
        }
        self.global_cell = Some(global_cell);
        Ok(self)
    }

    /// Returns the number of cells
    pub fn n_cells(&self) -> usize {
        self.cell_depth.len()
    }

    /// Returns the centroid depth of a cell
    pub fn depth(&self, cell: usize) -> f64 {
        self.cell_depth[cell]
    }

    /// Returns the global (deck) position of a local cell (identity without a map)
    pub fn global(&self, cell: usize) -> usize {
        match &self.global_cell {
            Some(map) => map[cell],
            None => cell,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
