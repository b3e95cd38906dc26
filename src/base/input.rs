use crate::base::Error;
use serde::{Deserialize, Serialize};

/// Holds one equilibration record (the per-region datum/contact data)
///
/// The record corresponds to one line of the deck's EQUIL keyword: a datum
/// depth with the pressure given there, the water-oil and gas-oil contact
/// depths with the capillary pressures at those contacts, the 1-based
/// indices of the explicit live-oil (Rs vs depth) and wet-gas (Rv vs depth)
/// tables (zero means none), and the target accuracy parameter of which
/// only the default value 0 is supported.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct EquilRecord {
    /// Datum depth
    pub datum_depth: f64,

    /// Pressure at the datum depth
    pub datum_pressure: f64,

    /// Water-oil contact depth
    pub woc_depth: f64,

    /// Oil-water capillary pressure at the water-oil contact (Pcow = po - pw)
    pub pcow_woc: f64,

    /// Gas-oil contact depth
    pub goc_depth: f64,

    /// Gas-oil capillary pressure at the gas-oil contact (Pcgo = pg - po)
    pub pcgo_goc: f64,

    /// 1-based index of the live-oil (RSVD) table; 0 means none
    pub live_oil_table: usize,

    /// 1-based index of the wet-gas (RVVD) table; 0 means none
    pub wet_gas_table: usize,

    /// Target accuracy parameter (only 0 is supported)
    pub accuracy: i32,
}

/// Holds a depth-vs-ratio table with linear interpolation
///
/// Depths must be non-decreasing; the ratio is held constant beyond the
/// first and last rows.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DepthTable {
    depth: Vec<f64>,
    ratio: Vec<f64>,
}

impl DepthTable {
    /// Allocates a new instance, validating the columns
    pub fn new(depth: Vec<f64>, ratio: Vec<f64>) -> Result<Self, Error> {
        if depth.is_empty() {
            return Err(Error::InvalidInput("depth table must contain at least one row"));
        }
        if depth.len() != ratio.len() {
            return Err(Error::InvalidInput("depth table columns must have the same length"));
        }
        if depth.windows(2).any(|w| w[1] < w[0]) {
            return Err(Error::InvalidInput("depth table depths must be non-decreasing"));
        }
        Ok(DepthTable { depth, ratio })
    }

    /// Returns the linearly interpolated ratio at a given depth
    pub fn interpolate(&self, depth: f64) -> f64 {
        let n = self.depth.len();
        if depth <= self.depth[0] {
            return self.ratio[0];
        }
        if depth >= self.depth[n - 1] {
            return self.ratio[n - 1];
        }
        let j = self.depth.partition_point(|&d| d < depth);
        let (z0, z1) = (self.depth[j - 1], self.depth[j]);
        let (r0, r1) = (self.ratio[j - 1], self.ratio[j]);
        if z1 == z0 {
            return r1;
        }
        r0 + (r1 - r0) * (depth - z0) / (z1 - z0)
    }
}

/// Holds the parsed equilibration input for the whole deck
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EquilInput {
    /// Equilibration records, one per region
    pub records: Vec<EquilRecord>,

    /// Optional 1-based region index per deck cell (EQLNUM); absent means a single region
    pub region_index: Option<Vec<usize>>,

    /// Live-oil (Rs vs depth) tables referenced by the records
    pub rsvd_tables: Vec<DepthTable>,

    /// Wet-gas (Rv vs depth) tables referenced by the records
    pub rvvd_tables: Vec<DepthTable>,

    /// Indicates that the run models dissolved gas (DISGAS)
    pub dissolved_gas: bool,

    /// Indicates that the run models vaporized oil (VAPOIL)
    pub vaporized_oil: bool,

    /// Optional externally supplied water saturation per deck cell (SWATINIT)
    pub swat_init: Option<Vec<f64>>,
}

impl EquilInput {
    /// Allocates a new instance with no tables, no region array, and mixing disabled
    pub fn new(records: Vec<EquilRecord>) -> Self {
        EquilInput {
            records,
            region_index: None,
            rsvd_tables: Vec::new(),
            rvvd_tables: Vec::new(),
            dissolved_gas: false,
            vaporized_oil: false,
            swat_init: None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
