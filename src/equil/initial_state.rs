use crate::base::{EquilInput, Error, Grid, Phase, RegionMapping, Settings, STANDARD_TEMPERATURE};
use crate::equil::{
    compute_rs, phase_pressures, phase_saturations, EquilReg, NoMixing, RsFunctionTrait, RsSatAtContact, RsVd,
    RvSatAtContact, RvVd,
};
use crate::props::{DensityCalc, FluidPropsTrait};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the hydrostatically equilibrated initial state of the whole deck
///
/// Pressures and saturations are stored as one row per active phase (indexed
/// by the phase position from the phase usage), each row holding one value
/// per deck cell. The dissolution and evaporation ratios hold one value per
/// deck cell and stay at zero when the corresponding mixing mode is off.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InitialState {
    /// Phase pressures (nphase rows times ncell columns)
    pub press: Vec<Vec<f64>>,

    /// Phase saturations (nphase rows times ncell columns)
    pub sat: Vec<Vec<f64>>,

    /// Dissolved gas-oil ratio Rs (ncell)
    pub rs: Vec<f64>,

    /// Evaporated oil-gas ratio Rv (ncell)
    pub rv: Vec<f64>,
}

impl InitialState {
    /// Allocates a zeroed state for a given number of phases and cells
    pub fn new(n_phases: usize, n_cells: usize) -> Self {
        InitialState {
            press: vec![vec![0.0; n_cells]; n_phases],
            sat: vec![vec![0.0; n_cells]; n_phases],
            rs: vec![0.0; n_cells],
            rv: vec![0.0; n_cells],
        }
    }

    /// Reads a JSON file containing the state data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let state = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(state)
    }

    /// Writes a JSON file with the state data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

/// Orchestrates the equilibration of every region of the deck
///
/// The computer validates the input up front (record sanity, region mapping,
/// datum placement, table references) and selects the Rs/Rv functions per
/// region, so that [InitialStateComputer::compute] only performs numerical
/// work. Validation failures carry the operator-facing (1-based) region or
/// table number.
pub struct InitialStateComputer<'a> {
    /// Cell geometry
    grid: &'a Grid,

    /// Fluid property tables
    props: &'a dyn FluidPropsTrait,

    /// Parsed equilibration input
    input: &'a EquilInput,

    /// Gravity acceleration (positive downward, in m/s2)
    gravity: f64,

    /// Numerical settings for the pressure integration
    settings: Settings,

    /// Region-to-cells partition
    mapping: RegionMapping,

    /// Dissolved gas-oil ratio function per region
    rs_func: Vec<Box<dyn RsFunctionTrait>>,

    /// Evaporated oil-gas ratio function per region
    rv_func: Vec<Box<dyn RsFunctionTrait>>,

    /// Externally supplied water saturation, remapped to local cells
    swat_init: Option<Vec<f64>>,
}

impl<'a> InitialStateComputer<'a> {
    /// Allocates a new instance, validating the input and binding the Rs/Rv functions
    pub fn new(
        grid: &'a Grid,
        props: &'a dyn FluidPropsTrait,
        input: &'a EquilInput,
        gravity: f64,
    ) -> Result<Self, Error> {
        if input.records.is_empty() {
            return Err(Error::InvalidInput("at least one equilibration record is required"));
        }
        let pu = props.phase_usage();
        for (i, record) in input.records.iter().enumerate() {
            if record.accuracy != 0 {
                return Err(Error::UnsupportedAccuracy { region: i + 1 });
            }
            if pu.used(Phase::Liquid)
                && !(record.goc_depth <= record.datum_depth && record.datum_depth <= record.woc_depth)
            {
                return Err(Error::DatumOutsideOilZone { region: i + 1 });
            }
        }
        let mapping = RegionMapping::new(
            grid.n_cells(),
            input.records.len(),
            input.region_index.as_deref(),
            |cell| grid.global(cell),
        )?;

        // remap the SWATINIT array (indexed by deck cell) onto local cells
        let swat_init = match &input.swat_init {
            Some(swat) => {
                let mut local = vec![0.0; grid.n_cells()];
                for cell in 0..grid.n_cells() {
                    let deck = grid.global(cell);
                    if deck >= swat.len() {
                        return Err(Error::InvalidInput("the SWATINIT array is too short for the deck"));
                    }
                    local[cell] = swat[deck];
                }
                Some(local)
            }
            None => None,
        };

        // select the dissolution and evaporation functions per region
        let miscible = pu.used(Phase::Liquid) && pu.used(Phase::Vapour);
        let mut rs_func: Vec<Box<dyn RsFunctionTrait>> = Vec::with_capacity(input.records.len());
        let mut rv_func: Vec<Box<dyn RsFunctionTrait>> = Vec::with_capacity(input.records.len());
        for (i, record) in input.records.iter().enumerate() {
            let cells = mapping.cells(i);
            if miscible && input.dissolved_gas {
                let table = record.live_oil_table;
                if table > 0 {
                    if table > input.rsvd_tables.len() {
                        return Err(Error::MissingDepthTable { keyword: "RSVD", table });
                    }
                    rs_func.push(Box::new(RsVd::new(&input.rsvd_tables[table - 1])));
                } else if cells.is_empty() {
                    rs_func.push(Box::new(NoMixing {}));
                } else {
                    if record.goc_depth != record.datum_depth {
                        return Err(Error::DatumNotAtGasOilContact {
                            keyword: "RSVD",
                            region: i + 1,
                        });
                    }
                    let func = RsSatAtContact::new(props, cells[0], record.datum_pressure, STANDARD_TEMPERATURE)?;
                    rs_func.push(Box::new(func));
                }
            } else {
                rs_func.push(Box::new(NoMixing {}));
            }
            if miscible && input.vaporized_oil {
                let table = record.wet_gas_table;
                if table > 0 {
                    if table > input.rvvd_tables.len() {
                        return Err(Error::MissingDepthTable { keyword: "RVVD", table });
                    }
                    rv_func.push(Box::new(RvVd::new(&input.rvvd_tables[table - 1])));
                } else if cells.is_empty() {
                    rv_func.push(Box::new(NoMixing {}));
                } else {
                    if record.goc_depth != record.datum_depth {
                        return Err(Error::DatumNotAtGasOilContact {
                            keyword: "RVVD",
                            region: i + 1,
                        });
                    }
                    let p_contact = record.datum_pressure + record.pcgo_goc;
                    let func = RvSatAtContact::new(props, cells[0], p_contact, STANDARD_TEMPERATURE)?;
                    rv_func.push(Box::new(func));
                }
            } else {
                rv_func.push(Box::new(NoMixing {}));
            }
        }
        Ok(InitialStateComputer {
            grid,
            props,
            input,
            gravity,
            settings: Settings::new(),
            mapping,
            rs_func,
            rv_func,
            swat_init,
        })
    }

    /// Replaces the numerical settings
    pub fn set_settings(&mut self, settings: Settings) -> &mut Self {
        self.settings = settings;
        self
    }

    /// Computes the equilibrated state of every region and assembles the deck-wide arrays
    pub fn compute(&self) -> Result<InitialState, Error> {
        let pu = self.props.phase_usage();
        let miscible = pu.used(Phase::Liquid) && pu.used(Phase::Vapour);
        let mut state = InitialState::new(pu.n_phases(), self.grid.n_cells());
        for region in 0..self.mapping.n_regions() {
            let cells = self.mapping.cells(region);
            if cells.is_empty() {
                continue;
            }
            let record = &self.input.records[region];
            let density = DensityCalc::new(self.props, cells[0]);
            let reg = EquilReg::new(record, density, &*self.rs_func[region], &*self.rv_func[region], pu);

            let press = phase_pressures(self.grid, &reg, cells, self.gravity, &self.settings)?;
            let sat = phase_saturations(&reg, cells, self.props, self.swat_init.as_deref(), &press)?;

            for phase in 0..pu.n_phases() {
                for (i, &cell) in cells.iter().enumerate() {
                    state.press[phase][cell] = press[phase][i];
                    state.sat[phase][cell] = sat[phase][i];
                }
            }

            if miscible {
                let temperature: Vec<f64> = cells.iter().map(|&cell| self.props.temperature(cell)).collect();
                let opos = pu.pos(Phase::Liquid);
                let gpos = pu.pos(Phase::Vapour);
                let rs = compute_rs(self.grid, cells, &press[opos], &temperature, &*self.rs_func[region]);
                let rv = compute_rs(self.grid, cells, &press[gpos], &temperature, &*self.rv_func[region]);
                for (i, &cell) in cells.iter().enumerate() {
                    state.rs[cell] = rs[i];
                    state.rv[cell] = rv[i];
                }
            }
        }
        Ok(state)
    }
}

/// Computes the equilibrated initial state with the default settings
pub fn compute_initial_state(
    grid: &Grid,
    props: &dyn FluidPropsTrait,
    input: &EquilInput,
    gravity: f64,
) -> Result<InitialState, Error> {
    let computer = InitialStateComputer::new(grid, props, input, gravity)?;
    computer.compute()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{compute_initial_state, InitialState, InitialStateComputer};
    use crate::base::{DepthTable, EquilInput, EquilRecord, Error};
    use crate::base::Grid;
    use crate::props::SampleFluids;
    use russell_lab::approx_eq;

    fn sample_record() -> EquilRecord {
        EquilRecord {
            datum_depth: 1000.0,
            datum_pressure: 200e5,
            woc_depth: 1050.0,
            pcow_woc: 0.0,
            goc_depth: 950.0,
            pcgo_goc: 0.0,
            live_oil_table: 0,
            wet_gas_table: 0,
            accuracy: 0,
        }
    }

    #[test]
    fn empty_records_are_rejected() {
        let grid = Grid::new(vec![1000.0]).unwrap();
        let fluids = SampleFluids::three_phase();
        let input = EquilInput::new(Vec::new());
        let err = InitialStateComputer::new(&grid, &fluids, &input, 9.81).err().unwrap();
        assert!(format!("{}", err).contains("at least one equilibration record"));
    }

    #[test]
    fn nonzero_accuracy_names_the_region() {
        let grid = Grid::new(vec![1000.0]).unwrap();
        let fluids = SampleFluids::three_phase();
        let mut record = sample_record();
        record.accuracy = 5;
        let input = EquilInput::new(vec![record]);
        let err = InitialStateComputer::new(&grid, &fluids, &input, 9.81).err().unwrap();
        assert_eq!(
            format!("{}", err),
            "EQUIL region 1 (counting from 1): only target accuracy N = 0 is supported"
        );
    }

    #[test]
    fn datum_outside_oil_zone_names_the_region() {
        let grid = Grid::new(vec![1000.0]).unwrap();
        let fluids = SampleFluids::three_phase();
        let mut record = sample_record();
        record.datum_depth = 900.0; // above the gas-oil contact
        let input = EquilInput::new(vec![record]);
        let err = InitialStateComputer::new(&grid, &fluids, &input, 9.81).err().unwrap();
        match err {
            Error::DatumOutsideOilZone { region } => assert_eq!(region, 1),
            _ => panic!("wrong error: {}", err),
        }
    }

    #[test]
    fn missing_rsvd_table_names_the_table() {
        let grid = Grid::new(vec![1000.0]).unwrap();
        let fluids = SampleFluids::three_phase();
        let mut record = sample_record();
        record.live_oil_table = 2;
        let mut input = EquilInput::new(vec![record]);
        input.dissolved_gas = true;
        input.rsvd_tables = vec![DepthTable::new(vec![900.0, 1100.0], vec![40.0, 60.0]).unwrap()];
        let err = InitialStateComputer::new(&grid, &fluids, &input, 9.81).err().unwrap();
        assert_eq!(format!("{}", err), "cannot initialise: RSVD table 2 is not available");
    }

    #[test]
    fn contact_function_requires_datum_at_goc() {
        let grid = Grid::new(vec![1000.0]).unwrap();
        let fluids = SampleFluids::three_phase();
        let record = sample_record(); // table 0 but goc_depth (950) != datum_depth (1000)
        let mut input = EquilInput::new(vec![record]);
        input.dissolved_gas = true;
        let err = InitialStateComputer::new(&grid, &fluids, &input, 9.81).err().unwrap();
        let text = format!("{}", err);
        assert!(text.contains("RSVD"));
        assert!(text.contains("EQUIL region 1 (counting from 1)"));
    }

    #[test]
    fn datum_at_goc_enables_the_contact_function() {
        let grid = Grid::new(vec![960.0, 1000.0]).unwrap();
        let fluids = SampleFluids::three_phase();
        let mut record = sample_record();
        record.datum_depth = 950.0; // at the gas-oil contact
        let mut input = EquilInput::new(vec![record]);
        input.dissolved_gas = true;
        let state = compute_initial_state(&grid, &fluids, &input, 9.81).unwrap();
        // rs_sat_slope * datum_pressure, constant over depth
        approx_eq(state.rs[0], 50.0 / 200e5 * 200e5, 1e-12);
        approx_eq(state.rs[1], state.rs[0], 1e-12);
        assert_eq!(state.rv, &[0.0, 0.0]);
    }

    #[test]
    fn json_round_trip_preserves_the_state() {
        let grid = Grid::new(vec![980.0, 1000.0, 1020.0]).unwrap();
        let fluids = SampleFluids::three_phase();
        let input = EquilInput::new(vec![sample_record()]);
        let state = compute_initial_state(&grid, &fluids, &input, 9.81).unwrap();
        let path = "/tmp/boinit/initial_state.json";
        state.write_json(path).unwrap();
        let read_back = InitialState::read_json(path).unwrap();
        assert_eq!(read_back.press, state.press);
        assert_eq!(read_back.sat, state.sat);
        assert_eq!(read_back.rs, state.rs);
        assert_eq!(read_back.rv, state.rv);
    }
}
