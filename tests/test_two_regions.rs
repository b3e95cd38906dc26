use boinit::prelude::*;
use russell_lab::approx_eq;

// Two equilibration regions assembled into one deck
//
// TEST GOAL
//
// This test verifies the region mapping (1-based EQLNUM) and the positional
// assembly: each region is equilibrated against its own record and written
// only into its own cells
//
// SETUP
//
// Six water-only cells; the odd EQLNUM entries select region 1 (datum
// pressure 100 bar) and the even entries region 2 (datum pressure 150 bar);
// both datums sit at 100 m; water is incompressible at 1000 kg/m3
//
// EXPECTED RESULTS
//
//   region 1: p(z) = 100e5 + 1000 * 9.81 * (z - 100)
//   region 2: p(z) = 150e5 + 1000 * 9.81 * (z - 100)

fn water_only() -> Result<SampleFluids, Error> {
    let fluids = SampleFluids::new(ParamSampleFluids {
        water: Some(ParamSampleFluid {
            rho_surface: 1000.0,
            cc: 0.0,
            p_ref: 0.0,
        }),
        oil: None,
        gas: None,
        pc_oil_water: ParamSampleCapillary::zero(),
        pc_gas_oil: ParamSampleCapillary::zero(),
        rs_sat_slope: 0.0,
        rv_sat_slope: 0.0,
        temperature: 293.15,
    })?;
    Ok(fluids)
}

fn record(datum_pressure: f64) -> EquilRecord {
    EquilRecord {
        datum_depth: 100.0,
        datum_pressure,
        woc_depth: 100.0,
        pcow_woc: 0.0,
        goc_depth: 100.0,
        pcgo_goc: 0.0,
        live_oil_table: 0,
        wet_gas_table: 0,
        accuracy: 0,
    }
}

#[test]
fn test_two_regions() -> Result<(), Error> {
    // grid and region mapping: cells alternate between the two regions
    let grid = Grid::new(vec![80.0, 80.0, 100.0, 100.0, 120.0, 120.0])?;
    let fluids = water_only()?;
    let mut input = EquilInput::new(vec![record(100e5), record(150e5)]);
    input.region_index = Some(vec![1, 2, 1, 2, 1, 2]);

    // equilibrate
    let state = compute_initial_state(&grid, &fluids, &input, 9.81)?;

    // each cell carries the profile of its own region
    for cell in 0..grid.n_cells() {
        let datum_pressure = if cell % 2 == 0 { 100e5 } else { 150e5 };
        let expected = datum_pressure + 1000.0 * 9.81 * (grid.depth(cell) - 100.0);
        approx_eq(state.press[0][cell], expected, 1e-4);
        approx_eq(state.sat[0][cell], 1.0, 1e-14);
    }
    Ok(())
}

#[test]
fn test_region_index_out_of_range() -> Result<(), Error> {
    let grid = Grid::new(vec![80.0, 120.0])?;
    let fluids = water_only()?;
    let mut input = EquilInput::new(vec![record(100e5), record(150e5)]);
    input.region_index = Some(vec![1, 3]);

    let err = compute_initial_state(&grid, &fluids, &input, 9.81).err().unwrap();
    assert_eq!(format!("{}", err), "cell 1: region index 3 must be in 1..=2");
    Ok(())
}
