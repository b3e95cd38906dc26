use crate::base::{Error, Phase};
use crate::equil::EquilReg;
use crate::props::FluidPropsTrait;
use crate::StrError;
use russell_lab::RootSolver;

/// Recovers a saturation from a capillary pressure value by inverting the curve
///
/// The curve is monotone over its saturation interval: Pcow is non-increasing
/// in sw (`oil_water = true`), Pcgo is non-decreasing in sg. When the target
/// lies outside the curve's range, the nearest endpoint saturation is returned
/// (fully displaced or fully saturated state); otherwise the root is bracketed
/// and found with Brent's method.
fn sat_from_pc(
    props: &dyn FluidPropsTrait,
    solver: &RootSolver,
    cell: usize,
    target: f64,
    oil_water: bool,
) -> Result<f64, StrError> {
    let (s_min, s_max) = if oil_water {
        props.sw_limits(cell)?
    } else {
        props.sg_limits(cell)?
    };
    let pc = |s: f64| {
        if oil_water {
            props.pc_oil_water(cell, s)
        } else {
            props.pc_gas_oil(cell, s)
        }
    };
    let f0 = pc(s_min)? - target;
    let f1 = pc(s_max)? - target;
    if oil_water {
        if f0 <= 0.0 {
            return Ok(s_min);
        }
        if f1 >= 0.0 {
            return Ok(s_max);
        }
    } else {
        if f0 >= 0.0 {
            return Ok(s_min);
        }
        if f1 <= 0.0 {
            return Ok(s_max);
        }
    }
    let (s, _) = solver.brent(s_min, s_max, &mut 0, |s, _| Ok(pc(s)? - target))?;
    Ok(s)
}

/// Computes the initial phase saturations of one region by equilibration
///
/// The phase pressure differences at each cell equal the capillary pressures
/// at the (unknown) saturations; inverting the capillary curves recovers the
/// water and gas saturations and the oil saturation closes the balance so
/// the active-phase saturations sum to exactly one. An externally supplied
/// water saturation (`swat_init`, indexed by cell) takes precedence over the
/// capillary inversion for that cell, with the other phases absorbing the
/// difference. Cells of a single-active-phase region receive saturation 1.
///
/// Returns one saturation row per active phase, indexed like the pressures.
pub fn phase_saturations(
    reg: &EquilReg,
    cells: &[usize],
    props: &dyn FluidPropsTrait,
    swat_init: Option<&[f64]>,
    press: &[Vec<f64>],
) -> Result<Vec<Vec<f64>>, Error> {
    let pu = reg.phase_usage();
    let mut sat = vec![vec![0.0; cells.len()]; pu.n_phases()];
    if pu.n_phases() == 1 {
        sat[0].iter_mut().for_each(|s| *s = 1.0);
        return Ok(sat);
    }
    if !pu.used(Phase::Liquid) {
        return Err(Error::InvalidInput(
            "water-gas equilibration without an oil phase is not supported",
        ));
    }
    let opos = pu.pos(Phase::Liquid);
    let solver = RootSolver::new();
    for (i, &cell) in cells.iter().enumerate() {
        let po = press[opos][i];
        let mut sw = 0.0;
        let mut sg = 0.0;
        if pu.used(Phase::Aqueous) {
            let wpos = pu.pos(Phase::Aqueous);
            sw = match swat_init {
                Some(swi) => {
                    let (s_min, s_max) = props.sw_limits(cell)?;
                    f64::min(f64::max(swi[cell], s_min), s_max)
                }
                None => {
                    let target = po - press[wpos][i];
                    sat_from_pc(props, &solver, cell, target, true)?
                }
            };
            sat[wpos][i] = sw;
        }
        if pu.used(Phase::Vapour) {
            let gpos = pu.pos(Phase::Vapour);
            let target = press[gpos][i] - po;
            sg = sat_from_pc(props, &solver, cell, target, false)?;
            sat[gpos][i] = sg;
        }
        let mut so = 1.0 - sw - sg;
        if so < 0.0 {
            // gas cap overlapping the water zone: the gas phase absorbs the deficit
            if pu.used(Phase::Vapour) {
                sg = f64::max(0.0, sg + so);
                sat[pu.pos(Phase::Vapour)][i] = sg;
            } else {
                sw = f64::max(0.0, sw + so);
                sat[pu.pos(Phase::Aqueous)][i] = sw;
            }
            so = 1.0 - sw - sg;
        }
        sat[opos][i] = so;
    }
    Ok(sat)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
