use crate::base::{Error, Grid, Phase, Settings};
use crate::equil::EquilReg;
use russell_lab::Vector;
use russell_ode::{OdeSolver, Params, System};

/// Holds the arguments for the hydrostatic pressure ODE
struct IntegArgs<'a> {
    reg: &'a EquilReg<'a>,
    phase: Phase,
    temperature: f64,
    z_anchor: f64,
    dz: f64,
    gravity: f64,
}

/// Integrates dp/dz = ρ(p,z)·g from one anchor to the contacts and cells of a region
///
/// The integration runs in pseudo-time t ∈ [0, 1] with z(t) = z_anchor + t Δz,
/// so the direction toward shallower or deeper targets follows the sign of Δz.
/// The density feeds back on the pressure through the formation volume factors
/// (and, for oil and gas, through the region's Rs/Rv functions), which is what
/// makes the integration iterative rather than closed-form.
///
/// Returns the pressures at the `contacts` depths; cell pressures are written
/// into `out`, one per cell in the range, in the range's iteration order.
fn integrate(
    grid: &Grid,
    reg: &EquilReg,
    cells: &[usize],
    gravity: f64,
    settings: &Settings,
    phase: Phase,
    z_anchor: f64,
    p_anchor: f64,
    contacts: &[f64],
    out: &mut [f64],
) -> Result<Vec<f64>, Error> {
    let system = System::new(1, |dpdt: &mut Vector, t: f64, p: &Vector, args: &mut IntegArgs| {
        let z = args.z_anchor + t * args.dz;
        let rho = match args.phase {
            Phase::Aqueous => args.reg.density().water(p[0])?,
            Phase::Liquid => {
                let rs = args.reg.rs_func().value(z, p[0], args.temperature);
                args.reg.density().oil(p[0], rs)?
            }
            Phase::Vapour => {
                let rv = args.reg.rv_func().value(z, p[0], args.temperature);
                args.reg.density().gas(p[0], rv)?
            }
        };
        dpdt[0] = args.dz * rho * args.gravity;
        Ok(())
    });
    let mut params = Params::new(settings.ode_method);
    params.set_tolerances(settings.ode_abs_tol, settings.ode_rel_tol, None)?;
    let mut solver = OdeSolver::new(params, system)?;
    let mut args = IntegArgs {
        reg,
        phase,
        temperature: reg.density().temperature(),
        z_anchor,
        dz: 0.0,
        gravity,
    };
    let mut y = Vector::new(1);
    let mut at_contacts = Vec::with_capacity(contacts.len());
    for &z in contacts {
        args.dz = z - z_anchor;
        y[0] = p_anchor;
        if args.dz != 0.0 {
            solver.solve(&mut y, 0.0, 1.0, None, &mut args)?;
        }
        at_contacts.push(y[0]);
    }
    for (i, &cell) in cells.iter().enumerate() {
        args.dz = grid.depth(cell) - z_anchor;
        y[0] = p_anchor;
        if args.dz != 0.0 {
            solver.solve(&mut y, 0.0, 1.0, None, &mut args)?;
        }
        out[i] = y[0];
    }
    Ok(at_contacts)
}

/// Computes the initial phase pressures of one region by equilibration
///
/// Each active phase is anchored at a reference depth/pressure and the
/// hydrostatic ODE is integrated from there to every cell centroid:
///
/// * oil is anchored at the datum (which must lie in the oil zone);
/// * water is anchored at the water-oil contact with pw = po - Pcow;
/// * gas is anchored at the gas-oil contact with pg = po + Pcgo;
/// * without an active oil phase, water and gas anchor directly at the datum.
///
/// Returns one pressure row per active phase (indexed by the phase position
/// from the region's phase usage), each with one value per cell in `cells`.
pub fn phase_pressures(
    grid: &Grid,
    reg: &EquilReg,
    cells: &[usize],
    gravity: f64,
    settings: &Settings,
) -> Result<Vec<Vec<f64>>, Error> {
    let pu = reg.phase_usage();
    let mut press = vec![vec![0.0; cells.len()]; pu.n_phases()];
    let oil = pu.used(Phase::Liquid);
    if oil && !(reg.zgoc() <= reg.datum() && reg.datum() <= reg.zwoc()) {
        return Err(Error::InvalidInput(
            "datum depth must lie in the oil zone (zgoc <= datum <= zwoc)",
        ));
    }

    // oil: anchored at the datum; also yields the oil pressure at both contacts
    let mut po_woc = reg.datum_pressure();
    let mut po_goc = reg.datum_pressure();
    if oil {
        let contacts = [reg.zwoc(), reg.zgoc()];
        let pos = pu.pos(Phase::Liquid);
        let at = integrate(
            grid,
            reg,
            cells,
            gravity,
            settings,
            Phase::Liquid,
            reg.datum(),
            reg.datum_pressure(),
            &contacts,
            &mut press[pos],
        )?;
        po_woc = at[0];
        po_goc = at[1];
    }

    // water: anchored at the water-oil contact through the capillary offset
    if pu.used(Phase::Aqueous) {
        let (z0, p0) = if oil {
            (reg.zwoc(), po_woc - reg.pcow_woc())
        } else {
            (reg.datum(), reg.datum_pressure())
        };
        let pos = pu.pos(Phase::Aqueous);
        integrate(
            grid,
            reg,
            cells,
            gravity,
            settings,
            Phase::Aqueous,
            z0,
            p0,
            &[],
            &mut press[pos],
        )?;
    }

    // gas: anchored at the gas-oil contact through the capillary offset
    if pu.used(Phase::Vapour) {
        let (z0, p0) = if oil {
            (reg.zgoc(), po_goc + reg.pcgo_goc())
        } else {
            (reg.datum(), reg.datum_pressure())
        };
        let pos = pu.pos(Phase::Vapour);
        integrate(
            grid,
            reg,
            cells,
            gravity,
            settings,
            Phase::Vapour,
            z0,
            p0,
            &[],
            &mut press[pos],
        )?;
    }

    Ok(press)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
