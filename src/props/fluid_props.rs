use crate::base::{Phase, PhaseUsage};
use crate::StrError;

/// Defines the interface to the external property module
///
/// The property module owns the PVT tables and the saturation functions of
/// the deck; the equilibration consumes them through this trait, always
/// bound to one cell at a time (property regions may vary per cell).
///
/// Conventions:
///
/// * formation volume factors are reservoir volume per surface volume;
/// * `pc_oil_water` returns Pcow = po - pw as a non-increasing function of
///   the water saturation over `sw_limits`;
/// * `pc_gas_oil` returns Pcgo = pg - po as a non-decreasing function of
///   the gas saturation over `sg_limits`.
pub trait FluidPropsTrait {
    /// Returns the set of active phases and their array positions
    fn phase_usage(&self) -> PhaseUsage;

    /// Returns the surface (standard condition) density of a phase
    fn surface_density(&self, cell: usize, phase: Phase) -> Result<f64, StrError>;

    /// Returns the water formation volume factor Bw(p)
    fn fvf_water(&self, cell: usize, press: f64) -> Result<f64, StrError>;

    /// Returns the oil formation volume factor Bo(p, Rs)
    fn fvf_oil(&self, cell: usize, press: f64, rs: f64) -> Result<f64, StrError>;

    /// Returns the gas formation volume factor Bg(p, Rv)
    fn fvf_gas(&self, cell: usize, press: f64, rv: f64) -> Result<f64, StrError>;

    /// Returns the saturated dissolved gas-oil ratio Rs(p, T)
    fn rs_sat(&self, cell: usize, press: f64, temperature: f64) -> Result<f64, StrError>;

    /// Returns the saturated vaporized oil-gas ratio Rv(p, T)
    fn rv_sat(&self, cell: usize, press: f64, temperature: f64) -> Result<f64, StrError>;

    /// Returns the oil-water capillary pressure at a given water saturation
    fn pc_oil_water(&self, cell: usize, sw: f64) -> Result<f64, StrError>;

    /// Returns the gas-oil capillary pressure at a given gas saturation
    fn pc_gas_oil(&self, cell: usize, sg: f64) -> Result<f64, StrError>;

    /// Returns the (min, max) water saturation of the capillary curve
    fn sw_limits(&self, cell: usize) -> Result<(f64, f64), StrError>;

    /// Returns the (min, max) gas saturation of the capillary curve
    fn sg_limits(&self, cell: usize) -> Result<(f64, f64), StrError>;

    /// Returns the initial temperature of a cell
    fn temperature(&self, cell: usize) -> f64;
}
