use crate::base::{EquilRecord, PhaseUsage};
use crate::equil::RsFunctionTrait;
use crate::props::DensityCalc;

/// Aggregates the data needed to equilibrate one region
///
/// The region composes its equilibration record, a density calculator bound
/// to a representative cell, the region's Rs and Rv functions, and the
/// active-phase configuration. Instances live for one initialization pass;
/// the Rs/Rv functions are owned by the initial-state computer and borrowed
/// here.
pub struct EquilReg<'a> {
    record: &'a EquilRecord,
    density: DensityCalc<'a>,
    rs_func: &'a dyn RsFunctionTrait,
    rv_func: &'a dyn RsFunctionTrait,
    phase_usage: PhaseUsage,
}

impl<'a> EquilReg<'a> {
    /// Allocates a new instance
    pub fn new(
        record: &'a EquilRecord,
        density: DensityCalc<'a>,
        rs_func: &'a dyn RsFunctionTrait,
        rv_func: &'a dyn RsFunctionTrait,
        phase_usage: PhaseUsage,
    ) -> Self {
        EquilReg {
            record,
            density,
            rs_func,
            rv_func,
            phase_usage,
        }
    }

    /// Returns the datum depth
    pub fn datum(&self) -> f64 {
        self.record.datum_depth
    }

    /// Returns the pressure at the datum depth
    pub fn datum_pressure(&self) -> f64 {
        self.record.datum_pressure
    }

    /// Returns the water-oil contact depth
    pub fn zwoc(&self) -> f64 {
        self.record.woc_depth
    }

    /// Returns the oil-water capillary pressure at the water-oil contact
    pub fn pcow_woc(&self) -> f64 {
        self.record.pcow_woc
    }

    /// Returns the gas-oil contact depth
    pub fn zgoc(&self) -> f64 {
        self.record.goc_depth
    }

    /// Returns the gas-oil capillary pressure at the gas-oil contact
    pub fn pcgo_goc(&self) -> f64 {
        self.record.pcgo_goc
    }

    /// Returns the density calculator of the region
    pub fn density(&self) -> &DensityCalc<'a> {
        &self.density
    }

    /// Returns the dissolved gas-oil ratio function of the region
    pub fn rs_func(&self) -> &'a dyn RsFunctionTrait {
        self.rs_func
    }

    /// Returns the vaporized oil-gas ratio function of the region
    pub fn rv_func(&self) -> &'a dyn RsFunctionTrait {
        self.rv_func
    }

    /// Returns the active-phase configuration
    pub fn phase_usage(&self) -> PhaseUsage {
        self.phase_usage
    }
}
