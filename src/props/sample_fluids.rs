use crate::base::{Phase, PhaseUsage};
use crate::props::FluidPropsTrait;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds parameters for one analytic sample fluid
///
/// The formation volume factor is B(p) = 1 / (1 + cc (p - p_ref)), so the
/// reservoir density grows linearly with pressure; cc = 0 renders an
/// incompressible fluid.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamSampleFluid {
    /// Surface (standard condition) density
    pub rho_surface: f64,

    /// Compressibility coefficient of the formation volume factor
    pub cc: f64,

    /// Reference pressure
    pub p_ref: f64,
}

/// Holds parameters for an analytic linear capillary pressure curve
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamSampleCapillary {
    /// Minimum saturation of the curve
    pub s_min: f64,

    /// Maximum saturation of the curve
    pub s_max: f64,

    /// Capillary pressure at the minimum saturation
    pub pc_at_s_min: f64,

    /// Capillary pressure at the maximum saturation
    pub pc_at_s_max: f64,
}

impl ParamSampleCapillary {
    /// Returns a curve that is identically zero over the full saturation range
    pub fn zero() -> Self {
        ParamSampleCapillary {
            s_min: 0.0,
            s_max: 1.0,
            pc_at_s_min: 0.0,
            pc_at_s_max: 0.0,
        }
    }

    fn value(&self, s: f64) -> f64 {
        if self.s_max == self.s_min {
            return self.pc_at_s_min;
        }
        let x = (s - self.s_min) / (self.s_max - self.s_min);
        self.pc_at_s_min + x * (self.pc_at_s_max - self.pc_at_s_min)
    }
}

/// Holds all parameters of the sample property module
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamSampleFluids {
    /// Water parameters (None deactivates the phase)
    pub water: Option<ParamSampleFluid>,

    /// Oil parameters (None deactivates the phase)
    pub oil: Option<ParamSampleFluid>,

    /// Gas parameters (None deactivates the phase)
    pub gas: Option<ParamSampleFluid>,

    /// Oil-water capillary curve Pcow(sw), non-increasing
    pub pc_oil_water: ParamSampleCapillary,

    /// Gas-oil capillary curve Pcgo(sg), non-decreasing
    pub pc_gas_oil: ParamSampleCapillary,

    /// Slope of the saturated dissolution ratio: Rs_sat(p) = slope * p
    pub rs_sat_slope: f64,

    /// Slope of the saturated vaporization ratio: Rv_sat(p) = slope * p
    pub rv_sat_slope: f64,

    /// Uniform initial temperature
    pub temperature: f64,
}

/// Implements an analytic property module for tests and examples
///
/// Densities vary linearly with pressure, capillary curves are linear in
/// saturation, and the saturated Rs/Rv ratios are proportional to pressure,
/// so every quantity the equilibration computes from this module has a
/// closed-form counterpart.
pub struct SampleFluids {
    params: ParamSampleFluids,
    phase_usage: PhaseUsage,
}

impl SampleFluids {
    /// Allocates a new instance
    pub fn new(params: ParamSampleFluids) -> Result<Self, StrError> {
        let phase_usage = PhaseUsage::new(params.water.is_some(), params.oil.is_some(), params.gas.is_some())?;
        for param in [params.water, params.oil, params.gas].iter().flatten() {
            if param.rho_surface <= 0.0 {
                return Err("surface density must be greater than zero");
            }
            if param.cc < 0.0 {
                return Err("compressibility coefficient must not be negative");
            }
        }
        for pc in [&params.pc_oil_water, &params.pc_gas_oil] {
            if pc.s_min > pc.s_max {
                return Err("capillary curve saturations must satisfy s_min <= s_max");
            }
        }
        if params.pc_oil_water.pc_at_s_min < params.pc_oil_water.pc_at_s_max {
            return Err("oil-water capillary curve must be non-increasing in sw");
        }
        if params.pc_gas_oil.pc_at_s_min > params.pc_gas_oil.pc_at_s_max {
            return Err("gas-oil capillary curve must be non-decreasing in sg");
        }
        Ok(SampleFluids { params, phase_usage })
    }

    /// Returns an incompressible water-oil system with zero capillary pressure
    pub fn water_oil(rho_water: f64, rho_oil: f64) -> Self {
        SampleFluids::new(ParamSampleFluids {
            water: Some(ParamSampleFluid {
                rho_surface: rho_water,
                cc: 0.0,
                p_ref: 0.0,
            }),
            oil: Some(ParamSampleFluid {
                rho_surface: rho_oil,
                cc: 0.0,
                p_ref: 0.0,
            }),
            gas: None,
            pc_oil_water: ParamSampleCapillary::zero(),
            pc_gas_oil: ParamSampleCapillary::zero(),
            rs_sat_slope: 0.0,
            rv_sat_slope: 0.0,
            temperature: 293.15,
        })
        .unwrap()
    }

    /// Returns a slightly compressible three-phase system with live oil
    pub fn three_phase() -> Self {
        SampleFluids::new(ParamSampleFluids {
            water: Some(ParamSampleFluid {
                rho_surface: 1000.0,
                cc: 1e-9,
                p_ref: 100e5,
            }),
            oil: Some(ParamSampleFluid {
                rho_surface: 700.0,
                cc: 1e-9,
                p_ref: 100e5,
            }),
            gas: Some(ParamSampleFluid {
                rho_surface: 1.0,
                cc: 1e-9,
                p_ref: 100e5,
            }),
            pc_oil_water: ParamSampleCapillary {
                s_min: 0.0,
                s_max: 1.0,
                pc_at_s_min: 2e5,
                pc_at_s_max: 0.0,
            },
            pc_gas_oil: ParamSampleCapillary {
                s_min: 0.0,
                s_max: 1.0,
                pc_at_s_min: 0.0,
                pc_at_s_max: 1e5,
            },
            rs_sat_slope: 50.0 / 200e5,
            rv_sat_slope: 0.001 / 200e5,
            temperature: 293.15,
        })
        .unwrap()
    }

    fn param(&self, phase: Phase) -> Result<&ParamSampleFluid, StrError> {
        let opt = match phase {
            Phase::Aqueous => &self.params.water,
            Phase::Liquid => &self.params.oil,
            Phase::Vapour => &self.params.gas,
        };
        opt.as_ref().ok_or("phase is not present in the sample fluids")
    }

    fn fvf(&self, phase: Phase, press: f64) -> Result<f64, StrError> {
        let param = self.param(phase)?;
        let denominator = 1.0 + param.cc * (press - param.p_ref);
        if denominator <= 0.0 {
            return Err("pressure is below the validity range of the sample formation volume factor");
        }
        Ok(1.0 / denominator)
    }
}

impl FluidPropsTrait for SampleFluids {
    fn phase_usage(&self) -> PhaseUsage {
        self.phase_usage
    }

    fn surface_density(&self, _cell: usize, phase: Phase) -> Result<f64, StrError> {
        Ok(self.param(phase)?.rho_surface)
    }

    fn fvf_water(&self, _cell: usize, press: f64) -> Result<f64, StrError> {
        self.fvf(Phase::Aqueous, press)
    }

    fn fvf_oil(&self, _cell: usize, press: f64, _rs: f64) -> Result<f64, StrError> {
        self.fvf(Phase::Liquid, press)
    }

    fn fvf_gas(&self, _cell: usize, press: f64, _rv: f64) -> Result<f64, StrError> {
        self.fvf(Phase::Vapour, press)
    }

    fn rs_sat(&self, _cell: usize, press: f64, _temperature: f64) -> Result<f64, StrError> {
        Ok(self.params.rs_sat_slope * press)
    }

    fn rv_sat(&self, _cell: usize, press: f64, _temperature: f64) -> Result<f64, StrError> {
        Ok(self.params.rv_sat_slope * press)
    }

    fn pc_oil_water(&self, _cell: usize, sw: f64) -> Result<f64, StrError> {
        Ok(self.params.pc_oil_water.value(sw))
    }

    fn pc_gas_oil(&self, _cell: usize, sg: f64) -> Result<f64, StrError> {
        Ok(self.params.pc_gas_oil.value(sg))
    }

    fn sw_limits(&self, _cell: usize) -> Result<(f64, f64), StrError> {
        Ok((self.params.pc_oil_water.s_min, self.params.pc_oil_water.s_max))
    }

    fn sg_limits(&self, _cell: usize) -> Result<(f64, f64), StrError> {
        Ok((self.params.pc_gas_oil.s_min, self.params.pc_gas_oil.s_max))
    }

    fn temperature(&self, _cell: usize) -> f64 {
        self.params.temperature
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ParamSampleCapillary, ParamSampleFluid, ParamSampleFluids, SampleFluids};
    use crate::base::Phase;
    use crate::props::FluidPropsTrait;
    use russell_lab::approx_eq;

    #[test]
    fn captures_wrong_input() {
        let mut params = ParamSampleFluids {
            water: Some(ParamSampleFluid {
                rho_surface: 0.0,
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
        };
        assert_eq!(
            SampleFluids::new(params).err(),
            Some("surface density must be greater than zero")
        );
        params.water = None;
        assert_eq!(SampleFluids::new(params).err(), Some("at least one phase must be active"));
        params.water = Some(ParamSampleFluid {
            rho_surface: 1000.0,
            cc: 0.0,
            p_ref: 0.0,
        });
        params.pc_oil_water.pc_at_s_max = 1.0;
        assert_eq!(
            SampleFluids::new(params).err(),
            Some("oil-water capillary curve must be non-increasing in sw")
        );
    }

    #[test]
    fn capillary_curves_are_linear() {
        let fluids = SampleFluids::three_phase();
        approx_eq(fluids.pc_oil_water(0, 0.0).unwrap(), 2e5, 1e-10);
        approx_eq(fluids.pc_oil_water(0, 0.5).unwrap(), 1e5, 1e-10);
        approx_eq(fluids.pc_oil_water(0, 1.0).unwrap(), 0.0, 1e-10);
        approx_eq(fluids.pc_gas_oil(0, 0.5).unwrap(), 0.5e5, 1e-10);
    }

    #[test]
    fn saturated_ratios_are_proportional_to_pressure() {
        let fluids = SampleFluids::three_phase();
        approx_eq(fluids.rs_sat(0, 200e5, 293.15).unwrap(), 50.0, 1e-12);
        approx_eq(fluids.rs_sat(0, 100e5, 293.15).unwrap(), 25.0, 1e-12);
    }

    #[test]
    fn missing_phase_is_an_error() {
        let fluids = SampleFluids::water_oil(1000.0, 800.0);
        assert_eq!(
            fluids.surface_density(0, Phase::Vapour).err(),
            Some("phase is not present in the sample fluids")
        );
    }
}
