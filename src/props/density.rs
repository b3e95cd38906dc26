use crate::base::Phase;
use crate::props::FluidPropsTrait;
use crate::StrError;

/// Calculates phase densities at reservoir conditions for one representative cell
///
/// Densities follow from the surface densities and the pressure-dependent
/// formation volume factors, with the dissolved-gas (Rs) and vaporized-oil
/// (Rv) content feeding back into the oil and gas densities:
///
/// ```text
/// ρw(p)     = ρw_surf / Bw(p)
/// ρo(p, Rs) = (ρo_surf + Rs ρg_surf) / Bo(p, Rs)
/// ρg(p, Rv) = (ρg_surf + Rv ρo_surf) / Bg(p, Rv)
/// ```
pub struct DensityCalc<'a> {
    props: &'a dyn FluidPropsTrait,
    cell: usize,
}

impl<'a> DensityCalc<'a> {
    /// Allocates a new instance bound to a representative cell
    pub fn new(props: &'a dyn FluidPropsTrait, cell: usize) -> Self {
        DensityCalc { props, cell }
    }

    /// Returns the water density at a given pressure
    pub fn water(&self, press: f64) -> Result<f64, StrError> {
        let rho_surf = self.props.surface_density(self.cell, Phase::Aqueous)?;
        let bw = self.props.fvf_water(self.cell, press)?;
        if bw <= 0.0 {
            return Err("water formation volume factor must be positive");
        }
        Ok(rho_surf / bw)
    }

    /// Returns the oil density at a given pressure and dissolved gas-oil ratio
    pub fn oil(&self, press: f64, rs: f64) -> Result<f64, StrError> {
        let rho_o = self.props.surface_density(self.cell, Phase::Liquid)?;
        let rho_g = if rs > 0.0 {
            self.props.surface_density(self.cell, Phase::Vapour)?
        } else {
            0.0
        };
        let bo = self.props.fvf_oil(self.cell, press, rs)?;
        if bo <= 0.0 {
            return Err("oil formation volume factor must be positive");
        }
        Ok((rho_o + rs * rho_g) / bo)
    }

    /// Returns the gas density at a given pressure and vaporized oil-gas ratio
    pub fn gas(&self, press: f64, rv: f64) -> Result<f64, StrError> {
        let rho_g = self.props.surface_density(self.cell, Phase::Vapour)?;
        let rho_o = if rv > 0.0 {
            self.props.surface_density(self.cell, Phase::Liquid)?
        } else {
            0.0
        };
        let bg = self.props.fvf_gas(self.cell, press, rv)?;
        if bg <= 0.0 {
            return Err("gas formation volume factor must be positive");
        }
        Ok((rho_g + rv * rho_o) / bg)
    }

    /// Returns the initial temperature of the representative cell
    pub fn temperature(&self) -> f64 {
        self.props.temperature(self.cell)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
