use crate::base::DepthTable;
use crate::props::FluidPropsTrait;
use crate::StrError;

/// Defines a depth/pressure-dependent miscibility function
///
/// A miscibility function returns the maximum (saturated) dissolved
/// gas-oil ratio Rs or vaporized oil-gas ratio Rv at a given depth and
/// pressure. The initial state is taken to be saturated at the table or
/// contact value, so the maximum never bends with pressure and its
/// pressure derivative is identically zero for every variant.
pub trait RsFunctionTrait {
    /// Returns the maximum ratio at a given depth, pressure, and temperature
    fn value(&self, depth: f64, press: f64, temperature: f64) -> f64;

    /// Returns the derivative of the maximum ratio with respect to pressure
    fn deriv_wrt_press(&self, _depth: f64, _press: f64, _temperature: f64) -> f64 {
        0.0
    }
}

/// Implements the miscibility function of an immiscible run (ratio identically zero)
pub struct NoMixing;

impl RsFunctionTrait for NoMixing {
    fn value(&self, _depth: f64, _press: f64, _temperature: f64) -> f64 {
        0.0
    }
}

/// Implements the dissolved gas-oil ratio from an explicit depth table (RSVD)
pub struct RsVd {
    table: DepthTable,
}

impl RsVd {
    /// Allocates a new instance from a validated depth table
    pub fn new(table: &DepthTable) -> Self {
        RsVd { table: table.clone() }
    }
}

impl RsFunctionTrait for RsVd {
    fn value(&self, depth: f64, _press: f64, _temperature: f64) -> f64 {
        self.table.interpolate(depth)
    }
}

/// Implements the vaporized oil-gas ratio from an explicit depth table (RVVD)
pub struct RvVd {
    table: DepthTable,
}

impl RvVd {
    /// Allocates a new instance from a validated depth table
    pub fn new(table: &DepthTable) -> Self {
        RvVd { table: table.clone() }
    }
}

impl RsFunctionTrait for RvVd {
    fn value(&self, depth: f64, _press: f64, _temperature: f64) -> f64 {
        self.table.interpolate(depth)
    }
}

/// Implements the dissolved gas-oil ratio saturated at the gas-oil contact
///
/// The saturated value is evaluated once, at the contact pressure and the
/// given temperature, and held constant with depth.
pub struct RsSatAtContact {
    rs_sat_contact: f64,
}

impl RsSatAtContact {
    /// Allocates a new instance, evaluating the saturated ratio at the contact
    pub fn new(props: &dyn FluidPropsTrait, cell: usize, p_contact: f64, temperature: f64) -> Result<Self, StrError> {
        Ok(RsSatAtContact {
            rs_sat_contact: props.rs_sat(cell, p_contact, temperature)?,
        })
    }
}

impl RsFunctionTrait for RsSatAtContact {
    fn value(&self, _depth: f64, _press: f64, _temperature: f64) -> f64 {
        self.rs_sat_contact
    }
}

/// Implements the vaporized oil-gas ratio saturated at the gas-oil contact
pub struct RvSatAtContact {
    rv_sat_contact: f64,
}

impl RvSatAtContact {
    /// Allocates a new instance, evaluating the saturated ratio at the contact
    pub fn new(props: &dyn FluidPropsTrait, cell: usize, p_contact: f64, temperature: f64) -> Result<Self, StrError> {
        Ok(RvSatAtContact {
            rv_sat_contact: props.rv_sat(cell, p_contact, temperature)?,
        })
    }
}

impl RsFunctionTrait for RvSatAtContact {
    fn value(&self, _depth: f64, _press: f64, _temperature: f64) -> f64 {
        self.rv_sat_contact
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{NoMixing, RsFunctionTrait, RsSatAtContact, RsVd, RvSatAtContact, RvVd};
    use crate::base::DepthTable;
    use crate::props::SampleFluids;
    use russell_lab::approx_eq;

    #[test]
    fn no_mixing_is_identically_zero() {
        let f = NoMixing;
        assert_eq!(f.value(0.0, 0.0, 0.0), 0.0);
        assert_eq!(f.value(1234.0, 700e5, 400.0), 0.0);
        assert_eq!(f.deriv_wrt_press(1234.0, 700e5, 400.0), 0.0);
    }

    #[test]
    fn depth_tables_interpolate_and_ignore_pressure() {
        let table = DepthTable::new(vec![1000.0, 1200.0], vec![40.0, 60.0]).unwrap();
        let rs = RsVd::new(&table);
        assert_eq!(rs.value(1000.0, 100e5, 293.15), 40.0);
        assert_eq!(rs.value(1100.0, 100e5, 293.15), 50.0);
        assert_eq!(rs.value(1100.0, 900e5, 293.15), 50.0);
        assert_eq!(rs.deriv_wrt_press(1100.0, 100e5, 293.15), 0.0);

        let rv = RvVd::new(&table);
        assert_eq!(rv.value(1200.0, 100e5, 293.15), 60.0);
        assert_eq!(rv.value(9999.0, 100e5, 293.15), 60.0);
    }

    #[test]
    fn sat_at_contact_holds_the_contact_value() {
        let fluids = SampleFluids::three_phase();
        // rs_sat_slope = 50 / 200e5, so the contact value at 200e5 is 50
        let rs = RsSatAtContact::new(&fluids, 0, 200e5, 293.15).unwrap();
        approx_eq(rs.value(1000.0, 100e5, 293.15), 50.0, 1e-12);
        approx_eq(rs.value(2000.0, 900e5, 293.15), 50.0, 1e-12);

        let rv = RvSatAtContact::new(&fluids, 0, 200e5, 293.15).unwrap();
        approx_eq(rv.value(1000.0, 100e5, 293.15), 0.001, 1e-15);
    }
}
