//! Implements the interface to the external property module and the density calculator

mod density;
mod fluid_props;
mod sample_fluids;
pub use crate::props::density::*;
pub use crate::props::fluid_props::*;
pub use crate::props::sample_fluids::*;
