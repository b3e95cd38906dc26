//! Implements the equilibration engine and the initial-state computer

mod initial_state;
mod miscibility;
mod phase_pressure;
mod phase_saturation;
mod region;
mod rs_rv;
pub use crate::equil::initial_state::*;
pub use crate::equil::miscibility::*;
pub use crate::equil::phase_pressure::*;
pub use crate::equil::phase_saturation::*;
pub use crate::equil::region::*;
pub use crate::equil::rs_rv::*;
