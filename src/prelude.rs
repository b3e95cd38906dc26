//! Makes available common structures needed to equilibrate a model
//!
//! You may write `use boinit::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{DepthTable, EquilInput, EquilRecord, Error, Grid, Phase, PhaseUsage, Settings};
pub use crate::base::{GRAVITY, STANDARD_TEMPERATURE};
pub use crate::equil::{compute_initial_state, InitialState, InitialStateComputer};
pub use crate::props::{FluidPropsTrait, ParamSampleCapillary, ParamSampleFluid, ParamSampleFluids, SampleFluids};
