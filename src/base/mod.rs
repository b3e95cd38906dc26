//! Implements the base structures for the equilibration computation

mod constants;
mod enums;
mod error;
mod grid;
mod input;
mod region_mapping;
mod settings;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::error::*;
pub use crate::base::grid::*;
pub use crate::base::input::*;
pub use crate::base::region_mapping::*;
pub use crate::base::settings::*;
