//! Boinit computes the initial state of black-oil reservoir models by an
//! equilibration procedure: given, per region, a datum depth/pressure and
//! optional phase-contact depths, it derives hydrostatic phase pressures,
//! capillary-consistent phase saturations, and dissolved-gas (Rs) /
//! vaporized-oil (Rv) ratios for every grid cell.
//!
//! The crate is organized in three modules:
//!
//! * [base] -- input records, grid view, region mapping, settings, errors
//! * [props] -- the property-module interface (PVT and capillary curves)
//! * [equil] -- the equilibration engine and the initial-state computer

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod equil;
pub mod prelude;
pub mod props;
