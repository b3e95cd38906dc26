use crate::StrError;
use thiserror::Error;

/// Defines the errors reported by the equilibration computation
///
/// Configuration errors are detected before any numerical work starts and
/// carry the operator-facing (1-based) region or table number. Numerical
/// failures wrap the static message produced by the offending routine.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or unsupported input
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The equilibration record requests an unsupported target accuracy
    #[error("EQUIL region {region} (counting from 1): only target accuracy N = 0 is supported")]
    UnsupportedAccuracy { region: usize },

    /// The equilibration record names a depth table that is not available
    #[error("cannot initialise: {keyword} table {table} is not available")]
    MissingDepthTable { keyword: &'static str, table: usize },

    /// A table-less miscibility function demands datum/contact alignment
    #[error(
        "cannot initialise: when no explicit {keyword} table is given, \
         the datum depth must be at the gas-oil contact; \
         this does not hold in EQUIL region {region} (counting from 1)"
    )]
    DatumNotAtGasOilContact { keyword: &'static str, region: usize },

    /// The datum depth lies outside the oil zone of its region
    #[error("EQUIL region {region} (counting from 1): datum depth must lie in the oil zone (zgoc <= datum <= zwoc)")]
    DatumOutsideOilZone { region: usize },

    /// A cell refers to a region id outside the record collection
    #[error("cell {cell}: region index {index} must be in 1..={n_regions}")]
    RegionIndexOutOfRange {
        cell: usize,
        index: usize,
        n_regions: usize,
    },

    /// A numerical routine (pressure integration, saturation inversion, or
    /// property evaluation) failed or did not converge within its iteration cap
    #[error("{0}")]
    Numerics(&'static str),
}

impl From<StrError> for Error {
    fn from(message: StrError) -> Self {
        Error::Numerics(message)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
