use russell_ode::Method;

/// Holds the numerical settings for the equilibration
///
/// The deck's target-accuracy parameter admits only its default value, so
/// these settings are the single supported accuracy level; they are
/// exposed for callers that need to tighten or relax the defaults.
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    /// ODE method for the hydrostatic pressure integration
    pub ode_method: Method,

    /// Absolute tolerance for the pressure integration (Pa)
    pub ode_abs_tol: f64,

    /// Relative tolerance for the pressure integration
    pub ode_rel_tol: f64,
}

impl Settings {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Settings {
            ode_method: Method::DoPri5,
            ode_abs_tol: 1e-6,
            ode_rel_tol: 1e-9,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
