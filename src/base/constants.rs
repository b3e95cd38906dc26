/// Defines the standard acceleration of gravity in m/s²
pub const GRAVITY: f64 = 9.80665;

/// Defines the standard temperature in K (20 °C) used to evaluate saturated
/// dissolution/vaporization ratios at phase contacts
pub const STANDARD_TEMPERATURE: f64 = 273.15 + 20.0;
