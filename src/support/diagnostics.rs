//! Failure reporting through the [`log`] facade.
//!
//! Psychrometric functions return errors and never log. Callers that want a
//! human-readable trail attach [`Report::report`] at the boundary:
//!
//! ```
//! use twine_psychro::support::{
//!     diagnostics::Report,
//!     psychro::saturation_vapor_pressure,
//! };
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
//!
//! let t = ThermodynamicTemperature::new::<degree_celsius>(250.0);
//! let result = saturation_vapor_pressure(t).report("saturation vapor pressure");
//! assert!(result.is_err());
//! ```
//!
//! Nothing is emitted unless a logger is installed, and the result passes
//! through unchanged either way.

use std::fmt::Display;

/// Extension trait that logs the outcome of a fallible computation.
pub trait Report: Sized {
    /// Logs this result under `context` and returns it unchanged.
    ///
    /// Failures are logged at `warn` level, successes at `trace`.
    #[must_use]
    fn report(self, context: &str) -> Self;
}

impl<T, E: Display> Report for Result<T, E> {
    fn report(self, context: &str) -> Self {
        match &self {
            Ok(_) => log::trace!("{context}: ok"),
            Err(error) => log::warn!("{context}: {error}"),
        }
        self
    }
}
