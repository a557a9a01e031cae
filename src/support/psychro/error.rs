use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that may occur when evaluating psychrometric properties.
///
/// Every variant describes an input or domain problem. None of them is
/// transient, so retrying the same call always fails the same way.
#[derive(Debug, Error)]
pub enum PsychroError {
    /// A temperature lies outside the range in which a correlation is valid.
    ///
    /// For example, saturation vapor pressure is only defined on
    /// `[-100, 200] °C`, and the dew-point fit only up to 93 °C.
    #[error("{quantity} of {value} °C is outside the valid range [{min}, {max}] °C")]
    OutOfDomain {
        /// Name of the quantity that was out of range.
        quantity: &'static str,
        /// Offending value, in °C.
        value: f64,
        /// Lower bound of the valid range, in °C.
        min: f64,
        /// Upper bound of the valid range, in °C.
        max: f64,
    },

    /// Relative humidity is outside `(0, 1]`.
    #[error("relative humidity {value} is outside (0, 1]")]
    InvalidRelativeHumidity { value: f64 },

    /// Humidity ratio is not strictly positive.
    #[error("humidity ratio {value} kg/kg must be strictly positive")]
    InvalidHumidityRatio { value: f64 },

    /// Specific humidity is outside `(0, 1)`.
    #[error("specific humidity {value} kg/kg is outside (0, 1)")]
    InvalidSpecificHumidity { value: f64 },

    /// Vapor pressure is negative.
    #[error("vapor pressure {value} Pa is negative")]
    NegativeVaporPressure { value: f64 },

    /// Vapor pressure is zero, so the air has no dew point.
    #[error("dew point is undefined at zero vapor pressure")]
    UndefinedDewPoint,

    /// Dew point exceeds the dry-bulb temperature.
    #[error("dew point {dew_point} °C is above dry bulb {dry_bulb} °C")]
    DewPointAboveDryBulb { dew_point: f64, dry_bulb: f64 },

    /// Wet bulb exceeds the dry-bulb temperature.
    #[error("wet bulb {wet_bulb} °C is above dry bulb {dry_bulb} °C")]
    WetBulbAboveDryBulb { wet_bulb: f64, dry_bulb: f64 },

    /// The bisection solver rejected the wet-bulb problem.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The wet-bulb solver reached the iteration limit without converging.
    #[error("wet-bulb solver hit iteration limit: residual={residual} kg/kg")]
    MaxIters {
        /// Best humidity ratio residual achieved, in kg/kg.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

/// A result type alias for psychrometric calculations.
pub type PsychroResult<T, E = PsychroError> = Result<T, E>;
