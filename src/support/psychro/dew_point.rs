//! Conversions to and from the dew-point temperature.

use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use super::{PsychroResult, check, saturation, vapor};

/// Returns the dew point given dry bulb and relative humidity.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidRelativeHumidity`](super::PsychroError::InvalidRelativeHumidity)
/// if the relative humidity is outside `(0, 1]`, or propagates domain errors.
pub fn dew_point_from_relative_humidity(
    dry_bulb: ThermodynamicTemperature,
    rel_hum: Ratio,
) -> PsychroResult<ThermodynamicTemperature> {
    let p_w = vapor::vapor_pressure_from_relative_humidity(dry_bulb, rel_hum)?;
    vapor::dew_point_from_vapor_pressure(dry_bulb, p_w)
}

/// Returns the relative humidity given dry bulb and dew point.
///
/// # Errors
///
/// Returns [`PsychroError::DewPointAboveDryBulb`](super::PsychroError::DewPointAboveDryBulb)
/// if the dew point exceeds the dry bulb, or propagates domain errors.
pub fn relative_humidity_from_dew_point(
    dry_bulb: ThermodynamicTemperature,
    dew_point: ThermodynamicTemperature,
) -> PsychroResult<Ratio> {
    check::dew_point_below(dry_bulb, dew_point)?;
    let p_w = saturation::saturation_vapor_pressure(dew_point)?;
    vapor::relative_humidity_from_vapor_pressure(dry_bulb, p_w)
}

/// Returns the humidity ratio of air with the given dew point.
///
/// # Errors
///
/// Propagates the domain error of the saturation correlation.
pub fn humidity_ratio_from_dew_point(
    dew_point: ThermodynamicTemperature,
    pressure: Pressure,
) -> PsychroResult<Ratio> {
    let p_w = saturation::saturation_vapor_pressure(dew_point)?;
    vapor::humidity_ratio_from_vapor_pressure(p_w, pressure)
}

/// Returns the dew point given dry bulb and humidity ratio.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidHumidityRatio`](super::PsychroError::InvalidHumidityRatio)
/// if `W ≤ 0`, or propagates domain errors of the dew-point fit.
pub fn dew_point_from_humidity_ratio(
    dry_bulb: ThermodynamicTemperature,
    hum_ratio: Ratio,
    pressure: Pressure,
) -> PsychroResult<ThermodynamicTemperature> {
    let p_w = vapor::vapor_pressure_from_humidity_ratio(hum_ratio, pressure)?;
    vapor::dew_point_from_vapor_pressure(dry_bulb, p_w)
}
