//! Conversions through the partial pressure of water vapor.

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
};

use super::{
    PsychroError, PsychroResult, check,
    saturation::{self, MOLAR_MASS_RATIO, from_celsius},
};

/// Upper dry-bulb bound of the dew-point fit, in °C.
const DEW_POINT_FIT_MAX: f64 = 93.0;

/// Returns the vapor pressure of moist air with the given humidity ratio.
///
/// Computes `p_w = p·W / (0.621945 + W)`.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidHumidityRatio`] if `W ≤ 0`.
pub fn vapor_pressure_from_humidity_ratio(
    hum_ratio: Ratio,
    pressure: Pressure,
) -> PsychroResult<Pressure> {
    let w = check::humidity_ratio(hum_ratio)?;
    let p = pressure.get::<pascal>();

    Ok(Pressure::new::<pascal>(p * w / (MOLAR_MASS_RATIO + w)))
}

/// Returns the humidity ratio of moist air with the given vapor pressure.
///
/// Computes `W = 0.621945·p_w / (p − p_w)`.
///
/// # Errors
///
/// Returns [`PsychroError::NegativeVaporPressure`] if `p_w < 0`.
pub fn humidity_ratio_from_vapor_pressure(
    vap_pres: Pressure,
    pressure: Pressure,
) -> PsychroResult<Ratio> {
    let p_w = check::vapor_pressure(vap_pres)?;
    let p = pressure.get::<pascal>();

    Ok(Ratio::new::<ratio>(MOLAR_MASS_RATIO * p_w / (p - p_w)))
}

/// Returns the relative humidity given dry bulb and vapor pressure.
///
/// # Errors
///
/// Returns [`PsychroError::NegativeVaporPressure`] if `p_w < 0`, or
/// propagates the domain error of the saturation correlation.
pub fn relative_humidity_from_vapor_pressure(
    dry_bulb: ThermodynamicTemperature,
    vap_pres: Pressure,
) -> PsychroResult<Ratio> {
    let p_w = check::vapor_pressure(vap_pres)?;
    let p_ws = saturation::saturation_vapor_pressure(dry_bulb)?.get::<pascal>();

    Ok(Ratio::new::<ratio>(p_w / p_ws))
}

/// Returns the vapor pressure given dry bulb and relative humidity.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidRelativeHumidity`] if the relative
/// humidity is outside `(0, 1]`, or propagates the domain error of the
/// saturation correlation.
pub fn vapor_pressure_from_relative_humidity(
    dry_bulb: ThermodynamicTemperature,
    rel_hum: Ratio,
) -> PsychroResult<Pressure> {
    let rh = check::relative_humidity(rel_hum)?;
    let p_ws = saturation::saturation_vapor_pressure(dry_bulb)?;

    Ok(p_ws * rh)
}

/// Returns the dew-point temperature given dry bulb and vapor pressure.
///
/// Evaluates the ASHRAE curve fits in `α = ln(p_w / 1 kPa)`:
/// one for `0 °C ≤ T ≤ 93 °C` and one below freezing.
/// The fit may overshoot near saturation, so the result is clamped to the
/// dry-bulb temperature.
///
/// # Errors
///
/// - [`PsychroError::NegativeVaporPressure`] if `p_w < 0`.
/// - [`PsychroError::UndefinedDewPoint`] if `p_w = 0`.
/// - [`PsychroError::OutOfDomain`] if the dry bulb is above 93 °C.
pub fn dew_point_from_vapor_pressure(
    dry_bulb: ThermodynamicTemperature,
    vap_pres: Pressure,
) -> PsychroResult<ThermodynamicTemperature> {
    let p_w = check::vapor_pressure(vap_pres)?;
    let t_db = check::temperature_in(
        "dry bulb",
        dry_bulb,
        f64::NEG_INFINITY,
        DEW_POINT_FIT_MAX,
    )?;

    if p_w == 0.0 {
        return Err(PsychroError::UndefinedDewPoint);
    }

    let p_kpa = p_w / 1000.0;
    let alpha = p_kpa.ln();

    let t_dp = if t_db >= 0.0 {
        let fit = 6.54 + alpha * (14.526 + alpha * (0.7389 + alpha * 0.094_86));
        fit + 0.4569 * p_kpa.powf(0.1984)
    } else {
        6.09 + alpha * (12.608 + alpha * 0.4959)
    };

    Ok(from_celsius(t_dp.min(t_db)))
}

/// Returns the vapor pressure of air whose dew point is given.
///
/// This is the saturation vapor pressure evaluated at the dew point.
///
/// # Errors
///
/// Propagates the domain error of the saturation correlation.
pub fn vapor_pressure_from_dew_point(
    dew_point: ThermodynamicTemperature,
) -> PsychroResult<Pressure> {
    saturation::saturation_vapor_pressure(dew_point)
}
