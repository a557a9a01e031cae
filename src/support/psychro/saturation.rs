//! Saturation properties of moist air.
//!
//! [`saturation_vapor_pressure`] is the leaf of the conversion network:
//! every humidity conversion ultimately evaluates it, so its domain bound
//! gates the domain of everything built on top.

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::SpecificEnthalpy;

use super::{PsychroResult, check, moist_air};

/// Ratio of the molecular mass of water vapor to that of dry air.
pub(super) const MOLAR_MASS_RATIO: f64 = 0.621_945;

/// Offset between the Celsius and Kelvin scales.
pub(super) const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;

/// Valid temperature range of the saturation correlation, in °C.
pub(super) const SATURATION_RANGE: (f64, f64) = (-100.0, 200.0);

/// Hyland-Wexler coefficients over ice, `-100 °C ≤ T ≤ 0 °C`.
const OVER_ICE: [f64; 7] = [
    -5.674_535_9e3,
    6.392_524_7,
    -9.677_843e-3,
    6.221_570_1e-7,
    2.074_782_5e-9,
    -9.484_024e-13,
    4.163_501_9,
];

/// Hyland-Wexler coefficients over liquid water, `0 °C < T ≤ 200 °C`.
const OVER_WATER: [f64; 6] = [
    -5.800_220_6e3,
    1.391_499_3,
    -4.864_023_9e-2,
    4.176_476_8e-5,
    -1.445_209_3e-8,
    6.545_967_3,
];

/// Returns the saturation vapor pressure of water at the given temperature.
///
/// Uses the ice correlation at or below 0 °C and the liquid-water
/// correlation above it (ASHRAE Fundamentals, eqs. 5 and 6).
///
/// # Errors
///
/// Returns [`PsychroError::OutOfDomain`](super::PsychroError::OutOfDomain)
/// if the temperature is outside `[-100, 200] °C`.
///
/// # Example
///
/// ```
/// use twine_psychro::support::psychro::saturation_vapor_pressure;
/// use uom::si::{
///     f64::ThermodynamicTemperature, pressure::pascal,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let t = ThermodynamicTemperature::new::<degree_celsius>(25.0);
/// let p_ws = saturation_vapor_pressure(t).unwrap();
/// assert!((p_ws.get::<pascal>() - 3169.9).abs() < 1.0);
/// ```
pub fn saturation_vapor_pressure(temperature: ThermodynamicTemperature) -> PsychroResult<Pressure> {
    let (min, max) = SATURATION_RANGE;
    let t = check::temperature_in("temperature", temperature, min, max)?;
    let t_k = t + ZERO_CELSIUS_IN_KELVIN;

    let ln_p_ws = if t <= 0.0 {
        let [c1, c2, c3, c4, c5, c6, c7] = OVER_ICE;
        c1 / t_k + c2 + t_k * (c3 + t_k * (c4 + t_k * (c5 + t_k * c6))) + c7 * t_k.ln()
    } else {
        let [c8, c9, c10, c11, c12, c13] = OVER_WATER;
        c8 / t_k + c9 + t_k * (c10 + t_k * (c11 + t_k * c12)) + c13 * t_k.ln()
    };

    Ok(Pressure::new::<pascal>(ln_p_ws.exp()))
}

/// Returns the humidity ratio of saturated air.
///
/// Computes `W_s = 0.621945·p_ws / (p − p_ws)`.
///
/// # Errors
///
/// Propagates the domain error of [`saturation_vapor_pressure`].
pub fn saturation_humidity_ratio(
    dry_bulb: ThermodynamicTemperature,
    pressure: Pressure,
) -> PsychroResult<Ratio> {
    let p_ws = saturation_vapor_pressure(dry_bulb)?.get::<pascal>();
    let p = pressure.get::<pascal>();

    Ok(Ratio::new::<ratio>(MOLAR_MASS_RATIO * p_ws / (p - p_ws)))
}

/// Returns the enthalpy of saturated moist air per unit mass of dry air.
///
/// # Errors
///
/// Propagates the domain error of [`saturation_vapor_pressure`].
pub fn saturated_air_enthalpy(
    dry_bulb: ThermodynamicTemperature,
    pressure: Pressure,
) -> PsychroResult<SpecificEnthalpy> {
    let w_s = saturation_humidity_ratio(dry_bulb, pressure)?;
    moist_air::moist_air_enthalpy(dry_bulb, w_s)
}

/// Returns the temperature in °C.
pub(super) fn celsius(temperature: ThermodynamicTemperature) -> f64 {
    temperature.get::<degree_celsius>()
}

/// Builds a temperature from a value in °C.
pub(super) fn from_celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}
