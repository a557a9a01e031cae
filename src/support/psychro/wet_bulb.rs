//! Wet-bulb temperature conversions.
//!
//! The humidity ratio follows from the wet bulb in closed form
//! ([`humidity_ratio_from_wet_bulb`]). The inverse has no closed form, so
//! [`wet_bulb_from_humidity_ratio`] brackets the wet bulb between the dew
//! point and the dry bulb and bisects on the closed-form relation, which
//! increases monotonically with the wet bulb.

mod config;
mod problem;

pub use config::WetBulbConfig;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    ratio::ratio,
    temperature_interval::degree_celsius as delta_celsius,
};

use crate::support::units::TemperatureDifference;

use super::{
    PsychroError, PsychroResult, check, dew_point, humidity_ratio,
    saturation::{self, SATURATION_RANGE, celsius, from_celsius},
};

use problem::{WetBulbModel, WetBulbProblem};

/// Returns the humidity ratio given dry bulb and wet bulb.
///
/// Computes the ASHRAE relation for a wet bulb over liquid water:
///
/// ```text
/// W = ((2501 − 2.326·T_wb)·W_s(T_wb) − 1.006·(T_db − T_wb)) / (2501 + 1.86·T_db − 4.186·T_wb)
/// ```
///
/// The result may be zero or negative for a wet bulb far below the dry bulb;
/// conversions that consume it reject such values.
///
/// # Errors
///
/// Returns [`PsychroError::WetBulbAboveDryBulb`] if the wet bulb exceeds the
/// dry bulb, or propagates the domain error of the saturation correlation.
///
/// # Example
///
/// ```
/// use twine_psychro::support::psychro::humidity_ratio_from_wet_bulb;
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::pascal, ratio::ratio, thermodynamic_temperature::degree_celsius,
/// };
///
/// let w = humidity_ratio_from_wet_bulb(
///     ThermodynamicTemperature::new::<degree_celsius>(25.0),
///     ThermodynamicTemperature::new::<degree_celsius>(20.0),
///     Pressure::new::<pascal>(101_325.0),
/// )
/// .unwrap();
/// assert!((w.get::<ratio>() - 0.0126).abs() < 1e-4);
/// ```
pub fn humidity_ratio_from_wet_bulb(
    dry_bulb: ThermodynamicTemperature,
    wet_bulb: ThermodynamicTemperature,
    pressure: Pressure,
) -> PsychroResult<Ratio> {
    let (t_db, t_wb) = check::wet_bulb_below(dry_bulb, wet_bulb)?;
    let w_s = saturation::saturation_humidity_ratio(wet_bulb, pressure)?.get::<ratio>();
    let depression = dry_bulb.minus(wet_bulb).get::<delta_celsius>();

    let w = ((2501.0 - 2.326 * t_wb) * w_s - 1.006 * depression)
        / (2501.0 + 1.86 * t_db - 4.186 * t_wb);

    Ok(Ratio::new::<ratio>(w))
}

/// Returns the wet bulb given dry bulb and humidity ratio.
///
/// Uses the default [`WetBulbConfig`].
///
/// # Errors
///
/// See [`wet_bulb_from_humidity_ratio_with_config`].
///
/// # Example
///
/// ```
/// use twine_psychro::support::psychro::wet_bulb_from_humidity_ratio;
/// use uom::si::{
///     f64::{Pressure, Ratio, ThermodynamicTemperature},
///     pressure::pascal, ratio::ratio, thermodynamic_temperature::degree_celsius,
/// };
///
/// let t_wb = wet_bulb_from_humidity_ratio(
///     ThermodynamicTemperature::new::<degree_celsius>(25.0),
///     Ratio::new::<ratio>(0.0126),
///     Pressure::new::<pascal>(101_325.0),
/// )
/// .unwrap();
/// assert!((t_wb.get::<degree_celsius>() - 20.0).abs() < 0.01);
/// ```
pub fn wet_bulb_from_humidity_ratio(
    dry_bulb: ThermodynamicTemperature,
    hum_ratio: Ratio,
    pressure: Pressure,
) -> PsychroResult<ThermodynamicTemperature> {
    wet_bulb_from_humidity_ratio_with_config(
        dry_bulb,
        hum_ratio,
        pressure,
        &WetBulbConfig::default(),
    )
}

/// Returns the wet bulb given dry bulb and humidity ratio, with explicit solver settings.
///
/// The search starts from the bracket `[T_dp, T_db]`. For very dry air the
/// dew-point fit can fall below the range of the saturation correlation, in
/// which case the lower end is raised to that range's minimum of -100 °C.
/// When the closed-form humidity ratio already meets the target at an end
/// of the bracket, the end is returned without iterating: the lower end for
/// air at or beyond the limit of the dew-point fit, the dry bulb for
/// saturated air.
///
/// # Errors
///
/// - [`PsychroError::InvalidHumidityRatio`] if `W ≤ 0`.
/// - Domain errors from the dew-point fit or the saturation correlation.
/// - [`PsychroError::MaxIters`] if the bracket does not shrink below
///   `config.temp_tol` within `config.max_iters` iterations.
pub fn wet_bulb_from_humidity_ratio_with_config(
    dry_bulb: ThermodynamicTemperature,
    hum_ratio: Ratio,
    pressure: Pressure,
    config: &WetBulbConfig,
) -> PsychroResult<ThermodynamicTemperature> {
    check::humidity_ratio(hum_ratio)?;
    let dew_point = dew_point::dew_point_from_humidity_ratio(dry_bulb, hum_ratio, pressure)?;
    let lower = from_celsius(celsius(dew_point).max(SATURATION_RANGE.0));

    let model = WetBulbModel::new(dry_bulb, pressure);

    if model.call(&dry_bulb)?.hum_ratio <= hum_ratio {
        return Ok(dry_bulb);
    }
    if model.call(&lower)?.hum_ratio >= hum_ratio {
        return Ok(lower);
    }

    let bracket = [celsius(lower), celsius(dry_bulb)];
    if bracket[1] - bracket[0] <= config.temp_tol_kelvin() {
        return Ok(from_celsius(0.5 * (bracket[0] + bracket[1])));
    }

    let problem = WetBulbProblem::new(hum_ratio);

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Both bracket ends evaluated, so no candidate should fail.
            // If one does, shrink the bracket from above.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(PsychroError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.wet_bulb)
}

/// Returns the relative humidity given dry bulb and wet bulb.
///
/// # Errors
///
/// Returns [`PsychroError::WetBulbAboveDryBulb`] if the wet bulb exceeds the
/// dry bulb, [`PsychroError::InvalidHumidityRatio`] if the implied humidity
/// ratio is not positive, or propagates domain errors.
pub fn relative_humidity_from_wet_bulb(
    dry_bulb: ThermodynamicTemperature,
    wet_bulb: ThermodynamicTemperature,
    pressure: Pressure,
) -> PsychroResult<Ratio> {
    let w = humidity_ratio_from_wet_bulb(dry_bulb, wet_bulb, pressure)?;
    humidity_ratio::relative_humidity_from_humidity_ratio(dry_bulb, w, pressure)
}

/// Returns the wet bulb given dry bulb and relative humidity.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidRelativeHumidity`] if the relative
/// humidity is outside `(0, 1]`, or propagates solver and domain errors.
pub fn wet_bulb_from_relative_humidity(
    dry_bulb: ThermodynamicTemperature,
    rel_hum: Ratio,
    pressure: Pressure,
) -> PsychroResult<ThermodynamicTemperature> {
    let w = humidity_ratio::humidity_ratio_from_relative_humidity(dry_bulb, rel_hum, pressure)?;
    wet_bulb_from_humidity_ratio(dry_bulb, w, pressure)
}

/// Returns the dew point given dry bulb and wet bulb.
///
/// # Errors
///
/// Returns [`PsychroError::WetBulbAboveDryBulb`] if the wet bulb exceeds the
/// dry bulb, [`PsychroError::InvalidHumidityRatio`] if the implied humidity
/// ratio is not positive, or propagates domain errors.
pub fn dew_point_from_wet_bulb(
    dry_bulb: ThermodynamicTemperature,
    wet_bulb: ThermodynamicTemperature,
    pressure: Pressure,
) -> PsychroResult<ThermodynamicTemperature> {
    let w = humidity_ratio_from_wet_bulb(dry_bulb, wet_bulb, pressure)?;
    dew_point::dew_point_from_humidity_ratio(dry_bulb, w, pressure)
}

/// Returns the wet bulb given dry bulb and dew point.
///
/// # Errors
///
/// Returns [`PsychroError::DewPointAboveDryBulb`] if the dew point exceeds
/// the dry bulb, or propagates solver and domain errors.
pub fn wet_bulb_from_dew_point(
    dry_bulb: ThermodynamicTemperature,
    dew_point: ThermodynamicTemperature,
    pressure: Pressure,
) -> PsychroResult<ThermodynamicTemperature> {
    check::dew_point_below(dry_bulb, dew_point)?;
    let w = dew_point::humidity_ratio_from_dew_point(dew_point, pressure)?;
    wet_bulb_from_humidity_ratio(dry_bulb, w, pressure)
}
