//! Precondition checks shared by the conversion functions.
//!
//! Each check returns the raw `f64` in the unit the correlations are written
//! in, so callers can validate and unwrap a quantity in one step.
//! Comparisons are written so that `NaN` always fails.

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use super::{PsychroError, PsychroResult};

/// Returns the relative humidity as a fraction if it lies in `(0, 1]`.
pub(super) fn relative_humidity(rel_hum: Ratio) -> PsychroResult<f64> {
    let value = rel_hum.get::<ratio>();
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(PsychroError::InvalidRelativeHumidity { value })
    }
}

/// Returns the humidity ratio in kg/kg if it is strictly positive.
pub(super) fn humidity_ratio(hum_ratio: Ratio) -> PsychroResult<f64> {
    let value = hum_ratio.get::<ratio>();
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PsychroError::InvalidHumidityRatio { value })
    }
}

/// Returns the vapor pressure in Pa if it is not negative.
pub(super) fn vapor_pressure(vap_pres: Pressure) -> PsychroResult<f64> {
    let value = vap_pres.get::<pascal>();
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(PsychroError::NegativeVaporPressure { value })
    }
}

/// Returns the temperature in °C if it lies in `[min, max]`.
pub(super) fn temperature_in(
    quantity: &'static str,
    temperature: ThermodynamicTemperature,
    min: f64,
    max: f64,
) -> PsychroResult<f64> {
    let value = temperature.get::<degree_celsius>();
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(PsychroError::OutOfDomain {
            quantity,
            value,
            min,
            max,
        })
    }
}

/// Returns `(dry_bulb, dew_point)` in °C if the dew point does not exceed the dry bulb.
pub(super) fn dew_point_below(
    dry_bulb: ThermodynamicTemperature,
    dew_point: ThermodynamicTemperature,
) -> PsychroResult<(f64, f64)> {
    let t_db = dry_bulb.get::<degree_celsius>();
    let t_dp = dew_point.get::<degree_celsius>();
    if t_dp <= t_db {
        Ok((t_db, t_dp))
    } else {
        Err(PsychroError::DewPointAboveDryBulb {
            dew_point: t_dp,
            dry_bulb: t_db,
        })
    }
}

/// Returns `(dry_bulb, wet_bulb)` in °C if the wet bulb does not exceed the dry bulb.
pub(super) fn wet_bulb_below(
    dry_bulb: ThermodynamicTemperature,
    wet_bulb: ThermodynamicTemperature,
) -> PsychroResult<(f64, f64)> {
    let t_db = dry_bulb.get::<degree_celsius>();
    let t_wb = wet_bulb.get::<degree_celsius>();
    if t_wb <= t_db {
        Ok((t_db, t_wb))
    } else {
        Err(PsychroError::WetBulbAboveDryBulb {
            wet_bulb: t_wb,
            dry_bulb: t_db,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::thermodynamic_temperature::kelvin;

    #[test]
    fn relative_humidity_bounds() {
        assert!(relative_humidity(Ratio::new::<ratio>(1.0)).is_ok());
        assert!(relative_humidity(Ratio::new::<ratio>(1e-9)).is_ok());

        for value in [0.0, -0.1, 1.000_001, f64::NAN] {
            assert!(matches!(
                relative_humidity(Ratio::new::<ratio>(value)),
                Err(PsychroError::InvalidRelativeHumidity { .. })
            ));
        }
    }

    #[test]
    fn humidity_ratio_must_be_positive() {
        assert!(humidity_ratio(Ratio::new::<ratio>(0.01)).is_ok());
        assert!(matches!(
            humidity_ratio(Ratio::new::<ratio>(0.0)),
            Err(PsychroError::InvalidHumidityRatio { .. })
        ));
        assert!(matches!(
            humidity_ratio(Ratio::new::<ratio>(f64::NAN)),
            Err(PsychroError::InvalidHumidityRatio { .. })
        ));
    }

    #[test]
    fn vapor_pressure_allows_zero() {
        assert!(vapor_pressure(Pressure::new::<pascal>(0.0)).is_ok());
        assert!(matches!(
            vapor_pressure(Pressure::new::<pascal>(-1.0)),
            Err(PsychroError::NegativeVaporPressure { .. })
        ));
    }

    #[test]
    fn temperature_range_is_inclusive() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(200.0);
        assert!(temperature_in("dry bulb", t, -100.0, 200.0).is_ok());

        let t = ThermodynamicTemperature::new::<kelvin>(100.0);
        assert!(matches!(
            temperature_in("dry bulb", t, -100.0, 200.0),
            Err(PsychroError::OutOfDomain {
                quantity: "dry bulb",
                ..
            })
        ));
    }

    #[test]
    fn ordering_checks() {
        let warm = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let cool = ThermodynamicTemperature::new::<degree_celsius>(20.0);

        assert!(dew_point_below(warm, cool).is_ok());
        assert!(dew_point_below(warm, warm).is_ok());
        assert!(matches!(
            dew_point_below(cool, warm),
            Err(PsychroError::DewPointAboveDryBulb { .. })
        ));

        assert!(wet_bulb_below(warm, cool).is_ok());
        assert!(matches!(
            wet_bulb_below(cool, warm),
            Err(PsychroError::WetBulbAboveDryBulb { .. })
        ));
    }
}
