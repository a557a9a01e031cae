//! Conversions between humidity ratio, relative humidity, and specific humidity.

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    ratio::ratio,
};

use super::{PsychroError, PsychroResult, check, vapor};

/// Returns the humidity ratio given dry bulb and relative humidity.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidRelativeHumidity`] if the relative
/// humidity is outside `(0, 1]`, or propagates the domain error of the
/// saturation correlation.
///
/// # Example
///
/// ```
/// use twine_psychro::support::psychro::humidity_ratio_from_relative_humidity;
/// use uom::si::{
///     f64::{Pressure, Ratio, ThermodynamicTemperature},
///     pressure::pascal, ratio::ratio, thermodynamic_temperature::degree_celsius,
/// };
///
/// let w = humidity_ratio_from_relative_humidity(
///     ThermodynamicTemperature::new::<degree_celsius>(25.0),
///     Ratio::new::<ratio>(0.5),
///     Pressure::new::<pascal>(101_325.0),
/// )
/// .unwrap();
/// assert!((w.get::<ratio>() - 0.00988).abs() < 1e-5);
/// ```
pub fn humidity_ratio_from_relative_humidity(
    dry_bulb: ThermodynamicTemperature,
    rel_hum: Ratio,
    pressure: Pressure,
) -> PsychroResult<Ratio> {
    let p_w = vapor::vapor_pressure_from_relative_humidity(dry_bulb, rel_hum)?;
    vapor::humidity_ratio_from_vapor_pressure(p_w, pressure)
}

/// Returns the relative humidity given dry bulb and humidity ratio.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidHumidityRatio`] if `W ≤ 0`, or
/// propagates the domain error of the saturation correlation.
pub fn relative_humidity_from_humidity_ratio(
    dry_bulb: ThermodynamicTemperature,
    hum_ratio: Ratio,
    pressure: Pressure,
) -> PsychroResult<Ratio> {
    let p_w = vapor::vapor_pressure_from_humidity_ratio(hum_ratio, pressure)?;
    vapor::relative_humidity_from_vapor_pressure(dry_bulb, p_w)
}

/// Returns the specific humidity, `q = W / (1 + W)`.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidHumidityRatio`] if `W ≤ 0`.
pub fn specific_humidity_from_humidity_ratio(hum_ratio: Ratio) -> PsychroResult<Ratio> {
    let w = check::humidity_ratio(hum_ratio)?;
    Ok(Ratio::new::<ratio>(w / (1.0 + w)))
}

/// Returns the humidity ratio, `W = q / (1 − q)`.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidSpecificHumidity`] unless `0 < q < 1`.
pub fn humidity_ratio_from_specific_humidity(spec_hum: Ratio) -> PsychroResult<Ratio> {
    let q = spec_hum.get::<ratio>();
    if !(q > 0.0 && q < 1.0) {
        return Err(PsychroError::InvalidSpecificHumidity { value: q });
    }
    Ok(Ratio::new::<ratio>(q / (1.0 - q)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{pressure::pascal, thermodynamic_temperature::degree_celsius};

    fn atm() -> Pressure {
        Pressure::new::<pascal>(101_325.0)
    }

    #[test]
    fn relative_humidity_roundtrip() {
        for t in [-20.0, 0.0, 25.0, 60.0] {
            let t_db = ThermodynamicTemperature::new::<degree_celsius>(t);
            for rh in [0.01, 0.25, 0.8, 1.0] {
                let w = humidity_ratio_from_relative_humidity(t_db, Ratio::new::<ratio>(rh), atm())
                    .unwrap();
                let rh_2 = relative_humidity_from_humidity_ratio(t_db, w, atm()).unwrap();
                assert_relative_eq!(rh_2.get::<ratio>(), rh, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn specific_humidity_roundtrip() {
        let w = Ratio::new::<ratio>(0.012);
        let q = specific_humidity_from_humidity_ratio(w).unwrap();
        assert_relative_eq!(q.get::<ratio>(), 0.012 / 1.012);

        let w_2 = humidity_ratio_from_specific_humidity(q).unwrap();
        assert_relative_eq!(w_2.get::<ratio>(), 0.012, epsilon = 1e-15);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let t_db = ThermodynamicTemperature::new::<degree_celsius>(25.0);

        assert!(matches!(
            humidity_ratio_from_relative_humidity(t_db, Ratio::new::<ratio>(-0.2), atm()),
            Err(PsychroError::InvalidRelativeHumidity { .. })
        ));
        assert!(matches!(
            relative_humidity_from_humidity_ratio(t_db, Ratio::new::<ratio>(-0.001), atm()),
            Err(PsychroError::InvalidHumidityRatio { .. })
        ));
        assert!(matches!(
            specific_humidity_from_humidity_ratio(Ratio::new::<ratio>(0.0)),
            Err(PsychroError::InvalidHumidityRatio { .. })
        ));
        for q in [0.0, 1.0, f64::NAN] {
            assert!(matches!(
                humidity_ratio_from_specific_humidity(Ratio::new::<ratio>(q)),
                Err(PsychroError::InvalidSpecificHumidity { .. })
            ));
        }
    }

    #[test]
    fn domain_errors_propagate() {
        let too_hot = ThermodynamicTemperature::new::<degree_celsius>(250.0);
        assert!(matches!(
            humidity_ratio_from_relative_humidity(too_hot, Ratio::new::<ratio>(0.5), atm()),
            Err(PsychroError::OutOfDomain { .. })
        ));
    }
}
