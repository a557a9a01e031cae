//! Standard atmosphere and sea-level pressure corrections.
//!
//! Psychrometric conversions need the barometric pressure at a site. When it
//! isn't measured, [`standard_pressure`] estimates it from altitude. Weather
//! reports usually give pressure reduced to sea level, which
//! [`station_pressure`] converts back to the local value.
//!
//! None of these functions can fail. Altitude is not range-checked, but the
//! standard pressure is zero at and above the ceiling of the pressure fit.

use uom::si::{
    f64::{Length, Pressure, ThermodynamicTemperature},
    length::meter,
    pressure::pascal,
    thermodynamic_temperature::degree_celsius,
};

/// Standard sea-level pressure, in Pa.
const SEA_LEVEL_PRESSURE: f64 = 101_325.0;

/// Standard sea-level temperature, in °C.
const SEA_LEVEL_TEMPERATURE: f64 = 15.0;

/// Temperature lapse rate of the troposphere, in K/m.
const LAPSE_RATE: f64 = 0.0065;

/// Specific gas constant of dry air, in J/kg·K.
const GAS_CONSTANT: f64 = 287.055;

/// Standard gravity, in m/s².
const GRAVITY: f64 = 9.807;

/// Returns the standard atmospheric pressure at an altitude.
///
/// Computes `p = 101325·(1 − 2.25577e-5·Z)^5.2559` with `Z` in meters.
/// The base vanishes near 44.3 km; above that the pressure is 0 Pa.
///
/// # Example
///
/// ```
/// use twine_psychro::support::atmosphere::standard_pressure;
/// use uom::si::{f64::Length, length::meter, pressure::kilopascal};
///
/// let p = standard_pressure(Length::new::<meter>(1000.0));
/// assert!((p.get::<kilopascal>() - 89.875).abs() < 1e-3);
/// ```
#[must_use]
pub fn standard_pressure(altitude: Length) -> Pressure {
    let z = altitude.get::<meter>();
    let base = (1.0 - 2.255_77e-5 * z).max(0.0);
    Pressure::new::<pascal>(SEA_LEVEL_PRESSURE * base.powf(5.2559))
}

/// Returns the standard atmospheric temperature at an altitude.
#[must_use]
pub fn standard_temperature(altitude: Length) -> ThermodynamicTemperature {
    let z = altitude.get::<meter>();
    ThermodynamicTemperature::new::<degree_celsius>(SEA_LEVEL_TEMPERATURE - LAPSE_RATE * z)
}

/// Reduces a station pressure to sea level.
///
/// The air column below the station is taken at the mean of the dry bulb
/// and the sea-level temperature implied by the standard lapse rate.
#[must_use]
pub fn sea_level_pressure(
    station_pressure: Pressure,
    altitude: Length,
    dry_bulb: ThermodynamicTemperature,
) -> Pressure {
    station_pressure * (altitude.get::<meter>() / scale_height(altitude, dry_bulb)).exp()
}

/// Converts a sea-level pressure back to the station pressure.
///
/// This is the inverse of [`sea_level_pressure`].
#[must_use]
pub fn station_pressure(
    sea_level_pressure: Pressure,
    altitude: Length,
    dry_bulb: ThermodynamicTemperature,
) -> Pressure {
    sea_level_pressure * (-altitude.get::<meter>() / scale_height(altitude, dry_bulb)).exp()
}

/// Scale height of the air column, in m.
fn scale_height(altitude: Length, dry_bulb: ThermodynamicTemperature) -> f64 {
    let t_column = dry_bulb.get::<degree_celsius>() + LAPSE_RATE * altitude.get::<meter>() / 2.0;
    GAS_CONSTANT * (t_column + 273.15) / GRAVITY
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn m(z: f64) -> Length {
        Length::new::<meter>(z)
    }

    #[test]
    fn sea_level_is_standard() {
        assert_relative_eq!(standard_pressure(m(0.0)).get::<pascal>(), 101_325.0);
        assert_relative_eq!(standard_temperature(m(0.0)).get::<degree_celsius>(), 15.0);
    }

    #[test]
    fn standard_profile() {
        assert_relative_eq!(
            standard_pressure(m(1000.0)).get::<pascal>(),
            89_874.5,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            standard_pressure(m(5000.0)).get::<pascal>(),
            54_019.8,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            standard_temperature(m(1000.0)).get::<degree_celsius>(),
            8.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn pressure_vanishes_above_fit_ceiling() {
        for z in [44_331.0, 50_000.0, 1e6] {
            let p = standard_pressure(m(z)).get::<pascal>();
            assert!(p.is_finite(), "non-finite pressure at {z} m");
            assert_relative_eq!(p, 0.0);
        }
        assert!(standard_pressure(m(44_000.0)).get::<pascal>() > 0.0);
    }

    #[test]
    fn below_sea_level() {
        assert_relative_eq!(
            standard_pressure(m(-400.0)).get::<pascal>(),
            106_223.5,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            standard_temperature(m(-400.0)).get::<degree_celsius>(),
            17.6,
            epsilon = 1e-12
        );
    }

    #[test]
    fn standard_station_reduces_to_standard_sea_level() {
        let z = m(1000.0);
        let p_sl = sea_level_pressure(standard_pressure(z), z, standard_temperature(z));
        assert_relative_eq!(p_sl.get::<pascal>(), 101_325.0, max_relative = 1e-5);
    }

    #[test]
    fn station_pressure_inverts_sea_level_pressure() {
        let p = Pressure::new::<pascal>(84_000.0);
        for (z, t) in [(0.0, 20.0), (1500.0, -5.0), (3000.0, 30.0)] {
            let t = ThermodynamicTemperature::new::<degree_celsius>(t);
            let p_sl = sea_level_pressure(p, m(z), t);
            assert!(p_sl >= p);
            assert_relative_eq!(
                station_pressure(p_sl, m(z), t).get::<pascal>(),
                84_000.0,
                max_relative = 1e-12
            );
        }
    }
}
