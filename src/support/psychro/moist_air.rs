//! Derived properties of moist and dry air.
//!
//! Enthalpies and volumes are expressed per unit mass of dry air.

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, Pressure, Ratio, SpecificVolume, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::{kilopascal, pascal},
    ratio::ratio,
    specific_volume::cubic_meter_per_kilogram,
};

use crate::support::units::SpecificEnthalpy;

use super::{
    PsychroResult, check, humidity_ratio,
    saturation::{self, ZERO_CELSIUS_IN_KELVIN, celsius},
};

/// Specific gas constant of dry air, in kJ/kg·K.
const DRY_AIR_GAS_CONSTANT: f64 = 0.287_042;

/// Ratio of the gas constant of water vapor to that of dry air.
const VAPOR_GAS_CONSTANT_RATIO: f64 = 1.607_858;

/// Returns the enthalpy of dry air, `h = 1.006·T` kJ/kg.
#[must_use]
pub fn dry_air_enthalpy(dry_bulb: ThermodynamicTemperature) -> SpecificEnthalpy {
    SpecificEnthalpy::new::<joule_per_kilogram>(1006.0 * celsius(dry_bulb))
}

/// Returns the specific volume of dry air from the ideal gas law.
#[must_use]
pub fn dry_air_volume(dry_bulb: ThermodynamicTemperature, pressure: Pressure) -> SpecificVolume {
    let t_k = celsius(dry_bulb) + ZERO_CELSIUS_IN_KELVIN;
    let p_kpa = pressure.get::<kilopascal>();

    SpecificVolume::new::<cubic_meter_per_kilogram>(DRY_AIR_GAS_CONSTANT * t_k / p_kpa)
}

/// Returns the density of dry air.
#[must_use]
pub fn dry_air_density(dry_bulb: ThermodynamicTemperature, pressure: Pressure) -> MassDensity {
    let v = dry_air_volume(dry_bulb, pressure).get::<cubic_meter_per_kilogram>();
    MassDensity::new::<kilogram_per_cubic_meter>(1.0 / v)
}

/// Returns the enthalpy of moist air.
///
/// Computes `h = 1.006·T + W·(2501 + 1.86·T)` kJ/kg.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidHumidityRatio`](super::PsychroError::InvalidHumidityRatio)
/// if `W ≤ 0`.
pub fn moist_air_enthalpy(
    dry_bulb: ThermodynamicTemperature,
    hum_ratio: Ratio,
) -> PsychroResult<SpecificEnthalpy> {
    let w = check::humidity_ratio(hum_ratio)?;
    let t = celsius(dry_bulb);

    Ok(SpecificEnthalpy::new::<joule_per_kilogram>(
        (1.006 * t + w * (2501.0 + 1.86 * t)) * 1000.0,
    ))
}

/// Returns the specific volume of moist air.
///
/// Computes `v = 0.287042·(T + 273.15)·(1 + 1.607858·W) / p` with `p` in kPa.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidHumidityRatio`](super::PsychroError::InvalidHumidityRatio)
/// if `W ≤ 0`.
pub fn moist_air_volume(
    dry_bulb: ThermodynamicTemperature,
    hum_ratio: Ratio,
    pressure: Pressure,
) -> PsychroResult<SpecificVolume> {
    let w = check::humidity_ratio(hum_ratio)?;
    let v_da = dry_air_volume(dry_bulb, pressure);

    Ok(v_da * (1.0 + VAPOR_GAS_CONSTANT_RATIO * w))
}

/// Returns the density of moist air, `ρ = (1 + W) / v`.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidHumidityRatio`](super::PsychroError::InvalidHumidityRatio)
/// if `W ≤ 0`.
pub fn moist_air_density(
    dry_bulb: ThermodynamicTemperature,
    hum_ratio: Ratio,
    pressure: Pressure,
) -> PsychroResult<MassDensity> {
    let v = moist_air_volume(dry_bulb, hum_ratio, pressure)?.get::<cubic_meter_per_kilogram>();
    let w = hum_ratio.get::<ratio>();

    Ok(MassDensity::new::<kilogram_per_cubic_meter>((1.0 + w) / v))
}

/// Returns the degree of saturation, `μ = W / W_s`.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidHumidityRatio`](super::PsychroError::InvalidHumidityRatio)
/// if `W ≤ 0`, or propagates the domain error of the saturation correlation.
pub fn degree_of_saturation(
    dry_bulb: ThermodynamicTemperature,
    hum_ratio: Ratio,
    pressure: Pressure,
) -> PsychroResult<Ratio> {
    let w = check::humidity_ratio(hum_ratio)?;
    let w_s = saturation::saturation_humidity_ratio(dry_bulb, pressure)?.get::<ratio>();

    Ok(Ratio::new::<ratio>(w / w_s))
}

/// Returns the vapor pressure deficit, `p_ws·(1 − RH)`.
///
/// # Errors
///
/// Returns [`PsychroError::InvalidHumidityRatio`](super::PsychroError::InvalidHumidityRatio)
/// if `W ≤ 0`, or propagates the domain error of the saturation correlation.
pub fn vapor_pressure_deficit(
    dry_bulb: ThermodynamicTemperature,
    hum_ratio: Ratio,
    pressure: Pressure,
) -> PsychroResult<Pressure> {
    let rh = humidity_ratio::relative_humidity_from_humidity_ratio(dry_bulb, hum_ratio, pressure)?
        .get::<ratio>();
    let p_ws = saturation::saturation_vapor_pressure(dry_bulb)?.get::<pascal>();

    Ok(Pressure::new::<pascal>(p_ws * (1.0 - rh)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram, thermodynamic_temperature::degree_celsius,
    };

    use crate::support::psychro::PsychroError;

    fn temp(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn atm() -> Pressure {
        Pressure::new::<pascal>(101_325.0)
    }

    fn w(value: f64) -> Ratio {
        Ratio::new::<ratio>(value)
    }

    #[test]
    fn half_saturated_room_air_enthalpy() {
        let hum_ratio =
            humidity_ratio::humidity_ratio_from_relative_humidity(temp(25.0), w(0.5), atm())
                .unwrap();
        let h = moist_air_enthalpy(temp(25.0), hum_ratio).unwrap();
        assert_relative_eq!(h.get::<joule_per_kilogram>(), 50_322.0, max_relative = 1e-3);
    }

    #[test]
    fn moist_air_enthalpy_tends_to_dry_air() {
        let t = temp(30.0);
        let h = moist_air_enthalpy(t, w(1e-12)).unwrap();
        assert_relative_eq!(
            h.get::<kilojoule_per_kilogram>(),
            dry_air_enthalpy(t).get::<kilojoule_per_kilogram>(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn dry_air_at_standard_conditions() {
        let v = dry_air_volume(temp(20.0), atm());
        assert_relative_eq!(v.get::<cubic_meter_per_kilogram>(), 0.8305, max_relative = 1e-3);

        let rho = dry_air_density(temp(20.0), atm());
        assert_relative_eq!(rho.get::<kilogram_per_cubic_meter>(), 1.2042, max_relative = 1e-3);
    }

    #[test]
    fn density_times_volume_is_one_plus_humidity_ratio() {
        for (t, p, hum) in [
            (-10.0, 80_000.0, 0.001),
            (25.0, 101_325.0, 0.009_88),
            (45.0, 120_000.0, 0.04),
        ] {
            let p = Pressure::new::<pascal>(p);
            let v = moist_air_volume(temp(t), w(hum), p).unwrap();
            let rho = moist_air_density(temp(t), w(hum), p).unwrap();

            let product =
                rho.get::<kilogram_per_cubic_meter>() * v.get::<cubic_meter_per_kilogram>();
            assert_relative_eq!(product, 1.0 + hum, epsilon = 1e-12);
        }
    }

    #[test]
    fn degree_of_saturation_of_saturated_air_is_one() {
        let w_s = saturation::saturation_humidity_ratio(temp(25.0), atm()).unwrap();
        let mu = degree_of_saturation(temp(25.0), w_s, atm()).unwrap();
        assert_relative_eq!(mu.get::<ratio>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn vapor_pressure_deficit_of_half_saturated_air() {
        let hum_ratio =
            humidity_ratio::humidity_ratio_from_relative_humidity(temp(25.0), w(0.5), atm())
                .unwrap();
        let vpd = vapor_pressure_deficit(temp(25.0), hum_ratio, atm()).unwrap();
        assert_relative_eq!(vpd.get::<pascal>(), 1584.6, max_relative = 1e-4);
    }

    #[test]
    fn rejects_non_positive_humidity_ratio() {
        let t = temp(25.0);

        assert!(matches!(
            moist_air_enthalpy(t, w(0.0)),
            Err(PsychroError::InvalidHumidityRatio { .. })
        ));
        assert!(matches!(
            moist_air_volume(t, w(-0.01), atm()),
            Err(PsychroError::InvalidHumidityRatio { .. })
        ));
        assert!(matches!(
            moist_air_density(t, w(0.0), atm()),
            Err(PsychroError::InvalidHumidityRatio { .. })
        ));
        assert!(matches!(
            degree_of_saturation(t, w(0.0), atm()),
            Err(PsychroError::InvalidHumidityRatio { .. })
        ));
        assert!(matches!(
            vapor_pressure_deficit(t, w(0.0), atm()),
            Err(PsychroError::InvalidHumidityRatio { .. })
        ));
    }
}
