//! Complete moist-air states from a dry bulb and one humidity descriptor.

use uom::si::f64::{MassDensity, Pressure, Ratio, SpecificVolume, ThermodynamicTemperature};

use crate::support::units::SpecificEnthalpy;

use super::{
    PsychroResult, check, dew_point, humidity_ratio, moist_air, vapor,
    wet_bulb::{self, WetBulbConfig},
};

/// Every psychrometric property of a moist-air state.
///
/// Enthalpy and specific volume are per unit mass of dry air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAirProperties {
    pub dry_bulb: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub hum_ratio: Ratio,
    pub wet_bulb: ThermodynamicTemperature,
    pub dew_point: ThermodynamicTemperature,
    pub rel_hum: Ratio,
    pub vap_pres: Pressure,
    pub enthalpy: SpecificEnthalpy,
    pub volume: SpecificVolume,
    pub density: MassDensity,
    pub degree_of_saturation: Ratio,
    pub vap_pres_deficit: Pressure,
}

/// Computes all properties given dry bulb, wet bulb, and pressure.
///
/// # Errors
///
/// Propagates the first failing conversion.
pub fn properties_from_wet_bulb(
    dry_bulb: ThermodynamicTemperature,
    wet_bulb: ThermodynamicTemperature,
    pressure: Pressure,
) -> PsychroResult<MoistAirProperties> {
    let hum_ratio = wet_bulb::humidity_ratio_from_wet_bulb(dry_bulb, wet_bulb, pressure)?;
    let dew_point = dew_point::dew_point_from_humidity_ratio(dry_bulb, hum_ratio, pressure)?;
    complete(dry_bulb, pressure, hum_ratio, wet_bulb, dew_point)
}

/// Computes all properties given dry bulb, dew point, and pressure.
///
/// # Errors
///
/// Propagates the first failing conversion.
pub fn properties_from_dew_point(
    dry_bulb: ThermodynamicTemperature,
    dew_point: ThermodynamicTemperature,
    pressure: Pressure,
    config: &WetBulbConfig,
) -> PsychroResult<MoistAirProperties> {
    check::dew_point_below(dry_bulb, dew_point)?;
    let hum_ratio = dew_point::humidity_ratio_from_dew_point(dew_point, pressure)?;
    let wet_bulb =
        wet_bulb::wet_bulb_from_humidity_ratio_with_config(dry_bulb, hum_ratio, pressure, config)?;
    complete(dry_bulb, pressure, hum_ratio, wet_bulb, dew_point)
}

/// Computes all properties given dry bulb, relative humidity, and pressure.
///
/// # Errors
///
/// Propagates the first failing conversion.
pub fn properties_from_relative_humidity(
    dry_bulb: ThermodynamicTemperature,
    rel_hum: Ratio,
    pressure: Pressure,
    config: &WetBulbConfig,
) -> PsychroResult<MoistAirProperties> {
    let hum_ratio =
        humidity_ratio::humidity_ratio_from_relative_humidity(dry_bulb, rel_hum, pressure)?;
    properties_from_humidity_ratio(dry_bulb, hum_ratio, pressure, config)
}

/// Computes all properties given dry bulb, humidity ratio, and pressure.
///
/// # Errors
///
/// Propagates the first failing conversion.
pub fn properties_from_humidity_ratio(
    dry_bulb: ThermodynamicTemperature,
    hum_ratio: Ratio,
    pressure: Pressure,
    config: &WetBulbConfig,
) -> PsychroResult<MoistAirProperties> {
    let wet_bulb =
        wet_bulb::wet_bulb_from_humidity_ratio_with_config(dry_bulb, hum_ratio, pressure, config)?;
    let dew_point = dew_point::dew_point_from_humidity_ratio(dry_bulb, hum_ratio, pressure)?;
    complete(dry_bulb, pressure, hum_ratio, wet_bulb, dew_point)
}

fn complete(
    dry_bulb: ThermodynamicTemperature,
    pressure: Pressure,
    hum_ratio: Ratio,
    wet_bulb: ThermodynamicTemperature,
    dew_point: ThermodynamicTemperature,
) -> PsychroResult<MoistAirProperties> {
    let vap_pres = vapor::vapor_pressure_from_humidity_ratio(hum_ratio, pressure)?;

    Ok(MoistAirProperties {
        dry_bulb,
        pressure,
        hum_ratio,
        wet_bulb,
        dew_point,
        rel_hum: vapor::relative_humidity_from_vapor_pressure(dry_bulb, vap_pres)?,
        vap_pres,
        enthalpy: moist_air::moist_air_enthalpy(dry_bulb, hum_ratio)?,
        volume: moist_air::moist_air_volume(dry_bulb, hum_ratio, pressure)?,
        density: moist_air::moist_air_density(dry_bulb, hum_ratio, pressure)?,
        degree_of_saturation: moist_air::degree_of_saturation(dry_bulb, hum_ratio, pressure)?,
        vap_pres_deficit: moist_air::vapor_pressure_deficit(dry_bulb, hum_ratio, pressure)?,
    })
}
