use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

/// Specifies the humidity descriptor that fixes the water content of the air.
///
/// Together with the dry bulb and pressure, any one of these fully defines
/// the moist-air state.
#[derive(Debug, Clone, Copy)]
pub enum Humidity {
    /// Thermodynamic wet-bulb temperature.
    WetBulb(ThermodynamicTemperature),

    /// Dew-point temperature.
    DewPoint(ThermodynamicTemperature),

    /// Relative humidity, as a fraction in `(0, 1]`.
    RelativeHumidity(Ratio),

    /// Humidity ratio, in kg water per kg dry air.
    HumidityRatio(Ratio),
}

/// Input to the [`MoistAir`](super::MoistAir) model.
#[derive(Debug, Clone, Copy)]
pub struct MoistAirInput {
    pub dry_bulb: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub humidity: Humidity,
}
