//! Moist-air state model.

mod input;

pub use input::{Humidity, MoistAirInput};

use twine_core::Model;

use crate::support::{
    diagnostics::Report,
    psychro::{
        MoistAirProperties, PsychroError, WetBulbConfig, properties_from_dew_point,
        properties_from_humidity_ratio, properties_from_relative_humidity,
        properties_from_wet_bulb,
    },
};

/// Evaluates every psychrometric property of a moist-air state.
///
/// The state is given by dry bulb, pressure, and one [`Humidity`]
/// descriptor. Failures are logged at `warn` level before being returned.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_psychro::models::psychro::{Humidity, MoistAir, MoistAirInput};
/// use uom::si::{
///     f64::{Pressure, Ratio, ThermodynamicTemperature},
///     pressure::pascal, ratio::ratio, thermodynamic_temperature::degree_celsius,
/// };
///
/// let model = MoistAir::default();
/// let state = model
///     .call(&MoistAirInput {
///         dry_bulb: ThermodynamicTemperature::new::<degree_celsius>(25.0),
///         pressure: Pressure::new::<pascal>(101_325.0),
///         humidity: Humidity::RelativeHumidity(Ratio::new::<ratio>(0.5)),
///     })
///     .unwrap();
///
/// assert!((state.hum_ratio.get::<ratio>() - 0.00988).abs() < 1e-5);
/// assert!(state.wet_bulb < state.dry_bulb);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MoistAir {
    config: WetBulbConfig,
}

impl MoistAir {
    /// Creates a model that uses `config` whenever a wet bulb must be solved for.
    #[must_use]
    pub fn new(config: WetBulbConfig) -> Self {
        Self { config }
    }
}

impl Model for MoistAir {
    type Input = MoistAirInput;
    type Output = MoistAirProperties;
    type Error = PsychroError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let MoistAirInput {
            dry_bulb,
            pressure,
            humidity,
        } = *input;

        match humidity {
            Humidity::WetBulb(wet_bulb) => properties_from_wet_bulb(dry_bulb, wet_bulb, pressure)
                .report("moist air from wet bulb"),
            Humidity::DewPoint(dew_point) => {
                properties_from_dew_point(dry_bulb, dew_point, pressure, &self.config)
                    .report("moist air from dew point")
            }
            Humidity::RelativeHumidity(rel_hum) => {
                properties_from_relative_humidity(dry_bulb, rel_hum, pressure, &self.config)
                    .report("moist air from relative humidity")
            }
            Humidity::HumidityRatio(hum_ratio) => {
                properties_from_humidity_ratio(dry_bulb, hum_ratio, pressure, &self.config)
                    .report("moist air from humidity ratio")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Pressure, Ratio, ThermodynamicTemperature},
        pressure::pascal,
        ratio::ratio,
        thermodynamic_temperature::degree_celsius,
    };

    fn input(dry_bulb: f64, humidity: Humidity) -> MoistAirInput {
        MoistAirInput {
            dry_bulb: ThermodynamicTemperature::new::<degree_celsius>(dry_bulb),
            pressure: Pressure::new::<pascal>(101_325.0),
            humidity,
        }
    }

    #[test]
    fn every_descriptor_recovers_the_same_state() {
        let model = MoistAir::default();
        let reference = model
            .call(&input(
                30.0,
                Humidity::HumidityRatio(Ratio::new::<ratio>(0.012)),
            ))
            .unwrap();

        for humidity in [
            Humidity::WetBulb(reference.wet_bulb),
            Humidity::DewPoint(reference.dew_point),
            Humidity::RelativeHumidity(reference.rel_hum),
        ] {
            let state = model.call(&input(30.0, humidity)).unwrap();
            assert_relative_eq!(
                state.hum_ratio.get::<ratio>(),
                0.012,
                max_relative = 3e-3
            );
            assert_relative_eq!(
                state.wet_bulb.get::<degree_celsius>(),
                reference.wet_bulb.get::<degree_celsius>(),
                epsilon = 0.05
            );
        }
    }

    #[test]
    fn room_air_from_wet_bulb() {
        let state = MoistAir::default()
            .call(&input(
                25.0,
                Humidity::WetBulb(ThermodynamicTemperature::new::<degree_celsius>(20.0)),
            ))
            .unwrap();

        assert_relative_eq!(state.hum_ratio.get::<ratio>(), 0.012_598, max_relative = 1e-3);
        assert_relative_eq!(state.rel_hum.get::<ratio>(), 0.634_75, max_relative = 3e-3);
        assert!(state.dew_point < state.wet_bulb);
    }

    #[test]
    fn custom_config_is_used() {
        let config = WetBulbConfig {
            max_iters: 2,
            ..WetBulbConfig::default()
        };
        let result = MoistAir::new(config).call(&input(
            40.0,
            Humidity::HumidityRatio(Ratio::new::<ratio>(0.005)),
        ));
        assert!(matches!(result, Err(PsychroError::MaxIters { .. })));
    }

    #[test]
    fn invalid_descriptor_is_returned() {
        let result = MoistAir::default().call(&input(
            25.0,
            Humidity::RelativeHumidity(Ratio::new::<ratio>(1.5)),
        ));
        assert!(matches!(
            result,
            Err(PsychroError::InvalidRelativeHumidity { .. })
        ));
    }
}
