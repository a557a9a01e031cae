use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values in [`uom`] does not
/// yield a [`TemperatureInterval`], so the [`minus`](Self::minus) method
/// does it explicitly. Psychrometric formulas use it for the wet-bulb
/// depression and similar intervals.
///
/// For background on this distinction:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289),
/// [#403](https://github.com/iliekturtles/uom/issues/403).
///
/// # Example
///
/// ```
/// use twine_psychro::support::units::TemperatureDifference;
/// use uom::si::{
///     f64::ThermodynamicTemperature, temperature_interval::kelvin as delta_kelvin,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let dry_bulb = ThermodynamicTemperature::new::<degree_celsius>(25.0);
/// let wet_bulb = ThermodynamicTemperature::new::<degree_celsius>(20.0);
/// let depression = dry_bulb.minus(wet_bulb);
/// assert!((depression.get::<delta_kelvin>() - 5.0).abs() < 1e-12);
/// ```
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::{degree_celsius as delta_celsius, degree_fahrenheit as delta_f},
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn wet_bulb_depression() {
        let dry_bulb = ThermodynamicTemperature::new::<degree_celsius>(30.0);
        let wet_bulb = ThermodynamicTemperature::new::<degree_celsius>(18.5);

        assert_relative_eq!(
            dry_bulb.minus(wet_bulb).get::<delta_celsius>(),
            11.5,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            wet_bulb.minus(dry_bulb).get::<delta_f>(),
            -20.7,
            epsilon = 1e-12
        );
    }

    #[test]
    fn mixed_scales() {
        // 25 °C and 77 °F are the same temperature.
        let t_in_c = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let t_in_f = ThermodynamicTemperature::new::<degree_fahrenheit>(77.0);
        assert_relative_eq!(
            t_in_f.minus(t_in_c).get::<delta_celsius>(),
            0.0,
            epsilon = 1e-12
        );
    }
}
