//! Psychrometric properties of moist air.
//!
//! This module converts between the quantities that describe the water
//! content of air (dry-bulb, wet-bulb, and dew-point temperatures, relative
//! humidity, humidity ratio, vapor pressure) at a given atmospheric pressure,
//! and derives enthalpy, specific volume, density, degree of saturation, and
//! vapor-pressure deficit from them.
//!
//! # Structure
//!
//! The conversions form a directed graph with no cycles. Each function only
//! calls functions below it:
//!
//! - **Saturation**: [`saturation_vapor_pressure`] is the leaf every humidity
//!   conversion depends on; [`saturation_humidity_ratio`] builds on it.
//! - **Converters**: pairwise conversions between vapor pressure, humidity
//!   ratio, relative humidity, and dew point.
//! - **Wet bulb**: the closed-form [`humidity_ratio_from_wet_bulb`] and its
//!   iterative inverse [`wet_bulb_from_humidity_ratio`].
//! - **Derived properties**: enthalpy, volume, density, and friends.
//!
//! # Units
//!
//! Inputs and outputs are [`uom`] quantities. Humidity ratio, relative
//! humidity, specific humidity, and degree of saturation are [`Ratio`]s in
//! kg/kg or as a fraction. Enthalpy and volume are per unit mass of dry air.
//!
//! # Errors
//!
//! Failures are never masked: a conversion whose input fails a precondition
//! returns the specific [`PsychroError`] for it, and every dependent
//! conversion passes that error through unchanged.
//!
//! # Example
//!
//! ```
//! use twine_psychro::support::psychro::{
//!     PsychroResult, humidity_ratio_from_relative_humidity, moist_air_enthalpy,
//! };
//! use uom::si::{
//!     available_energy::kilojoule_per_kilogram,
//!     f64::{Pressure, Ratio, ThermodynamicTemperature},
//!     pressure::pascal, ratio::ratio, thermodynamic_temperature::degree_celsius,
//! };
//!
//! # fn main() -> PsychroResult<()> {
//! let t_db = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! let p = Pressure::new::<pascal>(101_325.0);
//!
//! let w = humidity_ratio_from_relative_humidity(t_db, Ratio::new::<ratio>(0.5), p)?;
//! let h = moist_air_enthalpy(t_db, w)?;
//! assert!((h.get::<kilojoule_per_kilogram>() - 50.3).abs() < 0.1);
//! # Ok(())
//! # }
//! ```
//!
//! [`Ratio`]: uom::si::f64::Ratio

mod check;
mod dew_point;
mod error;
mod humidity_ratio;
mod moist_air;
mod properties;
mod saturation;
mod vapor;
mod wet_bulb;

pub use dew_point::{
    dew_point_from_humidity_ratio, dew_point_from_relative_humidity,
    humidity_ratio_from_dew_point, relative_humidity_from_dew_point,
};
pub use error::{PsychroError, PsychroResult};
pub use humidity_ratio::{
    humidity_ratio_from_relative_humidity, humidity_ratio_from_specific_humidity,
    relative_humidity_from_humidity_ratio, specific_humidity_from_humidity_ratio,
};
pub use moist_air::{
    degree_of_saturation, dry_air_density, dry_air_enthalpy, dry_air_volume, moist_air_density,
    moist_air_enthalpy, moist_air_volume, vapor_pressure_deficit,
};
pub use properties::{
    MoistAirProperties, properties_from_dew_point, properties_from_humidity_ratio,
    properties_from_relative_humidity, properties_from_wet_bulb,
};
pub use saturation::{saturated_air_enthalpy, saturation_humidity_ratio, saturation_vapor_pressure};
pub use vapor::{
    dew_point_from_vapor_pressure, humidity_ratio_from_vapor_pressure,
    relative_humidity_from_vapor_pressure, vapor_pressure_from_dew_point,
    vapor_pressure_from_humidity_ratio, vapor_pressure_from_relative_humidity,
};
pub use wet_bulb::{
    WetBulbConfig, dew_point_from_wet_bulb, humidity_ratio_from_wet_bulb,
    relative_humidity_from_wet_bulb, wet_bulb_from_dew_point, wet_bulb_from_humidity_ratio,
    wet_bulb_from_humidity_ratio_with_config, wet_bulb_from_relative_humidity,
};
