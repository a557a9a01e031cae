//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units. Converting between °C, K,
//! and °F is left to [`uom`] itself:
//!
//! ```
//! use uom::si::{
//!     f64::ThermodynamicTemperature,
//!     thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin},
//! };
//!
//! let t = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! assert!((t.get::<kelvin>() - 298.15).abs() < 1e-12);
//! assert!((t.get::<degree_fahrenheit>() - 77.0).abs() < 1e-12);
//! ```
//!
//! This module provides the pieces psychrometric formulas need that aren't
//! included in [`uom`]:
//!
//! - [`SpecificEnthalpy`], a named alias for energy per unit mass of dry air.
//! - [`TemperatureDifference`], for subtracting one absolute temperature from
//!   another (e.g., the wet-bulb depression `T_db − T_wb`) to get a
//!   [`TemperatureInterval`](uom::si::f64::TemperatureInterval).

mod quantities;
mod temperature_difference;

pub use quantities::SpecificEnthalpy;
pub use temperature_difference::TemperatureDifference;
