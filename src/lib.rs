//! # Twine Psychro
//!
//! Psychrometric properties of moist air and standard-atmosphere helpers for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! All correlations follow the SI formulation of the ASHRAE Handbook of
//! Fundamentals. Quantities cross the API as [`uom`] values, so callers never
//! have to guess whether a temperature is in °C or K.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: The psychrometric conversion network, the standard
//!   atmosphere, and supporting utilities used by models.
//!
//! ## Errors
//!
//! Every conversion returns a [`PsychroResult`](support::psychro::PsychroResult).
//! Failures are typed (for example an out-of-range relative humidity is
//! reported as [`PsychroError::InvalidRelativeHumidity`](support::psychro::PsychroError::InvalidRelativeHumidity))
//! and propagate unchanged through every dependent conversion.
//!
//! The computational core never logs. Reporting failures is left to callers,
//! which can use [`support::diagnostics::Report`] to forward them to the
//! [`log`] facade.

pub mod models;
pub mod support;
