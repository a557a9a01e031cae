//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., `psychro`)
//! based on an opinionated taxonomy. This organization may evolve as more
//! models are added.
//!
//! # Model structure
//!
//! The [`twine_core::Model`] implementation should be a thin adapter that
//! delegates to the pure functions in [`crate::support`]. Failures are
//! reported through [`crate::support::diagnostics`] at this layer, never in
//! the computational core.

pub mod psychro;
