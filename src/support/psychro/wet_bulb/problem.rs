//! Problem formulation for the wet-bulb search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::psychro::PsychroError;

/// A candidate wet bulb and the humidity ratio it implies.
#[derive(Debug, Clone, Copy)]
pub(super) struct Candidate {
    pub(super) wet_bulb: ThermodynamicTemperature,
    pub(super) hum_ratio: Ratio,
}

/// Model evaluating the closed-form humidity ratio for a candidate wet bulb.
///
/// Dry bulb and pressure are fixed; the wet bulb is the sole input.
pub(super) struct WetBulbModel {
    dry_bulb: ThermodynamicTemperature,
    pressure: Pressure,
}

impl WetBulbModel {
    pub(super) fn new(dry_bulb: ThermodynamicTemperature, pressure: Pressure) -> Self {
        Self { dry_bulb, pressure }
    }
}

impl Model for WetBulbModel {
    type Input = ThermodynamicTemperature;
    type Output = Candidate;
    type Error = PsychroError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let hum_ratio = super::humidity_ratio_from_wet_bulb(self.dry_bulb, *input, self.pressure)?;
        Ok(Candidate {
            wet_bulb: *input,
            hum_ratio,
        })
    }
}

/// Equation problem matching a target humidity ratio.
///
/// Computes the residual as `W* − W`, which increases with the wet bulb.
pub(super) struct WetBulbProblem {
    target: Ratio,
}

impl WetBulbProblem {
    pub(super) fn new(target: Ratio) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for WetBulbProblem {
    type Input = ThermodynamicTemperature;
    type Output = Candidate;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<degree_celsius>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.hum_ratio.get::<ratio>() - self.target.get::<ratio>()])
    }
}
