use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Ratio, TemperatureInterval},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
};

/// Solver configuration for the wet-bulb temperature search.
#[derive(Debug, Clone, Copy)]
pub struct WetBulbConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the width of the wet-bulb bracket.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance for the humidity ratio residual (computed - target).
    pub hum_ratio_tol: Ratio,
}

impl Default for WetBulbConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-3),
            hum_ratio_tol: Ratio::new::<ratio>(1e-12),
        }
    }
}

impl WetBulbConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.hum_ratio_tol.get::<ratio>(),
        }
    }

    /// Returns the bracket width, in K, at which the search stops.
    pub(super) fn temp_tol_kelvin(&self) -> f64 {
        self.temp_tol.get::<delta_kelvin>()
    }
}
