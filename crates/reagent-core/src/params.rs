//! Gray-Scott model parameters and named presets.

use indexmap::IndexMap;

use crate::error::ParamsError;

/// Parameters of the Gray-Scott reaction-diffusion system.
///
/// Immutable for the life of a run. Any finite value is accepted: values
/// outside the usual pattern-forming region simply produce different (and
/// possibly divergent) behaviour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrayScottParams {
    /// Feed rate `f`: how fast A is replenished.
    pub feed_rate: f64,
    /// Kill rate `k`: how fast B is removed.
    pub kill_rate: f64,
    /// Diffusion coefficient of A (`Da`).
    pub diffusion_a: f64,
    /// Diffusion coefficient of B (`Db`).
    pub diffusion_b: f64,
    /// Multiplier folded into every step's `dt`.
    pub time_scale: f64,
}

impl Default for GrayScottParams {
    /// `Da = 1.0, Db = 0.4, f = 0.04, k = 0.06, time_scale = 1.0`.
    fn default() -> Self {
        Self {
            feed_rate: 0.04,
            kill_rate: 0.06,
            diffusion_a: 1.0,
            diffusion_b: 0.4,
            time_scale: 1.0,
        }
    }
}

impl GrayScottParams {
    /// Default diffusion and time scale with the given feed and kill rates.
    pub fn with_rates(feed_rate: f64, kill_rate: f64) -> Self {
        Self {
            feed_rate,
            kill_rate,
            ..Self::default()
        }
    }

    /// Check that every parameter is finite.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let checks = [
            ("feed_rate", self.feed_rate),
            ("kill_rate", self.kill_rate),
            ("diffusion_a", self.diffusion_a),
            ("diffusion_b", self.diffusion_b),
            ("time_scale", self.time_scale),
        ];
        for (name, value) in checks {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite { name, value });
            }
        }
        Ok(())
    }

    /// Named parameter sets, in a stable order.
    ///
    /// | name | f | k |
    /// |------|---|---|
    /// | `default` | 0.040 | 0.060 |
    /// | `flower` | 0.055 | 0.062 |
    /// | `broad-flower` | 0.060 | 0.060 |
    /// | `round-flower` | 0.050 | 0.060 |
    pub fn presets() -> IndexMap<&'static str, GrayScottParams> {
        let mut map = IndexMap::new();
        map.insert("default", Self::default());
        map.insert("flower", Self::with_rates(0.055, 0.062));
        map.insert("broad-flower", Self::with_rates(0.06, 0.06));
        map.insert("round-flower", Self::with_rates(0.05, 0.06));
        map
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        Self::presets().get(name).copied()
    }
}
