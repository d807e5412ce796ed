//! Construction parameters for a simulation.
//!
//! `SimulationConfig` is what the JS side hands over (as JSON) when it wants
//! something other than the defaults. Every field is optional in JSON:
//!
//! ```json
//! {
//!   "count": 50,
//!   "radius": 0.01,
//!   "damping": 0.7,
//!   "gravity": 0.0,
//!   "velocity_min": 0.0,
//!   "velocity_max": 0.01,
//!   "seed": 12345
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::error::SimulationError;

pub const DEFAULT_COUNT: usize = 1000;
pub const DEFAULT_RADIUS: f32 = 0.05;
pub const DEFAULT_DAMPING: f32 = 0.7;
pub const DEFAULT_GRAVITY: f32 = 0.0;
pub const DEFAULT_VELOCITY_MIN: f32 = 0.0;
pub const DEFAULT_VELOCITY_MAX: f32 = 0.01;
pub const DEFAULT_SEED: u32 = 12345;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of bodies, fixed for the simulation's lifetime
    pub count: usize,
    /// Shared radius in unit-square coordinates
    pub radius: f32,
    /// Per-body damping applied to bounces and collision impulses
    pub damping: f32,
    /// Downward acceleration added to vy each step
    pub gravity: f32,
    /// Lower bound of the uniform initial velocity range (per axis)
    pub velocity_min: f32,
    /// Upper bound (exclusive) of the initial velocity range
    pub velocity_max: f32,
    /// xorshift seed; zero is remapped since xorshift sticks at zero
    pub seed: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            radius: DEFAULT_RADIUS,
            damping: DEFAULT_DAMPING,
            gravity: DEFAULT_GRAVITY,
            velocity_min: DEFAULT_VELOCITY_MIN,
            velocity_max: DEFAULT_VELOCITY_MAX,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationConfig {
    pub fn new(count: usize, radius: f32) -> Self {
        Self {
            count,
            radius,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.count == 0 {
            return Err(SimulationError::invalid("count must be greater than zero"));
        }
        validate_radius(self.radius)?;
        validate_damping(self.damping)?;
        if !self.gravity.is_finite() {
            return Err(SimulationError::invalid("gravity must be finite"));
        }
        if !self.velocity_min.is_finite()
            || !self.velocity_max.is_finite()
            || self.velocity_min > self.velocity_max
        {
            return Err(SimulationError::invalid(format!(
                "velocity range [{}, {}) is not a valid interval",
                self.velocity_min, self.velocity_max
            )));
        }
        Ok(())
    }
}

/// A body must fit inside the unit square, so `0 < radius < 0.5`.
pub(crate) fn validate_radius(radius: f32) -> Result<(), SimulationError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(SimulationError::invalid(format!(
            "radius must be positive, got {radius}"
        )));
    }
    if 2.0 * radius >= 1.0 {
        return Err(SimulationError::invalid(format!(
            "radius {radius} does not fit in the unit square"
        )));
    }
    Ok(())
}

pub(crate) fn validate_damping(damping: f32) -> Result<(), SimulationError> {
    if !(damping > 0.0 && damping <= 1.0) {
        return Err(SimulationError::invalid(format!(
            "damping must be in (0, 1], got {damping}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = SimulationConfig::from_json("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let config = SimulationConfig::from_json(r#"{"count": 50, "radius": 0.01}"#).unwrap();
        assert_eq!(config.count, 50);
        assert_eq!(config.radius, 0.01);
        assert_eq!(config.damping, DEFAULT_DAMPING);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SimulationConfig::from_json("{count: }").unwrap_err();
        assert!(matches!(err, SimulationError::Parse(_)));
    }

    #[test]
    fn rejects_zero_count_and_bad_radius() {
        assert!(matches!(
            SimulationConfig::new(0, 0.05).validate(),
            Err(SimulationError::InvalidConfiguration(_))
        ));
        assert!(SimulationConfig::new(10, 0.0).validate().is_err());
        assert!(SimulationConfig::new(10, -0.1).validate().is_err());
        assert!(SimulationConfig::new(10, f32::NAN).validate().is_err());
        assert!(SimulationConfig::new(10, 0.5).validate().is_err());
    }

    #[test]
    fn rejects_damping_outside_unit_interval() {
        let mut config = SimulationConfig::default();
        config.damping = 0.0;
        assert!(config.validate().is_err());
        config.damping = 1.5;
        assert!(config.validate().is_err());
        config.damping = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_velocity_range() {
        let mut config = SimulationConfig::default();
        config.velocity_min = 0.5;
        config.velocity_max = 0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn json_survives_a_trip_through_to_json() {
        let mut config = SimulationConfig::new(7, 0.02);
        config.gravity = 0.25;
        let back = SimulationConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }
}
