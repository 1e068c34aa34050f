use serde::{Deserialize, Serialize};

use crate::domain::errors::AppError;

/// Duration of every view transition, in milliseconds
pub const DURATION_MS: f64 = 100.0;
/// Padding applied to both window edges for the second vertical-fit candidate
pub const EPSILON: f64 = 0.005;
/// Weight of the exact-window fit; the epsilon-padded fit gets the remainder
pub const EXACT_WINDOW_WEIGHT: f64 = 0.5;
/// Assumed average pixel width of one axis label
pub const AVERAGE_TICK_PX: f64 = 80.0;
/// Narrowest window the drag handles may produce, in pixels
pub const MIN_WINDOW_PX: f64 = 30.0;

/// Tunables for scale fitting, tick decimation and input pacing.
///
/// Deserialized from the host with every field optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationConfig {
    pub duration: f64,
    pub epsilon: f64,
    pub exact_window_weight: f64,
    pub average_tick: f64,
    pub min_window_px: f64,
    pub throttle_ms: f64,
    pub width_padding: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: DURATION_MS,
            epsilon: EPSILON,
            exact_window_weight: EXACT_WINDOW_WEIGHT,
            average_tick: AVERAGE_TICK_PX,
            min_window_px: MIN_WINDOW_PX,
            throttle_ms: DURATION_MS,
            width_padding: 40.0,
        }
    }
}

impl AnimationConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.duration > 0.0) {
            return Err(AppError::ValidationError("duration must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.exact_window_weight) {
            return Err(AppError::ValidationError("exactWindowWeight must lie in [0, 1]".to_string()));
        }
        if !(self.epsilon >= 0.0) || !(self.average_tick > 0.0) || !(self.min_window_px >= 0.0) {
            return Err(AppError::ValidationError(
                "epsilon, averageTick and minWindowPx must be non-negative".to_string(),
            ));
        }
        if !(self.throttle_ms >= 0.0) || !(self.width_padding >= 0.0) {
            return Err(AppError::ValidationError(
                "throttleMs and widthPadding must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AnimationConfig::from_json(r#"{"duration": 250}"#).unwrap();
        assert_eq!(config.duration, 250.0);
        assert_eq!(config.epsilon, EPSILON);
        assert_eq!(config.exact_window_weight, EXACT_WINDOW_WEIGHT);
    }

    #[test]
    fn rejects_out_of_range_weight() {
        assert!(AnimationConfig::from_json(r#"{"exactWindowWeight": 1.5}"#).is_err());
    }

    #[test]
    fn rejects_negative_pacing() {
        assert!(AnimationConfig::from_json(r#"{"throttleMs": -1}"#).is_err());
        assert!(AnimationConfig::from_json(r#"{"widthPadding": -40}"#).is_err());
        assert!(AnimationConfig::from_json(r#"{"throttleMs": 0, "widthPadding": 0}"#).is_ok());
    }
}
