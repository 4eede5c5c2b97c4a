/// Frame clock driving the rotation angles
use std::f64::consts::TAU;

use crate::transform::EulerAngles;

/// Per-axis angular increment per frame and speed multiplier.
///
/// The angle of an axis at frame `t` is `t * speed * step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularMotion {
    pub yaw_step: f64,
    pub pitch_step: f64,
    pub roll_step: f64,
    pub yaw_speed: f64,
    pub pitch_speed: f64,
    pub roll_speed: f64,
}

impl AngularMotion {
    /// Same step and unit speed on every axis
    pub fn uniform(step: f64) -> Self {
        Self {
            yaw_step: step,
            pitch_step: step,
            roll_step: step,
            yaw_speed: 1.0,
            pitch_speed: 1.0,
            roll_speed: 1.0,
        }
    }
}

impl Default for AngularMotion {
    fn default() -> Self {
        Self::uniform(0.01)
    }
}

/// Monotonic frame index, started at zero and advanced once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderClock {
    frame_index: u64,
}

impl RenderClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn advance(&mut self) {
        self.frame_index = self.frame_index.wrapping_add(1);
    }

    /// Rotation angles for the current frame, reduced to `[0, 2π)`
    pub fn angles(&self, motion: &AngularMotion) -> EulerAngles {
        let t = self.frame_index as f64;
        EulerAngles::new(
            (t * motion.yaw_speed * motion.yaw_step).rem_euclid(TAU),
            (t * motion.pitch_speed * motion.pitch_step).rem_euclid(TAU),
            (t * motion.roll_speed * motion.roll_step).rem_euclid(TAU),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let clock = RenderClock::new();
        assert_eq!(clock.frame_index(), 0);
        assert_eq!(clock.angles(&AngularMotion::default()), EulerAngles::zero());
    }

    #[test]
    fn test_linear_angle_growth() {
        let motion = AngularMotion::uniform(0.05);
        let mut clock = RenderClock::new();
        for _ in 0..20 {
            let before = clock.angles(&motion);
            clock.advance();
            let after = clock.angles(&motion);
            assert!((after.alpha - before.alpha - 0.05).abs() < 1e-12);
            assert!((after.beta - before.beta - 0.05).abs() < 1e-12);
            assert!((after.gamma - before.gamma - 0.05).abs() < 1e-12);
        }
        assert_eq!(clock.frame_index(), 20);
    }

    #[test]
    fn test_independent_axes() {
        let motion = AngularMotion {
            yaw_speed: 2.0,
            pitch_speed: 0.0,
            ..AngularMotion::uniform(0.1)
        };
        let mut clock = RenderClock::new();
        clock.advance();
        clock.advance();
        let angles = clock.angles(&motion);
        assert!((angles.alpha - 0.4).abs() < 1e-12);
        assert_eq!(angles.beta, 0.0);
        assert!((angles.gamma - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_angles_wrap_into_one_turn() {
        let clock = RenderClock {
            frame_index: 10_000_000,
        };
        let angles = clock.angles(&AngularMotion::default());
        for angle in [angles.alpha, angles.beta, angles.gamma] {
            assert!((0.0..TAU).contains(&angle));
        }
        // 100000 radians, reduced
        assert!((angles.alpha - 100_000f64.rem_euclid(TAU)).abs() < 1e-6);
    }

    #[test]
    fn test_advance_wraps_instead_of_panicking() {
        let mut clock = RenderClock {
            frame_index: u64::MAX,
        };
        clock.advance();
        assert_eq!(clock.frame_index(), 0);
    }
}
