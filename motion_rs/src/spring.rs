//! Spring physics for scroll-linked smoothing.
//!
//! RK4-integrated damped spring. Scroll-linked values run through a spring
//! rather than being applied linearly so they settle instead of snapping
//! when the scroll position jumps.

use serde::{Deserialize, Serialize};

/// Configuration for a spring animation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// The hero alignment spring: settles without oscillating.
    pub fn hero_align() -> Self {
        Self {
            stiffness: 80.0,
            damping: 30.0,
            mass: 1.0,
        }
    }

    /// Critical damping for this stiffness and mass.
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Will the spring oscillate around its target?
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::hero_align()
    }
}

/// A spring-driven value.
///
/// The settle thresholds are tuned for normalized [0, 1] progress values;
/// within a thousandth of the target with near-zero velocity is
/// imperceptible at that scale.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

const REST_DELTA: f64 = 1e-3;
const REST_VELOCITY: f64 = 5e-3;

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Retarget mid-flight; current value and velocity carry over.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Force the spring to its target with no residual motion.
    pub fn snap_to_target(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_VELOCITY
    }

    /// Advance the simulation by `dt` seconds (RK4).
    pub fn step(&mut self, dt: f64) {
        if self.is_settled() {
            self.snap_to_target();
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f64, v: f64) -> f64 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_to_target() {
        let mut spring = Spring::new(SpringConfig::hero_align(), 0.0);
        spring.set_target(1.0);

        // Four seconds at 60fps; the overdamped tail is slow.
        for _ in 0..240 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn hero_align_does_not_oscillate() {
        let config = SpringConfig::hero_align();
        assert!(config.is_overdamped());

        let mut spring = Spring::new(config, 0.0);
        spring.set_target(1.0);
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
            assert!(spring.value() <= 1.0 + 1e-6, "overshoot at {}", spring.value());
        }
    }

    #[test]
    fn retarget_keeps_velocity() {
        let mut spring = Spring::new(SpringConfig::hero_align(), 0.0);
        spring.set_target(1.0);
        for _ in 0..10 {
            spring.step(1.0 / 60.0);
        }
        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(0.5);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn stable_with_large_steps() {
        let mut spring = Spring::new(SpringConfig::new(400.0, 25.0, 1.0), 0.0);
        spring.set_target(100.0);
        for _ in 0..100 {
            spring.step(0.1);
            assert!(spring.value().is_finite());
            assert!(spring.value() > -500.0 && spring.value() < 2000.0);
        }
    }
}
