//! Damped springs for bubble motion.

use crate::constants::{SPAWN_SCALE, SPRING_DAMPING, SPRING_STIFFNESS};

/// Integration step cap; larger frame steps are subdivided.
const SUBSTEP: f32 = 1.0 / 240.0;
const REST_DISTANCE: f32 = 0.01;
const REST_VELOCITY: f32 = 0.01;

/// One-dimensional damped spring (unit mass).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    pub fn new(value: f32) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
        }
    }

    /// Start at `from`, heading to `to`.
    pub fn from_to(from: f32, to: f32) -> Self {
        Self {
            position: from,
            target: to,
            ..Self::new(to)
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` with `velocity`, keeping the target.
    pub fn kick(&mut self, value: f32, velocity: f32) {
        self.position = value;
        self.velocity = velocity;
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY
    }

    /// Advance by `dt` seconds. Returns whether the spring is still moving.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }

        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let force = -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
            self.velocity += force * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        !self.is_settled()
    }
}

/// Visual state of one bubble: position, scale and opacity springs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleMotion {
    pub x: Spring,
    pub y: Spring,
    pub scale: Spring,
    pub opacity: Spring,
}

impl BubbleMotion {
    /// A freshly placed bubble: in place, growing and fading in.
    pub fn spawn(x: f32, y: f32) -> Self {
        Self {
            x: Spring::new(x),
            y: Spring::new(y),
            scale: Spring::from_to(SPAWN_SCALE, 1.0),
            opacity: Spring::from_to(0.0, 1.0),
        }
    }

    /// Release at `(x, y)` with `velocity`, then settle on `(target_x, target_y)`.
    pub fn release(&mut self, at: (f32, f32), velocity: (f32, f32), target: (f32, f32)) {
        self.x.set_target(target.0);
        self.y.set_target(target.1);
        self.x.kick(at.0, velocity.0);
        self.y.kick(at.1, velocity.1);
    }

    pub fn step(&mut self, dt: f32) -> bool {
        let moving = [
            self.x.step(dt),
            self.y.step(dt),
            self.scale.step(dt),
            self.opacity.step(dt),
        ];
        moving.iter().any(|m| *m)
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled()
            && self.y.is_settled()
            && self.scale.is_settled()
            && self.opacity.is_settled()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.position.clamp(0.0, 1.0)
    }

    pub fn scale(&self) -> f32 {
        self.scale.position.max(0.05)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_settles_on_target() {
        let mut spring = Spring::from_to(0.0, 100.0);
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.is_settled());
        assert!((spring.position - 100.0).abs() < 0.1);
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let mut spring = Spring::from_to(0.0, 100.0);
        let mut peak: f32 = 0.0;
        for _ in 0..240 {
            spring.step(1.0 / 60.0);
            peak = peak.max(spring.position);
        }
        assert!(peak > 100.0, "expected overshoot, peak was {peak}");
    }

    #[test]
    fn momentum_carries_past_target() {
        let mut spring = Spring::new(50.0);
        spring.kick(50.0, 400.0);
        let mut peak: f32 = 50.0;
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
            peak = peak.max(spring.position);
        }
        assert!(peak > 55.0);
    }

    #[test]
    fn settled_spring_reports_idle() {
        let mut spring = Spring::new(3.0);
        assert!(!spring.step(1.0 / 60.0));
        assert_eq!(spring.position, 3.0);
    }

    #[test]
    fn spawn_grows_and_fades_in() {
        let mut motion = BubbleMotion::spawn(10.0, 20.0);
        assert!(motion.opacity() < 0.01);
        assert!((motion.scale() - SPAWN_SCALE).abs() < 1e-6);
        for _ in 0..600 {
            motion.step(1.0 / 60.0);
        }
        assert!(motion.is_settled());
        assert!((motion.opacity() - 1.0).abs() < 0.01);
        assert_eq!(motion.x.position, 10.0);
    }
}
