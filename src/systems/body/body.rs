use crate::domain::config::{DEFAULT_DAMPING, DEFAULT_GRAVITY};

use super::vec2::Vec2;

/// Lowest damping the interactive `set_damping` setter will accept
pub const MIN_DAMPING: f32 = 0.01;

/// A circular body living in the unit square [0,1]x[0,1]
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    // === Physics State ===
    /// Position (center)
    pub x: f32,
    pub y: f32,
    /// Velocity (unit-square lengths per time unit)
    pub vx: f32,
    pub vy: f32,

    // === Shape ===
    /// Collision extent and boundary margin, fixed at construction
    pub radius: f32,

    // === Material properties ===
    /// Velocity kept on a wall bounce; also scales collision impulses
    pub damping: f32,
    /// Downward acceleration added to vy each step
    pub gravity: f32,
}

impl Body {
    /// Create a body with default damping and no gravity
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            radius,
            damping: DEFAULT_DAMPING,
            gravity: DEFAULT_GRAVITY,
        }
    }

    /// Store `damping` as given; construction validates it against (0, 1]
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.vx, self.vy)
    }

    /// Set damping (bounciness), clamped to [MIN_DAMPING, 1]
    pub fn set_damping(&mut self, d: f32) {
        self.damping = d.clamp(MIN_DAMPING, 1.0);
    }

    /// Advance one step: gravity, then position, then wall bounce.
    ///
    /// After this returns `radius <= x <= 1 - radius` and likewise for `y`.
    pub fn update_position(&mut self, dt: f32) {
        self.vy += self.gravity * dt;

        self.x += self.vx * dt;
        self.y += self.vy * dt;

        let (x, vx) = bounce_axis(self.x, self.vx, self.radius, self.damping);
        self.x = x;
        self.vx = vx;

        let (y, vy) = bounce_axis(self.y, self.vy, self.radius, self.damping);
        self.y = y;
        self.vy = vy;
    }

    /// True when the body sits on (or past) any wall of the unit square
    pub fn touches_wall(&self) -> bool {
        self.x - self.radius <= 0.0
            || self.x + self.radius >= 1.0
            || self.y - self.radius <= 0.0
            || self.y + self.radius >= 1.0
    }
}

/// Clamp one axis into [radius, 1 - radius], reflecting and damping the
/// velocity. At most one wall is handled per call.
///
/// Tests against the clamp targets directly: `pos + radius > 1` can round
/// to exactly 1.0 while `pos` is still one ulp above `1 - radius`.
#[inline]
fn bounce_axis(pos: f32, vel: f32, radius: f32, damping: f32) -> (f32, f32) {
    let min = radius;
    let max = 1.0 - radius;
    if pos < min {
        (min, vel * -damping)
    } else if pos > max {
        (max, vel * -damping)
    } else {
        (pos, vel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_flight_integrates_velocity() {
        let mut b = Body::new(0.5, 0.5, 0.1, -0.2, 0.05);
        b.update_position(0.5);
        assert!((b.x - 0.55).abs() < 1e-6);
        assert!((b.y - 0.4).abs() < 1e-6);
        assert_eq!(b.vx, 0.1);
        assert_eq!(b.vy, -0.2);
    }

    #[test]
    fn gravity_is_applied_before_moving() {
        let mut b = Body::new(0.5, 0.2, 0.0, 0.0, 0.05).with_gravity(0.1);
        b.update_position(1.0);
        assert!((b.vy - 0.1).abs() < 1e-6);
        assert!((b.y - 0.3).abs() < 1e-6);
    }

    #[test]
    fn upper_wall_clamps_and_reflects() {
        let mut b = Body::new(0.5, 0.98, 0.0, 0.5, 0.05).with_gravity(0.0);
        b.update_position(1.0);
        assert_eq!(b.y, 1.0 - 0.05);
        assert_eq!(b.vy, -0.5 * b.damping);
        assert_eq!(b.x, 0.5);
        assert_eq!(b.vx, 0.0);
    }

    #[test]
    fn lower_wall_clamps_and_reflects() {
        let mut b = Body::new(0.02, 0.5, -0.4, 0.0, 0.05).with_damping(0.5);
        b.update_position(0.1);
        assert_eq!(b.x, 0.05);
        assert_eq!(b.vx, 0.2);
    }

    #[test]
    fn both_axes_bounce_in_the_same_step() {
        let mut b = Body::new(0.97, 0.03, 1.0, -1.0, 0.05).with_damping(1.0);
        b.update_position(0.1);
        assert_eq!(b.x, 1.0 - 0.05);
        assert_eq!(b.y, 0.05);
        assert_eq!(b.vx, -1.0);
        assert_eq!(b.vy, 1.0);
        assert!(b.touches_wall());
    }

    #[test]
    fn set_damping_clamps() {
        let mut b = Body::new(0.5, 0.5, 0.0, 0.0, 0.05);
        b.set_damping(3.0);
        assert_eq!(b.damping, 1.0);
        b.set_damping(-1.0);
        assert_eq!(b.damping, MIN_DAMPING);
    }

    #[test]
    fn with_damping_keeps_small_values() {
        let b = Body::new(0.5, 0.5, 0.0, 0.0, 0.05).with_damping(0.005);
        assert_eq!(b.damping, 0.005);
    }
}
