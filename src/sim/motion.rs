//! Per-frame kinematics
//!
//! The player is clamped to the inset region; the axe reflects off the four
//! screen edges. Displacements are floored to whole pixels.

use super::state::{Axe, Player};
use crate::consts::*;

/// Directions held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Whole-pixel displacement for a speed over `dt`
#[inline]
pub fn displacement(speed: f32, dt: f32) -> i32 {
    (speed * dt).floor() as i32
}

impl Player {
    /// Move by `step` pixels along each held direction, never leaving the
    /// region where the whole circle is on screen.
    pub fn step(&mut self, movement: Movement, step: i32) {
        let (min_x, max_x) = (self.radius, SCREEN_WIDTH - self.radius);
        let (min_y, max_y) = (self.radius, SCREEN_HEIGHT - self.radius);

        if movement.right && self.x < max_x {
            self.x = (self.x + step).min(max_x);
        }
        if movement.left && self.x > min_x {
            self.x = (self.x - step).max(min_x);
        }
        if movement.up && self.y > min_y {
            self.y = (self.y - step).max(min_y);
        }
        if movement.down && self.y < max_y {
            self.y = (self.y + step).min(max_y);
        }
    }

    /// Delta-time movement at `speed` pixels/second
    pub fn update(&mut self, movement: Movement, speed: f32, dt: f32) {
        self.step(movement, displacement(speed, dt));
    }
}

impl Axe {
    /// Advance by velocity × dt on both axes, reflecting off screen edges.
    ///
    /// A component is negated exactly when the box leaves
    /// `[0, dimension - length]` on that axis; the box is then put back on
    /// the edge it crossed.
    pub fn update(&mut self, dt: f32) {
        let max_x = SCREEN_WIDTH - self.length;
        let max_y = SCREEN_HEIGHT - self.length;

        self.x += displacement(self.vel.x, dt);
        if self.x < 0 || self.x > max_x {
            self.vel.x = -self.vel.x;
            self.x = self.x.clamp(0, max_x);
        }

        self.y += displacement(self.vel.y, dt);
        if self.y < 0 || self.y > max_y {
            self.vel.y = -self.vel.y;
            self.y = self.y.clamp(0, max_y);
        }
    }

    /// First-iteration motion: move by the per-frame velocity, then flip when
    /// out of range. The box is allowed to overshoot by one step.
    pub fn step_classic(&mut self) {
        let max_y = SCREEN_HEIGHT - self.length;
        self.y += self.vel.y as i32;
        if self.y > max_y || self.y < 0 {
            self.vel.y = -self.vel.y;
        }
    }

    /// Multiply each velocity component by `factor`, capping its magnitude.
    /// Returns true if either component changed.
    pub fn speed_up(&mut self, factor: f32, cap: f32) -> bool {
        let before = self.vel;
        self.vel.x = self.vel.x.signum() * (self.vel.x.abs() * factor).min(cap);
        self.vel.y = self.vel.y.signum() * (self.vel.y.abs() * factor).min(cap);
        self.vel != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ruleset;
    use glam::Vec2;

    #[test]
    fn test_displacement_floors() {
        assert_eq!(displacement(200.0, 1.0 / 60.0), 3);
        assert_eq!(displacement(-200.0, 1.0 / 60.0), -4);
        assert_eq!(displacement(200.0, 1.0), 200);
    }

    #[test]
    fn test_player_moves_diagonally() {
        let mut player = Player::new(Ruleset::Smooth);
        let movement = Movement {
            up: true,
            right: true,
            ..Default::default()
        };
        player.update(movement, PLAYER_SPEED, 0.1);
        assert_eq!((player.x, player.y), (430, 195));
    }

    #[test]
    fn test_player_stops_at_edges() {
        let mut player = Player::new(Ruleset::Smooth);
        player.x = 770;
        player.y = 30;
        let movement = Movement {
            up: true,
            right: true,
            ..Default::default()
        };
        player.update(movement, PLAYER_SPEED, 0.1);
        assert_eq!((player.x, player.y), (775, 25));

        // Already on the edge: gated, no movement
        player.update(movement, PLAYER_SPEED, 0.1);
        assert_eq!((player.x, player.y), (775, 25));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut player = Player::new(Ruleset::Smooth);
        let movement = Movement {
            left: true,
            right: true,
            ..Default::default()
        };
        player.update(movement, PLAYER_SPEED, 0.1);
        assert_eq!(player.x, 400);
    }

    #[test]
    fn test_axe_falls_for_one_second() {
        let mut axe = Axe::new(Ruleset::Scored);
        axe.update(1.0);
        assert_eq!((axe.x, axe.y), (300, 200));
        assert_eq!(axe.vel, Vec2::new(0.0, 200.0));
    }

    #[test]
    fn test_axe_bounces_off_bottom() {
        let mut axe = Axe::new(Ruleset::Scored);
        axe.y = 410;
        axe.update(1.0 / 60.0);
        assert!(axe.vel.y < 0.0);
        assert!(axe.y <= SCREEN_HEIGHT - AXE_LENGTH);
    }

    #[test]
    fn test_axe_bounces_off_left_and_top() {
        let mut axe = Axe::new(Ruleset::Ramped);
        axe.x = 2;
        axe.y = 2;
        axe.vel = Vec2::new(-200.0, -200.0);
        axe.update(0.05);
        assert_eq!((axe.x, axe.y), (0, 0));
        assert_eq!(axe.vel, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_axe_no_flip_inside_bounds() {
        let mut axe = Axe::new(Ruleset::Ramped);
        axe.x = 100;
        axe.y = 100;
        axe.update(0.5);
        assert_eq!(axe.vel, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_classic_overshoots_then_flips() {
        let mut axe = Axe::new(Ruleset::Classic);
        axe.y = 400;
        axe.step_classic();
        assert_eq!(axe.y, 410);
        assert_eq!(axe.vel.y, -10.0);
        axe.step_classic();
        assert_eq!(axe.y, 400);
        assert_eq!(axe.vel.y, -10.0);
    }

    #[test]
    fn test_speed_up_caps_and_keeps_sign() {
        let mut axe = Axe::new(Ruleset::Ramped);
        axe.vel = Vec2::new(-550.0, 0.0);
        assert!(axe.speed_up(1.2, 600.0));
        assert_eq!(axe.vel, Vec2::new(-600.0, 0.0));
        assert!(!axe.speed_up(1.2, 600.0));
    }
}
