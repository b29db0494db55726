//! Player components and resources.
//!
//! Systems that mutate this state are in the sibling modules:
//! - [`super::control`] — input + movement
//! - [`super::combat`] — laser firing + laser motion

use bevy::prelude::*;
use std::time::Duration;

// ── Components ─────────────────────────────────────────────────────────────────

/// Marker component for the player ship entity.  At most one exists, and only
/// while a run is in progress.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Shot gate carried by the ship.
///
/// Starts ready.  Firing clears `ready` and restarts the clock; the gate
/// re-opens once `since_shot` reaches the configured cooldown.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireCooldown {
    ready: bool,
    since_shot: Duration,
}

impl Default for FireCooldown {
    fn default() -> Self {
        Self {
            ready: true,
            since_shot: Duration::ZERO,
        }
    }
}

impl FireCooldown {
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Advance the clock by one frame.
    pub fn tick(&mut self, delta: Duration, cooldown: Duration) {
        if self.ready {
            return;
        }
        self.since_shot += delta;
        if self.since_shot >= cooldown {
            self.ready = true;
        }
    }

    /// Consume the shot if the gate is open.
    pub fn try_fire(&mut self) -> bool {
        if !self.ready {
            return false;
        }
        self.ready = false;
        self.since_shot = Duration::ZERO;
        true
    }
}

/// A single laser bolt.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Laser {
    /// Carried for completeness; travel uses `GameConfig::laser_travel_speed`.
    pub nominal_speed: f32,
}

// ── Resources ──────────────────────────────────────────────────────────────────

/// Device-independent per-frame input.
///
/// Written by [`super::control::keyboard_to_intent_system`] (or directly by
/// tests), read by movement, firing and the confirm transition.  Directional
/// fields are held state; `fire` and `confirm` are just-pressed edges.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub confirm: bool,
}

impl PlayerIntent {
    /// World-space unit direction (+y up), or zero when no key or opposing
    /// keys are held.
    pub fn direction(&self) -> Vec2 {
        let x = self.right as i8 - self.left as i8;
        let y = self.up as i8 - self.down as i8;
        Vec2::new(x as f32, y as f32).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_means_no_direction() {
        assert_eq!(PlayerIntent::default().direction(), Vec2::ZERO);
        let opposed = PlayerIntent {
            left: true,
            right: true,
            ..default()
        };
        assert_eq!(opposed.direction(), Vec2::ZERO);
    }

    #[test]
    fn diagonal_is_normalized() {
        let intent = PlayerIntent {
            up: true,
            right: true,
            ..default()
        };
        let dir = intent.direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x > 0.0 && dir.y > 0.0);
    }

    #[test]
    fn up_points_to_positive_y() {
        let intent = PlayerIntent {
            up: true,
            ..default()
        };
        assert_eq!(intent.direction(), Vec2::Y);
    }

    #[test]
    fn cooldown_blocks_until_elapsed() {
        let cooldown = Duration::from_millis(300);
        let mut gate = FireCooldown::default();
        assert!(gate.try_fire());
        assert!(!gate.try_fire());

        gate.tick(Duration::from_millis(299), cooldown);
        assert!(!gate.is_ready());
        gate.tick(Duration::from_millis(1), cooldown);
        assert!(gate.is_ready());
        assert!(gate.try_fire());
    }

    #[test]
    fn ready_gate_does_not_bank_time() {
        let cooldown = Duration::from_millis(300);
        let mut gate = FireCooldown::default();
        gate.tick(Duration::from_secs(10), cooldown);
        assert!(gate.try_fire());
        gate.tick(Duration::from_millis(100), cooldown);
        assert!(!gate.try_fire());
    }
}
