//! Player module: ship entity, input handling and lasers.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | ECS components (`Player`, `FireCooldown`, `Laser`) and the `PlayerIntent` resource |
//! | [`control`] | Input systems: keyboard → intent, intent → ship movement |
//! | [`combat`] | Laser firing with cooldown, laser motion and off-screen removal |
//!
//! All public items are re-exported at this level so the rest of the crate
//! can use flat `crate::player::*` imports.

pub mod combat;
pub mod control;
pub mod state;

// ── Flat re-exports ───────────────────────────────────────────────────────────

pub use combat::{laser_fire_system, laser_motion_system};
pub use control::{
    apply_player_intent_system, keyboard_to_intent_system, player_intent_clear_system,
};
pub use state::{FireCooldown, Laser, Player, PlayerIntent};

use crate::config::GameConfig;
use crate::constants::{Z_LASER, Z_PLAYER};
use crate::graphics::GameAssets;
use crate::TickSet;
use bevy::prelude::*;

// ── Bundles ───────────────────────────────────────────────────────────────────

/// Ship at the centre of the play field, cooldown ready.
pub fn player_bundle(assets: &GameAssets) -> impl Bundle {
    (
        Player,
        FireCooldown::default(),
        Sprite::from_image(assets.player.clone()),
        Transform::from_xyz(0.0, 0.0, Z_PLAYER),
    )
}

/// Laser centred on `center`.
pub fn laser_bundle(assets: &GameAssets, config: &GameConfig, center: Vec2) -> impl Bundle {
    (
        Laser {
            nominal_speed: config.laser_nominal_speed,
        },
        Sprite::from_image(assets.laser.clone()),
        Transform::from_translation(center.extend(Z_LASER)),
    )
}

// ── Plugins ───────────────────────────────────────────────────────────────────

/// Ship movement, firing and laser motion.  Headless.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerIntent>().add_systems(
            Update,
            (
                (apply_player_intent_system, laser_fire_system).chain(),
                laser_motion_system,
            )
                .in_set(TickSet::Motion),
        );
    }
}

/// Keyboard → [`PlayerIntent`].  Requires Bevy's input plugin.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (player_intent_clear_system, keyboard_to_intent_system)
                .chain()
                .in_set(TickSet::Input),
        );
    }
}
