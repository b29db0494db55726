//! Laser firing and laser motion.
//!
//! A laser spawns with its bottom edge on the ship's top edge, travels
//! straight up at `laser_travel_speed`, and is despawned as soon as its bottom
//! edge clears the top of the window.  Hits are resolved by
//! [`crate::collision::collision_resolution_system`].

use super::laser_bundle;
use super::state::{FireCooldown, Laser, Player, PlayerIntent};
use crate::audio::{PlaySound, SoundCue};
use crate::collision::SpriteMasks;
use crate::config::GameConfig;
use crate::graphics::GameAssets;
use crate::registry::EntityRegistry;
use bevy::prelude::*;

/// Advance the ship's cooldown, then fire on a `fire` edge if it is ready.
///
/// The cooldown ticks before the fire check, so a shot exactly one cooldown
/// after the previous one goes through.
#[allow(clippy::too_many_arguments)]
pub fn laser_fire_system(
    mut registry: EntityRegistry,
    mut q_player: Query<(&Transform, &mut FireCooldown), With<Player>>,
    intent: Res<PlayerIntent>,
    masks: Res<SpriteMasks>,
    assets: Res<GameAssets>,
    config: Res<GameConfig>,
    time: Res<Time>,
    mut sounds: MessageWriter<PlaySound>,
) {
    let Ok((transform, mut cooldown)) = q_player.single_mut() else {
        return;
    };

    cooldown.tick(time.delta(), config.fire_cooldown());
    if !intent.fire || !cooldown.try_fire() {
        return;
    }

    let ship_top =
        transform.translation.truncate() + Vec2::new(0.0, masks.player.size().y * 0.5);
    let laser_center = ship_top + Vec2::new(0.0, masks.laser.size().y * 0.5);
    registry.add(laser_bundle(&assets, &config, laser_center));
    sounds.write(PlaySound(SoundCue::LaserFire));
}

/// Move every laser upward and drop the ones that have left the screen.
pub fn laser_motion_system(
    mut registry: EntityRegistry,
    mut q_lasers: Query<(Entity, &mut Transform), With<Laser>>,
    masks: Res<SpriteMasks>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    let top = config.play_field().top();
    let half_height = masks.laser.size().y * 0.5;
    let rise = config.laser_travel_speed * time.delta_secs();

    for (entity, mut transform) in q_lasers.iter_mut() {
        transform.translation.y += rise;
        if transform.translation.y - half_height > top {
            registry.remove(entity);
        }
    }
}
