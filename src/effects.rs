//! Explosion flipbooks.
//!
//! An [`Explosion`] is a non-interactive sprite that steps through
//! `GameAssets::explosion_frames` once at `explosion_fps` and then despawns.
//! Explosions are spawned by the collision pass through
//! [`explosion_bundle`]; they are in the registry's `All` set only.

use crate::config::GameConfig;
use crate::constants::Z_EXPLOSION;
use crate::graphics::GameAssets;
use crate::registry::EntityRegistry;
use crate::TickSet;
use bevy::prelude::*;

/// Playback state of one explosion.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    /// Fractional frame position; never decreases.
    pub frame_index: f32,
    pub frame_count: usize,
}

impl Explosion {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_index: 0.0,
            frame_count,
        }
    }

    /// Advance by `frames` and return the frame to show, or `None` once the
    /// sequence has played through.
    pub fn advance(&mut self, frames: f32) -> Option<usize> {
        self.frame_index += frames;
        if self.frame_index >= self.frame_count as f32 {
            return None;
        }
        Some(self.frame_index as usize % self.frame_count)
    }
}

/// Explosion centred on `center`, showing the first of `frames`.
pub fn explosion_bundle(frames: &[Handle<Image>], center: Vec2) -> impl Bundle {
    (
        Explosion::new(frames.len()),
        Sprite::from_image(frames.first().cloned().unwrap_or_default()),
        Transform::from_translation(center.extend(Z_EXPLOSION)),
    )
}

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, explosion_animation_system.in_set(TickSet::Motion));
    }
}

/// Step every explosion and despawn the finished ones.
pub fn explosion_animation_system(
    mut registry: EntityRegistry,
    mut q_explosions: Query<(Entity, &mut Explosion, &mut Sprite)>,
    assets: Res<GameAssets>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    let step = config.explosion_fps * time.delta_secs();

    for (entity, mut explosion, mut sprite) in q_explosions.iter_mut() {
        match explosion.advance(step) {
            Some(frame) => {
                if let Some(image) = assets.explosion_frames.get(frame) {
                    if sprite.image != *image {
                        sprite.image = image.clone();
                    }
                }
            }
            None => registry.remove(entity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_through_once() {
        let mut explosion = Explosion::new(21);
        // 20 fps at 50 ms per frame = one frame per step.
        for expected in 1..21 {
            assert_eq!(explosion.advance(1.0), Some(expected));
        }
        assert_eq!(explosion.advance(1.0), None);
    }

    #[test]
    fn fractional_steps_floor_to_a_frame() {
        let mut explosion = Explosion::new(21);
        assert_eq!(explosion.advance(0.4), Some(0));
        assert_eq!(explosion.advance(0.4), Some(0));
        assert_eq!(explosion.advance(0.4), Some(1));
    }

    #[test]
    fn index_never_decreases() {
        let mut explosion = Explosion::new(21);
        let mut last = explosion.frame_index;
        while explosion.advance(0.33).is_some() {
            assert!(explosion.frame_index >= last);
            last = explosion.frame_index;
        }
        assert!(explosion.frame_index >= 21.0);
    }

    #[test]
    fn empty_sequence_finishes_immediately() {
        let mut explosion = Explosion::new(0);
        assert_eq!(explosion.advance(0.0), None);
    }
}
