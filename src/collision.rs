//! Pixel-precise collision masks and the per-frame collision pass.
//!
//! ## Masks
//!
//! Each collidable sprite is reduced to a [`CollisionMask`]: one bit per
//! pixel, set where the pixel's alpha exceeds
//! [`crate::config::GameConfig::mask_alpha_threshold`].  Transparent sprite
//! corners therefore never register hits.
//!
//! [`masks_overlap`] first intersects the rotated bounding boxes, then walks
//! the solid pixels of the smaller mask and samples the other mask at the same
//! world position (nearest pixel, rotation applied).  Meteors spin, so their
//! pose comes from the live `Transform` rather than a pre-rotated bitmap.
//!
//! ## Resolution order
//!
//! 1. Player vs meteors.  A hit ends the run and skips step 2 for this frame.
//! 2. Lasers vs meteors.  Each laser scores at most one hit per frame, taking
//!    every meteor it overlaps with it.

use crate::audio::{PlaySound, SoundCue};
use crate::config::GameConfig;
use crate::effects::explosion_bundle;
use crate::error::{GameError, GameResult};
use crate::graphics::GameAssets;
use crate::menu::{GameState, SessionScore};
use crate::meteor::Meteor;
use crate::player::{Laser, Player};
use crate::registry::EntityRegistry;
use bevy::color::Alpha;
use bevy::prelude::*;
use std::collections::HashSet;

// ── Mask ──────────────────────────────────────────────────────────────────────

/// Per-pixel opacity bitmap, row-major with row 0 at the top of the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl CollisionMask {
    /// Build a mask by evaluating `solid(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut solid: impl FnMut(u32, u32) -> bool) -> Self {
        let mut bits = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(solid(x, y));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    /// Fully opaque rectangle; equivalent to bounding-box collision.
    pub fn solid(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| true)
    }

    /// Sample `image` and keep pixels whose alpha (0–255) exceeds `threshold`.
    pub fn from_image(image: &Image, threshold: u8, context: &'static str) -> GameResult<Self> {
        let (width, height) = (image.width(), image.height());
        let mut bits = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let color = image
                    .get_color_at(x, y)
                    .map_err(|_| GameError::TextureAccess { context })?;
                bits.push(color.alpha() * 255.0 > threshold as f32);
            }
        }
        Ok(Self {
            width,
            height,
            bits,
        })
    }

    /// Visual extent in pixels.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// `false` for any coordinate outside the bitmap.
    pub fn is_solid(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        self.bits[(y as usize) * self.width as usize + x as usize]
    }

    pub fn solid_count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Placement of a mask in world space: centre plus counter-clockwise rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskPose {
    pub center: Vec2,
    /// Radians, counter-clockwise.
    pub angle: f32,
}

impl MaskPose {
    pub fn at(center: Vec2) -> Self {
        Self { center, angle: 0.0 }
    }

    pub fn from_transform(transform: &Transform) -> Self {
        let x_axis = (transform.rotation * Vec3::X).truncate();
        Self {
            center: transform.translation.truncate(),
            angle: x_axis.y.atan2(x_axis.x),
        }
    }

    /// Axis-aligned bounds of a `size` rectangle in this pose.
    fn bounds(&self, size: Vec2) -> Rect {
        let (sin, cos) = self.angle.sin_cos();
        let half = size * 0.5;
        let extent = Vec2::new(
            cos.abs() * half.x + sin.abs() * half.y,
            sin.abs() * half.x + cos.abs() * half.y,
        );
        Rect::from_center_half_size(self.center, extent)
    }
}

/// `true` when at least one solid pixel of `a` lands on a solid pixel of `b`.
pub fn masks_overlap(
    a: &CollisionMask,
    a_pose: MaskPose,
    b: &CollisionMask,
    b_pose: MaskPose,
) -> bool {
    let shared = a_pose.bounds(a.size()).intersect(b_pose.bounds(b.size()));
    if shared.is_empty() {
        return false;
    }

    let (scan, scan_pose, target, target_pose) = if a.area() <= b.area() {
        (a, a_pose, b, b_pose)
    } else {
        (b, b_pose, a, a_pose)
    };

    let (p_sin, p_cos) = scan_pose.angle.sin_cos();
    let (t_sin, t_cos) = target_pose.angle.sin_cos();
    let p_half = scan.size() * 0.5;
    let t_half = target.size() * 0.5;

    for y in 0..scan.height {
        for x in 0..scan.width {
            if !scan.bits[(y * scan.width + x) as usize] {
                continue;
            }
            // Pixel centre in the scan's local frame (+y up).
            let local = Vec2::new(x as f32 + 0.5 - p_half.x, p_half.y - (y as f32 + 0.5));
            let world = scan_pose.center
                + Vec2::new(
                    local.x * p_cos - local.y * p_sin,
                    local.x * p_sin + local.y * p_cos,
                );
            if !shared.contains(world) {
                continue;
            }
            let rel = world - target_pose.center;
            let target_local = Vec2::new(
                rel.x * t_cos + rel.y * t_sin,
                -rel.x * t_sin + rel.y * t_cos,
            );
            let tx = (target_local.x + t_half.x).floor() as i64;
            let ty = (t_half.y - target_local.y).floor() as i64;
            if target.is_solid(tx, ty) {
                return true;
            }
        }
    }
    false
}

/// Baked masks for every collidable sprite.
///
/// Inserted once the sprite images are decoded (see
/// [`crate::graphics::bake_sprite_masks_system`]); gameplay systems are gated
/// on this resource existing.  Tests insert it directly.
#[derive(Resource, Debug, Clone)]
pub struct SpriteMasks {
    pub player: CollisionMask,
    pub laser: CollisionMask,
    pub meteor: CollisionMask,
}

// ── Collision pass ────────────────────────────────────────────────────────────

/// Resolve player deaths and laser hits for this frame.
///
/// Runs after every entity has been updated, so lasers fired this frame are
/// already in the `Lasers` set.
///
/// A ship hit ends the frame's collision work: the laser pass is skipped and
/// the game-over request is queued on `NextState`, which Bevy's
/// `StateTransition` schedule applies at the start of the next frame.  The
/// ship's death deliberately plays the ship-damage cue alongside the
/// explosion cue.
#[allow(clippy::too_many_arguments)]
pub fn collision_resolution_system(
    mut registry: EntityRegistry,
    players: Query<(Entity, &Transform), With<Player>>,
    meteors: Query<(Entity, &Transform), With<Meteor>>,
    lasers: Query<(Entity, &Transform), With<Laser>>,
    masks: Res<SpriteMasks>,
    assets: Res<GameAssets>,
    config: Res<GameConfig>,
    time: Res<Time>,
    mut score: ResMut<SessionScore>,
    mut next_state: ResMut<NextState<GameState>>,
    mut sounds: MessageWriter<PlaySound>,
) {
    let Ok((player, player_transform)) = players.single() else {
        return;
    };

    // ── Player vs meteors ─────────────────────────────────────────────────────
    let player_pose = MaskPose::from_transform(player_transform);
    let crashed: Vec<Entity> = meteors
        .iter()
        .filter(|(_, transform)| {
            masks_overlap(
                &masks.player,
                player_pose,
                &masks.meteor,
                MaskPose::from_transform(transform),
            )
        })
        .map(|(entity, _)| entity)
        .collect();

    if !crashed.is_empty() {
        for meteor in crashed {
            registry.remove(meteor);
        }
        registry.add(explosion_bundle(&assets.explosion_frames, player_pose.center));
        sounds.write(PlaySound(SoundCue::Explosion));
        sounds.write(PlaySound(SoundCue::ShipDamage));
        registry.remove(player);

        let final_score = score.freeze(time.elapsed(), config.score_tick());
        next_state.set(GameState::GameOver);
        info!("Ship destroyed; final score {}", final_score);
        return;
    }

    // ── Lasers vs meteors ─────────────────────────────────────────────────────
    let mut consumed: HashSet<Entity> = HashSet::new();
    let laser_half_height = masks.laser.size().y * 0.5;
    for (laser, laser_transform) in lasers.iter() {
        let laser_pose = MaskPose::from_transform(laser_transform);
        let struck: Vec<Entity> = meteors
            .iter()
            .filter(|(meteor, _)| !consumed.contains(meteor))
            .filter(|(_, transform)| {
                masks_overlap(
                    &masks.laser,
                    laser_pose,
                    &masks.meteor,
                    MaskPose::from_transform(transform),
                )
            })
            .map(|(entity, _)| entity)
            .collect();

        if struck.is_empty() {
            continue;
        }
        for meteor in struck {
            consumed.insert(meteor);
            registry.remove(meteor);
        }
        registry.remove(laser);
        let top_center = laser_pose.center + Vec2::new(0.0, laser_half_height);
        registry.add(explosion_bundle(&assets.explosion_frames, top_center));
        sounds.write(PlaySound(SoundCue::Explosion));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    /// Filled disc inscribed in a `size` × `size` square.
    fn disc(size: u32) -> CollisionMask {
        let r = size as f32 * 0.5;
        CollisionMask::from_fn(size, size, |x, y| {
            let dx = x as f32 + 0.5 - r;
            let dy = y as f32 + 0.5 - r;
            dx * dx + dy * dy <= r * r
        })
    }

    #[test]
    fn identical_pose_overlaps() {
        let a = CollisionMask::solid(40, 30);
        let b = disc(50);
        let pose = MaskPose::at(Vec2::new(12.0, -7.0));
        assert!(masks_overlap(&a, pose, &b, pose));
    }

    #[test]
    fn separated_bounds_do_not_overlap() {
        let a = CollisionMask::solid(10, 10);
        assert!(!masks_overlap(
            &a,
            MaskPose::at(Vec2::ZERO),
            &a,
            MaskPose::at(Vec2::new(10.5, 0.0)),
        ));
    }

    #[test]
    fn transparent_corners_do_not_collide() {
        // Bounding boxes share a 2×2 corner region; the discs themselves are
        // ~25 px apart centre-to-centre with radius 10.
        let a = disc(20);
        let offset = Vec2::new(18.0, 18.0);
        assert!(!masks_overlap(
            &a,
            MaskPose::at(Vec2::ZERO),
            &a,
            MaskPose::at(offset),
        ));

        // The same placement with opaque rectangles does collide.
        let boxy = CollisionMask::solid(20, 20);
        assert!(masks_overlap(
            &boxy,
            MaskPose::at(Vec2::ZERO),
            &boxy,
            MaskPose::at(offset),
        ));
    }

    #[test]
    fn rotation_changes_the_footprint() {
        let bar = CollisionMask::solid(40, 4);
        let dot = CollisionMask::solid(4, 4);
        let dot_pose = MaskPose::at(Vec2::new(0.0, 15.0));

        assert!(!masks_overlap(&bar, MaskPose::at(Vec2::ZERO), &dot, dot_pose));

        let upright = MaskPose {
            center: Vec2::ZERO,
            angle: FRAC_PI_2,
        };
        assert!(masks_overlap(&bar, upright, &dot, dot_pose));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = disc(30);
        let b = CollisionMask::solid(6, 40);
        let a_pose = MaskPose {
            center: Vec2::new(3.0, 1.0),
            angle: 0.7,
        };
        let b_pose = MaskPose::at(Vec2::new(14.0, -2.0));
        assert_eq!(
            masks_overlap(&a, a_pose, &b, b_pose),
            masks_overlap(&b, b_pose, &a, a_pose)
        );
    }

    #[test]
    fn pose_from_transform_reads_z_rotation() {
        let transform = Transform::from_xyz(5.0, 6.0, 0.0)
            .with_rotation(Quat::from_rotation_z(0.5));
        let pose = MaskPose::from_transform(&transform);
        assert_eq!(pose.center, Vec2::new(5.0, 6.0));
        assert!((pose.angle - 0.5).abs() < 1e-5);
    }

    #[test]
    fn out_of_range_pixels_are_empty() {
        let mask = CollisionMask::solid(3, 3);
        assert!(mask.is_solid(2, 2));
        assert!(!mask.is_solid(3, 0));
        assert!(!mask.is_solid(-1, 1));
        assert_eq!(mask.solid_count(), 9);
    }
}
