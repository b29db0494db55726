//! Meteors: randomized falling obstacles and the timer that spawns them.
//!
//! ## Systems
//!
//! | System                 | Set                | Purpose                                        |
//! |------------------------|--------------------|------------------------------------------------|
//! | `meteor_spawn_system`  | `TickSet::Spawn`   | Advance the spawn timer; spawn while `Playing` |
//! | `meteor_motion_system` | `TickSet::Motion`  | Fall, spin, and expire after the lifetime      |
//!
//! The spawn timer keeps running in every state so the cadence is unaffected
//! by time spent on the overlays; requests outside `Playing` are discarded.

use crate::config::GameConfig;
use crate::constants::Z_METEOR;
use crate::graphics::GameAssets;
use crate::menu::GameState;
use crate::registry::EntityRegistry;
use crate::TickSet;
use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

// ── Component ────────────────────────────────────────────────────────────────

/// Per-meteor motion state.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Meteor {
    /// World-space heading.  Not normalized: the downward component is always
    /// 1, so drifting meteors cover slightly more ground.
    pub direction: Vec2,
    /// Pixels per second along `direction`.
    pub speed: f32,
    /// Degrees per second, counter-clockwise.
    pub spin_deg: f32,
    pub rotation_deg: f32,
    /// Game time since spawn.
    pub age: Duration,
}

impl Meteor {
    pub fn new(motion: MeteorMotion) -> Self {
        Self {
            direction: motion.direction,
            speed: motion.speed,
            spin_deg: motion.spin_deg,
            rotation_deg: 0.0,
            age: Duration::ZERO,
        }
    }
}

/// Randomized launch parameters of a meteor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeteorMotion {
    pub direction: Vec2,
    pub speed: f32,
    pub spin_deg: f32,
}

impl MeteorMotion {
    /// Sideways drift uniform in `[-drift, drift]`, speed and spin uniform
    /// integers in their configured inclusive ranges.
    pub fn sample(rng: &mut impl Rng, config: &GameConfig) -> Self {
        let drift = rng.gen_range(-config.meteor_drift..=config.meteor_drift);
        let speed = rng.gen_range(config.meteor_speed_min..=config.meteor_speed_max);
        let spin = rng.gen_range(config.meteor_spin_min..=config.meteor_spin_max);
        Self {
            direction: Vec2::new(drift, -1.0),
            speed: speed as f32,
            spin_deg: spin as f32,
        }
    }
}

/// Spawn centre in world space: a whole-pixel screen column in
/// `[0, width]` and a screen row in the configured band above the window.
pub fn spawn_point(rng: &mut impl Rng, config: &GameConfig) -> Vec2 {
    let field = config.play_field();
    let x = rng.gen_range(0..=field.width as i32);
    let y = rng.gen_range(config.meteor_spawn_y_min..=config.meteor_spawn_y_max);
    field.screen_to_world(Vec2::new(x as f32, y as f32))
}

/// Meteor centred on `center` with the given motion.
pub fn meteor_bundle(assets: &GameAssets, motion: MeteorMotion, center: Vec2) -> impl Bundle {
    (
        Meteor::new(motion),
        Sprite::from_image(assets.meteor.clone()),
        Transform::from_translation(center.extend(Z_METEOR)),
    )
}

// ── Spawn timer ──────────────────────────────────────────────────────────────

/// Repeating spawn timer.
#[derive(Resource, Debug, Clone, Default)]
pub struct MeteorSpawnTimer {
    elapsed: Duration,
}

impl MeteorSpawnTimer {
    /// Advance by `delta`.  Returns `true` at most once per call; whole
    /// intervals beyond the first are dropped, the remainder carries over.
    pub fn tick(&mut self, delta: Duration, interval: Duration) -> bool {
        if interval.is_zero() {
            return true;
        }
        self.elapsed += delta;
        if self.elapsed < interval {
            return false;
        }
        let remainder = self.elapsed.as_nanos() % interval.as_nanos();
        self.elapsed = Duration::from_nanos(remainder as u64);
        true
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct MeteorPlugin;

impl Plugin for MeteorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MeteorSpawnTimer>()
            .add_systems(Update, meteor_spawn_system.in_set(TickSet::Spawn))
            .add_systems(Update, meteor_motion_system.in_set(TickSet::Motion));
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Spawn one meteor per timer fire while `Playing`, just above the top edge
/// at a random column.
pub fn meteor_spawn_system(
    mut timer: ResMut<MeteorSpawnTimer>,
    state: Res<State<GameState>>,
    mut registry: EntityRegistry,
    assets: Res<GameAssets>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    if !timer.tick(time.delta(), config.meteor_spawn_interval()) {
        return;
    }
    if *state.get() != GameState::Playing {
        return;
    }

    let mut rng = rand::thread_rng();
    let center = spawn_point(&mut rng, &config);
    let motion = MeteorMotion::sample(&mut rng, &config);
    registry.add(meteor_bundle(&assets, motion, center));
}

/// Move, age and spin every meteor.
///
/// Expiry compares the age accumulated *before* this frame, so a meteor
/// spawned at `T` is gone from the first frame at or after `T + lifetime`.
pub fn meteor_motion_system(
    mut registry: EntityRegistry,
    mut q_meteors: Query<(Entity, &mut Transform, &mut Meteor)>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    let lifetime = config.meteor_lifetime();

    for (entity, mut transform, mut meteor) in q_meteors.iter_mut() {
        let step = meteor.direction * meteor.speed * dt;
        transform.translation += step.extend(0.0);

        if meteor.age >= lifetime {
            registry.remove(entity);
            continue;
        }
        meteor.age += time.delta();

        meteor.rotation_deg += meteor.spin_deg * dt;
        transform.rotation = Quat::from_rotation_z(meteor.rotation_deg.to_radians());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sampled_motion_stays_in_configured_ranges() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let motion = MeteorMotion::sample(&mut rng, &config);
            assert!((-0.5..=0.5).contains(&motion.direction.x));
            assert_eq!(motion.direction.y, -1.0);
            assert!((400.0..=500.0).contains(&motion.speed));
            assert_eq!(motion.speed.fract(), 0.0);
            assert!((40.0..=80.0).contains(&motion.spin_deg));
            assert_eq!(motion.spin_deg.fract(), 0.0);
        }
    }

    #[test]
    fn zero_drift_falls_straight_down() {
        let config = GameConfig {
            meteor_drift: 0.0,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let motion = MeteorMotion::sample(&mut rng, &config);
        assert_eq!(motion.direction, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn spawn_points_sit_above_the_window() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let center = spawn_point(&mut rng, &config);
            assert!((-640.0..=640.0).contains(&center.x), "x = {}", center.x);
            assert!((460.0..=560.0).contains(&center.y), "y = {}", center.y);
            assert_eq!(center.x.fract(), 0.0);
            assert_eq!(center.y.fract(), 0.0);
        }
    }

    #[test]
    fn spawn_band_maps_screen_rows_to_world_heights() {
        let config = GameConfig {
            meteor_spawn_y_min: -150,
            meteor_spawn_y_max: -150,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(spawn_point(&mut rng, &config).y, 510.0);
    }

    #[test]
    fn spawn_timer_fires_on_interval() {
        let interval = Duration::from_millis(200);
        let mut timer = MeteorSpawnTimer::default();
        assert!(!timer.tick(Duration::from_millis(150), interval));
        assert!(timer.tick(Duration::from_millis(60), interval));
        // 10 ms carried over.
        assert!(!timer.tick(Duration::from_millis(180), interval));
        assert!(timer.tick(Duration::from_millis(10), interval));
    }

    #[test]
    fn stalled_frame_fires_once_and_drops_backlog() {
        let interval = Duration::from_millis(200);
        let mut timer = MeteorSpawnTimer::default();
        assert!(timer.tick(Duration::from_millis(1_050), interval));
        assert!(!timer.tick(Duration::from_millis(100), interval));
        assert!(timer.tick(Duration::from_millis(50), interval));
    }

    #[test]
    fn new_meteor_starts_unrotated() {
        let meteor = Meteor::new(MeteorMotion {
            direction: Vec2::new(0.25, -1.0),
            speed: 450.0,
            spin_deg: 60.0,
        });
        assert_eq!(meteor.rotation_deg, 0.0);
        assert_eq!(meteor.age, Duration::ZERO);
    }
}
