//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  Before the app is built, `main` calls
//! [`load_game_config`], which reads `assets/game.toml` and overwrites the
//! defaults with any values present in the file.  Missing keys fall back to
//! the compile-time defaults, so a minimal TOML can override just the values
//! you care about.
//!
//! The window size is needed while the `WindowPlugin` is being configured,
//! which is why loading happens up front rather than in a `Startup` system.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read values
//! with `config.player_speed`, `config.fire_cooldown()`, etc.

use crate::constants::*;
use crate::error::{GameError, GameResult};
use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default location of the override file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Window / Play Field ──────────────────────────────────────────────────
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub max_frame_delta_ms: u64,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_speed: f32,
    pub fire_cooldown_ms: u64,

    // ── Laser ────────────────────────────────────────────────────────────────
    pub laser_travel_speed: f32,
    pub laser_nominal_speed: f32,

    // ── Meteor ───────────────────────────────────────────────────────────────
    pub meteor_speed_min: u32,
    pub meteor_speed_max: u32,
    pub meteor_drift: f32,
    pub meteor_spin_min: u32,
    pub meteor_spin_max: u32,
    pub meteor_lifetime_ms: u64,
    pub meteor_spawn_interval_ms: u64,
    pub meteor_spawn_y_min: i32,
    pub meteor_spawn_y_max: i32,

    // ── Explosion ────────────────────────────────────────────────────────────
    pub explosion_fps: f32,

    // ── Collision ────────────────────────────────────────────────────────────
    pub mask_alpha_threshold: u8,

    // ── Score ────────────────────────────────────────────────────────────────
    pub score_tick_ms: u64,

    // ── Audio ────────────────────────────────────────────────────────────────
    pub music_volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Window / Play Field
            window_title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            max_frame_delta_ms: MAX_FRAME_DELTA_MS,
            // Player
            player_speed: PLAYER_SPEED,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            // Laser
            laser_travel_speed: LASER_TRAVEL_SPEED,
            laser_nominal_speed: LASER_NOMINAL_SPEED,
            // Meteor
            meteor_speed_min: METEOR_SPEED_MIN,
            meteor_speed_max: METEOR_SPEED_MAX,
            meteor_drift: METEOR_DRIFT,
            meteor_spin_min: METEOR_SPIN_MIN,
            meteor_spin_max: METEOR_SPIN_MAX,
            meteor_lifetime_ms: METEOR_LIFETIME_MS,
            meteor_spawn_interval_ms: METEOR_SPAWN_INTERVAL_MS,
            meteor_spawn_y_min: METEOR_SPAWN_Y_MIN,
            meteor_spawn_y_max: METEOR_SPAWN_Y_MAX,
            // Explosion
            explosion_fps: EXPLOSION_FPS,
            // Collision
            mask_alpha_threshold: MASK_ALPHA_THRESHOLD,
            // Score
            score_tick_ms: SCORE_TICK_MS,
            // Audio
            music_volume: MUSIC_VOLUME,
        }
    }
}

impl GameConfig {
    pub fn play_field(&self) -> PlayField {
        PlayField {
            width: self.window_width,
            height: self.window_height,
        }
    }

    pub fn fire_cooldown(&self) -> Duration {
        Duration::from_millis(self.fire_cooldown_ms)
    }

    pub fn meteor_lifetime(&self) -> Duration {
        Duration::from_millis(self.meteor_lifetime_ms)
    }

    pub fn meteor_spawn_interval(&self) -> Duration {
        Duration::from_millis(self.meteor_spawn_interval_ms)
    }

    pub fn score_tick(&self) -> Duration {
        Duration::from_millis(self.score_tick_ms)
    }

    pub fn max_frame_delta(&self) -> Duration {
        Duration::from_millis(self.max_frame_delta_ms)
    }

    /// Reject values that would break gameplay invariants (empty sampling
    /// ranges, zero-length timers, a play field with no area).
    pub fn validate(&self) -> GameResult<()> {
        if !(self.window_width.is_finite() && self.window_height.is_finite())
            || self.window_width <= 0.0
            || self.window_height <= 0.0
        {
            return Err(GameError::InvalidConfig {
                name: "window_width/window_height",
                value: format!("{}x{}", self.window_width, self.window_height),
                expected: "both > 0",
            });
        }
        if self.meteor_speed_min > self.meteor_speed_max {
            return Err(GameError::InvalidConfig {
                name: "meteor_speed_min",
                value: self.meteor_speed_min.to_string(),
                expected: "<= meteor_speed_max",
            });
        }
        if self.meteor_spin_min > self.meteor_spin_max {
            return Err(GameError::InvalidConfig {
                name: "meteor_spin_min",
                value: self.meteor_spin_min.to_string(),
                expected: "<= meteor_spin_max",
            });
        }
        if self.meteor_spawn_y_min > self.meteor_spawn_y_max {
            return Err(GameError::InvalidConfig {
                name: "meteor_spawn_y_min",
                value: self.meteor_spawn_y_min.to_string(),
                expected: "<= meteor_spawn_y_max",
            });
        }
        non_negative("player_speed", self.player_speed)?;
        non_negative("laser_travel_speed", self.laser_travel_speed)?;
        non_negative("laser_nominal_speed", self.laser_nominal_speed)?;
        non_negative("meteor_drift", self.meteor_drift)?;
        non_negative("music_volume", self.music_volume)?;
        if self.meteor_spawn_interval_ms == 0 {
            return Err(GameError::InvalidConfig {
                name: "meteor_spawn_interval_ms",
                value: "0".to_string(),
                expected: "> 0",
            });
        }
        if self.score_tick_ms == 0 {
            return Err(GameError::InvalidConfig {
                name: "score_tick_ms",
                value: "0".to_string(),
                expected: "> 0",
            });
        }
        if self.max_frame_delta_ms == 0 {
            return Err(GameError::InvalidConfig {
                name: "max_frame_delta_ms",
                value: "0".to_string(),
                expected: "> 0",
            });
        }
        if !self.explosion_fps.is_finite() || self.explosion_fps <= 0.0 {
            return Err(GameError::InvalidConfig {
                name: "explosion_fps",
                value: self.explosion_fps.to_string(),
                expected: "finite and > 0",
            });
        }
        Ok(())
    }
}

/// TOML accepts `nan` and `inf`; neither is a usable speed, drift or volume.
fn non_negative(name: &'static str, value: f32) -> GameResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GameError::InvalidConfig {
            name,
            value: value.to_string(),
            expected: "finite and >= 0",
        });
    }
    Ok(())
}

/// Visible rectangle of the game, in pixels.
///
/// Gameplay runs in Bevy world space: origin at the centre of the window,
/// +y pointing up.  Sprite art and spawn rules are described in screen
/// space (origin top-left, +y down); [`PlayField::screen_to_world`] converts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl PlayField {
    /// World-space y coordinate of the top edge of the window.
    pub fn top(&self) -> f32 {
        self.height * 0.5
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x - self.width * 0.5, self.height * 0.5 - screen.y)
    }
}

/// Parse a TOML document into a validated [`GameConfig`].
///
/// `path` is only used for diagnostics.
pub fn parse_game_config(contents: &str, path: &Path) -> GameResult<GameConfig> {
    let config = toml::from_str::<GameConfig>(contents).map_err(|e| GameError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Read and validate a config file.
pub fn read_game_config(path: &Path) -> GameResult<GameConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_game_config(&contents, path)
}

/// Load `path`, falling back to compiled defaults on any failure.
///
/// Runs before the Bevy log subscriber exists, so status goes to stdout/stderr.
/// A missing file is not an error: defaults are the intended configuration.
pub fn load_game_config(path: &Path) -> GameConfig {
    match read_game_config(path) {
        Ok(config) => {
            println!("✓ Loaded game config from {}", path.display());
            config
        }
        Err(GameError::ConfigRead { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            println!("ℹ No {} found; using compiled defaults", path.display());
            GameConfig::default()
        }
        Err(e) => {
            eprintln!("⚠ {e}; using defaults");
            GameConfig::default()
        }
    }
}

/// Startup system: cap the virtual clock's per-frame delta.
pub fn apply_frame_clamp(config: Res<GameConfig>, mut time: ResMut<Time<Virtual>>) {
    time.set_max_delta(config.max_frame_delta());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = parse_game_config("player_speed = 650.0\n", Path::new("test.toml"))
            .expect("partial config should parse");
        assert_eq!(config.player_speed, 650.0);
        assert_eq!(config.fire_cooldown_ms, FIRE_COOLDOWN_MS);
        assert_eq!(config.window_title, WINDOW_TITLE);
    }

    #[test]
    fn inverted_speed_range_is_rejected() {
        let err = parse_game_config(
            "meteor_speed_min = 600\nmeteor_speed_max = 500\n",
            Path::new("test.toml"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidConfig {
                name: "meteor_speed_min",
                ..
            }
        ));
    }

    #[test]
    fn nan_drift_is_rejected() {
        let err = parse_game_config("meteor_drift = nan\n", Path::new("test.toml")).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidConfig {
                name: "meteor_drift",
                ..
            }
        ));
    }

    #[test]
    fn infinite_floats_are_rejected() {
        for (toml, key) in [
            ("explosion_fps = inf\n", "explosion_fps"),
            ("player_speed = inf\n", "player_speed"),
            ("laser_travel_speed = -inf\n", "laser_travel_speed"),
            ("laser_nominal_speed = nan\n", "laser_nominal_speed"),
            ("music_volume = inf\n", "music_volume"),
            ("window_width = inf\n", "window_width/window_height"),
        ] {
            let err = parse_game_config(toml, Path::new("test.toml")).unwrap_err();
            assert!(
                matches!(err, GameError::InvalidConfig { name, .. } if name == key),
                "{toml:?} should be rejected as {key}, got {err}"
            );
        }
    }

    #[test]
    fn negative_volume_is_rejected() {
        let mut config = GameConfig::default();
        config.music_volume = -0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn mistyped_value_is_a_parse_error() {
        let err = parse_game_config("player_speed = \"fast\"\n", Path::new("test.toml"))
            .unwrap_err();
        assert!(matches!(err, GameError::ConfigParse { .. }));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_game_config(Path::new("definitely/not/here.toml"));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/game.toml"));
        let config = read_game_config(path).expect("shipped config should load");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn screen_to_world_maps_corners() {
        let field = GameConfig::default().play_field();
        assert_eq!(
            field.screen_to_world(Vec2::ZERO),
            Vec2::new(-640.0, 360.0)
        );
        assert_eq!(
            field.screen_to_world(Vec2::new(1280.0, 720.0)),
            Vec2::new(640.0, -360.0)
        );
        assert_eq!(field.top(), 360.0);
    }
}
