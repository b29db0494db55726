//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::GameConfig::default`] mirrors every value below; the
//! runtime copy can be overridden from `assets/game.toml`.

// ── Window / Play Field ───────────────────────────────────────────────────────

/// Window title shown by the OS.
pub const WINDOW_TITLE: &str = "Alien Blaster";

/// Width of the play field in pixels.  The play field is exactly the window.
pub const WINDOW_WIDTH: f32 = 1280.0;

/// Height of the play field in pixels.
pub const WINDOW_HEIGHT: f32 = 720.0;

/// Upper bound on the per-frame delta fed to gameplay (milliseconds).
///
/// Applies to stalled frames such as a window drag or a debugger pause.
pub const MAX_FRAME_DELTA_MS: u64 = 100;

// ── Player ────────────────────────────────────────────────────────────────────

/// Ship speed along any axis, diagonals included (px/s).
pub const PLAYER_SPEED: f32 = 500.0;

/// Minimum time between two laser shots (milliseconds).
pub const FIRE_COOLDOWN_MS: u64 = 300;

// ── Laser ─────────────────────────────────────────────────────────────────────

/// Actual upward travel rate of a laser (px/s).
pub const LASER_TRAVEL_SPEED: f32 = 400.0;

/// Speed value carried on every laser.  Motion does not read it; lasers always
/// travel at [`LASER_TRAVEL_SPEED`].
pub const LASER_NOMINAL_SPEED: f32 = 500.0;

// ── Meteor ────────────────────────────────────────────────────────────────────

/// Inclusive lower bound of the sampled meteor speed (px/s).
pub const METEOR_SPEED_MIN: u32 = 400;

/// Inclusive upper bound of the sampled meteor speed (px/s).
pub const METEOR_SPEED_MAX: u32 = 500;

/// Maximum sideways drift of a meteor direction; the downward component is 1.
pub const METEOR_DRIFT: f32 = 0.5;

/// Inclusive lower bound of the sampled spin rate (degrees/s).
pub const METEOR_SPIN_MIN: u32 = 40;

/// Inclusive upper bound of the sampled spin rate (degrees/s).
pub const METEOR_SPIN_MAX: u32 = 80;

/// Meteors despawn this long after spawning unless destroyed earlier (ms).
pub const METEOR_LIFETIME_MS: u64 = 3000;

/// Interval between meteor spawn requests (ms).
pub const METEOR_SPAWN_INTERVAL_MS: u64 = 200;

/// Highest spawn row in screen space (pixels above the top edge are negative).
pub const METEOR_SPAWN_Y_MIN: i32 = -200;

/// Lowest spawn row in screen space.
pub const METEOR_SPAWN_Y_MAX: i32 = -100;

// ── Explosion ─────────────────────────────────────────────────────────────────

/// Playback rate of the explosion flipbook (frames/s).
pub const EXPLOSION_FPS: f32 = 20.0;

/// Number of explosion frames shipped in `assets/Images/Explosions`.
pub const EXPLOSION_FRAME_COUNT: usize = 21;

// ── Collision ─────────────────────────────────────────────────────────────────

/// A pixel is solid for collision purposes when its alpha (0–255) exceeds this.
pub const MASK_ALPHA_THRESHOLD: u8 = 127;

// ── Score ─────────────────────────────────────────────────────────────────────

/// Survival time per score point (ms).  One point per tenth of a second.
pub const SCORE_TICK_MS: u64 = 100;

// ── Audio ─────────────────────────────────────────────────────────────────────

/// Linear volume of the looping background track.
pub const MUSIC_VOLUME: f32 = 1.0;

// ── Draw order ────────────────────────────────────────────────────────────────

pub const Z_BACKGROUND: f32 = -10.0;
pub const Z_METEOR: f32 = 1.0;
pub const Z_LASER: f32 = 2.0;
pub const Z_PLAYER: f32 = 3.0;
pub const Z_EXPLOSION: f32 = 4.0;
