//! Player input and movement systems.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`player_intent_clear_system`] — resets `PlayerIntent`.
//! 2. [`keyboard_to_intent_system`] — translates W/A/S/D, SPACE and ENTER into `PlayerIntent` fields.
//! 3. [`apply_player_intent_system`] — moves the ship along `PlayerIntent::direction`.
//!
//! Steps 1 and 2 belong to `ControlsPlugin` and need the input plugin; step 3
//! is part of the headless core.  Tests populate the resource directly.

use super::state::{Player, PlayerIntent};
use crate::config::GameConfig;
use bevy::prelude::*;

// ── Step 1: Clear ─────────────────────────────────────────────────────────────

/// Reset `PlayerIntent` at the start of every frame.
pub fn player_intent_clear_system(mut intent: ResMut<PlayerIntent>) {
    *intent = PlayerIntent::default();
}

// ── Step 2: Keyboard → Intent ─────────────────────────────────────────────────

/// Translate keyboard state into [`PlayerIntent`].
///
/// - **W / A / S / D** → held directional axes
/// - **SPACE** just pressed → `fire` and `confirm`
/// - **ENTER** just pressed → `confirm`
pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<PlayerIntent>,
) {
    intent.up = keys.pressed(KeyCode::KeyW);
    intent.down = keys.pressed(KeyCode::KeyS);
    intent.left = keys.pressed(KeyCode::KeyA);
    intent.right = keys.pressed(KeyCode::KeyD);

    let space = keys.just_pressed(KeyCode::Space);
    intent.fire = space;
    intent.confirm = space || keys.just_pressed(KeyCode::Enter);
}

// ── Step 3: Intent → Transform ────────────────────────────────────────────────

/// Move the ship by `direction * player_speed * dt`.
pub fn apply_player_intent_system(
    mut q: Query<&mut Transform, With<Player>>,
    intent: Res<PlayerIntent>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    let Ok(mut transform) = q.single_mut() else {
        return;
    };
    let step = intent.direction() * config.player_speed * time.delta_secs();
    transform.translation += step.extend(0.0);
}
