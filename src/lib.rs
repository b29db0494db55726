//! Alien Blaster — a single-screen arcade shooter.
//!
//! The ship dodges and shoots falling meteors; the score is the time survived.
//! [`AlienBlasterPlugin`] is the headless core (state machine, entities, spawn
//! timer, collision pass) and runs under `MinimalPlugins`.  Window, input,
//! sprites, audio and UI are separate plugins added by the binary.
//!
//! ## Frame order
//!
//! | Set                  | Runs                     | Contents                                   |
//! |----------------------|--------------------------|--------------------------------------------|
//! | `TickSet::Input`     | always                   | keyboard → `PlayerIntent`                  |
//! | `TickSet::Flow`      | always                   | confirm → `GameState` transition request   |
//! | `TickSet::Spawn`     | always                   | meteor spawn timer                         |
//! | `TickSet::Motion`    | `Playing`, masks baked   | ship, lasers, meteors, explosions          |
//! | `TickSet::Collision` | `Playing`, masks baked   | player death, laser hits                   |

pub mod audio;
pub mod collision;
pub mod config;
pub mod constants;
pub mod effects;
pub mod error;
pub mod graphics;
pub mod menu;
pub mod meteor;
pub mod player;
pub mod registry;
pub mod rendering;

use bevy::prelude::*;
use collision::{collision_resolution_system, SpriteMasks};
use config::{apply_frame_clamp, GameConfig};
use menu::GameState;

/// Per-frame ordering of the gameplay systems.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Input,
    Flow,
    Spawn,
    Motion,
    Collision,
}

/// Headless game core.
///
/// Inserts a default [`GameConfig`] unless one is already present, so insert
/// the loaded config before adding this plugin.
pub struct AlienBlasterPlugin;

impl Plugin for AlienBlasterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .add_message::<audio::PlaySound>()
            .configure_sets(
                Update,
                (
                    TickSet::Input,
                    TickSet::Flow,
                    TickSet::Spawn,
                    TickSet::Motion,
                    TickSet::Collision,
                )
                    .chain(),
            )
            .configure_sets(
                Update,
                TickSet::Motion
                    .run_if(in_state(GameState::Playing).and(resource_exists::<SpriteMasks>)),
            )
            .configure_sets(
                Update,
                TickSet::Collision
                    .run_if(in_state(GameState::Playing).and(resource_exists::<SpriteMasks>)),
            )
            .add_plugins((
                menu::GameFlowPlugin,
                player::PlayerPlugin,
                meteor::MeteorPlugin,
                effects::EffectsPlugin,
            ))
            .add_systems(Startup, apply_frame_clamp)
            .add_systems(
                Update,
                collision_resolution_system.in_set(TickSet::Collision),
            );
    }
}
