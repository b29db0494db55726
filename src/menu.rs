//! Game flow — `GameState` machine, per-run score baseline, and the two
//! overlay screens.
//!
//! ## States
//!
//! | State      | Description                                         |
//! |------------|-----------------------------------------------------|
//! | `Start`    | Initial state; title overlay, nothing moves         |
//! | `Playing`  | Run in progress; spawn, motion and collision active |
//! | `GameOver` | Ship destroyed; world frozen, final score shown     |
//!
//! ## Systems
//!
//! | System                      | Schedule                               | Purpose                              |
//! |-----------------------------|----------------------------------------|--------------------------------------|
//! | `confirm_transition_system` | `Update / TickSet::Flow`               | Apply `GameState::on_confirm`        |
//! | `begin_run`                 | `OnEnter(Playing)`                     | Fresh ship, empty sets, score = 0    |
//! | `return_to_start`           | `OnTransition { GameOver → Start }`    | Clear meteors, lasers and the ship   |
//! | `setup_start_screen`        | `OnEnter(Start)` *(overlay plugin)*    | Spawn title overlay                  |
//! | `setup_game_over`           | `OnEnter(GameOver)` *(overlay plugin)* | Spawn game-over card                 |
//!
//! [`GameFlowPlugin`] is headless and is part of the core; [`MenuOverlayPlugin`]
//! needs a loaded font and is only added by the windowed binary.

use crate::graphics::{GameAssets, GameFont};
use crate::player::{player_bundle, Player, PlayerIntent};
use crate::registry::{EntityRegistry, EntitySet};
use crate::TickSet;
use bevy::prelude::*;

mod cleanup;
mod common;
mod game_over;
mod start_screen;
mod types;

pub use cleanup::return_to_start;
pub use types::{GameOverRoot, GameState, SessionScore, StartScreenRoot};

use common::*;
use game_over::{cleanup_game_over, setup_game_over};
use start_screen::{cleanup_start_screen, setup_start_screen};

// ── Plugins ───────────────────────────────────────────────────────────────────

/// Registers `GameState`, the confirm-driven transitions and the run
/// setup/teardown hooks.
///
/// Must be added before any plugin that uses `in_state(GameState::..)`.
pub struct GameFlowPlugin;

impl Plugin for GameFlowPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SessionScore>()
            .add_systems(Update, confirm_transition_system.in_set(TickSet::Flow))
            .add_systems(OnEnter(GameState::Playing), begin_run)
            .add_systems(
                OnTransition {
                    exited: GameState::GameOver,
                    entered: GameState::Start,
                },
                return_to_start,
            );
    }
}

/// Spawns and tears down the start-screen and game-over overlays.
pub struct MenuOverlayPlugin;

impl Plugin for MenuOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Start), setup_start_screen)
            .add_systems(OnExit(GameState::Start), cleanup_start_screen)
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(OnExit(GameState::GameOver), cleanup_game_over);
    }
}

// ── Transitions ───────────────────────────────────────────────────────────────

/// Queue the state requested by a confirm press.
///
/// The queued state is applied by Bevy's `StateTransition` schedule at the
/// start of the next frame.
pub fn confirm_transition_system(
    intent: Res<PlayerIntent>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !intent.confirm {
        return;
    }
    if let Some(target) = state.get().on_confirm() {
        info!("[flow] {:?} -> {:?}", state.get(), target);
        next_state.set(target);
    }
}

/// `OnEnter(Playing)`: reset the world for a new run.
pub fn begin_run(
    mut registry: EntityRegistry,
    players: Query<Entity, With<Player>>,
    assets: Res<GameAssets>,
    time: Res<Time>,
    mut score: ResMut<SessionScore>,
) {
    registry.clear(EntitySet::Meteors);
    registry.clear(EntitySet::Lasers);
    for stale in players.iter() {
        registry.remove(stale);
    }

    registry.add(player_bundle(&assets));
    score.begin(time.elapsed());
    info!("[flow] run started at {:.2}s", time.elapsed_secs());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn confirm_cycles_start_playing_game_over() {
        assert_eq!(GameState::Start.on_confirm(), Some(GameState::Playing));
        assert_eq!(GameState::Playing.on_confirm(), None);
        assert_eq!(GameState::GameOver.on_confirm(), Some(GameState::Start));
    }

    #[test]
    fn score_counts_whole_ticks_since_begin() {
        let tick = Duration::from_millis(100);
        let mut score = SessionScore::default();
        score.begin(Duration::from_millis(1_250));

        assert_eq!(score.elapsed(Duration::from_millis(1_250), tick), 0);
        assert_eq!(score.elapsed(Duration::from_millis(1_349), tick), 0);
        assert_eq!(score.elapsed(Duration::from_millis(1_350), tick), 1);
        assert_eq!(score.elapsed(Duration::from_millis(4_299), tick), 30);
    }

    #[test]
    fn frozen_score_is_displayed_outside_playing() {
        let tick = Duration::from_millis(100);
        let mut score = SessionScore::default();
        score.begin(Duration::ZERO);
        assert_eq!(score.freeze(Duration::from_millis(2_000), tick), 20);

        let later = Duration::from_millis(9_000);
        assert_eq!(score.display(GameState::GameOver, later, tick), 20);
        assert_eq!(score.display(GameState::Start, later, tick), 20);
        assert_eq!(score.display(GameState::Playing, later, tick), 90);
    }

    #[test]
    fn begin_resets_final_score() {
        let mut score = SessionScore {
            started_at: Duration::ZERO,
            final_score: 42,
        };
        score.begin(Duration::from_secs(5));
        assert_eq!(score.final_score, 0);
        assert_eq!(score.started_at, Duration::from_secs(5));
    }
}
