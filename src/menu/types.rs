use bevy::prelude::*;
use std::time::Duration;

/// Top-level game state machine.
///
/// ```text
/// Start ──confirm──▶ Playing ──ship destroyed──▶ GameOver ──confirm──▶ Start
/// ```
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Title overlay; nothing moves.
    #[default]
    Start,
    /// Active run; entities update and collide.
    Playing,
    /// Ship destroyed; world frozen under the game-over card.
    GameOver,
}

impl GameState {
    /// State requested by a confirm press, or `None` when confirm is ignored.
    ///
    /// `Playing` is only ever left through a collision, and `GameOver` never
    /// jumps straight back into a run.
    pub fn on_confirm(self) -> Option<GameState> {
        match self {
            GameState::Start => Some(GameState::Playing),
            GameState::Playing => None,
            GameState::GameOver => Some(GameState::Start),
        }
    }
}

/// Score baseline for the current run.
///
/// While playing, the score is derived from elapsed game time; it is frozen
/// into `final_score` when the ship is destroyed.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionScore {
    /// Game-clock timestamp of the last `Playing` entry.
    pub started_at: Duration,
    pub final_score: u32,
}

impl SessionScore {
    pub fn begin(&mut self, now: Duration) {
        self.started_at = now;
        self.final_score = 0;
    }

    /// Whole `tick`s survived since the run began.
    pub fn elapsed(&self, now: Duration, tick: Duration) -> u32 {
        let survived = now.saturating_sub(self.started_at).as_millis();
        (survived / tick.as_millis().max(1)) as u32
    }

    /// Freeze the current elapsed score and return it.
    pub fn freeze(&mut self, now: Duration, tick: Duration) -> u32 {
        self.final_score = self.elapsed(now, tick);
        self.final_score
    }

    /// Value shown by the score readout: live while playing, frozen otherwise.
    pub fn display(&self, state: GameState, now: Duration, tick: Duration) -> u32 {
        match state {
            GameState::Playing => self.elapsed(now, tick),
            GameState::Start | GameState::GameOver => self.final_score,
        }
    }
}

/// Root node of the start-screen overlay; despawned on `OnExit(Start)`.
#[derive(Component)]
pub struct StartScreenRoot;

/// Root node of the game-over overlay; despawned on `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;
