//! Score readout.
//!
//! ## System Responsibilities
//!
//! | System                     | Schedule | Purpose                                   |
//! |----------------------------|----------|-------------------------------------------|
//! | `setup_hud_score`          | Startup  | Spawn the bordered readout at bottom centre |
//! | `hud_score_display_system` | Update   | Live score while playing, frozen otherwise |
//!
//! The start and game-over overlays live in [`crate::menu`].

use crate::config::GameConfig;
use crate::graphics::GameFont;
use crate::menu::{GameState, SessionScore};
use crate::TickSet;
use bevy::prelude::*;

/// Distance from the window bottom to the bottom of the score text (px).
const HUD_BOTTOM_OFFSET: f32 = 50.0;
const HUD_PADDING_X: f32 = 10.0;
const HUD_PADDING_Y: f32 = 15.0;
const HUD_BORDER: f32 = 5.0;
const HUD_RADIUS: f32 = 10.0;
const HUD_FONT_SIZE: f32 = 50.0;

// ── Component markers ─────────────────────────────────────────────────────────

/// Marker for the score text node.
#[derive(Component)]
pub struct HudScoreDisplay;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_hud_score).add_systems(
            Update,
            hud_score_display_system.after(TickSet::Collision),
        );
    }
}

// ── Startup: score HUD ────────────────────────────────────────────────────────

/// Spawn the permanent score readout.
///
/// A full-width row pinned to the bottom centres a white rounded frame; the
/// frame's padding puts the text's bottom edge `HUD_BOTTOM_OFFSET` above the
/// window bottom.
pub fn setup_hud_score(mut commands: Commands, font: Res<GameFont>) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            bottom: Val::Px(HUD_BOTTOM_OFFSET - HUD_PADDING_Y - HUD_BORDER),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Node {
                    padding: UiRect::axes(Val::Px(HUD_PADDING_X), Val::Px(HUD_PADDING_Y)),
                    border: UiRect::all(Val::Px(HUD_BORDER)),
                    ..default()
                },
                BorderColor::all(Color::WHITE),
                BorderRadius::all(Val::Px(HUD_RADIUS)),
            ))
            .with_children(|frame| {
                frame.spawn((
                    Text::new("0"),
                    TextFont {
                        font: font.0.clone(),
                        font_size: HUD_FONT_SIZE,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    HudScoreDisplay,
                ));
            });
        });
}

// ── Update: score HUD ─────────────────────────────────────────────────────────

/// Refresh the readout every frame.
pub fn hud_score_display_system(
    score: Res<SessionScore>,
    state: Res<State<GameState>>,
    config: Res<GameConfig>,
    time: Res<Time>,
    mut text_query: Query<&mut Text, With<HudScoreDisplay>>,
) {
    let shown = score.display(*state.get(), time.elapsed(), config.score_tick());
    for mut text in text_query.iter_mut() {
        let rendered = shown.to_string();
        if text.0 != rendered {
            *text = Text::new(rendered);
        }
    }
}
