use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

pub(super) fn title_color() -> Color {
    Color::WHITE
}
pub(super) fn prompt_color() -> Color {
    Color::WHITE
}
pub(super) fn game_over_color() -> Color {
    Color::srgb(1.0, 0.0, 0.0)
}

/// Heading size used for the title and "GAME OVER".
pub(super) const HEADING_FONT_SIZE: f32 = 50.0;
/// Size of prompts and the final score line.
pub(super) const PROMPT_FONT_SIZE: f32 = 30.0;

/// Full-window transparent column that centres its children.
pub(super) fn overlay_root() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        flex_direction: FlexDirection::Column,
        position_type: PositionType::Absolute,
        left: Val::Px(0.0),
        top: Val::Px(0.0),
        ..default()
    }
}

/// Spawn a fixed-height invisible spacer node.
pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

pub(super) fn overlay_text(
    parent: &mut ChildSpawnerCommands<'_>,
    font: &Handle<Font>,
    text: impl Into<String>,
    size: f32,
    color: Color,
) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font: font.clone(),
            font_size: size,
            ..default()
        },
        TextColor(color),
    ));
}
