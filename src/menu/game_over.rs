use super::*;

/// Spawn the game-over card over the frozen world.
///
/// Shows the frozen score of the run that just ended and how to get back to
/// the title screen.
pub(super) fn setup_game_over(
    mut commands: Commands,
    score: Res<SessionScore>,
    font: Res<GameFont>,
) {
    commands
        .spawn((overlay_root(), GameOverRoot))
        .with_children(|root| {
            overlay_text(root, &font.0, "GAME OVER", HEADING_FONT_SIZE, game_over_color());
            spacer(root, 16.0);
            overlay_text(
                root,
                &font.0,
                format!("Score: {}", score.final_score),
                PROMPT_FONT_SIZE,
                prompt_color(),
            );
            spacer(root, 14.0);
            overlay_text(
                root,
                &font.0,
                "Press SPACE to continue",
                PROMPT_FONT_SIZE,
                prompt_color(),
            );
        });
}

/// Recursively despawn all game-over overlay entities.
pub(super) fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
