use super::*;

/// Spawn the title overlay.
///
/// Layout (centred over the background):
/// ```text
///            Alien Blaster
///
///         Press SPACE to start
/// ```
pub(super) fn setup_start_screen(mut commands: Commands, font: Res<GameFont>) {
    commands
        .spawn((overlay_root(), StartScreenRoot))
        .with_children(|root| {
            overlay_text(root, &font.0, "Alien Blaster", HEADING_FONT_SIZE, title_color());
            spacer(root, 20.0);
            overlay_text(
                root,
                &font.0,
                "Press SPACE to start",
                PROMPT_FONT_SIZE,
                prompt_color(),
            );
        });
}

/// Recursively despawn the title overlay.
pub(super) fn cleanup_start_screen(
    mut commands: Commands,
    query: Query<Entity, With<StartScreenRoot>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
