use super::*;

/// Clear the previous run so the title screen starts from an empty field.
///
/// Runs on `OnTransition { GameOver → Start }`.  The frozen score is kept so
/// the readout keeps showing it until the next run begins.  Explosions still
/// playing are left alone.
pub fn return_to_start(mut registry: EntityRegistry, players: Query<Entity, With<Player>>) {
    let live = registry.len(EntitySet::All);
    let meteors = registry.len(EntitySet::Meteors);
    let lasers = registry.len(EntitySet::Lasers);
    registry.clear(EntitySet::Meteors);
    registry.clear(EntitySet::Lasers);
    for player in players.iter() {
        registry.remove(player);
    }
    info!("[flow] cleared {meteors} meteors and {lasers} lasers of {live} live entities");
}
