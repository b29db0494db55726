//! Sound cues and background music.
//!
//! Gameplay systems never touch audio directly: they write a [`PlaySound`]
//! message and [`SoundPlugin`] turns each one into a short-lived
//! `AudioPlayer` entity.  The core registers the message, so headless runs
//! (tests) simply let the messages expire.

use crate::config::GameConfig;
use bevy::audio::Volume;
use bevy::prelude::*;

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    LaserFire,
    Explosion,
    ShipDamage,
}

/// Request to play `0` once.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySound(pub SoundCue);

/// Loaded audio handles.
#[derive(Resource, Debug, Clone, Default)]
pub struct SoundAssets {
    pub laser: Handle<AudioSource>,
    pub explosion: Handle<AudioSource>,
    pub damage: Handle<AudioSource>,
    pub music: Handle<AudioSource>,
}

impl SoundAssets {
    pub fn cue(&self, cue: SoundCue) -> Handle<AudioSource> {
        match cue {
            SoundCue::LaserFire => self.laser.clone(),
            SoundCue::Explosion => self.explosion.clone(),
            SoundCue::ShipDamage => self.damage.clone(),
        }
    }
}

/// Loads the sound files, starts the music loop and plays cues.
pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (load_sound_assets, start_background_music).chain(),
        )
        .add_systems(Update, play_sound_cues.after(crate::TickSet::Collision));
    }
}

pub fn load_sound_assets(mut commands: Commands, server: Res<AssetServer>) {
    commands.insert_resource(SoundAssets {
        laser: server.load("audio/laser.wav"),
        explosion: server.load("audio/explosion.wav"),
        damage: server.load("audio/damage.ogg"),
        music: server.load("audio/game_music.wav"),
    });
}

/// Loop the background track for the lifetime of the app, in every state.
pub fn start_background_music(
    mut commands: Commands,
    sounds: Res<SoundAssets>,
    config: Res<GameConfig>,
) {
    commands.spawn((
        AudioPlayer::new(sounds.music.clone()),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(config.music_volume)),
    ));
    info!("[audio] background music started");
}

/// Spawn a self-despawning player for every queued cue.
pub fn play_sound_cues(
    mut commands: Commands,
    mut requests: MessageReader<PlaySound>,
    sounds: Res<SoundAssets>,
) {
    for PlaySound(cue) in requests.read() {
        commands.spawn((
            AudioPlayer::new(sounds.cue(*cue)),
            PlaybackSettings::DESPAWN,
        ));
    }
}
