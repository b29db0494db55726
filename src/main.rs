use alien_blaster::audio::SoundPlugin;
use alien_blaster::config::{load_game_config, CONFIG_PATH};
use alien_blaster::graphics::GraphicsPlugin;
use alien_blaster::menu::MenuOverlayPlugin;
use alien_blaster::player::ControlsPlugin;
use alien_blaster::rendering::HudPlugin;
use alien_blaster::AlienBlasterPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::path::Path;

fn main() {
    // The window size comes from the config, so it is read before the app exists.
    let config = load_game_config(Path::new(CONFIG_PATH));

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window_title.clone(),
                resolution: WindowResolution::new(
                    config.window_width as u32,
                    config.window_height as u32,
                ),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(config)
        .add_plugins((
            GraphicsPlugin,
            AlienBlasterPlugin,
            ControlsPlugin,
            SoundPlugin,
            HudPlugin,
            MenuOverlayPlugin,
        ))
        .run();
}
