//! Asset handles, camera, background and collision-mask baking.
//!
//! | Item                       | Schedule                      | Purpose                                  |
//! |----------------------------|-------------------------------|------------------------------------------|
//! | [`GameAssets`]             | `FromWorld` at plugin build   | Sprite and explosion-frame handles       |
//! | [`GameFont`]               | `FromWorld` at plugin build   | Oxanium font used by every text node     |
//! | `setup_camera`             | `Startup`                     | `Camera2d`                               |
//! | `spawn_background`         | `Startup`                     | Full-window background sprite            |
//! | `bake_sprite_masks_system` | `Update` until masks exist    | Insert [`SpriteMasks`] once decoded      |
//!
//! Handles are requested while the plugin is built so the initial
//! `OnEnter(GameState::Start)` overlay, which runs before `Startup`, already
//! has its font.

use crate::collision::{CollisionMask, SpriteMasks};
use crate::config::GameConfig;
use crate::constants::{EXPLOSION_FRAME_COUNT, Z_BACKGROUND};
use bevy::prelude::*;

/// Sprite handles shared by every spawner.
#[derive(Resource, Debug, Clone)]
pub struct GameAssets {
    pub player: Handle<Image>,
    pub laser: Handle<Image>,
    pub meteor: Handle<Image>,
    pub background: Handle<Image>,
    /// Explosion flipbook, in playback order.
    pub explosion_frames: Vec<Handle<Image>>,
}

impl FromWorld for GameAssets {
    fn from_world(world: &mut World) -> Self {
        let server = world.resource::<AssetServer>();
        Self {
            player: server.load("Images/Player.png"),
            laser: server.load("Images/laser.png"),
            meteor: server.load("Images/meteor.png"),
            background: server.load("Images/background.png"),
            explosion_frames: (0..EXPLOSION_FRAME_COUNT)
                .map(|i| server.load(format!("Images/Explosions/{i}.png")))
                .collect(),
        }
    }
}

/// Game font resource — the loaded Oxanium handle.
///
/// All UI text references `font.0.clone()` instead of the default Bevy font.
#[derive(Resource, Debug, Clone)]
pub struct GameFont(pub Handle<Font>);

impl FromWorld for GameFont {
    fn from_world(world: &mut World) -> Self {
        Self(world.resource::<AssetServer>().load("fonts/Oxanium-Bold.ttf"))
    }
}

/// Loads and displays the sprites.  Requires `AssetPlugin`, so add it after
/// `DefaultPlugins`.
pub struct GraphicsPlugin;

impl Plugin for GraphicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameAssets>()
            .init_resource::<GameFont>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, (setup_camera, spawn_background))
            .add_systems(
                Update,
                bake_sprite_masks_system.run_if(not(resource_exists::<SpriteMasks>)),
            );
    }
}

/// Setup camera for 2D rendering.  The default projection maps one world
/// unit to one pixel with the origin at the window centre.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("[setup] camera spawned");
}

pub fn spawn_background(mut commands: Commands, assets: Res<GameAssets>, config: Res<GameConfig>) {
    let field = config.play_field();
    commands.spawn((
        Sprite {
            image: assets.background.clone(),
            custom_size: Some(Vec2::new(field.width, field.height)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, Z_BACKGROUND),
    ));
}

/// Build [`SpriteMasks`] as soon as the three collidable images are decoded.
///
/// Runs every frame until it succeeds.  An image that cannot be sampled is
/// replaced by its solid bounding box.
pub fn bake_sprite_masks_system(
    mut commands: Commands,
    images: Res<Assets<Image>>,
    assets: Res<GameAssets>,
    config: Res<GameConfig>,
) {
    let (Some(player), Some(laser), Some(meteor)) = (
        images.get(&assets.player),
        images.get(&assets.laser),
        images.get(&assets.meteor),
    ) else {
        return;
    };

    let threshold = config.mask_alpha_threshold;
    let bake = |image: &Image, context: &'static str| {
        CollisionMask::from_image(image, threshold, context).unwrap_or_else(|e| {
            error!("{e}; falling back to bounding-box collision");
            CollisionMask::solid(image.width(), image.height())
        })
    };

    let masks = SpriteMasks {
        player: bake(player, "player sprite"),
        laser: bake(laser, "laser sprite"),
        meteor: bake(meteor, "meteor sprite"),
    };
    info!(
        "[setup] collision masks baked (player {}px, laser {}px, meteor {}px solid)",
        masks.player.solid_count(),
        masks.laser.solid_count(),
        masks.meteor.solid_count()
    );
    commands.insert_resource(masks);
}
